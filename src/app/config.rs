use super::keymap::KeyConfig;
use crate::domain::models::{Command, Registry, RegistryError, Target};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub keys: KeyConfig,
    pub start_location: Option<String>,
    // Replaces the built-in commands when non-empty
    pub commands: Vec<CommandEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandEntry {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub destination: Option<String>,
    pub action: Option<String>,
}

impl TryFrom<CommandEntry> for Command {
    type Error = RegistryError;

    fn try_from(entry: CommandEntry) -> Result<Self, Self::Error> {
        let target = match (entry.destination, entry.action) {
            (Some(destination), None) => Target::Navigate { destination },
            (None, Some(action_id)) => Target::Action { action_id },
            (None, None) => return Err(RegistryError::MissingTarget(entry.id)),
            (Some(_), Some(_)) => return Err(RegistryError::AmbiguousTarget(entry.id)),
        };
        let keywords: Vec<&str> = entry.keywords.iter().map(String::as_str).collect();
        Ok(Command::new(entry.id, entry.label, &keywords, target))
    }
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        super::persistence::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// A missing file means defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn registry(&self) -> Result<Registry, RegistryError> {
        if self.commands.is_empty() {
            return super::registry::default_registry();
        }
        let commands = self
            .commands
            .iter()
            .cloned()
            .map(Command::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Registry::new(commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.registry().unwrap().len(), 13);
    }

    #[test]
    fn test_custom_commands_and_keys() {
        let (_dir, path) = write_config(
            r#"
start_location = "/pages/pricing.html"

[keys]
open = ["ctrl+p"]

[[commands]]
id = "blog"
label = "Read the Blog"
keywords = ["posts", "Articles"]
destination = "/pages/blog.html"

[[commands]]
id = "theme"
label = "Toggle Theme"
action = "toggleTheme"
"#,
        );
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.keys.open, vec!["ctrl+p".to_string()]);
        assert_eq!(config.keys.quit, KeyConfig::default().quit);
        assert_eq!(config.start_location.as_deref(), Some("/pages/pricing.html"));

        let registry = config.registry().unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.commands()[0].keyword_text(), "posts articles");
        assert_eq!(
            registry.commands()[1].target,
            Target::Action {
                action_id: "toggleTheme".to_string()
            }
        );
    }

    #[test]
    fn test_command_needs_exactly_one_target() {
        let (_dir, path) = write_config(
            r#"
[[commands]]
id = "both"
label = "Both"
destination = "/"
action = "quit"
"#,
        );
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(
            config.registry(),
            Err(RegistryError::AmbiguousTarget("both".to_string()))
        );

        let (_dir, path) = write_config("[[commands]]\nid = \"none\"\nlabel = \"None\"\n");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(
            config.registry(),
            Err(RegistryError::MissingTarget("none".to_string()))
        );
    }

    #[test]
    fn test_duplicate_ids_in_config_fail() {
        let (_dir, path) = write_config(
            r#"
[[commands]]
id = "a"
label = "A"
destination = "/a"

[[commands]]
id = "a"
label = "Another A"
destination = "/b"
"#,
        );
        let config = AppConfig::load_from(&path).unwrap();
        assert!(matches!(config.registry(), Err(RegistryError::DuplicateId(_))));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let (_dir, path) = write_config("commands = 3");
        assert!(AppConfig::load_from(&path).is_err());
    }
}
