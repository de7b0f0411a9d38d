use std::collections::HashSet;
use thiserror::Error;

/// Where a command leads: a location to navigate to, or a named action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Navigate { destination: String },
    Action { action_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: String,
    pub label: String,
    keywords: Vec<String>,
    // Space-joined keywords, matched as a whole
    keyword_text: String,
    pub target: Target,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        keywords: &[&str],
        target: Target,
    ) -> Self {
        let mut seen = HashSet::new();
        let keywords: Vec<String> = keywords
            .iter()
            .flat_map(|k| k.split_whitespace())
            .map(str::to_lowercase)
            .filter(|k| seen.insert(k.clone()))
            .collect();
        let keyword_text = keywords.join(" ");

        Self {
            id: id.into(),
            label: label.into(),
            keywords,
            keyword_text,
            target,
        }
    }

    pub fn navigation(
        id: impl Into<String>,
        label: impl Into<String>,
        keywords: &[&str],
        destination: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            label,
            keywords,
            Target::Navigate {
                destination: destination.into(),
            },
        )
    }

    pub fn action(
        id: impl Into<String>,
        label: impl Into<String>,
        keywords: &[&str],
        action_id: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            label,
            keywords,
            Target::Action {
                action_id: action_id.into(),
            },
        )
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn keyword_text(&self) -> &str {
        &self.keyword_text
    }

    /// First keyword, shown next to the label as a hint.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate command id `{0}`")]
    DuplicateId(String),
    #[error("command labelled `{0}` has an empty id")]
    EmptyId(String),
    #[error("command `{0}` needs either a destination or an action")]
    MissingTarget(String),
    #[error("command `{0}` has both a destination and an action")]
    AmbiguousTarget(String),
}

/// Ordered, immutable set of commands. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    commands: Vec<Command>,
}

impl Registry {
    pub fn new(commands: Vec<Command>) -> Result<Self, RegistryError> {
        let mut ids = HashSet::new();
        for cmd in &commands {
            if cmd.id.trim().is_empty() {
                return Err(RegistryError::EmptyId(cmd.label.clone()));
            }
            if !ids.insert(cmd.id.as_str()) {
                return Err(RegistryError::DuplicateId(cmd.id.clone()));
            }
        }
        Ok(Self { commands })
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
