use crate::domain::models::{Command, Registry, RegistryError};

#[must_use]
pub fn default_commands() -> Vec<Command> {
    vec![
        Command::navigation("home", "Go Home", &["index", "main", "landing"], "/"),
        Command::navigation(
            "pricing",
            "View Pricing",
            &["cost", "plans", "pro", "enterprise"],
            "/pages/pricing.html",
        ),
        Command::navigation(
            "games",
            "Games Lab",
            &["supported", "profiles", "valorant", "apex"],
            "/pages/games.html",
        ),
        Command::navigation(
            "docs",
            "Documentation",
            &["help", "how", "it", "works", "manual"],
            "/pages/how-it-works.html",
        ),
        Command::navigation(
            "download",
            "Download PulseBoost",
            &["installer", "windows", "get"],
            "/pages/download.html",
        ),
        Command::navigation(
            "contact",
            "Contact Support",
            &["email", "help", "bugs"],
            "/pages/contact.html",
        ),
        Command::navigation(
            "security",
            "Security Center",
            &["trust", "safety", "whitepaper"],
            "/pages/security.html",
        ),
        Command::navigation("privacy", "Privacy Policy", &["data", "legal"], "/pages/privacy.html"),
        Command::navigation("terms", "Terms of Service", &["legal", "tos"], "/pages/terms.html"),
        Command::navigation(
            "changelog",
            "Changelog",
            &["updates", "versions", "news"],
            "/pages/changelog.html",
        ),
        Command::action("theme", "Toggle Theme", &["dark", "light", "mode"], "toggleTheme"),
        Command::action("demo", "Run Live Demo", &["simulate", "matrix"], "runDemo"),
        Command::action("quit", "Quit", &["exit", "close"], "quit"),
    ]
}

pub fn default_registry() -> Result<Registry, RegistryError> {
    Registry::new(default_commands())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matcher::filter;

    #[test]
    fn test_default_registry_is_valid() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.commands()[0].id, "home");
    }

    #[test]
    fn test_help_matches_docs_and_contact() {
        let registry = default_registry().unwrap();
        let ids: Vec<_> = filter(&registry, "help")
            .into_iter()
            .map(|i| registry.commands()[i].id.as_str())
            .collect();
        assert_eq!(ids, vec!["docs", "contact"]);
    }

    #[test]
    fn test_legal_keeps_registry_order() {
        let registry = default_registry().unwrap();
        let ids: Vec<_> = filter(&registry, "legal")
            .into_iter()
            .map(|i| registry.commands()[i].id.as_str())
            .collect();
        assert_eq!(ids, vec!["privacy", "terms"]);
    }
}
