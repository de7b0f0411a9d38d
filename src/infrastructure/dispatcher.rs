use super::send_feedback;
use crate::app::action::Action;
use crate::domain::{
    models::{Registry, Target},
    ports::ActionDispatcher,
};
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Maps action ids to app actions and forwards them to the event loop.
pub struct ActionTable {
    handlers: HashMap<String, Action>,
    tx: mpsc::Sender<Action>,
}

impl ActionTable {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self {
            handlers: HashMap::new(),
            tx,
        }
    }

    pub fn with_defaults(tx: mpsc::Sender<Action>) -> Self {
        Self::new(tx)
            .register("toggleTheme", Action::ToggleTheme)
            .register("runDemo", Action::RunDemo)
            .register("quit", Action::Quit)
    }

    #[must_use]
    pub fn register(mut self, id: impl Into<String>, action: Action) -> Self {
        self.handlers.insert(id.into(), action);
        self
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// Action ids referenced by `registry` that this table cannot handle.
    pub fn unknown_ids<'a>(&self, registry: &'a Registry) -> Vec<&'a str> {
        registry
            .commands()
            .iter()
            .filter_map(|cmd| match &cmd.target {
                Target::Action { action_id } if !self.contains(action_id) => {
                    Some(action_id.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

impl ActionDispatcher for ActionTable {
    fn dispatch(&mut self, action_id: &str) {
        match self.handlers.get(action_id) {
            Some(action) => {
                tracing::debug!(%action_id, "dispatching action");
                send_feedback(&self.tx, action.clone());
            }
            None => {
                tracing::warn!(%action_id, "unknown action");
                send_feedback(
                    &self.tx,
                    Action::ErrorOccurred(format!("Unknown action: {action_id}")),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Command;

    #[test]
    fn test_known_action_is_forwarded() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut table = ActionTable::with_defaults(tx);
        table.dispatch("toggleTheme");
        assert_eq!(rx.try_recv().ok(), Some(Action::ToggleTheme));
    }

    #[test]
    fn test_unknown_action_is_reported() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut table = ActionTable::with_defaults(tx);
        table.dispatch("ToggleTheme");
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::ErrorOccurred("Unknown action: ToggleTheme".to_string()))
        );
    }

    #[test]
    fn test_register_custom() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut table = ActionTable::new(tx).register("bye", Action::Quit);
        assert!(table.contains("bye"));
        assert!(!table.contains("runDemo"));
        table.dispatch("bye");
        assert_eq!(rx.try_recv().ok(), Some(Action::Quit));
    }

    #[test]
    fn test_unknown_ids_in_registry() {
        let (tx, _rx) = mpsc::channel(4);
        let table = ActionTable::with_defaults(tx);
        let registry = Registry::new(vec![
            Command::navigation("home", "Go Home", &[], "/"),
            Command::action("theme", "Toggle Theme", &[], "toggleTheme"),
            Command::action("party", "Party", &[], "confetti"),
        ])
        .unwrap();
        assert_eq!(table.unknown_ids(&registry), vec!["confetti"]);
    }

    #[test]
    fn test_default_registry_is_fully_handled() {
        let (tx, _rx) = mpsc::channel(4);
        let table = ActionTable::with_defaults(tx);
        let registry = crate::app::registry::default_registry().unwrap();
        assert!(table.unknown_ids(&registry).is_empty());
    }
}
