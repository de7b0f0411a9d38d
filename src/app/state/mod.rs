use super::keymap::{KeyConfig, KeyMap};
use crate::theme::{Theme, ThemeMode};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub mod error;

pub use error::{ErrorSeverity, ErrorState};

pub const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub should_quit: bool,

    // --- Site ---
    pub location: String,
    pub last_href: Option<String>,
    pub demo_running: bool,

    // --- Status ---
    pub status_message: Option<String>,
    pub status_set_at: Option<Instant>,
    pub last_error: Option<ErrorState>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    // None disables saving (tests, read-only setups)
    pub preferences_path: Option<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(keys: &KeyConfig, location: String, preferences_path: Option<PathBuf>) -> Self {
        let theme_mode = preferences_path
            .as_deref()
            .map(super::persistence::load_preferences_from)
            .unwrap_or_default()
            .theme;

        Self {
            keymap: Arc::new(KeyMap::from_config(keys)),
            location,
            theme_mode,
            theme: Theme::from_mode(theme_mode),
            preferences_path,
            ..Default::default()
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    pub fn report_error(&mut self, message: impl Into<String>, severity: ErrorSeverity) {
        self.last_error = Some(ErrorState::new(message, severity));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            location: "/".to_string(),
            last_href: None,
            demo_running: false,
            status_message: None,
            status_set_at: None,
            last_error: None,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme_mode: ThemeMode::Dark,
            theme: Theme::default(),
            preferences_path: None,
        }
    }
}
