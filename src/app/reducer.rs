use super::{
    action::Action,
    menu::CommandMenu,
    persistence::{save_preferences_to, Preferences},
    state::{AppState, ErrorSeverity, STATUS_TTL},
};
use crate::domain::ports::{ActionDispatcher, MenuSurface, Navigator};
use crate::theme::Theme;

pub fn update<S, N, A>(state: &mut AppState, menu: &mut CommandMenu<S, N, A>, action: Action)
where
    S: MenuSurface,
    N: Navigator,
    A: ActionDispatcher,
{
    match action {
        Action::Tick => {
            if state
                .status_set_at
                .is_some_and(|at| at.elapsed() >= STATUS_TTL)
            {
                state.status_message = None;
                state.status_set_at = None;
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Command Menu ---
        Action::OpenMenu => {
            state.last_error = None;
            menu.open();
        }
        Action::CloseMenu => menu.close(),
        Action::SetQuery(query) => menu.set_query(&query),
        Action::MoveSelection(direction) => menu.move_selection(direction),
        Action::HoverItem(index) => menu.hover(index),
        Action::ExecuteSelected => menu.execute(),
        Action::ExecuteItem(index) => menu.execute_index(index),

        // --- Site ---
        Action::ToggleTheme => toggle_theme(state),
        Action::RunDemo => {
            state.demo_running = true;
            state.set_status("Live demo started");
        }

        // --- Feedback ---
        Action::Navigated { location, href } => {
            state.location = location;
            state.set_status(format!("Opened {href}"));
            state.last_href = Some(href);
            state.demo_running = false;
        }
        Action::ErrorOccurred(message) => {
            state.report_error(message, ErrorSeverity::Error);
        }
    }
}

fn toggle_theme(state: &mut AppState) {
    state.theme_mode = state.theme_mode.toggled();
    state.theme = Theme::from_mode(state.theme_mode);
    state.set_status(format!("Theme: {}", state.theme_mode.label()));

    let Some(path) = state.preferences_path.clone() else {
        return;
    };
    let prefs = Preferences {
        theme: state.theme_mode,
    };
    if let Err(err) = save_preferences_to(&path, &prefs) {
        tracing::warn!(error = %format!("{err:#}"), "failed to save preferences");
        state.report_error(
            format!("Could not save theme: {err}"),
            ErrorSeverity::Warning,
        );
    }
}
