use crate::domain::models::Command;

/// Whatever displays the menu. Receives the visible list and highlight changes.
pub trait MenuSurface {
    fn set_visible(&mut self, visible: bool);

    // Full list replaced (item count may have changed)
    fn render_items(&mut self, items: &[&Command], selected: Option<usize>);

    fn highlight(&mut self, index: usize);

    fn show_no_results(&mut self);
}

#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    // Destination is passed exactly as registered
    fn navigate(&mut self, destination: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait ActionDispatcher {
    // Fire-and-forget; unknown ids are the dispatcher's problem
    fn dispatch(&mut self, action_id: &str);
}
