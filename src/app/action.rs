use crate::app::menu::Direction;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Command Menu ---
    OpenMenu,                      // Global shortcut (ctrl+k, /)
    CloseMenu,                     // Esc or backdrop click
    SetQuery(String),              // Full text of the query input
    MoveSelection(Direction),      // Arrow keys
    HoverItem(usize),              // Pointer over a rendered row
    ExecuteSelected,               // Enter
    ExecuteItem(usize),            // Click on a rendered row

    // --- Site ---
    ToggleTheme,
    RunDemo,

    // --- Feedback from collaborators ---
    Navigated { location: String, href: String },
    ErrorOccurred(String),
}
