use crate::app::{action::Action, menu::Direction, state::AppState};
use crate::components::{modals::PaletteLayout, palette_view::PaletteView};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

/// What the input adapter needs to know about the menu to translate events.
pub struct MenuContext<'a> {
    pub is_open: bool,
    pub query: &'a str,
    pub view: &'a PaletteView,
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    menu: &MenuContext<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if menu.is_open {
                map_menu_key(key, app_state, menu)
            } else {
                app_state.keymap.get_action(key, false)
            }
        }
        Event::Mouse(mouse) if menu.is_open => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let layout = PaletteLayout::compute(area);
            let item = layout
                .list_row(mouse.column, mouse.row)
                .and_then(|row| menu.view.item_at_row(row));

            match mouse.kind {
                MouseEventKind::Moved => item.map(Action::HoverItem),
                MouseEventKind::Down(MouseButton::Left) => match item {
                    Some(i) => Some(Action::ExecuteItem(i)),
                    None if !layout.in_modal(mouse.column, mouse.row) => Some(Action::CloseMenu),
                    None => None,
                },
                MouseEventKind::ScrollDown => Some(Action::MoveSelection(Direction::Next)),
                MouseEventKind::ScrollUp => Some(Action::MoveSelection(Direction::Prev)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn map_menu_key(key: KeyEvent, app_state: &AppState, menu: &MenuContext<'_>) -> Option<Action> {
    if let Some(action) = app_state.keymap.get_action(key, true) {
        return Some(action);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::CloseMenu),
        KeyCode::Enter => Some(Action::ExecuteSelected),
        KeyCode::Down | KeyCode::Tab => Some(Action::MoveSelection(Direction::Next)),
        KeyCode::Up | KeyCode::BackTab => Some(Action::MoveSelection(Direction::Prev)),
        KeyCode::Char('n') if ctrl => Some(Action::MoveSelection(Direction::Next)),
        KeyCode::Char('p') if ctrl => Some(Action::MoveSelection(Direction::Prev)),
        KeyCode::Char('u') if ctrl => Some(Action::SetQuery(String::new())),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut query = menu.query.to_string();
            query.push(c);
            Some(Action::SetQuery(query))
        }
        KeyCode::Backspace => {
            let mut query = menu.query.to_string();
            query.pop()?;
            Some(Action::SetQuery(query))
        }
        _ => None,
    }
}
