use crate::app::menu::CommandMenu;
use crate::app::state::{AppState, ErrorSeverity, ErrorState};
use crate::components::{
    modals::{CommandPaletteModal, PaletteLayout},
    page::Page,
    palette_view::PaletteView,
};
use crate::domain::{
    models::Target,
    ports::{ActionDispatcher, MenuSurface, Navigator},
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw<N, A>(f: &mut Frame, app_state: &AppState, menu: &mut CommandMenu<PaletteView, N, A>)
where
    N: Navigator,
    A: ActionDispatcher,
{
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }
    let theme = &app_state.theme;
    let layout = get_layout(f.area());

    // --- Header ---
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" CMDK ", theme.header_logo),
        Span::styled(format!(" {} ", app_state.location), theme.header_location),
        Span::styled(format!(" {} ", app_state.theme_mode.label()), theme.header),
    ]))
    .style(theme.header);
    f.render_widget(header, layout.header);

    // --- Body ---
    let title = page_title(menu, &app_state.location);
    f.render_widget(
        Page {
            theme,
            title: &title,
            location: &app_state.location,
            href: app_state.last_href.as_deref(),
            demo_running: app_state.demo_running,
        },
        layout.body,
    );

    // --- Footer ---
    let status = if let Some(err) = &app_state.last_error {
        let style = match err.severity {
            ErrorSeverity::Warning => theme.status_warn,
            ErrorSeverity::Error => theme.status_error,
        };
        Span::styled(error_text(err), style)
    } else if let Some(msg) = &app_state.status_message {
        Span::styled(format!(" {msg} "), theme.status_info)
    } else {
        Span::raw("")
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" ctrl+k ", theme.footer_segment_key),
        Span::styled(" menu ", theme.footer_segment_val),
        Span::styled(" t ", theme.footer_segment_key),
        Span::styled(" theme ", theme.footer_segment_val),
        Span::styled(" q ", theme.footer_segment_key),
        Span::styled(" quit ", theme.footer_segment_val),
        Span::raw(" "),
        status,
    ]))
    .style(theme.footer);
    f.render_widget(footer, layout.footer);

    // --- Command Menu ---
    if menu.surface().visible {
        let palette = PaletteLayout::compute(f.area());
        let query = menu.query().to_string();
        let view = menu.surface_mut();
        view.scroll_to_highlight(palette.list.height as usize);
        f.render_widget(
            CommandPaletteModal {
                theme,
                view,
                query: &query,
            },
            f.area(),
        );
    }
}

// Label of the navigation command pointing here, else the raw location
fn page_title<S, N, A>(menu: &CommandMenu<S, N, A>, location: &str) -> String
where
    S: MenuSurface,
    N: Navigator,
    A: ActionDispatcher,
{
    menu.registry()
        .commands()
        .iter()
        .find(|cmd| matches!(&cmd.target, Target::Navigate { destination } if destination == location))
        .map_or_else(|| location.to_string(), |cmd| cmd.label.clone())
}

fn error_text(err: &ErrorState) -> String {
    format!(" {} {} ", err.timestamp.format("%H:%M:%S"), err.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::registry::default_registry;
    use crate::infrastructure::{dispatcher::ActionTable, navigator::SiteNavigator};
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    fn footer_text(app_state: &AppState) -> String {
        let (tx, _rx) = mpsc::channel(4);
        let mut menu = CommandMenu::new(
            default_registry().unwrap(),
            PaletteView::default(),
            SiteNavigator::new("/", tx.clone()),
            ActionTable::with_defaults(tx),
        );
        let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
        terminal.draw(|f| draw(f, app_state, &mut menu)).unwrap();

        let buf = terminal.backend().buffer();
        let y = buf.area.height - 1;
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_footer_shows_error_with_time() {
        let mut app_state = AppState::default();
        app_state.report_error("Unknown action: nope", ErrorSeverity::Error);
        let stamp = app_state
            .last_error
            .as_ref()
            .map(|e| e.timestamp.format("%H:%M:%S").to_string())
            .unwrap();

        let footer = footer_text(&app_state);
        assert!(footer.contains(&format!("{stamp} Unknown action: nope")));
    }

    #[test]
    fn test_footer_shows_status_without_error() {
        let mut app_state = AppState::default();
        app_state.set_status("Theme: light");
        assert!(footer_text(&app_state).contains("Theme: light"));
    }

    #[test]
    fn test_page_title_uses_matching_command() {
        let (tx, _rx) = mpsc::channel(4);
        let menu = CommandMenu::new(
            default_registry().unwrap(),
            PaletteView::default(),
            SiteNavigator::new("/", tx.clone()),
            ActionTable::with_defaults(tx),
        );
        assert_eq!(page_title(&menu, "/pages/pricing.html"), "View Pricing");
        assert_eq!(page_title(&menu, "/nowhere.html"), "/nowhere.html");
    }
}
