use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Body of the current site location.
pub struct Page<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub location: &'a str,
    pub href: Option<&'a str>,
    pub demo_running: bool,
}

impl Widget for Page<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border)
            .style(self.theme.page);

        let mut lines = vec![
            Line::from(Span::styled(self.title, self.theme.page_title)),
            Line::default(),
            Line::from(vec![
                Span::raw("Location: "),
                Span::styled(self.location, self.theme.link),
            ]),
        ];
        if let Some(href) = self.href {
            lines.push(Line::from(vec![
                Span::raw("Followed link: "),
                Span::styled(href, self.theme.link),
            ]));
        }
        if self.demo_running {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                " LIVE DEMO RUNNING ",
                self.theme.header_active,
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press ctrl+k or / to open the command menu.",
            self.theme.dimmed,
        )));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
