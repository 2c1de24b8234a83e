use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{reader::Paginator, util::colors};

/// Bottom bar of the reader: the contents button, the centered
/// "current / total" label, and prev/next dimmed at their edges.
pub struct Navbar {
    label: String,
    prev_enabled: bool,
    next_enabled: bool,
}

impl Navbar {
    pub fn new(reader: &Paginator) -> Self {
        Self {
            label: reader.page_label(),
            prev_enabled: reader.prev_enabled(),
            next_enabled: reader.next_enabled(),
        }
    }
}

impl Widget for Navbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(18),
                Constraint::Min(1),
                Constraint::Length(18),
            ])
            .split(inner);

        let enabled = Style::new().fg(colors::PRIMARY);
        let disabled = Style::new().fg(colors::NEUTRAL).add_modifier(Modifier::DIM);

        let contents = Paragraph::new(Line::from(vec![
            Span::styled(" \u{2302} contents", enabled),
            Span::styled(" [t]", Style::new().fg(colors::NEUTRAL)),
        ]));
        contents.render(chunks[0], buf);

        let label = Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(Style::new().fg(colors::ACCENT));
        label.render(chunks[1], buf);

        let nav = Paragraph::new(Line::from(vec![
            Span::styled(
                "\u{2190} prev",
                if self.prev_enabled { enabled } else { disabled },
            ),
            Span::raw("  "),
            Span::styled(
                "next \u{2192}",
                if self.next_enabled { enabled } else { disabled },
            ),
            Span::raw(" "),
        ]))
        .alignment(Alignment::Right);
        nav.render(chunks[2], buf);
    }
}
