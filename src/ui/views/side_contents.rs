use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::{
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
        util::active_entry_marker,
    },
    util::colors,
};

pub const SIDE_PANEL_WIDTH: u16 = 34;

/// Side panel listing every poem while the reader stays visible behind it.
/// Exactly one entry is marked active: the poem currently on the page.
pub struct SideContents {
    list_state: ListState,
}

impl SideContents {
    pub fn new(active: Option<usize>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(active.unwrap_or(0)));
        Self { list_state }
    }
}

#[async_trait]
impl View for SideContents {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let width = SIDE_PANEL_WIDTH.min(area.width);
        let panel = Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height: area.height,
        };
        f.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL))
            .title(" contents ")
            .title_alignment(Alignment::Center)
            .style(Style::new().bg(colors::BACKGROUND));
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        let [home_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let home = Paragraph::new(Line::from(vec![
            Span::styled("\u{2302} ", Style::new().fg(colors::PRIMARY)),
            Span::styled("back to contents", Style::new().fg(colors::NEUTRAL)),
        ]));
        f.render_widget(home, home_area);

        let active = ctx.reader.active_contents_entry();
        let items: Vec<ListItem> = ctx
            .collection
            .titles()
            .enumerate()
            .map(|(i, title)| {
                let is_active = Some(i) == active;
                let prefix = if is_active {
                    format!("{} ", active_entry_marker(true))
                } else {
                    "  ".to_string()
                };

                let mut item = ListItem::new(format!("{prefix}{title}"));
                if is_active {
                    item = item.style(
                        Style::new()
                            .fg(colors::SECONDARY)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                item
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::new()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, list_area, &mut self.list_state);

        let help = Paragraph::new("\u{23ce} open \u{00b7} h home \u{00b7} esc close")
            .style(Style::new().fg(colors::NEUTRAL))
            .alignment(Alignment::Center);
        f.render_widget(help, help_area);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let len = ctx.collection.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1, len);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1, len);
                None
            }
            KeyCode::Char('g') => {
                self.list_state.select(Some(0));
                None
            }
            KeyCode::Char('G') => {
                self.list_state.select(Some(len.saturating_sub(1)));
                None
            }
            KeyCode::Enter => self.list_state.selected().map(Action::OpenPoem),
            KeyCode::Esc | KeyCode::Char('t') => Some(Action::CloseSideContents),
            KeyCode::Char('h') => Some(Action::GoHome),
            _ => None,
        }
    }
}

impl SideContents {
    fn move_selection(&mut self, delta: i64, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1);
        self.list_state.select(Some(next as usize));
    }
}
