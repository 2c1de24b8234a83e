use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    event::events::Event,
    reader::ViewMode,
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// Listing rows still hidden below the viewport at which the bottom counts
/// as "near", revealing the download affordance.
const DOWNLOAD_REVEAL_ROWS: usize = 3;

pub struct ContentsView {
    list_state: ListState,
}

impl Default for ContentsView {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }
}

#[async_trait]
impl View for ContentsView {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let [header_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let header = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                "s t a n z a",
                Style::new()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled("a quiet shelf of poems", Style::new().fg(colors::NEUTRAL)),
        ])
        .alignment(Alignment::Center);
        f.render_widget(header, header_area);

        let active = ctx.reader.active_contents_entry();
        let items: Vec<ListItem> = ctx
            .collection
            .titles()
            .enumerate()
            .map(|(i, title)| {
                let is_active = Some(i) == active;
                let author = ctx
                    .collection
                    .get(i)
                    .and_then(|poem| poem.author.as_deref());

                let mut spans = vec![
                    Span::raw(format!("{:>3}  ", i + 1)),
                    Span::raw(title.to_string()),
                ];
                if let Some(author) = author {
                    spans.push(Span::styled(
                        format!("  \u{2014} {author}"),
                        Style::new().fg(colors::NEUTRAL),
                    ));
                }

                let mut item = ListItem::new(Line::from(spans));
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

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(active.unwrap_or(0)));
        }
        f.render_stateful_widget(list, list_area, &mut self.list_state);

        if near_bottom(
            self.list_state.offset(),
            list_area.height as usize,
            ctx.collection.len(),
        ) {
            let hint = Paragraph::new(format!("\u{21e3} download \u{00b7} {}", state.ui.source_label))
                .alignment(Alignment::Center)
                .style(Style::new().fg(colors::SECONDARY));
            f.render_widget(hint, footer_area);
        }
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
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        // the wheel only drives the listing while it is the visible view
        if ctx.reader.view_mode() != ViewMode::Contents {
            return;
        }
        match event {
            Event::ScrollDown => self.move_selection(1, ctx.collection.len()),
            Event::ScrollUp => self.move_selection(-1, ctx.collection.len()),
            _ => {}
        }
    }
}

impl ContentsView {
    fn move_selection(&mut self, delta: i64, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1);
        self.list_state.select(Some(next as usize));
    }
}

fn near_bottom(offset: usize, viewport: usize, total: usize) -> bool {
    total.saturating_sub(offset + viewport) <= DOWNLOAD_REVEAL_ROWS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_listings_always_reveal_the_download_hint() {
        assert!(near_bottom(0, 20, 6));
    }

    #[test]
    fn hint_stays_hidden_until_the_bottom_is_near() {
        assert!(!near_bottom(0, 10, 40));
        assert!(!near_bottom(20, 10, 40));
        assert!(near_bottom(27, 10, 40));
        assert!(near_bottom(30, 10, 40));
    }
}
