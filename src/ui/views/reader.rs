use std::time::Instant;

use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::{
    event::events::Event,
    fx::SmoothScroll,
    reader::{Direction, transition::Turn},
    ui::{
        components::poem::PoemWidget,
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
};

pub struct ReaderView {
    scroll: usize,
    glide: SmoothScroll,
}

impl Default for ReaderView {
    fn default() -> Self {
        Self {
            scroll: 0,
            glide: SmoothScroll::new(0.35),
        }
    }
}

#[async_trait]
impl View for ReaderView {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let now = Instant::now();
        let Some(index) = ctx.reader.displayed_index() else {
            return;
        };
        let Some(poem) = ctx.collection.get(index) else {
            return;
        };

        self.glide.set_target(self.scroll);
        self.glide.tick();

        let (dx, alpha) = match *ctx.reader.turn() {
            Turn::Exiting { direction, .. } => {
                let progress = ctx.reader.turn().progress(now);
                let shift = (progress * f32::from(area.width)) as i32;
                let dx = match direction {
                    Direction::Forward => -shift,
                    Direction::Backward => shift,
                };
                (dx, 1.0 - progress)
            }
            Turn::Idle => (0, ctx.fx.reveal.progress(index, now)),
        };

        let widget = PoemWidget::new(poem)
            .alpha(alpha)
            .dx(dx)
            .scroll(self.scroll, self.glide.row_offset());
        f.render_widget(widget, area);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Left => Some(Action::PreviousPoem),
            KeyCode::Right => Some(Action::NextPoem),
            KeyCode::Esc => Some(Action::CloseReader),
            KeyCode::Char('t') => Some(Action::OpenSideContents),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_by(1, ctx);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_by(-1, ctx);
                None
            }
            KeyCode::Char('g') => {
                self.scroll = 0;
                None
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        match event {
            Event::PoemShown(_) => {
                self.scroll = 0;
                self.glide.reset(0);
            }
            Event::ScrollDown => self.scroll_by(1, ctx),
            Event::ScrollUp => self.scroll_by(-1, ctx),
            _ => {}
        }
    }
}

impl ReaderView {
    fn scroll_by(&mut self, delta: i64, ctx: &AppContext) {
        let max = ctx
            .reader
            .displayed_index()
            .and_then(|i| ctx.collection.get(i))
            .map_or(0, |poem| poem.lines.len().saturating_sub(1));
        let next = (self.scroll as i64 + delta).clamp(0, max as i64);
        self.scroll = next as usize;
    }
}
