use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
};

use crate::{
    reader::ViewMode,
    ui::{app::App, components::navbar::Navbar},
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let now = Instant::now();
        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND).fg(colors::ACCENT));

        match self.app.ctx.reader.view_mode() {
            ViewMode::Contents => {
                self.app
                    .router
                    .render(f, area, &self.app.state, &self.app.ctx);
            }
            ViewMode::Reader => {
                let [content_area, navbar_area] =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);
                self.app
                    .router
                    .render(f, content_area, &self.app.state, &self.app.ctx);
                f.render_widget(Navbar::new(&self.app.ctx.reader), navbar_area);
            }
        }

        let opacity = self.app.ctx.reader.opacity(now);
        if opacity < 1.0 {
            apply_fade(f, area, opacity);
        }

        self.app.ctx.fx.glow.render(area, f.buffer_mut(), now);
    }
}

/// Blend every cell toward the background; the terminal analog of the view
/// opacity ramp used by the open/close cross-fade.
fn apply_fade(f: &mut Frame, area: Rect, alpha: f32) {
    let buf = f.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                let fg = colors::faded(cell.fg, alpha);
                let bg = colors::faded(cell.bg, alpha);
                cell.set_fg(fg).set_bg(bg);
            }
        }
    }
}
