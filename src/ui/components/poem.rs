use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{collection::Poem, util::colors};

/// Hand-rendered poem page. Drawing cell by cell keeps control over the
/// horizontal slide of a page turn and the opacity-analog fading, which the
/// stock paragraph widget cannot offset.
pub struct PoemWidget<'a> {
    poem: &'a Poem,
    alpha: f32,
    dx: i32,
    scroll: usize,
    glide: i32,
}

impl<'a> PoemWidget<'a> {
    pub fn new(poem: &'a Poem) -> Self {
        Self {
            poem,
            alpha: 1.0,
            dx: 0,
            scroll: 0,
            glide: 0,
        }
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Horizontal displacement in cells; negative slides left.
    pub fn dx(mut self, dx: i32) -> Self {
        self.dx = dx;
        self
    }

    pub fn scroll(mut self, scroll: usize, glide: i32) -> Self {
        self.scroll = scroll;
        self.glide = glide;
        self
    }
}

impl Widget for PoemWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title_style = Style::new()
            .fg(colors::faded(colors::PRIMARY, self.alpha))
            .add_modifier(Modifier::BOLD);
        let author_style = Style::new()
            .fg(colors::faded(colors::NEUTRAL, self.alpha))
            .add_modifier(Modifier::ITALIC);
        let body_style = Style::new().fg(colors::faded(colors::ACCENT, self.alpha));

        let center = |text: &str| -> i32 {
            let width = text.width().min(area.width as usize) as i32;
            i32::from(area.x) + (i32::from(area.width) - width).max(0) / 2 + self.dx
        };

        let top = i32::from(area.y);
        draw_clipped(buf, area, center(&self.poem.title), top + 1, &self.poem.title, title_style);
        if let Some(author) = &self.poem.author {
            let byline = format!("\u{2014} {author}");
            draw_clipped(buf, area, center(&byline), top + 2, &byline, author_style);
        }

        // the body is set as a block: the widest line fixes the left edge
        let block_width = self
            .poem
            .lines
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
            .min(area.width as usize) as i32;
        let left = i32::from(area.x) + (i32::from(area.width) - block_width).max(0) / 2 + self.dx;

        let body_top = top + 4;
        for (i, line) in self.poem.lines.iter().enumerate().skip(self.scroll) {
            let row = body_top + (i - self.scroll) as i32 + self.glide;
            if row < body_top {
                continue;
            }
            if row >= i32::from(area.bottom()) {
                break;
            }
            draw_clipped(buf, area, left, row, line, body_style);
        }
    }
}

/// Write `text` at (x, y), clipping whatever falls outside `area` on either
/// side; `x` may be negative mid-slide.
fn draw_clipped(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, style: Style) {
    if y < i32::from(area.top()) || y >= i32::from(area.bottom()) {
        return;
    }
    let (x, text) = if x < i32::from(area.left()) {
        let overflow = (i32::from(area.left()) - x) as usize;
        (i32::from(area.left()), clip_left(text, overflow))
    } else {
        (x, text)
    };
    if text.is_empty() || x >= i32::from(area.right()) {
        return;
    }
    let max_width = (i32::from(area.right()) - x) as usize;
    buf.set_stringn(x as u16, y as u16, text, max_width, style);
}

fn clip_left(text: &str, cols: usize) -> &str {
    if cols == 0 {
        return text;
    }
    let mut width = 0usize;
    for (idx, ch) in text.char_indices() {
        if width >= cols {
            return &text[idx..];
        }
        width += ch.width().unwrap_or(0);
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_left_drops_exactly_the_overflow() {
        assert_eq!(clip_left("abcdef", 2), "cdef");
        assert_eq!(clip_left("abcdef", 0), "abcdef");
        assert_eq!(clip_left("ab", 5), "");
    }
}
