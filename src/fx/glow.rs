use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

use crate::util::colors;

const FADE_OUT: Duration = Duration::from_millis(300);

/// Falloff of the tint around the pointer cell; rows count double because
/// terminal cells are tall.
const HALO: &[(i32, i32, f32)] = &[
    (0, 0, 1.0),
    (-1, 0, 0.55),
    (1, 0, 0.55),
    (-2, 0, 0.25),
    (2, 0, 0.25),
    (0, -1, 0.4),
    (0, 1, 0.4),
    (-1, -1, 0.2),
    (1, -1, 0.2),
    (-1, 1, 0.2),
    (1, 1, 0.2),
];

/// Soft radial tint following the pointer, fading out once it has idled
/// past the linger window.
pub struct CursorGlow {
    last: Option<(Position, Instant)>,
    linger: Duration,
}

impl CursorGlow {
    pub fn new(linger: Duration) -> Self {
        Self { last: None, linger }
    }

    pub fn pointer_moved(&mut self, x: u16, y: u16, now: Instant) {
        self.last = Some((Position::new(x, y), now));
    }

    /// Remaining glow intensity in [0.0, 1.0]: full while the pointer is
    /// active, easing to zero once it has idled past the linger window.
    pub fn strength(&self, now: Instant) -> f32 {
        let Some((_, moved)) = self.last else {
            return 0.0;
        };
        let idle = now.saturating_duration_since(moved);
        match idle.checked_sub(self.linger) {
            None => 1.0,
            Some(past) => (1.0 - past.as_secs_f32() / FADE_OUT.as_secs_f32()).max(0.0),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, now: Instant) {
        let Some((center, _)) = self.last else {
            return;
        };
        let strength = self.strength(now);
        if strength <= 0.0 {
            return;
        }

        for &(dx, dy, falloff) in HALO {
            let x = i32::from(center.x) + dx;
            let y = i32::from(center.y) + dy;
            if x < 0 || y < 0 {
                continue;
            }
            let pos = Position::new(x as u16, y as u16);
            if !area.contains(pos) {
                continue;
            }
            if let Some(cell) = buf.cell_mut(pos) {
                let bg = colors::blend(cell.bg, colors::GLOW, strength * falloff);
                cell.set_bg(bg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINGER: Duration = Duration::from_millis(1000);

    #[test]
    fn no_glow_before_the_pointer_ever_moved() {
        let glow = CursorGlow::new(LINGER);
        assert_eq!(glow.strength(Instant::now()), 0.0);
    }

    #[test]
    fn glow_holds_through_the_linger_window() {
        let mut glow = CursorGlow::new(LINGER);
        let t0 = Instant::now();
        glow.pointer_moved(10, 5, t0);
        assert_eq!(glow.strength(t0 + Duration::from_millis(999)), 1.0);
    }

    #[test]
    fn glow_fades_out_after_idling() {
        let mut glow = CursorGlow::new(LINGER);
        let t0 = Instant::now();
        glow.pointer_moved(10, 5, t0);
        let mid = glow.strength(t0 + Duration::from_millis(1150));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(glow.strength(t0 + Duration::from_millis(1400)), 0.0);
    }

    #[test]
    fn movement_resets_the_idle_clock() {
        let mut glow = CursorGlow::new(LINGER);
        let t0 = Instant::now();
        glow.pointer_moved(10, 5, t0);
        glow.pointer_moved(11, 5, t0 + Duration::from_millis(1200));
        assert_eq!(glow.strength(t0 + Duration::from_millis(1300)), 1.0);
    }
}
