use std::time::{Duration, Instant};

use super::paginator::Direction;

/// Phase of a page turn. The outgoing poem slides toward the side matching
/// the travel direction until the deadline passes and the turn settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Idle,
    Exiting {
        from: usize,
        to: usize,
        direction: Direction,
        started: Instant,
        deadline: Instant,
    },
}

impl Turn {
    pub fn begin(
        from: usize,
        to: usize,
        direction: Direction,
        now: Instant,
        settle: Duration,
    ) -> Self {
        Self::Exiting {
            from,
            to,
            direction,
            started: now,
            deadline: now + settle,
        }
    }

    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Exiting { .. })
    }

    /// 0.0 at the start of the turn, 1.0 at the deadline.
    pub fn progress(&self, now: Instant) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Exiting {
                started, deadline, ..
            } => {
                let total = deadline.saturating_duration_since(*started);
                if total.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(*started);
                (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
            }
        }
    }
}

/// Cross-fade used when the view mode flips. Opening the reader ramps it in
/// over a short rise; closing holds the screen dark for the fade-out window
/// before the contents listing rises back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    Idle,
    In {
        start: Instant,
        rise: Duration,
    },
    OutIn {
        start: Instant,
        hold: Duration,
        rise: Duration,
    },
}

impl Fade {
    pub fn fade_in(now: Instant, rise: Duration) -> Self {
        Self::In { start: now, rise }
    }

    pub fn fade_out_in(now: Instant, hold: Duration, rise: Duration) -> Self {
        Self::OutIn {
            start: now,
            hold,
            rise,
        }
    }

    /// Visibility of the active view in [0.0, 1.0].
    pub fn opacity(&self, now: Instant) -> f32 {
        match *self {
            Self::Idle => 1.0,
            Self::In { start, rise } => ramp(now.saturating_duration_since(start), rise),
            Self::OutIn { start, hold, rise } => {
                let elapsed = now.saturating_duration_since(start);
                match elapsed.checked_sub(hold) {
                    None => 0.0,
                    Some(past_hold) => ramp(past_hold, rise),
                }
            }
        }
    }

    /// Collapse to `Idle` once fully risen.
    pub fn tick(&mut self, now: Instant) {
        if !matches!(self, Self::Idle) && self.opacity(now) >= 1.0 {
            *self = Self::Idle;
        }
    }
}

fn ramp(elapsed: Duration, rise: Duration) -> f32 {
    if rise.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / rise.as_secs_f32()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_progress_ramps_to_one() {
        let t0 = Instant::now();
        let turn = Turn::begin(0, 1, Direction::Forward, t0, Duration::from_millis(300));
        assert_eq!(turn.progress(t0), 0.0);
        let half = turn.progress(t0 + Duration::from_millis(150));
        assert!((0.45..=0.55).contains(&half));
        assert_eq!(turn.progress(t0 + Duration::from_millis(400)), 1.0);
    }

    #[test]
    fn fade_in_rises_after_start() {
        let t0 = Instant::now();
        let fade = Fade::fade_in(t0, Duration::from_millis(50));
        assert_eq!(fade.opacity(t0), 0.0);
        assert_eq!(fade.opacity(t0 + Duration::from_millis(50)), 1.0);
    }

    #[test]
    fn fade_out_in_holds_dark_then_rises() {
        let t0 = Instant::now();
        let fade =
            Fade::fade_out_in(t0, Duration::from_millis(300), Duration::from_millis(50));
        assert_eq!(fade.opacity(t0 + Duration::from_millis(299)), 0.0);
        assert!(fade.opacity(t0 + Duration::from_millis(325)) > 0.0);
        assert_eq!(fade.opacity(t0 + Duration::from_millis(350)), 1.0);
    }

    #[test]
    fn fade_settles_back_to_idle() {
        let t0 = Instant::now();
        let mut fade = Fade::fade_in(t0, Duration::from_millis(50));
        fade.tick(t0 + Duration::from_millis(10));
        assert!(matches!(fade, Fade::In { .. }));
        fade.tick(t0 + Duration::from_millis(60));
        assert_eq!(fade, Fade::Idle);
    }
}
