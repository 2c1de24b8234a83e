use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

/// First-display fade-in. Each poem ramps from dark to full the first time
/// it lands on the page; the ramp runs once and is never reversed.
pub struct Reveal {
    shown: HashMap<usize, Instant>,
    rise: Duration,
}

impl Reveal {
    pub fn new(rise: Duration) -> Self {
        Self {
            shown: HashMap::new(),
            rise,
        }
    }

    pub fn poem_shown(&mut self, index: usize, now: Instant) {
        self.shown.entry(index).or_insert(now);
    }

    /// 0.0 for a poem never displayed, ramping to 1.0 over the rise window
    /// after its first display.
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        let Some(first) = self.shown.get(&index) else {
            return 0.0;
        };
        if self.rise.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(*first);
        (elapsed.as_secs_f32() / self.rise.as_secs_f32()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RISE: Duration = Duration::from_millis(600);

    #[test]
    fn unseen_poems_stay_dark() {
        let reveal = Reveal::new(RISE);
        assert_eq!(reveal.progress(0, Instant::now()), 0.0);
    }

    #[test]
    fn first_display_ramps_to_full() {
        let mut reveal = Reveal::new(RISE);
        let t0 = Instant::now();
        reveal.poem_shown(2, t0);
        let mid = reveal.progress(2, t0 + Duration::from_millis(300));
        assert!((0.4..=0.6).contains(&mid));
        assert_eq!(reveal.progress(2, t0 + Duration::from_millis(700)), 1.0);
    }

    #[test]
    fn reveal_applies_once_and_never_restarts() {
        let mut reveal = Reveal::new(RISE);
        let t0 = Instant::now();
        reveal.poem_shown(1, t0);
        reveal.poem_shown(1, t0 + Duration::from_millis(2000));
        assert_eq!(reveal.progress(1, t0 + Duration::from_millis(2100)), 1.0);
    }
}
