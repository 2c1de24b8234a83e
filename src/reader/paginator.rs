use std::time::Instant;

use tracing::debug;

use super::{
    ReaderConfig, ReaderError,
    transition::{Fade, Turn},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Contents,
    Reader,
}

/// Travel direction of a page turn. Forward pages exit toward the left,
/// backward pages toward the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Tracks which poem is on the page and drives the turn/fade sequencing.
///
/// The paginator owns no timers. Deadlines are compared against the clock
/// the caller passes in, so the whole machine is deterministic under test;
/// the UI loop feeds it the terminal tick. A turn that has not settled yet
/// rejects further turns instead of racing them.
#[derive(Debug)]
pub struct Paginator {
    len: usize,
    current: Option<usize>,
    view_mode: ViewMode,
    turn: Turn,
    fade: Fade,
    scroll_to_top: bool,
    config: ReaderConfig,
}

impl Paginator {
    pub fn new(len: usize, config: ReaderConfig) -> Self {
        debug_assert!(len > 0, "collection is validated non-empty at startup");
        Self {
            len,
            current: None,
            view_mode: ViewMode::default(),
            turn: Turn::Idle,
            fade: Fade::Idle,
            scroll_to_top: false,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Committed index. `None` until the first `open`.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Jump straight to a poem and enter the reader. Any turn in flight is
    /// dropped, matching a contents-entry jump landing mid-animation.
    pub fn open(&mut self, index: usize, now: Instant) -> Result<(), ReaderError> {
        self.check_range(index)?;
        self.view_mode = ViewMode::Reader;
        self.current = Some(index);
        self.turn = Turn::Idle;
        self.fade = Fade::fade_in(now, self.config.fade_in);
        self.scroll_to_top = true;
        debug!(index, "open poem");
        Ok(())
    }

    /// Start a one-step page turn. The index commits only once the settle
    /// deadline passes (see [`Self::tick`]).
    pub fn go_to(
        &mut self,
        index: usize,
        direction: Direction,
        now: Instant,
    ) -> Result<(), ReaderError> {
        self.check_range(index)?;
        if self.turn.is_settling() {
            return Err(ReaderError::TransitionInProgress);
        }
        let Some(from) = self.current else {
            self.current = Some(index);
            self.scroll_to_top = true;
            return Ok(());
        };
        self.turn = Turn::begin(from, index, direction, now, self.config.page_turn);
        debug!(from, to = index, ?direction, "page turn");
        Ok(())
    }

    /// Turn to the next poem; no-op at the last page or mid-turn.
    pub fn next(&mut self, now: Instant) -> bool {
        match self.current {
            Some(i) if i + 1 < self.len => self.go_to(i + 1, Direction::Forward, now).is_ok(),
            _ => false,
        }
    }

    /// Turn to the previous poem; no-op at the first page or mid-turn.
    pub fn previous(&mut self, now: Instant) -> bool {
        match self.current {
            Some(i) if i > 0 => self.go_to(i - 1, Direction::Backward, now).is_ok(),
            _ => false,
        }
    }

    /// Return to the contents listing. Keeps the current index so the
    /// listing can keep highlighting it.
    pub fn close(&mut self, now: Instant) {
        if self.view_mode == ViewMode::Contents {
            return;
        }
        self.view_mode = ViewMode::Contents;
        self.turn = Turn::Idle;
        self.fade = Fade::fade_out_in(now, self.config.fade_out, self.config.fade_in);
        debug!("close reader");
    }

    pub fn at_start(&self) -> bool {
        self.current == Some(0)
    }

    pub fn at_end(&self) -> bool {
        self.current.is_some_and(|i| i + 1 == self.len)
    }

    pub fn prev_enabled(&self) -> bool {
        self.current.is_some() && !self.at_start()
    }

    pub fn next_enabled(&self) -> bool {
        self.current.is_some() && !self.at_end()
    }

    pub fn page_label(&self) -> String {
        match self.current {
            Some(i) => format!("{} / {}", i + 1, self.len),
            None => format!("– / {}", self.len),
        }
    }

    /// The contents entry to mark active; exactly one once a poem was opened.
    pub fn active_contents_entry(&self) -> Option<usize> {
        self.current
    }

    /// Index drawn on the page right now: the outgoing poem while a turn
    /// settles, the committed one otherwise.
    pub fn displayed_index(&self) -> Option<usize> {
        match self.turn {
            Turn::Exiting { from, .. } => Some(from),
            Turn::Idle => self.current,
        }
    }

    pub fn is_turning(&self) -> bool {
        self.turn.is_settling()
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    /// Visibility of the active view while an open/close fade runs.
    pub fn opacity(&self, now: Instant) -> f32 {
        self.fade.opacity(now)
    }

    /// One-shot latch set whenever a new poem lands on the page; the reader
    /// view consumes it to reset its scroll offset.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    /// Advance deadlines. Returns the newly committed index when a page
    /// turn settles on this tick.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let mut committed = None;
        if let Turn::Exiting { to, deadline, .. } = self.turn
            && now >= deadline
        {
            self.turn = Turn::Idle;
            self.current = Some(to);
            self.scroll_to_top = true;
            committed = Some(to);
            debug!(index = to, "page turn settled");
        }
        self.fade.tick(now);
        committed
    }

    fn check_range(&self, index: usize) -> Result<(), ReaderError> {
        if index >= self.len {
            return Err(ReaderError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const N: usize = 3;

    fn reader() -> (Paginator, Instant) {
        (Paginator::new(N, ReaderConfig::default()), Instant::now())
    }

    fn settle(p: &mut Paginator, from: Instant) -> Instant {
        let after = from + Duration::from_millis(301);
        p.tick(after);
        after
    }

    #[test]
    fn contents_is_the_default_mode() {
        let (p, _) = reader();
        assert_eq!(p.view_mode(), ViewMode::Contents);
        assert_eq!(p.current_index(), None);
        assert!(!p.at_start());
        assert!(!p.at_end());
    }

    #[test]
    fn open_lands_on_every_valid_index() {
        let (mut p, t0) = reader();
        for i in 0..N {
            p.open(i, t0).unwrap();
            assert_eq!(p.current_index(), Some(i));
            assert_eq!(p.view_mode(), ViewMode::Reader);
            assert_eq!(p.at_start(), i == 0);
            assert_eq!(p.at_end(), i == N - 1);
        }
    }

    #[test]
    fn open_out_of_range_is_rejected() {
        let (mut p, t0) = reader();
        assert_eq!(
            p.open(N, t0),
            Err(ReaderError::OutOfRange { index: N, len: N })
        );
        assert_eq!(p.current_index(), None);
        assert_eq!(p.view_mode(), ViewMode::Contents);
    }

    #[test]
    fn first_open_shows_label_and_disables_prev() {
        let (mut p, t0) = reader();
        p.open(0, t0).unwrap();
        assert_eq!(p.page_label(), "1 / 3");
        assert!(!p.prev_enabled());
        assert!(p.next_enabled());
    }

    #[test]
    fn forward_turn_commits_after_settle() {
        let (mut p, t0) = reader();
        p.open(0, t0).unwrap();

        p.go_to(1, Direction::Forward, t0).unwrap();
        assert!(p.is_turning());
        assert_eq!(p.current_index(), Some(0));
        assert_eq!(p.displayed_index(), Some(0));

        p.tick(t0 + Duration::from_millis(299));
        assert!(p.is_turning(), "turn must not settle before the deadline");
        assert_eq!(p.current_index(), Some(0));

        let committed = p.tick(t0 + Duration::from_millis(300));
        assert_eq!(committed, Some(1));
        assert!(!p.is_turning());
        assert_eq!(p.current_index(), Some(1));
        assert_eq!(p.page_label(), "2 / 3");
        assert!(p.prev_enabled());
        assert!(p.next_enabled());
        assert_eq!(p.active_contents_entry(), Some(1));
    }

    #[test]
    fn next_at_last_page_is_a_noop() {
        let (mut p, t0) = reader();
        p.open(N - 1, t0).unwrap();
        assert!(!p.next_enabled());
        assert!(!p.next(t0));
        assert_eq!(p.current_index(), Some(N - 1));
        assert!(!p.is_turning());
    }

    #[test]
    fn previous_at_first_page_is_a_noop() {
        let (mut p, t0) = reader();
        p.open(0, t0).unwrap();
        assert!(!p.previous(t0));
        assert_eq!(p.current_index(), Some(0));
        assert!(!p.is_turning(), "boundary no-op must not start a turn");
    }

    #[test]
    fn page_turns_advance_one_step() {
        let (mut p, t0) = reader();
        p.open(0, t0).unwrap();
        assert!(p.next(t0));
        let t1 = settle(&mut p, t0);
        assert_eq!(p.current_index(), Some(1));
        assert!(p.previous(t1));
        settle(&mut p, t1);
        assert_eq!(p.current_index(), Some(0));
    }

    #[test]
    fn overlapping_turns_are_rejected() {
        let (mut p, t0) = reader();
        p.open(0, t0).unwrap();
        p.go_to(1, Direction::Forward, t0).unwrap();

        let mid = t0 + Duration::from_millis(100);
        assert_eq!(
            p.go_to(2, Direction::Forward, mid),
            Err(ReaderError::TransitionInProgress)
        );
        assert!(!p.next(mid));

        settle(&mut p, t0);
        assert_eq!(p.current_index(), Some(1), "first turn still commits");
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let (mut p, t0) = reader();
        p.open(0, t0).unwrap();
        assert_eq!(
            p.go_to(7, Direction::Forward, t0),
            Err(ReaderError::OutOfRange { index: 7, len: N })
        );
        assert_eq!(p.current_index(), Some(0));
        assert!(!p.is_turning());
    }

    #[test]
    fn escape_returns_to_contents_keeping_index() {
        let (mut p, t0) = reader();
        p.open(1, t0).unwrap();
        p.close(t0);
        assert_eq!(p.view_mode(), ViewMode::Contents);
        assert_eq!(p.current_index(), Some(1));
        assert_eq!(p.active_contents_entry(), Some(1));
    }

    #[test]
    fn close_is_idempotent() {
        let (mut p, t0) = reader();
        p.open(1, t0).unwrap();
        p.close(t0);
        p.close(t0 + Duration::from_millis(10));
        assert_eq!(p.view_mode(), ViewMode::Contents);
        assert_eq!(p.current_index(), Some(1));
    }

    #[test]
    fn close_mid_turn_keeps_the_outgoing_index() {
        let (mut p, t0) = reader();
        p.open(0, t0).unwrap();
        p.go_to(1, Direction::Forward, t0).unwrap();
        p.close(t0 + Duration::from_millis(100));
        assert!(!p.is_turning());
        assert_eq!(p.current_index(), Some(0));
        settle(&mut p, t0);
        assert_eq!(p.current_index(), Some(0), "dropped turn must not commit");
    }

    #[test]
    fn landing_requests_scroll_to_top_once() {
        let (mut p, t0) = reader();
        p.open(0, t0).unwrap();
        assert!(p.take_scroll_to_top());
        assert!(!p.take_scroll_to_top());

        p.go_to(1, Direction::Forward, t0).unwrap();
        assert!(!p.take_scroll_to_top(), "latch sets on commit, not on start");
        settle(&mut p, t0);
        assert!(p.take_scroll_to_top());
    }

    #[test]
    fn open_mid_turn_overrides_the_animation() {
        let (mut p, t0) = reader();
        p.open(0, t0).unwrap();
        p.go_to(1, Direction::Forward, t0).unwrap();
        p.open(2, t0 + Duration::from_millis(100)).unwrap();
        assert!(!p.is_turning());
        assert_eq!(p.current_index(), Some(2));
        settle(&mut p, t0);
        assert_eq!(p.current_index(), Some(2));
    }
}
