use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Settle delay of a page turn: the outgoing poem keeps sliding for
    /// this long before the new index commits.
    pub page_turn: Duration,
    pub fade_in: Duration,
    pub fade_out: Duration,
    /// Horizontal drag distance, in cells, that counts as a swipe.
    pub swipe_threshold: u16,
    /// Pointer idle time after which the cursor glow fades out.
    pub glow_linger: Duration,
    /// First-display fade-in of a poem.
    pub reveal: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            page_turn: Duration::from_millis(300),
            fade_in: Duration::from_millis(50),
            fade_out: Duration::from_millis(300),
            swipe_threshold: 50,
            glow_linger: Duration::from_millis(1000),
            reveal: Duration::from_millis(600),
        }
    }
}
