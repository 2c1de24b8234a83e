pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

/// Marker for the contents entry matching the poem on the page. Pulses
/// gently while the reader is open, steady otherwise.
pub fn active_entry_marker(reading: bool) -> &'static str {
    if reading {
        const FRAME_STEP_MS: u64 = 250;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let step = (now / FRAME_STEP_MS) as usize % 4;

        match step {
            0 => "·",
            1 => "•",
            2 => "●",
            _ => "•",
        }
    } else {
        "●"
    }
}
