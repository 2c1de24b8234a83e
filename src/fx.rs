//! Ambient visual effects. Strictly decorative: nothing in here feeds back
//! into the paginator, and disabling the module changes no navigation
//! behavior.

pub mod glow;
pub mod reveal;
pub mod scroll;

pub use glow::CursorGlow;
pub use reveal::Reveal;
pub use scroll::SmoothScroll;

use crate::reader::ReaderConfig;

pub struct Effects {
    pub glow: CursorGlow,
    pub reveal: Reveal,
}

impl Effects {
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            glow: CursorGlow::new(config.glow_linger),
            reveal: Reveal::new(config.reveal),
        }
    }
}
