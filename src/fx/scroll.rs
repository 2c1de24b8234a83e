/// Row-level smooth scroll with exponential ease-out. When the scroll
/// target jumps, the distance is injected as a row displacement that decays
/// toward zero every tick, so long poems glide instead of snapping.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    row_offset: f64,
    prev_target: usize,
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            row_offset: 0.0,
            prev_target: 0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Positive displacement draws rows below their target position, so a
    /// scroll-down starts with the content where it was and lets it glide up.
    pub fn set_target(&mut self, target: usize) {
        if target != self.prev_target {
            self.row_offset += target as f64 - self.prev_target as f64;
            self.prev_target = target;
        }
    }

    /// Snap to the target with no glide, e.g. when a new poem lands.
    pub fn reset(&mut self, target: usize) {
        self.prev_target = target;
        self.row_offset = 0.0;
    }

    /// Decay the displacement; call once per frame.
    pub fn tick(&mut self) {
        self.row_offset *= 1.0 - self.speed;
        if self.row_offset.abs() < 0.4 {
            self.row_offset = 0.0;
        }
    }

    pub fn row_offset(&self) -> i32 {
        self.row_offset.round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_jump_injects_displacement() {
        let mut scroll = SmoothScroll::new(0.35);
        scroll.set_target(4);
        assert_eq!(scroll.row_offset(), 4);
    }

    #[test]
    fn displacement_decays_to_rest() {
        let mut scroll = SmoothScroll::new(0.35);
        scroll.set_target(10);
        for _ in 0..32 {
            scroll.tick();
        }
        assert_eq!(scroll.row_offset(), 0);
    }

    #[test]
    fn reset_snaps_without_glide() {
        let mut scroll = SmoothScroll::new(0.35);
        scroll.set_target(10);
        scroll.reset(0);
        assert_eq!(scroll.row_offset(), 0);
    }
}
