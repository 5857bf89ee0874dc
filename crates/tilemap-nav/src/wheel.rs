//! Polled mouse-wheel state.

/// Net wheel scroll since the last reset.
///
/// All wheel events arriving within one frame are summed, so the frame
/// sees the net scroll rather than individual notches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseWheel {
    delta: f64,
}

impl MouseWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the wheel moved since the last reset.
    pub fn is_moved(&self) -> bool {
        self.delta != 0.0
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn handle_wheel(&mut self, delta_y: f64) {
        if delta_y.is_finite() {
            self.delta += delta_y;
        }
    }

    pub fn reset(&mut self) {
        self.delta = 0.0;
    }
}
