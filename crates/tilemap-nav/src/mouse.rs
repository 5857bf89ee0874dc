//! Polled mouse state.

use kurbo::Point;

/// Mouse state over the canvas, polled once per frame.
///
/// `held` persists across frames until the button is released or the
/// cursor leaves the canvas. `pressed` records where the button went down
/// and is cleared by every [`Mouse::reset`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mouse {
    position: Point,
    pressed: Option<Point>,
    held: Option<Point>,
}

impl Mouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in canvas pixels.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the button went down since the last reset.
    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    /// Whether the button is currently held down.
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    pub fn handle_move(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    pub fn handle_down(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.position = point;
        self.pressed = Some(point);
        self.held = Some(point);
    }

    pub fn handle_up(&mut self) {
        self.held = None;
    }

    pub fn handle_leave(&mut self) {
        self.held = None;
    }

    /// Clear the one-shot press. Held state is left alone.
    pub fn reset(&mut self) {
        self.pressed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_sets_pressed_and_held() {
        let mut mouse = Mouse::new();
        mouse.handle_down(10.0, 20.0);
        assert!(mouse.is_pressed());
        assert!(mouse.is_held());
        assert_eq!(mouse.position(), Point::new(10.0, 20.0));
    }

    #[test]
    fn reset_keeps_hold() {
        let mut mouse = Mouse::new();
        mouse.handle_down(10.0, 20.0);
        mouse.reset();
        assert!(!mouse.is_pressed());
        assert!(mouse.is_held());
    }

    #[test]
    fn up_and_leave_end_hold_only() {
        let mut mouse = Mouse::new();
        mouse.handle_down(1.0, 1.0);
        mouse.handle_up();
        assert!(!mouse.is_held());
        assert!(mouse.is_pressed());

        mouse.handle_down(2.0, 2.0);
        mouse.handle_leave();
        assert!(!mouse.is_held());
        assert!(mouse.is_pressed());
    }

    #[test]
    fn move_updates_position_without_hold() {
        let mut mouse = Mouse::new();
        mouse.handle_move(5.0, 6.0);
        assert_eq!(mouse.position(), Point::new(5.0, 6.0));
        assert!(!mouse.is_held());
    }
}
