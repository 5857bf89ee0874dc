//! The polled input devices as one unit.

use crate::input::InputEvent;
use crate::keyboard::Keyboard;
use crate::mouse::Mouse;
use crate::wheel::MouseWheel;

/// Mouse, wheel, and keyboard state read by the controllers each frame.
#[derive(Debug, Clone, Default)]
pub struct InputDevices {
    pub mouse: Mouse,
    pub wheel: MouseWheel,
    pub keyboard: Keyboard,
}

impl InputDevices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an event to the device it belongs to.
    pub fn handle(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.mouse.handle_move(*x, *y),
            InputEvent::PointerDown { x, y } => self.mouse.handle_down(*x, *y),
            InputEvent::PointerUp { x, y } => {
                self.mouse.handle_move(*x, *y);
                self.mouse.handle_up();
            }
            InputEvent::PointerLeave => self.mouse.handle_leave(),
            InputEvent::Wheel { delta_y } => self.wheel.handle_wheel(*delta_y),
            InputEvent::KeyDown { key } => self.keyboard.handle_key_down(key),
            InputEvent::KeyUp { key } => self.keyboard.handle_key_up(key),
            InputEvent::KeyPress { key } => self.keyboard.handle_key_press(key),
            InputEvent::FocusLost => {
                self.mouse.handle_leave();
                self.keyboard.release_all();
            }
        }
    }

    /// Drain the discrete state (press, wheel delta, key presses) after the
    /// frame consumed it. Held buttons and down keys survive.
    pub fn reset(&mut self) {
        self.mouse.reset();
        self.wheel.reset();
        self.keyboard.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::ARROW_DOWN;
    use kurbo::Point;

    #[test]
    fn events_reach_their_devices() {
        let mut devices = InputDevices::new();
        devices.handle(&InputEvent::PointerDown { x: 4.0, y: 2.0 });
        devices.handle(&InputEvent::Wheel { delta_y: 3.0 });
        devices.handle(&InputEvent::KeyDown {
            key: ARROW_DOWN.into(),
        });

        assert!(devices.mouse.is_held());
        assert_eq!(devices.wheel.delta(), 3.0);
        assert!(devices.keyboard.is_pressed(&[ARROW_DOWN]));
    }

    #[test]
    fn pointer_up_records_release_position() {
        let mut devices = InputDevices::new();
        devices.handle(&InputEvent::PointerDown { x: 0.0, y: 0.0 });
        devices.handle(&InputEvent::PointerUp { x: 9.0, y: 9.0 });
        assert!(!devices.mouse.is_held());
        assert_eq!(devices.mouse.position(), Point::new(9.0, 9.0));
    }

    #[test]
    fn reset_splits_continuous_and_discrete_state() {
        let mut devices = InputDevices::new();
        devices.handle(&InputEvent::PointerDown { x: 1.0, y: 1.0 });
        devices.handle(&InputEvent::Wheel { delta_y: -1.0 });
        devices.handle(&InputEvent::KeyDown { key: "a".into() });
        devices.handle(&InputEvent::KeyPress { key: "a".into() });

        devices.reset();

        assert!(devices.mouse.is_held());
        assert!(!devices.mouse.is_pressed());
        assert!(!devices.wheel.is_moved());
        assert!(devices.keyboard.is_pressed(&["a"]));
        assert_eq!(devices.keyboard.presses().count(), 0);
    }

    #[test]
    fn focus_lost_releases_everything_held() {
        let mut devices = InputDevices::new();
        devices.handle(&InputEvent::PointerDown { x: 1.0, y: 1.0 });
        devices.handle(&InputEvent::KeyDown { key: "a".into() });
        devices.handle(&InputEvent::FocusLost);
        assert!(!devices.mouse.is_held());
        assert!(!devices.keyboard.is_pressed(&["a"]));
    }
}
