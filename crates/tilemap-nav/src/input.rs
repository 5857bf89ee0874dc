//! Input abstraction layer.
//!
//! Normalizes DOM (or native windowing) callbacks into a single
//! `InputEvent` enum. Events are buffered by [`crate::buffer::EventBuffer`]
//! and applied to the polled devices at the start of each frame.

/// A normalized input event from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved over the canvas.
    PointerMove { x: f64, y: f64 },

    /// Button pressed over the canvas.
    PointerDown { x: f64, y: f64 },

    /// Button released.
    PointerUp { x: f64, y: f64 },

    /// Cursor left the canvas. Ends any hold.
    PointerLeave,

    /// Wheel scrolled. Positive `delta_y` scrolls down.
    Wheel { delta_y: f64 },

    /// Key went down. `key` is the `KeyboardEvent.key` value (e.g. `"ArrowUp"`).
    KeyDown { key: String },

    /// Key went up.
    KeyUp { key: String },

    /// Character-producing key press.
    KeyPress { key: String },

    /// The host window lost focus. Releases every held key and button,
    /// since their up events will never arrive.
    FocusLost,
}
