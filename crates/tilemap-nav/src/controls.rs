//! Controllers that turn polled device state into camera motion.
//!
//! Each controller reads only the current frame's device state and writes
//! to the viewport. They run in the frame loop after the wheel zoom, so
//! every pixel → map conversion uses this frame's squares-per-pixel.
//!
//! | Device | Controller | Effect |
//! |--------|------------|--------|
//! | Wheel | [`WheelZoom`] | `increment_zoom(delta * rate)` |
//! | Mouse held | [`MousePanning`] | drag the map under the cursor |
//! | Arrow keys | [`KeyboardPanning`] | fixed step per frame per key |

use crate::keyboard::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP, Keyboard};
use crate::mouse::Mouse;
use crate::wheel::MouseWheel;
use kurbo::{Point, Vec2};
use tilemap_core::{DisplayMetrics, Viewport};

// ─── Mouse-drag panning ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    /// Dragging; `anchor` is the cursor pixel position at the last frame.
    Dragging { anchor: Point },
}

/// Drag-to-pan with the mouse.
///
/// Per frame, in order:
/// - idle and held: start dragging, anchor at the cursor;
/// - dragging and held: move the view by the cursor delta since the anchor
///   (negated, so the map follows the cursor) and re-anchor;
/// - dragging and not held: stop.
///
/// Start and continue run in the same pass, so the first held frame sees a
/// zero delta and moves nothing.
#[derive(Debug, Clone)]
pub struct MousePanning {
    state: DragState,
}

impl Default for MousePanning {
    fn default() -> Self {
        Self::new()
    }
}

impl MousePanning {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Apply this frame's drag. Returns the map-space offset applied.
    pub fn handle(&mut self, mouse: &Mouse, viewport: &mut Viewport) -> Vec2 {
        let cursor = mouse.position();

        if self.state == DragState::Idle && mouse.is_held() {
            log::trace!("drag start at {cursor:?}");
            self.state = DragState::Dragging { anchor: cursor };
        }

        let DragState::Dragging { anchor } = &mut self.state else {
            return Vec2::ZERO;
        };

        if !mouse.is_held() {
            log::trace!("drag end at {cursor:?}");
            self.state = DragState::Idle;
            return Vec2::ZERO;
        }

        let pixel_delta = cursor - *anchor;
        *anchor = cursor;
        if pixel_delta == Vec2::ZERO {
            return Vec2::ZERO;
        }

        let offset = -viewport.pixel_delta_to_map(pixel_delta);
        viewport.offset_position(offset);
        offset
    }
}

// ─── Keyboard panning ────────────────────────────────────────────────────

/// Arrow key → pan direction in pixels (before scaling by the step).
const PAN_KEYS: [(&str, Vec2); 4] = [
    (ARROW_UP, Vec2::new(0.0, 1.0)),
    (ARROW_DOWN, Vec2::new(0.0, -1.0)),
    (ARROW_LEFT, Vec2::new(-1.0, 0.0)),
    (ARROW_RIGHT, Vec2::new(1.0, 0.0)),
];

/// Pan a fixed pixel step per frame for every held arrow key.
///
/// Keys compose additively: holding two perpendicular arrows pans
/// diagonally, holding opposite arrows cancels out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardPanning {
    pixels_per_update: f64,
}

impl KeyboardPanning {
    pub fn new(pixels_per_update: f64) -> Self {
        Self { pixels_per_update }
    }

    /// Step sized as a fraction of the larger display dimension.
    pub fn from_display(display: DisplayMetrics, screen_percent: f64) -> Self {
        Self::new(display.max_dimension() * screen_percent)
    }

    pub fn pixels_per_update(&self) -> f64 {
        self.pixels_per_update
    }

    /// Apply this frame's key panning. Returns the map-space offset applied.
    pub fn handle(&self, keyboard: &Keyboard, viewport: &mut Viewport) -> Vec2 {
        let mut total = Vec2::ZERO;
        for (key, direction) in PAN_KEYS {
            if keyboard.is_pressed(&[key]) {
                let offset = viewport.pixel_delta_to_map(direction * self.pixels_per_update);
                viewport.offset_position(offset);
                total += offset;
            }
        }
        total
    }
}

// ─── Wheel zoom ──────────────────────────────────────────────────────────

/// Zoom by the net wheel scroll of the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelZoom {
    zoom_per_delta: f64,
}

impl WheelZoom {
    pub fn new(zoom_per_delta: f64) -> Self {
        Self { zoom_per_delta }
    }

    /// Returns whether the wheel moved this frame.
    pub fn handle(&self, wheel: &MouseWheel, viewport: &mut Viewport) -> bool {
        if !wheel.is_moved() {
            return false;
        }
        viewport.increment_zoom(wheel.delta() * self.zoom_per_delta);
        log::trace!(
            "wheel {} → zoom {:.3} ({} squares/px)",
            wheel.delta(),
            viewport.zoom(),
            viewport.squares_per_pixel()
        );
        true
    }
}
