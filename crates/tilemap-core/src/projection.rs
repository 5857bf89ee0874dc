//! Orthographic camera projection.
//!
//! The camera always sits at the projection-space origin. The viewport's
//! map position is applied by offsetting meshes, never by shifting the
//! projection edges.

use kurbo::{Affine, Size, Vec2};

/// An orthographic projection in map units, centred on the origin.
///
/// `top` is negative and `bottom` positive: projection-space y grows
/// downwards like screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            top: -1.0,
            bottom: 1.0,
        }
    }
}

impl Projection {
    /// Projection that presents exactly `dimensions` map units.
    pub fn centered(dimensions: Size) -> Self {
        Self {
            left: -dimensions.width / 2.0,
            right: dimensions.width / 2.0,
            top: -dimensions.height / 2.0,
            bottom: dimensions.height / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Transform from projection space to canvas pixels.
    ///
    /// A zero-width projection maps everything to the canvas origin rather
    /// than dividing by zero.
    pub fn to_screen(&self, canvas: Size) -> Affine {
        let sx = scale(canvas.width, self.width());
        let sy = scale(canvas.height, self.height());
        Affine::scale_non_uniform(sx, sy)
            .then_translate(Vec2::new(-self.left * sx, -self.top * sy))
    }
}

fn scale(pixels: f64, extent: f64) -> f64 {
    if extent > 0.0 { pixels / extent } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn centered_projection_is_symmetric() {
        let p = Projection::centered(Size::new(200.0, 100.0));
        assert_eq!((p.left, p.right), (-100.0, 100.0));
        assert_eq!((p.top, p.bottom), (-50.0, 50.0));
        assert_eq!(p.width(), 200.0);
        assert_eq!(p.height(), 100.0);
    }

    #[test]
    fn to_screen_maps_edges_to_canvas_corners() {
        let p = Projection::centered(Size::new(200.0, 100.0));
        let t = p.to_screen(Size::new(400.0, 300.0));
        assert_eq!(t * Point::new(-100.0, -50.0), Point::new(0.0, 0.0));
        assert_eq!(t * Point::new(100.0, 50.0), Point::new(400.0, 300.0));
        assert_eq!(t * Point::ORIGIN, Point::new(200.0, 150.0));
    }

    #[test]
    fn to_screen_tolerates_empty_projection() {
        let p = Projection::centered(Size::ZERO);
        let t = p.to_screen(Size::new(400.0, 300.0));
        assert_eq!(t * Point::new(5.0, 5.0), Point::ORIGIN);
    }
}
