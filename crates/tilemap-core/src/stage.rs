//! The infinite stage.
//!
//! One finite plane, larger than anything the viewport can show, is
//! re-positioned every frame to `-(position mod chunk)`. Since the offset
//! never leaves one chunk of the origin and the plane overhangs the
//! largest possible view by at least a chunk on each side, its edges are
//! never visible no matter how far the view has panned. Geometry cost is
//! constant.

use crate::mesh::{Material, MeshPlacement, PlaneMesh};
use crate::viewport::Viewport;
use kurbo::{Point, Size};

/// Default stage fill, `0xRRGGBB`.
pub const PLANE_COLOR: u32 = 0xFF_FF_FF;
/// Default wireframe overlay colour.
pub const WIREFRAME_COLOR: u32 = 0x00_00_00;
pub const WIREFRAME_OPACITY: f32 = 0.35;

#[derive(Debug, Clone)]
pub struct Stage {
    squares_per_chunk: f64,
    plane: PlaneMesh,
    /// Projection-space position of the plane centre.
    offset: Point,
}

impl Stage {
    /// Build a stage big enough for the viewport's maximum visible area.
    ///
    /// `squares_per_chunk` must be at least the viewport's maximum squares
    /// per pixel; the navigation config validates this.
    pub fn new(viewport: &Viewport, squares_per_chunk: f64) -> Self {
        let chunks_x = chunk_count(viewport.maximum_square_width(), squares_per_chunk);
        let chunks_y = chunk_count(viewport.maximum_square_height(), squares_per_chunk);
        let plane = PlaneMesh {
            size: Size::new(
                f64::from(chunks_x) * squares_per_chunk,
                f64::from(chunks_y) * squares_per_chunk,
            ),
            segments_x: chunks_x,
            segments_y: chunks_y,
        };
        log::debug!(
            "stage plane {}x{} squares in {chunks_x}x{chunks_y} chunks of {squares_per_chunk}",
            plane.size.width,
            plane.size.height
        );

        let mut stage = Self {
            squares_per_chunk,
            plane,
            offset: Point::ORIGIN,
        };
        stage.update(viewport);
        stage
    }

    pub fn squares_per_chunk(&self) -> f64 {
        self.squares_per_chunk
    }

    pub fn plane(&self) -> &PlaneMesh {
        &self.plane
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Realign the plane with the viewport's current position.
    pub fn update(&mut self, viewport: &Viewport) {
        let position = viewport.position();
        self.offset = Point::new(
            chunk_offset(position.x, self.squares_per_chunk),
            chunk_offset(position.y, self.squares_per_chunk),
        );
    }

    /// The plane and its wireframe overlay, in draw order.
    pub fn placements(&self) -> [MeshPlacement; 2] {
        [
            MeshPlacement {
                mesh: self.plane,
                material: Material::Solid { color: PLANE_COLOR },
                position: self.offset,
            },
            MeshPlacement {
                mesh: self.plane,
                material: Material::Wireframe {
                    color: WIREFRAME_COLOR,
                    opacity: WIREFRAME_OPACITY,
                },
                position: self.offset,
            },
        ]
    }
}

/// Chunks needed to cover `extent` plus one chunk of margin on each side.
fn chunk_count(extent: f64, squares_per_chunk: f64) -> u32 {
    let chunks = ((extent + squares_per_chunk) / squares_per_chunk).ceil() + 2.0;
    if chunks.is_finite() && chunks < f64::from(u32::MAX) {
        chunks as u32
    } else {
        u32::MAX
    }
}

/// `-(position mod chunk)`, normalised into `[-chunk, 0)`.
///
/// Exact multiples of the chunk land on `-chunk`, which is congruent with
/// zero and therefore draws the same grid.
pub fn chunk_offset(position: f64, chunk: f64) -> f64 {
    let mut r = (-position).rem_euclid(chunk);
    // rem_euclid can round up to `chunk` for tiny negative inputs.
    if r >= chunk {
        r -= chunk;
    }
    r - chunk
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavigationConfig;
    use crate::surface::{DisplayMetrics, HeadlessSurface};

    fn viewport() -> Viewport {
        Viewport::new(
            &NavigationConfig::default(),
            DisplayMetrics::new(1920.0, 1080.0),
            &HeadlessSurface::new(800, 600),
        )
    }

    #[test]
    fn chunk_offset_stays_within_one_chunk() {
        let chunk = 32.0;
        for p in [
            0.0, 1.0, 31.999, 32.0, 33.5, 1e9 + 0.5, -0.0, -1.0, -32.0, -33.5, -1e9, 1e-300,
            -1e-300,
        ] {
            let o = chunk_offset(p, chunk);
            assert!((-chunk..0.0).contains(&o), "offset {o} for position {p}");
        }
    }

    #[test]
    fn chunk_offset_is_negated_remainder() {
        assert_eq!(chunk_offset(5.0, 32.0), -5.0);
        assert_eq!(chunk_offset(37.0, 32.0), -5.0);
        assert_eq!(chunk_offset(-5.0, 32.0), -27.0);
        assert_eq!(chunk_offset(64.0, 32.0), -32.0);
    }

    #[test]
    fn plane_overhangs_maximum_view_by_a_chunk() {
        let vp = viewport();
        let stage = Stage::new(&vp, 32.0);
        let plane = stage.plane();
        assert!(plane.size.width >= vp.maximum_square_width() + 2.0 * 32.0);
        assert!(plane.size.height >= vp.maximum_square_height() + 2.0 * 32.0);
        assert_eq!(plane.cell_size(), Size::new(32.0, 32.0));
    }

    #[test]
    fn update_follows_viewport_position() {
        let mut vp = viewport();
        let mut stage = Stage::new(&vp, 32.0);
        vp.set_position(Point::new(100.0, -10.0));
        stage.update(&vp);
        assert_eq!(stage.offset(), Point::new(-4.0, -22.0));
        for placement in stage.placements() {
            assert_eq!(placement.position, stage.offset());
        }
    }
}
