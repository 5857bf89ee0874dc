//! Mesh descriptors handed to the render backend.
//!
//! The core never touches GPU resources. It describes what to draw and
//! where; the backend decides how.

use kurbo::{Point, Size};

/// A tessellated plane centred on its placement position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMesh {
    /// Extent in map squares.
    pub size: Size,
    /// Number of cells along x.
    pub segments_x: u32,
    /// Number of cells along y.
    pub segments_y: u32,
}

impl PlaneMesh {
    /// Size of a single cell in map squares.
    pub fn cell_size(&self) -> Size {
        Size::new(
            self.size.width / f64::from(self.segments_x.max(1)),
            self.size.height / f64::from(self.segments_y.max(1)),
        )
    }
}

/// How a mesh is shaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Opaque fill, `0xRRGGBB`.
    Solid { color: u32 },
    /// Cell edges only, drawn on top without depth testing.
    Wireframe { color: u32, opacity: f32 },
}

/// A mesh placed in projection space for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshPlacement {
    pub mesh: PlaneMesh,
    pub material: Material,
    /// Centre of the mesh in projection space.
    pub position: Point,
}
