//! Projection-space meshes → screen-space geometry.
//!
//! Backends without a GPU pipeline draw the stage as a filled rectangle
//! plus the visible cell edges. Only edges inside the projection are
//! generated, so the cost tracks what is on screen rather than the size of
//! the plane.

use kurbo::{Affine, Line, Point, Rect};
use tilemap_core::{MeshPlacement, Projection, Size};

/// Screen rectangle covered by a mesh, clipped to the canvas.
///
/// Returns `None` when the mesh is entirely off screen.
pub fn visible_rect(
    placement: &MeshPlacement,
    projection: &Projection,
    canvas: Size,
) -> Option<Rect> {
    let clipped = mesh_rect(placement).intersect(projection_rect(projection));
    if clipped.width() <= 0.0 || clipped.height() <= 0.0 {
        return None;
    }
    Some(projection.to_screen(canvas).transform_rect_bbox(clipped))
}

/// Screen-space cell edges of a mesh, clipped to the canvas.
pub fn cell_edges(placement: &MeshPlacement, projection: &Projection, canvas: Size) -> Vec<Line> {
    let mesh = mesh_rect(placement);
    let view = projection_rect(projection);
    let clipped = mesh.intersect(view);
    if clipped.width() <= 0.0 || clipped.height() <= 0.0 {
        return Vec::new();
    }

    let cell = placement.mesh.cell_size();
    let to_screen = projection.to_screen(canvas);
    let mut lines = Vec::new();

    for x in grid_positions(mesh.x0, cell.width, placement.mesh.segments_x, view.x0, view.x1) {
        lines.push(screen_line(
            to_screen,
            Point::new(x, clipped.y0),
            Point::new(x, clipped.y1),
        ));
    }
    for y in grid_positions(mesh.y0, cell.height, placement.mesh.segments_y, view.y0, view.y1) {
        lines.push(screen_line(
            to_screen,
            Point::new(clipped.x0, y),
            Point::new(clipped.x1, y),
        ));
    }

    log::trace!("wireframe: {} edges for {:?}", lines.len(), placement.mesh);
    lines
}

fn mesh_rect(placement: &MeshPlacement) -> Rect {
    Rect::from_center_size(placement.position, placement.mesh.size)
}

fn projection_rect(projection: &Projection) -> Rect {
    Rect::new(projection.left, projection.top, projection.right, projection.bottom)
}

fn screen_line(to_screen: Affine, a: Point, b: Point) -> Line {
    Line::new(to_screen * a, to_screen * b)
}

/// Grid line coordinates `origin + i * step` for `i` in `0..=segments`,
/// restricted to `[lo, hi]`.
fn grid_positions(
    origin: f64,
    step: f64,
    segments: u32,
    lo: f64,
    hi: f64,
) -> impl Iterator<Item = f64> {
    let (first, last) = if step > 0.0 {
        let first = ((lo - origin) / step).ceil().max(0.0);
        let last = ((hi - origin) / step).floor().min(f64::from(segments));
        (first, last)
    } else {
        (1.0, 0.0)
    };
    let count = if last >= first {
        (last - first) as u64 + 1
    } else {
        0
    };
    (0..count).map(move |i| origin + (first + i as f64) * step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tilemap_core::{Material, PlaneMesh};

    fn placement(position: Point) -> MeshPlacement {
        MeshPlacement {
            mesh: PlaneMesh {
                size: Size::new(320.0, 320.0),
                segments_x: 10,
                segments_y: 10,
            },
            material: Material::Wireframe {
                color: 0,
                opacity: 0.35,
            },
            position,
        }
    }

    #[test]
    fn edges_only_cover_the_projection() {
        // 64×64 map squares shown on a 128×128 canvas: 2 px per square.
        let projection = Projection::centered(Size::new(64.0, 64.0));
        let lines = cell_edges(&placement(Point::ORIGIN), &projection, Size::new(128.0, 128.0));

        // Cells are 32 squares: grid lines at -32, 0, 32 on each axis.
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], Line::new((0.0, 0.0), (0.0, 128.0)));
        assert_eq!(lines[1], Line::new((64.0, 0.0), (64.0, 128.0)));
        assert_eq!(lines[2], Line::new((128.0, 0.0), (128.0, 128.0)));
        assert_eq!(lines[4], Line::new((0.0, 64.0), (128.0, 64.0)));
    }

    #[test]
    fn offset_plane_shifts_edges() {
        let projection = Projection::centered(Size::new(64.0, 64.0));
        let lines = cell_edges(
            &placement(Point::new(-5.0, 0.0)),
            &projection,
            Size::new(128.0, 128.0),
        );
        let xs: Vec<f64> = lines.iter().take(2).map(|l| l.p0.x).collect();
        // Grid lines at -37, -5, 27 map space; -37 is off screen.
        assert_eq!(xs, vec![54.0, 118.0]);
    }

    #[test]
    fn off_screen_mesh_has_no_geometry() {
        let projection = Projection::centered(Size::new(64.0, 64.0));
        let far = placement(Point::new(10_000.0, 0.0));
        assert!(cell_edges(&far, &projection, Size::new(128.0, 128.0)).is_empty());
        assert_eq!(visible_rect(&far, &projection, Size::new(128.0, 128.0)), None);
    }

    #[test]
    fn visible_rect_fills_canvas_when_plane_covers_view() {
        let projection = Projection::centered(Size::new(64.0, 64.0));
        let rect = visible_rect(&placement(Point::ORIGIN), &projection, Size::new(128.0, 96.0));
        assert_eq!(rect, Some(Rect::new(0.0, 0.0, 128.0, 96.0)));
    }
}
