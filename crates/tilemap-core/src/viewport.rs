//! The map viewport: camera position, zoom, and derived projection.
//!
//! Every mutator ends in [`Viewport::update`], which recomputes the
//! squares-per-pixel ratio, the visible map bounds, and the projection.
//! Nothing is recomputed lazily behind an accessor.
//!
//! ## Zoom polarity
//!
//! `zoom = 0` is fully zoomed out and shows `max_squares_per_pixel` map
//! squares per pixel; `zoom = 1` is fully zoomed in and shows
//! `min_squares_per_pixel`.

use crate::config::NavigationConfig;
use crate::projection::Projection;
use crate::surface::{DisplayMetrics, Surface, clamp_pixels};
use kurbo::{Point, Rect, Size, Vec2};

/// The camera onto the infinite map.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Map-space centre of the view.
    position: Point,
    /// Zoom factor in `[0, 1]`.
    zoom: f64,
    min_squares_per_pixel: f64,
    max_squares_per_pixel: f64,
    /// Map squares covered by one canvas pixel.
    squares_per_pixel: f64,
    /// Pixel size of the render surface, never below 1×1.
    canvas_size: Size,
    /// Visible map rectangle.
    map_bounds: Rect,
    /// Visible map area when full screen and fully zoomed out.
    maximum_map_dimensions: Size,
    projection: Projection,
    /// Sticky resize verdict for the current frame. Cleared by `reset`.
    canvas_resized: bool,
}

impl Viewport {
    /// Create a viewport sized from the surface's current drawing buffer.
    pub fn new<S: Surface + ?Sized>(
        config: &NavigationConfig,
        display: DisplayMetrics,
        surface: &S,
    ) -> Self {
        let (width, height) = clamp_pixels(surface.pixel_size());
        let display_size = display.clamped_size();
        let mut viewport = Self {
            position: config.initial_position,
            zoom: config.initial_zoom.clamp(0.0, 1.0),
            min_squares_per_pixel: config.min_squares_per_pixel,
            max_squares_per_pixel: config.max_squares_per_pixel,
            squares_per_pixel: config.min_squares_per_pixel,
            canvas_size: Size::new(f64::from(width), f64::from(height)),
            map_bounds: Rect::ZERO,
            maximum_map_dimensions: Size::new(
                display_size.width * config.max_squares_per_pixel,
                display_size.height * config.max_squares_per_pixel,
            ),
            projection: Projection::default(),
            canvas_resized: false,
        };
        viewport.update();
        viewport
    }

    // ─── Position ────────────────────────────────────────────────────────

    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the centre of the view. The map is unbounded, so any point is
    /// accepted.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.update();
    }

    pub fn offset_position(&mut self, delta: Vec2) {
        self.set_position(self.position + delta);
    }

    // ─── Zoom ────────────────────────────────────────────────────────────

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor. Values outside `[0, 1]` are clamped; NaN is
    /// ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            log::warn!("ignoring NaN zoom");
            return;
        }
        self.zoom = zoom.clamp(0.0, 1.0);
        self.update();
    }

    /// Positive amounts zoom in, negative amounts zoom out.
    pub fn increment_zoom(&mut self, amount: f64) {
        self.set_zoom(self.zoom + amount);
    }

    pub fn squares_per_pixel(&self) -> f64 {
        self.squares_per_pixel
    }

    pub fn min_squares_per_pixel(&self) -> f64 {
        self.min_squares_per_pixel
    }

    pub fn max_squares_per_pixel(&self) -> f64 {
        self.max_squares_per_pixel
    }

    // ─── Derived geometry ────────────────────────────────────────────────

    pub fn map_bounds(&self) -> Rect {
        self.map_bounds
    }

    pub fn map_dimensions(&self) -> Size {
        self.map_bounds.size()
    }

    /// Width of the visible area in map squares.
    pub fn square_width(&self) -> f64 {
        self.map_bounds.width()
    }

    /// Height of the visible area in map squares.
    pub fn square_height(&self) -> f64 {
        self.map_bounds.height()
    }

    pub fn maximum_map_dimensions(&self) -> Size {
        self.maximum_map_dimensions
    }

    pub fn maximum_square_width(&self) -> f64 {
        self.maximum_map_dimensions.width
    }

    pub fn maximum_square_height(&self) -> f64 {
        self.maximum_map_dimensions.height
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    // ─── Coordinate conversion ───────────────────────────────────────────

    /// Convert a pixel-space distance to a map-space distance.
    pub fn pixel_delta_to_map(&self, delta: Vec2) -> Vec2 {
        delta * self.squares_per_pixel
    }

    /// Map coordinate under a canvas pixel.
    pub fn pixel_to_map(&self, pixel: Point) -> Point {
        let centre = Point::new(self.canvas_size.width / 2.0, self.canvas_size.height / 2.0);
        self.position + self.pixel_delta_to_map(pixel - centre)
    }

    /// Canvas pixel showing a map coordinate.
    pub fn map_to_pixel(&self, map: Point) -> Point {
        let centre = Point::new(self.canvas_size.width / 2.0, self.canvas_size.height / 2.0);
        centre + (map - self.position) / self.squares_per_pixel
    }

    // ─── Resize ──────────────────────────────────────────────────────────

    /// Whether the surface was resized during the current frame.
    ///
    /// Once a resize is seen, every call returns `true` until [`reset`].
    ///
    /// [`reset`]: Viewport::reset
    pub fn resized<S: Surface + ?Sized>(&mut self, surface: &S) -> bool {
        self.canvas_resized =
            self.canvas_resized || surface.pixel_size() != clamp_pixels(surface.layout_size());
        self.canvas_resized
    }

    /// Adopt the surface's layout size as its pixel size when the two
    /// differ, or unconditionally when `force` is set.
    ///
    /// Returns whether a resize happened. A zero-sized layout is treated as
    /// a degenerate 1×1 surface.
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &mut S, force: bool) -> bool {
        if force {
            self.canvas_resized = true;
        }
        if !self.resized(surface) {
            return false;
        }

        let layout = surface.layout_size();
        let (width, height) = clamp_pixels(layout);
        if (width, height) != layout {
            log::warn!(
                "degenerate surface layout {}x{}, clamping to {width}x{height}",
                layout.0,
                layout.1
            );
        }
        if surface.pixel_size() != (width, height) {
            surface.set_pixel_size(width, height);
        }
        self.canvas_size = Size::new(f64::from(width), f64::from(height));
        self.update();
        log::debug!(
            "viewport resized to {width}x{height} px ({}x{} squares)",
            self.square_width(),
            self.square_height()
        );
        true
    }

    // ─── Frame protocol ──────────────────────────────────────────────────

    /// Recompute all derived state from position, zoom, and canvas size.
    pub fn update(&mut self) {
        self.squares_per_pixel = lerp(
            self.max_squares_per_pixel,
            self.min_squares_per_pixel,
            self.zoom,
        );

        let half_width = self.squares_per_pixel * self.canvas_size.width / 2.0;
        let half_height = self.squares_per_pixel * self.canvas_size.height / 2.0;
        self.map_bounds = Rect::new(
            (self.position.x - half_width).floor(),
            (self.position.y - half_height).floor(),
            (self.position.x + half_width).floor(),
            (self.position.y + half_height).floor(),
        );

        self.projection = Projection::centered(self.map_bounds.size());
    }

    /// Clear per-frame state. Call once per frame, after rendering.
    pub fn reset(&mut self) {
        self.canvas_resized = false;
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
