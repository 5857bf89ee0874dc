//! Host surface and display metrics.
//!
//! The render surface reports two sizes: the pixel size of its drawing
//! buffer and the layout (client) size it occupies on the page. The
//! viewport detects a resize when the two diverge and then adopts the
//! layout size as the new buffer size. Device pixel ratio is ignored.

use kurbo::Size;

/// Total screen size of the host display, in pixels.
///
/// Only used to size the largest area the viewport can ever show and the
/// keyboard pan step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub width: f64,
    pub height: f64,
}

impl DisplayMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The larger of the two display dimensions.
    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Display size with degenerate reports clamped to 1×1.
    pub fn clamped_size(&self) -> Size {
        clamp_extent(Size::new(self.width, self.height))
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// A render surface whose drawing buffer can be resized.
pub trait Surface {
    /// Current size of the drawing buffer, in pixels.
    fn pixel_size(&self) -> (u32, u32);

    /// Size the surface occupies in the page layout.
    fn layout_size(&self) -> (u32, u32);

    /// Resize the drawing buffer.
    fn set_pixel_size(&mut self, width: u32, height: u32);
}

/// An in-memory surface for native hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSurface {
    pub pixel: (u32, u32),
    pub layout: (u32, u32),
}

impl HeadlessSurface {
    /// A surface whose buffer already matches its layout size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixel: (width, height),
            layout: (width, height),
        }
    }

    /// Simulate the host changing the layout size (e.g. a window resize).
    pub fn set_layout_size(&mut self, width: u32, height: u32) {
        self.layout = (width, height);
    }
}

impl Surface for HeadlessSurface {
    fn pixel_size(&self) -> (u32, u32) {
        self.pixel
    }

    fn layout_size(&self) -> (u32, u32) {
        self.layout
    }

    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.pixel = (width, height);
    }
}

/// Clamp an extent so neither dimension drops below one pixel.
///
/// NaN collapses to 1 as well.
pub fn clamp_extent(size: Size) -> Size {
    let clamp = |v: f64| if v >= 1.0 { v } else { 1.0 };
    Size::new(clamp(size.width), clamp(size.height))
}

/// Integer variant of [`clamp_extent`] for surface buffer sizes.
pub fn clamp_pixels((width, height): (u32, u32)) -> (u32, u32) {
    (width.max(1), height.max(1))
}
