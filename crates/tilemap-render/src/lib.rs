//! Render submission for the tilemap.
//!
//! The navigation core only knows the [`Renderer`] trait. Backends (the
//! Canvas2D renderer in `tilemap-wasm`, a GPU renderer, or the
//! [`RecordingRenderer`] used by headless tests) receive one
//! [`RenderFrame`] per display frame and must finish drawing before
//! returning.

pub mod recording;
pub mod wireframe;

pub use recording::RecordingRenderer;

use tilemap_core::{MeshPlacement, Projection, Size};

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    /// Monotonic frame counter, starting at 1.
    pub frame: u64,
    pub projection: &'a Projection,
    /// Canvas drawing-buffer size in pixels.
    pub canvas_size: Size,
    /// Meshes in draw order.
    pub meshes: &'a [MeshPlacement],
}

/// A render backend.
pub trait Renderer {
    /// The surface drawing buffer changed size.
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Draw one frame synchronously.
    fn render(&mut self, frame: &RenderFrame<'_>);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height);
    }

    fn render(&mut self, frame: &RenderFrame<'_>) {
        (**self).render(frame);
    }
}
