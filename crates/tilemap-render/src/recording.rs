//! A renderer that records what it was asked to draw.
//!
//! Used by headless hosts and tests to observe the frame loop.

use crate::{RenderFrame, Renderer};
use tilemap_core::{MeshPlacement, Projection, Size};

/// An owned copy of one submitted frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub frame: u64,
    pub projection: Projection,
    pub canvas_size: Size,
    pub meshes: Vec<MeshPlacement>,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RecordedFrame>,
    /// Every size passed to `resize`, in order.
    pub resizes: Vec<(u32, u32)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.resizes.push((width, height));
    }

    fn render(&mut self, frame: &RenderFrame<'_>) {
        self.frames.push(RecordedFrame {
            frame: frame.frame,
            projection: *frame.projection,
            canvas_size: frame.canvas_size,
            meshes: frame.meshes.to_vec(),
        });
    }
}
