//! Canvas2D software renderer.
//!
//! Draws each mesh placement to an HTML `<canvas>` via
//! `CanvasRenderingContext2d`: solid planes as a clipped fill, wireframes
//! as the visible cell edges.

use tilemap_core::Material;
use tilemap_render::wireframe::{cell_edges, visible_rect};
use tilemap_render::{RenderFrame, Renderer};
use web_sys::CanvasRenderingContext2d;

/// Theme-dependent colors for the canvas renderer.
pub struct CanvasTheme {
    /// Painted where no mesh covers the canvas.
    pub bg: &'static str,
    pub line_width: f64,
}

impl CanvasTheme {
    pub fn light() -> Self {
        Self {
            bg: "#F5F5F7",
            line_width: 1.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: "#1C1C1E",
            line_width: 1.0,
        }
    }
}

pub struct Canvas2dRenderer {
    ctx: CanvasRenderingContext2d,
    theme: CanvasTheme,
}

impl Canvas2dRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, theme: CanvasTheme) -> Self {
        Self { ctx, theme }
    }

    pub fn set_theme(&mut self, theme: CanvasTheme) {
        self.theme = theme;
    }
}

impl Renderer for Canvas2dRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        // Resizing the canvas resets the 2D context state.
        log::debug!("canvas2d context reset by resize to {width}x{height}");
    }

    fn render(&mut self, frame: &RenderFrame<'_>) {
        let ctx = &self.ctx;
        let canvas = frame.canvas_size;

        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(self.theme.bg);
        ctx.fill_rect(0.0, 0.0, canvas.width, canvas.height);

        for placement in frame.meshes {
            match placement.material {
                Material::Solid { color } => {
                    if let Some(rect) = visible_rect(placement, frame.projection, canvas) {
                        ctx.set_fill_style_str(&css_color(color));
                        ctx.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
                    }
                }
                Material::Wireframe { color, opacity } => {
                    let lines = cell_edges(placement, frame.projection, canvas);
                    if lines.is_empty() {
                        continue;
                    }
                    ctx.set_global_alpha(f64::from(opacity));
                    ctx.set_stroke_style_str(&css_color(color));
                    ctx.set_line_width(self.theme.line_width);
                    ctx.begin_path();
                    for line in lines {
                        // Half-pixel offset keeps 1px lines crisp.
                        ctx.move_to(line.p0.x.round() + 0.5, line.p0.y.round() + 0.5);
                        ctx.line_to(line.p1.x.round() + 0.5, line.p1.y.round() + 0.5);
                    }
                    ctx.stroke();
                    ctx.set_global_alpha(1.0);
                }
            }
        }
    }
}

/// `0xRRGGBB` → `#rrggbb`.
fn css_color(color: u32) -> String {
    format!("#{:06x}", color & 0x00FF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn css_color_pads_and_masks() {
        assert_eq!(css_color(0xFFFFFF), "#ffffff");
        assert_eq!(css_color(0x00_00_FF), "#0000ff");
        assert_eq!(css_color(0xAB_12_34_56), "#123456");
    }
}
