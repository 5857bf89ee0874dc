//! The per-frame loop.
//!
//! One call to [`App::frame`] per display refresh. The step order is a
//! contract:
//!
//! 1. apply buffered input events to the devices;
//! 2. resize check (surface, viewport, renderer);
//! 3. wheel zoom;
//! 4. mouse-drag panning, then keyboard panning (reads step 3's scale);
//! 5. stage realignment (reads step 4's position);
//! 6. render submission;
//! 7. reset of all polled per-frame state.

use crate::buffer::EventBuffer;
use crate::controls::{KeyboardPanning, MousePanning, WheelZoom};
use crate::devices::InputDevices;
use kurbo::Vec2;
use tilemap_core::{DisplayMetrics, NavigationConfig, Stage, Surface, Viewport};
use tilemap_render::{RenderFrame, Renderer};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    /// Number of input events applied at the start of the frame.
    pub events: usize,
    pub resized: bool,
    pub zoomed: bool,
    /// Map-space offset applied by all panning controllers.
    pub panned: Vec2,
}

/// Owns the navigation state and sequences it against a surface and a
/// render backend.
pub struct App<S: Surface, R: Renderer> {
    surface: S,
    renderer: R,
    viewport: Viewport,
    stage: Stage,
    devices: InputDevices,
    events: EventBuffer,
    mouse_panning: MousePanning,
    keyboard_panning: KeyboardPanning,
    wheel_zoom: WheelZoom,
    frame: u64,
}

impl<S: Surface, R: Renderer> App<S, R> {
    /// Build the app. The config must already be validated.
    ///
    /// The surface is force-resized to its layout size straight away so the
    /// first frame renders at the right resolution.
    pub fn new(
        config: &NavigationConfig,
        display: DisplayMetrics,
        mut surface: S,
        mut renderer: R,
    ) -> Self {
        let mut viewport = Viewport::new(config, display, &surface);
        viewport.resize(&mut surface, true);
        let (width, height) = surface.pixel_size();
        renderer.resize(width, height);
        viewport.reset();

        let stage = Stage::new(&viewport, config.squares_per_chunk);
        log::debug!(
            "app ready: {width}x{height} px canvas, zoom {}, {} squares/px",
            viewport.zoom(),
            viewport.squares_per_pixel()
        );

        Self {
            surface,
            renderer,
            viewport,
            stage,
            devices: InputDevices::new(),
            events: EventBuffer::new(),
            mouse_panning: MousePanning::new(),
            keyboard_panning: KeyboardPanning::from_display(
                display,
                config.keyboard_pan_screen_percent,
            ),
            wheel_zoom: WheelZoom::new(config.wheel_zoom_per_delta),
            frame: 0,
        }
    }

    /// Producer handle for host event callbacks.
    pub fn events(&self) -> EventBuffer {
        self.events.clone()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Direct access for programmatic navigation (e.g. "go to").
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn devices(&self) -> &InputDevices {
        &self.devices
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Run one frame.
    pub fn frame(&mut self) -> FrameReport {
        self.frame += 1;

        let events = self.events.drain_into(&mut self.devices);

        let resized = self.viewport.resize(&mut self.surface, false);
        if resized {
            let (width, height) = self.surface.pixel_size();
            self.renderer.resize(width, height);
        }

        let zoomed = self.wheel_zoom.handle(&self.devices.wheel, &mut self.viewport);

        let panned = self.mouse_panning.handle(&self.devices.mouse, &mut self.viewport)
            + self.keyboard_panning.handle(&self.devices.keyboard, &mut self.viewport);

        self.stage.update(&self.viewport);

        let meshes = self.stage.placements();
        self.renderer.render(&RenderFrame {
            frame: self.frame,
            projection: self.viewport.projection(),
            canvas_size: self.viewport.canvas_size(),
            meshes: &meshes,
        });

        self.devices.reset();
        self.viewport.reset();

        let report = FrameReport {
            frame: self.frame,
            events,
            resized,
            zoomed,
            panned,
        };
        log::trace!("{report:?}");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use tilemap_core::HeadlessSurface;
    use tilemap_render::RecordingRenderer;

    fn app() -> App<HeadlessSurface, RecordingRenderer> {
        App::new(
            &NavigationConfig::default(),
            DisplayMetrics::new(1920.0, 1080.0),
            HeadlessSurface::new(800, 600),
            RecordingRenderer::new(),
        )
    }

    #[test]
    fn startup_sizes_renderer_once() {
        let app = app();
        assert_eq!(app.renderer().resizes, vec![(800, 600)]);
        assert_eq!(app.frame_count(), 0);
    }

    #[test]
    fn idle_frame_renders_stage() {
        let mut app = app();
        let report = app.frame();
        assert_eq!(report.frame, 1);
        assert!(!report.resized);
        assert!(!report.zoomed);
        assert_eq!(report.panned, Vec2::ZERO);

        let frame = app.renderer().last_frame().unwrap();
        assert_eq!(frame.meshes.len(), 2);
        assert_eq!(&frame.projection, app.viewport().projection());
    }

    #[test]
    fn events_apply_at_next_frame() {
        let mut app = app();
        let events = app.events();
        events.push(InputEvent::Wheel { delta_y: 100.0 });
        assert!(!app.devices().wheel.is_moved());

        let report = app.frame();
        assert_eq!(report.events, 1);
        assert!(report.zoomed);
        assert!(!app.devices().wheel.is_moved());
    }
}
