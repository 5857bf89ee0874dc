//! WASM bridge for the tilemap: binds the navigation engine to a canvas.
//!
//! Compiled via `wasm-pack build --target web`. JavaScript creates a
//! `TileMap` over a `<canvas>`, calls `start()`, and the map then pans with
//! mouse drag and arrow keys and zooms with the wheel on its own.

mod dom;
mod logging;
mod render2d;

use dom::{CanvasSurface, FrameLoop, Listener};
use render2d::{Canvas2dRenderer, CanvasTheme};
use std::cell::RefCell;
use std::rc::Rc;
use tilemap_core::{DisplayMetrics, NavigationConfig, Point};
use tilemap_nav::{App, EventBuffer, InputEvent};
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Event, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent,
};

type CanvasApp = App<CanvasSurface, Canvas2dRenderer>;

/// Keys whose default browser action (page scroll) is suppressed.
const CAPTURED_KEYS: [&str; 4] = ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"];

/// The JavaScript-facing map controller.
#[wasm_bindgen]
pub struct TileMap {
    app: Rc<RefCell<CanvasApp>>,
    canvas: HtmlCanvasElement,
    listeners: Vec<Listener>,
    frame_loop: Option<FrameLoop>,
}

#[wasm_bindgen]
impl TileMap {
    /// Create a map over `canvas`. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: &str) -> Result<TileMap, JsValue> {
        console_error_panic_hook_setup();
        logging::init(log::LevelFilter::Info);

        let config = if config_json.trim().is_empty() {
            NavigationConfig::default()
        } else {
            NavigationConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?
        };

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let display = display_metrics(&window)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let app = App::new(
            &config,
            display,
            CanvasSurface::new(canvas.clone()),
            Canvas2dRenderer::new(ctx, CanvasTheme::light()),
        );

        Ok(Self {
            app: Rc::new(RefCell::new(app)),
            canvas,
            listeners: Vec::new(),
            frame_loop: None,
        })
    }

    /// Attach input listeners and start rendering every display frame.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.frame_loop.is_some() {
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let events = self.app.borrow().events();

        self.listeners = attach_listeners(&self.canvas, &window, &events)?;

        let app = self.app.clone();
        self.frame_loop = Some(FrameLoop::start(window, move || {
            app.borrow_mut().frame();
        })?);
        log::info!("tilemap started");
        Ok(())
    }

    /// Detach listeners and stop the frame loop.
    pub fn stop(&mut self) {
        self.frame_loop = None;
        self.listeners.clear();
        log::info!("tilemap stopped");
    }

    /// Run a single frame by hand (e.g. while stopped).
    pub fn render_frame(&self) {
        self.app.borrow_mut().frame();
    }

    pub fn set_theme(&self, is_dark: bool) {
        let theme = if is_dark {
            CanvasTheme::dark()
        } else {
            CanvasTheme::light()
        };
        self.app.borrow_mut().renderer_mut().set_theme(theme);
    }

    /// Set the console log level (`"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`).
    pub fn set_log_level(&self, level: &str) {
        logging::init(logging::parse_level(level));
    }

    pub fn position_x(&self) -> f64 {
        self.app.borrow().viewport().position().x
    }

    pub fn position_y(&self) -> f64 {
        self.app.borrow().viewport().position().y
    }

    pub fn set_position(&self, x: f64, y: f64) {
        self.app.borrow_mut().viewport_mut().set_position(Point::new(x, y));
    }

    pub fn zoom(&self) -> f64 {
        self.app.borrow().viewport().zoom()
    }

    pub fn set_zoom(&self, zoom: f64) {
        self.app.borrow_mut().viewport_mut().set_zoom(zoom);
    }

    pub fn squares_per_pixel(&self) -> f64 {
        self.app.borrow().viewport().squares_per_pixel()
    }

    /// Map coordinate under a canvas pixel, as `[x, y]`.
    pub fn pixel_to_map(&self, x: f64, y: f64) -> Vec<f64> {
        let p = self.app.borrow().viewport().pixel_to_map(Point::new(x, y));
        vec![p.x, p.y]
    }

    /// Visible map rectangle as JSON `{ "x0", "y0", "x1", "y1" }`.
    pub fn map_bounds_json(&self) -> String {
        let b = self.app.borrow().viewport().map_bounds();
        serde_json::json!({ "x0": b.x0, "y0": b.y0, "x1": b.x1, "y1": b.y1 }).to_string()
    }
}

impl Drop for TileMap {
    fn drop(&mut self) {
        self.stop();
    }
}

fn display_metrics(window: &web_sys::Window) -> Result<DisplayMetrics, JsValue> {
    let screen = window.screen()?;
    Ok(DisplayMetrics::new(
        f64::from(screen.width()?),
        f64::from(screen.height()?),
    ))
}

/// Wire DOM events into the event buffer. Pointer and wheel events come
/// from the canvas, keyboard and focus events from the window.
fn attach_listeners(
    canvas: &HtmlCanvasElement,
    window: &web_sys::Window,
    events: &EventBuffer,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::with_capacity(8);

    let pointer = |kind: &'static str, make: fn(f64, f64) -> InputEvent| {
        let events = events.clone();
        Listener::attach(canvas, kind, move |e: Event| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                events.push(make(f64::from(e.offset_x()), f64::from(e.offset_y())));
            }
        })
    };
    listeners.push(pointer("mousemove", |x, y| InputEvent::PointerMove { x, y })?);
    listeners.push(pointer("mousedown", |x, y| InputEvent::PointerDown { x, y })?);
    listeners.push(pointer("mouseup", |x, y| InputEvent::PointerUp { x, y })?);

    let leave_events = events.clone();
    listeners.push(Listener::attach(canvas, "mouseleave", move |_e: Event| {
        leave_events.push(InputEvent::PointerLeave);
    })?);

    let wheel_events = events.clone();
    listeners.push(Listener::attach(canvas, "wheel", move |e: Event| {
        if let Some(e) = e.dyn_ref::<WheelEvent>() {
            e.prevent_default();
            wheel_events.push(InputEvent::Wheel {
                delta_y: e.delta_y(),
            });
        }
    })?);

    let keyboard = |kind: &'static str, make: fn(String) -> InputEvent| {
        let events = events.clone();
        Listener::attach(window, kind, move |e: Event| {
            if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                let key = e.key();
                if CAPTURED_KEYS.contains(&key.as_str()) {
                    e.prevent_default();
                }
                events.push(make(key));
            }
        })
    };
    listeners.push(keyboard("keydown", |key| InputEvent::KeyDown { key })?);
    listeners.push(keyboard("keyup", |key| InputEvent::KeyUp { key })?);
    listeners.push(keyboard("keypress", |key| InputEvent::KeyPress { key })?);

    let blur_events = events.clone();
    listeners.push(Listener::attach(window, "blur", move |_e: Event| {
        blur_events.push(InputEvent::FocusLost);
    })?);

    Ok(listeners)
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("tilemap WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
