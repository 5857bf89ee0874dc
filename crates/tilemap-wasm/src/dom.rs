//! DOM plumbing: the canvas surface, event listeners, and the
//! `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tilemap_core::Surface;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlCanvasElement, Window};

// ─── Surface ─────────────────────────────────────────────────────────────

/// An HTML canvas: the drawing buffer is `width`/`height`, the layout size
/// is `clientWidth`/`clientHeight`.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl Surface for CanvasSurface {
    fn pixel_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn layout_size(&self) -> (u32, u32) {
        (
            self.canvas.client_width().max(0) as u32,
            self.canvas.client_height().max(0) as u32,
        )
    }

    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

// ─── Event listeners ─────────────────────────────────────────────────────

/// A DOM event listener, removed from its target on drop.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

// ─── Frame loop ──────────────────────────────────────────────────────────

/// Calls `tick` once per display refresh until dropped.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

struct Inner {
    window: Window,
    raf_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    pub fn start(window: Window, mut tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let inner = Rc::new(Inner {
            window,
            raf_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let inner_cb = Rc::downgrade(&inner);
        let cb = Closure::<dyn FnMut()>::new(move || {
            let Some(inner) = inner_cb.upgrade() else {
                return;
            };
            inner.raf_id.set(None);
            tick();
            if let Err(err) = inner.schedule() {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        });
        *inner.callback.borrow_mut() = Some(cb);
        inner.schedule()?;

        Ok(Self { inner })
    }
}

impl Inner {
    fn schedule(&self) -> Result<(), JsValue> {
        let cb_ref = self.callback.borrow();
        let Some(cb) = cb_ref.as_ref() else {
            return Ok(());
        };
        let id = self.window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        self.raf_id.set(Some(id));
        Ok(())
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(raf_id) = self.inner.raf_id.replace(None) {
            let _ = self.inner.window.cancel_animation_frame(raf_id);
        }
        self.inner.callback.borrow_mut().take();
    }
}
