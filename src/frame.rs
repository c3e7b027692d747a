use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::events::SharedInput;
use crate::render::Painter;
use crate::sim::{FrameInput, Sim};
use crate::{dom, fallback};

/// Everything one frame touches. Owned by the loop closure; event handlers
/// only reach the `input` snapshot.
pub struct FrameContext {
    pub sim: Sim,
    pub surface: dom::Surface,
    pub painter: Painter,
    pub input: Rc<RefCell<SharedInput>>,
    /// Element the canvas fills; measured again on resize.
    pub container: web::HtmlElement,
    /// Fallback layer, faded out once the first frame has been drawn.
    pub fallback_layer: web::HtmlElement,
    pub last_instant: Instant,
    pub ready: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let (pointer, active, idle_seconds, resized, blurred) = {
            let mut input = self.input.borrow_mut();
            let idle = input.last_interaction.elapsed().as_secs_f32();
            let resized = std::mem::take(&mut input.resized);
            let blurred = std::mem::take(&mut input.blurred);
            (input.pointer, input.active, idle, resized, blurred)
        };

        if resized {
            if let Some(window) = web::window() {
                let (w, h) = self.surface.sync_backing_size(
                    &window,
                    &self.container,
                    self.sim.config.resolution,
                );
                self.sim.resize(w, h);
            }
        }
        if blurred {
            self.sim.release_pointer();
        }

        self.sim.tick(FrameInput {
            dt,
            pointer,
            pointer_active: active,
            idle_seconds,
        });
        self.painter.draw(&self.surface.ctx, &self.sim);

        if !self.ready {
            self.ready = true;
            _ = self.fallback_layer.style().set_property("opacity", "0");
        }
    }
}

/// Handle for cancelling a running loop. Cancellation is idempotent; once
/// cancelled the pending callback bails out without rescheduling.
pub struct LoopHandle {
    disposed: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if self.disposed.replace(true) {
            return;
        }
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(self.raf_id.get());
        }
        // Dropping the closure releases the frame context and its surface.
        self.tick.borrow_mut().take();
    }
}

/// Drive the frame loop from requestAnimationFrame. The closure re-registers
/// itself at the end of each frame and drops out once cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let disposed = Rc::new(Cell::new(false));
    let raf_id = Rc::new(Cell::new(0));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let disposed_tick = disposed.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if disposed_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }

    LoopHandle {
        disposed,
        raf_id,
        tick,
    }
}

/// Paint the static gradient onto the fallback layer and make it visible.
pub fn show_fallback(layer: &web::HtmlElement, palette: &[String]) {
    let style = layer.style();
    _ = style.set_property("background", &fallback::fallback_gradient(palette));
    _ = style.set_property("opacity", "1");
}
