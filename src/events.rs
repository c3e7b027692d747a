use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fields written by event handlers and consumed by the next frame. This is
/// the only cross-task path; event dispatch and the frame callback share one
/// execution context, so plain writes are enough (last write wins).
pub struct SharedInput {
    pub pointer: Vec2,
    /// Pointer pressed or recently moved; cleared on release/cancel.
    pub active: bool,
    pub last_interaction: Instant,
    /// Viewport changed since the last frame.
    pub resized: bool,
    /// Window lost focus since the last frame; drive drops immediately.
    pub blurred: bool,
}

impl SharedInput {
    pub fn new(pointer: Vec2) -> Self {
        Self {
            pointer,
            active: false,
            last_interaction: Instant::now(),
            resized: false,
            blurred: false,
        }
    }
}

/// Explicit listener registrations with a disposer. The engine can be torn
/// down and remounted, so every closure is retained and removed on dispose
/// rather than leaked with `Closure::forget`.
pub struct ListenerSet {
    entries: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to register {} listener", kind);
            return;
        }
        self.entries.push((target.clone(), kind, closure));
    }

    /// Remove every registration. Idempotent.
    pub fn dispose(&mut self) {
        for (target, kind, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Wire pointer/resize/blur handlers on the window, all writing into the
/// shared input snapshot. Pointer samples are mapped into the container's
/// coordinate space. Returns the disposer capturing every registration.
pub fn wire_input(
    window: &web::Window,
    container: &web::HtmlElement,
    input: &Rc<RefCell<SharedInput>>,
) -> ListenerSet {
    let mut listeners = ListenerSet::new();
    let target: &web::EventTarget = window.as_ref();

    for kind in ["pointermove", "pointerdown"] {
        let input = input.clone();
        let container = container.clone();
        listeners.add(target, kind, move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let rect = container.get_bounding_client_rect();
                let mut state = input.borrow_mut();
                state.pointer = Vec2::new(
                    ev.client_x() as f32 - rect.left() as f32,
                    ev.client_y() as f32 - rect.top() as f32,
                );
                state.active = true;
                state.last_interaction = Instant::now();
            }
        });
    }

    for kind in ["pointerup", "pointercancel"] {
        let input = input.clone();
        listeners.add(target, kind, move |_ev: web::Event| {
            let mut state = input.borrow_mut();
            state.active = false;
            state.last_interaction = Instant::now();
        });
    }

    {
        let input = input.clone();
        listeners.add(target, "blur", move |_ev: web::Event| {
            let mut state = input.borrow_mut();
            state.active = false;
            state.blurred = true;
        });
    }

    {
        let input = input.clone();
        listeners.add(target, "resize", move |_ev: web::Event| {
            input.borrow_mut().resized = true;
        });
    }

    listeners
}
