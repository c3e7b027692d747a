use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Probe whether a 2D canvas context can be created in this environment.
/// Any detection error counts as "no"; animation is a progressive
/// enhancement, never a hard requirement.
pub fn context_available(document: &web::Document) -> bool {
    let probe = match document.create_element("canvas") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("capability probe: cannot create canvas: {:?}", e);
            return false;
        }
    };
    let canvas: web::HtmlCanvasElement = match probe.dyn_into() {
        Ok(c) => c,
        Err(_) => return false,
    };
    matches!(canvas.get_context("2d"), Ok(Some(_)))
}

/// Current state of the OS/browser reduced-motion preference. Unknown
/// (matchMedia unavailable) is treated as not reduced.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("capability probe: matchMedia failed: {:?}", e);
            false
        }
    }
}

/// Live subscription to reduced-motion preference changes. The closure is
/// retained so the listener can be removed on teardown.
pub struct ReducedMotionWatch {
    query: web::MediaQueryList,
    closure: Closure<dyn FnMut(web::MediaQueryListEvent)>,
}

impl ReducedMotionWatch {
    pub fn subscribe(
        window: &web::Window,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<Self> {
        let query = window.match_media(REDUCED_MOTION_QUERY).ok().flatten()?;
        let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
            on_change(ev.matches());
        }) as Box<dyn FnMut(_)>);
        if query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("capability probe: reduced-motion subscription failed");
            return None;
        }
        Some(Self { query, closure })
    }
}

impl Drop for ReducedMotionWatch {
    fn drop(&mut self) {
        _ = self
            .query
            .remove_event_listener_with_callback("change", self.closure.as_ref().unchecked_ref());
    }
}
