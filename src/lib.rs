#![cfg(target_arch = "wasm32")]
//! Animated "liquid ether" background: a pointer-driven particle field
//! rendered onto a canvas, with a static gradient fallback whenever the
//! environment cannot (or should not) animate.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::capability::ReducedMotionWatch;
use crate::config::{choose_renderer, RenderOptions, RendererChoice, SimConfig};
use crate::events::SharedInput;
use crate::palette::{resolve_palette, Palette};

mod capability;
mod config;
mod constants;
mod dom;
mod events;
mod fallback;
mod frame;
mod palette;
mod render;
mod sim;

const CONTAINER_ID: &str = "liquid-ether";

/// A running simulation engine mount: its frame loop, its input listeners,
/// and the canvas it exclusively owns.
struct ActiveEngine {
    loop_handle: frame::LoopHandle,
    listeners: events::ListenerSet,
    canvas: web::HtmlCanvasElement,
}

impl ActiveEngine {
    /// Idempotent teardown: cancel the loop, remove every listener, detach
    /// the canvas.
    fn dispose(&mut self) {
        self.loop_handle.cancel();
        self.listeners.dispose();
        self.canvas.remove();
    }
}

/// Per-mount state: config and palette snapshots plus whichever renderer is
/// currently live. Re-rendered only by capability/preference signals.
struct Host {
    container: web::HtmlElement,
    fallback_layer: web::HtmlElement,
    options: RenderOptions,
    palette: Palette,
    active: Option<ActiveEngine>,
    _watch: Option<ReducedMotionWatch>,
}

impl Host {
    /// Run capability detection and mount the renderer it selects.
    fn select(&mut self) {
        let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
            return;
        };
        let reduced = capability::prefers_reduced_motion(&window);
        let context_ok = self.active.is_some() || capability::context_available(&document);
        match choose_renderer(self.options.enabled, reduced, context_ok) {
            RendererChoice::Animated => {
                if self.active.is_some() {
                    return;
                }
                match self.start_engine(&window, &document) {
                    Ok(engine) => {
                        log::info!("liquid-ether: simulation engine running");
                        self.active = Some(engine);
                    }
                    Err(e) => {
                        log::warn!("liquid-ether: engine setup failed, using fallback: {:?}", e);
                        self.show_fallback();
                    }
                }
            }
            RendererChoice::StaticFallback => {
                if let Some(mut engine) = self.active.take() {
                    log::info!("liquid-ether: capability revoked, back to fallback");
                    engine.dispose();
                }
                self.show_fallback();
            }
        }
    }

    fn show_fallback(&self) {
        frame::show_fallback(&self.fallback_layer, &self.palette);
    }

    fn start_engine(
        &self,
        window: &web::Window,
        document: &web::Document,
    ) -> anyhow::Result<ActiveEngine> {
        let sim_config = SimConfig::from_options(&self.options);
        let surface = dom::Surface::create(document, &self.container)?;
        let (width, height) =
            surface.sync_backing_size(window, &self.container, sim_config.resolution);

        let center = glam::Vec2::new(width * 0.5, height * 0.5);
        let input = Rc::new(RefCell::new(SharedInput::new(center)));
        let listeners = events::wire_input(window, &self.container, &input);

        let seed = js_sys::Date::now() as u64;
        let sim = sim::Sim::new(sim_config, self.palette.len(), width, height, seed);
        let painter = render::Painter::new(&self.palette);

        let canvas = surface.canvas.clone();
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            sim,
            surface,
            painter,
            input,
            container: self.container.clone(),
            fallback_layer: self.fallback_layer.clone(),
            last_instant: instant::Instant::now(),
            ready: false,
        }));
        let loop_handle = frame::start_loop(frame_ctx);

        Ok(ActiveEngine {
            loop_handle,
            listeners,
            canvas,
        })
    }
}

thread_local! {
    static HOST: RefCell<Option<Rc<RefCell<Host>>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("liquid-ether starting");

    if let Err(e) = mount() {
        log::error!("liquid-ether mount error: {:?}", e);
    }
    Ok(())
}

fn mount() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container: web::HtmlElement = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{} is not an HtmlElement", CONTAINER_ID))?;

    // Configuration and palette are read-only snapshots captured at mount.
    let options = dom::read_options(&container);
    let palette = resolve_palette(options.colors.as_deref());
    log::info!(
        "liquid-ether: enabled={} palette={:?} resolution={:.2}",
        options.enabled,
        palette,
        options.resolution
    );

    let fallback_layer = dom::create_fallback_layer(&document, &container)?;

    let host = Rc::new(RefCell::new(Host {
        container,
        fallback_layer,
        options,
        palette,
        active: None,
        _watch: None,
    }));

    // The fallback doubles as the loading placeholder; the engine's first
    // frame fades it out.
    host.borrow().show_fallback();

    {
        let host_for_change = host.clone();
        let watch = ReducedMotionWatch::subscribe(&window, move |reduced| {
            log::info!("liquid-ether: reduced-motion preference now {}", reduced);
            host_for_change.borrow_mut().select();
        });
        host.borrow_mut()._watch = watch;
    }

    host.borrow_mut().select();

    HOST.with(|slot| {
        *slot.borrow_mut() = Some(host);
    });
    Ok(())
}

/// Tear down the mount: stop the frame loop, remove all listeners, release
/// the surface, and leave the static gradient in place. Safe to call twice.
#[wasm_bindgen]
pub fn shutdown() {
    HOST.with(|slot| {
        if let Some(host) = slot.borrow_mut().take() {
            let mut host = host.borrow_mut();
            if let Some(mut engine) = host.active.take() {
                engine.dispose();
            }
            host._watch = None;
            host.show_fallback();
            log::info!("liquid-ether: shut down");
        }
    });
}
