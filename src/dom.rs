use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::config::{parse_bool, parse_f32, parse_f32_clamped, RenderOptions};
use crate::constants::{
    DPR_MAX, INTENSITY_MAX, INTENSITY_MIN, RESOLUTION_MAX, RESOLUTION_MIN,
};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Read the recognized configuration options from the container's `data-*`
/// attributes. Read once at mount; unknown or malformed values keep their
/// defaults.
pub fn read_options(container: &web::Element) -> RenderOptions {
    let attr = |name: &str| container.get_attribute(name);
    let defaults = RenderOptions::default();
    RenderOptions {
        enabled: parse_bool(attr("data-enabled").as_deref(), defaults.enabled),
        colors: attr("data-colors"),
        resolution: parse_f32_clamped(
            attr("data-resolution").as_deref(),
            defaults.resolution,
            RESOLUTION_MIN,
            RESOLUTION_MAX,
        ),
        mouse_force: parse_f32(attr("data-mouse-force").as_deref(), defaults.mouse_force),
        cursor_size: parse_f32(attr("data-cursor-size").as_deref(), defaults.cursor_size),
        is_viscous: parse_bool(attr("data-is-viscous").as_deref(), defaults.is_viscous),
        viscous: parse_f32(attr("data-viscous").as_deref(), defaults.viscous),
        iterations_viscous: parse_f32(
            attr("data-iterations-viscous").as_deref(),
            defaults.iterations_viscous,
        ),
        iterations_poisson: parse_f32(
            attr("data-iterations-poisson").as_deref(),
            defaults.iterations_poisson,
        ),
        is_bounce: parse_bool(attr("data-bounce").as_deref(), defaults.is_bounce),
        auto_demo: parse_bool(attr("data-auto-demo").as_deref(), defaults.auto_demo),
        auto_speed: parse_f32(attr("data-auto-speed").as_deref(), defaults.auto_speed),
        auto_intensity: parse_f32_clamped(
            attr("data-auto-intensity").as_deref(),
            defaults.auto_intensity,
            INTENSITY_MIN,
            INTENSITY_MAX,
        ),
        takeover_duration: parse_f32(
            attr("data-takeover-duration").as_deref(),
            defaults.takeover_duration,
        ),
        auto_resume_delay_ms: parse_f32(
            attr("data-auto-resume-delay").as_deref(),
            defaults.auto_resume_delay_ms,
        ),
        auto_ramp_duration: parse_f32(
            attr("data-auto-ramp-duration").as_deref(),
            defaults.auto_ramp_duration,
        ),
    }
}

/// Create the always-present fallback layer inside the container.
pub fn create_fallback_layer(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlElement> {
    let layer: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow!("create fallback layer: {:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not an HtmlElement"))?;
    layer
        .set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow!("{:?}", e))?;
    let style = layer.style();
    _ = style.set_property("position", "absolute");
    _ = style.set_property("inset", "0");
    _ = style.set_property("transition", "opacity 700ms ease");
    container
        .append_child(&layer)
        .map_err(|e| anyhow!("append fallback layer: {:?}", e))?;
    Ok(layer)
}

/// Canvas plus its 2D context; exclusively owned by one engine mount.
pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    /// Create a canvas inside `container` and acquire its 2D context.
    pub fn create(
        document: &web::Document,
        container: &web::HtmlElement,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow!("create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|_| anyhow!("created element is not a canvas"))?;
        canvas
            .set_attribute("aria-hidden", "true")
            .map_err(|e| anyhow!("{:?}", e))?;
        let style = canvas.style();
        _ = style.set_property("position", "absolute");
        _ = style.set_property("inset", "0");
        _ = style.set_property("width", "100%");
        _ = style.set_property("height", "100%");

        // Acquire the context before attaching, so a failed probe leaves
        // nothing behind in the DOM.
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get 2d context: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("context is not CanvasRenderingContext2d"))?;

        container
            .append_child(&canvas)
            .map_err(|e| anyhow!("append canvas: {:?}", e))?;

        Ok(Self { canvas, ctx })
    }

    /// Size the backing store to the container's CSS size x
    /// min(devicePixelRatio, cap) x resolution scale, and keep the draw
    /// transform in CSS pixel space. Returns the CSS size in pixels.
    pub fn sync_backing_size(
        &self,
        window: &web::Window,
        container: &web::HtmlElement,
        resolution: f32,
    ) -> (f32, f32) {
        let rect = container.get_bounding_client_rect();
        let width = rect.width().max(1.0);
        let height = rect.height().max(1.0);
        let dpr = window.device_pixel_ratio().min(DPR_MAX);
        let scale = dpr * resolution as f64;
        let backing_w = ((width * scale).floor() as u32).max(1);
        let backing_h = ((height * scale).floor() as u32).max(1);
        if self.canvas.width() != backing_w || self.canvas.height() != backing_h {
            self.canvas.set_width(backing_w);
            self.canvas.set_height(backing_h);
        }
        let sx = backing_w as f64 / width;
        let sy = backing_h as f64 / height;
        _ = self.ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0);
        (width as f32, height as f32)
    }
}
