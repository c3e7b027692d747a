use fnv::FnvHashMap;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::*;
use crate::palette::{hex_to_rgb, rgba_string};
use crate::sim::Sim;

/// Canvas-2D painter for the particle field. Color strings are memoized per
/// (palette index, alpha) since the same handful is rebuilt every frame.
pub struct Painter {
    colors: Vec<[u8; 3]>,
    rgba_cache: FnvHashMap<(usize, u32), String>,
    trail: String,
    veil: String,
}

impl Painter {
    pub fn new(palette: &[String]) -> Self {
        Self {
            colors: palette.iter().map(|hex| hex_to_rgb(hex)).collect(),
            rgba_cache: FnvHashMap::default(),
            trail: rgba_string(TRAIL_RGB, TRAIL_ALPHA),
            veil: rgba_string(VEIL_RGB, VEIL_ALPHA),
        }
    }

    fn rgba(&mut self, color_index: usize, alpha: f32) -> String {
        let idx = color_index % self.colors.len().max(1);
        let key = (idx, alpha.to_bits());
        if let Some(cached) = self.rgba_cache.get(&key) {
            return cached.clone();
        }
        let value = rgba_string(self.colors[idx], alpha);
        self.rgba_cache.insert(key, value.clone());
        value
    }

    /// Redraw the full surface from current simulation state: trail fade,
    /// additive per-particle radial gradients, then a soft-light veil.
    /// Per-frame draw never fails; context errors are swallowed.
    pub fn draw(&mut self, ctx: &web::CanvasRenderingContext2d, sim: &Sim) {
        let (width, height) = (sim.width as f64, sim.height as f64);

        _ = ctx.set_global_composite_operation("source-over");
        ctx.set_fill_style(&JsValue::from_str(&self.trail));
        ctx.fill_rect(0.0, 0.0, width, height);

        _ = ctx.set_global_composite_operation("lighter");
        for blob in &sim.blobs {
            let (x, y, r) = (blob.pos.x as f64, blob.pos.y as f64, blob.radius as f64);
            let gradient = match ctx.create_radial_gradient(x, y, 0.0, x, y, r.max(1.0)) {
                Ok(g) => g,
                Err(_) => continue,
            };
            _ = gradient.add_color_stop(0.0, &self.rgba(blob.color_index, BLOB_CORE_ALPHA));
            _ = gradient.add_color_stop(BLOB_MID_STOP, &self.rgba(blob.color_index, BLOB_MID_ALPHA));
            _ = gradient.add_color_stop(1.0, &self.rgba(blob.color_index, 0.0));
            ctx.set_fill_style(&gradient);
            ctx.begin_path();
            _ = ctx.arc(x, y, r.max(1.0), 0.0, std::f64::consts::TAU);
            ctx.fill();
        }

        _ = ctx.set_global_composite_operation("soft-light");
        ctx.set_fill_style(&JsValue::from_str(&self.veil));
        ctx.fill_rect(0.0, 0.0, width, height);
        _ = ctx.set_global_composite_operation("source-over");
    }
}
