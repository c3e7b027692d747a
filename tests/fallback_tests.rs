// Host-side tests for the static fallback gradient and the mount decision
// it backs. Pure modules included directly; the main crate is wasm-only.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod palette {
    include!("../src/palette.rs");
}
mod fallback {
    include!("../src/fallback.rs");
}

use config::{choose_renderer, RendererChoice};
use fallback::fallback_gradient;
use palette::resolve_palette;

#[test]
fn gradient_layers_every_palette_color() {
    let palette = resolve_palette(Some("#111111,#222222,#333333"));
    let gradient = fallback_gradient(&palette);
    assert!(gradient.contains("rgba(17, 17, 17"));
    assert!(gradient.contains("rgba(34, 34, 34"));
    assert!(gradient.contains("rgba(51, 51, 51"));
}

#[test]
fn gradient_uses_fixed_anchors_and_wash() {
    let gradient = fallback_gradient(&resolve_palette(None));
    assert!(gradient.contains("radial-gradient(circle at 15% 20%"));
    assert!(gradient.contains("radial-gradient(circle at 85% 25%"));
    assert!(gradient.contains("radial-gradient(circle at 50% 80%"));
    assert!(gradient.contains("linear-gradient(125deg"));
    // Four comma-separated layers.
    assert_eq!(gradient.matches("gradient(").count(), 4);
}

#[test]
fn brand_palette_gradient_is_deterministic() {
    let palette = resolve_palette(None);
    assert!(fallback_gradient(&palette).contains("rgba(124, 58, 237"));
    assert_eq!(fallback_gradient(&palette), fallback_gradient(&palette));
}

#[test]
fn disabled_mount_must_render_only_the_fallback() {
    // enabled=false short-circuits: no engine, no frame loop, regardless of
    // the other capability probes.
    for reduced in [false, true] {
        for context_ok in [false, true] {
            assert_eq!(
                choose_renderer(false, reduced, context_ok),
                RendererChoice::StaticFallback
            );
        }
    }
}
