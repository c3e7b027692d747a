// Host-side tests for configuration parsing, tunable resolution, and the
// renderer-selection decision. Pure modules included directly; the main
// crate is wasm-only.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use constants::*;

#[test]
fn parse_bool_accepts_lenient_spellings() {
    for truthy in ["1", "true", "YES", " on ", "y"] {
        assert!(parse_bool(Some(truthy), false), "{:?}", truthy);
    }
    for falsy in ["0", "false", "No", "off", "n"] {
        assert!(!parse_bool(Some(falsy), true), "{:?}", falsy);
    }
}

#[test]
fn parse_bool_keeps_fallback_for_unknown_input() {
    assert!(parse_bool(None, true));
    assert!(!parse_bool(None, false));
    assert!(parse_bool(Some("maybe"), true));
    assert!(!parse_bool(Some("maybe"), false));
}

#[test]
fn parse_f32_keeps_fallback_for_garbage_and_non_finite() {
    assert_eq!(parse_f32(Some("0.4"), 1.0), 0.4);
    assert_eq!(parse_f32(Some(" 2.5 "), 1.0), 2.5);
    assert_eq!(parse_f32(Some("banana"), 1.0), 1.0);
    assert_eq!(parse_f32(Some("inf"), 1.0), 1.0);
    assert_eq!(parse_f32(Some("NaN"), 1.0), 1.0);
    assert_eq!(parse_f32(None, 1.0), 1.0);
}

#[test]
fn parse_f32_clamped_applies_range() {
    assert_eq!(parse_f32_clamped(Some("0.9"), 0.5, 0.3, 0.6), 0.6);
    assert_eq!(parse_f32_clamped(Some("0.1"), 0.5, 0.3, 0.6), 0.3);
    assert_eq!(parse_f32_clamped(Some("bad"), 0.5, 0.3, 0.6), 0.5);
}

#[test]
fn defaults_match_documented_values() {
    let opts = RenderOptions::default();
    assert!(opts.enabled);
    assert!(opts.auto_demo);
    assert!(!opts.is_bounce);
    assert!(!opts.is_viscous);
    assert_eq!(opts.resolution, 0.5);
    assert_eq!(opts.mouse_force, 20.0);
    assert_eq!(opts.cursor_size, 100.0);
    assert_eq!(opts.takeover_duration, 0.25);
    assert_eq!(opts.auto_resume_delay_ms, 3000.0);
    assert_eq!(opts.auto_ramp_duration, 0.6);
}

#[test]
fn sim_config_clamps_and_floors_tunables() {
    let mut opts = RenderOptions {
        resolution: 0.9,
        mouse_force: 0.0,
        cursor_size: 1.0,
        auto_speed: 0.0,
        auto_intensity: 50.0,
        takeover_duration: 0.0,
        auto_ramp_duration: 0.0,
        auto_resume_delay_ms: -100.0,
        ..RenderOptions::default()
    };
    let cfg = SimConfig::from_options(&opts);
    assert_eq!(cfg.resolution, RESOLUTION_MAX);
    assert_eq!(cfg.mouse_force, MOUSE_FORCE_MIN);
    assert_eq!(cfg.cursor_radius, CURSOR_RADIUS_MIN);
    assert_eq!(cfg.auto_speed, AUTO_SPEED_MIN);
    assert_eq!(cfg.auto_intensity, INTENSITY_MAX);
    assert_eq!(cfg.takeover_sec, TAKEOVER_MIN_SEC);
    assert_eq!(cfg.ramp_sec, RAMP_MIN_SEC);
    assert_eq!(cfg.resume_delay_sec, 0.0);

    opts.resolution = 0.1;
    opts.auto_intensity = 0.0;
    let cfg = SimConfig::from_options(&opts);
    assert_eq!(cfg.resolution, RESOLUTION_MIN);
    assert_eq!(cfg.auto_intensity, INTENSITY_MIN);
}

#[test]
fn sim_config_damping_depends_on_viscous_mode() {
    let free = SimConfig::from_options(&RenderOptions::default());
    assert_eq!(free.damping_rate, FREE_DAMPING_RATE);

    let viscous = SimConfig::from_options(&RenderOptions {
        is_viscous: true,
        viscous: 40.0,
        ..RenderOptions::default()
    });
    assert_eq!(viscous.damping_rate, 40.0 / VISCOUS_DAMPING_DIVISOR);
    assert!(viscous.pointer_damping > free.pointer_damping);
}

#[test]
fn default_takeover_is_shorter_than_ramp() {
    let cfg = SimConfig::from_options(&RenderOptions::default());
    assert!(cfg.takeover_sec < cfg.ramp_sec);
    assert!(TAKEOVER_MIN_SEC < RAMP_MIN_SEC);
}

#[test]
fn renderer_choice_requires_every_capability_check() {
    assert_eq!(choose_renderer(true, false, true), RendererChoice::Animated);
    // Any failing check falls back; the engine must never be selected.
    assert_eq!(
        choose_renderer(false, false, true),
        RendererChoice::StaticFallback
    );
    assert_eq!(
        choose_renderer(true, true, true),
        RendererChoice::StaticFallback
    );
    assert_eq!(
        choose_renderer(true, false, false),
        RendererChoice::StaticFallback
    );
    assert_eq!(
        choose_renderer(false, true, false),
        RendererChoice::StaticFallback
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(MAX_FRAME_DT > 0.0 && MAX_FRAME_DT < 0.5);
    assert!(RESOLUTION_MIN < RESOLUTION_MAX);
    assert!(INTENSITY_MIN < INTENSITY_MAX);
    assert!(BOUNCE_RESTITUTION > 0.0 && BOUNCE_RESTITUTION < 1.0);
    assert!(BREATH_SCALE_MIN < 1.0 && BREATH_SCALE_MAX > 1.0);
    assert!(AUTO_EDGE_MARGIN > 0.0 && AUTO_EDGE_MARGIN < 0.5);
    assert!(FRAME_SCALE_MIN < 1.0 && FRAME_SCALE_MAX > 1.0);
    assert!(POINTER_DAMPING_MIN < POINTER_DAMPING_MAX);
    assert!(BLOB_MIN_COUNT >= 1);
    assert!(BLOBS_PER_COLOR >= 1);
}
