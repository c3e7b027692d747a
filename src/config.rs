use crate::constants::*;

/// Raw configuration read once per mount. Changing any value requires a
/// remount of the simulation engine; nothing here is mutated afterwards.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub enabled: bool,
    pub colors: Option<String>,
    pub resolution: f32,
    pub mouse_force: f32,
    pub cursor_size: f32,
    pub is_viscous: bool,
    pub viscous: f32,
    pub iterations_viscous: f32,
    pub iterations_poisson: f32,
    pub is_bounce: bool,
    pub auto_demo: bool,
    pub auto_speed: f32,
    pub auto_intensity: f32,
    pub takeover_duration: f32,
    pub auto_resume_delay_ms: f32,
    pub auto_ramp_duration: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: None,
            resolution: 0.5,
            mouse_force: 20.0,
            cursor_size: 100.0,
            is_viscous: false,
            viscous: 30.0,
            iterations_viscous: 32.0,
            iterations_poisson: 32.0,
            is_bounce: false,
            auto_demo: true,
            auto_speed: 0.5,
            auto_intensity: 2.2,
            takeover_duration: 0.25,
            auto_resume_delay_ms: 3000.0,
            auto_ramp_duration: 0.6,
        }
    }
}

/// Lenient boolean parsing: `1/true/yes/on` and `0/false/no/off`, anything
/// else keeps the fallback.
pub fn parse_bool(raw: Option<&str>, fallback: bool) -> bool {
    let Some(raw) = raw else {
        return fallback;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => true,
        "0" | "false" | "no" | "n" | "off" => false,
        _ => fallback,
    }
}

/// Lenient float parsing; non-finite or unparseable input keeps the fallback.
pub fn parse_f32(raw: Option<&str>, fallback: f32) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

/// [`parse_f32`] followed by a range clamp.
pub fn parse_f32_clamped(raw: Option<&str>, fallback: f32, min: f32, max: f32) -> f32 {
    parse_f32(raw, fallback).clamp(min, max)
}

/// Which renderer the host wrapper mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererChoice {
    /// Frame-loop simulation on a canvas.
    Animated,
    /// Non-animated gradient; also the loading placeholder.
    StaticFallback,
}

/// Renderer selection. Animation is a progressive enhancement: every check
/// must pass, and any failure selects the static gradient.
pub fn choose_renderer(enabled: bool, reduced_motion: bool, context_ok: bool) -> RendererChoice {
    if enabled && !reduced_motion && context_ok {
        RendererChoice::Animated
    } else {
        RendererChoice::StaticFallback
    }
}

/// Tunables resolved from [`RenderOptions`] into the units the per-frame
/// state transition consumes. Immutable for the mount's lifetime.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    pub resolution: f32,
    pub mouse_force: f32,
    /// Pointer influence radius in CSS pixels.
    pub cursor_radius: f32,
    /// Pointer spring damping per reference frame, in (0, 1).
    pub pointer_damping: f32,
    /// Exponential velocity decay rate for particles (per second).
    pub damping_rate: f32,
    pub swirl_factor: f32,
    pub smoothing_factor: f32,
    pub is_bounce: bool,
    pub auto_demo: bool,
    pub auto_speed: f32,
    pub auto_intensity: f32,
    pub takeover_sec: f32,
    pub ramp_sec: f32,
    pub resume_delay_sec: f32,
}

impl SimConfig {
    pub fn from_options(opts: &RenderOptions) -> Self {
        let viscosity = if opts.is_viscous {
            (opts.viscous / 40.0).clamp(0.1, 2.0)
        } else {
            0.35
        };
        Self {
            resolution: opts.resolution.clamp(RESOLUTION_MIN, RESOLUTION_MAX),
            mouse_force: opts.mouse_force.max(MOUSE_FORCE_MIN),
            cursor_radius: opts.cursor_size.max(CURSOR_RADIUS_MIN),
            pointer_damping: (POINTER_DAMPING_BASE + viscosity * POINTER_DAMPING_VISCOSITY_SPAN)
                .clamp(POINTER_DAMPING_MIN, POINTER_DAMPING_MAX),
            damping_rate: if opts.is_viscous {
                opts.viscous.max(1.0) / VISCOUS_DAMPING_DIVISOR
            } else {
                FREE_DAMPING_RATE
            },
            swirl_factor: opts.iterations_poisson.max(1.0) / SWIRL_ITER_DIVISOR,
            smoothing_factor: opts.iterations_viscous.max(1.0) / SMOOTHING_ITER_DIVISOR,
            is_bounce: opts.is_bounce,
            auto_demo: opts.auto_demo,
            auto_speed: opts.auto_speed.max(AUTO_SPEED_MIN),
            auto_intensity: opts.auto_intensity.clamp(INTENSITY_MIN, INTENSITY_MAX),
            takeover_sec: opts.takeover_duration.max(TAKEOVER_MIN_SEC),
            ramp_sec: opts.auto_ramp_duration.max(RAMP_MIN_SEC),
            resume_delay_sec: opts.auto_resume_delay_ms.max(0.0) / 1000.0,
        }
    }
}
