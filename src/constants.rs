/// Simulation and rendering tuning constants.
///
/// These constants express intended behavior (time constants, clamp limits,
/// force gains) and keep magic numbers out of the frame code.
// Brand palette used to backfill short or malformed color input
pub const BRAND_PALETTE: [&str; 3] = ["#7C3AED", "#0EA5E9", "#EC4899"];

// Minimum colors the field simulation needs
pub const PALETTE_MIN_LEN: usize = 3;

// Largest time step fed to the simulation (seconds); absorbs tab-background gaps
pub const MAX_FRAME_DT: f32 = 0.08;

// Device pixel ratio cap and draw-surface resolution scale bounds
pub const DPR_MAX: f64 = 2.0;
pub const RESOLUTION_MIN: f32 = 0.3;
pub const RESOLUTION_MAX: f32 = 0.6;

// Idle auto-motion intensity bounds
pub const INTENSITY_MIN: f32 = 0.1;
pub const INTENSITY_MAX: f32 = 6.0;

// Idle orbit amplitude as a fraction of the smaller viewport dimension
pub const AUTO_ORBIT_FRACTION: f32 = 0.25;
// Synthetic target stays this far inside the viewport (fraction of each dimension)
pub const AUTO_EDGE_MARGIN: f32 = 0.05;

// Pointer spring (per-frame at the 60 Hz reference rate)
pub const POINTER_SMOOTHING_BASE: f32 = 0.09;
pub const POINTER_SMOOTHING_FORCE_DIV: f32 = 40.0;
pub const POINTER_DAMPING_BASE: f32 = 0.06;
pub const POINTER_DAMPING_VISCOSITY_SPAN: f32 = 0.3;
pub const POINTER_DAMPING_MIN: f32 = 0.02;
pub const POINTER_DAMPING_MAX: f32 = 0.6;
// Frame-rate normalization clamp around the 60 Hz reference step
pub const FRAME_SCALE_MIN: f32 = 0.5;
pub const FRAME_SCALE_MAX: f32 = 1.5;
pub const REFERENCE_FRAME_DT: f32 = 1.0 / 60.0;

// Field particle population
pub const BLOB_MIN_COUNT: usize = 8;
pub const BLOBS_PER_COLOR: usize = 4;
pub const BLOB_RADIUS_BASE_FRAC: f32 = 0.24;
pub const BLOB_RADIUS_INDEX_STEP: f32 = 0.015;
pub const BLOB_RADIUS_JITTER: f32 = 0.08;
pub const BLOB_NOISE_BASE: f32 = 0.5;
pub const BLOB_NOISE_JITTER: f32 = 0.6;

// Force gains (per second)
pub const ATTRACTION_GAIN: f32 = 20.0;
pub const SWIRL_GAIN: f32 = 18.0;
pub const NOISE_GAIN: f32 = 15.0;

// Configured iteration counts map onto damping/swirl factors via these divisors
pub const SWIRL_ITER_DIVISOR: f32 = 28.0;
pub const SMOOTHING_ITER_DIVISOR: f32 = 64.0;
pub const VISCOUS_DAMPING_DIVISOR: f32 = 8.0;
// Velocity decay rate when the viscous mode is off
pub const FREE_DAMPING_RATE: f32 = 3.4;

// Reflective boundary keeps this fraction of the incoming speed
pub const BOUNCE_RESTITUTION: f32 = 0.6;

// Radius "breathing" modulation
pub const BREATH_RATE: f32 = 0.7;
pub const BREATH_DEPTH: f32 = 0.12;
pub const BREATH_SCALE_MIN: f32 = 0.65;
pub const BREATH_SCALE_MAX: f32 = 1.35;

// Pointer influence radius floor (px) and tunable floors
pub const CURSOR_RADIUS_MIN: f32 = 40.0;
pub const MOUSE_FORCE_MIN: f32 = 1.0;
pub const AUTO_SPEED_MIN: f32 = 0.05;
pub const TAKEOVER_MIN_SEC: f32 = 0.05;
pub const RAMP_MIN_SEC: f32 = 0.1;

// Trail fade and veil layers drawn around the particles
pub const TRAIL_RGB: [u8; 3] = [6, 9, 20];
pub const TRAIL_ALPHA: f32 = 0.22;
pub const VEIL_RGB: [u8; 3] = [10, 12, 24];
pub const VEIL_ALPHA: f32 = 0.18;

// Radial gradient stops per particle
pub const BLOB_CORE_ALPHA: f32 = 0.92;
pub const BLOB_MID_ALPHA: f32 = 0.45;
pub const BLOB_MID_STOP: f32 = 0.45;

// Static fallback gradient layering
pub const FALLBACK_PRIMARY_ALPHA: f32 = 0.65;
pub const FALLBACK_SECONDARY_ALPHA: f32 = 0.5;
pub const FALLBACK_ACCENT_ALPHA: f32 = 0.55;
