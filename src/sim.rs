use crate::config::SimConfig;
use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Latest input samples consumed by one [`Sim::tick`]. Event handlers only
/// overwrite these fields between frames; last write wins.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Elapsed seconds since the previous frame, unclamped.
    pub dt: f32,
    /// Last raw pointer sample in CSS pixels.
    pub pointer: Vec2,
    /// True while the pointer is pressed or was moved this frame.
    pub pointer_active: bool,
    /// Seconds since the last real user interaction.
    pub idle_seconds: f32,
}

/// Smoothed pointer: the single field source every particle reacts to.
/// Mutated only inside the frame loop.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    pub target: Vec2,
    pub vel: Vec2,
    /// Drive envelope in [0, 1]. Rises quickly on input, fades out slowly.
    pub strength: f32,
    pub target_strength: f32,
}

/// Idle auto-motion: a phase accumulator tracing a lazy periodic path, and
/// the auto-pilot blend strength between user input and that path.
#[derive(Clone, Copy, Debug)]
pub struct AutoMotionState {
    pub phase: f32,
    pub target: Vec2,
    /// Blend weight in [0, 1]: 0 = user pointer, 1 = synthetic idle path.
    pub strength: f32,
    pub target_strength: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Blob {
    pub pos: Vec2,
    pub vel: Vec2,
    pub base_radius: f32,
    pub radius: f32,
    pub color_index: usize,
    pub phase_offset: f32,
    pub noise: f32,
}

/// The field simulation: pointer state, idle auto-motion, and the particle
/// set, advanced once per display frame by [`Sim::tick`].
pub struct Sim {
    pub config: SimConfig,
    pub width: f32,
    pub height: f32,
    pub pointer: PointerState,
    pub auto: AutoMotionState,
    pub blobs: Vec<Blob>,
    palette_len: usize,
    time: f32,
    rng: StdRng,
}

#[inline]
fn triangular_wave(x: f32) -> f32 {
    (2.0 / std::f32::consts::PI) * x.sin().asin()
}

impl Sim {
    pub fn new(config: SimConfig, palette_len: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let center = Vec2::new(width * 0.5, height * 0.5);
        let blobs = spawn_blobs(&mut rng, &config, palette_len, width, height);
        let start_phase = rng.gen::<f32>() * std::f32::consts::TAU;
        Self {
            config,
            width,
            height,
            pointer: PointerState {
                pos: center,
                target: center,
                vel: Vec2::ZERO,
                strength: 0.0,
                target_strength: 0.0,
            },
            auto: AutoMotionState {
                phase: start_phase,
                target: center,
                strength: 0.0,
                target_strength: 0.0,
            },
            blobs,
            palette_len,
            time: 0.0,
            rng,
        }
    }

    /// Regenerate for a new viewport. Particle positions are not preserved;
    /// layout semantics change with the dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.pointer.pos = self.pointer.pos.clamp(Vec2::ZERO, Vec2::new(self.width, self.height));
        self.blobs = spawn_blobs(
            &mut self.rng,
            &self.config,
            self.palette_len,
            self.width,
            self.height,
        );
    }

    /// Window blur: kill the pointer drive immediately so the field settles.
    pub fn release_pointer(&mut self) {
        self.pointer.strength = 0.0;
        self.pointer.target_strength = 0.0;
    }

    /// Advance the whole simulation by one frame. Never fails: every
    /// operation is clamped and bounded.
    pub fn tick(&mut self, input: FrameInput) {
        let dt = input.dt.clamp(0.0, MAX_FRAME_DT);
        self.time += dt;
        let cfg = self.config;

        let idle_active = cfg.auto_demo && input.idle_seconds > cfg.resume_delay_sec;
        self.step_auto(dt, idle_active);
        self.step_pointer(dt, input, idle_active);
        self.step_blobs(dt);
    }

    /// Idle path phase and the auto-pilot blend strength. The ramp is
    /// asymmetric: idle motion fades in over the ramp duration, while any
    /// real input snaps it back over the much shorter takeover duration.
    fn step_auto(&mut self, dt: f32, idle_active: bool) {
        let cfg = self.config;
        self.auto.target_strength = if idle_active { 1.0 } else { 0.0 };
        let period = if self.auto.target_strength > self.auto.strength {
            cfg.ramp_sec
        } else {
            cfg.takeover_sec
        };
        let step = dt / period;
        let delta = self.auto.target_strength - self.auto.strength;
        self.auto.strength = (self.auto.strength + delta.clamp(-step, step)).clamp(0.0, 1.0);

        if idle_active {
            self.auto.phase += dt * cfg.auto_speed * std::f32::consts::TAU;
            let amplitude =
                self.width.min(self.height) * AUTO_ORBIT_FRACTION * cfg.auto_intensity;
            let (ax, ay) = if cfg.is_bounce {
                (
                    triangular_wave(self.auto.phase),
                    triangular_wave(self.auto.phase * 0.6 + 1.2),
                )
            } else {
                (self.auto.phase.sin(), (self.auto.phase * 0.7 + 1.2).cos())
            };
            let center = Vec2::new(self.width * 0.5, self.height * 0.5);
            let margin = Vec2::new(self.width, self.height) * AUTO_EDGE_MARGIN;
            let far = Vec2::new(self.width, self.height) - margin;
            self.auto.target = (center + Vec2::new(ax, ay) * amplitude).clamp(margin, far);
        }
    }

    /// Blend the effective target between the raw pointer and the idle path,
    /// then integrate the smoothed pointer toward it with a damped spring.
    fn step_pointer(&mut self, dt: f32, input: FrameInput, idle_active: bool) {
        let cfg = self.config;
        let bounds = Vec2::new(self.width, self.height);

        let raw = input.pointer.clamp(Vec2::ZERO, bounds);
        let target = raw.lerp(self.auto.target, self.auto.strength);
        self.pointer.target = target.clamp(Vec2::ZERO, bounds);

        // Drive envelope: mirror of the auto ramp (rises fast, fades slow).
        let mut drive_target = if input.pointer_active { 1.0 } else { 0.0 };
        if idle_active {
            drive_target = f32::max(drive_target, self.auto.strength);
        }
        self.pointer.target_strength = drive_target;
        let period = if drive_target > self.pointer.strength {
            cfg.takeover_sec
        } else {
            cfg.ramp_sec
        };
        let step = dt / period;
        let delta = drive_target - self.pointer.strength;
        self.pointer.strength =
            (self.pointer.strength + delta.clamp(-step, step)).clamp(0.0, 1.0);

        let frame_scale = (dt / REFERENCE_FRAME_DT).clamp(FRAME_SCALE_MIN, FRAME_SCALE_MAX);
        let smoothing = POINTER_SMOOTHING_BASE + cfg.mouse_force / POINTER_SMOOTHING_FORCE_DIV;
        self.pointer.vel += (self.pointer.target - self.pointer.pos) * smoothing * frame_scale;
        self.pointer.vel *= (1.0 - cfg.pointer_damping).powf(frame_scale);
        self.pointer.pos =
            (self.pointer.pos + self.pointer.vel * frame_scale).clamp(Vec2::ZERO, bounds);
    }

    /// Force integration for every particle: Gaussian attraction toward the
    /// pointer, a tangential swirl, per-particle idle noise, exponential
    /// damping, then the configured boundary policy.
    fn step_blobs(&mut self, dt: f32) {
        let cfg = self.config;
        let pointer = self.pointer;
        let drive = pointer.strength;
        let radius_sq = 2.0 * cfg.cursor_radius * cfg.cursor_radius;
        let damping = (-dt * cfg.damping_rate).exp();
        let (width, height) = (self.width, self.height);
        let time = self.time;

        for (i, blob) in self.blobs.iter_mut().enumerate() {
            let delta = pointer.pos - blob.pos;
            let dist_sq = delta.length_squared() + 1e-6;
            let dist = dist_sq.sqrt();
            let normal = delta / dist;
            let gaussian = (-dist_sq / radius_sq).exp();

            let attraction = drive * cfg.mouse_force * gaussian;
            blob.vel += normal * attraction * dt * ATTRACTION_GAIN;

            let tangent = Vec2::new(-normal.y, normal.x);
            let swirl = cfg.swirl_factor * drive * gaussian * cfg.auto_intensity;
            blob.vel += tangent * swirl * SWIRL_GAIN * dt;

            let noise_phase = time * (0.6 + i as f32 * 0.03) + blob.phase_offset;
            let noise_amp = blob.noise * cfg.auto_intensity * dt * NOISE_GAIN;
            blob.vel.x += noise_phase.cos() * noise_amp;
            blob.vel.y += (noise_phase * 0.8).sin() * noise_amp;

            blob.vel *= damping;
            blob.pos += blob.vel;

            if cfg.is_bounce {
                if blob.pos.x < 0.0 {
                    blob.pos.x = 0.0;
                    blob.vel.x *= -BOUNCE_RESTITUTION;
                } else if blob.pos.x > width {
                    blob.pos.x = width;
                    blob.vel.x *= -BOUNCE_RESTITUTION;
                }
                if blob.pos.y < 0.0 {
                    blob.pos.y = 0.0;
                    blob.vel.y *= -BOUNCE_RESTITUTION;
                } else if blob.pos.y > height {
                    blob.pos.y = height;
                    blob.vel.y *= -BOUNCE_RESTITUTION;
                }
            } else {
                let wrap = blob.base_radius;
                if blob.pos.x < -wrap {
                    blob.pos.x = width + wrap;
                } else if blob.pos.x > width + wrap {
                    blob.pos.x = -wrap;
                }
                if blob.pos.y < -wrap {
                    blob.pos.y = height + wrap;
                } else if blob.pos.y > height + wrap {
                    blob.pos.y = -wrap;
                }
            }

            let breathing =
                1.0 + (time * BREATH_RATE + blob.phase_offset).sin() * BREATH_DEPTH
                    * cfg.smoothing_factor;
            blob.radius = (blob.base_radius * breathing).clamp(
                blob.base_radius * BREATH_SCALE_MIN,
                blob.base_radius * BREATH_SCALE_MAX,
            );
        }
    }
}

fn spawn_blobs(
    rng: &mut StdRng,
    cfg: &SimConfig,
    palette_len: usize,
    width: f32,
    height: f32,
) -> Vec<Blob> {
    let palette_len = palette_len.max(1);
    let count = BLOB_MIN_COUNT.max(palette_len * BLOBS_PER_COLOR);
    let max_dim = width.max(height);
    (0..count)
        .map(|i| {
            let base_radius = max_dim
                * (BLOB_RADIUS_BASE_FRAC
                    + (i % palette_len) as f32 * BLOB_RADIUS_INDEX_STEP
                    + rng.gen::<f32>() * BLOB_RADIUS_JITTER);
            Blob {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vel: Vec2::ZERO,
                base_radius,
                radius: base_radius,
                color_index: i % palette_len,
                phase_offset: rng.gen::<f32>() * std::f32::consts::TAU,
                noise: BLOB_NOISE_BASE + rng.gen::<f32>() * BLOB_NOISE_JITTER * cfg.auto_intensity,
            }
        })
        .collect()
}
