use crate::foundation::{
    core::Fps,
    error::{PromoError, PromoResult},
};

/// Physical parameters of a one-dimensional damped oscillator.
///
/// Fields are private so every instance has passed [`SpringConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SpringConfig {
    damping: f64,
    stiffness: f64,
    mass: f64,
    overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Validate and build a spring. `damping` may be zero (undamped); `stiffness` and `mass`
    /// must be strictly positive.
    pub fn new(damping: f64, stiffness: f64, mass: f64) -> PromoResult<Self> {
        if !damping.is_finite() || !stiffness.is_finite() || !mass.is_finite() {
            return Err(PromoError::animation(format!(
                "spring parameters must be finite (damping={damping}, stiffness={stiffness}, mass={mass})"
            )));
        }
        if damping < 0.0 {
            return Err(PromoError::animation(format!(
                "spring damping must be >= 0, got {damping}"
            )));
        }
        if stiffness <= 0.0 {
            return Err(PromoError::animation(format!(
                "spring stiffness must be > 0, got {stiffness}"
            )));
        }
        if mass <= 0.0 {
            return Err(PromoError::animation(format!(
                "spring mass must be > 0, got {mass}"
            )));
        }
        Ok(Self {
            damping,
            stiffness,
            mass,
            overshoot_clamping: false,
        })
    }

    /// Never report progress above 1.
    pub fn with_overshoot_clamping(mut self, on: bool) -> Self {
        self.overshoot_clamping = on;
        self
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn overshoot_clamping(&self) -> bool {
        self.overshoot_clamping
    }

    /// `zeta = c / (2 * sqrt(k * m))`; below 1 the spring oscillates.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Progress of a spring released at elapsed frame 0, from 0 toward 1.
///
/// Returns exactly 0 for `elapsed_frames <= 0`, so callers can pass `frame - delay` and rely on
/// nothing moving before the delay. The value is a closed-form function of elapsed time and
/// never depends on previously sampled frames.
pub fn spring(elapsed_frames: f64, fps: Fps, config: &SpringConfig) -> f64 {
    if elapsed_frames.is_nan() || elapsed_frames <= 0.0 {
        return 0.0;
    }
    let v = step_response(fps.frames_to_secs(elapsed_frames), config);
    if config.overshoot_clamping {
        v.min(1.0)
    } else {
        v
    }
}

fn step_response(t: f64, config: &SpringConfig) -> f64 {
    let omega0 = (config.stiffness / config.mass).sqrt();
    let zeta = config.damping_ratio();

    if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * t).exp();
        let (sin1, cos1) = (omega1 * t).sin_cos();
        1.0 - envelope * ((zeta * omega0 / omega1) * sin1 + cos1)
    } else {
        // Over-damped springs share the critically damped envelope so they settle promptly.
        let envelope = (-omega0 * t).exp();
        1.0 - envelope * (1.0 + omega0 * t)
    }
}

const SETTLE_HOLD_FRAMES: u32 = 20;
const MEASURE_LIMIT_SECS: f64 = 600.0;

/// Number of frames until the spring stays within `threshold` of its target.
///
/// Errors when the spring never settles inside a ten-minute search window, which is the case for
/// undamped springs.
pub fn measure_spring(fps: Fps, config: &SpringConfig, threshold: f64) -> PromoResult<u64> {
    if threshold.is_nan() || threshold <= 0.0 {
        return Err(PromoError::animation(format!(
            "spring settle threshold must be > 0, got {threshold}"
        )));
    }

    let limit = fps.secs_to_frames_floor(MEASURE_LIMIT_SECS);
    let off_target = |frame: u64| (spring(frame as f64, fps, config) - 1.0).abs() >= threshold;
    let too_long = || {
        PromoError::animation(format!(
            "spring (damping={}, stiffness={}, mass={}) does not settle within {MEASURE_LIMIT_SECS}s",
            config.damping, config.stiffness, config.mass
        ))
    };

    let mut frame = 0u64;
    while off_target(frame) {
        frame += 1;
        if frame > limit {
            return Err(too_long());
        }
    }

    let mut finished = frame;
    let mut held = 0u32;
    while held < SETTLE_HOLD_FRAMES {
        frame += 1;
        if frame > limit {
            return Err(too_long());
        }
        if off_target(frame) {
            held = 0;
            finished = frame + 1;
        } else {
            held += 1;
        }
    }
    Ok(finished)
}

/// A spring mapped onto an output range, optionally delayed and time-stretched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    from: f64,
    to: f64,
    delay_frames: f64,
    time_scale: f64,
}

impl Spring {
    /// Threshold used when stretching a spring to an explicit duration.
    pub const SETTLE_THRESHOLD: f64 = 0.005;

    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            from: 0.0,
            to: 1.0,
            delay_frames: 0.0,
            time_scale: 1.0,
        }
    }

    pub fn from_to(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Hold at `from` until `frames` have elapsed.
    pub fn delay(mut self, frames: f64) -> Self {
        self.delay_frames = frames;
        self
    }

    /// Stretch time so the spring settles after `frames` frames instead of its natural length.
    pub fn stretch_to(mut self, fps: Fps, frames: f64) -> PromoResult<Self> {
        if !frames.is_finite() || frames <= 0.0 {
            return Err(PromoError::animation(format!(
                "spring duration must be a positive frame count, got {frames}"
            )));
        }
        let natural = measure_spring(fps, &self.config, Self::SETTLE_THRESHOLD)?;
        self.time_scale = natural as f64 / frames;
        Ok(self)
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn sample(&self, frame: f64, fps: Fps) -> f64 {
        let progress = spring(
            (frame - self.delay_frames) * self.time_scale,
            fps,
            &self.config,
        );
        self.from + (self.to - self.from) * progress
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
