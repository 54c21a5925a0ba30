use std::f64::consts::TAU;

use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    foundation::{
        core::Vec2,
        error::{PromoError, PromoResult},
        math::Rng64,
    },
};

/// Shape of a radial burst. Ranges are `(min, span)`: values are drawn from `[min, min + span)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BurstSpec {
    /// Number of particles, spread evenly around the circle.
    pub count: usize,
    /// Frame the burst is triggered at.
    pub start: f64,
    /// Extra per-particle delay after `start`.
    pub delay_jitter: f64,
    /// Travel distance in pixels.
    pub distance: (f64, f64),
    /// Particle diameter in pixels.
    pub size: (f64, f64),
    /// Frames a particle takes to travel out and fade.
    pub travel_frames: f64,
    /// Number of alternating tints.
    pub tints: usize,
}

/// Setup-time parameters of one particle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub angle: f64,
    pub distance: f64,
    pub delay: f64,
    pub size: f64,
    pub tint: usize,
}

/// Frame-time state of one particle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleState {
    /// Offset from the burst origin.
    pub offset: Vec2,
    pub opacity: f64,
    pub scale: f64,
    pub size: f64,
    pub tint: usize,
}

/// A radial particle burst.
///
/// All randomness is drawn once in [`ParticleBurst::generate`]; sampling is a pure function of the
/// frame, so a burst held by a scene renders identically no matter which frames are evaluated or
/// in which order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParticleBurst {
    particles: Vec<Particle>,
    travel_frames: f64,
}

impl ParticleBurst {
    pub fn generate(seed: u64, spec: &BurstSpec) -> PromoResult<Self> {
        if !spec.travel_frames.is_finite() || spec.travel_frames <= 0.0 {
            return Err(PromoError::animation(format!(
                "particle travel frames must be > 0, got {}",
                spec.travel_frames
            )));
        }
        let ranges = [spec.distance, spec.size];
        if ranges
            .iter()
            .any(|(lo, span)| !lo.is_finite() || !span.is_finite() || *span < 0.0)
            || !spec.delay_jitter.is_finite()
            || spec.delay_jitter < 0.0
            || !spec.start.is_finite()
        {
            return Err(PromoError::animation(
                "particle ranges must be finite with non-negative spans",
            ));
        }

        let mut rng = Rng64::new(seed);
        let tints = spec.tints.max(1);
        let particles = (0..spec.count)
            .map(|i| Particle {
                angle: (i as f64 / spec.count as f64) * TAU,
                distance: rng.next_in(spec.distance.0, spec.distance.1),
                delay: spec.start + rng.next_f64_01() * spec.delay_jitter,
                size: rng.next_in(spec.size.0, spec.size.1),
                tint: i % tints,
            })
            .collect();

        Ok(Self {
            particles,
            travel_frames: spec.travel_frames,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particle states at `frame`. Particles that have not launched are fully transparent.
    pub fn sample(&self, frame: f64) -> impl Iterator<Item = ParticleState> + '_ {
        self.particles.iter().map(move |p| {
            let progress = interpolate(
                frame,
                &[p.delay, p.delay + self.travel_frames],
                &[0.0, 1.0],
                InterpolateOpts::clamp(),
            );
            let reach = p.distance * progress;
            ParticleState {
                offset: Vec2::new(p.angle.cos() * reach, p.angle.sin() * reach),
                opacity: interpolate(
                    progress,
                    &[0.0, 0.2, 1.0],
                    &[0.0, 1.0, 0.0],
                    InterpolateOpts::clamp(),
                ),
                scale: interpolate(
                    progress,
                    &[0.0, 0.3, 1.0],
                    &[0.0, 1.5, 0.5],
                    InterpolateOpts::clamp(),
                ),
                size: p.size,
                tint: p.tint,
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/particles.rs"]
mod tests;
