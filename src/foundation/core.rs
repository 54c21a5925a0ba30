use crate::foundation::error::{PromoError, PromoResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Global frame index supplied by the timeline driver.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// First frame past the range.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> PromoResult<Self> {
        if start.0 > end.0 {
            return Err(PromoError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies in `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Clamp `f` into the range (last frame inclusive).
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }
}

/// Rational frames-per-second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator, must be > 0.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> PromoResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Check both terms are non-zero.
    ///
    /// Deserialized values bypass [`Fps::new`], so configuration loaders call this explicitly.
    pub fn validate(self) -> PromoResult<()> {
        if self.den == 0 {
            return Err(PromoError::validation("Fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(PromoError::validation("Fps num must be > 0"));
        }
        Ok(())
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a (possibly fractional or negative) frame count to seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * self.frame_duration_secs()
    }

    /// Convert seconds to a fractional frame count.
    pub fn secs_to_frames(self, secs: f64) -> f64 {
        secs * self.as_f64()
    }

    /// Convert seconds to whole frames, rounding down and saturating at zero.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Output pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Reject zero-sized canvases.
    pub fn validate(self) -> PromoResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PromoError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Canvas center point.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Full-canvas rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Fully opaque color; premultiplication is the identity here.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: crate::foundation::math::mul_div255_u8(u16::from(r), u16::from(a)),
            g: crate::foundation::math::mul_div255_u8(u16::from(g), u16::from(a)),
            b: crate::foundation::math::mul_div255_u8(u16::from(b), u16::from(a)),
            a,
        }
    }

    /// Scale all channels by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let k = (alpha.clamp(0.0, 1.0) * 255.0).round() as u16;
        Self {
            r: crate::foundation::math::mul_div255_u8(u16::from(self.r), k),
            g: crate::foundation::math::mul_div255_u8(u16::from(self.g), k),
            b: crate::foundation::math::mul_div255_u8(u16::from(self.b), k),
            a: crate::foundation::math::mul_div255_u8(u16::from(self.a), k),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
