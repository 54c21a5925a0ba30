use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    foundation::{
        core::Fps,
        error::{PromoError, PromoResult},
    },
};

// Float error can land an exact reveal frame a hair below the next whole count.
const REVEAL_EPSILON: f64 = 1e-9;

/// Frames spanned by `secs` seconds at `fps`.
pub fn beat(fps: Fps, secs: f64) -> f64 {
    fps.secs_to_frames(secs)
}

/// Delay of item `index` in a staggered list.
pub fn stagger_delay(base: f64, index: usize, per_item: f64) -> f64 {
    base + index as f64 * per_item
}

/// `true` once `frame` has reached `delay`.
pub fn has_started(frame: f64, delay: f64) -> bool {
    frame >= delay
}

/// Square-wave blink with `period_frames` on, then `period_frames` off, starting on.
pub fn blink(frame: f64, period_frames: f64) -> bool {
    if period_frames <= 0.0 || frame < 0.0 {
        return true;
    }
    (frame / period_frames).floor() as u64 % 2 == 0
}

/// Sine oscillation of `amplitude` at `rate` radians per frame, starting at `delay`.
///
/// Zero before `delay`, so a pulse joins its element without a jump.
pub fn pulse(frame: f64, delay: f64, rate: f64, amplitude: f64) -> f64 {
    if !has_started(frame, delay) {
        return 0.0;
    }
    ((frame - delay) * rate).sin() * amplitude
}

/// Distance a shimmer highlight has travelled at `px_per_sec`.
pub fn shimmer_offset(frame: f64, fps: Fps, px_per_sec: f64) -> f64 {
    fps.frames_to_secs(frame) * px_per_sec
}

/// Counter value shown at `progress` of a count-up to `target`, rounded to the nearest integer.
pub fn count_up(target: u64, progress: f64) -> u64 {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    (target as f64 * progress).round() as u64
}

/// Reveals `count` items one after another, `frames_per_item` apart, starting at `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    start: f64,
    count: usize,
    frames_per_item: f64,
}

impl Reveal {
    pub fn new(start: f64, count: usize, frames_per_item: f64) -> PromoResult<Self> {
        if !start.is_finite() {
            return Err(PromoError::animation(format!(
                "reveal start must be finite, got {start}"
            )));
        }
        if !frames_per_item.is_finite() || frames_per_item <= 0.0 {
            return Err(PromoError::animation(format!(
                "reveal frames per item must be > 0, got {frames_per_item}"
            )));
        }
        Ok(Self {
            start,
            count,
            frames_per_item,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// Frame at which the last item appears.
    pub fn end(&self) -> f64 {
        self.start + self.count as f64 * self.frames_per_item
    }

    /// Number of items visible at `frame`, always in `[0, count]`.
    pub fn visible(&self, frame: f64) -> usize {
        if self.count == 0 {
            return 0;
        }
        let v = interpolate(
            frame,
            &[self.start, self.end()],
            &[0.0, self.count as f64],
            InterpolateOpts::clamp(),
        );
        ((v + REVEAL_EPSILON).floor().max(0.0) as usize).min(self.count)
    }

    pub fn is_complete(&self, frame: f64) -> bool {
        self.visible(frame) == self.count
    }
}

/// Character-by-character text reveal at a fixed typing rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    text: String,
    reveal: Reveal,
}

impl Typewriter {
    /// Type `text` starting at `start` at `chars_per_sec` characters per second.
    pub fn new(
        text: impl Into<String>,
        start: f64,
        chars_per_sec: f64,
        fps: Fps,
    ) -> PromoResult<Self> {
        if !chars_per_sec.is_finite() || chars_per_sec <= 0.0 {
            return Err(PromoError::animation(format!(
                "typing rate must be > 0 chars/sec, got {chars_per_sec}"
            )));
        }
        let text = text.into();
        let count = text.chars().count();
        let reveal = Reveal::new(start, count, fps.as_f64() / chars_per_sec)?;
        Ok(Self { text, reveal })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.reveal.count
    }

    /// Frame at which the last character appears.
    pub fn end(&self) -> f64 {
        self.reveal.end()
    }

    pub fn visible_chars(&self, frame: f64) -> usize {
        self.reveal.visible(frame)
    }

    pub fn is_typing(&self, frame: f64) -> bool {
        !self.reveal.is_complete(frame)
    }

    /// Visible prefix, cut on a char boundary.
    pub fn visible_text(&self, frame: f64) -> &str {
        let n = self.visible_chars(frame);
        match self.text.char_indices().nth(n) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
