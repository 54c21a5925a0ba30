use std::{collections::BTreeSet, fmt, sync::Arc};

use crate::{
    animation::interpolate::{Breakpoints, InterpolateOpts},
    foundation::{
        core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8Premul},
        error::{PromoError, PromoResult},
    },
    scenes::scene::Scene,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Global timeline settings shared by every act.
pub struct TimelineConfig {
    /// Composition identifier, e.g. `"AEOEnginePromo"`.
    pub id: String,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Total composition duration in frames.
    pub duration: FrameIndex,
    /// Stage color painted under every act.
    pub background: Rgba8Premul,
}

impl TimelineConfig {
    /// Validate frame rate, canvas and duration.
    pub fn validate(&self) -> PromoResult<()> {
        if self.id.trim().is_empty() {
            return Err(PromoError::validation("composition id must be non-empty"));
        }
        self.fps.validate()?;
        self.canvas.validate()?;
        if self.duration.0 == 0 {
            return Err(PromoError::validation("composition duration must be > 0"));
        }
        Ok(())
    }

    /// Frame range `[0, duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Nominal placement of an act on the timeline.
pub struct ActWindow {
    /// First global frame of the act.
    pub start: FrameIndex,
    /// Nominal length in frames, excluding any crossfade tail.
    pub duration: u64,
}

impl ActWindow {
    /// Exclusive nominal end frame.
    ///
    /// Saturates at `u64::MAX`; [`Composition::validate`] rejects windows that would.
    pub fn end(self) -> FrameIndex {
        FrameIndex(self.start.0.saturating_add(self.duration))
    }

    /// Nominal range `[start, end)`.
    pub fn range(self) -> FrameRange {
        FrameRange {
            start: self.start,
            end: self.end(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Handoff between an act and the next one.
///
/// The outgoing act stays mounted for `frames` frames past its nominal end. Both curves map frames
/// elapsed in the handoff to opacity: `outgoing` is sampled from the outgoing act's nominal end,
/// `incoming` from the incoming act's start.
pub struct Crossfade {
    pub frames: u64,
    pub outgoing: Breakpoints,
    pub incoming: Breakpoints,
    /// Paint the outgoing act over the incoming one while both are mounted.
    pub outgoing_above: bool,
}

impl Crossfade {
    /// Build a handoff. Both curves are clamped at their edges.
    pub fn new(frames: u64, outgoing: Breakpoints, incoming: Breakpoints) -> PromoResult<Self> {
        let clamped = |curve: Breakpoints| {
            let ease = curve.opts().ease;
            curve.with_opts(InterpolateOpts::clamp().with_ease(ease))
        };
        let fade = Self {
            frames,
            outgoing: clamped(outgoing),
            incoming: clamped(incoming),
            outgoing_above: false,
        };
        fade.validate()?;
        Ok(fade)
    }

    /// Symmetric linear fade: outgoing `1 -> 0`, incoming `0 -> 1`, over `frames`.
    pub fn linear(frames: u64) -> PromoResult<Self> {
        let end = frames as f64;
        Self::new(
            frames,
            Breakpoints::new([0.0, end], [1.0, 0.0])?,
            Breakpoints::new([0.0, end], [0.0, 1.0])?,
        )
    }

    pub fn outgoing_above(mut self, above: bool) -> Self {
        self.outgoing_above = above;
        self
    }

    /// Opacity of the outgoing act `elapsed` frames past its nominal end.
    pub fn outgoing_opacity(&self, elapsed: u64) -> f64 {
        self.outgoing.sample(elapsed as f64).clamp(0.0, 1.0)
    }

    /// Opacity of the incoming act `elapsed` frames after its start.
    pub fn incoming_opacity(&self, elapsed: u64) -> f64 {
        self.incoming.sample(elapsed as f64).clamp(0.0, 1.0)
    }

    pub fn validate(&self) -> PromoResult<()> {
        if self.frames == 0 {
            return Err(PromoError::validation("crossfade frames must be > 0"));
        }
        let span = self.frames as f64;
        for (which, curve) in [("outgoing", &self.outgoing), ("incoming", &self.incoming)] {
            let first = curve.input()[0];
            if first < 0.0 || curve.end() > span {
                return Err(PromoError::validation(format!(
                    "crossfade {which} curve must lie within [0, {span}], got [{first}, {}]",
                    curve.end()
                )));
            }
            if curve.output().iter().any(|o| !(0.0..=1.0).contains(o)) {
                return Err(PromoError::validation(format!(
                    "crossfade {which} opacities must lie in [0, 1]"
                )));
            }
        }
        // Outgoing ends transparent, incoming ends opaque.
        let settled = [("outgoing", &self.outgoing, 0.0), ("incoming", &self.incoming, 1.0)];
        for (which, curve, target) in settled {
            let last = curve.output()[curve.output().len() - 1];
            if last != target {
                return Err(PromoError::validation(format!(
                    "crossfade {which} curve must end at opacity {target}, got {last}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone)]
/// A scene placed on the timeline.
pub struct Act {
    /// Unique act name; also keys the act's setup seed.
    pub name: String,
    pub window: ActWindow,
    pub scene: Arc<dyn Scene>,
    /// Handoff into the next act, if any.
    pub transition_out: Option<Crossfade>,
}

impl Act {
    /// Frames the act stays mounted past its nominal end.
    pub fn tail_frames(&self) -> u64 {
        self.transition_out.as_ref().map_or(0, |t| t.frames)
    }

    /// Range the act is mounted (and evaluated) over.
    pub fn mounted_range(&self) -> FrameRange {
        FrameRange {
            start: self.window.start,
            end: FrameIndex(self.window.end().0.saturating_add(self.tail_frames())),
        }
    }
}

impl fmt::Debug for Act {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Act")
            .field("name", &self.name)
            .field("window", &self.window)
            .field("scene", &self.scene.name())
            .field("transition_out", &self.transition_out)
            .finish()
    }
}

#[derive(Clone, Debug)]
/// A complete promo timeline: sequential acts with optional crossfades.
///
/// Built programmatically with [`crate::CompositionBuilder`] or from JSON through
/// [`crate::PromoConfig`]; rendered frame by frame with [`crate::Evaluator`].
pub struct Composition {
    pub config: TimelineConfig,
    /// Acts in timeline order.
    pub acts: Vec<Act>,
    /// Global seed for setup-time randomness.
    pub seed: u64,
}

impl Composition {
    /// Validate timeline settings and act layout.
    pub fn validate(&self) -> PromoResult<()> {
        self.config.validate()?;
        if self.acts.is_empty() {
            return Err(PromoError::validation("composition must have at least one act"));
        }

        let mut names = BTreeSet::new();
        let mut cursor = 0u64;
        for (i, act) in self.acts.iter().enumerate() {
            if act.name.trim().is_empty() {
                return Err(PromoError::validation(format!("act {i} name must be non-empty")));
            }
            if !names.insert(act.name.as_str()) {
                return Err(PromoError::validation(format!(
                    "duplicate act name '{}'",
                    act.name
                )));
            }
            if act.window.duration == 0 {
                return Err(PromoError::validation(format!(
                    "act '{}' has zero length",
                    act.name
                )));
            }
            if act.window.start.0 != cursor {
                return Err(PromoError::validation(format!(
                    "act '{}' starts at frame {} but the previous act ends at {cursor}",
                    act.name, act.window.start.0
                )));
            }
            cursor = cursor
                .checked_add(act.window.duration)
                .ok_or_else(|| PromoError::validation("act durations overflow the timeline"))?;

            let Some(fade) = &act.transition_out else {
                continue;
            };
            fade.validate()?;
            let Some(next) = self.acts.get(i + 1) else {
                return Err(PromoError::validation(format!(
                    "last act '{}' cannot crossfade out",
                    act.name
                )));
            };
            if fade.frames > next.window.duration {
                return Err(PromoError::validation(format!(
                    "crossfade from '{}' lasts {} frames, longer than '{}' ({} frames)",
                    act.name, fade.frames, next.name, next.window.duration
                )));
            }
        }

        if cursor != self.config.duration.0 {
            return Err(PromoError::validation(format!(
                "acts cover {cursor} frames but the composition lasts {}",
                self.config.duration.0
            )));
        }
        Ok(())
    }

    pub fn fps(&self) -> Fps {
        self.config.fps
    }

    pub fn canvas(&self) -> Canvas {
        self.config.canvas
    }

    pub fn duration(&self) -> FrameIndex {
        self.config.duration
    }

    pub fn act(&self, name: &str) -> Option<&Act> {
        self.acts.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
