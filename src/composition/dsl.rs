use std::sync::Arc;

use crate::{
    composition::model::{Act, ActWindow, Composition, Crossfade, TimelineConfig},
    foundation::{
        core::{Canvas, Fps, FrameIndex, Rgba8Premul},
        error::{PromoError, PromoResult},
        math::stable_hash64,
    },
    scenes::{
        palette,
        scene::{Scene, SceneKind, SceneSetup},
    },
};

enum PendingScene {
    Ready(Arc<dyn Scene>),
    Kind(SceneKind),
}

struct PendingAct {
    name: String,
    scene: PendingScene,
    duration: u64,
    transition_out: Option<Crossfade>,
}

/// Builds a [`Composition`] from acts laid end to end.
///
/// Act starts and the total duration are derived from the act lengths; scenes given as a
/// [`SceneKind`] are instantiated at [`CompositionBuilder::build`] with a seed derived from the
/// composition seed and the act name.
pub struct CompositionBuilder {
    id: String,
    fps: Fps,
    canvas: Canvas,
    background: Rgba8Premul,
    seed: u64,
    acts: Vec<PendingAct>,
}

impl CompositionBuilder {
    pub fn new(id: impl Into<String>, fps: Fps, canvas: Canvas) -> Self {
        Self {
            id: id.into(),
            fps,
            canvas,
            background: palette::BACKDROP,
            seed: 0,
            acts: Vec::new(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn background(mut self, color: Rgba8Premul) -> Self {
        self.background = color;
        self
    }

    /// Append an act backed by an already constructed scene.
    pub fn act(mut self, name: impl Into<String>, scene: Arc<dyn Scene>, duration: u64) -> Self {
        self.acts.push(PendingAct {
            name: name.into(),
            scene: PendingScene::Ready(scene),
            duration,
            transition_out: None,
        });
        self
    }

    /// Append an act whose scene is instantiated at build time.
    pub fn act_kind(mut self, name: impl Into<String>, kind: SceneKind, duration: u64) -> Self {
        self.acts.push(PendingAct {
            name: name.into(),
            scene: PendingScene::Kind(kind),
            duration,
            transition_out: None,
        });
        self
    }

    /// Crossfade out of the most recently added act.
    pub fn crossfade(mut self, fade: Crossfade) -> PromoResult<Self> {
        let Some(last) = self.acts.last_mut() else {
            return Err(PromoError::validation("crossfade needs a preceding act"));
        };
        if last.transition_out.is_some() {
            return Err(PromoError::validation(format!(
                "act '{}' already has a crossfade",
                last.name
            )));
        }
        last.transition_out = Some(fade);
        Ok(self)
    }

    pub fn build(self) -> PromoResult<Composition> {
        let duration = self
            .acts
            .iter()
            .try_fold(0u64, |acc, a| acc.checked_add(a.duration))
            .ok_or_else(|| PromoError::validation("act durations overflow the timeline"))?;
        let config = TimelineConfig {
            id: self.id,
            fps: self.fps,
            canvas: self.canvas,
            duration: FrameIndex(duration),
            background: self.background,
        };
        config.validate()?;

        let mut start = 0u64;
        let mut acts = Vec::with_capacity(self.acts.len());
        for pending in self.acts {
            let scene = match pending.scene {
                PendingScene::Ready(scene) => scene,
                PendingScene::Kind(kind) => kind.instantiate(&SceneSetup {
                    fps: config.fps,
                    canvas: config.canvas,
                    seed: stable_hash64(self.seed, &pending.name),
                })?,
            };
            acts.push(Act {
                window: ActWindow {
                    start: FrameIndex(start),
                    duration: pending.duration,
                },
                name: pending.name,
                scene,
                transition_out: pending.transition_out,
            });
            // Cannot overflow: the total was checked above.
            start += pending.duration;
        }

        let comp = Composition {
            config,
            acts,
            seed: self.seed,
        };
        comp.validate()?;
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
