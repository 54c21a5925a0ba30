use crate::{
    composition::{
        model::Composition,
        sequencer::{ActPhase, active_acts},
    },
    foundation::{
        core::{Canvas, FrameIndex, Rgba8Premul},
        error::{PromoError, PromoResult},
    },
    scene::{
        fingerprint::{FrameFingerprint, fingerprint_tree},
        model::{Node, SceneTree},
    },
    scenes::scene::SceneCtx,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything visible at one global frame.
pub struct EvaluatedFrame {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    pub canvas: Canvas,
    /// Stage color under all acts.
    pub background: Rgba8Premul,
    /// Mounted acts in paint order (bottom first).
    pub acts: Vec<EvaluatedAct>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One mounted act rendered at its local frame.
pub struct EvaluatedAct {
    pub name: String,
    /// Index into [`Composition::acts`].
    pub index: usize,
    pub local_frame: FrameIndex,
    /// Crossfade opacity applied on top of the scene's own styling.
    pub opacity: f64,
    pub phase: ActPhase,
    pub tree: SceneTree,
}

impl EvaluatedFrame {
    /// Flatten into one tree: a backdrop rect followed by one group per act carrying its
    /// crossfade opacity.
    pub fn to_scene(&self) -> SceneTree {
        let mut nodes = Vec::with_capacity(self.acts.len() + 1);
        nodes.push(Node::rect("background", self.canvas.rect()).fill(self.background));
        nodes.extend(
            self.acts
                .iter()
                .map(|act| act.tree.clone().into_group(act.name.clone()).opacity(act.opacity)),
        );
        SceneTree::new(nodes)
    }

    /// Stable hash of the flattened tree.
    pub fn fingerprint(&self) -> PromoResult<FrameFingerprint> {
        fingerprint_tree(&self.to_scene())
    }

    pub fn act(&self, name: &str) -> Option<&EvaluatedAct> {
        self.acts.iter().find(|a| a.name == name)
    }
}

/// Stateless evaluator from composition timeline to per-frame scene trees.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(comp))]
    /// Evaluate one frame. Frames at or past the composition duration are an error.
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> PromoResult<EvaluatedFrame> {
        Self::eval_frame_impl(comp, frame, true)
    }

    /// Evaluate a frame of a composition the caller already validated.
    pub(crate) fn eval_frame_unchecked(
        comp: &Composition,
        frame: FrameIndex,
    ) -> PromoResult<EvaluatedFrame> {
        Self::eval_frame_impl(comp, frame, false)
    }

    fn eval_frame_impl(
        comp: &Composition,
        frame: FrameIndex,
        validate_comp: bool,
    ) -> PromoResult<EvaluatedFrame> {
        if validate_comp {
            comp.validate()?;
        }
        if frame.0 >= comp.duration().0 {
            return Err(PromoError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0,
                comp.duration().0
            )));
        }

        let acts = active_acts(comp, frame)
            .into_iter()
            .map(|active| {
                let act = &comp.acts[active.index];
                let ctx = SceneCtx {
                    frame: active.local_frame.0 as f64,
                    fps: comp.fps(),
                    canvas: comp.canvas(),
                    duration: act.window.duration as f64,
                    span: act.mounted_range().len_frames() as f64,
                };
                EvaluatedAct {
                    name: act.name.clone(),
                    index: active.index,
                    local_frame: active.local_frame,
                    opacity: active.opacity,
                    phase: active.phase,
                    tree: act.scene.render(&ctx),
                }
            })
            .collect();

        Ok(EvaluatedFrame {
            frame,
            canvas: comp.canvas(),
            background: comp.config.background,
            acts,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
