use std::sync::Arc;

use super::*;
use crate::{
    composition::{config::promo_composition, dsl::CompositionBuilder, model::Crossfade},
    foundation::core::{Fps, Rect},
    scenes::scene::Scene,
};

/// Records the context it was rendered with in its node id.
struct CtxRecorder;

impl Scene for CtxRecorder {
    fn name(&self) -> &str {
        "ctx_recorder"
    }

    fn render(&self, ctx: &SceneCtx) -> SceneTree {
        SceneTree::new(vec![Node::rect(
            format!("{}/{}/{}", ctx.frame, ctx.duration, ctx.span),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        )])
    }
}

fn recorder_comp() -> Composition {
    CompositionBuilder::new(
        "ctx_recorder",
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 320,
            height: 180,
        },
    )
    .act("a", Arc::new(CtxRecorder), 20)
    .crossfade(Crossfade::linear(10).unwrap())
    .unwrap()
    .act("b", Arc::new(CtxRecorder), 30)
    .build()
    .unwrap()
}

#[test]
fn scene_ctx_carries_local_frame_and_spans() {
    let frame = Evaluator::eval_frame(&recorder_comp(), FrameIndex(25)).unwrap();
    let a = frame.act("a").unwrap();
    assert_eq!(a.tree.nodes[0].id, "25/20/30");
    assert_eq!(a.phase, ActPhase::Leaving);

    let b = frame.act("b").unwrap();
    assert_eq!(b.tree.nodes[0].id, "5/30/30");
    assert_eq!(b.local_frame, FrameIndex(5));
    assert_eq!(b.index, 1);
}

#[test]
fn out_of_range_frame_is_an_error() {
    let comp = recorder_comp();
    assert!(Evaluator::eval_frame(&comp, FrameIndex(49)).is_ok());
    let err = Evaluator::eval_frame(&comp, FrameIndex(50)).err().unwrap();
    assert!(matches!(err, PromoError::Evaluation(_)));
}

#[test]
fn invalid_composition_is_rejected() {
    let mut comp = recorder_comp();
    comp.acts[1].window.start = FrameIndex(21);
    assert!(Evaluator::eval_frame(&comp, FrameIndex(0)).is_err());
}

#[test]
fn to_scene_paints_background_then_acts() {
    let frame = Evaluator::eval_frame(&recorder_comp(), FrameIndex(25)).unwrap();
    let scene = frame.to_scene();
    let ids: Vec<&str> = scene.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["background", "a", "b"]);
    assert_eq!(scene.nodes[0].style.fill, Some(frame.background));
    assert_eq!(scene.nodes[1].style.opacity, 0.5);
    assert_eq!(scene.nodes[2].style.opacity, 0.5);
}

#[test]
fn evaluation_is_deterministic() {
    let comp = promo_composition().unwrap();
    for f in [0, 100, 165, 215, 400, 539] {
        let a = Evaluator::eval_frame(&comp, FrameIndex(f)).unwrap();
        let b = Evaluator::eval_frame(&comp, FrameIndex(f)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }
}

#[test]
fn fingerprint_changes_across_frames() {
    let comp = promo_composition().unwrap();
    let a = Evaluator::eval_frame(&comp, FrameIndex(10)).unwrap();
    let b = Evaluator::eval_frame(&comp, FrameIndex(11)).unwrap();
    assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
}
