use super::*;

fn setup() -> SceneSetup {
    SceneSetup {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 1280,
            height: 720,
        },
        seed: 7,
    }
}

#[test]
fn scene_kind_uses_snake_case_tags() {
    let kind: SceneKind = serde_json::from_str(r#"{"kind":"activation_moment"}"#).unwrap();
    assert_eq!(kind, SceneKind::ActivationMoment);

    let json = serde_json::to_string(&SceneKind::BrandReveal).unwrap();
    assert_eq!(json, r#"{"kind":"brand_reveal"}"#);
}

#[test]
fn kinetic_stat_delay_defaults_when_omitted() {
    let kind: SceneKind = serde_json::from_str(r#"{"kind":"kinetic_stat"}"#).unwrap();
    assert_eq!(
        kind,
        SceneKind::KineticStat {
            delay_secs: KineticStatScene::DEFAULT_DELAY_SECS
        }
    );
    let kind: SceneKind =
        serde_json::from_str(r#"{"kind":"kinetic_stat","delay_secs":0.5}"#).unwrap();
    assert_eq!(kind, SceneKind::KineticStat { delay_secs: 0.5 });
}

#[test]
fn instantiate_builds_every_scene() {
    let kinds = [
        (SceneKind::Terminal, "terminal"),
        (SceneKind::Announcement, "announcement"),
        (SceneKind::KineticStat { delay_secs: 1.0 }, "kinetic_stat"),
        (SceneKind::ActivationMoment, "activation_moment"),
        (SceneKind::BrandReveal, "brand_reveal"),
    ];
    for (kind, name) in kinds {
        let scene = kind.instantiate(&setup()).unwrap();
        assert_eq!(scene.name(), name);
    }
}

#[test]
fn instantiate_rejects_bad_parameters() {
    let err = SceneKind::KineticStat { delay_secs: -1.0 }
        .instantiate(&setup())
        .err()
        .unwrap();
    assert!(err.to_string().contains("kinetic stat delay"));
}

#[test]
fn ctx_beat_follows_fps() {
    let ctx = SceneCtx {
        frame: 0.0,
        fps: Fps::new(60, 1).unwrap(),
        canvas: setup().canvas,
        duration: 10.0,
        span: 10.0,
    };
    assert_eq!(ctx.beat(0.5), 30.0);
}
