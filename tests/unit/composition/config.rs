use super::*;
use crate::foundation::core::FrameIndex;

#[test]
fn default_is_the_promo_layout() {
    let cfg = PromoConfig::default();
    assert_eq!(cfg.id, PROMO_ID);
    let layout: Vec<(&str, u64)> = cfg
        .acts
        .iter()
        .map(|a| (a.name.as_str(), a.duration_frames))
        .collect();
    assert_eq!(
        layout,
        [
            ("terminal", 150),
            ("announcement", 60),
            ("kinetic_stat", 120),
            ("activation_moment", 90),
            ("brand_reveal", 120),
        ]
    );
    assert!(cfg.acts[0].transition_out.as_ref().unwrap().outgoing_above);
    assert!(cfg.acts[4].transition_out.is_none());
}

#[test]
fn promo_builds_to_540_frames() {
    let comp = promo_composition().unwrap();
    assert_eq!(comp.duration(), FrameIndex(540));
    assert_eq!(comp.fps(), Fps { num: 30, den: 1 });
    assert_eq!(comp.canvas().width, 1280);
    assert_eq!(comp.canvas().height, 720);

    let starts: Vec<u64> = comp.acts.iter().map(|a| a.window.start.0).collect();
    assert_eq!(starts, [0, 150, 210, 330, 420]);
    assert_eq!(comp.act("terminal").unwrap().mounted_range().end, FrameIndex(180));
}

#[test]
fn json_round_trip_preserves_config() {
    let cfg = PromoConfig::default();
    let json = cfg.to_json_pretty().unwrap();
    let back = PromoConfig::from_json_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn minimal_json_fills_defaults() {
    let json = r#"{
        "id": "tiny",
        "fps": { "num": 24, "den": 1 },
        "canvas": { "width": 320, "height": 180 },
        "acts": [
            {
                "name": "one",
                "scene": { "kind": "announcement" },
                "duration_frames": 24,
                "transition_out": {
                    "frames": 6,
                    "outgoing": { "input": [0, 6], "output": [1, 0] },
                    "incoming": { "input": [0, 6], "output": [0, 1] }
                }
            },
            { "name": "two", "scene": { "kind": "kinetic_stat" }, "duration_frames": 48 }
        ]
    }"#;
    let cfg = PromoConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.seed, 0);
    assert_eq!(cfg.background, palette::BACKDROP);
    assert!(!cfg.acts[0].transition_out.as_ref().unwrap().outgoing_above);

    let comp = cfg.build().unwrap();
    assert_eq!(comp.duration(), FrameIndex(72));
    assert_eq!(comp.acts[0].transition_out.as_ref().unwrap().outgoing_opacity(3), 0.5);
}

#[test]
fn unknown_fields_are_rejected() {
    let mut value = serde_json::to_value(PromoConfig::default()).unwrap();
    value["colour"] = serde_json::json!("red");
    let err = PromoConfig::from_json_str(&value.to_string()).err().unwrap();
    assert!(matches!(err, crate::foundation::error::PromoError::Serde(_)));
}

#[test]
fn invalid_breakpoints_fail_to_parse() {
    let mut value = serde_json::to_value(PromoConfig::default()).unwrap();
    value["acts"][0]["transition_out"]["outgoing"]["input"] = serde_json::json!([0, 0, 30]);
    assert!(PromoConfig::from_json_str(&value.to_string()).is_err());
}

#[test]
fn build_rejects_overlong_crossfade() {
    let mut cfg = PromoConfig::default();
    cfg.acts[1].duration_frames = 20;
    let err = cfg.build().err().unwrap();
    assert!(err.to_string().contains("longer than"));
}

#[test]
fn missing_file_reports_path() {
    let err = PromoConfig::from_json_path("/nonexistent/promo.json")
        .err()
        .unwrap();
    assert!(err.to_string().contains("/nonexistent/promo.json"));
}

#[test]
fn huge_json_durations_fail_to_build() {
    let mut value = serde_json::to_value(PromoConfig::default()).unwrap();
    value["acts"][0]["duration_frames"] = serde_json::json!(u64::MAX);
    let err = PromoConfig::from_json_str(&value.to_string())
        .unwrap()
        .build()
        .err()
        .unwrap();
    assert!(err.to_string().contains("overflow the timeline"));
}
