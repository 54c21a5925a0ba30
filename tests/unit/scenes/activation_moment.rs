use super::*;
use crate::{
    foundation::core::{Canvas, Fps},
    scene::{fingerprint::fingerprint_tree, model::Shape},
};

fn setup(seed: u64) -> SceneSetup {
    SceneSetup {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 1280,
            height: 720,
        },
        seed,
    }
}

fn ctx(frame: f64) -> SceneCtx {
    SceneCtx {
        frame,
        fps: Fps::new(30, 1).unwrap(),
        canvas: setup(0).canvas,
        duration: 90.0,
        span: 110.0,
    }
}

fn text_of(tree: &SceneTree, path: &str) -> String {
    match &tree.find(path).unwrap().shape {
        Shape::Text { text, .. } => text.clone(),
        other => panic!("unexpected shape {other:?}"),
    }
}

#[test]
fn press_and_header_timing() {
    let s = ActivationMomentScene::new(&setup(1)).unwrap();
    assert_eq!(s.press_frame(), 9.0);
    assert_eq!(s.header_at(24.0), 0.0);
    assert!((s.header_at(28.5) - 0.5).abs() < 1e-9);
    assert_eq!(s.header_at(33.0), 1.0);
}

#[test]
fn metric_rows_are_staggered_by_eight_frames() {
    let s = ActivationMomentScene::new(&setup(1)).unwrap();
    for i in 0..METRICS.len() {
        let delay = 18.0 + 8.0 * i as f64;
        assert_eq!(s.row_progress(i, delay), 0.0);
        assert!(s.row_progress(i, delay + 1.0) > 0.0);
        assert_eq!(s.row_progress(i, delay + 24.0), 1.0);
    }
    assert_eq!(s.row_progress(99, 50.0), 0.0);
}

#[test]
fn values_cross_fade_and_rows_turn_green() {
    let s = ActivationMomentScene::new(&setup(1)).unwrap();
    let before = s.render(&ctx(0.0));
    let row = before.find("card/row_0/bg").unwrap();
    assert_eq!(row.style.fill, Some(palette::LOSS_TINT));
    assert_eq!(before.find("card/row_0/before").unwrap().style.opacity, 1.0);
    assert_eq!(before.find("card/row_0/after").unwrap().style.opacity, 0.0);

    let after = s.render(&ctx(80.0));
    let row = after.find("card/row_4/bg").unwrap();
    assert_eq!(row.style.fill, Some(palette::WIN_TINT));
    assert_eq!(after.find("card/row_4/before").unwrap().style.opacity, 0.0);
    assert_eq!(after.find("card/row_4/after").unwrap().style.opacity, 1.0);
}

#[test]
fn button_label_swaps_with_header() {
    let s = ActivationMomentScene::new(&setup(1)).unwrap();
    assert_eq!(text_of(&s.render(&ctx(0.0)), "card/button/label"), BUTTON_IDLE);
    assert_eq!(text_of(&s.render(&ctx(40.0)), "card/button/label"), BUTTON_DONE);
    assert_eq!(
        text_of(&s.render(&ctx(0.0)), "header/before/title"),
        HEADER_BEFORE.1
    );
}

#[test]
fn button_squashes_on_press() {
    let s = ActivationMomentScene::new(&setup(1)).unwrap();
    let scale = |f: f64| s.render(&ctx(f)).find("card/button").unwrap().style.scale;
    assert_eq!(scale(0.0), 1.0);
    assert_eq!(scale(12.0), 0.9);
    assert_eq!(scale(19.0), 1.05);
    assert_eq!(scale(60.0), 1.05);
}

#[test]
fn flash_and_particles_are_dark_before_press() {
    let s = ActivationMomentScene::new(&setup(1)).unwrap();
    let tree = s.render(&ctx(0.0));
    assert_eq!(tree.find("flash").unwrap().style.opacity, 0.0);
    let particles = tree.find("card/particles").unwrap();
    assert_eq!(particles.children().len(), 16);
    assert!(particles.children().iter().all(|p| p.style.opacity == 0.0));

    let tree = s.render(&ctx(14.0));
    assert!((tree.find("flash").unwrap().style.opacity - 0.3).abs() < 1e-9);
}

#[test]
fn particles_are_fixed_for_the_mount() {
    let s = ActivationMomentScene::new(&setup(5)).unwrap();
    let burst = s.burst().clone();
    let a = fingerprint_tree(&s.render(&ctx(20.0))).unwrap();
    let _ = s.render(&ctx(3.0));
    let b = fingerprint_tree(&s.render(&ctx(20.0))).unwrap();
    assert_eq!(a, b);
    assert_eq!(s.burst(), &burst);

    let other = ActivationMomentScene::new(&setup(6)).unwrap();
    assert_ne!(other.burst(), s.burst());
}

#[test]
fn idle_button_glow_pulses_until_pressed() {
    let s = ActivationMomentScene::new(&setup(1)).unwrap();
    let glows: Vec<f64> = (0..9)
        .map(|f| s.render(&ctx(f as f64)).find("card/button/glow").unwrap().style.opacity)
        .collect();
    assert!((glows[0] - 0.55).abs() < 1e-9);
    assert!(glows.iter().all(|g| (0.3..=0.8).contains(g)));
    assert!(glows.windows(2).any(|w| (w[0] - w[1]).abs() > 1e-3));
    assert_eq!(s.glow_at(s.press_frame()), GLOW_ALPHA);
    assert_eq!(s.glow_at(60.0), GLOW_ALPHA);
}

#[test]
fn plain_counts_tick_up_to_their_final_value() {
    let citations = &METRICS[3];
    assert_eq!(ActivationMomentScene::after_text(citations, 0.0), "0");
    let mid: u64 = ActivationMomentScene::after_text(citations, 0.5).parse().unwrap();
    assert!(mid > 0 && mid < 847);
    assert_eq!(ActivationMomentScene::after_text(citations, 1.0), "847");
    // Formatted values are shown as-is.
    assert_eq!(ActivationMomentScene::after_text(&METRICS[4], 0.5), "$42K/mo");

    let s = ActivationMomentScene::new(&setup(1)).unwrap();
    assert_eq!(text_of(&s.render(&ctx(80.0)), "card/row_3/after"), "847");
}
