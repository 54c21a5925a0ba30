use super::*;
use crate::foundation::core::{Canvas, Fps};

fn scene() -> AnnouncementScene {
    AnnouncementScene::new(&SceneSetup {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 1280,
            height: 720,
        },
        seed: 0,
    })
    .unwrap()
}

#[test]
fn scale_eases_out_and_holds() {
    let s = scene();
    assert_eq!(s.scale_at(0.0), 0.0);
    assert!((s.scale_at(7.5) - 0.875).abs() < 1e-12);
    assert_eq!(s.scale_at(15.0), 1.0);
    assert_eq!(s.scale_at(59.0), 1.0);
}

#[test]
fn opacity_ramps_over_nine_frames() {
    let s = scene();
    assert_eq!(s.opacity_at(0.0), 0.0);
    assert!((s.opacity_at(4.5) - 0.5).abs() < 1e-12);
    assert_eq!(s.opacity_at(9.0), 1.0);
    assert_eq!(s.opacity_at(40.0), 1.0);
}

#[test]
fn renders_headline_group() {
    let s = scene();
    let ctx = SceneCtx {
        frame: 30.0,
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 1280,
            height: 720,
        },
        duration: 60.0,
        span: 70.0,
    };
    let tree = s.render(&ctx);
    let group = tree.find("headline").unwrap();
    assert_eq!(group.style.scale, 1.0);
    assert_eq!(group.style.opacity, 1.0);
    assert_eq!(group.style.origin, ctx.canvas.center());
    assert!(tree.find("headline/text").is_some());
}
