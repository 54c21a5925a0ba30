use super::*;
use crate::foundation::core::{Canvas, Fps};

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn scene() -> TerminalScene {
    TerminalScene::new(&SceneSetup {
        fps: fps30(),
        canvas: Canvas {
            width: 1280,
            height: 720,
        },
        seed: 0,
    })
    .unwrap()
}

fn ctx(frame: f64) -> SceneCtx {
    SceneCtx {
        frame,
        fps: fps30(),
        canvas: Canvas {
            width: 1280,
            height: 720,
        },
        duration: 150.0,
        span: 180.0,
    }
}

fn command_text(tree: &SceneTree) -> String {
    match &tree.find("terminal/window/prompt/command").unwrap().shape {
        crate::scene::model::Shape::Text { text, .. } => text.clone(),
        other => panic!("unexpected shape {other:?}"),
    }
}

#[test]
fn schedule_matches_typing_rate() {
    let t = scene();
    // 42 chars at 18 cps and 30 fps.
    assert_eq!(COMMAND.chars().count(), 42);
    assert!((t.typing_end() - 70.0).abs() < 1e-9);
    assert!((t.output_start() - 85.0).abs() < 1e-9);
}

#[test]
fn command_types_out_progressively() {
    let t = scene();
    assert_eq!(command_text(&t.render(&ctx(0.0))), "");
    assert_eq!(command_text(&t.render(&ctx(60.0))), &COMMAND[..36]);
    assert_eq!(command_text(&t.render(&ctx(70.0))), COMMAND);
    assert_eq!(command_text(&t.render(&ctx(140.0))), COMMAND);
}

#[test]
fn cursor_is_solid_while_typing_then_blinks() {
    let t = scene();
    let cursor = |f: f64| {
        t.render(&ctx(f))
            .find("terminal/window/prompt/cursor")
            .map(|n| n.style.opacity)
    };
    // Frame 20 falls in an "off" half-period but typing keeps the cursor lit.
    assert_eq!(cursor(20.0), Some(1.0));
    assert_eq!(cursor(70.0), Some(1.0));
    assert_eq!(cursor(75.0), Some(0.0));
    assert_eq!(cursor(84.0), Some(0.0));
    assert_eq!(cursor(85.0), None);
}

#[test]
fn output_appears_after_the_pause() {
    let t = scene();
    assert!(t.render(&ctx(84.0)).find("terminal/window/output").is_none());
    let tree = t.render(&ctx(85.0));
    assert!(tree.find("terminal/window/output/logo/logo_0").is_some());
    assert!(tree.find("terminal/window/output/line_0").is_none());
}

#[test]
fn lines_reveal_every_few_frames() {
    let t = scene();
    assert_eq!(t.visible_lines(0.0), 0);
    assert_eq!(t.visible_lines(92.0), 0);
    // Lines start at 85 + 3 * 2.4 = 92.2 and arrive 2.4 frames apart.
    assert_eq!(t.visible_lines(100.0), 3);
    assert_eq!(t.visible_lines(141.0), OUTPUT_LINES.len());
    assert_eq!(t.visible_lines(1_000.0), OUTPUT_LINES.len());

    let tree = t.render(&ctx(100.0));
    assert!(tree.find("terminal/window/output/line_2").is_some());
    assert!(tree.find("terminal/window/output/line_3").is_none());
}

#[test]
fn output_rows_stop_at_window_edge() {
    let t = scene();
    let tree = t.render(&ctx(170.0));
    let output = tree.find("terminal/window/output").unwrap();
    let rows = output.children().len() - 1;
    assert!(rows > 0 && rows < OUTPUT_LINES.len());
}

#[test]
fn line_colors_follow_markers() {
    assert_eq!(line_color(OUTPUT_LINES[12]), term::ALERT);
    assert_eq!(line_color(OUTPUT_LINES[6]), term::OK);
    assert_eq!(line_color(OUTPUT_LINES[15]), term::HINT);
    assert_eq!(line_color(OUTPUT_LINES[1]), term::TEXT);
}

#[test]
fn slides_in_then_flips_after_nominal_end() {
    let t = scene();
    let terminal = |f: f64| t.render(&ctx(f)).nodes[0].clone();
    let window_tilt = |f: f64| terminal(f).children()[0].style.tilt_deg.x;

    assert_eq!(terminal(0.0).style.translate.y, 700.0);
    assert!((terminal(120.0).style.translate.y - 80.0).abs() < 1.0);
    assert_eq!(terminal(0.0).style.tilt_deg.y, 8.0);
    assert_eq!(terminal(0.0).style.scale, 0.92);

    assert_eq!(window_tilt(149.0), 0.0);
    assert_eq!(window_tilt(150.0), 0.0);
    let mid = window_tilt(165.0);
    assert!(mid < 0.0 && mid > -90.0);
    assert!(window_tilt(179.0) < mid);
}
