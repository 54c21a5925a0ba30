use super::*;

#[test]
fn width_counts_chars_not_bytes() {
    assert_eq!(text_width("abcd", 10.0, 0.5), 20.0);
    assert_eq!(text_width("✓✓", 10.0, 0.5), 10.0);
    assert_eq!(text_width("", 10.0, 0.5), 0.0);
}

#[test]
fn centered_text_straddles_center() {
    let node = centered_text("t", 100.0, 50.0, "abcd", 10.0);
    let crate::scene::model::Shape::Text { origin, .. } = node.shape else {
        panic!("expected text");
    };
    let half = text_width("abcd", 10.0, SANS_ADVANCE) / 2.0;
    assert_eq!(origin, Point::new(100.0 - half, 50.0));
}
