use crate::{foundation::core::Point, scene::model::Node};

/// Average advance of a proportional UI face, as a fraction of the font size.
pub const SANS_ADVANCE: f64 = 0.55;
/// Advance of a monospace face, as a fraction of the font size.
pub const MONO_ADVANCE: f64 = 0.6;

/// Estimated rendered width of `text`. Scenes lay out against this estimate; the host shapes the
/// real glyphs.
pub fn text_width(text: &str, size_px: f64, advance: f64) -> f64 {
    text.chars().count() as f64 * size_px * advance
}

/// Text node horizontally centered on `center_x`, with its baseline at `baseline_y`.
pub fn centered_text(
    id: impl Into<String>,
    center_x: f64,
    baseline_y: f64,
    text: &str,
    size_px: f64,
) -> Node {
    let width = text_width(text, size_px, SANS_ADVANCE);
    Node::text(
        id,
        Point::new(center_x - width / 2.0, baseline_y),
        text,
        size_px,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/layout.rs"]
mod tests;
