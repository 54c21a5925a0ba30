use crate::{
    animation::{
        interpolate::{Breakpoints, InterpolateOpts, interpolate},
        ops::{beat, shimmer_offset, stagger_delay},
        spring::{Spring, SpringConfig},
    },
    foundation::{
        core::{Fps, Point, Rect, Rgba8Premul},
        error::PromoResult,
    },
    scene::model::{Node, SceneTree},
    scenes::{
        layout::{SANS_ADVANCE, centered_text, text_width},
        palette,
        scene::{Scene, SceneCtx, SceneSetup},
    },
};

pub const NAME: &str = "AEOEngine";
pub const SUBTITLE: &str = "AI Search SEO on Auto-Pilot";
pub const URL: &str = "aeoengine.ai";
const RANK_ON: &str = "Rank on";
const ICON: f64 = 80.0;
/// Speed of the highlight sweeping across the icon.
const SHINE_PX_PER_SEC: f64 = 200.0;

/// Platform badge: label, background tint, text color.
pub const BADGES: [(&str, Rgba8Premul, Rgba8Premul); 5] = [
    (
        "Google",
        Rgba8Premul::opaque(0xdb, 0xea, 0xfe),
        Rgba8Premul::opaque(0x1d, 0x4e, 0xd8),
    ),
    (
        "Bing",
        Rgba8Premul::opaque(0xcf, 0xfa, 0xfe),
        Rgba8Premul::opaque(0x0e, 0x74, 0x90),
    ),
    (
        "ChatGPT",
        Rgba8Premul::opaque(0xdc, 0xfc, 0xe7),
        Rgba8Premul::opaque(0x15, 0x80, 0x3d),
    ),
    (
        "Claude",
        Rgba8Premul::opaque(0xf3, 0xe8, 0xff),
        Rgba8Premul::opaque(0x7e, 0x22, 0xce),
    ),
    (
        "Perplexity",
        Rgba8Premul::opaque(0xff, 0xed, 0xd5),
        Rgba8Premul::opaque(0xc2, 0x41, 0x0c),
    ),
];

const BADGE_PX: f64 = 14.0;
const BADGE_H: f64 = 28.0;
const BADGE_GAP: f64 = 12.0;
/// Frames between consecutive badges.
const BADGE_STAGGER: f64 = 4.0;

/// Closing card: logo lockup sliding up, then the "Rank on" badge strip and the URL.
#[derive(Clone, Debug)]
pub struct BrandRevealScene {
    fps: Fps,
    slide_up: Spring,
    opacity: Breakpoints,
    tagline: Breakpoints,
    url: Breakpoints,
    badge_start: f64,
    badge_fade: f64,
    badge_rise: Spring,
}

impl BrandRevealScene {
    pub fn new(setup: &SceneSetup) -> PromoResult<Self> {
        let fps = setup.fps;
        let tagline_start = beat(fps, 0.5);
        Ok(Self {
            fps,
            slide_up: Spring::new(SpringConfig::new(200.0, 100.0, 1.0)?).from_to(50.0, 0.0),
            opacity: Breakpoints::new([0.0, beat(fps, 0.3)], [0.0, 1.0])?
                .with_opts(InterpolateOpts::clamp_right()),
            tagline: Breakpoints::new([tagline_start, beat(fps, 0.8)], [0.0, 1.0])?
                .with_opts(InterpolateOpts::clamp()),
            url: Breakpoints::new([beat(fps, 0.8), beat(fps, 1.1)], [0.0, 1.0])?
                .with_opts(InterpolateOpts::clamp()),
            badge_start: tagline_start,
            badge_fade: beat(fps, 0.2),
            badge_rise: Spring::new(SpringConfig::new(20.0, 150.0, 1.0)?).from_to(30.0, 0.0),
        })
    }

    /// Vertical offset of the lockup at `frame`.
    pub fn lift_at(&self, frame: f64) -> f64 {
        self.slide_up.sample(frame, self.fps)
    }

    pub fn opacity_at(&self, frame: f64) -> f64 {
        self.opacity.sample(frame)
    }

    pub fn tagline_at(&self, frame: f64) -> f64 {
        self.tagline.sample(frame)
    }

    pub fn url_at(&self, frame: f64) -> f64 {
        self.url.sample(frame)
    }

    /// First frame badge `index` starts fading in.
    pub fn badge_delay(&self, index: usize) -> f64 {
        stagger_delay(self.badge_start, index, BADGE_STAGGER)
    }

    /// Opacity and vertical offset of badge `index` at `frame`.
    pub fn badge_at(&self, index: usize, frame: f64) -> (f64, f64) {
        let delay = self.badge_delay(index);
        let opacity = interpolate(
            frame,
            &[delay, delay + self.badge_fade],
            &[0.0, 1.0],
            InterpolateOpts::clamp(),
        );
        let rise = self.badge_rise.delay(delay).sample(frame, self.fps);
        (opacity, rise)
    }

    /// Horizontal position of the icon highlight, in `[0, 80)` from the icon's left edge.
    pub fn shine_at(&self, frame: f64) -> f64 {
        shimmer_offset(frame, self.fps, SHINE_PX_PER_SEC).rem_euclid(ICON)
    }

    fn lockup(&self, frame: f64, center: Point) -> Vec<Node> {
        let name_w = text_width(NAME, 48.0, SANS_ADVANCE);
        let sub_w = text_width(SUBTITLE, 18.0, SANS_ADVANCE);
        let row_w = ICON + 16.0 + name_w.max(sub_w);
        let left = center.x - row_w / 2.0;
        let top = center.y - 120.0;
        let icon = Rect::new(left, top, left + ICON, top + ICON);
        let shine_x = icon.x0 + self.shine_at(frame);
        let text_x = icon.x1 + 16.0;

        vec![
            Node::rect("icon", icon).rounded(16.0).fill(palette::INDIGO),
            Node::line(
                "shine",
                Point::new(shine_x, icon.y0 + 8.0),
                Point::new(shine_x, icon.y1 - 8.0),
            )
            .stroke(palette::WHITE, 6.0)
            .opacity(0.25),
            centered_text("monogram", icon.center().x, icon.center().y + 13.0, "A", 36.0)
                .weight(700)
                .fill(palette::WHITE),
            Node::text("name", Point::new(text_x, top + 46.0), NAME, 48.0)
                .weight(800)
                .fill(palette::INK),
            Node::text("subtitle", Point::new(text_x, top + 74.0), SUBTITLE, 18.0)
                .weight(500)
                .fill(palette::MUTED),
        ]
    }

    fn badge_strip(&self, frame: f64, center_x: f64, top: f64) -> Node {
        let widths: Vec<f64> = BADGES
            .iter()
            .map(|(label, ..)| text_width(label, BADGE_PX, SANS_ADVANCE) + 24.0)
            .collect();
        let lead_w = text_width(RANK_ON, 18.0, SANS_ADVANCE);
        let strip_w = lead_w + widths.iter().map(|w| w + BADGE_GAP).sum::<f64>();
        let mut x = center_x - strip_w / 2.0;

        let mut children = vec![
            Node::text("rank_on", Point::new(x, top + 20.0), RANK_ON, 18.0).fill(palette::MUTED),
        ];
        x += lead_w + BADGE_GAP;
        for (i, ((label, tint, ink), w)) in BADGES.iter().zip(&widths).enumerate() {
            let (opacity, rise) = self.badge_at(i, frame);
            let pill = Rect::new(x, top, x + w, top + BADGE_H);
            children.push(
                Node::group(
                    format!("badge_{i}"),
                    vec![
                        Node::rect("pill", pill).rounded(BADGE_H / 2.0).fill(*tint),
                        Node::text("label", Point::new(x + 12.0, top + 19.0), *label, BADGE_PX)
                            .weight(500)
                            .fill(*ink),
                    ],
                )
                .translate(0.0, rise)
                .opacity(opacity),
            );
            x += w + BADGE_GAP;
        }
        Node::group("tagline", children).opacity(self.tagline_at(frame))
    }
}

impl Scene for BrandRevealScene {
    fn name(&self) -> &str {
        "brand_reveal"
    }

    fn render(&self, ctx: &SceneCtx) -> SceneTree {
        let frame = ctx.frame;
        let center = ctx.canvas.center();

        let mut children = self.lockup(frame, center);
        children.push(self.badge_strip(frame, center.x, center.y + 4.0));
        children.push(
            centered_text("url", center.x, center.y + 96.0, URL, 24.0)
                .weight(600)
                .fill(palette::INDIGO)
                .opacity(self.url_at(frame)),
        );

        SceneTree::new(vec![
            Node::group("reveal", children)
                .translate(0.0, self.lift_at(frame))
                .opacity(self.opacity_at(frame)),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/brand_reveal.rs"]
mod tests;
