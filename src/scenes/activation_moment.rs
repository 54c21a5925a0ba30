use crate::{
    animation::{
        interpolate::{Breakpoints, InterpolateOpts, interpolate},
        ops::{beat, count_up, pulse, stagger_delay},
        particles::{BurstSpec, ParticleBurst},
    },
    foundation::{
        core::{Point, Rect, Rgba8Premul},
        error::PromoResult,
    },
    scene::model::{Node, SceneTree},
    scenes::{
        layout::{SANS_ADVANCE, centered_text, text_width},
        palette,
        scene::{Scene, SceneCtx, SceneSetup},
    },
};

/// One dashboard row flipping from its "before" to its "after" value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

pub const METRICS: [Metric; 5] = [
    Metric {
        label: "Site Authority",
        before: "12",
        after: "67",
    },
    Metric {
        label: "AI Traffic",
        before: "234/mo",
        after: "4,850/mo",
    },
    Metric {
        label: "Keywords Ranked",
        before: "47",
        after: "312",
    },
    Metric {
        label: "LLM Citations",
        before: "0",
        after: "847",
    },
    Metric {
        label: "Revenue Impact",
        before: "$0",
        after: "$42K/mo",
    },
];

pub const BUTTON_IDLE: &str = "ACTIVATE AEO ENGINE";
pub const BUTTON_DONE: &str = "ACTIVATED";
pub const HEADER_BEFORE: (&str, &str) = ("CURRENT PERFORMANCE", "Without AEO Engine");
pub const HEADER_AFTER: (&str, &str) = ("AEO ENGINE ACTIVATED", "Performance Unlocked");

const PARTICLE_TINTS: [Rgba8Premul; 2] = [palette::GREEN, palette::NAVY];

const CARD_W: f64 = 480.0;
const CARD_PAD: f64 = 24.0;
const ROW_H: f64 = 44.0;
const ROW_GAP: f64 = 8.0;
const BUTTON_H: f64 = 52.0;
const BUTTON_PX: f64 = 18.0;
const GLOW_ALPHA: f64 = 0.375;
/// Radians per frame of the idle button's glow pulse.
const GLOW_PULSE_RATE: f64 = 0.15;
/// Frames between consecutive metric rows.
const ROW_STAGGER: f64 = 8.0;

/// The "activate" beat: a button press sends a ripple, a flash and a particle burst across a
/// dashboard card whose metrics flip from red to green one row at a time.
#[derive(Clone, Debug)]
pub struct ActivationMomentScene {
    press: f64,
    button_scale: Breakpoints,
    ripple: Breakpoints,
    header: Breakpoints,
    flash: Breakpoints,
    rows: Vec<Breakpoints>,
    burst: ParticleBurst,
}

impl ActivationMomentScene {
    pub fn new(setup: &SceneSetup) -> PromoResult<Self> {
        let fps = setup.fps;
        let press = beat(fps, 0.3);
        let clamp = InterpolateOpts::clamp();

        let rows = (0..METRICS.len())
            .map(|i| {
                let delay = stagger_delay(press + beat(fps, 0.3), i, ROW_STAGGER);
                let progress = Breakpoints::new([delay, delay + beat(fps, 0.8)], [0.0, 1.0])?;
                Ok(progress.with_opts(clamp))
            })
            .collect::<PromoResult<Vec<_>>>()?;

        let burst = ParticleBurst::generate(
            setup.seed,
            &BurstSpec {
                count: 16,
                start: press,
                delay_jitter: 5.0,
                distance: (80.0, 60.0),
                size: (6.0, 8.0),
                travel_frames: beat(fps, 0.8),
                tints: PARTICLE_TINTS.len(),
            },
        )?;

        Ok(Self {
            press,
            button_scale: Breakpoints::new(
                [press, press + 3.0, press + 10.0],
                [1.0, 0.9, 1.05],
            )?
            .with_opts(clamp),
            ripple: Breakpoints::new([press + 5.0, press + beat(fps, 1.0)], [0.0, 1.0])?
                .with_opts(clamp),
            header: Breakpoints::new(
                [press + beat(fps, 0.5), press + beat(fps, 0.8)],
                [0.0, 1.0],
            )?
            .with_opts(clamp),
            flash: Breakpoints::new(
                [press, press + 5.0, press + beat(fps, 0.3)],
                [0.0, 0.3, 0.0],
            )?
            .with_opts(clamp),
            rows,
            burst,
        })
    }

    /// Local frame the button is pressed at.
    pub fn press_frame(&self) -> f64 {
        self.press
    }

    /// Before/after header crossfade progress in `[0, 1]`.
    pub fn header_at(&self, frame: f64) -> f64 {
        self.header.sample(frame)
    }

    /// Flip progress of metric row `index`; `0` for unknown rows.
    pub fn row_progress(&self, index: usize, frame: f64) -> f64 {
        self.rows.get(index).map_or(0.0, |row| row.sample(frame))
    }

    /// Button glow opacity: pulses between 0.3 and 0.8 while idle, steady once pressed.
    pub fn glow_at(&self, frame: f64) -> f64 {
        if frame >= self.press {
            return GLOW_ALPHA;
        }
        let phase = 0.5 + pulse(frame, 0.0, GLOW_PULSE_RATE, 0.5);
        interpolate(phase, &[0.0, 1.0], &[0.3, 0.8], InterpolateOpts::clamp())
    }

    /// Text of the "after" value of `metric` at `progress`; plain counts tick up from zero.
    pub fn after_text(metric: &Metric, progress: f64) -> String {
        match metric.after.parse::<u64>() {
            Ok(target) => {
                let clamp = InterpolateOpts::clamp();
                count_up(target, interpolate(progress, &[0.3, 1.0], &[0.0, 1.0], clamp)).to_string()
            }
            Err(_) => metric.after.to_owned(),
        }
    }

    pub fn burst(&self) -> &ParticleBurst {
        &self.burst
    }

    fn metric_row(&self, index: usize, metric: &Metric, frame: f64, area: Rect) -> Node {
        let progress = self.row_progress(index, frame);
        let won = progress > 0.5;
        let (tint, border) = if won {
            (palette::WIN_TINT, palette::WIN_BORDER)
        } else {
            (palette::LOSS_TINT, palette::LOSS_BORDER)
        };
        let baseline = area.y0 + 28.0;
        let right = area.x1 - 16.0;
        let clamp = InterpolateOpts::clamp();
        let before_opacity = interpolate(progress, &[0.0, 0.3], &[1.0, 0.0], clamp);
        let after_opacity = interpolate(progress, &[0.3, 0.6], &[0.0, 1.0], clamp);
        // Both values share the right edge of the row.
        let value = |id: &str, text: &str| {
            let x = right - text_width(text, 16.0, SANS_ADVANCE);
            Node::text(id, Point::new(x, baseline), text, 16.0).weight(700)
        };

        Node::group(
            format!("row_{index}"),
            vec![
                Node::rect("bg", area)
                    .rounded(8.0)
                    .fill(tint)
                    .stroke(border, 1.0),
                Node::text("label", Point::new(area.x0 + 16.0, baseline), metric.label, 14.0)
                    .weight(500)
                    .fill(palette::SLATE),
                value("before", metric.before)
                    .fill(palette::RED)
                    .opacity(before_opacity),
                value("after", &Self::after_text(metric, progress))
                    .fill(palette::GREEN)
                    .opacity(after_opacity),
            ],
        )
    }

    fn header_block(
        id: &str,
        (kicker, title): (&str, &str),
        color: Rgba8Premul,
        x: f64,
        y: f64,
    ) -> Node {
        Node::group(
            id,
            vec![
                centered_text("kicker", x, y, kicker, 12.0)
                    .weight(600)
                    .fill(color),
                centered_text("title", x, y + 36.0, title, 28.0)
                    .weight(700)
                    .fill(palette::SLATE),
            ],
        )
    }
}

impl Scene for ActivationMomentScene {
    fn name(&self) -> &str {
        "activation_moment"
    }

    fn render(&self, ctx: &SceneCtx) -> SceneTree {
        let frame = ctx.frame;
        let stage = ctx.canvas.rect();
        let center = ctx.canvas.center();
        let header = self.header_at(frame);
        let activated = header > 0.5;

        let rows_h = METRICS.len() as f64 * (ROW_H + ROW_GAP);
        let card_h = CARD_PAD + rows_h + CARD_PAD - ROW_GAP + BUTTON_H + CARD_PAD;
        let card = Rect::new(
            center.x - CARD_W / 2.0,
            center.y - card_h / 2.0 + 30.0,
            center.x + CARD_W / 2.0,
            center.y + card_h / 2.0 + 30.0,
        );

        let ripple = self.ripple.sample(frame);
        let ripple_scale = interpolate(ripple, &[0.0, 1.0], &[0.0, 8.0], InterpolateOpts::clamp());
        let ripple_opacity = interpolate(
            ripple,
            &[0.0, 0.3, 1.0],
            &[0.8, 0.4, 0.0],
            InterpolateOpts::clamp(),
        );

        let mut card_children = vec![
            Node::rect("surface", card)
                .rounded(16.0)
                .fill(palette::WHITE)
                .stroke(
                    if activated {
                        palette::WIN_BORDER
                    } else {
                        palette::navy_light()
                    },
                    1.0,
                ),
            Node::circle("ripple", card.center(), 50.0)
                .stroke(palette::GREEN, 3.0)
                .origin(card.center())
                .scale(ripple_scale)
                .opacity(ripple_opacity),
        ];
        card_children.extend(METRICS.iter().enumerate().map(|(i, metric)| {
            let y0 = card.y0 + CARD_PAD + i as f64 * (ROW_H + ROW_GAP);
            let area = Rect::new(card.x0 + CARD_PAD, y0, card.x1 - CARD_PAD, y0 + ROW_H);
            self.metric_row(i, metric, frame, area)
        }));

        let button_top = card.y1 - CARD_PAD - BUTTON_H;
        let button_center = Point::new(card.center().x, button_top + BUTTON_H / 2.0);
        let particles = self
            .burst
            .sample(frame)
            .enumerate()
            .map(|(i, p)| {
                let tint = PARTICLE_TINTS[p.tint % PARTICLE_TINTS.len()];
                Node::circle(format!("p{i}"), button_center, p.size / 2.0)
                    .fill(tint)
                    .origin(button_center)
                    .translate(p.offset.x, p.offset.y)
                    .scale(p.scale)
                    .opacity(p.opacity)
            })
            .collect();
        card_children.push(Node::group("particles", particles));

        let label = if activated { BUTTON_DONE } else { BUTTON_IDLE };
        let button_color = if activated { palette::GREEN } else { palette::NAVY };
        let half_w = (text_width(label, BUTTON_PX, SANS_ADVANCE) + 80.0) / 2.0;
        let button_rect = Rect::new(
            button_center.x - half_w,
            button_top,
            button_center.x + half_w,
            button_top + BUTTON_H,
        );
        card_children.push(
            Node::group(
                "button",
                vec![
                    Node::rect("glow", button_rect.inflate(15.0, 15.0))
                        .rounded(27.0)
                        .fill(button_color)
                        .opacity(self.glow_at(frame)),
                    Node::rect("face", button_rect)
                        .rounded(12.0)
                        .fill(button_color),
                    centered_text(
                        "label",
                        button_center.x,
                        button_center.y + 6.0,
                        label,
                        BUTTON_PX,
                    )
                    .weight(700)
                    .fill(palette::WHITE),
                ],
            )
            .origin(button_center)
            .scale(self.button_scale.sample(frame)),
        );

        let header_y = card.y0 - 64.0;
        SceneTree::new(vec![
            Node::rect("backdrop", stage).fill(palette::WHITE),
            Node::rect("flash", stage)
                .fill(palette::GREEN)
                .opacity(self.flash.sample(frame)),
            Node::rect("glow", stage)
                .fill(palette::green_light())
                .opacity(header),
            Node::group(
                "header",
                vec![
                    Self::header_block("before", HEADER_BEFORE, palette::RED, center.x, header_y)
                        .opacity(1.0 - header),
                    Self::header_block("after", HEADER_AFTER, palette::GREEN, center.x, header_y)
                        .opacity(header),
                ],
            ),
            Node::group("card", card_children),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/activation_moment.rs"]
mod tests;
