use crate::{
    animation::{
        interpolate::{Breakpoints, InterpolateOpts, interpolate},
        ops::{beat, has_started},
        spring::{Spring, SpringConfig},
    },
    foundation::{
        core::{Fps, Vec2},
        error::{PromoError, PromoResult},
    },
    scene::model::{Node, SceneTree},
    scenes::{
        layout::centered_text,
        palette,
        scene::{Scene, SceneCtx, SceneSetup},
    },
};

pub const STAT: &str = "60%";
pub const SUPPORT: &str = "of searches never click a link anymore.";
const STAT_PX: f64 = 140.0;
const SUPPORT_PX: f64 = 24.0;

/// A big statistic that slams in oversized, settles on an impact spring and shakes on landing.
#[derive(Clone, Debug)]
pub struct KineticStatScene {
    fps: Fps,
    start: f64,
    impact: Spring,
    opacity: Breakpoints,
    shake: Breakpoints,
    support_opacity: Breakpoints,
}

impl KineticStatScene {
    pub const DEFAULT_DELAY_SECS: f64 = 2.5;

    /// `delay_secs` is the offset from the act start at which the stat lands.
    pub fn new(setup: &SceneSetup, delay_secs: f64) -> PromoResult<Self> {
        if !delay_secs.is_finite() || delay_secs < 0.0 {
            return Err(PromoError::validation(format!(
                "kinetic stat delay must be >= 0 seconds, got {delay_secs}"
            )));
        }
        let fps = setup.fps;
        let start = beat(fps, delay_secs);
        let impact = Spring::new(SpringConfig::new(12.0, 200.0, 0.5)?).delay(start);
        Ok(Self {
            fps,
            start,
            impact,
            opacity: Breakpoints::new([start, start + beat(fps, 0.1)], [0.0, 1.0])?
                .with_opts(InterpolateOpts::clamp()),
            shake: Breakpoints::new(
                [start, start + beat(fps, 0.15), start + beat(fps, 0.3)],
                [0.0, 4.0, 0.0],
            )?
            .with_opts(InterpolateOpts::clamp()),
            support_opacity: Breakpoints::new(
                [start + beat(fps, 0.4), start + beat(fps, 0.7)],
                [0.0, 1.0],
            )?
            .with_opts(InterpolateOpts::clamp()),
        })
    }

    /// Local frame the stat appears at.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Stat scale at `frame`, held within `[1, 2.5]`.
    pub fn scale_at(&self, frame: f64) -> f64 {
        let impact = self.impact.sample(frame, self.fps);
        interpolate(impact, &[0.0, 1.0], &[2.5, 1.0], InterpolateOpts::clamp())
    }

    /// Camera shake offset at `frame`.
    pub fn shake_at(&self, frame: f64) -> Vec2 {
        let intensity = self.shake.sample(frame);
        Vec2::new(
            (frame * 2.0).sin() * intensity,
            (frame * 3.0).cos() * intensity * 0.5,
        )
    }
}

impl Scene for KineticStatScene {
    fn name(&self) -> &str {
        "kinetic_stat"
    }

    fn render(&self, ctx: &SceneCtx) -> SceneTree {
        let frame = ctx.frame;
        if !has_started(frame, self.start) {
            return SceneTree::empty();
        }

        let center = ctx.canvas.center();
        let stat_baseline = center.y + 20.0;
        let stat = Node::group(
            "stat",
            vec![
                centered_text("value", center.x, stat_baseline, STAT, STAT_PX)
                    .weight(900)
                    .fill(palette::ROSE),
            ],
        )
        .origin(center)
        .scale(self.scale_at(frame))
        .opacity(self.opacity.sample(frame));
        let support = centered_text(
            "support",
            center.x,
            stat_baseline + 8.0 + SUPPORT_PX * 1.5,
            SUPPORT,
            SUPPORT_PX,
        )
        .weight(500)
        .fill(palette::SLATE)
        .opacity(self.support_opacity.sample(frame));

        let shake = self.shake_at(frame);
        SceneTree::new(vec![
            Node::group("kinetic", vec![stat, support]).translate(shake.x, shake.y),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/kinetic_stat.rs"]
mod tests;
