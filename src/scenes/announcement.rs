use crate::{
    animation::{
        ease::Ease,
        interpolate::{Breakpoints, InterpolateOpts},
        ops::beat,
    },
    foundation::error::PromoResult,
    scene::model::{Node, SceneTree},
    scenes::{
        layout::centered_text,
        palette,
        scene::{Scene, SceneCtx, SceneSetup},
    },
};

pub const HEADLINE: &str = "Own the AI Answer";
const HEADLINE_PX: f64 = 52.0;

/// Headline that pops in from nothing with an ease-out scale.
#[derive(Clone, Debug)]
pub struct AnnouncementScene {
    scale: Breakpoints,
    opacity: Breakpoints,
}

impl AnnouncementScene {
    pub fn new(setup: &SceneSetup) -> PromoResult<Self> {
        let fps = setup.fps;
        Ok(Self {
            scale: Breakpoints::new([0.0, beat(fps, 0.5)], [0.0, 1.0])?
                .with_opts(InterpolateOpts::clamp_right().with_ease(Ease::OutCubic)),
            opacity: Breakpoints::new([0.0, beat(fps, 0.3)], [0.0, 1.0])?
                .with_opts(InterpolateOpts::clamp_right()),
        })
    }

    pub fn scale_at(&self, frame: f64) -> f64 {
        self.scale.sample(frame)
    }

    pub fn opacity_at(&self, frame: f64) -> f64 {
        self.opacity.sample(frame)
    }
}

impl Scene for AnnouncementScene {
    fn name(&self) -> &str {
        "announcement"
    }

    fn render(&self, ctx: &SceneCtx) -> SceneTree {
        let center = ctx.canvas.center();
        let headline = centered_text(
            "text",
            center.x,
            center.y + HEADLINE_PX * 0.35,
            HEADLINE,
            HEADLINE_PX,
        )
        .weight(800)
        .fill(palette::INDIGO);

        SceneTree::new(vec![
            Node::group("headline", vec![headline])
                .origin(center)
                .scale(self.scale_at(ctx.frame))
                .opacity(self.opacity_at(ctx.frame)),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/announcement.rs"]
mod tests;
