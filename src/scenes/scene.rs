use std::sync::Arc;

use crate::{
    animation::ops,
    foundation::{
        core::{Canvas, Fps},
        error::PromoResult,
    },
    scene::model::SceneTree,
    scenes::{
        activation_moment::ActivationMomentScene, announcement::AnnouncementScene,
        brand_reveal::BrandRevealScene, kinetic_stat::KineticStatScene, terminal::TerminalScene,
    },
};

/// Frame-time inputs handed to [`Scene::render`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCtx {
    /// Local frame, `0` at the act's start.
    pub frame: f64,
    pub fps: Fps,
    pub canvas: Canvas,
    /// Nominal act length in frames.
    pub duration: f64,
    /// Mounted length in frames: nominal length plus any outgoing crossfade tail.
    pub span: f64,
}

impl SceneCtx {
    /// Frames spanned by `secs` seconds at this context's frame rate.
    pub fn beat(&self, secs: f64) -> f64 {
        ops::beat(self.fps, secs)
    }
}

/// Setup-time inputs handed to scene constructors.
///
/// Anything derived from these (typing schedules, spring configs, particle parameters) is computed
/// once and held for the lifetime of the mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneSetup {
    pub fps: Fps,
    pub canvas: Canvas,
    /// Per-act seed for setup-time randomness.
    pub seed: u64,
}

/// A pure visual component: the same context always produces the same tree.
pub trait Scene: Send + Sync {
    fn name(&self) -> &str;

    fn render(&self, ctx: &SceneCtx) -> SceneTree;
}

/// Serializable scene selector used by configuration files.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneKind {
    Terminal,
    Announcement,
    KineticStat {
        /// Seconds after the act start before the stat lands.
        #[serde(default = "default_stat_delay_secs")]
        delay_secs: f64,
    },
    ActivationMoment,
    BrandReveal,
}

fn default_stat_delay_secs() -> f64 {
    KineticStatScene::DEFAULT_DELAY_SECS
}

impl SceneKind {
    /// Instantiate the scene, validating its springs and tables.
    pub fn instantiate(&self, setup: &SceneSetup) -> PromoResult<Arc<dyn Scene>> {
        Ok(match *self {
            Self::Terminal => Arc::new(TerminalScene::new(setup)?),
            Self::Announcement => Arc::new(AnnouncementScene::new(setup)?),
            Self::KineticStat { delay_secs } => {
                Arc::new(KineticStatScene::new(setup, delay_secs)?)
            }
            Self::ActivationMoment => Arc::new(ActivationMomentScene::new(setup)?),
            Self::BrandReveal => Arc::new(BrandRevealScene::new(setup)?),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/scene.rs"]
mod tests;
