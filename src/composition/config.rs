use std::path::Path;

use anyhow::Context;

use crate::{
    animation::interpolate::Breakpoints,
    composition::{
        dsl::CompositionBuilder,
        model::{Composition, Crossfade},
    },
    foundation::{
        core::{Canvas, Fps, Rgba8Premul},
        error::PromoResult,
    },
    scenes::{palette, scene::SceneKind},
};

/// Identifier of the shipped promo.
pub const PROMO_ID: &str = "AEOEnginePromo";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Serializable description of a promo timeline.
///
/// `PromoConfig::default()` is the shipped AEOEngine promo; [`PromoConfig::build`] validates the
/// description and instantiates its scenes.
pub struct PromoConfig {
    pub id: String,
    pub fps: Fps,
    pub canvas: Canvas,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_background")]
    pub background: Rgba8Premul,
    pub acts: Vec<ActConfig>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// One act entry of a [`PromoConfig`].
pub struct ActConfig {
    pub name: String,
    pub scene: SceneKind,
    pub duration_frames: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_out: Option<CrossfadeConfig>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Serialized form of a [`Crossfade`].
pub struct CrossfadeConfig {
    pub frames: u64,
    pub outgoing: Breakpoints,
    pub incoming: Breakpoints,
    #[serde(default)]
    pub outgoing_above: bool,
}

fn default_background() -> Rgba8Premul {
    palette::BACKDROP
}

impl CrossfadeConfig {
    fn literal(frames: u64, outgoing: (&[f64], &[f64]), incoming: (&[f64], &[f64])) -> Self {
        let table = |(input, output): (&[f64], &[f64])| {
            Breakpoints::new_unchecked(input.to_vec(), output.to_vec())
        };
        Self {
            frames,
            outgoing: table(outgoing),
            incoming: table(incoming),
            outgoing_above: false,
        }
    }

    pub fn to_crossfade(&self) -> PromoResult<Crossfade> {
        Ok(
            Crossfade::new(self.frames, self.outgoing.clone(), self.incoming.clone())?
                .outgoing_above(self.outgoing_above),
        )
    }
}

impl Default for PromoConfig {
    fn default() -> Self {
        let act = |name: &str, scene: SceneKind, duration_frames: u64| ActConfig {
            name: name.to_owned(),
            scene,
            duration_frames,
            transition_out: None,
        };

        // The terminal flips away on top of the announcement and only fades at the very end.
        let terminal_out = CrossfadeConfig {
            outgoing_above: true,
            ..CrossfadeConfig::literal(
                30,
                (&[0.0, 15.0, 30.0], &[1.0, 1.0, 0.0]),
                (&[0.0, 30.0], &[1.0, 1.0]),
            )
        };
        let announcement_out = CrossfadeConfig::literal(
            10,
            (&[0.0, 10.0], &[1.0, 0.0]),
            (&[0.0, 10.0], &[0.0, 1.0]),
        );
        let stat_out = CrossfadeConfig::literal(
            15,
            (&[0.0, 15.0], &[1.0, 0.0]),
            (&[5.0, 15.0], &[0.0, 1.0]),
        );
        let activation_out = CrossfadeConfig::literal(
            20,
            (&[0.0, 20.0], &[1.0, 0.0]),
            (&[0.0, 12.0], &[0.0, 1.0]),
        );

        Self {
            id: PROMO_ID.to_owned(),
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1280,
                height: 720,
            },
            seed: 0,
            background: palette::BACKDROP,
            acts: vec![
                ActConfig {
                    transition_out: Some(terminal_out),
                    ..act("terminal", SceneKind::Terminal, 150)
                },
                ActConfig {
                    transition_out: Some(announcement_out),
                    ..act("announcement", SceneKind::Announcement, 60)
                },
                ActConfig {
                    transition_out: Some(stat_out),
                    ..act(
                        "kinetic_stat",
                        SceneKind::KineticStat { delay_secs: 0.5 },
                        120,
                    )
                },
                ActConfig {
                    transition_out: Some(activation_out),
                    ..act("activation_moment", SceneKind::ActivationMoment, 90)
                },
                act("brand_reveal", SceneKind::BrandReveal, 120),
            ],
        }
    }
}

impl PromoConfig {
    pub fn from_json_str(json: &str) -> PromoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> PromoResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read promo config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> PromoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the description and instantiate every scene.
    pub fn build(&self) -> PromoResult<Composition> {
        let mut builder = CompositionBuilder::new(self.id.clone(), self.fps, self.canvas)
            .seed(self.seed)
            .background(self.background);
        for act in &self.acts {
            builder = builder.act_kind(act.name.clone(), act.scene, act.duration_frames);
            if let Some(fade) = &act.transition_out {
                builder = builder.crossfade(fade.to_crossfade()?)?;
            }
        }
        builder.build()
    }
}

/// The shipped promo: 540 frames at 30 fps, 1280x720.
pub fn promo_composition() -> PromoResult<Composition> {
    PromoConfig::default().build()
}

#[cfg(test)]
#[path = "../../tests/unit/composition/config.rs"]
mod tests;
