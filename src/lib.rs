//! promoreel is the frame-driven motion engine behind the AEOEngine promo video.
//!
//! Every visible property is a pure function of an integer frame index:
//!
//! - [`interpolate`] and [`spring`] map frames to values
//! - scenes ([`Scene`]) turn a local frame into a [`SceneTree`]
//! - a [`Composition`] lays scenes end to end as acts, with optional [`Crossfade`] handoffs
//! - [`Evaluator`] and the render functions resolve global frames, one at a time or in chunks
//!
//! [`promo_composition`] builds the shipped 540-frame promo.
#![forbid(unsafe_code)]

pub(crate) mod animation;
pub(crate) mod composition;
pub(crate) mod eval;
pub(crate) mod foundation;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod scenes;

pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{PromoError, PromoResult};
pub use crate::foundation::math::Rng64;

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{
    Breakpoints, Extrapolate, InterpolateOpts, interpolate, validate_breakpoints,
};
pub use crate::animation::ops::{
    Reveal, Typewriter, beat, blink, count_up, has_started, pulse, shimmer_offset, stagger_delay,
};
pub use crate::animation::particles::{BurstSpec, Particle, ParticleBurst, ParticleState};
pub use crate::animation::spring::{Spring, SpringConfig, measure_spring, spring};

pub use crate::scene::fingerprint::{FrameFingerprint, fingerprint_tree};
pub use crate::scene::model::{Node, ResolvedLeaf, SceneTree, Shape, Stroke, Style};

pub use crate::scenes::activation_moment::ActivationMomentScene;
pub use crate::scenes::announcement::AnnouncementScene;
pub use crate::scenes::brand_reveal::BrandRevealScene;
pub use crate::scenes::kinetic_stat::KineticStatScene;
pub use crate::scenes::palette;
pub use crate::scenes::scene::{Scene, SceneCtx, SceneKind, SceneSetup};
pub use crate::scenes::terminal::TerminalScene;

pub use crate::composition::config::{
    ActConfig, CrossfadeConfig, PROMO_ID, PromoConfig, promo_composition,
};
pub use crate::composition::dsl::CompositionBuilder;
pub use crate::composition::model::{Act, ActWindow, Composition, Crossfade, TimelineConfig};
pub use crate::composition::sequencer::{ActPhase, ActiveAct, active_acts};

pub use crate::eval::evaluator::{EvaluatedAct, EvaluatedFrame, Evaluator};
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, check_render_range, render_frame, render_frames, render_to_sink,
};
pub use crate::render::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
