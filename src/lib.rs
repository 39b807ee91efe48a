//! neonfx is a headless, deterministic engine for decorative web-page animation.
//!
//! It models the motion layer of a landing page without a browser:
//!
//! - a cursor-following [`ParticleEngine`] and six full-page [`Background`] variants
//! - [`SmoothScroller`] and [`Typewriter`] controllers driven by a virtual-time [`Scheduler`]
//! - a reduced-motion preference ([`MotionSource`]) every component honours
//!
//! Effects draw through the [`DrawSurface`] trait. [`RecordingSurface`] captures the draw stream
//! for inspection and fingerprinting; [`CpuSurface`] rasterizes it with `vello_cpu`.
//! [`EffectSession`] ties a [`SceneConfig`] to both and streams frames into a [`FrameSink`].
#![forbid(unsafe_code)]

mod animation;
mod config;
mod effects;
mod encode;
mod foundation;
mod render;
mod schedule;
mod scroll;
mod session;

pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Vec2,
};
pub use crate::foundation::error::{FxError, FxResult};
pub use crate::foundation::math::{RandomSource, Rng64};

pub use crate::animation::ease::Ease;
pub use crate::animation::typewriter::{Typewriter, TypewriterEvent};

pub use crate::schedule::animation_loop::AnimationLoop;
pub use crate::schedule::motion::{MotionPreference, MotionSource};
pub use crate::schedule::scheduler::{
    FrameRequest, MIN_INTERVAL_MS, Scheduler, TaskId, TimerHandle, Wake,
};
pub use crate::schedule::throttle::{POINTER_THROTTLE_MS, PointerTracker, Throttle};

pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CpuSurface;
pub use crate::render::fingerprint::{FrameFingerprint, fingerprint, fingerprint_bytes};
pub use crate::render::recording::{DrawCmd, RecordingSurface};
pub use crate::render::surface::{DrawSurface, GradientStop, Paint};

pub use crate::effects::background::{Background, BackgroundVariant, GradientBackground};
pub use crate::effects::field::{Dot, ParticleField, reflect_step};
pub use crate::effects::geometric::GeometricRings;
pub use crate::effects::matrix::MatrixRain;
pub use crate::effects::mount::{EffectMount, FrameInput, FrameRenderer};
pub use crate::effects::neural::{NeuralNetwork, Node};
pub use crate::effects::palette::tint;
pub use crate::effects::particles::{Particle, ParticleConfig, ParticleEngine};
pub use crate::effects::waves::{WaveLayers, wave_paint, wave_y};

pub use crate::scroll::document::{Document, PageDocument};
pub use crate::scroll::smooth::{
    ScrollJob, ScrollOptions, ScrollOutcome, SmoothScroller, scroll_to_top_visible,
};

pub use crate::config::scene::{PointerPath, SceneConfig};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::session::effect_session::{EffectSession, RenderStats, SessionOpts, StepReport};
