//! Projectile motion under constant gravity: a fixed-step trajectory
//! sampler and a frame-driven playback driver that reveals the sampled path.

pub mod core;

pub use crate::core::ballistics::{Point, TrajectoryResult, compute};
pub use crate::core::playback::{FrameQueue, PlaybackDriver, PlaybackSink};
pub use crate::core::units::SpeedUnit;
