//! Animation system for the snap scaffold.
//!
//! - [`SpringSpec`] / [`TargetAnimation`] - closed-form damped springs used to
//!   settle the collapsible area
//! - [`ExponentialDecay`] / [`DecayAnimation`] - fling continuation
//! - [`FrameClock`] - frame time source, manual for tests and wall-clock for apps

mod clock;
mod decay;
mod spring;
mod target;

pub use clock::{FrameClock, ManualFrameClock, SystemFrameClock, FRAME_INTERVAL_NANOS};
pub use decay::{DecayAnimation, ExponentialDecay};
pub use spring::{SpringSimulation, SpringSpec};
pub use target::TargetAnimation;

pub(crate) const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
