//! Reactive runtime primitives for the snap scaffold.
//!
//! The scaffold runs on a single-threaded, frame-driven scheduler. These
//! primitives model the small part of a Compose-style runtime it relies on:
//!
//! - [`MutableState`] - observable value cell with a change version
//! - [`SnapshotFlow`] - distinct, conflate-to-latest observation of derived values
//! - [`Job`] / [`KeyedEffect`] - restartable effects with structured cancellation

pub mod collections;
mod effect;
mod flow;
mod state;

pub use effect::{ChildJob, EffectRestart, Job, KeyedEffect};
pub use flow::SnapshotFlow;
pub use state::MutableState;
