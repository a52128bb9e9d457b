//! Snap decision layer.
//!
//! Leaf to root: [`offset`] maps scroll positions to a collapse fraction,
//! [`direction`] classifies movement, [`machine`] resolves the target value,
//! [`driver`] settles the container and [`controller`] runs the frame loop.

mod area_state;
mod config;
mod connection;
mod controller;
mod direction;
mod driver;
mod machine;
mod offset;
mod source;

pub use area_state::SnapAreaState;
pub use config::SnapConfig;
pub use connection::SnapNestedScrollConnection;
pub use controller::SnapController;
pub use direction::{ScrollDirection, ScrollDirectionTracker};
pub use driver::SnapDriver;
pub use machine::{apply_spring_back, CollapsibleAreaValue, SnapInputs, SnapStateMachine};
pub use offset::{compute_fraction, remap_clamped, ScrollPosition};
pub use source::ScrollableSource;
