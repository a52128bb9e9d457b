//! Shared gesture constants.
//!
//! Values are in logical pixels and are not scaled for density.

/// Maximum fling velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity on a baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
