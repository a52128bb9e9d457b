//! Layout contracts shared by the scaffold and its hosts.
//!
//! Coordinates are logical pixels with a top-left origin and y growing down.

mod constraints;
mod geometry;
mod measure;

pub use constraints::Constraints;
pub use geometry::Size;
pub use measure::{MeasureResult, Placement};
