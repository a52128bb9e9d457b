//! Headless harness for driving a snap scaffold frame by frame.
//!
//! [`ScaffoldTestRule`] owns a manual frame clock, lays the scaffold out
//! against fixed slot sizes and injects drags and flings through the same
//! nested scroll chain a host container would use.

mod slots;
mod test_rule;

pub use slots::FixedSlots;
pub use test_rule::{FlingResult, ScaffoldTestRule, ScrollInjectionScope, MAX_IDLE_FRAMES};
