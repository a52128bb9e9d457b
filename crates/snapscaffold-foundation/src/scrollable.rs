use crate::MutableInteractionSource;

/// A container whose position can be moved by scroll deltas.
///
/// Deltas are in scroll space: positive values move the content forward
/// (toward the end). Implementations clamp at their bounds and report how
/// much of the delta they actually consumed.
pub trait ScrollableState {
    fn consume_scroll_delta(&self, delta: f32) -> f32;

    fn is_scroll_in_progress(&self) -> bool;

    /// Marks a programmatic or gesture scroll as running.
    fn set_scroll_in_progress(&self, in_progress: bool);

    fn interaction_source(&self) -> &MutableInteractionSource;
}
