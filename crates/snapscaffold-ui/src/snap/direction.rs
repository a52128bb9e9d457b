//! Scroll direction classification.

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Position decreased; content moves down and the snap area reappears.
    Up,
    /// Position increased; the snap area collapses.
    Down,
    #[default]
    None,
}

/// Compares each observed position with the previous one.
///
/// The tracker sees only what it is fed; pairing it with a conflating
/// observer means intermediate positions are skipped, never queued.
#[derive(Clone, Debug)]
pub struct ScrollDirectionTracker<T = f32> {
    previous: Option<T>,
    direction: ScrollDirection,
}

impl<T: PartialOrd + Copy> ScrollDirectionTracker<T> {
    pub fn new() -> Self {
        Self {
            previous: None,
            direction: ScrollDirection::None,
        }
    }

    /// Records `position` and returns the direction relative to the last
    /// observed one. The first observation has nothing to compare with.
    pub fn observe(&mut self, position: T) -> ScrollDirection {
        let direction = match self.previous {
            Some(previous) => match position.partial_cmp(&previous) {
                Some(Ordering::Greater) => ScrollDirection::Down,
                Some(Ordering::Less) => ScrollDirection::Up,
                Some(Ordering::Equal) | None => ScrollDirection::None,
            },
            None => ScrollDirection::None,
        };
        self.previous = Some(position);
        if direction != self.direction {
            log::trace!("scroll direction {:?} -> {:?}", self.direction, direction);
        }
        self.direction = direction;
        direction
    }

    /// Direction from the latest observation.
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn reset(&mut self) {
        self.previous = None;
        self.direction = ScrollDirection::None;
    }
}

impl<T: PartialOrd + Copy> Default for ScrollDirectionTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_position_stream() {
        let mut tracker = ScrollDirectionTracker::new();
        let directions: Vec<_> = [0.0f32, 5.0, 5.0, 2.0]
            .into_iter()
            .map(|position| tracker.observe(position))
            .collect();
        assert_eq!(
            directions,
            vec![
                ScrollDirection::None,
                ScrollDirection::Down,
                ScrollDirection::None,
                ScrollDirection::Up,
            ]
        );
        assert_eq!(tracker.direction(), ScrollDirection::Up);
    }

    #[test]
    fn index_and_offset_compare_lexicographically() {
        let mut tracker = ScrollDirectionTracker::<(usize, f32)>::new();
        tracker.observe((0, 180.0));
        assert_eq!(tracker.observe((1, 4.0)), ScrollDirection::Down);
        assert_eq!(tracker.observe((0, 190.0)), ScrollDirection::Up);
    }

    #[test]
    fn nan_is_not_a_direction() {
        let mut tracker = ScrollDirectionTracker::new();
        tracker.observe(1.0f32);
        assert_eq!(tracker.observe(f32::NAN), ScrollDirection::None);
    }

    #[test]
    fn reset_forgets_previous() {
        let mut tracker = ScrollDirectionTracker::new();
        tracker.observe(1.0f32);
        tracker.reset();
        assert_eq!(tracker.observe(0.0), ScrollDirection::None);
    }
}
