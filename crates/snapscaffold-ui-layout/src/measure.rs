use smallvec::SmallVec;

use crate::Size;

/// Position of one measured child inside its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<K> {
    pub key: K,
    pub x: f32,
    pub y: f32,
    /// Placement order; later placements draw on top.
    pub z_index: usize,
}

impl<K> Placement<K> {
    pub fn new(key: K, x: f32, y: f32, z_index: usize) -> Self {
        Self { key, x, y, z_index }
    }
}

/// Size of a laid out parent plus where its children go.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureResult<K> {
    pub size: Size,
    pub placements: SmallVec<[Placement<K>; 8]>,
}

impl<K: PartialEq> MeasureResult<K> {
    pub fn new(size: Size, placements: impl IntoIterator<Item = Placement<K>>) -> Self {
        Self {
            size,
            placements: placements.into_iter().collect(),
        }
    }

    pub fn placement_of(&self, key: &K) -> Option<&Placement<K>> {
        self.placements.iter().find(|p| &p.key == key)
    }
}
