//! Interaction streams emitted by gesture handlers.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use snapscaffold_core::MutableState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InteractionId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragInteraction {
    Start(InteractionId),
    Stop(InteractionId),
    Cancel(InteractionId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Drag(DragInteraction),
}

#[derive(Default)]
struct InteractionInner {
    next_id: u64,
    active_drags: SmallVec<[InteractionId; 2]>,
}

/// Collects interactions from a gesture source and exposes derived flags.
///
/// `is_dragged` is true while at least one drag that started has neither
/// stopped nor been cancelled.
#[derive(Clone)]
pub struct MutableInteractionSource {
    inner: Rc<RefCell<InteractionInner>>,
    dragged: MutableState<bool>,
}

impl MutableInteractionSource {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(InteractionInner::default())),
            dragged: MutableState::new(false),
        }
    }

    /// Allocates an id and emits the matching `Start` interaction.
    pub fn start_drag(&self) -> InteractionId {
        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            InteractionId(inner.next_id)
        };
        self.emit(Interaction::Drag(DragInteraction::Start(id)));
        id
    }

    pub fn emit(&self, interaction: Interaction) {
        let dragged = {
            let mut inner = self.inner.borrow_mut();
            match interaction {
                Interaction::Drag(DragInteraction::Start(id)) => {
                    if !inner.active_drags.contains(&id) {
                        inner.active_drags.push(id);
                    }
                }
                Interaction::Drag(DragInteraction::Stop(id))
                | Interaction::Drag(DragInteraction::Cancel(id)) => {
                    inner.active_drags.retain(|active| *active != id);
                }
            }
            !inner.active_drags.is_empty()
        };
        if self.dragged.set(dragged) {
            log::trace!("interaction source dragged={dragged}");
        }
    }

    pub fn is_dragged(&self) -> bool {
        self.dragged.get()
    }

    /// Observable form of [`is_dragged`](Self::is_dragged).
    pub fn dragged_state(&self) -> MutableState<bool> {
        self.dragged.clone()
    }
}

impl Default for MutableInteractionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MutableInteractionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutableInteractionSource")
            .field("active_drags", &self.inner.borrow().active_drags.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragged_until_stop() {
        let source = MutableInteractionSource::new();
        assert!(!source.is_dragged());

        let id = source.start_drag();
        assert!(source.is_dragged());

        source.emit(Interaction::Drag(DragInteraction::Stop(id)));
        assert!(!source.is_dragged());
    }

    #[test]
    fn overlapping_drags_keep_flag_set() {
        let source = MutableInteractionSource::new();
        let a = source.start_drag();
        let b = source.start_drag();
        source.emit(Interaction::Drag(DragInteraction::Cancel(a)));
        assert!(source.is_dragged());
        source.emit(Interaction::Drag(DragInteraction::Stop(b)));
        assert!(!source.is_dragged());
    }
}
