//! State holder shared by the scaffold, its body and the controller.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use snapscaffold_core::MutableState;
use snapscaffold_foundation::{NestedScrollConnection, Velocity};
use snapscaffold_ui_layout::Size;

use super::{
    compute_fraction, CollapsibleAreaValue, ScrollDirection, ScrollPosition, ScrollableSource,
    SnapConfig, SnapInputs, SnapNestedScrollConnection, SnapStateMachine,
};
use crate::error::Result;

struct SnapAreaInner {
    snap_area_height_px: MutableState<f32>,
    is_snap_enabled: MutableState<bool>,
    source: ScrollableSource,
    machine: RefCell<SnapStateMachine>,
}

/// State of one collapsible snap area.
///
/// Created once per screen and cloned into whatever needs it; clones share
/// the same state. The collapse fraction is derived on every read from the
/// live container position and the measured area height.
///
/// # Example
///
/// ```rust,ignore
/// let list = LazyListState::new();
/// let state = SnapAreaState::new(200.0, true, list.clone());
/// dispatcher.attach(state.nested_scroll_connection());
/// ```
#[derive(Clone)]
pub struct SnapAreaState {
    inner: Rc<SnapAreaInner>,
}

impl SnapAreaState {
    pub fn new(
        initial_height_px: f32,
        is_snap_enabled: bool,
        source: impl Into<ScrollableSource>,
    ) -> Self {
        Self::with_config(
            initial_height_px,
            is_snap_enabled,
            source,
            SnapConfig::default(),
        )
    }

    pub fn with_config(
        initial_height_px: f32,
        is_snap_enabled: bool,
        source: impl Into<ScrollableSource>,
        config: SnapConfig,
    ) -> Self {
        let source = source.into();
        log::debug!(
            "snap area over {} (height={initial_height_px}, enabled={is_snap_enabled})",
            source.kind_name()
        );
        Self {
            inner: Rc::new(SnapAreaInner {
                snap_area_height_px: MutableState::new(sanitize_height(initial_height_px)),
                is_snap_enabled: MutableState::new(is_snap_enabled),
                source,
                machine: RefCell::new(SnapStateMachine::new(config)),
            }),
        }
    }

    /// Builds the state over a type-erased container handle.
    ///
    /// Fails with [`UnsupportedScrollSource`] when `S` is not a supported
    /// container kind.
    ///
    /// [`UnsupportedScrollSource`]: crate::SnapScaffoldError::UnsupportedScrollSource
    pub fn try_new<S: Any>(
        initial_height_px: f32,
        is_snap_enabled: bool,
        state: &S,
    ) -> Result<Self> {
        let source = ScrollableSource::try_from_state(state)?;
        Ok(Self::new(initial_height_px, is_snap_enabled, source))
    }

    pub fn source(&self) -> &ScrollableSource {
        &self.inner.source
    }

    pub fn config(&self) -> SnapConfig {
        *self.inner.machine.borrow().config()
    }

    pub fn scroll_position(&self) -> ScrollPosition {
        self.inner.source.position()
    }

    /// Collapse fraction in `[0, 1]`.
    pub fn scroll_offset(&self) -> f32 {
        compute_fraction(self.scroll_position(), self.snap_area_height_px())
    }

    pub fn snap_area_height_px(&self) -> f32 {
        self.inner.snap_area_height_px.get()
    }

    /// Observable height; its changes re-key the settle loop.
    pub fn snap_area_height_state(&self) -> MutableState<f32> {
        self.inner.snap_area_height_px.clone()
    }

    /// Overrides the snap area height. Negative and NaN heights clamp to 0.
    pub fn set_snap_area_height_px(&self, height: f32) {
        let height = sanitize_height(height);
        if self.inner.snap_area_height_px.set(height) {
            log::debug!("snap area height -> {height}");
        }
    }

    /// Size-observation callback for the snap area's layout pass.
    pub fn on_snap_area_measured(&self, size: Size) {
        self.set_snap_area_height_px(size.height);
    }

    pub fn is_snap_enabled(&self) -> bool {
        self.inner.is_snap_enabled.get()
    }

    pub fn set_snap_enabled(&self, enabled: bool) {
        if self.inner.is_snap_enabled.set(enabled) {
            log::debug!("snapping enabled={enabled}");
        }
    }

    pub fn is_dragged(&self) -> bool {
        self.inner.source.is_dragged()
    }

    pub fn allow_snapping(&self) -> bool {
        self.inner.machine.borrow().allow_snapping()
    }

    pub fn on_fling_will_start(&self, available: Velocity) {
        self.inner.machine.borrow_mut().on_fling_will_start(available);
    }

    pub fn on_fling_did_finish(&self, consumed: Velocity) {
        let fraction = self.scroll_offset();
        self.inner
            .machine
            .borrow_mut()
            .on_fling_did_finish(consumed, fraction);
    }

    /// Snapshot of every decision input, read together.
    pub fn inputs(&self, direction: ScrollDirection) -> SnapInputs {
        SnapInputs {
            fraction: self.scroll_offset(),
            is_dragged: self.is_dragged(),
            is_snap_enabled: self.is_snap_enabled(),
            direction,
        }
    }

    pub fn resolve(&self, direction: ScrollDirection) -> CollapsibleAreaValue {
        let inputs = self.inputs(direction);
        self.inner.machine.borrow().resolve(inputs)
    }

    /// Connection to install on the body's nested scroll chain; it feeds the
    /// fling gate.
    pub fn nested_scroll_connection(&self) -> Rc<dyn NestedScrollConnection> {
        Rc::new(SnapNestedScrollConnection::new(self.clone()))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for SnapAreaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapAreaState")
            .field("source", &self.inner.source.kind_name())
            .field("snap_area_height_px", &self.snap_area_height_px())
            .field("is_snap_enabled", &self.is_snap_enabled())
            .field("scroll_offset", &self.scroll_offset())
            .field("allow_snapping", &self.allow_snapping())
            .finish()
    }
}

fn sanitize_height(height: f32) -> f32 {
    if height >= 0.0 && height.is_finite() {
        height
    } else {
        log::warn!("snap area height {height} clamped to 0");
        0.0
    }
}
