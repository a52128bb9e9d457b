//! Snap decision and fling gate.

use snapscaffold_foundation::Velocity;

use super::{ScrollDirection, SnapConfig};

/// Pending transition of the snap area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollapsibleAreaValue {
    Collapsed,
    Expanded,
    /// No snap action pending.
    #[default]
    Neutral,
}

/// One consistent read of everything a decision depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapInputs {
    pub fraction: f32,
    pub is_dragged: bool,
    pub is_snap_enabled: bool,
    pub direction: ScrollDirection,
}

/// Decides where a released snap area should rest.
///
/// Snapping is armed only by a fast fling: [`on_fling_did_finish`] sets the
/// latch when the consumed velocity exceeds the threshold and the area is not
/// fully collapsed, [`on_fling_will_start`] clears it when a slow fling
/// begins. Everything else about a decision is a pure function of
/// [`SnapInputs`].
///
/// [`on_fling_did_finish`]: Self::on_fling_did_finish
/// [`on_fling_will_start`]: Self::on_fling_will_start
#[derive(Clone, Debug)]
pub struct SnapStateMachine {
    config: SnapConfig,
    allow_snapping: bool,
}

impl SnapStateMachine {
    pub fn new(config: SnapConfig) -> Self {
        Self {
            config,
            allow_snapping: false,
        }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn allow_snapping(&self) -> bool {
        self.allow_snapping
    }

    /// Pre-fling hook: a fling slower than the threshold disarms snapping.
    pub fn on_fling_will_start(&mut self, available: Velocity) {
        if available.y.abs() < self.config.fling_velocity_threshold {
            self.set_allow_snapping(false);
        }
    }

    /// Post-fling hook: a fast fling that left the area short of fully
    /// collapsed arms snapping.
    pub fn on_fling_did_finish(&mut self, consumed: Velocity, fraction: f32) {
        if consumed.y.abs() > self.config.fling_velocity_threshold && fraction < 1.0 {
            self.set_allow_snapping(true);
        }
    }

    pub fn resolve(&self, inputs: SnapInputs) -> CollapsibleAreaValue {
        let allow_snap = self.allow_snapping && inputs.is_snap_enabled;
        if inputs.is_dragged || !allow_snap {
            return CollapsibleAreaValue::Neutral;
        }
        let target = self.threshold_target(inputs.fraction);
        apply_spring_back(target, inputs.direction)
    }

    /// Target from the fraction alone. The exact endpoints are already at
    /// rest and resolve to `Neutral`.
    pub fn threshold_target(&self, fraction: f32) -> CollapsibleAreaValue {
        let threshold = self.config.threshold;
        if fraction >= threshold && fraction < 1.0 {
            CollapsibleAreaValue::Collapsed
        } else if fraction > 0.0 && fraction < threshold {
            CollapsibleAreaValue::Expanded
        } else {
            CollapsibleAreaValue::Neutral
        }
    }

    fn set_allow_snapping(&mut self, allow: bool) {
        if self.allow_snapping != allow {
            log::debug!("snapping {}", if allow { "armed" } else { "disarmed" });
            self.allow_snapping = allow;
        }
    }
}

impl Default for SnapStateMachine {
    fn default() -> Self {
        Self::new(SnapConfig::default())
    }
}

/// Lets the direction of a continuing gesture overrule a stale target.
pub fn apply_spring_back(
    target: CollapsibleAreaValue,
    direction: ScrollDirection,
) -> CollapsibleAreaValue {
    match (target, direction) {
        (CollapsibleAreaValue::Collapsed, ScrollDirection::Up) => CollapsibleAreaValue::Expanded,
        (CollapsibleAreaValue::Expanded, ScrollDirection::Down) => CollapsibleAreaValue::Collapsed,
        (target, _) => target,
    }
}
