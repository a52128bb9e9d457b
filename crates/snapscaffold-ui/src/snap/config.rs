use snapscaffold_animation::SpringSpec;

/// Stiffness of the settle spring; Compose's `StiffnessLow`.
const SNAP_STIFFNESS: f32 = SpringSpec::STIFFNESS_LOW;

/// Tuning of the snap decision and settle animation.
///
/// # Example
///
/// ```rust,ignore
/// let config = SnapConfig::default()
///     .threshold(0.3)
///     .fling_velocity_threshold(2000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapConfig {
    /// Fraction at and above which a released area collapses.
    pub threshold: f32,
    /// Fling speed (px/s) separating a deliberate flick from a slow release.
    pub fling_velocity_threshold: f32,
    pub snap_spring: SpringSpec,
}

impl SnapConfig {
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn fling_velocity_threshold(mut self, velocity: f32) -> Self {
        self.fling_velocity_threshold = velocity.abs();
        self
    }

    pub fn snap_spring(mut self, spring: SpringSpec) -> Self {
        self.snap_spring = spring;
        self
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            fling_velocity_threshold: 2500.0,
            snap_spring: SpringSpec::no_bounce(SNAP_STIFFNESS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SnapConfig::default();
        assert_eq!(config.threshold, 0.2);
        assert_eq!(config.fling_velocity_threshold, 2500.0);
        assert_eq!(config.snap_spring.damping_ratio, 1.0);
        assert_eq!(config.snap_spring.stiffness, 200.0);
    }

    #[test]
    fn builders_sanitize() {
        let config = SnapConfig::default()
            .threshold(1.5)
            .fling_velocity_threshold(-1000.0);
        assert_eq!(config.threshold, 1.0);
        assert_eq!(config.fling_velocity_threshold, 1000.0);
    }
}
