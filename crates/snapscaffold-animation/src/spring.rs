//! Damped spring physics.

/// Configuration of a damped spring with unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSpec {
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Distance from the target under which the spring counts as settled.
    pub visibility_threshold: f32,
}

impl SpringSpec {
    pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const STIFFNESS_VERY_LOW: f32 = 50.0;

    pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.01;

    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            visibility_threshold: Self::DEFAULT_VISIBILITY_THRESHOLD,
        }
    }

    /// Critically damped spring used for scroll settling.
    pub fn no_bounce(stiffness: f32) -> Self {
        Self::new(Self::DAMPING_RATIO_NO_BOUNCY, stiffness)
    }

    pub fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = threshold.abs();
        self
    }

    pub fn simulation(&self) -> SpringSimulation {
        SpringSimulation::new(self.damping_ratio, self.stiffness)
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(Self::DAMPING_RATIO_NO_BOUNCY, Self::STIFFNESS_MEDIUM)
    }
}

/// Analytic solution of `x'' + 2ζωx' + ω²x = 0`.
///
/// Positions are displacements from the rest point; time is in seconds.
#[derive(Clone, Copy, Debug)]
pub struct SpringSimulation {
    natural_freq: f64,
    damping_ratio: f64,
}

impl SpringSimulation {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            natural_freq: (stiffness.max(f32::EPSILON) as f64).sqrt(),
            damping_ratio: damping_ratio.max(0.0) as f64,
        }
    }

    /// Returns `(displacement, velocity)` after `time` seconds.
    pub fn update_values(&self, displacement: f32, velocity: f32, time: f64) -> (f32, f32) {
        let x0 = displacement as f64;
        let v0 = velocity as f64;
        let w = self.natural_freq;
        let z = self.damping_ratio;
        let t = time;

        let (x, v) = if (z - 1.0).abs() < 1e-6 {
            // Critically damped
            let c1 = x0;
            let c2 = v0 + w * x0;
            let decay = (-w * t).exp();
            let x = (c1 + c2 * t) * decay;
            let v = (c2 - w * (c1 + c2 * t)) * decay;
            (x, v)
        } else if z > 1.0 {
            let root = (z * z - 1.0).sqrt();
            let r1 = -w * (z - root);
            let r2 = -w * (z + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let e1 = (r1 * t).exp();
            let e2 = (r2 * t).exp();
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        } else {
            let damped = w * (1.0 - z * z).sqrt();
            let c1 = x0;
            let c2 = (v0 + z * w * x0) / damped;
            let decay = (-z * w * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let x = decay * (c1 * cos + c2 * sin);
            let v = decay
                * ((c2 * damped - z * w * c1) * cos - (c1 * damped + z * w * c2) * sin);
            (x, v)
        };
        (x as f32, v as f32)
    }
}
