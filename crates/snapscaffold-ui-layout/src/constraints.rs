use crate::Size;

/// Size bounds a child is measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    pub fn fixed(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    pub fn unbounded() -> Self {
        Self {
            min_width: 0.0,
            max_width: f32::INFINITY,
            min_height: 0.0,
            max_height: f32::INFINITY,
        }
    }

    /// Same maxima with the minima dropped to zero.
    pub fn loosen(self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..self
        }
    }

    /// Replaces the height ceiling, keeping the minimum at or below it.
    pub fn with_max_height(self, max_height: f32) -> Self {
        let max_height = max_height.max(0.0);
        Self {
            min_height: self.min_height.min(max_height),
            max_height,
            ..self
        }
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width.max(self.min_width)),
            height: size
                .height
                .clamp(self.min_height, self.max_height.max(self.min_height)),
        }
    }
}
