//! Closed intervals for ray parameter ranges and channel clamping.

/// Closed interval [min, max].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound (inclusive)
    pub min: f32,
    /// Upper bound (inclusive)
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval from `min` to positive infinity.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Same lower bound, upper bound replaced.
    pub fn with_max(self, max: f32) -> Self {
        Self::new(self.min, max)
    }

    /// Inclusive containment test.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamp `x` into the interval.
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let i = Interval::new(0.5, 2.0);
        assert!(i.contains(0.5));
        assert!(i.contains(2.0));
        assert!(!i.contains(2.0001));
        assert!(!i.contains(0.4999));
    }

    #[test]
    fn test_with_max_shrinks_upper_bound() {
        let i = Interval::from_min(0.001).with_max(3.0);
        assert_eq!(i, Interval::new(0.001, 3.0));
        assert_eq!(i.clamp(5.0), 3.0);
    }
}
