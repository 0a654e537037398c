//! Geometric primitives: Point

use std::ops::Sub;

/// A position in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Squared length of the vector from the origin to this point.
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns true when both coordinates are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_and_length() {
        let delta = Point::new(130.0, 104.0) - Point::new(100.0, 100.0);
        assert_eq!(delta, Point::new(30.0, 4.0));
        assert_eq!(delta.length_squared(), 916.0);
        assert!((Point::new(3.0, 4.0).length() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn non_finite_points_are_detected() {
        assert!(Point::ZERO.is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
    }
}
