//! 2D vector primitives.
//!
//! `Point` is an absolute location, `Direction` a displacement between two of
//! them. Both are plain `Copy` value types so layout code can pass them around
//! freely without borrow gymnastics.

use serde::{Deserialize, Serialize};

/// An absolute location in the 2D plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A displacement vector between two [`Point`]s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Direction {
    pub dx: f64,
    pub dy: f64,
}

pub const fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

pub const fn direction(dx: f64, dy: f64) -> Direction {
    Direction { dx, dy }
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The displacement that takes `other` to `self`.
    pub fn minus(self, other: Point) -> Direction {
        direction(self.x - other.x, self.y - other.y)
    }

    pub fn add(self, dir: Direction) -> Point {
        point(self.x + dir.dx, self.y + dir.dy)
    }

    /// Component-wise tolerant equality: |Δx| ≤ tolerance AND |Δy| ≤ tolerance.
    ///
    /// This is deliberately per-axis slack, not a Euclidean radius; callers
    /// rely on the component-wise semantics.
    pub fn approx_eq(self, other: Point, tolerance: f64) -> bool {
        fn within(a: f64, b: f64, tolerance: f64) -> bool {
            (a - b).abs() <= tolerance
        }

        within(self.x, other.x, tolerance) && within(self.y, other.y, tolerance)
    }

    /// Reinterprets this point as a displacement from the origin.
    pub fn as_direction(self) -> Direction {
        direction(self.x, self.y)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        other.minus(self).length()
    }
}

impl Direction {
    pub const ZERO: Direction = Direction { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn scale(self, fraction: f64) -> Direction {
        direction(fraction * self.dx, fraction * self.dy)
    }

    /// Euclidean norm.
    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Angle from the positive x-axis, in radians (`atan2` range).
    pub fn angle(self) -> f64 {
        self.dy.atan2(self.dx)
    }

    /// Rotates by `angle` radians (counter-clockwise in y-up coordinates)
    /// using the standard 2D rotation matrix.
    pub fn rotate(self, angle: f64) -> Direction {
        let (sin, cos) = angle.sin_cos();
        direction(
            self.dx * cos - self.dy * sin,
            self.dx * sin + self.dy * cos,
        )
    }

    pub fn add(self, other: Direction) -> Direction {
        direction(self.dx + other.dx, self.dy + other.dy)
    }

    pub fn negate(self) -> Direction {
        direction(-self.dx, -self.dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        point(x, y)
    }
}

impl From<(f64, f64)> for Direction {
    fn from((dx, dy): (f64, f64)) -> Self {
        direction(dx, dy)
    }
}
