use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A 2D point in turtle space. The origin is where the turtle starts;
/// positive y is whatever the output adapter's axis convention says it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Axis-aligned bounding box of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// A degenerate rect covering exactly one point.
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Grow the rect to include `p`.
    pub fn union_point(self, p: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_add() {
        let p = Point::new(1.0, 2.0) + Point::new(-3.0, 0.5);
        assert!((p.x - -2.0).abs() < 1e-12);
        assert!((p.y - 2.5).abs() < 1e-12);
    }

    #[test]
    fn rect_union_expands() {
        let r = Rect::from_point(Point::new(1.0, 1.0))
            .union_point(Point::new(-2.0, 3.0))
            .union_point(Point::new(0.0, -1.0));
        assert!((r.min.x - -2.0).abs() < 1e-12);
        assert!((r.min.y - -1.0).abs() < 1e-12);
        assert!((r.max.x - 1.0).abs() < 1e-12);
        assert!((r.max.y - 3.0).abs() < 1e-12);
        assert!((r.width() - 3.0).abs() < 1e-12);
        assert!((r.height() - 4.0).abs() < 1e-12);
    }
}
