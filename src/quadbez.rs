// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::{BoundingBox, CubicBez, Point};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline(always)]
    pub fn new<V: Into<Point>>(p0: V, p1: V, p2: V) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Raise the order by 1.
    ///
    /// Returns a cubic Bézier segment that exactly represents this quadratic.
    /// The control points are computed as
    ///
    /// ```text
    /// c1 = p0 + 2/3 (p1 - p0)
    /// c2 = c1 + 1/3 (p2 - p0)
    /// ```
    #[inline]
    pub fn raise(&self) -> CubicBez {
        let c1 = self.p0 + (2.0 / 3.0) * (self.p1 - self.p0);
        let c2 = c1 + (1.0 / 3.0) * (self.p2 - self.p0);
        CubicBez::new(self.p0, c1, c2, self.p2)
    }

    /// Evaluate the curve at parameter `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let x = self.p0.x * (mt * mt) + (self.p1.x * (mt * 2.0) + self.p2.x * t) * t;
        let y = self.p0.y * (mt * mt) + (self.p1.y * (mt * 2.0) + self.p2.y * t) * t;
        Point::new(x, y)
    }

    /// The start point.
    #[inline(always)]
    pub fn start(&self) -> Point {
        self.p0
    }

    /// The end point.
    #[inline(always)]
    pub fn end(&self) -> Point {
        self.p2
    }

    /// The smallest box containing the whole curve.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new();
        bbox.add_quad_bez(self);
        bbox
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, QuadBez};

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        let d = p1 - p0;
        assert!(d.x.abs() < epsilon && d.y.abs() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn quadbez_raise() {
        let q = QuadBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8));
        let c = q.raise();
        assert_eq!(c.start(), q.start());
        assert_eq!(c.end(), q.end());
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert_near(q.eval(t), c.eval(t), 1e-12);
        }
    }

    #[test]
    fn quadbez_raise_control_points() {
        let q = QuadBez::new((0.0, 0.0), (3.0, 6.0), (6.0, 0.0));
        let c = q.raise();
        assert_near(c.p1, Point::new(2.0, 4.0), 1e-12);
        assert_near(c.p2, Point::new(4.0, 4.0), 1e-12);
    }

    #[test]
    fn quadbez_bounding_box() {
        // Apex of this parabola is at t = 1/2, y = 3.
        let q = QuadBez::new((0.0, 0.0), (3.0, 6.0), (6.0, 0.0));
        let bbox = q.bounding_box();
        assert_eq!(bbox.min_x(), Some(0.0));
        assert_eq!(bbox.max_x(), Some(6.0));
        assert_eq!(bbox.min_y(), Some(0.0));
        let max_y = bbox.max_y().unwrap();
        assert!((max_y - 3.0).abs() < 1e-12, "max_y = {max_y}");
    }
}
