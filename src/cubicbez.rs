// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use arrayvec::ArrayVec;

use crate::common::{in_open_unit_interval, solve_quadratic};
use crate::{Axis, BoundingBox, Point};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline(always)]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Uses the Bernstein form directly, so the curve passes exactly through
    /// `p0` at `t = 0` and `p3` at `t = 1`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        Point::new(self.eval_axis(Axis::Horizontal, t), self.eval_axis(Axis::Vertical, t))
    }

    /// Evaluate one coordinate of the curve at parameter `t`.
    #[inline]
    pub fn eval_axis(&self, axis: Axis, t: f64) -> f64 {
        let [p0, p1, p2, p3] = self.axis_coords(axis);
        let mt = 1.0 - t;
        mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
    }

    /// The start point.
    #[inline(always)]
    pub fn start(&self) -> Point {
        self.p0
    }

    /// The end point.
    #[inline(always)]
    pub fn end(&self) -> Point {
        self.p3
    }

    /// Parameter values of the interior extrema along one axis.
    ///
    /// These are the roots of the derivative `a t² + b t + c` with
    ///
    /// ```text
    /// a = -3 p0 + 9 p1 - 9 p2 + 3 p3
    /// b =  6 p0 - 12 p1 + 6 p2
    /// c =  3 p1 - 3 p0
    /// ```
    ///
    /// that lie strictly between 0 and 1. A cubic has at most two such
    /// values per axis. A root at the parameter ends is dropped since it
    /// coincides with an endpoint.
    pub fn extrema_axis(&self, axis: Axis) -> ArrayVec<f64, 2> {
        let [p0, p1, p2, p3] = self.axis_coords(axis);
        let a = -3.0 * p0 + 9.0 * p1 - 9.0 * p2 + 3.0 * p3;
        let b = 6.0 * p0 - 12.0 * p1 + 6.0 * p2;
        let c = 3.0 * p1 - 3.0 * p0;
        solve_quadratic(c, b, a)
            .into_iter()
            .filter(|&t| in_open_unit_interval(t))
            .collect()
    }

    /// The smallest box containing the whole curve.
    ///
    /// Unlike the box of the four defining points, this does not include
    /// control points that lie outside the curve.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new();
        bbox.add_cubic_bez(self);
        bbox
    }

    #[inline]
    fn axis_coords(&self, axis: Axis) -> [f64; 4] {
        [
            axis.coord(self.p0),
            axis.coord(self.p1),
            axis.coord(self.p2),
            axis.coord(self.p3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, CubicBez, Point};

    #[test]
    fn cubicbez_eval_endpoints() {
        let c = CubicBez::new((0.1, 0.2), (3.0, -4.0), (-1.0, 7.5), (2.3, 1.9));
        assert_eq!(c.eval(0.0), c.start());
        assert_eq!(c.eval(1.0), c.end());
    }

    #[test]
    fn cubicbez_eval_midpoint() {
        // At t = 1/2 the Bernstein weights are 1/8, 3/8, 3/8, 1/8.
        let c = CubicBez::new((0.0, 0.0), (8.0, 16.0), (16.0, 16.0), (24.0, 0.0));
        assert_eq!(c.eval(0.5), Point::new(12.0, 12.0));
    }

    #[test]
    fn cubicbez_extrema_hump() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        // Monotonic in x, single turning point in y.
        assert!(c.extrema_axis(Axis::Horizontal).is_empty());
        assert_eq!(c.extrema_axis(Axis::Vertical).as_slice(), &[0.5]);
    }

    #[test]
    fn cubicbez_extrema_s_curve() {
        // Overshoots on both sides in x.
        let c = CubicBez::new((0.0, 0.0), (3.0, 1.0), (-2.0, 2.0), (1.0, 3.0));
        let ts = c.extrema_axis(Axis::Horizontal);
        assert_eq!(ts.len(), 2);
        for t in ts {
            assert!(t > 0.0 && t < 1.0);
        }
    }

    #[test]
    fn cubicbez_extrema_line() {
        // A straight line with evenly spaced control points has a
        // constant derivative and no turning points.
        let c = CubicBez::new((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0));
        assert!(c.extrema_axis(Axis::Horizontal).is_empty());
        assert!(c.extrema_axis(Axis::Vertical).is_empty());
    }

    #[test]
    fn cubicbez_extrema_at_endpoint_dropped() {
        // Derivative in y vanishes at t = 0 only.
        let c = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 1.0), (3.0, 3.0));
        assert!(c.extrema_axis(Axis::Vertical).is_empty());
    }

    #[test]
    fn cubicbez_bounding_box() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let bbox = c.bounding_box();
        assert_eq!(bbox.min_x(), Some(0.0));
        assert_eq!(bbox.max_x(), Some(1.0));
        assert_eq!(bbox.min_y(), Some(0.0));
        assert_eq!(bbox.max_y(), Some(0.75));
    }
}
