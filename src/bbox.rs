// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An accumulating axis-aligned bounding box.

use log::trace;

use crate::{Axis, CubicBez, Point, QuadBez, Rect};

/// A closed range of values along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// The smallest value seen.
    pub min: f64,
    /// The largest value seen.
    pub max: f64,
}

impl Interval {
    /// The degenerate interval containing only `v`.
    #[inline(always)]
    pub const fn point(v: f64) -> Interval {
        Interval { min: v, max: v }
    }

    /// Grow the interval to include `v`.
    #[inline]
    pub fn extend(&mut self, v: f64) {
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
    }

    /// The smallest interval containing both `self` and `other`.
    #[inline]
    pub fn union(self, other: Interval) -> Interval {
        let mut result = self;
        result.extend(other.min);
        result.extend(other.max);
        result
    }

    /// Whether `v` lies within the interval, bounds included.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// The length of the interval.
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

/// An axis-aligned bounding box that grows as points and curves are added.
///
/// A new box is empty: it has absorbed nothing, and has no extent on either
/// axis. Each axis starts tracking values independently the first time a
/// value is added on it, so a box can briefly have an x extent but no y
/// extent while curve extrema are being added one axis at a time.
///
/// Extents only ever grow. Adding anything can lower a minimum or raise a
/// maximum, never the reverse.
///
/// Curves are handled exactly: [`add_cubic`](BoundingBox::add_cubic) and
/// [`add_quad`](BoundingBox::add_quad) include the turning points of the
/// curve, not its control points.
///
/// # Examples
///
/// ```
/// use pathbox::BoundingBox;
///
/// let mut bbox = BoundingBox::new();
/// assert!(bbox.is_empty());
///
/// bbox.add_pt((1.0, 2.0));
/// bbox.add_quad((1.0, 2.0), (3.0, 6.0), (5.0, 2.0));
/// assert_eq!(bbox.min_x(), Some(1.0));
/// assert_eq!(bbox.max_x(), Some(5.0));
/// assert_eq!(bbox.min_y(), Some(2.0));
/// // The apex of the parabola, not the control point.
/// assert!((bbox.max_y().unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    x: Option<Interval>,
    y: Option<Interval>,
}

impl BoundingBox {
    /// Create an empty bounding box.
    #[inline(always)]
    pub const fn new() -> BoundingBox {
        BoundingBox { x: None, y: None }
    }

    /// Create a bounding box covering the given rectangle.
    pub fn from_rect(rect: Rect) -> BoundingBox {
        let mut bbox = BoundingBox::new();
        bbox.add_pt((rect.x0, rect.y0));
        bbox.add_pt((rect.x1, rect.y1));
        bbox
    }

    /// Returns `true` if no point has been added on at least one axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() || self.y.is_none()
    }

    /// Extend the box by a coordinate pair where either side may be absent.
    ///
    /// Each axis is handled on its own: a present value either starts that
    /// axis (if nothing was added on it yet) or extends it, and an absent
    /// value leaves that axis untouched.
    pub fn add_point(&mut self, x: Option<f64>, y: Option<f64>) {
        if let Some(x) = x {
            extend_axis(&mut self.x, x);
        }
        if let Some(y) = y {
            extend_axis(&mut self.y, y);
        }
    }

    /// Extend the box along the x axis only.
    #[inline]
    pub fn add_x(&mut self, x: f64) {
        self.add_point(Some(x), None);
    }

    /// Extend the box along the y axis only.
    #[inline]
    pub fn add_y(&mut self, y: f64) {
        self.add_point(None, Some(y));
    }

    /// Extend the box along one axis.
    #[inline]
    pub fn add_on_axis(&mut self, axis: Axis, v: f64) {
        let (x, y) = axis.pack_single(v);
        self.add_point(x, y);
    }

    /// Extend the box to include a point.
    #[inline]
    pub fn add_pt(&mut self, p: impl Into<Point>) {
        let p = p.into();
        self.add_point(Some(p.x), Some(p.y));
    }

    /// Extend the box to include a whole cubic Bézier curve.
    ///
    /// `p0` and `p3` are the endpoints, `c1` and `c2` the control points.
    /// The control points themselves are not added, since they may lie
    /// outside the curve.
    pub fn add_cubic(
        &mut self,
        p0: impl Into<Point>,
        c1: impl Into<Point>,
        c2: impl Into<Point>,
        p3: impl Into<Point>,
    ) {
        self.add_cubic_bez(&CubicBez::new(p0.into(), c1.into(), c2.into(), p3.into()));
    }

    /// Extend the box to include a whole quadratic Bézier curve.
    ///
    /// The quadratic is raised to the equivalent cubic (see
    /// [`QuadBez::raise`]) and added with [`add_cubic`](BoundingBox::add_cubic).
    pub fn add_quad(&mut self, p0: impl Into<Point>, c1: impl Into<Point>, p3: impl Into<Point>) {
        self.add_quad_bez(&QuadBez::new(p0.into(), c1.into(), p3.into()));
    }

    /// Extend the box to include a cubic Bézier segment.
    pub fn add_cubic_bez(&mut self, c: &CubicBez) {
        self.add_pt(c.p0);
        self.add_pt(c.p3);
        for axis in Axis::BOTH {
            for t in c.extrema_axis(axis) {
                let v = c.eval_axis(axis, t);
                trace!("cubic extremum on {axis:?} at t={t}: {v}");
                self.add_on_axis(axis, v);
            }
        }
    }

    /// Extend the box to include a quadratic Bézier segment.
    #[inline]
    pub fn add_quad_bez(&mut self, q: &QuadBez) {
        self.add_cubic_bez(&q.raise());
    }

    /// Extend the box to include everything in `other`.
    ///
    /// Each axis of `other` that has values is merged in; an empty axis
    /// contributes nothing.
    pub fn union(&mut self, other: &BoundingBox) {
        if let Some(x) = other.x {
            self.add_x(x.min);
            self.add_x(x.max);
        }
        if let Some(y) = other.y {
            self.add_y(y.min);
            self.add_y(y.max);
        }
    }

    /// The range of x values seen so far.
    #[inline(always)]
    pub fn x_extent(&self) -> Option<Interval> {
        self.x
    }

    /// The range of y values seen so far.
    #[inline(always)]
    pub fn y_extent(&self) -> Option<Interval> {
        self.y
    }

    /// The smallest x value, if any.
    #[inline]
    pub fn min_x(&self) -> Option<f64> {
        self.x.map(|i| i.min)
    }

    /// The smallest y value, if any.
    #[inline]
    pub fn min_y(&self) -> Option<f64> {
        self.y.map(|i| i.min)
    }

    /// The largest x value, if any.
    #[inline]
    pub fn max_x(&self) -> Option<f64> {
        self.x.map(|i| i.max)
    }

    /// The largest y value, if any.
    #[inline]
    pub fn max_y(&self) -> Option<f64> {
        self.y.map(|i| i.max)
    }

    /// The box as a rectangle, or `None` if it is empty.
    pub fn to_rect(&self) -> Option<Rect> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Rect::new(x.min, y.min, x.max, y.max)),
            _ => None,
        }
    }

    /// Whether the point lies within the box, edges included.
    ///
    /// An empty box contains nothing.
    pub fn contains(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        match (self.x, self.y) {
            (Some(x), Some(y)) => x.contains(p.x) && y.contains(p.y),
            _ => false,
        }
    }
}

impl From<Rect> for BoundingBox {
    #[inline]
    fn from(rect: Rect) -> BoundingBox {
        BoundingBox::from_rect(rect)
    }
}

#[inline]
fn extend_axis(axis: &mut Option<Interval>, v: f64) {
    match axis {
        Some(interval) => interval.extend(v),
        None => *axis = Some(Interval::point(v)),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{BoundingBox, CubicBez, Interval, Point, Rect};

    fn random_point(rng: &mut StdRng) -> Point {
        Point::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0))
    }

    /// Checks that every extent of `after` encloses the same extent of `before`.
    fn assert_grown(before: &BoundingBox, after: &BoundingBox) {
        for (b, a) in [
            (before.x_extent(), after.x_extent()),
            (before.y_extent(), after.y_extent()),
        ] {
            if let Some(b) = b {
                let a = a.expect("an axis with values never becomes empty");
                assert!(a.min <= b.min, "min grew from {} to {}", b.min, a.min);
                assert!(a.max >= b.max, "max shrank from {} to {}", b.max, a.max);
            }
        }
    }

    #[test]
    fn new_box_is_empty() {
        let bbox = BoundingBox::new();
        assert!(bbox.is_empty());
        assert_eq!(bbox.min_x(), None);
        assert_eq!(bbox.to_rect(), None);
        assert!(!bbox.contains((0.0, 0.0)));
        assert_eq!(bbox, BoundingBox::default());
    }

    #[test]
    fn single_point() {
        let mut bbox = BoundingBox::new();
        bbox.add_point(Some(3.0), Some(-2.0));
        assert!(!bbox.is_empty());
        assert_eq!(bbox.to_rect(), Some(Rect::new(3.0, -2.0, 3.0, -2.0)));
    }

    #[test]
    fn one_axis_at_a_time() {
        let mut bbox = BoundingBox::new();
        bbox.add_x(4.0);
        assert!(bbox.is_empty());
        assert_eq!(bbox.x_extent(), Some(Interval::point(4.0)));
        assert_eq!(bbox.y_extent(), None);

        bbox.add_y(-1.0);
        assert!(!bbox.is_empty());
        bbox.add_point(None, Some(5.0));
        bbox.add_point(Some(-3.0), None);
        bbox.add_point(None, None);
        assert_eq!(bbox.to_rect(), Some(Rect::new(-3.0, -1.0, 4.0, 5.0)));
    }

    #[test]
    fn zero_is_not_absent() {
        let mut bbox = BoundingBox::new();
        bbox.add_point(Some(5.0), Some(5.0));
        bbox.add_point(Some(0.0), None);
        assert_eq!(bbox.min_x(), Some(0.0));
        assert_eq!(bbox.min_y(), Some(5.0));
    }

    #[test]
    fn hump_extremum() {
        let mut bbox = BoundingBox::new();
        bbox.add_cubic((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        assert_eq!(bbox.min_x(), Some(0.0));
        assert_eq!(bbox.max_x(), Some(1.0));
        assert_eq!(bbox.min_y(), Some(0.0));
        let max_y = bbox.max_y().unwrap();
        assert!(max_y > 0.0 && max_y < 1.5);
        assert_eq!(max_y, 0.75);
    }

    #[test]
    fn control_points_not_included() {
        let mut bbox = BoundingBox::new();
        bbox.add_cubic((0.0, 0.0), (10.0, 100.0), (20.0, -100.0), (30.0, 0.0));
        let rect = bbox.to_rect().unwrap();
        assert!(rect.y1 < 100.0);
        assert!(rect.y0 > -100.0);
        // Symmetric S: the two turning points mirror each other.
        assert!((rect.y1 + rect.y0).abs() < 1e-9);
    }

    #[test]
    fn extrema_cover_sampled_curve() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let c = CubicBez::new(
                random_point(&mut rng),
                random_point(&mut rng),
                random_point(&mut rng),
                random_point(&mut rng),
            );
            let bbox = c.bounding_box();
            let x = bbox.x_extent().unwrap();
            let y = bbox.y_extent().unwrap();
            // Sampled points must lie inside, and the box must not be much
            // larger than what sampling finds.
            let mut sampled = BoundingBox::new();
            for i in 0..=1000 {
                let p = c.eval(f64::from(i) / 1000.0);
                assert!(p.x >= x.min - 1e-9 && p.x <= x.max + 1e-9, "{c:?} at {i}");
                assert!(p.y >= y.min - 1e-9 && p.y <= y.max + 1e-9, "{c:?} at {i}");
                sampled.add_pt(p);
            }
            let sx = sampled.x_extent().unwrap();
            let sy = sampled.y_extent().unwrap();
            assert!(x.length() - sx.length() < 1e-2, "{c:?}");
            assert!(y.length() - sy.length() < 1e-2, "{c:?}");
        }
    }

    #[test]
    fn monotonic_accumulation() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut bbox = BoundingBox::new();
        for _ in 0..500 {
            let before = bbox;
            match rng.random_range(0..5) {
                0 => {
                    let p = random_point(&mut rng);
                    bbox.add_pt(p);
                }
                1 => bbox.add_x(rng.random_range(-200.0..200.0)),
                2 => bbox.add_y(rng.random_range(-200.0..200.0)),
                3 => bbox.add_cubic(
                    random_point(&mut rng),
                    random_point(&mut rng),
                    random_point(&mut rng),
                    random_point(&mut rng),
                ),
                _ => bbox.add_quad(
                    random_point(&mut rng),
                    random_point(&mut rng),
                    random_point(&mut rng),
                ),
            }
            assert_grown(&before, &bbox);
        }
    }

    #[test]
    fn endpoint_containment() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut bbox = BoundingBox::new();
        for _ in 0..200 {
            let p0 = random_point(&mut rng);
            let c1 = random_point(&mut rng);
            let c2 = random_point(&mut rng);
            let p3 = random_point(&mut rng);
            bbox.add_cubic(p0, c1, c2, p3);
            assert!(bbox.contains(p0) && bbox.contains(p3));

            let mut quad_box = BoundingBox::new();
            quad_box.add_quad(p0, c1, p3);
            assert!(quad_box.contains(p0) && quad_box.contains(p3));
        }
    }

    #[test]
    fn degree_elevation_equivalence() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let Point { x: x0, y: y0 } = random_point(&mut rng);
            let Point { x: x1, y: y1 } = random_point(&mut rng);
            let Point { x, y } = random_point(&mut rng);

            let mut quad = BoundingBox::new();
            quad.add_quad((x0, y0), (x1, y1), (x, y));

            let cp1x = x0 + 2.0 / 3.0 * (x1 - x0);
            let cp1y = y0 + 2.0 / 3.0 * (y1 - y0);
            let cp2x = cp1x + 1.0 / 3.0 * (x - x0);
            let cp2y = cp1y + 1.0 / 3.0 * (y - y0);
            let mut cubic = BoundingBox::new();
            cubic.add_cubic((x0, y0), (cp1x, cp1y), (cp2x, cp2y), (x, y));

            assert_eq!(quad, cubic);
        }
    }

    #[test]
    fn union_merges_axes() {
        let mut a = BoundingBox::from_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        let mut b = BoundingBox::new();
        b.add_x(-4.0);
        a.union(&b);
        assert_eq!(a.to_rect(), Some(Rect::new(-4.0, 0.0, 1.0, 1.0)));
        a.union(&BoundingBox::new());
        assert_eq!(a.to_rect(), Some(Rect::new(-4.0, 0.0, 1.0, 1.0)));
    }
}
