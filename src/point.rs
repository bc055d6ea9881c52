// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points in the path's coordinate space.

use core::fmt;
use core::ops::{Add, Sub};

use crate::Vec2;

/// A position in the plane.
///
/// Path commands and curve segments are expressed in terms of points; the
/// difference of two points is a [`Vec2`].
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// `(0, 0)`, where every path's current point starts.
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    /// A point at `(x, y)`.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The displacement from the origin to this point.
    #[inline(always)]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline(always)]
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline(always)]
    fn from(p: Point) -> (f64, f64) {
        (p.x, p.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, d: Vec2) -> Point {
        Point::new(self.x + d.x, self.y + d.y)
    }
}

impl Sub<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, d: Vec2) -> Point {
        Point::new(self.x - d.x, self.y - d.y)
    }
}

impl Sub for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Point) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("").field(&self.x).field(&self.y).finish()
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline(always)]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline(always)]
    fn from(p: mint::Point2<f64>) -> Point {
        Point::new(p.x, p.y)
    }
}
