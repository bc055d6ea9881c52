// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis selection of coordinates.

use crate::Point;

/// An axis in the plane.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Both axes, x first.
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The coordinate of `p` along this axis.
    #[inline]
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// Arrange a single value as an `(x, y)` pair with the other axis absent.
    ///
    /// This is the shape [`BoundingBox::add_point`](crate::BoundingBox::add_point)
    /// takes when only one axis should be extended.
    #[inline]
    pub const fn pack_single(self, axis_value: f64) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Horizontal => (Some(axis_value), None),
            Self::Vertical => (None, Some(axis_value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, Point};

    #[test]
    fn coord_and_pack() {
        let p = Point::new(3.0, -7.0);
        assert_eq!(Axis::Horizontal.coord(p), 3.0);
        assert_eq!(Axis::Vertical.coord(p), -7.0);
        assert_eq!(Axis::Horizontal.pack_single(2.0), (Some(2.0), None));
        assert_eq!(Axis::Vertical.pack_single(2.0), (None, Some(2.0)));
    }
}
