// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangles, the finished form of a bounding box.

use crate::{PathCommand, Point};

/// An axis-aligned rectangle given by its extreme coordinates.
///
/// A [`BoundingBox`](crate::BoundingBox) that has values on both axes
/// converts to one of these with `x0 <= x1` and `y0 <= y1`.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Smallest x.
    pub x0: f64,
    /// Smallest y.
    pub y0: f64,
    /// Largest x.
    pub x1: f64,
    /// Largest y.
    pub y1: f64,
}

impl Rect {
    /// The degenerate rectangle covering only the origin.
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// A rectangle spanning `x0..=x1` horizontally and `y0..=y1` vertically.
    #[inline(always)]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// Horizontal extent, `x1 - x0`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical extent, `y1 - y0`.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Whether the point lies within the rectangle, edges included.
    #[inline]
    pub fn contains(&self, pt: impl Into<Point>) -> bool {
        let Point { x, y } = pt.into();
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }

    /// The outline of the rectangle as path commands.
    ///
    /// The outline starts at `(x0, y0)`, visits `(x1, y0)`, `(x1, y1)` and
    /// `(x0, y1)` in that order, and ends with a close.
    #[inline]
    pub fn path_commands(&self) -> RectPathIter {
        RectPathIter {
            rect: *self,
            next: 0,
        }
    }
}

/// Iterator over the commands tracing a [`Rect`].
///
/// Created by [`Rect::path_commands`].
#[derive(Clone, Debug)]
pub struct RectPathIter {
    rect: Rect,
    next: usize,
}

const RECT_OUTLINE_LEN: usize = 5;

impl Iterator for RectPathIter {
    type Item = PathCommand;

    fn next(&mut self) -> Option<PathCommand> {
        let Rect { x0, y0, x1, y1 } = self.rect;
        let cmd = match self.next {
            0 => PathCommand::MoveTo(Point::new(x0, y0)),
            1 => PathCommand::LineTo(Point::new(x1, y0)),
            2 => PathCommand::LineTo(Point::new(x1, y1)),
            3 => PathCommand::LineTo(Point::new(x0, y1)),
            4 => PathCommand::ClosePath,
            _ => return None,
        };
        self.next += 1;
        Some(cmd)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = RECT_OUTLINE_LEN.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RectPathIter {}
