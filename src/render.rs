// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replaying paths onto a drawing surface.

use crate::{Path, PathCommand};

/// A 2D drawing surface in the style of an HTML canvas context.
///
/// Pathbox does not draw anything itself. Implement this trait for a
/// rendering backend and call [`Path::draw`] to replay a path onto it.
/// Coordinates are passed as plain numbers in the order a canvas context
/// takes them.
pub trait RenderContext {
    /// Start a new, empty path, discarding any current one.
    fn begin_path(&mut self);

    /// Start a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Add a straight line to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Add a cubic Bézier with control points `(cp1x, cp1y)` and
    /// `(cp2x, cp2y)`, ending at `(x, y)`.
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);

    /// Add a quadratic Bézier with control point `(cpx, cpy)`, ending at
    /// `(x, y)`.
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);

    /// Close the current subpath.
    fn close_path(&mut self);

    /// Set the color used by [`fill`](RenderContext::fill).
    fn set_fill_style(&mut self, color: &str);

    /// Fill the current path.
    fn fill(&mut self);

    /// Set the color used by [`stroke`](RenderContext::stroke).
    fn set_stroke_style(&mut self, color: &str);

    /// Set the line width used by [`stroke`](RenderContext::stroke).
    fn set_line_width(&mut self, width: f64);

    /// Stroke the current path.
    fn stroke(&mut self);
}

impl Path {
    /// Draw the path onto a rendering surface.
    ///
    /// Begins a new path on `ctx`, replays every command in order, then
    /// fills it if the path has a fill color and strokes it if the path has
    /// a stroke color. Empty color strings count as unset.
    pub fn draw(&self, ctx: &mut impl RenderContext) {
        ctx.begin_path();
        for cmd in self {
            match cmd {
                PathCommand::MoveTo(p) => ctx.move_to(p.x, p.y),
                PathCommand::LineTo(p) => ctx.line_to(p.x, p.y),
                PathCommand::QuadTo(p1, p2) => ctx.quadratic_curve_to(p1.x, p1.y, p2.x, p2.y),
                PathCommand::CurveTo(p1, p2, p3) => {
                    ctx.bezier_curve_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
                }
                PathCommand::ClosePath => ctx.close_path(),
            }
        }

        let style = self.style();
        if let Some(fill) = style.fill_color() {
            ctx.set_fill_style(fill);
            ctx.fill();
        }
        if let Some(stroke) = style.stroke_color() {
            ctx.set_stroke_style(stroke);
            ctx.set_line_width(style.stroke_width);
            ctx.stroke();
        }
    }
}
