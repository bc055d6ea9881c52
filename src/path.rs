// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths made of lines and Bézier segments (up to cubic).

use alloc::string::String;
use alloc::vec::Vec;
use core::iter::Copied;
use core::slice;

use log::debug;

use crate::{BoundingBox, Point, Rect};

/// The fill color a new path is given.
pub const DEFAULT_FILL: &str = "black";

/// A single drawing command in a [`Path`].
///
/// Points are absolute. Segment commands draw from the current point, which
/// is the end point of the previous command, or the start of the subpath
/// after a [`ClosePath`](PathCommand::ClosePath).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Draw a straight line to the given point.
    LineTo(Point),
    /// Draw a quadratic Bézier with the given control point and end point.
    QuadTo(Point, Point),
    /// Draw a cubic Bézier with the given two control points and end point.
    CurveTo(Point, Point, Point),
    /// Close the current subpath, returning to its start point.
    ClosePath,
}

impl PathCommand {
    /// The point this command ends at, or `None` for `ClosePath`.
    ///
    /// The end point of a close depends on the commands before it, so it is
    /// not known from the command alone.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadTo(_, p) => Some(p),
            PathCommand::CurveTo(_, _, p) => Some(p),
            PathCommand::ClosePath => None,
        }
    }

    /// The SVG path data letter for this command.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::QuadTo(..) => 'Q',
            PathCommand::CurveTo(..) => 'C',
            PathCommand::ClosePath => 'Z',
        }
    }
}

/// Presentational attributes of a [`Path`].
///
/// These have no effect on the geometry; they are carried along for
/// [SVG output](Path::to_svg) and [drawing](Path::draw).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStyle {
    /// The fill color, or `None` for no fill.
    pub fill: Option<String>,
    /// The stroke color, or `None` for no stroke.
    pub stroke: Option<String>,
    /// The stroke width, used only when `stroke` is set.
    pub stroke_width: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        PathStyle {
            fill: Some(DEFAULT_FILL.into()),
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

impl PathStyle {
    /// The fill color, if the path is filled.
    ///
    /// An empty color string counts as no fill.
    pub fn fill_color(&self) -> Option<&str> {
        self.fill.as_deref().filter(|c| !c.is_empty())
    }

    /// The stroke color, if the path is stroked.
    ///
    /// An empty color string counts as no stroke.
    pub fn stroke_color(&self) -> Option<&str> {
        self.stroke.as_deref().filter(|c| !c.is_empty())
    }
}

/// An ordered sequence of drawing commands, possibly with multiple subpaths.
///
/// A path is built by appending commands and is never edited in place.
/// Command order matters: it is replayed front to back when computing the
/// [bounding box](Path::bounding_box), serializing, or drawing.
///
/// No validation happens on append. In particular a path does not need to
/// start with a `MoveTo`; segments before the first move start at the origin.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    commands: Vec<PathCommand>,
    style: PathStyle,
}

impl Path {
    /// Create a new, empty path with the default style.
    pub fn new() -> Path {
        Path::default()
    }

    /// Create a path from a vector of commands.
    pub fn from_vec(commands: Vec<PathCommand>) -> Path {
        Path {
            commands,
            style: PathStyle::default(),
        }
    }

    /// Builder-style method to replace the path's style.
    pub fn with_style(mut self, style: PathStyle) -> Path {
        self.style = style;
        self
    }

    /// Push a generic command onto the path.
    pub fn push(&mut self, cmd: PathCommand) {
        self.commands.push(cmd);
    }

    /// Push a "move to" command onto the path.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.push(PathCommand::MoveTo(p.into()));
    }

    /// Push a "line to" command onto the path.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.push(PathCommand::LineTo(p.into()));
    }

    /// Push a "quad to" command onto the path.
    pub fn quad_to(&mut self, ctrl: impl Into<Point>, p: impl Into<Point>) {
        self.push(PathCommand::QuadTo(ctrl.into(), p.into()));
    }

    /// Push a "curve to" command onto the path.
    pub fn curve_to(&mut self, ctrl1: impl Into<Point>, ctrl2: impl Into<Point>, p: impl Into<Point>) {
        self.push(PathCommand::CurveTo(ctrl1.into(), ctrl2.into(), p.into()));
    }

    /// Push a "close path" command onto the path.
    pub fn close_path(&mut self) {
        self.push(PathCommand::ClosePath);
    }

    /// Append all commands of another path.
    ///
    /// The style of `other` is ignored.
    pub fn extend_from_path(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    /// Append the outline of a rectangle as a closed subpath.
    ///
    /// This appends exactly five commands: a move to `(x0, y0)`, lines to
    /// `(x1, y0)`, `(x1, y1)` and `(x0, y1)`, and a close.
    pub fn append_rect(&mut self, rect: Rect) {
        self.extend(rect.path_commands());
    }

    /// Append the outline of a bounding box as a closed subpath.
    ///
    /// This is a convenience for visualizing a box. An empty box has no
    /// outline; nothing is appended and `false` is returned.
    pub fn append_bounding_box(&mut self, bbox: &BoundingBox) -> bool {
        match bbox.to_rect() {
            Some(rect) => {
                self.append_rect(rect);
                true
            }
            None => {
                debug!("not appending outline of an empty bounding box");
                false
            }
        }
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The number of commands in the path.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The path's presentational attributes.
    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    /// Mutable access to the path's presentational attributes.
    pub fn style_mut(&mut self) -> &mut PathStyle {
        &mut self.style
    }

    /// Set the fill color; `None` means no fill.
    pub fn set_fill(&mut self, fill: Option<impl Into<String>>) {
        self.style.fill = fill.map(Into::into);
    }

    /// Set the stroke color and width; `None` means no stroke.
    pub fn set_stroke(&mut self, stroke: Option<impl Into<String>>, width: f64) {
        self.style.stroke = stroke.map(Into::into);
        self.style.stroke_width = width;
    }

    /// Compute the tight bounding box of everything the path traces.
    ///
    /// The commands are replayed in order. Move and line targets are added
    /// directly, and curves are added with their interior extrema (see
    /// [`BoundingBox::add_cubic`]). A close returns the current point to
    /// the start of the subpath without adding anything.
    ///
    /// A path that traces nothing (no commands, or only closes) yields the
    /// box of the single point `(0, 0)`, so the result is never empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbox::{Path, Rect};
    ///
    /// let mut path = Path::new();
    /// path.move_to((0.0, 0.0));
    /// path.quad_to((5.0, 10.0), (10.0, 0.0));
    /// let rect = path.bounding_box().to_rect().unwrap();
    /// assert_eq!((rect.x0, rect.x1), (0.0, 10.0));
    /// assert!((rect.y1 - 5.0).abs() < 1e-12);
    ///
    /// assert_eq!(Path::new().bounding_box().to_rect(), Some(Rect::ZERO));
    /// ```
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new();
        let mut start = Point::ORIGIN;
        let mut current = Point::ORIGIN;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    bbox.add_pt(p);
                    start = p;
                    current = p;
                }
                PathCommand::LineTo(p) => {
                    bbox.add_pt(p);
                    current = p;
                }
                PathCommand::QuadTo(p1, p2) => {
                    bbox.add_quad(current, p1, p2);
                    current = p2;
                }
                PathCommand::CurveTo(p1, p2, p3) => {
                    bbox.add_cubic(current, p1, p2, p3);
                    current = p3;
                }
                PathCommand::ClosePath => {
                    current = start;
                }
            }
        }
        if bbox.is_empty() {
            debug!(
                "path of {} commands traces nothing, using origin",
                self.commands.len()
            );
            bbox.add_pt(Point::ORIGIN);
        }
        bbox
    }
}

impl Extend<PathCommand> for Path {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<T: IntoIterator<Item = PathCommand>>(iter: T) -> Self {
        Path::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = PathCommand;
    type IntoIter = Copied<slice::Iter<'a, PathCommand>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoundingBox, Path, PathCommand, PathStyle, Point, Rect};

    fn square() -> Path {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        path.close_path();
        path
    }

    #[test]
    fn append_commands() {
        let mut path = square();
        path.quad_to((1.0, 2.0), (3.0, 4.0));
        path.curve_to((5.0, 6.0), (7.0, 8.0), (9.0, 10.0));
        assert_eq!(path.len(), 6);
        assert_eq!(
            &path.commands()[4..],
            &[
                PathCommand::QuadTo(Point::new(1.0, 2.0), Point::new(3.0, 4.0)),
                PathCommand::CurveTo(
                    Point::new(5.0, 6.0),
                    Point::new(7.0, 8.0),
                    Point::new(9.0, 10.0)
                ),
            ]
        );
    }

    #[test]
    fn empty_path_box_is_origin() {
        let path = Path::new();
        assert!(path.is_empty());
        let bbox = path.bounding_box();
        assert!(!bbox.is_empty());
        assert_eq!(bbox.to_rect(), Some(Rect::ZERO));
    }

    #[test]
    fn close_only_path_box_is_origin() {
        let mut path = Path::new();
        path.close_path();
        path.close_path();
        assert_eq!(path.bounding_box().to_rect(), Some(Rect::ZERO));
    }

    #[test]
    fn lines_box() {
        assert_eq!(
            square().bounding_box().to_rect(),
            Some(Rect::new(0.0, 0.0, 10.0, 10.0))
        );
    }

    #[test]
    fn origin_not_added_when_path_traces_something() {
        let mut path = Path::new();
        path.move_to((5.0, 5.0));
        path.line_to((7.0, 6.0));
        assert_eq!(
            path.bounding_box().to_rect(),
            Some(Rect::new(5.0, 5.0, 7.0, 6.0))
        );
    }

    #[test]
    fn curve_starts_at_current_point() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((2.0, 0.0));
        path.curve_to((2.0, 1.0), (3.0, 1.0), (3.0, 0.0));
        let rect = path.bounding_box().to_rect().unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 3.0, 0.75));
    }

    #[test]
    fn close_returns_to_subpath_start() {
        // After the close, the quad starts from (0, 0) rather than (10, 10).
        let mut path = square();
        path.quad_to((-10.0, 0.0), (0.0, -10.0));
        let rect = path.bounding_box().to_rect().unwrap();
        assert_eq!(rect.x1, 10.0);
        assert_eq!(rect.y1, 10.0);
        assert_eq!(rect.y0, -10.0);
        // Leftmost point of the quad from (0, 0) via (-10, 0) to (0, -10).
        assert!((rect.x0 - -5.0).abs() < 1e-12, "x0 = {}", rect.x0);
    }

    #[test]
    fn segment_before_first_move_starts_at_origin() {
        let mut path = Path::new();
        path.curve_to((0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        assert_eq!(
            path.bounding_box().to_rect(),
            Some(Rect::new(0.0, 0.0, 1.0, 0.75))
        );
    }

    #[test]
    fn bounding_box_is_repeatable() {
        let mut path = square();
        path.curve_to((0.0, 30.0), (20.0, -30.0), (5.0, 5.0));
        let first = path.bounding_box();
        assert_eq!(first, path.bounding_box());
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn box_to_path() {
        let mut path = Path::new();
        let mut bbox = BoundingBox::new();
        bbox.add_pt((0.0, 0.0));
        bbox.add_pt((5.0, 5.0));
        assert!(path.append_bounding_box(&bbox));
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(5.0, 0.0)),
                PathCommand::LineTo(Point::new(5.0, 5.0)),
                PathCommand::LineTo(Point::new(0.0, 5.0)),
                PathCommand::ClosePath,
            ]
        );
        assert_eq!(path.bounding_box(), bbox);
    }

    #[test]
    fn empty_box_appends_nothing() {
        let mut path = Path::new();
        assert!(!path.append_bounding_box(&BoundingBox::new()));
        assert!(path.is_empty());
    }

    #[test]
    fn extend_from_other_path() {
        let mut a = square();
        let mut b = Path::new();
        b.set_fill(Some("red"));
        b.move_to((20.0, 20.0));
        b.line_to((30.0, 25.0));
        a.extend_from_path(&b);
        assert_eq!(a.len(), 6);
        assert_eq!(a.commands()[4], PathCommand::MoveTo(Point::new(20.0, 20.0)));
        assert_eq!(a.style(), &PathStyle::default());
        assert_eq!(
            a.bounding_box().to_rect(),
            Some(Rect::new(0.0, 0.0, 30.0, 25.0))
        );
    }

    #[test]
    fn collect_and_iterate() {
        let path: Path = Rect::new(1.0, 2.0, 3.0, 4.0).path_commands().collect();
        let mut letters = String::new();
        for cmd in &path {
            letters.push(cmd.letter());
        }
        assert_eq!(letters, "MLLLZ");
        assert_eq!(path.commands()[4].end_point(), None);
        assert_eq!(path.commands()[2].end_point(), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn default_style() {
        let style = PathStyle::default();
        assert_eq!(style.fill.as_deref(), Some("black"));
        assert_eq!(style.stroke, None);
        assert_eq!(style.stroke_width, 1.0);
        assert_eq!(style.fill_color(), Some("black"));
        assert_eq!(style.stroke_color(), None);
    }

    #[test]
    fn empty_color_is_unset() {
        let mut path = Path::new();
        path.set_fill(Some(""));
        path.set_stroke(Some(""), 2.0);
        assert_eq!(path.style().fill_color(), None);
        assert_eq!(path.style().stroke_color(), None);
        path.set_stroke(Some("red"), 2.0);
        assert_eq!(path.style().stroke_color(), Some("red"));
    }
}
