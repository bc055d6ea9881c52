// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data and markup.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{self, Write};
use core::str::FromStr;

use log::debug;

use crate::{Path, PathCommand, Point, Vec2, DEFAULT_FILL};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Options controlling how numbers are written in path data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathDataFormat {
    /// Digits after the decimal point for values that are not integers.
    ///
    /// Integral values are always written without a decimal point.
    pub decimal_places: usize,
}

impl PathDataFormat {
    /// A format with the given number of decimal places.
    #[inline]
    pub const fn new(decimal_places: usize) -> PathDataFormat {
        PathDataFormat { decimal_places }
    }
}

impl Default for PathDataFormat {
    fn default() -> Self {
        PathDataFormat::new(2)
    }
}

/// An error which can be returned when parsing SVG path data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathDataError {
    /// Encountered a character that is neither a supported command letter
    /// nor part of a number.
    #[error("unknown path command {0:?}")]
    UnknownCommand(char),
    /// A number was expected at the given byte offset.
    #[error("invalid number at byte offset {offset}")]
    InvalidNumber {
        /// Byte offset into the input.
        offset: usize,
    },
    /// The input ended while still expecting a number.
    #[error("unexpected end of path data")]
    UnexpectedEof,
    /// The first command was not a move.
    #[error("path data must begin with a move command")]
    MissingMoveTo,
}

/// Path data for a [`Path`], formatted on display.
///
/// Created by [`Path::path_data`].
#[derive(Clone, Copy, Debug)]
pub struct PathData<'a> {
    path: &'a Path,
    format: PathDataFormat,
}

impl fmt::Display for PathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.format.decimal_places;
        for cmd in self.path {
            f.write_char(cmd.letter())?;
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    write_operands(f, &[p.x, p.y], dp)?;
                }
                PathCommand::QuadTo(p1, p2) => {
                    write_operands(f, &[p1.x, p1.y, p2.x, p2.y], dp)?;
                }
                PathCommand::CurveTo(p1, p2, p3) => {
                    write_operands(f, &[p1.x, p1.y, p2.x, p2.y, p3.x, p3.y], dp)?;
                }
                PathCommand::ClosePath => {}
            }
        }
        Ok(())
    }
}

/// A space goes before an operand only when it follows another operand and
/// is not negative; a minus sign already separates it.
fn write_operands(f: &mut impl Write, values: &[f64], decimal_places: usize) -> fmt::Result {
    for (i, &v) in values.iter().enumerate() {
        if i > 0 && v >= 0.0 {
            f.write_char(' ')?;
        }
        write_number(f, v, decimal_places)?;
    }
    Ok(())
}

fn write_number(f: &mut impl Write, v: f64, decimal_places: usize) -> fmt::Result {
    if v.round() == v {
        // Both zeros compare equal; write negative zero as plain zero.
        if v == 0.0 {
            f.write_char('0')
        } else {
            write!(f, "{v:.0}")
        }
    } else if is_rounding_tie(v, decimal_places) {
        write_tie_rounded_up(f, v, decimal_places)
    } else {
        write!(f, "{v:.decimal_places$}")
    }
}

/// Whether `v` lies exactly halfway between two values with
/// `decimal_places` decimals.
///
/// That is the case when the binary fraction of `v` is exactly one bit
/// longer than `decimal_places`: its decimal expansion then ends in a 5 one
/// place past the last written digit.
fn is_rounding_tie(v: f64, decimal_places: usize) -> bool {
    let mut scaled = v;
    for _ in 0..decimal_places {
        scaled *= 2.0;
    }
    scaled.round() != scaled && (scaled * 2.0).round() == scaled * 2.0
}

/// Write a tie rounded away from zero.
///
/// The standard formatter rounds ties to even, so the digits are produced
/// one place further, where the expansion is exact, and the final 5 is
/// carried by hand.
fn write_tie_rounded_up(f: &mut impl Write, v: f64, decimal_places: usize) -> fmt::Result {
    let mut digits = format!("{:.*}", decimal_places + 1, v.abs()).into_bytes();
    digits.pop();
    if digits.last() == Some(&b'.') {
        digits.pop();
    }
    let mut carry = true;
    for d in digits.iter_mut().rev() {
        match *d {
            b'.' => {}
            b'9' => *d = b'0',
            _ => {
                *d += 1;
                carry = false;
                break;
            }
        }
    }
    if v < 0.0 {
        f.write_char('-')?;
    }
    if carry {
        f.write_char('1')?;
    }
    for d in digits {
        f.write_char(char::from(d))?;
    }
    Ok(())
}

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
}

impl Path {
    /// A displayable view of the path as SVG path data.
    pub fn path_data(&self, format: PathDataFormat) -> PathData<'_> {
        PathData { path: self, format }
    }

    /// Convert the path to an SVG path data string, with two decimal places.
    ///
    /// See [`to_path_data_with`](Path::to_path_data_with) for the format.
    pub fn to_path_data(&self) -> String {
        self.to_path_data_with(PathDataFormat::default())
    }

    /// Convert the path to an SVG path data string.
    ///
    /// Each command is written as its letter (`M`, `L`, `Q`, `C` or `Z`)
    /// followed by its absolute coordinates. Integral values are written
    /// without a decimal point, other values with `format.decimal_places`
    /// decimals. Operands are separated by a space, except that a negative
    /// value directly follows the previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbox::{Path, PathDataFormat};
    ///
    /// let mut path = Path::new();
    /// path.move_to((0.0, -1.0));
    /// path.quad_to((0.3, 2.0), (3.0, -4.126));
    /// assert_eq!(path.to_path_data(), "M0-1Q0.30 2 3-4.13");
    /// assert_eq!(
    ///     path.to_path_data_with(PathDataFormat::new(1)),
    ///     "M0-1Q0.3 2 3-4.1"
    /// );
    /// ```
    pub fn to_path_data_with(&self, format: PathDataFormat) -> String {
        self.path_data(format).to_string()
    }

    /// Convert the path to an SVG `<path>` element, with two decimal places.
    pub fn to_svg(&self) -> String {
        self.to_svg_with(PathDataFormat::default())
    }

    /// Convert the path to an SVG `<path>` element.
    ///
    /// The element carries the path data in its `d` attribute. A `fill`
    /// attribute is added when there is no fill (`fill="none"`) or the fill
    /// is not the default black. `stroke` and `stroke-width` are added when
    /// a stroke is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbox::Path;
    ///
    /// let mut path = Path::new();
    /// path.move_to((1.0, 1.0));
    /// path.line_to((2.0, 3.5));
    /// assert_eq!(path.to_svg(), r#"<path d="M1 1L2 3.50"/>"#);
    ///
    /// path.set_fill(None::<&str>);
    /// path.set_stroke(Some("red"), 2.0);
    /// assert_eq!(
    ///     path.to_svg(),
    ///     r#"<path d="M1 1L2 3.50" fill="none" stroke="red" stroke-width="2"/>"#
    /// );
    /// ```
    pub fn to_svg_with(&self, format: PathDataFormat) -> String {
        let mut svg = String::from("<path d=\"");
        svg.push_str(&self.to_path_data_with(format));
        svg.push('"');
        let style = self.style();
        match style.fill_color() {
            None => svg.push_str(" fill=\"none\""),
            Some(DEFAULT_FILL) => {}
            Some(fill) => {
                svg.push_str(" fill=\"");
                push_escaped(&mut svg, fill);
                svg.push('"');
            }
        }
        if let Some(stroke) = style.stroke_color() {
            svg.push_str(" stroke=\"");
            push_escaped(&mut svg, stroke);
            svg.push_str("\" stroke-width=\"");
            svg.push_str(&style.stroke_width.to_string());
            svg.push('"');
        }
        svg.push_str("/>");
        svg
    }

    /// Parse SVG path data.
    ///
    /// Supports the `M`, `L`, `H`, `V`, `Q`, `C` and `Z` commands in their
    /// absolute and relative forms, repeated operands without a repeated
    /// command letter, and comma or whitespace separators. Relative
    /// coordinates and `H`/`V` are resolved so the resulting path holds
    /// absolute commands only. Other SVG commands (arcs and the smooth curve
    /// shorthands) are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbox::Path;
    ///
    /// let path = Path::from_path_data("m10 10 h5 v5 l-5 0 z").unwrap();
    /// assert_eq!(path.to_path_data(), "M10 10L15 10L15 15L10 15Z");
    /// ```
    pub fn from_path_data(data: &str) -> Result<Path, PathDataError> {
        parse_path_data(data).inspect_err(|err| debug!("rejected path data: {err}"))
    }
}

impl FromStr for Path {
    type Err = PathDataError;

    fn from_str(s: &str) -> Result<Path, PathDataError> {
        Path::from_path_data(s)
    }
}

fn parse_path_data(data: &str) -> Result<Path, PathDataError> {
    let mut cursor = Cursor::new(data);
    let mut path = Path::new();
    // The letter whose operands may repeat without restating it.
    let mut repeat = None;
    let mut current = Point::ORIGIN;
    let mut subpath_start = Point::ORIGIN;
    while let Some(letter) = cursor.command(repeat)? {
        if path.is_empty() && !matches!(letter, 'M' | 'm') {
            return Err(PathDataError::MissingMoveTo);
        }
        let relative = letter.is_ascii_lowercase();
        let origin = if relative { current.to_vec2() } else { Vec2::ZERO };
        let cmd = match letter.to_ascii_uppercase() {
            'M' => {
                let p = cursor.point()? + origin;
                subpath_start = p;
                PathCommand::MoveTo(p)
            }
            'L' => PathCommand::LineTo(cursor.point()? + origin),
            'H' => PathCommand::LineTo(Point::new(cursor.number()? + origin.x, current.y)),
            'V' => PathCommand::LineTo(Point::new(current.x, cursor.number()? + origin.y)),
            'Q' => PathCommand::QuadTo(cursor.point()? + origin, cursor.point()? + origin),
            'C' => PathCommand::CurveTo(
                cursor.point()? + origin,
                cursor.point()? + origin,
                cursor.point()? + origin,
            ),
            'Z' => PathCommand::ClosePath,
            _ => return Err(PathDataError::UnknownCommand(letter)),
        };
        current = cmd.end_point().unwrap_or(subpath_start);
        repeat = match letter {
            'Z' | 'z' => None,
            // Coordinates after a move are implicit lines.
            'M' => Some('L'),
            'm' => Some('l'),
            _ => Some(letter),
        };
        path.push(cmd);
    }
    Ok(path)
}

/// Byte position in path data, skipping separators between tokens.
struct Cursor<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a str) -> Cursor<'a> {
        Cursor { data, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.data.as_bytes().get(self.pos).copied()
    }

    /// Advance past one byte if it satisfies `pred`.
    fn eat(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        let hit = self.peek().is_some_and(pred);
        if hit {
            self.pos += 1;
        }
        hit
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while self.eat(|b| b.is_ascii_digit()) {}
        self.pos - start
    }

    /// Skip whitespace, and at most one comma if `comma` is set.
    fn skip_separators(&mut self, comma: bool) {
        let ws = |b: u8| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c');
        while self.eat(ws) {}
        if comma && self.eat(|b| b == b',') {
            while self.eat(ws) {}
        }
    }

    /// The next command letter, or `repeat` if more operands follow.
    /// `Ok(None)` at the end of input.
    fn command(&mut self, repeat: Option<char>) -> Result<Option<char>, PathDataError> {
        self.skip_separators(false);
        let Some(c) = self.data[self.pos..].chars().next() else {
            return Ok(None);
        };
        if c.is_ascii_alphabetic() {
            self.pos += 1;
            return Ok(Some(c));
        }
        match repeat {
            Some(letter) if matches!(c, '+' | '-' | '.' | '0'..='9') => Ok(Some(letter)),
            _ => Err(PathDataError::UnknownCommand(c)),
        }
    }

    fn number(&mut self) -> Result<f64, PathDataError> {
        self.skip_separators(false);
        let start = self.pos;
        if self.peek().is_none() {
            return Err(PathDataError::UnexpectedEof);
        }
        let invalid = PathDataError::InvalidNumber { offset: start };
        self.eat(|b| b == b'+' || b == b'-');
        let mut digits = self.eat_digits();
        if self.eat(|b| b == b'.') {
            digits += self.eat_digits();
        }
        if digits == 0 {
            return Err(invalid);
        }
        let mantissa_end = self.pos;
        if self.eat(|b| b == b'e' || b == b'E') {
            self.eat(|b| b == b'+' || b == b'-');
            if self.eat_digits() == 0 {
                // A bare `e` is not part of the number.
                self.pos = mantissa_end;
            }
        }
        let v = self.data[start..self.pos].parse().map_err(|_| invalid)?;
        self.skip_separators(true);
        Ok(v)
    }

    fn point(&mut self) -> Result<Point, PathDataError> {
        Ok(Point::new(self.number()?, self.number()?))
    }
}
