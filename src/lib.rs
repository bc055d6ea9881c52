// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector paths with exact Bézier bounding boxes.
//!
//! The pathbox library holds an ordered sequence of drawing commands (move,
//! line, quadratic and cubic Bézier, close) and answers two questions about
//! it: what is the tight axis-aligned bounding box of everything the path
//! traces, and what does it look like as SVG path data.
//!
//! The bounding box is exact with respect to curve extrema: a curve's control
//! points are not simply added to the box, instead the derivative of each
//! segment is solved per axis and the interior turning points are included.
//!
//! # Examples
//!
//! Bounding box of a curved path:
//! ```
//! use pathbox::Path;
//!
//! let mut path = Path::new();
//! path.move_to((0.0, 0.0));
//! path.curve_to((0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
//!
//! let bbox = path.bounding_box();
//! assert_eq!(bbox.min_y(), Some(0.0));
//! // The hump peaks at 0.75, well inside the control polygon.
//! assert_eq!(bbox.max_y(), Some(0.75));
//! ```
//!
//! Serializing to SVG path data:
//! ```
//! use pathbox::Path;
//!
//! let mut path = Path::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 0.0));
//! path.line_to((10.0, 10.0));
//! path.close_path();
//! assert_eq!(path.to_path_data(), "M0 0L10 0L10 10Z");
//! ```
//!
//! # Features
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of pathbox and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the path and box types.
//! - `schemars`: Add best-effort support for using pathbox types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Note that pathbox does require that an allocator is available (i.e. it uses [alloc]).
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    missing_debug_implementations,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::missing_assert_message,
    clippy::missing_errors_doc,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::unseparated_literal_suffix,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pathbox requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod axis;
mod bbox;
pub mod common;
mod cubicbez;
mod path;
mod point;
mod quadbez;
mod rect;
mod render;
mod svg;
mod vec2;

pub use crate::axis::Axis;
pub use crate::bbox::{BoundingBox, Interval};
pub use crate::cubicbez::CubicBez;
pub use crate::path::{Path, PathCommand, PathStyle, DEFAULT_FILL};
pub use crate::point::Point;
pub use crate::quadbez::QuadBez;
pub use crate::rect::{Rect, RectPathIter};
pub use crate::render::RenderContext;
pub use crate::svg::{PathData, PathDataError, PathDataFormat};
pub use crate::vec2::Vec2;
