// Copyright 2025 the Pathbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root finding shared by the curve types.

use arrayvec::ArrayVec;

/// Float methods that live in `std`, provided by `libm` when `std` is off.
#[cfg(not(feature = "std"))]
pub(crate) trait FloatFuncs: Sized {
    fn round(self) -> Self;
    fn sqrt(self) -> Self;
}

#[cfg(not(feature = "std"))]
impl FloatFuncs for f64 {
    #[inline]
    fn round(self) -> f64 {
        libm::round(self)
    }

    #[inline]
    fn sqrt(self) -> f64 {
        libm::sqrt(self)
    }
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0.
///
/// This is the textbook solver, with no rescaling and no tolerance. A
/// leading coefficient of exactly zero falls back to the linear equation.
/// If the linear coefficient is also zero there are no isolated roots and
/// the result is empty. A negative discriminant yields no roots.
///
/// When the discriminant is zero, the repeated root is returned twice.
/// Otherwise the roots are returned in the order `(-c1 + √d) / 2c2`,
/// `(-c1 - √d) / 2c2`.
///
/// # Examples
///
/// ```
/// use pathbox::common::solve_quadratic;
///
/// // x² - 3x + 2 = (x - 1)(x - 2)
/// let roots = solve_quadratic(2.0, -3.0, 1.0);
/// assert_eq!(roots.as_slice(), &[2.0, 1.0]);
///
/// // 2x - 1 = 0
/// assert_eq!(solve_quadratic(-1.0, 2.0, 0.0).as_slice(), &[0.5]);
/// ```
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    if c2 == 0.0 {
        if c1 != 0.0 {
            result.push(-c0 / c1);
        }
        return result;
    }
    let disc = c1 * c1 - 4.0 * c2 * c0;
    if disc < 0.0 {
        return result;
    }
    let sq = disc.sqrt();
    result.push((-c1 + sq) / (2.0 * c2));
    result.push((-c1 - sq) / (2.0 * c2));
    result
}

/// Whether `t` lies strictly inside the unit interval.
///
/// Parameter values of exactly 0 or 1 are curve endpoints.
#[inline]
pub fn in_open_unit_interval(t: f64) -> bool {
    0.0 < t && t < 1.0
}
