//! Leaf numeric helpers shared by every evaluation method.

use crate::machine::BesselFloat;

/// Evaluate a polynomial by Horner's method.
///
/// `coeffs` holds the coefficients in increasing degree order:
/// `coeffs[0] + coeffs[1]·x + … + coeffs[n-1]·x^(n-1)`.
/// Coefficients are stored as f64 and narrowed to `T` on use.
#[inline]
pub(crate) fn horner<T: BesselFloat>(coeffs: &[f64], x: T) -> T {
    coeffs
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc.fma(x, T::from_f64(c)))
}

/// Evaluate the rational function `P(x) / Q(x)`, both by Horner's method.
#[inline]
pub(crate) fn rational<T: BesselFloat>(p: &[f64], q: &[f64], x: T) -> T {
    horner(p, x) / horner(q, x)
}

/// Evaluate a polynomial stored in decreasing degree order.
///
/// The Debye correction table keeps each polynomial highest degree first.
#[inline]
pub(crate) fn horner_rev<T: BesselFloat>(coeffs: &[f64], x: T) -> T {
    coeffs
        .iter()
        .fold(T::zero(), |acc, &c| acc.fma(x, T::from_f64(c)))
}

/// `true` when `x` has no fractional part.
#[inline]
pub(crate) fn is_integer<T: BesselFloat>(x: T) -> bool {
    x.fract() == T::zero()
}

/// Distance from `x` to the nearest integer.
#[inline]
pub(crate) fn integer_distance<T: BesselFloat>(x: T) -> T {
    (x - x.round()).abs()
}

/// Compute sin(π·x) with exact values at half-integers.
///
/// Reduces the argument modulo 2 first, so `sinpi(n)` is exactly 0 for
/// any integer `n`, and `sinpi(n + 0.5)` is exactly ±1. This avoids the
/// catastrophic rounding errors of `(x * PI).sin()` when x is a
/// half-integer (e.g. `sin(1.5 * PI)` = −1.837e-16 instead of 0).
///
/// Algorithm follows scipy/xsf: reduce to [0, 0.5], use symmetry.
#[inline]
pub(crate) fn sinpi<T: BesselFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);
    let one_half = T::from_f64(1.5);
    let pi = T::from_f64(core::f64::consts::PI);

    // sinpi is odd: sinpi(-x) = -sinpi(x)
    let (ax, sign) = if x < zero { (-x, -one) } else { (x, one) };

    // Reduce to [0, 2): r = ax mod 2
    let r = ax % two;

    // Exact special values
    if r == zero || r == one {
        return zero;
    }
    if r == half {
        return sign;
    }
    if r == one_half {
        return -sign;
    }

    // Use symmetry to reduce to [0, 0.5]
    let s = if r < half {
        (r * pi).sin()
    } else if r < one {
        ((one - r) * pi).sin()
    } else if r < one_half {
        -((r - one) * pi).sin()
    } else {
        -((two - r) * pi).sin()
    };

    sign * s
}
