//! Per-width machine constants, cutoffs and coefficient tables.
//!
//! Every evaluation method reads its tolerances, regime cutoffs and
//! coefficient tables from a single [`Precision`] record selected by the
//! floating-point width. The record is chosen once by the dispatcher and
//! passed by reference to each method; nothing is looked up by runtime data.

use num_traits::Float;

use crate::algo::kernels::{K0_F32, K0_F64, K1_F32, K1_F64, KernelTables};
use crate::algo::seri::INTEGER_GAP;
use crate::algo::unik::{UK_COEFFS, UK_COEFFS_F32_LEN};
use crate::utils::integer_distance;

/// Cutoffs, tolerance and tables for one floating-point width.
///
/// Instances are `static` items reached through
/// [`BesselFloat::PRECISION`]; they are never built at runtime.
#[derive(Debug)]
pub struct Precision {
    /// Machine epsilon; termination threshold of every iterative method.
    pub(crate) epsilon: f64,
    /// Debye expansion applies when `ν > debye_order`.
    pub(crate) debye_order: f64,
    /// Debye expansion applies when `x > debye_arg`.
    pub(crate) debye_arg: f64,
    /// Power series applies when `x < series_arg`.
    pub(crate) series_arg: f64,
    /// Power series applies when `ν > series_slope · x + series_offset`.
    pub(crate) series_slope: f64,
    pub(crate) series_offset: f64,
    /// Packed Debye correction polynomials U_0, U_1, … (see `algo::unik`).
    pub(crate) uk: &'static [f64],
    pub(crate) k0: &'static KernelTables,
    pub(crate) k1: &'static KernelTables,
}

impl Precision {
    /// Large order/argument predicate selecting the Debye expansion.
    #[inline]
    pub(crate) fn debye_cutoff<T: BesselFloat>(&self, nu: T, x: T) -> bool {
        nu > T::from_f64(self.debye_order) || x > T::from_f64(self.debye_arg)
    }

    /// Small argument / large order predicate selecting the power series.
    ///
    /// Above `series_arg` the large-order arm leaves out orders within
    /// [`INTEGER_GAP`] of an integer; the series cancels there and the
    /// continued fraction does not.
    #[inline]
    pub(crate) fn series_cutoff<T: BesselFloat>(&self, nu: T, x: T) -> bool {
        if x < T::from_f64(self.series_arg) {
            return true;
        }
        nu > x.fma(T::from_f64(self.series_slope), T::from_f64(self.series_offset))
            && integer_distance(nu) >= T::from_f64(INTEGER_GAP)
    }
}

static F64_PRECISION: Precision = Precision {
    epsilon: 2.220446049250313e-16,
    debye_order: 25.0,
    debye_arg: 35.0,
    series_arg: 2.0,
    series_slope: 1.6,
    series_offset: -1.0,
    uk: &UK_COEFFS,
    k0: &K0_F64,
    k1: &K1_F64,
};

// The series region is narrower than for f64: at x near 2 the K series
// cancels by roughly exp(2x)/π, which costs f32 more digits than it has.
static F32_PRECISION: Precision = Precision {
    epsilon: 1.1920928955078125e-7,
    debye_order: 15.0,
    debye_arg: 20.0,
    series_arg: 1.0,
    series_slope: 1.6,
    series_offset: -1.0,
    uk: UK_COEFFS.as_slice().split_at(UK_COEFFS_F32_LEN).0,
    k0: &K0_F32,
    k1: &K1_F32,
};

/// Floating-point trait for K Bessel function evaluation.
///
/// Implemented for `f64` and `f32`. Narrower widths are served by promotion
/// (see the `f16` feature).
pub trait BesselFloat: Float + core::fmt::Debug + 'static {
    /// Cutoffs and tables for this width.
    const PRECISION: &'static Precision;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    /// Coefficient tables are stored as f64 literals and narrowed on use.
    fn from_f64(x: f64) -> Self;

    /// Infallible widening to f64.
    fn into_f64(self) -> f64;

    /// Tolerance used by series and continued-fraction termination.
    #[inline]
    fn tol() -> Self {
        Self::from_f64(Self::PRECISION.epsilon)
    }

    /// Fused multiply-add: `self * a + b`.
    ///
    /// With `std` enabled, uses hardware FMA via the C library `fma()`.
    /// Without `std`, falls back to plain `self * a + b` to avoid the
    /// slow software FMA in libm.
    ///
    /// Named `fma` to avoid ambiguity with [`Float::mul_add`].
    fn fma(self, a: Self, b: Self) -> Self;
}

impl BesselFloat for f64 {
    const PRECISION: &'static Precision = &F64_PRECISION;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }

    #[cfg(feature = "std")]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        Float::mul_add(self, a, b)
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        self * a + b
    }
}

impl BesselFloat for f32 {
    const PRECISION: &'static Precision = &F32_PRECISION;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self as f64
    }

    #[cfg(feature = "std")]
    #[inline]
    fn fma(self, a: f32, b: f32) -> f32 {
        Float::mul_add(self, a, b)
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn fma(self, a: f32, b: f32) -> f32 {
        self * a + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_is_machine_epsilon() {
        assert_eq!(f64::tol(), f64::EPSILON);
        assert_eq!(f32::tol(), f32::EPSILON);
    }

    // U_k packs k+1 coefficients, so n polynomials take n(n+1)/2 slots.
    fn debye_terms(p: &Precision) -> usize {
        let mut n = 0;
        while (n + 1) * (n + 2) / 2 <= p.uk.len() {
            n += 1;
        }
        n
    }

    #[test]
    fn debye_term_counts() {
        assert_eq!(debye_terms(f64::PRECISION), 15);
        assert_eq!(debye_terms(f32::PRECISION), 6);
    }

    #[test]
    fn debye_cutoffs_per_width() {
        let p = f64::PRECISION;
        assert!(!p.debye_cutoff(25.0_f64, 35.0));
        assert!(p.debye_cutoff(25.5_f64, 1.0));
        assert!(p.debye_cutoff(0.5_f64, 35.5));

        let p = f32::PRECISION;
        assert!(!p.debye_cutoff(15.0_f32, 20.0));
        assert!(p.debye_cutoff(15.5_f32, 1.0));
        assert!(p.debye_cutoff(0.5_f32, 20.5));
    }

    #[test]
    fn series_cutoffs_per_width() {
        let p = f64::PRECISION;
        assert!(p.series_cutoff(0.3_f64, 1.9));
        assert!(!p.series_cutoff(0.3_f64, 2.0));
        // ν > 1.6x − 1
        assert!(p.series_cutoff(12.3_f64, 5.0));
        assert!(!p.series_cutoff(6.9_f64, 5.0));

        let p = f32::PRECISION;
        assert!(p.series_cutoff(0.3_f32, 0.9));
        assert!(!p.series_cutoff(0.3_f32, 1.5));
    }

    #[test]
    fn series_cutoff_skips_near_integer_large_order() {
        let p = f64::PRECISION;
        // Large-order arm: 24.05 and 23.95 sit within the gap of 24.
        assert!(p.series_cutoff(24.3_f64, 15.0));
        assert!(!p.series_cutoff(24.05_f64, 15.0));
        assert!(!p.series_cutoff(23.95_f64, 15.0));
        assert!(!p.series_cutoff(3.000001_f64, 2.5));
        // Small-argument arm keeps every order.
        assert!(p.series_cutoff(1e-12_f64, 0.5));
        assert!(p.series_cutoff(1.000001_f64, 1.9));

        let p = f32::PRECISION;
        assert!(!p.series_cutoff(2.0001_f32, 1.5));
        assert!(p.series_cutoff(2.0001_f32, 0.5));
    }

    #[test]
    fn into_f64_round_trips_f32() {
        let x = 0.1_f32;
        assert_eq!(f32::from_f64(x.into_f64()), x);
    }
}
