//! Pure Rust modified Bessel function of the second kind, K_ν(x), for real
//! order ν ≥ 0 and real argument x ≥ 0.
//!
//! No single algorithm is accurate over the whole (ν, x) plane, so every
//! call is routed to one of several methods by a fixed decision procedure:
//!
//! | Region | Method |
//! |---|---|
//! | ν = 0 | rational approximation of K_0 |
//! | ν − ½ integer | closed form (spherical Bessel reduction) |
//! | large ν or x | uniform (Debye) asymptotic expansion |
//! | ν integer | upward recurrence from K_0, K_1 |
//! | small x, or ν large against x | power series |
//! | otherwise | continued fraction + Wronskian |
//!
//! Generic over `f64` and `f32` through [`BesselFloat`]; each width carries
//! its own cutoffs, tolerance and coefficient tables. `f16` is served by
//! promotion to `f32` (feature `f16`).
//!
//! # Example
//!
//! ```
//! use real_besselk::{besselk, besselk_scaled, besselk0};
//!
//! let k = besselk(2.0_f64, 1.0).unwrap();
//! assert!((k - 1.6248388986351775).abs() < 1e-14);
//!
//! // e^x K_ν(x) stays representable after K_ν(x) underflows.
//! assert_eq!(besselk(0.5_f64, 1000.0).unwrap(), 0.0);
//! assert!(besselk_scaled(0.5_f64, 1000.0).unwrap() > 0.0);
//!
//! assert!(besselk0(0.0_f64).is_err());
//! ```
//!
//! # Diagnostics
//!
//! The chosen method is reported as a `tracing` event at `TRACE` level; an
//! iterative method that exhausts its iteration cap emits a `DEBUG` event
//! and still returns its best estimate.

#![cfg_attr(not(feature = "std"), no_std)]

pub(crate) mod algo;
pub(crate) mod besk;
pub mod machine;
#[cfg(feature = "f16")]
mod promote;
pub mod types;
pub(crate) mod utils;

#[cfg(feature = "f16")]
pub use promote::{besselk_f16, besselk_scaled_f16, besselk0_f16, besselk1_f16};
pub use machine::{BesselFloat, Precision};
pub use types::{Error, Scaling};

use besk::{besk, besk0, besk1};

// ── Order-ν functions ──

/// Modified Bessel function of the second kind, K_ν(x).
///
/// Returns `+∞` at x = 0, `0` at x = +∞ and NaN if either input is NaN.
///
/// # Errors
/// [`Error::Unsupported`] for ν < 0 or x < 0.
///
/// # Example
///
/// ```
/// use real_besselk::besselk;
///
/// // K_{1/2}(x) = √(π/2x)·e^{−x}
/// let x = 3.0_f64;
/// let expected = (std::f64::consts::PI / (2.0 * x)).sqrt() * (-x).exp();
/// let k = besselk(0.5, x).unwrap();
/// assert!((k - expected).abs() < 1e-15 * expected);
/// ```
#[inline]
pub fn besselk<T: BesselFloat>(nu: T, x: T) -> Result<T, Error> {
    besk(nu, x, Scaling::Unscaled)
}

/// Exponentially scaled K_ν(x): `e^x · K_ν(x)`.
///
/// Same domain and special values as [`besselk`].
#[inline]
pub fn besselk_scaled<T: BesselFloat>(nu: T, x: T) -> Result<T, Error> {
    besk(nu, x, Scaling::Exponential)
}

/// K_ν(x) with the scaling chosen at run time.
///
/// [`besselk`] and [`besselk_scaled`] are this function with a fixed
/// [`Scaling`].
#[inline]
pub fn besselk_raw<T: BesselFloat>(nu: T, x: T, scaling: Scaling) -> Result<T, Error> {
    besk(nu, x, scaling)
}

// ── Orders 0 and 1 ──

/// K_0(x) for x > 0.
///
/// # Errors
/// [`Error::Domain`] for x ≤ 0.
#[inline]
pub fn besselk0<T: BesselFloat>(x: T) -> Result<T, Error> {
    besk0(x, Scaling::Unscaled)
}

/// K_1(x) for x > 0.
///
/// # Errors
/// [`Error::Domain`] for x ≤ 0.
#[inline]
pub fn besselk1<T: BesselFloat>(x: T) -> Result<T, Error> {
    besk1(x, Scaling::Unscaled)
}

/// `e^x · K_0(x)` for x > 0.
#[inline]
pub fn besselk0_scaled<T: BesselFloat>(x: T) -> Result<T, Error> {
    besk0(x, Scaling::Exponential)
}

/// `e^x · K_1(x)` for x > 0.
#[inline]
pub fn besselk1_scaled<T: BesselFloat>(x: T) -> Result<T, Error> {
    besk1(x, Scaling::Exponential)
}
