//! K Bessel function upper interface.
//!
//! Validates (ν, x), picks exactly one evaluation method by testing the
//! regime predicates in a fixed priority order, and runs it. Regions
//! overlap (a half-integer order may also satisfy the series cutoff, an
//! integer order the Debye cutoff), so the order of the tests below decides
//! which method owns each point and must not be rearranged.

use crate::algo::kernels::{k0, k1};
use crate::algo::recur::{half_integer, up_recurrence};
use crate::algo::seri::k_series;
use crate::algo::unik::debye;
use crate::algo::wrsk::k_continued_fraction;
use crate::machine::{BesselFloat, Precision};
use crate::types::{Error, Method, Scaling};
use crate::utils::is_integer;

/// Regime selection for validated input (ν ≥ 0, x ≥ 0, neither NaN).
///
/// First match wins:
/// 1. x = 0 → [`Method::Origin`]
/// 2. x = +∞ → [`Method::Infinity`]
/// 3. ν = 0 → [`Method::OrderZero`]
/// 4. ν − ½ integer, outside the Debye region → [`Method::HalfInteger`]
/// 5. Debye region → [`Method::Debye`]
/// 6. ν integer → [`Method::Recurrence`]
/// 7. series region → [`Method::PowerSeries`]
/// 8. otherwise → [`Method::ContinuedFraction`]
pub(crate) fn select_method<T: BesselFloat>(nu: T, x: T, prec: &Precision) -> Method {
    let zero = T::zero();

    if x == zero {
        return Method::Origin;
    }
    if x == T::infinity() {
        return Method::Infinity;
    }
    if nu == zero {
        return Method::OrderZero;
    }

    let debye_region = prec.debye_cutoff(nu, x);
    if !debye_region && is_integer(nu - T::from_f64(0.5)) {
        return Method::HalfInteger;
    }
    if debye_region {
        return Method::Debye;
    }
    if is_integer(nu) {
        return Method::Recurrence;
    }
    if prec.series_cutoff(nu, x) {
        return Method::PowerSeries;
    }
    Method::ContinuedFraction
}

/// Compute K_ν(x) (or e^x·K_ν(x)) for real ν and x.
///
/// # Parameters
/// - `nu`: order ν ≥ 0
/// - `x`: argument x ≥ 0
/// - `kode`: `Unscaled` = K_ν(x), `Exponential` = e^x · K_ν(x)
///
/// # Returns
/// `+∞` at x = 0 and for infinite order, `0` at x = +∞, NaN if either
/// input is NaN.
///
/// # Errors
/// - `Unsupported`: ν < 0 or x < 0 (the result would need a reflection
///   formula or be complex-valued)
pub(crate) fn besk<T: BesselFloat>(nu: T, x: T, kode: Scaling) -> Result<T, Error> {
    let zero = T::zero();

    // ── Input validation ──
    if nu.is_nan() || x.is_nan() {
        return Ok(T::nan());
    }
    if nu < zero || x < zero {
        return Err(Error::Unsupported);
    }
    if nu == T::infinity() && x != T::infinity() {
        return Ok(T::infinity());
    }

    let prec = T::PRECISION;
    let method = select_method(nu, x, prec);
    tracing::trace!(
        nu = nu.into_f64(),
        x = x.into_f64(),
        method = ?method,
        "K regime selected"
    );

    let value = match method {
        Method::Origin => T::infinity(),
        Method::Infinity => zero,
        Method::OrderZero => k0(x, kode, prec.k0),
        Method::HalfInteger => half_integer(nu, x, kode),
        Method::Debye => debye(nu, x, kode, prec),
        Method::Recurrence => {
            let seed1 = k1(x, kode, prec.k1);
            let seed0 = k0(x, kode, prec.k0);
            up_recurrence(x, seed1, seed0, T::one(), nu).0
        }
        Method::PowerSeries => match kode {
            Scaling::Unscaled => k_series(nu, x),
            Scaling::Exponential => k_series(nu, x) * x.exp(),
        },
        Method::ContinuedFraction => k_continued_fraction(nu, x, kode),
    };
    Ok(value)
}

/// K_0(x) (or e^x·K_0(x)) for x > 0.
///
/// # Errors
/// - `Domain`: x ≤ 0 (including −0.0)
pub(crate) fn besk0<T: BesselFloat>(x: T, kode: Scaling) -> Result<T, Error> {
    if x.is_nan() {
        return Ok(x);
    }
    if x <= T::zero() {
        return Err(Error::Domain);
    }
    Ok(k0(x, kode, T::PRECISION.k0))
}

/// K_1(x) (or e^x·K_1(x)) for x > 0.
///
/// # Errors
/// - `Domain`: x ≤ 0 (including −0.0)
pub(crate) fn besk1<T: BesselFloat>(x: T, kode: Scaling) -> Result<T, Error> {
    if x.is_nan() {
        return Ok(x);
    }
    if x <= T::zero() {
        return Err(Error::Domain);
    }
    Ok(k1(x, kode, T::PRECISION.k1))
}
