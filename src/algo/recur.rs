//! Upward recurrence in the order, and the half-integer closed form.
//!
//! `K_{ν+1}(x) = (2ν/x)·K_ν(x) + K_{ν−1}(x)` is stable in the increasing
//! direction because K grows with its order. (The companion function I
//! decays with order and must be recurred downward instead.)

use crate::algo::constants::PI;
use crate::machine::BesselFloat;
use crate::types::Scaling;

/// Recur upward from `(K_{ν₀}, K_{ν₀−1})` to `(K_ν, K_{ν−1})`.
///
/// `nu_start` is the order of `k_hi`; `nu_end − nu_start` must be a
/// non-negative integer. Takes exactly `nu_end − nu_start` steps, with no
/// convergence test; the stop test sits half a step early so a rounded
/// fractional counter never adds a step. Seeds may be scaled by a common
/// factor (e.g. eˣ); the results carry the same factor.
pub(crate) fn up_recurrence<T: BesselFloat>(x: T, k_hi: T, k_lo: T, nu_start: T, nu_end: T) -> (T, T) {
    let one = T::one();
    let two_over_x = T::from_f64(2.0) / x;
    let stop = nu_end - T::from_f64(0.5);

    let mut hi = k_hi;
    let mut lo = k_lo;
    let mut nu = nu_start;
    while nu < stop {
        let next = (nu * two_over_x).fma(hi, lo);
        lo = hi;
        hi = next;
        nu = nu + one;
    }
    (hi, lo)
}

/// Exponential-polynomial factor of K at half-integer order.
///
/// For integer `n = order ≥ 0` returns `√(2x/π)·K_{n+½}(x) = e^{−x}·s_n(x)`,
/// where `s_0 = 1`, `s_1 = 1 + 1/x` and `s_n` obeys the same recurrence as
/// K itself (orders shifted by ½). With `Exponential` scaling the `e^{−x}`
/// factor is omitted.
pub(crate) fn spherical_k<T: BesselFloat>(order: T, x: T, kode: Scaling) -> T {
    let one = T::one();

    let s = if order == T::zero() {
        one
    } else {
        let s1 = one + x.recip();
        up_recurrence(x, s1, one, T::from_f64(1.5), order + T::from_f64(0.5)).0
    };
    match kode {
        Scaling::Unscaled => s * (-x).exp(),
        Scaling::Exponential => s,
    }
}

/// K_ν(x) for half-integer ν via `K_ν(x) = √(π/2x)·spherical_k(ν − ½, x)`.
pub(crate) fn half_integer<T: BesselFloat>(nu: T, x: T, kode: Scaling) -> T {
    let prefactor = (T::from_f64(PI) / (x + x)).sqrt();
    prefactor * spherical_k(nu - T::from_f64(0.5), x, kode)
}
