//! K_ν(x) from the Wronskian, for the region between the power series and
//! the asymptotic expansion.
//!
//! `I_{ν−1}(x)·K_ν(x) + I_ν(x)·K_{ν−1}(x) = 1/x`. With the ratio
//! `H = K_ν/K_{ν−1}` from the continued fraction this gives
//! `K_ν = 1/(x·(I_{ν−1} + I_ν/H))`, where the I pair comes from its
//! power series (no cancellation, all terms positive).

use crate::algo::rati::knu_ratio;
use crate::algo::seri::i_paired_series;
use crate::machine::BesselFloat;
use crate::types::Scaling;

/// K_ν(x) via continued fraction and Wronskian. Requires x > 0, ν > 0.
pub(crate) fn k_continued_fraction<T: BesselFloat>(nu: T, x: T, kode: Scaling) -> T {
    let (i_nu, i_num1) = i_paired_series(nu, x);
    let h = knu_ratio(nu - T::one(), x);
    let k = (x * (i_num1 + i_nu / h)).recip();
    match kode {
        Scaling::Unscaled => k,
        Scaling::Exponential => k * x.exp(),
    }
}
