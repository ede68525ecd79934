//! Gamma function collaborator for the power series.
//!
//! `ln_gamma` uses table lookup for integer arguments 1..100 and Stirling's
//! asymptotic expansion otherwise. `gamma` reduces its argument to [1, 2)
//! first so the exponential of the Stirling result carries almost no error.

// Tabulated values, kept at full precision.
#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

use crate::algo::constants::{LN_2PI, R1M5};
use crate::machine::BesselFloat;

/// Above this argument `gamma` exponentiates `ln_gamma` directly instead of
/// reducing to [1, 2) by repeated multiplication.
const REDUCTION_LIMIT: f64 = 30.0;

/// ln(Γ(n)) for n = 1, 2, ..., 100.
///
/// Used for fast table lookup when the argument is a positive integer ≤ 100.
/// Γ(1) = Γ(2) = 1, so ln(Γ(1)) = ln(Γ(2)) = 0.
#[rustfmt::skip]
const GLN_TABLE: [f64; 100] = [
    0.00000000000000000e+00,  0.00000000000000000e+00,  // Γ(1)=1, Γ(2)=1
    6.93147180559945309e-01,  1.79175946922805500e+00,  // Γ(3)=2, Γ(4)=6
    3.17805383034794562e+00,  4.78749174278204599e+00,
    6.57925121201010100e+00,  8.52516136106541430e+00,
    1.06046029027452502e+01,  1.28018274800814696e+01,
    1.51044125730755153e+01,  1.75023078458738858e+01,
    1.99872144956618861e+01,  2.25521638531234229e+01,
    2.51912211827386815e+01,  2.78992713838408916e+01,
    3.06718601060806728e+01,  3.35050734501368889e+01,
    3.63954452080330536e+01,  3.93398841871994940e+01,
    4.23356164607534850e+01,  4.53801388984769080e+01,
    4.84711813518352239e+01,  5.16066755677643736e+01,
    5.47847293981123192e+01,  5.80036052229805199e+01,
    6.12617017610020020e+01,  6.45575386270063311e+01,
    6.78897431371815350e+01,  7.12570389671680090e+01,
    7.46582363488301644e+01,  7.80922235533153106e+01,
    8.15579594561150372e+01,  8.50544670175815174e+01,
    8.85808275421976788e+01,  9.21361756036870925e+01,
    9.57196945421432025e+01,  9.93306124547874269e+01,
    1.02968198614513813e+02,  1.06631760260643459e+02,
    1.10320639714757395e+02,  1.14034211781461703e+02,
    1.17771881399745072e+02,  1.21533081515438634e+02,
    1.25317271149356895e+02,  1.29123933639127215e+02,
    1.32952575035616310e+02,  1.36802722637326368e+02,
    1.40673923648234259e+02,  1.44565743946344886e+02,
    1.48477766951773032e+02,  1.52409592584497358e+02,
    1.56360836303078785e+02,  1.60331128216630907e+02,
    1.64320112263195181e+02,  1.68327445448427652e+02,
    1.72352797139162802e+02,  1.76395848406997352e+02,
    1.80456291417543771e+02,  1.84533828861449491e+02,
    1.88628173423671591e+02,  1.92739047287844902e+02,
    1.96866181672889994e+02,  2.01009316399281527e+02,
    2.05168199482641199e+02,  2.09342586752536836e+02,
    2.13532241494563261e+02,  2.17736934113954227e+02,
    2.21956441819130334e+02,  2.26190548323727593e+02,
    2.30439043565776952e+02,  2.34701723442818268e+02,
    2.38978389561834323e+02,  2.43268849002982714e+02,
    2.47572914096186884e+02,  2.51890402209723194e+02,
    2.56221135550009525e+02,  2.60564940971863209e+02,
    2.64921649798552801e+02,  2.69291097651019823e+02,
    2.73673124285693704e+02,  2.78067573440366143e+02,
    2.82474292687630396e+02,  2.86893133295426994e+02,
    2.91323950094270308e+02,  2.95766601350760624e+02,
    3.00220948647014132e+02,  3.04686856765668715e+02,
    3.09164193580146922e+02,  3.13652829949879062e+02,
    3.18152639620209327e+02,  3.22663499126726177e+02,
    3.27185287703775217e+02,  3.31717887196928473e+02,
    3.36261181979198477e+02,  3.40815058870799018e+02,
    3.45379407062266854e+02,  3.49954118040770237e+02,
    3.54539085519440809e+02,  3.59134205369575399e+02,
];

/// Coefficients of the asymptotic expansion for ln(Γ(z)).
///
/// These are related to the Bernoulli numbers B_{2k}:
///   CF(k) = B_{2k} / (2k * (2k-1))
/// for k = 1, 2, ..., 22.
#[rustfmt::skip]
const CF_TABLE: [f64; 22] = [
     8.33333333333333333e-02,   // B2/(1*2)    = 1/12
    -2.77777777777777778e-03,   // B4/(3*4)    = -1/360
     7.93650793650793651e-04,   // B6/(5*6)
    -5.95238095238095238e-04,   // B8/(7*8)
     8.41750841750841751e-04,   // B10/(9*10)
    -1.91752691752691753e-03,   // B12/(11*12)
     6.41025641025641026e-03,   // B14/(13*14)
    -2.95506535947712418e-02,   // B16/(15*16)
     1.79644372368830573e-01,   // B18/(17*18)
    -1.39243221690590112e+00,   // B20/(19*20)
     1.34028640441683920e+01,   // B22/(21*22)
    -1.56848284626002017e+02,
     2.19310333333333333e+03,
    -3.61087712537249894e+04,
     6.91472268851313067e+05,
    -1.52382215394074162e+07,
     3.82900751391414141e+08,
    -1.08822660357843911e+10,
     3.47320283765002252e+11,
    -1.23696021422692745e+13,
     4.88788064793079335e+14,
    -2.13203339609193739e+16,
];

/// Compute ln(Γ(z)) for z > 0.
///
/// Positive integers up to 100 are read from the table. Anything else goes
/// through Stirling's series, after shifting z up by an integer until the
/// series converges at working precision.
///
/// Returns NaN for z ≤ 0; callers only pass positive orders.
pub(crate) fn ln_gamma<T: BesselFloat>(z: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);

    if z.is_nan() || z <= zero {
        return T::nan();
    }

    if z <= T::from_f64(100.0) && z.fract() == zero {
        if let Some(n) = z.to_usize() {
            return T::from_f64(GLN_TABLE[n - 1]);
        }
    }

    // Smallest argument at which the series reaches full precision:
    // 1.8 + 0.3875·(decimal digits − 3), decimal digits clamped to [3, 20].
    let decimal_digits = T::from_f64(R1M5) * (one - T::tol().log2());
    let excess = decimal_digits.min(T::from_f64(20.0)).max(T::from_f64(3.0)) - T::from_f64(3.0);
    let threshold = (T::from_f64(1.8) + T::from_f64(0.3875) * excess).floor() + one;

    let shift = if z < threshold { threshold - z.floor() } else { zero };
    let shifted = z + shift;

    // S(w) = Σ_k CF_k · w^{−(2k−1)}
    let cutoff = (T::from_f64(2.0) * T::tol()).max(T::from_f64(0.5e-18));
    let inv = shifted.recip();
    let first = T::from_f64(CF_TABLE[0]) * inv;
    let mut series = first;
    if inv >= cutoff {
        let inv_sq = inv * inv;
        let negligible = first * cutoff;
        let mut power = inv;
        for &c in &CF_TABLE[1..] {
            power = power * inv_sq;
            let term = T::from_f64(c) * power;
            if term.abs() < negligible {
                break;
            }
            series = series + term;
        }
    }

    // ln Γ(w) = w(ln w − 1) + ½(ln 2π − ln w) + S(w)
    let ln_w = shifted.ln();
    let stirling = shifted * (ln_w - one) + half * (T::from_f64(LN_2PI) - ln_w) + series;
    if shift == zero {
        return stirling;
    }

    // Γ(z) = Γ(z + n) / (z·(z+1)·…·(z+n−1))
    let mut product = one;
    let mut k = zero;
    while k < shift {
        product = product * (z + k);
        k = k + one;
    }
    stirling - product.ln()
}

/// Compute Γ(z) for z > 0 in the working width `T`.
///
/// The evaluation itself runs in f64 whatever `T` is, then narrows. For
/// moderate z the argument is first shifted into [1, 2), where ln Γ is
/// small and its exponential loses nothing to the logarithm's rounding.
///
/// Returns NaN for z ≤ 0 and +∞ once Γ(z) overflows f64.
pub(crate) fn gamma<T: BesselFloat>(z: T) -> T {
    T::from_f64(gamma_f64(z.into_f64()))
}

fn gamma_f64(z: f64) -> f64 {
    if z.is_nan() || z <= 0.0 {
        return f64::NAN;
    }
    if z > REDUCTION_LIMIT {
        return ln_gamma(z).exp();
    }

    let mut r = z;
    let mut scale = 1.0;
    // Γ(r) = Γ(r + 1) / r
    while r < 1.0 {
        scale /= r;
        r += 1.0;
    }
    // Γ(r) = (r - 1) Γ(r - 1)
    while r >= 2.0 {
        r -= 1.0;
        scale *= r;
    }
    scale * ln_gamma(r).exp()
}
