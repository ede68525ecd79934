//! Power series for small argument.
//!
//! `k_series` sums K_ν directly from the reflection form
//! `K_ν = (π/2)·(I_{−ν} − I_ν)/sin(νπ)`, folding `π/sin(νπ)` into the two
//! gamma factors so that no term divides by a small sine. ν must not be an
//! integer (those orders go through recurrence instead). Near an integer the
//! two halves of each term cancel, so orders closer than [`INTEGER_GAP`]
//! switch to Temme's form for the fractional part `μ = ν − round(ν)` and
//! recur upward from there.
//!
//! `i_paired_series` sums I_ν and I_{ν−1} together for the Wronskian solve
//! in `wrsk`.

// Coefficients carried at full precision.
#![allow(clippy::excessive_precision)]

use crate::algo::constants::PI;
use crate::algo::gamln::gamma;
use crate::algo::recur::up_recurrence;
use crate::machine::BesselFloat;
use crate::utils::sinpi;

const K_MAX_ITER: usize = 1000;
const I_MAX_ITER: usize = 3000;

/// Orders within this distance of an integer avoid the reflection form.
pub(crate) const INTEGER_GAP: f64 = 0.1;

/// `−Γ₁(μ) = (1/Γ(1+μ) − 1/Γ(1−μ))/(2μ)` as a series in μ².
/// The first entry is Euler's constant γ.
#[rustfmt::skip]
const G1_COEFFS: [f64; 8] = [
    5.77215664901532861e-01,
   -4.20026350340952355e-02,
   -4.21977345555443367e-02,
    7.21894324666309954e-03,
   -2.15241674114950973e-04,
   -2.01348547807882387e-05,
    1.13302723198169588e-06,
    6.11609510448141582e-09,
];

/// K_ν(x) by power series. Requires x > 0 and non-integer ν > 0.
///
/// Always evaluated in f64 and narrowed, so the f32 result keeps the digits
/// the two-sided sum cancels. Returns `+∞` once the leading term overflows.
/// Orders within [`INTEGER_GAP`] of an integer take Temme's form, which
/// needs x ≤ 2; the series cutoff only admits them below `series_arg`.
///
/// ```text
/// K_ν(x) = ½ Σ_k (x²/4)^k/k! · [ Γ(ν)Γ(1−ν)·(x/2)^{−ν}/Γ(k+1−ν)
///                              + Γ(−ν)Γ(1+ν)·(x/2)^{ν}/Γ(k+1+ν) ]
/// ```
pub(crate) fn k_series<T: BesselFloat>(nu: T, x: T) -> T {
    T::from_f64(k_series_wide(nu.into_f64(), x.into_f64()))
}

fn k_series_wide<T: BesselFloat>(nu: T, x: T) -> T {
    let n = nu.round();
    let mu = nu - n;
    if mu.abs() >= T::from_f64(INTEGER_GAP) {
        return reflection_series(nu, x);
    }
    let (k_mu, k_mu1) = temme_pair(mu, x);
    if n == T::zero() {
        return k_mu;
    }
    up_recurrence(x, k_mu1, k_mu, mu + T::one(), nu).0
}

fn reflection_series<T: BesselFloat>(nu: T, x: T) -> T {
    let one = T::one();
    let half = T::from_f64(0.5);
    let tol = T::tol();

    let z = x * half;
    let zz = z * z;
    let zv = (nu * z.ln()).exp();

    let gam_v = gamma(nu);
    // Γ(−ν) from the reflection formula, sharing the single gamma call.
    let gam_nv = T::from_f64(PI) / (sinpi(-nu) * gam_v * nu);

    let mut lead = gam_v / zv;
    if !lead.is_finite() {
        return T::infinity();
    }
    let mut trail = gam_nv * zv;
    let mut sum = T::zero();
    let mut k = T::zero();
    for _ in 0..K_MAX_ITER {
        let term = half * (lead + trail);
        sum = sum + term;
        if !sum.is_finite() {
            return T::infinity();
        }
        if term.abs() < tol * sum.abs() {
            return sum;
        }
        let k1 = k + one;
        lead = lead * zz / (k1 * (k1 - nu));
        trail = trail * zz / (k1 * (k1 + nu));
        k = k1;
    }
    tracing::debug!(
        nu = nu.into_f64(),
        x = x.into_f64(),
        "K power series reached iteration cap"
    );
    sum
}

/// `(K_μ(x), K_{μ+1}(x))` for |μ| ≤ ½ by Temme's series.
///
/// Every coefficient is a smooth function of μ, so nothing cancels as μ → 0.
/// The terms `f_k`, `p_k`, `q_k` follow
/// `f_k = (k·f_{k−1} + p_{k−1} + q_{k−1})/(k² − μ²)`,
/// `p_k = p_{k−1}/(k − μ)`, `q_k = q_{k−1}/(k + μ)`.
fn temme_pair<T: BesselFloat>(mu: T, x: T) -> (T, T) {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);
    let tol = T::tol();

    // ln(2/x) without forming 2/x, which overflows for subnormal x.
    let log_2x = -(x * half).ln();
    let fmu = mu * log_2x;
    let (shm, chm) = (fmu.sinh(), fmu.cosh());

    // fc = μπ/sin(μπ), smu = sinh(μ·ln(2/x))/μ, both → their limits at μ = 0.
    let (fc, smu) = if mu == zero {
        (one, log_2x)
    } else {
        let pm = mu * T::from_f64(PI);
        (pm / pm.sin(), shm / mu)
    };

    // 1/Γ(1+μ) and 1/Γ(1−μ)
    let t2 = gamma(one + mu).recip();
    let t1 = (t2 * fc).recip();

    let mu2 = mu * mu;
    let mut g1 = zero;
    let mut ak = one;
    for &c in &G1_COEFFS {
        g1 = g1 - T::from_f64(c) * ak;
        ak = ak * mu2;
    }
    let g2 = (t1 + t2) * half;

    let efmu = fmu.exp();
    let mut f = (chm * g1 + smu * g2) * fc;
    let mut p = efmu * (half / t2);
    let mut q = (half / efmu) / t1;

    let cz = x * x * T::from_f64(0.25);
    let mut s1 = f;
    let mut s2 = p;
    let mut ck = one;
    let mut k = one;
    let mut converged = false;
    for _ in 0..K_MAX_ITER {
        f = (f * k + p + q) / (k * k - mu2);
        p = p / (k - mu);
        q = q / (k + mu);
        ck = ck * cz / k;
        let del = ck * f;
        s1 = s1 + del;
        s2 = s2 + ck * (p - f * k);
        if del.abs() < tol * s1.abs() {
            converged = true;
            break;
        }
        k = k + one;
    }
    if !converged {
        tracing::debug!(
            mu = mu.into_f64(),
            x = x.into_f64(),
            "Temme series reached iteration cap"
        );
    }
    (s1, s2 * (T::from_f64(2.0) / x))
}

/// `(I_ν(x), I_{ν−1}(x))` by their power series. Requires x > 0, ν > 0.
///
/// Both series share the factor `(x/2)^ν/Γ(ν+1)`; their terms are updated in
/// lockstep and summation stops once both have converged. Each I_{ν−1} term
/// is derived from the previous I_ν term, so nothing divides by ν and
/// subnormal orders stay finite.
pub(crate) fn i_paired_series<T: BesselFloat>(nu: T, x: T) -> (T, T) {
    let one = T::one();
    let tol = T::tol();

    let x2 = x * T::from_f64(0.5);
    let t2 = x2 * x2;

    let mut a = (nu * x2.ln()).exp() / gamma(nu + one);
    let mut b = a * nu / x2;
    let mut i_nu = T::zero();
    let mut i_num1 = T::zero();
    let mut k = T::zero();
    for _ in 0..I_MAX_ITER {
        i_nu = i_nu + a;
        i_num1 = i_num1 + b;
        if a.abs() < tol * i_nu.abs() && b.abs() < tol * i_num1.abs() {
            return (i_nu, i_num1);
        }
        let k1 = k + one;
        b = a * x2 / k1;
        a = a * t2 / ((nu + k1) * k1);
        k = k1;
    }
    tracing::debug!(
        nu = nu.into_f64(),
        x = x.into_f64(),
        "paired I power series reached iteration cap"
    );
    (i_nu, i_num1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn k_series_reference_values() {
        // (ν, x, K_ν(x))
        let cases = [
            (0.3, 0.5, 0.97647412438178792),
            (1.7, 1.5, 0.44583962452821624),
            (12.3, 5.0, 309.8723425471932),
            (0.25, 0.01, 6.1657412641392401),
            (0.3, 1.5, 0.21893795473217302),
            (3.2, 1.2, 5.321108337585352),
        ];
        for (nu, x, k) in cases {
            let got = k_series(nu, x);
            assert!(rel(got, k) < 1e-13, "K_{nu}({x}) = {got}, rel {:.2e}", rel(got, k));
        }
    }

    #[test]
    fn k_series_small_argument_leading_term() {
        // K_ν(x) → Γ(ν)/2 · (2/x)^ν as x → 0
        let (nu, x) = (2.5_f64, 1e-6_f64);
        let leading = 0.5 * gamma(nu) * (2.0 / x).powf(nu);
        assert!(rel(k_series(nu, x), leading) < 1e-10);
    }

    #[test]
    fn k_series_f32() {
        let got = k_series(0.3_f32, 0.5_f32);
        assert!(rel(got as f64, 0.97647412438178792) < 1e-6, "{got}");
    }

    #[test]
    fn k_series_near_integer_orders() {
        // (ν, x, K_ν(x)); the reflection form loses ~eps/|ν − n| here.
        let cases = [
            (1e-12, 0.5, 0.92441907122766586),
            (1e-12, 1.5, 0.21380556264752574),
            (1e-300, 1e-3, 7.0236888005623813),
            (1.000001, 1.5, 0.2773879429939898),
            (0.999999, 0.01, 99.973421995019751),
            (3.0001, 1.9, 0.78482081070451582),
            (2.95, 0.3, 254.52245172817056),
        ];
        for (nu, x, k) in cases {
            let got = k_series(nu, x);
            assert!(rel(got, k) < 1e-14, "K_{nu}({x}) = {got}, rel {:.2e}", rel(got, k));
        }
    }

    #[test]
    fn k_series_near_integer_f32() {
        let got = k_series(1e-12_f32, 0.5_f32);
        assert!(got > 0.0);
        assert!(rel(got as f64, 0.92441907122766586) < 1e-6, "{got}");
        let got = k_series(0.999999_f32, 0.01_f32);
        assert!(rel(got as f64, 99.973421995019751) < 1e-6, "{got}");
    }

    #[test]
    fn temme_pair_matches_reference() {
        // K_{0.05}(1), K_{1.05}(1)
        let (k_mu, k_mu1) = temme_pair(0.05_f64, 1.0);
        assert!(rel(k_mu, 0.42140935515410348) < 1e-14, "{k_mu}");
        assert!(rel(k_mu1, 0.62382898949272394) < 1e-14, "{k_mu1}");
        // K_{−μ} = K_μ
        let (k_neg, _) = temme_pair(-0.05_f64, 1.0);
        assert!(rel(k_neg, k_mu) < 1e-15);
    }

    #[test]
    fn k_series_overflow_is_infinite() {
        // (x/2)^ν underflows; the result must not become ∞ − ∞.
        assert_eq!(k_series(2.3_f64, 1e-300), f64::INFINITY);
        assert_eq!(k_series(14.3_f32, 1e-3_f32), f32::INFINITY);
        assert_eq!(k_series(3.3_f32, 1e-12_f32), f32::INFINITY);
        assert_eq!(k_series(1.2_f32, 1e-38_f32), f32::INFINITY);
        assert_eq!(k_series(2.001_f64, 1e-300), f64::INFINITY);
    }

    #[test]
    fn i_series_order_one() {
        // ν = 1 gives (I_1, I_0)
        let (i1, i0) = i_paired_series(1.0_f64, 1.0);
        assert!(rel(i1, 0.56515910399248503) < 4e-15, "I1(1) = {i1}");
        assert!(rel(i0, 1.2660658777520083) < 4e-15, "I0(1) = {i0}");
    }

    #[test]
    fn i_series_half_order_closed_form() {
        // I_{1/2}(x) = √(2/πx)·sinh x, I_{−1/2}(x) = √(2/πx)·cosh x
        let x = 3.0_f64;
        let c = (2.0 / (core::f64::consts::PI * x)).sqrt();
        let (ih, imh) = i_paired_series(0.5, x);
        assert!(rel(ih, c * x.sinh()) < 1e-14);
        assert!(rel(imh, c * x.cosh()) < 1e-14);
    }

    #[test]
    fn i_series_subnormal_order() {
        // ν → 0 gives (I_0, I_{−1}) = (I_0, I_1)
        let (i_nu, i_num1) = i_paired_series(1e-320_f64, 3.0);
        assert!(rel(i_nu, 4.8807925858650241) < 1e-14, "{i_nu}");
        assert!(rel(i_num1, 3.9533702174026094) < 1e-14, "{i_num1}");
    }

    #[test]
    fn i_series_large_argument_converges() {
        // I_0(30) ≈ 7.816722978239774e11
        let (_, i0) = i_paired_series(1.0_f64, 30.0);
        assert!(rel(i0, 7.816722978239774e11) < 1e-13, "I0(30) = {i0}");
    }
}
