//! Rational approximations of K_0(x) and K_1(x) for x > 0.
//!
//! Two branches per function:
//! - x ≤ 1: the logarithmic singularity is split off explicitly,
//!   `K_0(x) = −ln(x)·I_0(x) + R_0(x²)` and
//!   `K_1(x) = 1/x + ln(x)·I_1(x) + x·R_1(x²)`, with I_0, I_1 written as a
//!   short rational correction to their leading Taylor terms.
//! - x > 1: `√x·eˣ·K_n(x) ≈ 1 + P(1/x)/Q(1/x)`. The unscaled result applies
//!   `exp(−x/2)` twice instead of `exp(−x)` once, which keeps the product
//!   representable up to twice the argument a single exponential allows.
//!
//! The f64 tables were fitted to better than 2e-16 relative error; the f32
//! tables use lower degrees of the same forms and reach about 1e-7.

// Fitted coefficients at full precision.
#![allow(clippy::excessive_precision)]

use crate::machine::BesselFloat;
use crate::types::Scaling;
use crate::utils::{horner, rational};

/// Leading a² coefficient of the I_1 bracket, 1/(2!·3!).
const I1_A2: f64 = 1.0 / 12.0;

/// Coefficient tables for one of K_0, K_1 at one width.
#[derive(Debug)]
pub(crate) struct KernelTables {
    /// x ≤ 1: rational correction inside the I_n bracket, in a = x²/4.
    pub(crate) bracket_p: &'static [f64],
    pub(crate) bracket_q: &'static [f64],
    /// x ≤ 1: regular (non-logarithmic) part, polynomial in x².
    pub(crate) regular: &'static [f64],
    /// x > 1: rational approximation in 1/x.
    pub(crate) large_p: &'static [f64],
    pub(crate) large_q: &'static [f64],
}

pub(crate) const K0_F64: KernelTables = KernelTables {
    bracket_p: &K0_SMALL_P_F64,
    bracket_q: &K0_SMALL_Q_F64,
    regular: &K0_SMALL_R_F64,
    large_p: &K0_LARGE_P_F64,
    large_q: &K0_LARGE_Q_F64,
};

pub(crate) const K1_F64: KernelTables = KernelTables {
    bracket_p: &K1_SMALL_P_F64,
    bracket_q: &K1_SMALL_Q_F64,
    regular: &K1_SMALL_R_F64,
    large_p: &K1_LARGE_P_F64,
    large_q: &K1_LARGE_Q_F64,
};

pub(crate) const K0_F32: KernelTables = KernelTables {
    bracket_p: &K0_SMALL_P_F32,
    bracket_q: &K0_SMALL_Q_F32,
    regular: &K0_SMALL_R_F32,
    large_p: &K0_LARGE_P_F32,
    large_q: &K0_LARGE_Q_F32,
};

pub(crate) const K1_F32: KernelTables = KernelTables {
    bracket_p: &K1_SMALL_P_F32,
    bracket_q: &K1_SMALL_Q_F32,
    regular: &K1_SMALL_R_F32,
    large_p: &K1_LARGE_P_F32,
    large_q: &K1_LARGE_Q_F32,
};

// ── f64 tables ──

/// x ≤ 1: I0(x) ≈ 1 + a·(1 + P(a)/Q(a)), a = x²/4.
#[rustfmt::skip]
const K0_SMALL_P_F64: [f64; 4] = [
     0.00000000000000000e+00,
     2.50000000000000000e-01,
     9.19956264374316608e-03,
     2.99016083076144147e-04,
];

#[rustfmt::skip]
const K0_SMALL_Q_F64: [f64; 4] = [
     1.00000000000000000e+00,
    -7.43128605361384476e-02,
     2.50860439187551489e-03,
    -4.04500675963180226e-05,
];

/// x ≤ 1: K0(x) + ln(x)·I0(x), a polynomial in x².
/// Coefficient k is (ψ(k+1) + ln 2) / (4^k (k!)²).
#[rustfmt::skip]
const K0_SMALL_R_F64: [f64; 11] = [
     1.15931515658412448e-01,
     2.78982878914603105e-01,
     2.52489299321626941e-02,
     8.46035090708223024e-04,
     1.49147192992604282e-05,
     1.62710561048159834e-07,
     1.20842616500779733e-09,
     6.50869783874735473e-12,
     2.65978468063980858e-14,
     8.53109013195859483e-17,
     2.20519511779157615e-19,
];

/// x > 1: √x·eˣ·K0(x) − 1 ≈ P(1/x) / Q(1/x).
#[rustfmt::skip]
const K0_LARGE_P_F64: [f64; 9] = [
     2.53314137315500232e-01,
     3.61151451677612378e+00,
     1.85087068532741448e+01,
     4.24417292407508242e+01,
     4.33554034342485863e+01,
     1.51779884242545577e+01,
    -1.80071993582501255e+00,
    -1.37565791522168834e+00,
    -9.05175845803240647e-02,
];

#[rustfmt::skip]
const K0_LARGE_Q_F64: [f64; 9] = [
     1.00000000000000000e+00,
     1.48755171103904331e+01,
     8.19182277377233703e+01,
     2.13396297301277372e+02,
     2.79467181618163920e+02,
     1.81074290400127779e+02,
     5.34133694542870074e+01,
     5.93005249623755137e+00,
     1.53093434443558579e-01,
];

/// x ≤ 1: I1(x) ≈ (x/2)·(1 + a/2 + a²·(1/12 + P(a)/Q(a))), a = x²/4.
#[rustfmt::skip]
const K1_SMALL_P_F64: [f64; 4] = [
     0.00000000000000000e+00,
     6.94444444444444406e-03,
     1.11427421210029907e-05,
     1.74501161173003832e-06,
];

#[rustfmt::skip]
const K1_SMALL_Q_F64: [f64; 4] = [
     1.00000000000000000e+00,
    -4.83954451345755682e-02,
     1.00438726215123738e-03,
    -9.24282756580893148e-06,
];

/// x ≤ 1: (K1(x) − 1/x − ln(x)·I1(x)) / x, a polynomial in x².
/// Coefficient k is −((ψ(k+1) + ψ(k+2))/4 + ln(2)/2) / (4^k k! (k+1)!).
#[rustfmt::skip]
const K1_SMALL_R_F64: [f64; 11] = [
    -3.07965757829206210e-01,
    -8.53707197286507763e-02,
    -4.64218276647156061e-03,
    -1.12536070366305659e-04,
    -1.55928877020382066e-06,
    -1.40301637003867762e-08,
    -8.87189621929385339e-11,
    -4.16179581912039547e-13,
    -1.50662718983177591e-15,
    -4.33796765078122485e-18,
    -1.01732476114532966e-20,
];

/// x > 1: √x·eˣ·K1(x) − 1 ≈ P(1/x) / Q(1/x).
#[rustfmt::skip]
const K1_LARGE_P_F64: [f64; 9] = [
     2.53314137315500287e-01,
     4.10250490844950910e+00,
     2.56735228731506275e+01,
     8.01284365940757226e+01,
     1.33453038625702021e+02,
     1.16913737770355382e+02,
     4.94579730062890945e+01,
     8.35018425919094653e+00,
     3.55728808350821324e-01,
];

#[rustfmt::skip]
const K1_LARGE_Q_F64: [f64; 9] = [
     1.00000000000000000e+00,
     1.43399501719558060e+01,
     7.53243481442523262e+01,
     1.84372534244625484e+02,
     2.21859752336949157e+02,
     1.27446520873505534e+02,
     3.12726064513810620e+01,
     2.51252584783196875e+00,
     2.80874449648759426e-02,
];

// ── f32 tables (lower degree, same forms) ──

#[rustfmt::skip]
const K0_SMALL_P_F32: [f64; 3] = [
     0.00000000000000000e+00,
     2.50000000000000000e-01,
     1.21527777777777780e-02,
];

#[rustfmt::skip]
const K0_SMALL_Q_F32: [f64; 2] = [
     1.00000000000000000e+00,
    -6.25000000000000000e-02,
];

#[rustfmt::skip]
const K0_SMALL_R_F32: [f64; 6] = [
     1.15931515658412448e-01,
     2.78982878914603105e-01,
     2.52489299321626941e-02,
     8.46035090708223024e-04,
     1.49147192992604282e-05,
     1.62710561048159834e-07,
];

#[rustfmt::skip]
const K0_LARGE_P_F32: [f64; 4] = [
     2.53314112750134157e-01,
     5.10608438581718893e-01,
     5.70403076561249722e-02,
    -5.67693614236388436e-02,
];

#[rustfmt::skip]
const K0_LARGE_Q_F32: [f64; 4] = [
     1.00000000000000000e+00,
     2.63415484446534487e+00,
     1.50684496662361145e+00,
     1.48887766458708326e-01,
];

#[rustfmt::skip]
const K1_SMALL_P_F32: [f64; 3] = [
     0.00000000000000000e+00,
     6.94444444444444406e-03,
     1.15740740740740745e-04,
];

#[rustfmt::skip]
const K1_SMALL_Q_F32: [f64; 2] = [
     1.00000000000000000e+00,
    -3.33333333333333329e-02,
];

#[rustfmt::skip]
const K1_SMALL_R_F32: [f64; 6] = [
    -3.07965757829206210e-01,
    -8.53707197286507763e-02,
    -4.64218276647156061e-03,
    -1.12536070366305659e-04,
    -1.55928877020382066e-06,
    -1.40301637003867762e-08,
];

#[rustfmt::skip]
const K1_LARGE_P_F32: [f64; 4] = [
     2.53314163981560758e-01,
     1.05148016802805899e+00,
     1.18804244947465953e+00,
     2.76318207802820848e-01,
];

#[rustfmt::skip]
const K1_LARGE_Q_F32: [f64; 4] = [
     1.00000000000000000e+00,
     2.29553859384144321e+00,
     1.01012410871518088e+00,
     4.73043605540137899e-02,
];

/// Compute K_0(x), or eˣ·K_0(x) when `kode` is `Exponential`.
///
/// Requires x > 0; the caller performs the domain check.
pub(crate) fn k0<T: BesselFloat>(x: T, kode: Scaling, tables: &KernelTables) -> T {
    let one = T::one();

    if x > one {
        return large_argument(x, kode, tables);
    }

    let a = x * x * T::from_f64(0.25);
    let i0 = (rational(tables.bracket_p, tables.bracket_q, a) + one).fma(a, one);
    let k = horner(tables.regular, x * x) - x.ln() * i0;
    match kode {
        Scaling::Unscaled => k,
        // x ≤ 1, so exp(x) cannot overflow
        Scaling::Exponential => k * x.exp(),
    }
}

/// Compute K_1(x), or eˣ·K_1(x) when `kode` is `Exponential`.
///
/// Requires x > 0; the caller performs the domain check.
pub(crate) fn k1<T: BesselFloat>(x: T, kode: Scaling, tables: &KernelTables) -> T {
    let one = T::one();
    let half = T::from_f64(0.5);

    if x > one {
        return large_argument(x, kode, tables);
    }

    let a = x * x * T::from_f64(0.25);
    let bracket = (rational(tables.bracket_p, tables.bracket_q, a) + T::from_f64(I1_A2)) * a * a;
    let i1 = (bracket + a.fma(half, one)) * x * half;
    let k = horner(tables.regular, x * x).fma(x, x.recip()) + x.ln() * i1;
    match kode {
        Scaling::Unscaled => k,
        Scaling::Exponential => k * x.exp(),
    }
}

/// Shared x > 1 branch: `(1 + P(1/x)/Q(1/x)) / √x`, times `e^{−x}` if unscaled.
#[inline]
fn large_argument<T: BesselFloat>(x: T, kode: Scaling, tables: &KernelTables) -> T {
    let r = rational(tables.large_p, tables.large_q, x.recip()) + T::one();
    match kode {
        Scaling::Exponential => r / x.sqrt(),
        Scaling::Unscaled => {
            let ex = (-x * T::from_f64(0.5)).exp();
            r * ex / x.sqrt() * ex
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    // (x, K0(x), K1(x), e^x K0(x), e^x K1(x))
    const REFERENCE: [(f64, f64, f64, f64, f64); 9] = [
        (1e-10, 23.141782445598869, 1.0e+10, 23.141782447913048, 1.0000000001e+10),
        (0.1, 2.4270690247020166, 9.8538447808706061, 2.6823261022628944, 10.890182683049697),
        (0.5, 0.92441907122766586, 1.6564411200033009, 1.5241093857739095, 2.7310097082117857),
        (1.0, 0.42102443824070833, 0.60190723019723457, 1.144463079806895, 1.6361534862632582),
        (1.5, 0.21380556264752574, 0.27738780045684382, 0.9582100532948965, 1.243165873552553),
        (2.0, 0.11389387274953344, 0.13986588181652243, 0.84156821507077142, 1.0334768470686886),
        (10.0, 1.7780062316167652e-5, 1.8648773453825585e-5, 0.39163193443659867, 0.41076657059578875),
        (50.0, 3.4101677497894955e-23, 3.4441022267175556e-23, 0.17680715585742934, 0.17856655855881557),
        (700.0, 4.6697764316853769e-306, 4.6731107967079661e-306, 0.047362369454613572, 0.047396187653494544),
    ];

    #[test]
    fn k0_k1_reference_values_f64() {
        for (x, k0v, k1v, k0s, k1s) in REFERENCE {
            let cases = [
                ("K0", k0(x, Scaling::Unscaled, &K0_F64), k0v),
                ("K1", k1(x, Scaling::Unscaled, &K1_F64), k1v),
                ("K0 scaled", k0(x, Scaling::Exponential, &K0_F64), k0s),
                ("K1 scaled", k1(x, Scaling::Exponential, &K1_F64), k1s),
            ];
            for (name, got, expected) in cases {
                let err = rel(got, expected);
                assert!(err < 2e-15, "{name}({x}) = {got}, rel error = {err:.2e}");
            }
        }
    }

    #[test]
    fn k0_k1_reference_values_f32() {
        for (x, k0v, k1v, k0s, k1s) in REFERENCE.iter().take(8) {
            let xf = *x as f32;
            let cases = [
                ("K0", k0(xf, Scaling::Unscaled, &K0_F32), *k0v),
                ("K1", k1(xf, Scaling::Unscaled, &K1_F32), *k1v),
                ("K0 scaled", k0(xf, Scaling::Exponential, &K0_F32), *k0s),
                ("K1 scaled", k1(xf, Scaling::Exponential, &K1_F32), *k1s),
            ];
            for (name, got, expected) in cases {
                let err = rel(got as f64, expected);
                assert!(err < 1e-6, "{name}({x}) = {got}, rel error = {err:.2e}");
            }
        }
    }

    #[test]
    fn k0_positive_and_decreasing() {
        let mut prev = f64::INFINITY;
        for i in 1..=2000 {
            let x = i as f64 * 0.01;
            let v = k0(x, Scaling::Unscaled, &K0_F64);
            assert!(v > 0.0, "K0({x}) = {v}");
            assert!(v < prev, "K0 not decreasing at x = {x}");
            prev = v;
        }
    }

    #[test]
    fn branches_agree_at_one() {
        let below = 1.0 - f64::EPSILON;
        let above = 1.0 + 2.0 * f64::EPSILON;
        for (name, lo, hi) in [
            (
                "K0",
                k0(below, Scaling::Unscaled, &K0_F64),
                k0(above, Scaling::Unscaled, &K0_F64),
            ),
            (
                "K1",
                k1(below, Scaling::Unscaled, &K1_F64),
                k1(above, Scaling::Unscaled, &K1_F64),
            ),
            (
                "K0 scaled",
                k0(below, Scaling::Exponential, &K0_F64),
                k0(above, Scaling::Exponential, &K0_F64),
            ),
        ] {
            let err = rel(lo, hi);
            assert!(err < 1e-14, "{name} jumps across x = 1: {lo} vs {hi}");
        }
    }

    #[test]
    fn scaled_matches_unscaled_times_exp() {
        for x in [0.01_f64, 0.7, 1.3, 5.0, 40.0, 250.0] {
            let s0 = k0(x, Scaling::Exponential, &K0_F64);
            let u0 = k0(x, Scaling::Unscaled, &K0_F64) * x.exp();
            assert!(rel(s0, u0) < 1e-14, "K0 scaling at x = {x}");
            let s1 = k1(x, Scaling::Exponential, &K1_F64);
            let u1 = k1(x, Scaling::Unscaled, &K1_F64) * x.exp();
            assert!(rel(s1, u1) < 1e-14, "K1 scaling at x = {x}");
        }
    }

    #[test]
    fn unscaled_reaches_subnormal_range() {
        // K0(740) ≈ 2e-323: exp(-370) is applied twice, never exp(-740) once.
        let v = k0(740.0_f64, Scaling::Unscaled, &K0_F64);
        assert!(v > 0.0 && v < 1e-320);
        assert_eq!(k0(f64::INFINITY, Scaling::Unscaled, &K0_F64), 0.0);
        assert_eq!(k1(f64::INFINITY, Scaling::Exponential, &K1_F64), 0.0);
    }

    #[test]
    fn large_x_scaled_tends_to_sqrt_pi_over_2x() {
        for (x, expected0, expected1) in [
            (1e3, 0.039628321600754217, 0.03964813081296021),
            (1e10, 1.2533141372998338e-5, 1.2533141373624995e-5),
        ] {
            assert!(rel(k0(x, Scaling::Exponential, &K0_F64), expected0) < 2e-15);
            assert!(rel(k1(x, Scaling::Exponential, &K1_F64), expected1) < 2e-15);
        }
    }
}
