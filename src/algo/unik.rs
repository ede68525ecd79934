//! Uniform asymptotic (Debye) expansion of K_ν(x) for large ν or x.
//!
//! With `z = x/ν`, `zs = √(1 + z²)`, `p = 1/zs` and
//! `η = zs + ln(z/(1 + zs))`:
//!
//! ```text
//! K_ν(x) ≈ √(π/2ν) · e^{−νη} / √zs · Σ_k (−1)^k U_k(p) / ν^k
//! ```
//!
//! The exponent is evaluated as
//! `x − νη = ν·ln1p((1 + 1/(z + zs))/z) − ν/(z + zs)`, which never subtracts
//! two large nearly equal quantities and so keeps full relative accuracy
//! for x ≫ ν as well as ν ≫ x.

// Polynomial coefficients at full precision.
#![allow(clippy::excessive_precision)]

use crate::algo::constants::RTHPI;
use crate::machine::{BesselFloat, Precision};
use crate::types::Scaling;
use crate::utils::horner_rev;

// Debye polynomials U_0 … U_14, packed back to back. U_k has k + 1 stored
// coefficients, highest degree first, and U_k(p) = p^k · V_k(p²) where V_k
// is the stored polynomial.
#[rustfmt::skip]
pub(crate) static UK_COEFFS: [f64; 120] = [
    1.00000000000000000e+00,   -2.08333333333333333e-01,
    1.25000000000000000e-01,    3.34201388888888889e-01,
   -4.01041666666666667e-01,    7.03125000000000000e-02,
   -1.02581259645061728e+00,    1.84646267361111111e+00,
   -8.91210937500000000e-01,    7.32421875000000000e-02,
    4.66958442342624743e+00,   -1.12070026162229938e+01,
    8.78912353515625000e+00,   -2.36408691406250000e+00,
    1.12152099609375000e-01,   -2.82120725582002449e+01,
    8.46362176746007346e+01,   -9.18182415432400174e+01,
    4.25349987453884549e+01,   -7.36879435947963170e+00,
    2.27108001708984375e-01,    2.12570130039217123e+02,
   -7.65252468141181642e+02,    1.05999045252799988e+03,
   -6.99579627376132541e+02,    2.18190511744211590e+02,
   -2.64914304869515555e+01,    5.72501420974731445e-01,
   -1.91945766231840700e+03,    8.06172218173730938e+03,
   -1.35865500064341374e+04,    1.16553933368645332e+04,
   -5.30564697861340311e+03,    1.20090291321635246e+03,
   -1.08090919788394656e+02,    1.72772750258445740e+00,
    2.02042913309661486e+04,   -9.69805983886375135e+04,
    1.92547001232531532e+05,   -2.03400177280415534e+05,
    1.22200464983017460e+05,   -4.11926549688975513e+04,
    7.10951430248936372e+03,   -4.93915304773088012e+02,
    6.07404200127348304e+00,   -2.42919187900551333e+05,
    1.31176361466297720e+06,   -2.99801591853810675e+06,
    3.76327129765640400e+06,   -2.81356322658653411e+06,
    1.26836527332162478e+06,   -3.31645172484563578e+05,
    4.52187689813627263e+04,   -2.49983048181120962e+03,
    2.43805296995560639e+01,    3.28446985307203782e+06,
   -1.97068191184322269e+07,    5.09526024926646422e+07,
   -7.41051482115326577e+07,    6.63445122747290267e+07,
   -3.75671766607633513e+07,    1.32887671664218183e+07,
   -2.78561812808645469e+06,    3.08186404612662398e+05,
   -1.38860897537170405e+04,    1.10017140269246738e+02,
   -4.93292536645099620e+07,    3.25573074185765749e+08,
   -9.39462359681578403e+08,    1.55359689957058006e+09,
   -1.62108055210833708e+09,    1.10684281682301447e+09,
   -4.95889784275030309e+08,    1.42062907797533095e+08,
   -2.44740627257387285e+07,    2.24376817792244943e+06,
   -8.40054336030240853e+04,    5.51335896122020586e+02,
    8.14789096118312115e+08,   -5.86648149205184723e+09,
    1.86882075092958249e+10,   -3.46320433881587779e+10,
    4.12801855797539740e+10,   -3.30265997498007231e+10,
    1.79542137311556001e+10,   -6.56329379261928433e+09,
    1.55927986487925751e+09,   -2.25105661889415278e+08,
    1.73951075539781645e+07,   -5.49842327572288687e+05,
    3.03809051092238427e+03,   -1.46792612476956167e+10,
    1.14498237732025810e+11,   -3.99096175224466498e+11,
    8.19218669548577329e+11,   -1.09837515608122331e+12,
    1.00815810686538209e+12,   -6.45364869245376503e+11,
    2.87900649906150589e+11,   -8.78670721780232657e+10,
    1.76347306068349694e+10,   -2.16716498322379509e+09,
    1.43157876718888981e+08,   -3.87183344257261262e+06,
    1.82577554742931747e+04,    2.86464035717679043e+11,
   -2.40629790002850396e+12,    9.10934118523989896e+12,
   -2.05168994109344374e+13,    3.05651255199353206e+13,
   -3.16670885847851584e+13,    2.33483640445818409e+13,
   -1.23204913055982872e+13,    4.61272578084913197e+12,
   -1.19655288019618160e+12,    2.05914503232410016e+11,
   -2.18229277575292237e+10,    1.24700929351271032e+09,
   -2.91883881222208134e+07,    1.18838426256783253e+05,
];

/// Slots taken by U_0 … U_5, the polynomials carried at f32 width.
pub(crate) const UK_COEFFS_F32_LEN: usize = 21;

/// K_ν(x) by the Debye expansion. Requires ν > 0 and x > 0.
///
/// Sums the correction polynomials carried by `prec`, stopping early once a
/// term no longer changes the sum at working precision.
pub(crate) fn debye<T: BesselFloat>(nu: T, x: T, kode: Scaling, prec: &Precision) -> T {
    let one = T::one();
    let half = T::from_f64(0.5);

    let z = x / nu;
    let zs = z.hypot(one);
    let zzs = z + zs;

    // x − νη, i.e. the exponent of the scaled result.
    let scaled_exp = nu * ((one + zzs.recip()) / z).ln_1p() - nu / zzs;
    let exponent = match kode {
        Scaling::Unscaled => scaled_exp - x,
        Scaling::Exponential => scaled_exp,
    };

    // ν·zs = √(ν² + x²), formed without x/ν, which overflows for ν ≪ x.
    let prefactor = T::from_f64(RTHPI) / nu.hypot(x).sqrt();
    // exp applied in two halves so the product survives when exp(exponent)
    // alone would overflow or underflow.
    let ex = (exponent * half).exp();
    prefactor * ex * debye_sum(nu, x, zs, prec.uk) * ex
}

/// `Σ_k (−1)^k U_k(p)/ν^k`, with `p = 1/zs`.
fn debye_sum<T: BesselFloat>(nu: T, x: T, zs: T, coeffs: &[f64]) -> T {
    let tol = T::tol();

    let p = zs.recip();
    let p2 = p * p;
    // (−p/ν)^k = (−1/√(ν² + x²))^k
    let ratio = -nu.hypot(x).recip();

    let mut sum = T::one();
    let mut factor = T::one();
    let mut start = 1;
    let mut k = 1;
    while start + k + 1 <= coeffs.len() {
        factor = factor * ratio;
        let term = factor * horner_rev(&coeffs[start..start + k + 1], p2);
        sum = sum + term;
        if term.abs() < tol * sum.abs() {
            break;
        }
        start += k + 1;
        k += 1;
    }
    sum
}
