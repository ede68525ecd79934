//! Continued fraction for the ratio K_{v+1}(x)/K_v(x).
//!
//! Steed's form of the ratio,
//!
//! ```text
//! K_{v+1}/K_v = (v + x + ½)/x + (1/x)·[a_1/(b_1 + a_2/(b_2 + …))]
//! a_j = v² − (2j − 1)²/4,   b_j = 2(x + j)
//! ```
//!
//! evaluated with the modified Lentz algorithm. Converges for every x > 0,
//! quickly once x is above about 2.

use crate::machine::BesselFloat;

const MAX_ITER: usize = 1000;

/// `K_{v+1}(x)/K_v(x)` for x > 0. `v` may be negative.
pub(crate) fn knu_ratio<T: BesselFloat>(v: T, x: T) -> T {
    let one = T::one();
    let two = T::from_f64(2.0);
    let quarter = T::from_f64(0.25);
    let tol = T::tol();
    // Stands in for a zero denominator; cancels out of the product.
    let tiny = T::min_positive_value().sqrt();

    let vv = v * v;
    let mut h = tiny;
    let mut c = tiny;
    let mut d = T::zero();
    let mut j = one;
    let mut converged = false;
    for _ in 0..MAX_ITER {
        let odd = two * j - one;
        let a = vv - odd * odd * quarter;
        let b = two * (x + j);
        c = a / c + b;
        d = (a * d + b).recip();
        let del = c * d;
        h = h * del;
        if (del - one).abs() < tol {
            converged = true;
            break;
        }
        j = j + one;
    }
    if !converged {
        tracing::debug!(
            v = v.into_f64(),
            x = x.into_f64(),
            "K ratio continued fraction reached iteration cap"
        );
    }
    (v + x + T::from_f64(0.5)) / x + h / x
}
