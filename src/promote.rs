//! Half-precision entry points.
//!
//! `f16` has too few digits for the cutoffs and tables to be worth a width
//! of their own: arguments are widened to `f32`, evaluated there, and the
//! result rounded back. Values outside the `f16` range come back as `±∞`
//! or `0`.

use half::f16;

use crate::besk::{besk, besk0, besk1};
use crate::types::{Error, Scaling};

/// K_ν(x) at half precision. See [`besselk`](crate::besselk).
pub fn besselk_f16(nu: f16, x: f16) -> Result<f16, Error> {
    besk(nu.to_f32(), x.to_f32(), Scaling::Unscaled).map(f16::from_f32)
}

/// `e^x · K_ν(x)` at half precision. See [`besselk_scaled`](crate::besselk_scaled).
pub fn besselk_scaled_f16(nu: f16, x: f16) -> Result<f16, Error> {
    besk(nu.to_f32(), x.to_f32(), Scaling::Exponential).map(f16::from_f32)
}

/// K_0(x) at half precision. See [`besselk0`](crate::besselk0).
pub fn besselk0_f16(x: f16) -> Result<f16, Error> {
    besk0(x.to_f32(), Scaling::Unscaled).map(f16::from_f32)
}

/// K_1(x) at half precision. See [`besselk1`](crate::besselk1).
pub fn besselk1_f16(x: f16) -> Result<f16, Error> {
    besk1(x.to_f32(), Scaling::Unscaled).map(f16::from_f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(x: f32) -> f16 {
        f16::from_f32(x)
    }

    fn rel(a: f16, b: f64) -> f64 {
        ((a.to_f64() - b) / b).abs()
    }

    #[test]
    fn low_orders() {
        assert!(rel(besselk0_f16(h(1.0)).unwrap(), 0.42102443824070834) < 1e-3);
        assert!(rel(besselk1_f16(h(1.0)).unwrap(), 0.60190723019723457) < 1e-3);
        assert!(rel(besselk_f16(h(2.0), h(1.0)).unwrap(), 1.6248388986351775) < 1e-3);
    }

    #[test]
    fn range_limits() {
        // K_{1/2}(20) ≈ 5.8e-10 is below the smallest f16 subnormal.
        assert_eq!(besselk_f16(h(0.5), h(20.0)).unwrap(), f16::ZERO);
        assert!(besselk_scaled_f16(h(0.5), h(20.0)).unwrap() > f16::ZERO);
        // K_5(0.1) ≈ 3.8e7 exceeds f16::MAX.
        assert_eq!(besselk_f16(h(5.0), h(0.1)).unwrap(), f16::INFINITY);
    }

    #[test]
    fn errors_and_boundaries() {
        assert_eq!(besselk0_f16(f16::ZERO), Err(Error::Domain));
        assert_eq!(besselk_f16(h(-1.0), h(1.0)), Err(Error::Unsupported));
        assert_eq!(besselk_f16(h(1.0), f16::ZERO), Ok(f16::INFINITY));
        assert!(besselk_f16(f16::NAN, h(1.0)).unwrap().is_nan());
    }
}
