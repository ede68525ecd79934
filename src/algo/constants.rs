//! Shared mathematical constants used by multiple algorithm modules.
//!
//! Module-specific constants remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979324e+00;

/// √(π/2), leading factor of K_ν for large argument and of the Debye expansion.
pub(crate) const RTHPI: f64 = 1.25331413731550025e+00;

/// ln(2π), used in Stirling's formula.
pub(crate) const LN_2PI: f64 = 1.83787706640934548e+00;

/// log₁₀(2), used to size the Stirling recursion threshold.
pub(crate) const R1M5: f64 = 0.30102999566398120;
