//! Core types for K Bessel function evaluation.

use core::fmt;

/// Scaling option for K Bessel function evaluation.
///
/// The `Exponential` variant returns `exp(x) · K_ν(x)`, which stays
/// representable long after `K_ν(x)` itself underflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scaling {
    /// No scaling applied.
    Unscaled,
    /// Exponential scaling to prevent underflow for large x.
    Exponential,
}

/// Evaluation method chosen by the regime dispatcher.
///
/// Listed in the order the dispatcher tests for them; the first applicable
/// method wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    /// x = 0: K diverges for every order.
    Origin,
    /// x = +∞: K vanishes for every order.
    Infinity,
    /// ν = 0: rational approximation of K_0.
    OrderZero,
    /// ν − ½ integer below the Debye cutoff: closed form via spherical K.
    HalfInteger,
    /// Large ν or x: uniform (Debye) asymptotic expansion.
    Debye,
    /// Integer ν: upward recurrence seeded by K_0 and K_1.
    Recurrence,
    /// Small x or ν large relative to x: direct power series.
    PowerSeries,
    /// Everything else: continued fraction plus Wronskian.
    ContinuedFraction,
}

/// Error type for K Bessel function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Argument outside the function's domain (e.g. x ≤ 0 for K_0, K_1).
    Domain,
    /// Mathematically defined but complex-valued or otherwise not
    /// implemented (x < 0, ν < 0).
    Unsupported,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain => {
                write!(f, "domain error: argument must be strictly positive")
            }
            Error::Unsupported => {
                write!(
                    f,
                    "unsupported: negative order or argument requires a complex or reflected result"
                )
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn error_messages_name_the_failure() {
        use std::string::ToString;

        assert!(Error::Domain.to_string().starts_with("domain error"));
        assert!(Error::Unsupported.to_string().starts_with("unsupported"));
    }

    #[test]
    fn error_is_copy_and_comparable() {
        let e = Error::Domain;
        let f = e;
        assert_eq!(e, f);
        assert_ne!(Error::Domain, Error::Unsupported);
    }
}
