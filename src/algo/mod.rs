//! Internal evaluation methods for K_ν(x).
//!
//! Each module implements one numerically distinct method, valid only in its
//! own region of the (ν, x) plane; `crate::besk` decides which one runs.
//! All functions are `pub(crate)` and assume the dispatcher has already
//! validated the inputs (x > 0, ν ≥ 0, both finite).
//!
//! # Scaling convention
//!
//! Every method takes a [`Scaling`](crate::types::Scaling) flag. Where the
//! method can fold `exp(x)` into its own exponentials (kernels, Debye,
//! half-integer closed form) it does so analytically; the power series and
//! continued fraction multiply their moderate-sized result by `exp(x)`.
//!
//! # Clippy suppressions
//!
//! Modules holding coefficient tables carry `#![allow(clippy::excessive_precision)]`:
//! the tables are written at full precision so they can be checked against
//! their derivation digit for digit.

pub(crate) mod constants;

// Gamma collaborator
pub(crate) mod gamln;

// Order 0 and 1 base cases + integer/half-integer recurrence
pub(crate) mod kernels;
pub(crate) mod recur;

// Small argument power series (K and paired I)
pub(crate) mod seri;

// Continued fraction ratio + Wronskian solve
pub(crate) mod rati;
pub(crate) mod wrsk;

// Uniform asymptotic (Debye) expansion
pub(crate) mod unik;
