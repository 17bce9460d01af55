//! Coefficient records for the semi-separable kernel decomposition.
//!
//! ## Purpose
//!
//! A celerite-style kernel is a sum of basis terms. Each real term is
//! `a·exp(-c·|τ|)` and each complex term is
//! `exp(-c·|τ|)·(a·cos(d·|τ|) + b·sin(d·|τ|))`. This module holds the records
//! describing one basis term of each kind.
//!
//! ## Invariants
//!
//! * `c` is the decay rate and `d` the angular frequency of the pole.
//! * `(a, b)` is the residue split into real and imaginary parts.
//!
//! ## Non-goals
//!
//! * This module does not validate coefficients; a decomposition may
//!   legitimately produce negative amplitudes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One real exponential-decay component `a·exp(-c·|τ|)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RealCoefficient<T> {
    /// Amplitude.
    pub a: T,

    /// Inverse decay timescale.
    pub c: T,
}

impl<T> RealCoefficient<T> {
    /// Create a real coefficient pair.
    pub const fn new(a: T, c: T) -> Self {
        Self { a, c }
    }
}

/// One damped-oscillatory component with pole `c + i·d` and residue `a + i·b`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComplexCoefficient<T> {
    /// Real part of the residue.
    pub a: T,

    /// Imaginary part of the residue.
    pub b: T,

    /// Decay rate (real part of the pole).
    pub c: T,

    /// Angular frequency (imaginary part of the pole).
    pub d: T,
}

impl<T> ComplexCoefficient<T> {
    /// Create a complex coefficient quadruple.
    pub const fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }
}
