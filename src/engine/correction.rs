//! Applying the exposure attenuation to a full decomposition.
//!
//! ## Purpose
//!
//! This module maps the attenuation formulas over the coefficient sequences
//! produced by a base term. It is the only place the exposure duration meets
//! the coefficients.
//!
//! ## Invariants
//!
//! * Output sequences have the same length and order as the input.
//! * Decay rates and frequencies (`c`, `d`) pass through untouched.
//! * Corrected residues are linear in the input residues.
//! * Every corrected residue is finite; overflow is reported as an error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::attenuation::{complex_attenuation, complex_mul, real_attenuation};
use crate::primitives::coefficients::{ComplexCoefficient, RealCoefficient};
use crate::primitives::errors::TermError;

/// Correct one real pair: `(a·f(c, dt), c)`.
///
/// # Errors
///
/// Fails with [`TermError::InvalidNumericValue`] when the exposure is so
/// long relative to `1/c` that the corrected residue overflows.
pub fn correct_real<T: Float>(
    coeff: RealCoefficient<T>,
    dt: T,
) -> Result<RealCoefficient<T>, TermError> {
    Validator::validate_exposure(dt)?;
    let a = coeff.a * real_attenuation(coeff.c, dt);
    Validator::validate_scalar(a, "a_tilde")?;
    Ok(RealCoefficient::new(a, coeff.c))
}

/// Correct one complex quadruple: residue times the attenuation pair.
///
/// # Errors
///
/// Fails with [`TermError::DegeneratePole`] when `c = d = 0` and with
/// [`TermError::InvalidNumericValue`] when the corrected residue is not finite.
pub fn correct_complex<T: Float>(
    coeff: ComplexCoefficient<T>,
    dt: T,
) -> Result<ComplexCoefficient<T>, TermError> {
    Validator::validate_exposure(dt)?;
    let (re, im) = complex_attenuation(coeff.c, coeff.d, dt)?;
    let (a, b) = complex_mul(coeff.a, coeff.b, re, im);
    Validator::validate_scalar(a, "a_tilde")?;
    Validator::validate_scalar(b, "b_tilde")?;
    Ok(ComplexCoefficient::new(a, b, coeff.c, coeff.d))
}

/// Correct every real pair, preserving order.
pub fn correct_real_all<T: Float>(
    coeffs: &[RealCoefficient<T>],
    dt: T,
) -> Result<Vec<RealCoefficient<T>>, TermError> {
    coeffs.iter().map(|&c| correct_real(c, dt)).collect()
}

/// Correct every complex quadruple, preserving order. Fails on the first degenerate pole.
pub fn correct_complex_all<T: Float>(
    coeffs: &[ComplexCoefficient<T>],
    dt: T,
) -> Result<Vec<ComplexCoefficient<T>>, TermError> {
    coeffs.iter().map(|&c| correct_complex(c, dt)).collect()
}
