//! Input validation for SHO hyperparameters and evaluation arguments.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any coefficient
//! is computed. It checks finiteness of hyperparameters, positivity of the
//! exposure duration, parameter-vector lengths, and bound ordering.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or otherwise correct invalid inputs.
//! * This module does not enforce parameter bounds; those only feed the log-prior.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::bounds::Bounds;
use crate::primitives::errors::TermError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for term hyperparameters.
pub struct Validator;

impl Validator {
    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), TermError> {
        if !val.is_finite() {
            return Err(TermError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate the exposure duration: strictly positive and finite.
    pub fn validate_exposure<T: Float>(dt: T) -> Result<(), TermError> {
        if !dt.is_finite() || dt <= T::zero() {
            return Err(TermError::InvalidExposure(dt.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the three SHO hyperparameters (all log-transformed, any finite value).
    pub fn validate_sho<T: Float>(log_s0: T, log_q: T, log_omega0: T) -> Result<(), TermError> {
        Self::validate_scalar(log_s0, "log_S0")?;
        Self::validate_scalar(log_q, "log_Q")?;
        Self::validate_scalar(log_omega0, "log_omega0")?;
        Ok(())
    }

    /// Validate a parameter vector's length against the declared parameter count.
    pub fn validate_vector_len<T>(vector: &[T], expected: usize) -> Result<(), TermError> {
        if vector.len() != expected {
            return Err(TermError::ParameterVectorLength {
                got: vector.len(),
                expected,
            });
        }
        Ok(())
    }

    /// Validate that a bounds pair is ordered and its limits are not NaN.
    pub fn validate_bounds<T: Float>(
        bounds: &Bounds<T>,
        parameter: &'static str,
    ) -> Result<(), TermError> {
        let has_nan = bounds.lower.is_some_and(|v| v.is_nan())
            || bounds.upper.is_some_and(|v| v.is_nan());
        if has_nan || !bounds.is_ordered() {
            return Err(TermError::InvalidBounds { parameter });
        }
        Ok(())
    }
}
