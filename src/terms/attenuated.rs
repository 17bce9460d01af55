//! SHO term corrected for finite exposure time.
//!
//! ## Purpose
//!
//! Observations that average the signal over an exposure of length `t_exp`
//! see a kernel smoothed by a boxcar of that width. [`AttenuatedShoTerm`]
//! embeds a [`ShoTerm`] and returns its coefficients with each residue
//! rescaled by the closed-form boxcar attenuation for its pole.
//!
//! ## Design notes
//!
//! * **Composition**: The base term is embedded; only its three
//!   hyperparameters reach the base decomposition.
//! * **Stateless**: Coefficients are recomputed on every call.
//!
//! ## Invariants
//!
//! * Same number and order of real and complex terms as the base.
//! * `c`, `d` unchanged; residues linear in the base residues.
//! * Always four hyperparameters; `t_exp` is strictly positive.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

// Internal dependencies
use crate::engine::correction::{correct_complex_all, correct_real_all};
use crate::engine::validator::Validator;
use crate::primitives::bounds::Bounds;
use crate::primitives::coefficients::{ComplexCoefficient, RealCoefficient};
use crate::primitives::errors::TermError;
use crate::primitives::float::ShoFloat;
use crate::terms::sho::ShoTerm;
use crate::terms::term::{Parameterized, Term};

/// Parameter names of [`AttenuatedShoTerm`], in vector order.
pub const ATTENUATED_PARAMETER_NAMES: [&str; 4] = ["log_S0", "log_Q", "log_omega0", "t_exp"];

/// SHO kernel term integrated over a boxcar exposure of length `t_exp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttenuatedShoTerm<T> {
    base: ShoTerm<T>,
    t_exp: T,
    t_exp_bounds: Bounds<T>,
}

impl<T: ShoFloat> AttenuatedShoTerm<T> {
    /// Wrap `base` with an exposure of length `t_exp`.
    pub fn new(base: ShoTerm<T>, t_exp: T) -> Result<Self, TermError> {
        Validator::validate_exposure(t_exp)?;
        Ok(Self {
            base,
            t_exp,
            t_exp_bounds: Bounds::unbounded(),
        })
    }

    /// The embedded base term.
    pub fn base(&self) -> &ShoTerm<T> {
        &self.base
    }

    /// Exposure duration.
    pub fn t_exp(&self) -> T {
        self.t_exp
    }
}

impl<T: ShoFloat> Term<T> for AttenuatedShoTerm<T> {
    fn real_coefficients(&self) -> Result<Vec<RealCoefficient<T>>, TermError> {
        Validator::validate_exposure(self.t_exp)?;
        let base = self.base.real_coefficients()?;
        let corrected = correct_real_all(&base, self.t_exp)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            n_real = corrected.len(),
            t_exp = ?self.t_exp,
            "applied exposure attenuation to real coefficients"
        );

        Ok(corrected)
    }

    fn complex_coefficients(&self) -> Result<Vec<ComplexCoefficient<T>>, TermError> {
        Validator::validate_exposure(self.t_exp)?;
        let base = self.base.complex_coefficients()?;
        let corrected = correct_complex_all(&base, self.t_exp)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            n_complex = corrected.len(),
            t_exp = ?self.t_exp,
            "applied exposure attenuation to complex coefficients"
        );

        Ok(corrected)
    }
}

impl<T: ShoFloat> Parameterized<T> for AttenuatedShoTerm<T> {
    fn parameter_names(&self) -> &'static [&'static str] {
        &ATTENUATED_PARAMETER_NAMES
    }

    fn parameter_vector(&self) -> Vec<T> {
        let mut v = self.base.parameter_vector();
        v.push(self.t_exp);
        v
    }

    fn set_parameter_vector(&mut self, vector: &[T]) -> Result<(), TermError> {
        let result = Validator::validate_vector_len(vector, ATTENUATED_PARAMETER_NAMES.len())
            .and_then(|_| Validator::validate_exposure(vector[3]))
            .and_then(|_| self.base.set_parameter_vector(&vector[..3]));

        match result {
            Ok(()) => {
                self.t_exp = vector[3];
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %e, "rejected parameter update");
                Err(e)
            }
        }
    }

    fn parameter_bounds(&self) -> Vec<Bounds<T>> {
        let mut b = self.base.parameter_bounds();
        b.push(self.t_exp_bounds);
        b
    }

    fn set_parameter_bounds(&mut self, name: &str, bounds: Bounds<T>) -> Result<(), TermError> {
        if name == "t_exp" {
            Validator::validate_bounds(&bounds, "t_exp")?;
            self.t_exp_bounds = bounds;
            Ok(())
        } else {
            self.base.set_parameter_bounds(name, bounds)
        }
    }
}

impl<T: ShoFloat> fmt::Display for AttenuatedShoTerm<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.base.params();
        write!(
            f,
            "IntegratedSHOTerm({}, {}, {}, {})",
            p.log_s0, p.log_q, p.log_omega0, self.t_exp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> AttenuatedShoTerm<f64> {
        let base = ShoTerm::new(-4.16, 2.34, 1.13).unwrap();
        AttenuatedShoTerm::new(base, 2.0 / 60.0).unwrap()
    }

    #[test]
    fn rejects_nonpositive_exposure() {
        let base = ShoTerm::new(0.0, 0.0, 0.0).unwrap();
        assert_eq!(
            AttenuatedShoTerm::new(base, 0.0).unwrap_err(),
            TermError::InvalidExposure(0.0)
        );
        assert!(AttenuatedShoTerm::new(base, f64::NAN).is_err());
    }

    #[test]
    fn failed_update_leaves_term_unchanged() {
        let mut term = reference();
        let before = term.parameter_vector();
        assert!(term.set_parameter_vector(&[0.0, 0.0, 0.0, -1.0]).is_err());
        assert!(term.set_parameter_vector(&[f64::NAN, 0.0, 0.0, 1.0]).is_err());
        assert_eq!(term.parameter_vector(), before);
    }

    #[test]
    fn display_lists_all_four_parameters() {
        let term = reference();
        assert_eq!(
            term.to_string(),
            format!("IntegratedSHOTerm(-4.16, 2.34, 1.13, {})", 2.0 / 60.0)
        );
    }
}
