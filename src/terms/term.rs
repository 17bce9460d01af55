//! The kernel-term interface consumed by a celerite-style GP solver.
//!
//! ## Purpose
//!
//! A solver needs exactly two things from a kernel term: its real coefficient
//! pairs and its complex coefficient quadruples. [`Term`] is that seam.
//! Kernel evaluation and the power spectral density are derived from the
//! coefficients, so any term (plain or exposure corrected) gets them for free.
//!
//! [`Parameterized`] is the optimizer-facing side: a fixed, ordered list of
//! named hyperparameters with vector get/set and a bounds table.
//!
//! ## Design notes
//!
//! * **Composition**: Terms wrap other terms rather than inherit from them;
//!   both traits are object safe so `&dyn Term<T>` works.
//! * **Fallible**: Decomposition returns `Result` so invalid hyperparameters
//!   surface at the point of use.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::bounds::Bounds;
use crate::primitives::coefficients::{ComplexCoefficient, RealCoefficient};
use crate::primitives::errors::TermError;
use crate::primitives::float::ShoFloat;

// ============================================================================
// Term
// ============================================================================

/// A kernel expressed as a sum of real and complex exponential basis terms.
pub trait Term<T: ShoFloat> {
    /// Real coefficient pairs `(a, c)`, in a stable order.
    fn real_coefficients(&self) -> Result<Vec<RealCoefficient<T>>, TermError>;

    /// Complex coefficient quadruples `(a, b, c, d)`, in a stable order.
    fn complex_coefficients(&self) -> Result<Vec<ComplexCoefficient<T>>, TermError>;

    /// Kernel value at lag `tau`.
    ///
    /// ```text
    /// k(τ) = Σ a·exp(-c·|τ|) + Σ exp(-c·|τ|)·(a·cos(d·|τ|) + b·sin(d·|τ|))
    /// ```
    fn value(&self, tau: T) -> Result<T, TermError> {
        Validator::validate_scalar(tau, "tau")?;
        let tau = tau.abs();

        let mut k = T::zero();
        for rc in self.real_coefficients()? {
            k = k + rc.a * (-rc.c * tau).exp();
        }
        for cc in self.complex_coefficients()? {
            let phase = cc.d * tau;
            k = k + (-cc.c * tau).exp() * (cc.a * phase.cos() + cc.b * phase.sin());
        }
        Ok(k)
    }

    /// Power spectral density at angular frequency `omega`, normalized as in celerite.
    fn psd(&self, omega: T) -> Result<T, TermError> {
        Validator::validate_scalar(omega, "omega")?;
        let two = T::one() + T::one();
        let w2 = omega * omega;

        let mut p = T::zero();
        for rc in self.real_coefficients()? {
            p = p + rc.a * rc.c / (rc.c * rc.c + w2);
        }
        for cc in self.complex_coefficients()? {
            let (a, b, c, d) = (cc.a, cc.b, cc.c, cc.d);
            let w02 = c * c + d * d;
            let num = (a * c + b * d) * w02 + (a * c - b * d) * w2;
            let den = w2 * w2 + two * (c * c - d * d) * w2 + w02 * w02;
            p = p + num / den;
        }
        Ok(T::FRAC_2_PI().sqrt() * p)
    }
}

// ============================================================================
// Parameterized
// ============================================================================

/// Named hyperparameters in a stable order, with bounds.
pub trait Parameterized<T: ShoFloat> {
    /// Parameter names, in vector order.
    fn parameter_names(&self) -> &'static [&'static str];

    /// Current parameter values, in vector order.
    fn parameter_vector(&self) -> Vec<T>;

    /// Replace every parameter at once. On error the term is left unchanged.
    fn set_parameter_vector(&mut self, vector: &[T]) -> Result<(), TermError>;

    /// Bounds table, in vector order.
    fn parameter_bounds(&self) -> Vec<Bounds<T>>;

    /// Replace the bounds of one parameter.
    fn set_parameter_bounds(&mut self, name: &str, bounds: Bounds<T>) -> Result<(), TermError>;

    /// Position of `name` in the parameter vector.
    fn parameter_index(&self, name: &str) -> Result<usize, TermError> {
        self.parameter_names()
            .iter()
            .position(|&n| n == name)
            .ok_or_else(|| TermError::UnknownParameter(String::from(name)))
    }

    /// Value of one parameter by name.
    fn get_parameter(&self, name: &str) -> Result<T, TermError> {
        let idx = self.parameter_index(name)?;
        self.parameter_vector()
            .get(idx)
            .copied()
            .ok_or_else(|| TermError::UnknownParameter(String::from(name)))
    }

    /// Set one parameter by name. On error the term is left unchanged.
    fn set_parameter(&mut self, name: &str, value: T) -> Result<(), TermError> {
        let idx = self.parameter_index(name)?;
        let mut vector = self.parameter_vector();
        if let Some(slot) = vector.get_mut(idx) {
            *slot = value;
        }
        self.set_parameter_vector(&vector)
    }

    /// `0` when every parameter lies within its bounds, `-inf` otherwise.
    fn log_prior(&self) -> T {
        let inside = self
            .parameter_vector()
            .iter()
            .zip(self.parameter_bounds())
            .all(|(&v, b)| b.contains(v));
        if inside { T::zero() } else { T::neg_infinity() }
    }
}
