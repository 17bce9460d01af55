//! High-level API for building exposure-corrected SHO terms.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point. It implements a fluent
//! builder that collects the four hyperparameters and optional bounds, then
//! validates everything at once in `.build()`.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; only the bounds have defaults.
//! * **Complete**: All four hyperparameters are required.
//! * **Validated**: Missing, repeated, or invalid values fail in `.build()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`IntegratedShoBuilder`] via `IntegratedSho::new()`.
//! 2. Chain `.log_s0()`, `.log_q()`, `.log_omega0()`, `.t_exp()` and any `.bounds()`.
//! 3. Call `.build()` to obtain an [`AttenuatedShoTerm`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::terms::term::Parameterized;

// Publicly re-exported types
pub use crate::primitives::bounds::Bounds;
pub use crate::primitives::coefficients::{ComplexCoefficient, RealCoefficient};
pub use crate::primitives::errors::TermError;
pub use crate::primitives::float::ShoFloat;
pub use crate::terms::attenuated::AttenuatedShoTerm;
pub use crate::terms::sho::{ShoParams, ShoTerm};

/// Fluent builder for an exposure-corrected SHO term.
#[derive(Debug, Clone)]
pub struct IntegratedShoBuilder<T: ShoFloat> {
    /// Log power at `ω = 0`.
    pub log_s0: Option<T>,

    /// Log quality factor.
    pub log_q: Option<T>,

    /// Log undamped angular frequency.
    pub log_omega0: Option<T>,

    /// Exposure duration, in the same time unit as `1 / ω0`.
    pub t_exp: Option<T>,

    /// Bounds declared per parameter name.
    pub bounds: Vec<(&'static str, Bounds<T>)>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: ShoFloat> Default for IntegratedShoBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ShoFloat> IntegratedShoBuilder<T> {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self {
            log_s0: None,
            log_q: None,
            log_omega0: None,
            t_exp: None,
            bounds: Vec::new(),
            duplicate_param: None,
        }
    }

    /// Set the log power at zero frequency.
    pub fn log_s0(mut self, value: T) -> Self {
        if self.log_s0.is_some() {
            self.duplicate_param = Some("log_S0");
        }
        self.log_s0 = Some(value);
        self
    }

    /// Set the log quality factor.
    pub fn log_q(mut self, value: T) -> Self {
        if self.log_q.is_some() {
            self.duplicate_param = Some("log_Q");
        }
        self.log_q = Some(value);
        self
    }

    /// Set the log undamped angular frequency.
    pub fn log_omega0(mut self, value: T) -> Self {
        if self.log_omega0.is_some() {
            self.duplicate_param = Some("log_omega0");
        }
        self.log_omega0 = Some(value);
        self
    }

    /// Set the exposure duration.
    pub fn t_exp(mut self, value: T) -> Self {
        if self.t_exp.is_some() {
            self.duplicate_param = Some("t_exp");
        }
        self.t_exp = Some(value);
        self
    }

    /// Declare bounds for one parameter (`log_S0`, `log_Q`, `log_omega0`, or `t_exp`).
    ///
    /// Names are checked in `.build()`.
    pub fn bounds(mut self, name: &'static str, lower: Option<T>, upper: Option<T>) -> Self {
        if self.bounds.iter().any(|(n, _)| *n == name) {
            self.duplicate_param = Some(name);
        }
        self.bounds.push((name, Bounds::new(lower, upper)));
        self
    }

    /// Validate the configuration and build the term.
    pub fn build(self) -> Result<AttenuatedShoTerm<T>, TermError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(TermError::DuplicateParameter { parameter });
        }

        let log_s0 = self.log_s0.ok_or(TermError::MissingParameter("log_S0"))?;
        let log_q = self.log_q.ok_or(TermError::MissingParameter("log_Q"))?;
        let log_omega0 = self
            .log_omega0
            .ok_or(TermError::MissingParameter("log_omega0"))?;
        let t_exp = self.t_exp.ok_or(TermError::MissingParameter("t_exp"))?;

        Validator::validate_sho(log_s0, log_q, log_omega0)?;
        Validator::validate_exposure(t_exp)?;

        let base = ShoTerm::new(log_s0, log_q, log_omega0)?;
        let mut term = AttenuatedShoTerm::new(base, t_exp)?;
        for (name, bounds) in self.bounds {
            term.set_parameter_bounds(name, bounds)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(term = %term, "built exposure-corrected SHO term");

        Ok(term)
    }
}
