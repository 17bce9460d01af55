//! Stochastically driven, damped simple harmonic oscillator term.
//!
//! ## Purpose
//!
//! This is the base decomposition the exposure correction wraps: the
//! standard celerite SHO kernel, parameterized by `log_S0`, `log_Q`, and
//! `log_omega0`.
//!
//! ## Key concepts
//!
//! With `S0 = exp(log_S0)`, `Q = exp(log_Q)`, `ω0 = exp(log_omega0)`:
//!
//! * **Overdamped** (`Q < 1/2`): two real terms, `f = sqrt(1 - 4Q²)`,
//!   `a = ½·S0·ω0·Q·(1 ± 1/f)`, `c = ½·ω0/Q·(1 ∓ f)`.
//! * **Underdamped** (`Q > 1/2`): one complex term, `f = sqrt(4Q² - 1)`,
//!   `a = S0·ω0·Q`, `b = S0·ω0·Q/f`, `c = ½·ω0/Q`, `d = ½·ω0/Q·f`.
//!
//! ## Invariants
//!
//! * Exactly one regime is non-empty for any valid hyperparameters.
//! * Output order is fixed for fixed hyperparameters.
//!
//! ## Non-goals
//!
//! * Critical damping (`Q = 1/2` exactly) has no representation in this
//!   basis and is rejected.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::bounds::Bounds;
use crate::primitives::coefficients::{ComplexCoefficient, RealCoefficient};
use crate::primitives::errors::TermError;
use crate::primitives::float::ShoFloat;
use crate::terms::term::{Parameterized, Term};

/// Parameter names of [`ShoTerm`], in vector order.
pub const SHO_PARAMETER_NAMES: [&str; 3] = ["log_S0", "log_Q", "log_omega0"];

// ============================================================================
// Hyperparameters
// ============================================================================

/// The three SHO hyperparameters, all log-transformed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShoParams<T> {
    /// Log power at `ω = 0`.
    pub log_s0: T,

    /// Log quality factor.
    pub log_q: T,

    /// Log undamped angular frequency.
    pub log_omega0: T,
}

impl<T: ShoFloat> ShoParams<T> {
    /// Check every value is finite.
    pub fn validate(&self) -> Result<(), TermError> {
        Validator::validate_sho(self.log_s0, self.log_q, self.log_omega0)
    }

    /// Real coefficient pairs for these hyperparameters (empty unless overdamped).
    pub fn real_coefficients(&self) -> Result<Vec<RealCoefficient<T>>, TermError> {
        self.validate()?;
        let one = T::one();
        let two = one + one;
        let half = one / two;
        let four = two * two;

        let q = self.log_q.exp();
        if q >= half {
            return Ok(Vec::new());
        }

        let s0 = self.log_s0.exp();
        let w0 = self.log_omega0.exp();
        let f = (one - four * q * q).sqrt();
        let amp = half * s0 * w0 * q;
        let rate = half * w0 / q;

        let out = vec![
            RealCoefficient::new(amp * (one + one / f), rate * (one - f)),
            RealCoefficient::new(amp * (one - one / f), rate * (one + f)),
        ];
        for rc in &out {
            Validator::validate_scalar(rc.a, "a")?;
            Validator::validate_scalar(rc.c, "c")?;
        }
        Ok(out)
    }

    /// Complex coefficient quadruples for these hyperparameters (empty unless underdamped).
    pub fn complex_coefficients(&self) -> Result<Vec<ComplexCoefficient<T>>, TermError> {
        self.validate()?;
        let one = T::one();
        let two = one + one;
        let half = one / two;
        let four = two * two;

        let q = self.log_q.exp();
        if q < half {
            return Ok(Vec::new());
        }

        let f = (four * q * q - one).sqrt();
        if f == T::zero() {
            return Err(TermError::InvalidNumericValue(format!(
                "log_Q={} gives critical damping (Q = 1/2)",
                self.log_q.to_f64_lossy()
            )));
        }

        let s0 = self.log_s0.exp();
        let w0 = self.log_omega0.exp();
        let a = s0 * w0 * q;
        let c = half * w0 / q;
        let coeff = ComplexCoefficient::new(a, a / f, c, c * f);

        for (v, name) in [(coeff.a, "a"), (coeff.b, "b"), (coeff.c, "c"), (coeff.d, "d")] {
            Validator::validate_scalar(v, name)?;
        }
        Ok(vec![coeff])
    }
}

// ============================================================================
// Term
// ============================================================================

/// Celerite SHO kernel term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoTerm<T> {
    params: ShoParams<T>,
    bounds: [Bounds<T>; 3],
}

impl<T: ShoFloat> ShoTerm<T> {
    /// Create a term from its three hyperparameters.
    pub fn new(log_s0: T, log_q: T, log_omega0: T) -> Result<Self, TermError> {
        Self::from_params(ShoParams {
            log_s0,
            log_q,
            log_omega0,
        })
    }

    /// Create a term from a parameter record.
    pub fn from_params(params: ShoParams<T>) -> Result<Self, TermError> {
        params.validate()?;
        Ok(Self {
            params,
            bounds: [Bounds::unbounded(); 3],
        })
    }

    /// Current hyperparameters.
    pub fn params(&self) -> ShoParams<T> {
        self.params
    }
}

impl<T: ShoFloat> Term<T> for ShoTerm<T> {
    fn real_coefficients(&self) -> Result<Vec<RealCoefficient<T>>, TermError> {
        self.params.real_coefficients()
    }

    fn complex_coefficients(&self) -> Result<Vec<ComplexCoefficient<T>>, TermError> {
        self.params.complex_coefficients()
    }
}

impl<T: ShoFloat> Parameterized<T> for ShoTerm<T> {
    fn parameter_names(&self) -> &'static [&'static str] {
        &SHO_PARAMETER_NAMES
    }

    fn parameter_vector(&self) -> Vec<T> {
        vec![self.params.log_s0, self.params.log_q, self.params.log_omega0]
    }

    fn set_parameter_vector(&mut self, vector: &[T]) -> Result<(), TermError> {
        Validator::validate_vector_len(vector, SHO_PARAMETER_NAMES.len())?;
        let params = ShoParams {
            log_s0: vector[0],
            log_q: vector[1],
            log_omega0: vector[2],
        };
        params.validate()?;
        self.params = params;
        Ok(())
    }

    fn parameter_bounds(&self) -> Vec<Bounds<T>> {
        self.bounds.to_vec()
    }

    fn set_parameter_bounds(&mut self, name: &str, bounds: Bounds<T>) -> Result<(), TermError> {
        let idx = self.parameter_index(name)?;
        Validator::validate_bounds(&bounds, SHO_PARAMETER_NAMES[idx])?;
        self.bounds[idx] = bounds;
        Ok(())
    }
}

impl<T: ShoFloat> fmt::Display for ShoTerm<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SHOTerm({}, {}, {})",
            self.params.log_s0, self.params.log_q, self.params.log_omega0
        )
    }
}
