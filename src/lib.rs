//! # integrated-sho — Exposure-Corrected SHO Kernels for Rust
//!
//! Covariance coefficients for a stochastically driven, damped simple
//! harmonic oscillator (SHO) Gaussian-process kernel, corrected for finite
//! exposure time.
//!
//! ## Why an exposure correction?
//!
//! Celerite-style GP solvers represent a kernel as a sum of exponential basis
//! terms:
//!
//! ```text
//! k(τ) = Σ a·exp(-c·|τ|) + Σ exp(-c·|τ|)·(a·cos(d·|τ|) + b·sin(d·|τ|))
//! ```
//!
//! The usual assumption is that each data point samples the process at an
//! instant. Real detectors integrate over an exposure of length `t_exp`, so
//! every observation is a boxcar average. Averaging suppresses oscillations
//! with periods comparable to the exposure; ignoring it biases the inferred
//! frequency and amplitude of short-period signals.
//!
//! Integrating the boxcar against each basis term has a closed form: the
//! poles `c`, `d` are unchanged and each residue is multiplied by a factor
//! that depends only on its pole and `t_exp`.
//!
//! **Real term:**
//! ```text
//! ã = a · 2 / (c·t_exp)² · (cosh(c·t_exp) - 1)
//! ```
//!
//! **Complex term:** with `(A, B)` the complex attenuation of pole `c + i·d`,
//! ```text
//! ã + i·b̃ = (a + i·b) · (A + i·B)
//! ```
//!
//! Both factors tend to 1 as `t_exp → 0`, and are evaluated through
//! half-angle identities so they stay accurate for very short exposures.
//!
//! ## Quick Start
//!
//! ```rust
//! use integrated_sho::prelude::*;
//!
//! let term = IntegratedSho::new()
//!     .log_s0(-4.16)
//!     .log_q(2.34)
//!     .log_omega0(1.13)
//!     .t_exp(2.0 / 60.0)
//!     .build()?;
//!
//! // Underdamped (Q > 1/2): one complex term, no real terms.
//! let complex = term.complex_coefficients()?;
//! assert_eq!(complex.len(), 1);
//! assert!(term.real_coefficients()?.is_empty());
//!
//! // The pole is unchanged by the correction.
//! let base = term.base().complex_coefficients()?;
//! assert_eq!(complex[0].c, base[0].c);
//! assert_eq!(complex[0].d, base[0].d);
//! # Result::<(), TermError>::Ok(())
//! ```
//!
//! ## Consuming terms generically
//!
//! A solver only needs the [`Term`](prelude::Term) trait, so plain and
//! corrected terms are interchangeable:
//!
//! ```rust
//! use integrated_sho::prelude::*;
//!
//! fn variance<K: Term<f64>>(kernel: &K) -> Result<f64, TermError> {
//!     kernel.value(0.0)
//! }
//!
//! let base = ShoTerm::new(0.0, 1.0, 0.5)?;
//! let corrected = AttenuatedShoTerm::new(base, 0.1)?;
//! let kernels: [&dyn Term<f64>; 2] = [&base, &corrected];
//! for k in kernels {
//!     assert!(k.value(0.0)?.is_finite());
//! }
//! assert!(variance(&corrected)? > 0.0);
//! # Result::<(), TermError>::Ok(())
//! ```
//!
//! ## Hyperparameters
//!
//! | Name         | Meaning                           | Constraint     |
//! |--------------|-----------------------------------|----------------|
//! | `log_S0`     | log power at `ω = 0`              | finite         |
//! | `log_Q`      | log quality factor                | finite         |
//! | `log_omega0` | log undamped angular frequency    | finite         |
//! | `t_exp`      | exposure duration                 | finite, `> 0`  |
//!
//! The order above is the parameter-vector order used by
//! [`Parameterized`](prelude::Parameterized). Updates are atomic: a rejected
//! vector leaves the term unchanged.
//!
//! ```rust
//! use integrated_sho::prelude::*;
//!
//! let mut term = IntegratedSho::new()
//!     .log_s0(0.0)
//!     .log_q(1.0)
//!     .log_omega0(0.0)
//!     .t_exp(0.5)
//!     .bounds("t_exp", Some(0.0), Some(1.0))
//!     .build()?;
//!
//! term.set_parameter("t_exp", 0.25)?;
//! assert_eq!(term.get_parameter("t_exp")?, 0.25);
//! assert_eq!(term.log_prior(), 0.0);
//!
//! assert!(term.set_parameter("t_exp", -1.0).is_err());
//! assert_eq!(term.parameter_vector(), vec![0.0, 1.0, 0.0, 0.25]);
//! # Result::<(), TermError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns `Result<_, TermError>`:
//!
//! - `InvalidExposure`: `t_exp` not strictly positive and finite.
//! - `InvalidNumericValue`: a non-finite hyperparameter or argument.
//! - `DegeneratePole`: a complex pole with `c = d = 0`.
//! - `MissingParameter` / `DuplicateParameter`: builder misuse.
//! - `UnknownParameter` / `ParameterVectorLength` / `InvalidBounds`: parameter API misuse.
//!
//! ## Features
//!
//! - `std` (default): standard library support and `std::error::Error`.
//! - `serde`: `Serialize`/`Deserialize` for coefficient and parameter records.
//! - `tracing`: `trace!`/`debug!` events on evaluation and rejected updates.
//! - `dev`: exposes internal modules for testing.
//!
//! Without `std` the crate is `no_std` + `alloc`, using `libm` through
//! `num-traits` for the transcendental functions.
//!
//! ## References
//!
//! - Foreman-Mackey, D., Agol, E., Ambikasaran, S., & Angus, R. (2017).
//!   "Fast and Scalable Gaussian Process Modeling with Applications to
//!   Astronomical Time Series"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, coefficient records, bounds, float bound.
mod primitives;

// Layer 2: Math - stable hyperbolic differences and attenuation factors.
mod math;

// Layer 3: Engine - validation and order-preserving correction.
mod engine;

// Layer 4: Terms - `Term`/`Parameterized` traits, SHO and corrected SHO.
mod terms;

// High-level fluent API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use integrated_sho::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AttenuatedShoTerm, Bounds, ComplexCoefficient, IntegratedShoBuilder as IntegratedSho,
        RealCoefficient, ShoFloat, ShoParams, ShoTerm, TermError,
    };
    pub use crate::terms::term::{Parameterized, Term};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal validation and correction.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal term implementations.
    pub mod terms {
        pub use crate::terms::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
