//! Error types for SHO term construction and evaluation.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate, from builder validation through coefficient
//! correction.
//!
//! ## Design notes
//!
//! * **Plain enum**: No external error crates; `Display` is written by hand.
//! * **no_std**: `std::error::Error` is implemented only with the `std` feature.
//! * **Copyable payloads**: Floating-point payloads are stored as `f64` so the
//!   error type is independent of the term's float type.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors; callers decide whether to
//!   reject a hyperparameter proposal.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

/// Errors produced while building, updating, or evaluating a term.
#[derive(Debug, Clone, PartialEq)]
pub enum TermError {
    /// Exposure duration is not strictly positive and finite.
    InvalidExposure(f64),

    /// A hyperparameter or evaluation argument is NaN or infinite.
    InvalidNumericValue(String),

    /// Complex pole with zero decay rate and zero frequency.
    DegeneratePole {
        /// Decay rate of the pole.
        c: f64,
        /// Angular frequency of the pole.
        d: f64,
    },

    /// A required hyperparameter was never set on the builder.
    MissingParameter(&'static str),

    /// A builder setter was called more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },

    /// By-name access used a name the term does not declare.
    UnknownParameter(String),

    /// A parameter vector had the wrong number of entries.
    ParameterVectorLength {
        /// Number of entries supplied.
        got: usize,
        /// Number of parameters the term declares.
        expected: usize,
    },

    /// A bound pair has its lower limit above its upper limit.
    InvalidBounds {
        /// Name of the parameter the bounds belong to.
        parameter: &'static str,
    },
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExposure(dt) => {
                write!(f, "Invalid exposure time: {} (must be > 0 and finite)", dt)
            }
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::DegeneratePole { c, d } => write!(
                f,
                "Degenerate pole: c={}, d={} (attenuation undefined when c = d = 0)",
                c, d
            ),
            Self::MissingParameter(name) => write!(f, "Missing parameter: {}", name),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            Self::UnknownParameter(name) => write!(f, "Unknown parameter: {}", name),
            Self::ParameterVectorLength { got, expected } => write!(
                f,
                "Parameter vector length mismatch: got {}, expected {}",
                got, expected
            ),
            Self::InvalidBounds { parameter } => write!(
                f,
                "Invalid bounds for '{}' (lower bound exceeds upper bound)",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TermError {}
