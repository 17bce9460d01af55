//! Floating-point trait bound shared by every term.

use core::fmt::{Debug, Display};
use num_traits::{Float, FloatConst};

/// Float types usable for kernel coefficients (`f32`, `f64`).
pub trait ShoFloat: Float + FloatConst + Debug + Display + Send + Sync + 'static {
    /// Lossy conversion used for error payloads.
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> ShoFloat for T where T: Float + FloatConst + Debug + Display + Send + Sync + 'static {}
