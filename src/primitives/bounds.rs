//! Optional lower/upper limits on a single hyperparameter.
//!
//! ## Purpose
//!
//! Bounds are declared per parameter and exposed to optimizers as a table in
//! the same order as the parameter vector. They never clamp values; a value
//! outside its bounds only makes the term's log-prior `-inf`.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive bounds on one parameter. `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds<T> {
    /// Lower limit.
    pub lower: Option<T>,

    /// Upper limit.
    pub upper: Option<T>,
}

impl<T: Float> Bounds<T> {
    /// No limits on either side.
    pub const fn unbounded() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Create bounds from optional limits.
    pub const fn new(lower: Option<T>, upper: Option<T>) -> Self {
        Self { lower, upper }
    }

    /// Whether the lower limit does not exceed the upper limit.
    pub fn is_ordered(&self) -> bool {
        match (self.lower, self.upper) {
            (Some(lo), Some(hi)) => lo <= hi,
            _ => true,
        }
    }

    /// Whether `value` lies within the bounds (inclusive).
    pub fn contains(&self, value: T) -> bool {
        self.lower.is_none_or(|lo| value >= lo) && self.upper.is_none_or(|hi| value <= hi)
    }
}
