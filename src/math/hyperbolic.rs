//! Cardinal hyperbolic and trigonometric functions.
//!
//! ## Purpose
//!
//! The attenuation formulas divide `cosh(x) - 1`, `cos(y) - 1` and
//! `sinh(x)·sin(y)` by the square of the scaled exposure. Evaluated
//! literally, the differences subtract two numbers that are almost exactly 1
//! for short exposures and lose every significant digit once the arguments
//! drop below about `1e-8`. The divisor can also underflow for small poles or
//! exposures. Writing every quantity through `sinh(h)/h` and `sin(h)/h`
//! avoids both problems.
//!
//! ## Key concepts
//!
//! * `cosh(x) - 1 = ½·x²·sinhc(x/2)²`
//! * `1 - cos(y) = ½·y²·sinc(y/2)²`
//! * `sinh(x)·sin(y) = x·y·sinhc(x)·sinc(y)`
//!
//! ## Invariants
//!
//! * Both functions equal 1 at the origin and keep full relative precision
//!   for arbitrarily small (including subnormal) arguments.

use num_traits::Float;

/// `sinh(h) / h`, equal to 1 at `h = 0`.
#[inline]
pub fn sinhc<T: Float>(h: T) -> T {
    if h == T::zero() {
        T::one()
    } else {
        h.sinh() / h
    }
}

/// `sin(h) / h`, equal to 1 at `h = 0`.
#[inline]
pub fn sinc<T: Float>(h: T) -> T {
    if h == T::zero() {
        T::one()
    } else {
        h.sin() / h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproduces_literal_differences_away_from_zero() {
        for &x in &[0.3_f64, 1.0, 2.5, -1.7] {
            let h = sinhc(x / 2.0);
            assert!((0.5 * x * x * h * h - (x.cosh() - 1.0)).abs() < 1e-14);
            let s = sinc(x / 2.0);
            assert!((0.5 * x * x * s * s - (1.0 - x.cos())).abs() < 1e-14);
        }
    }

    #[test]
    fn keeps_precision_near_zero() {
        let x = 1e-9_f64;
        // Literal evaluation collapses to zero here.
        assert_eq!(x.cosh() - 1.0, 0.0);
        let h = sinhc(x / 2.0);
        assert!((h * h - 1.0).abs() < 1e-15);
    }

    #[test]
    fn cardinal_functions_at_origin() {
        assert_eq!(sinhc(0.0_f64), 1.0);
        assert_eq!(sinc(0.0_f64), 1.0);
        assert!((sinhc(1e-12_f64) - 1.0).abs() < 1e-15);
        assert!((sinc(1e-300_f64) - 1.0).abs() < 1e-15);
    }
}
