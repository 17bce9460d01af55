//! Closed-form attenuation of SHO kernel coefficients by a boxcar exposure.
//!
//! ## Purpose
//!
//! Each observation averages the process over an exposure of length `dt`.
//! Integrating the boxcar window against each basis term of the kernel
//! rescales that term's residue by a factor that depends only on its pole
//! and on `dt`. This module evaluates those factors.
//!
//! ## Formulas
//!
//! Real pole `c`:
//! ```text
//! f(c, dt) = 2 / (c·dt)² · (cosh(c·dt) - 1)
//! ```
//!
//! Complex pole `c + i·d` with residue `a + i·b`:
//! ```text
//! C1 = 2·(a·c² - a·d² + 2·b·c·d)
//! C2 = 2·(b·c² - b·d² - 2·a·c·d)
//! A  = [C1·(cosh(c·dt)·cos(d·dt) - 1) - C2·sinh(c·dt)·sin(d·dt)] / (dt²·(c² + d²)²)
//! B  = [C2·(cosh(c·dt)·cos(d·dt) - 1) + C1·sinh(c·dt)·sin(d·dt)] / (dt²·(c² + d²)²)
//! ```
//!
//! The attenuation pair `(A, B)` is taken at unit residue `(1, 0)` so it is a
//! function of the pole alone; the corrected residue is then the complex
//! product `(a + i·b)·(A + i·B)`.
//!
//! ## Invariants
//!
//! * `f → 1` and `(A, B) → (1, 0)` as `dt → 0`.
//! * Factors are independent of the residue.
//! * No intermediate scales with a power of `dt` or of the pole, so the
//!   factors stay finite however small either gets.
//!
//! ## Non-goals
//!
//! * This module does not validate `dt`; see the engine validator.
//! * No numerical integration; everything is analytic.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::hyperbolic::{sinc, sinhc};
use crate::primitives::errors::TermError;

/// Real attenuation factor `f(c, dt)`.
///
/// Evaluated as `(sinh(h) / h)²` with `h = c·dt / 2`, which equals
/// `2·(cosh(c·dt) - 1) / (c·dt)²` exactly and is 1 at `c·dt = 0`.
#[inline]
pub fn real_attenuation<T: Float>(c: T, dt: T) -> T {
    let h = c * dt / (T::one() + T::one());
    let r = sinhc(h);
    r * r
}

/// Intermediate weights `(C1, C2)` for residue `a + i·b` and pole `c + i·d`.
///
/// Equivalent to `2·(a + i·b)·(c - i·d)²`.
#[inline]
pub fn pole_weights<T: Float>(a: T, b: T, c: T, d: T) -> (T, T) {
    let two = T::one() + T::one();
    let c2 = c * c;
    let d2 = d * d;
    let cd = c * d;
    let c1 = two * (a * c2 - a * d2 + two * b * cd);
    let c2w = two * (b * c2 - b * d2 - two * a * cd);
    (c1, c2w)
}

/// Complex attenuation pair `(A, B)` for pole `c + i·d`.
///
/// The weights are taken on the unit pole `(p, q) = (c, d) / |c + i·d|` and
/// both hyperbolic terms are divided by `u² = |c + i·d|²·dt²` analytically,
/// so `dt²·(c² + d²)²` is never formed:
///
/// ```text
/// even / u² = ½·(p²·sinhc(x/2)²·cos(y) - q²·sinc(y/2)²)
/// odd  / u² = p·q·sinhc(x)·sinc(y)
/// ```
///
/// with `x = c·dt`, `y = d·dt`. Tiny poles or exposures reduce to `(1, 0)`.
///
/// # Errors
///
/// Returns [`TermError::DegeneratePole`] when `c = d = 0`.
pub fn complex_attenuation<T: Float>(c: T, d: T, dt: T) -> Result<(T, T), TermError> {
    let r = c.hypot(d);
    if r == T::zero() {
        return Err(TermError::DegeneratePole {
            c: c.to_f64().unwrap_or(f64::NAN),
            d: d.to_f64().unwrap_or(f64::NAN),
        });
    }

    let two = T::one() + T::one();
    let (p, q) = (c / r, d / r);
    let (c1, c2) = pole_weights(T::one(), T::zero(), p, q);

    let x = c * dt;
    let y = d * dt;
    let sh = sinhc(x / two);
    let sn = sinc(y / two);
    let even = (p * p * sh * sh * y.cos() - q * q * sn * sn) / two;
    let odd = p * q * sinhc(x) * sinc(y);

    let a = c1 * even - c2 * odd;
    let b = c2 * even + c1 * odd;
    Ok((a, b))
}

/// Product `(a + i·b)·(re + i·im)` as `(real, imag)`.
#[inline]
pub fn complex_mul<T: Float>(a: T, b: T, re: T, im: T) -> (T, T) {
    (a * re - b * im, a * im + b * re)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pole_weights_match_complex_form() {
        // 2·(a + ib)·(c - id)² with a=1.5, b=-0.5, c=0.3, d=2.0
        let (a, b, c, d) = (1.5_f64, -0.5, 0.3, 2.0);
        let (sq_re, sq_im) = complex_mul(c, -d, c, -d);
        let (re, im) = complex_mul(a, b, sq_re, sq_im);
        let (c1, c2) = pole_weights(a, b, c, d);
        assert!((c1 - 2.0 * re).abs() < 1e-12);
        assert!((c2 - 2.0 * im).abs() < 1e-12);
    }

    #[test]
    fn degenerate_pole_is_rejected() {
        let err = complex_attenuation(0.0_f64, 0.0, 0.1).unwrap_err();
        assert_eq!(err, TermError::DegeneratePole { c: 0.0, d: 0.0 });
    }

    #[test]
    fn pure_decay_pole_matches_real_factor() {
        // With d = 0 the complex factor reduces to the real one.
        let (a, b) = complex_attenuation(0.7_f64, 0.0, 0.4).unwrap();
        assert!((a - real_attenuation(0.7, 0.4)).abs() < 1e-12);
        assert!(b.abs() < 1e-15);
    }
}
