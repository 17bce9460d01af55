#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use integrated_sho::internals::engine::correction::{
    correct_complex, correct_complex_all, correct_real, correct_real_all,
};
use integrated_sho::internals::engine::validator::Validator;
use integrated_sho::prelude::*;

// ============================================================================
// Single Coefficient Correction
// ============================================================================

#[test]
fn test_correct_real_keeps_rate() {
    let rc = RealCoefficient::new(0.8, 1.7);
    let out = correct_real(rc, 0.3).unwrap();
    assert_eq!(out.c, 1.7);
    let x: f64 = 1.7 * 0.3;
    assert_relative_eq!(out.a, 0.8 * 2.0 / (x * x) * (x.cosh() - 1.0), max_relative = 1e-12);
}

#[test]
fn test_correct_complex_keeps_pole() {
    let cc = ComplexCoefficient::new(0.5, 0.02, 0.15, 3.1);
    let out = correct_complex(cc, 0.05).unwrap();
    assert_eq!(out.c, 0.15);
    assert_eq!(out.d, 3.1);
    assert!(out.a < cc.a);
}

#[test]
fn test_correction_is_linear_in_residue() {
    let dt = 0.2;
    let rc = RealCoefficient::new(1.25, 0.4);
    let rc2 = RealCoefficient::new(2.5, 0.4);
    assert_relative_eq!(
        correct_real(rc2, dt).unwrap().a,
        2.0 * correct_real(rc, dt).unwrap().a
    );

    let cc = ComplexCoefficient::new(0.6, -0.3, 0.2, 1.9);
    let cc2 = ComplexCoefficient::new(1.2, -0.6, 0.2, 1.9);
    let one = correct_complex(cc, dt).unwrap();
    let two = correct_complex(cc2, dt).unwrap();
    assert_relative_eq!(two.a, 2.0 * one.a);
    assert_relative_eq!(two.b, 2.0 * one.b);
    assert_eq!((two.c, two.d), (one.c, one.d));

    // Sign flip of the residue flips the output.
    let neg = correct_complex(ComplexCoefficient::new(-0.6, 0.3, 0.2, 1.9), dt).unwrap();
    assert_relative_eq!(neg.a, -one.a);
    assert_relative_eq!(neg.b, -one.b);
}

#[test]
fn test_correction_converges_to_base_for_short_exposure() {
    let rc = RealCoefficient::new(0.9, 2.0);
    let out = correct_real(rc, 1e-8).unwrap();
    assert_relative_eq!(out.a, rc.a, max_relative = 1e-6);

    let cc = ComplexCoefficient::new(0.5, 0.024, 0.149, 3.09);
    let out = correct_complex(cc, 1e-8).unwrap();
    assert_relative_eq!(out.a, cc.a, max_relative = 1e-6);
    assert_relative_eq!(out.b, cc.b, max_relative = 1e-6);
}

#[test]
fn test_overflowing_correction_rejected() {
    // c·dt far beyond the range of sinh.
    let rc = RealCoefficient::new(-0.3, 9.65);
    assert!(matches!(
        correct_real(rc, 100.0),
        Err(TermError::InvalidNumericValue(_))
    ));

    let cc = ComplexCoefficient::new(0.5, 0.024, 0.149, 3.09);
    assert!(matches!(
        correct_complex(cc, 5000.0),
        Err(TermError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        correct_complex_all(&[cc], 1e5),
        Err(TermError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Sequence Correction
// ============================================================================

#[test]
fn test_sequence_order_and_length_preserved() {
    let reals: Vec<RealCoefficient<f64>> = (1..=5)
        .map(|i| RealCoefficient::new(i as f64, 0.3 * i as f64))
        .collect();
    let out = correct_real_all(&reals, 0.5).unwrap();
    assert_eq!(out.len(), reals.len());
    for (o, r) in out.iter().zip(&reals) {
        assert_eq!(o.c, r.c);
    }

    let complexes: Vec<ComplexCoefficient<f64>> = (1..=3)
        .map(|i| ComplexCoefficient::new(1.0, 0.1, 0.1 * i as f64, i as f64))
        .collect();
    let out = correct_complex_all(&complexes, 0.5).unwrap();
    assert_eq!(out.len(), complexes.len());
    for (o, r) in out.iter().zip(&complexes) {
        assert_eq!((o.c, o.d), (r.c, r.d));
    }
}

#[test]
fn test_empty_sequences() {
    assert!(correct_real_all::<f64>(&[], 0.5).unwrap().is_empty());
    assert!(correct_complex_all::<f64>(&[], 0.5).unwrap().is_empty());
}

#[test]
fn test_sequence_with_degenerate_pole_fails() {
    let complexes = [
        ComplexCoefficient::new(1.0, 0.0, 0.2, 1.0),
        ComplexCoefficient::new(1.0, 0.0, 0.0, 0.0),
    ];
    assert_eq!(
        correct_complex_all(&complexes, 0.5).unwrap_err(),
        TermError::DegeneratePole { c: 0.0, d: 0.0 }
    );
}

// ============================================================================
// Exposure Validation
// ============================================================================

#[test]
fn test_invalid_exposure_rejected() {
    let rc = RealCoefficient::new(1.0, 1.0);
    let cc = ComplexCoefficient::new(1.0, 0.0, 1.0, 1.0);
    for &dt in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            correct_real(rc, dt),
            Err(TermError::InvalidExposure(_))
        ));
        assert!(matches!(
            correct_complex(cc, dt),
            Err(TermError::InvalidExposure(_))
        ));
    }
}

#[test]
fn test_validator_scalars() {
    assert!(Validator::validate_scalar(1.0, "x").is_ok());
    assert_eq!(
        Validator::validate_scalar(f64::NAN, "log_Q").unwrap_err(),
        TermError::InvalidNumericValue("log_Q=NaN".to_string())
    );
    assert!(Validator::validate_sho(0.0, f64::INFINITY, 0.0).is_err());
    assert!(Validator::validate_exposure(1e-300).is_ok());
}

#[test]
fn test_validator_bounds() {
    assert!(Validator::validate_bounds(&Bounds::new(Some(0.0), Some(1.0)), "t_exp").is_ok());
    assert!(Validator::validate_bounds(&Bounds::<f64>::new(None, None), "t_exp").is_ok());
    assert_eq!(
        Validator::validate_bounds(&Bounds::new(Some(2.0), Some(1.0)), "t_exp").unwrap_err(),
        TermError::InvalidBounds { parameter: "t_exp" }
    );
    assert!(Validator::validate_bounds(&Bounds::new(Some(f64::NAN), None), "log_Q").is_err());
}
