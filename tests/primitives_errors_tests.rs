#![cfg(feature = "dev")]

use integrated_sho::internals::primitives::errors::TermError;

#[test]
fn test_term_error_display() {
    // InvalidExposure
    let err = TermError::InvalidExposure(-0.5);
    assert_eq!(
        format!("{}", err),
        "Invalid exposure time: -0.5 (must be > 0 and finite)"
    );

    // InvalidNumericValue
    let err = TermError::InvalidNumericValue("log_Q=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: log_Q=NaN");

    // DegeneratePole
    let err = TermError::DegeneratePole { c: 0.0, d: 0.0 };
    assert_eq!(
        format!("{}", err),
        "Degenerate pole: c=0, d=0 (attenuation undefined when c = d = 0)"
    );

    // MissingParameter
    let err = TermError::MissingParameter("t_exp");
    assert_eq!(format!("{}", err), "Missing parameter: t_exp");

    // DuplicateParameter
    let err = TermError::DuplicateParameter { parameter: "log_Q" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'log_Q' was set multiple times. Each parameter can only be configured once."
    );

    // UnknownParameter
    let err = TermError::UnknownParameter("log_P".to_string());
    assert_eq!(format!("{}", err), "Unknown parameter: log_P");

    // ParameterVectorLength
    let err = TermError::ParameterVectorLength {
        got: 3,
        expected: 4,
    };
    assert_eq!(
        format!("{}", err),
        "Parameter vector length mismatch: got 3, expected 4"
    );

    // InvalidBounds
    let err = TermError::InvalidBounds { parameter: "t_exp" };
    assert_eq!(
        format!("{}", err),
        "Invalid bounds for 't_exp' (lower bound exceeds upper bound)"
    );
}

#[test]
fn test_term_error_properties() {
    let err1 = TermError::InvalidExposure(0.0);
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, TermError::MissingParameter("t_exp"));
}

#[cfg(feature = "std")]
#[test]
fn test_term_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<TermError>();
}
