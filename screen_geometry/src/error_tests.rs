//! Unit tests for error.rs
//!
//! Tests the Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_input_display() {
    let err = Error::InvalidInput("screen width must be positive".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid input"));
    assert!(display.contains("screen width must be positive"));
}

#[test]
fn test_invalid_input_exact_message() {
    let err = Error::InvalidInput("near clip is 0".to_string());
    assert_eq!(format!("{}", err), "Invalid input: near clip is 0");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidInput("test".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err = Error::InvalidInput("camera".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("InvalidInput"));
    assert!(debug.contains("camera"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::InvalidInput("test".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::InvalidInput("other".to_string()));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_result_type_ok() {
    fn returns_ok() -> Result<bool> {
        Ok(true)
    }

    assert_eq!(returns_ok().unwrap(), true);
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<f32> {
        Err(Error::InvalidInput("fov".to_string()))
    }

    fn outer() -> Result<f32> {
        let value = inner()?;
        Ok(value * 2.0)
    }

    match outer() {
        Err(Error::InvalidInput(msg)) => assert_eq!(msg, "fov"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}
