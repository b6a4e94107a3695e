//! Integration tests for the Result contract
//!
//! `is_ok`/`is_err` are total and exclusive; unwrapping the wrong variant is
//! a programmer error and panics.

use rowcheck_foundation::{Error, Result};

fn ok() -> Result<i64> {
    Ok(1)
}

fn err() -> Result<i64> {
    Err(Error::relationship("Test error"))
}

#[test]
fn ok_result() {
    let result = ok();
    assert!(result.is_ok());
    assert!(!result.is_err());
    assert_eq!(result.unwrap(), 1);
}

#[test]
fn err_result() {
    let result = err();
    assert!(!result.is_ok());
    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), Error::relationship("Test error"));
}

#[test]
#[should_panic(expected = "Test error")]
fn unwrap_on_err_panics_with_the_error() {
    let _ = err().unwrap();
}

#[test]
#[should_panic(expected = "1")]
fn unwrap_err_on_ok_panics_with_the_value() {
    let _ = ok().unwrap_err();
}
