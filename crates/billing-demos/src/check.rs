//! Self-checks that turn a wrong figure into a fatal [`DemoError`].

use std::fmt::Display;

use tracing::{debug, error};

use crate::error::{DemoError, DemoResult};

/// Compares a computed value with the expected one.
///
/// ```rust
/// use billing_demos::check::check;
///
/// assert!(check("add three", 10, 7 + 3).is_ok());
/// assert!(check("add three", 10, 7 + 4).is_err());
/// ```
pub fn check<T>(name: &str, expected: T, actual: T) -> DemoResult<()>
where
    T: PartialEq + Display,
{
    if expected == actual {
        debug!(check = name, %actual, "Check passed");
        return Ok(());
    }

    error!(check = name, %expected, %actual, "Check failed");
    Err(DemoError::CheckFailed {
        check: name.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_core::Money;

    #[test]
    fn test_check_passes() {
        assert!(check("net", Money::from_cents(35000), Money::from_cents(35000)).is_ok());
    }

    #[test]
    fn test_check_reports_mismatch() {
        let err = check("vat", Money::from_cents(7000), Money::from_cents(7001)).unwrap_err();
        match err {
            DemoError::CheckFailed {
                check,
                expected,
                actual,
            } => {
                assert_eq!(check, "vat");
                assert_eq!(expected, "$70.00");
                assert_eq!(actual, "$70.01");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
