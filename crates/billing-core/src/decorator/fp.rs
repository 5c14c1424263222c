//! Decorators as higher-order functions.
//!
//! ```rust
//! use billing_core::decorator::fp::{add_three, with_logging, with_timing};
//!
//! let logged_and_timed = with_logging(with_timing(add_three));
//! assert_eq!(logged_and_timed(7), 10);
//! ```

use std::time::Instant;

use super::{log_attempt, log_elapsed, log_result, ADDEND};

/// A boxed calculation, for holding differently-decorated chains side by side.
pub type AddThree = Box<dyn Fn(i32) -> i32 + Send + Sync>;

/// The undecorated calculation.
pub fn add_three(x: i32) -> i32 {
    x + ADDEND
}

/// Logs the input before and the result after calling `delegate`.
pub fn with_logging<F>(delegate: F) -> impl Fn(i32) -> i32
where
    F: Fn(i32) -> i32,
{
    move |x| {
        log_attempt(x);
        let result = delegate(x);
        log_result(result);
        result
    }
}

/// Logs how long `delegate` took.
pub fn with_timing<F>(delegate: F) -> impl Fn(i32) -> i32
where
    F: Fn(i32) -> i32,
{
    move |x| {
        let start = Instant::now();
        let result = delegate(x);
        log_elapsed(start.elapsed());
        result
    }
}
