//! Decorators as wrapper types around a single-method trait.
//!
//! ```rust
//! use billing_core::decorator::oop::{AddThree, AddThreeLogged, AddThreeLogic, AddThreeTimed};
//!
//! let logged_and_timed = AddThreeLogged::new(AddThreeTimed::new(AddThreeLogic));
//! assert_eq!(logged_and_timed.calculate(7), 10);
//! ```

use std::time::Instant;

use super::{log_attempt, log_elapsed, log_result, ADDEND};

pub trait AddThree {
    fn calculate(&self, x: i32) -> i32;
}

impl<T: AddThree + ?Sized> AddThree for Box<T> {
    fn calculate(&self, x: i32) -> i32 {
        (**self).calculate(x)
    }
}

impl<T: AddThree + ?Sized> AddThree for &T {
    fn calculate(&self, x: i32) -> i32 {
        (**self).calculate(x)
    }
}

/// The undecorated calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddThreeLogic;

impl AddThree for AddThreeLogic {
    fn calculate(&self, x: i32) -> i32 {
        x + ADDEND
    }
}

/// Logs the input before and the result after delegating.
#[derive(Debug, Clone)]
pub struct AddThreeLogged<D> {
    delegate: D,
}

impl<D> AddThreeLogged<D> {
    pub fn new(delegate: D) -> Self {
        AddThreeLogged { delegate }
    }
}

impl<D: AddThree> AddThree for AddThreeLogged<D> {
    fn calculate(&self, x: i32) -> i32 {
        log_attempt(x);
        let result = self.delegate.calculate(x);
        log_result(result);
        result
    }
}

/// Logs how long the delegate took.
#[derive(Debug, Clone)]
pub struct AddThreeTimed<D> {
    delegate: D,
}

impl<D> AddThreeTimed<D> {
    pub fn new(delegate: D) -> Self {
        AddThreeTimed { delegate }
    }
}

impl<D: AddThree> AddThree for AddThreeTimed<D> {
    fn calculate(&self, x: i32) -> i32 {
        let start = Instant::now();
        let result = self.delegate.calculate(x);
        log_elapsed(start.elapsed());
        result
    }
}
