//! # Decorator
//!
//! Wraps the "add three" calculation with logging and timing without
//! touching the calculation itself.
//!
//! ## Two Spellings
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fp  (closures)                     oop  (trait objects)                │
//! │  ─────────────────────────          ─────────────────────────────       │
//! │  add_three                          AddThreeLogic                       │
//! │  with_logging(f)                    AddThreeLogged::new(d)              │
//! │  with_timing(f)                     AddThreeTimed::new(d)               │
//! │                                                                         │
//! │  with_logging(with_timing(add_three))                                   │
//! │      ≡ AddThreeLogged::new(AddThreeTimed::new(AddThreeLogic))           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wrapping Order
//! Decorators never change the result. Order only changes when side effects
//! happen: the outermost decorator runs first on the way in and last on the
//! way out.
//!
//! ```text
//! Logged(Timed(logic))(7)
//!   "Attempt to add 3 into: 7"
//!       start clock ──► logic(7) = 10 ──► "Operation took 0 ms"
//!   "Resulted in: 10"
//! ```
//!
//! Both spellings emit the same `tracing` events, so swapping one for the
//! other is invisible in the logs.

pub mod fp;
pub mod oop;

use std::time::Duration;

use tracing::info;

/// The constant every variant adds.
pub const ADDEND: i32 = 3;

fn log_attempt(x: i32) {
    info!(input = x, "Attempt to add {} into: {}", ADDEND, x);
}

fn log_result(result: i32) {
    info!(result, "Resulted in: {}", result);
}

fn log_elapsed(elapsed: Duration) {
    let elapsed_ms = elapsed.as_millis() as u64;
    info!(elapsed_ms, "Operation took {} ms", elapsed_ms);
}
