//! `add_three(7)` under every wrapping, each expected to give 10.

use billing_core::decorator::{fp, oop};

use crate::check::check;
use crate::error::DemoResult;

const INPUT: i32 = 7;
const EXPECTED: i32 = 10;

/// Prints the step header before running it, so decorator logs land under it.
fn step<F>(label: &str, calculate: F) -> DemoResult<()>
where
    F: FnOnce() -> i32,
{
    println!("[{}]", label);
    check(label, EXPECTED, calculate())
}

pub fn run_fp() -> DemoResult<()> {
    let logged = fp::with_logging(fp::add_three);
    let timed = fp::with_timing(fp::add_three);
    let logged_and_timed = fp::with_logging(fp::with_timing(fp::add_three));

    step("AddThreeLogic", || fp::add_three(INPUT))?;
    step("AddThreeLogged", || logged(INPUT))?;
    step("AddThreeTimed", || timed(INPUT))?;
    step("AddThreeLoggedAndTimed", || logged_and_timed(INPUT))?;
    Ok(())
}

pub fn run_oop() -> DemoResult<()> {
    use oop::{AddThree, AddThreeLogged, AddThreeLogic, AddThreeTimed};

    let logic = AddThreeLogic;
    let logged = AddThreeLogged::new(AddThreeLogic);
    let timed = AddThreeTimed::new(AddThreeLogic);
    let logged_and_timed = AddThreeLogged::new(AddThreeTimed::new(AddThreeLogic));

    step("AddThreeLogic", || logic.calculate(INPUT))?;
    step("AddThreeLogged", || logged.calculate(INPUT))?;
    step("AddThreeTimed", || timed.calculate(INPUT))?;
    step("AddThreeLoggedAndTimed", || logged_and_timed.calculate(INPUT))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fp_demo() {
        assert!(run_fp().is_ok());
    }

    #[test]
    fn test_oop_demo() {
        assert!(run_oop().is_ok());
    }

    #[test]
    fn test_step_fails_on_wrong_result() {
        assert!(step("off by one", || fp::add_three(INPUT) + 1).is_err());
    }
}
