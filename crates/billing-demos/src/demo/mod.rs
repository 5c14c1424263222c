//! # Demo Runners
//!
//! Each (style, pattern) pair builds a few values, prints what it is doing,
//! and checks every result against the known figures.
//!
//! ```text
//! ┌─────────────┬─────────────────────────┬──────────────────────────────┐
//! │ pattern     │ inputs                  │ expected                     │
//! ├─────────────┼─────────────────────────┼──────────────────────────────┤
//! │ decorator   │ 7                       │ 10 for every wrapping        │
//! │ strategy    │ 5 × 1000, 3 × 10000     │ 35000 / 17500 / 24500, [] 0  │
//! │ visitor     │ liquor 35000 @ 20%      │ 35000 + 7000 = 42000         │
//! │             │ tobacco 5500 @ 25%      │ 5500 + 1375 = 6875           │
//! └─────────────┴─────────────────────────┴──────────────────────────────┘
//! ```

pub mod decorator;
pub mod strategy;
pub mod visitor;

use std::fmt;

use tracing::info;

use crate::error::DemoResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Closures, free functions, enums.
    Fp,
    /// Traits and wrapper types.
    Oop,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Fp => write!(f, "FP"),
            Style::Oop => write!(f, "OOP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Decorator,
    Strategy,
    Visitor,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Decorator => write!(f, "decorator"),
            Pattern::Strategy => write!(f, "strategy"),
            Pattern::Visitor => write!(f, "visitor"),
        }
    }
}

/// One runnable demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demo {
    pub style: Style,
    pub pattern: Pattern,
}

impl Demo {
    pub const fn new(style: Style, pattern: Pattern) -> Self {
        Demo { style, pattern }
    }

    /// Every demo, FP before OOP for each pattern.
    pub const ALL: [Demo; 6] = [
        Demo::new(Style::Fp, Pattern::Decorator),
        Demo::new(Style::Oop, Pattern::Decorator),
        Demo::new(Style::Fp, Pattern::Strategy),
        Demo::new(Style::Oop, Pattern::Strategy),
        Demo::new(Style::Fp, Pattern::Visitor),
        Demo::new(Style::Oop, Pattern::Visitor),
    ];

    /// Runs the demo, stopping at the first failed check.
    pub fn run(&self) -> DemoResult<()> {
        println!("running {} {} pattern..", self.style, self.pattern);

        match (self.style, self.pattern) {
            (Style::Fp, Pattern::Decorator) => decorator::run_fp()?,
            (Style::Oop, Pattern::Decorator) => decorator::run_oop()?,
            (Style::Fp, Pattern::Strategy) => strategy::run_fp()?,
            (Style::Oop, Pattern::Strategy) => strategy::run_oop()?,
            (Style::Fp, Pattern::Visitor) => visitor::run_fp()?,
            (Style::Oop, Pattern::Visitor) => visitor::run_oop()?,
        }

        info!(demo = %self, "All checks passed");
        println!("tests passed!");
        Ok(())
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.style, self.pattern)
    }
}
