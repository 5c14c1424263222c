//! # OOP Visitor Demo
//!
//! ```bash
//! cargo run -p billing-demos --bin oop-visitor
//! ```

use billing_demos::{launch, Demo, Pattern, Style};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    launch(Demo::new(Style::Oop, Pattern::Visitor))?;
    Ok(())
}
