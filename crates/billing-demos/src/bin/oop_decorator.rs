//! # OOP Decorator Demo
//!
//! ```bash
//! cargo run -p billing-demos --bin oop-decorator
//! ```

use billing_demos::{launch, Demo, Pattern, Style};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    launch(Demo::new(Style::Oop, Pattern::Decorator))?;
    Ok(())
}
