//! # FP Visitor Demo
//!
//! ```bash
//! cargo run -p billing-demos --bin fp-visitor
//! ```

use billing_demos::{launch, Demo, Pattern, Style};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    launch(Demo::new(Style::Fp, Pattern::Visitor))?;
    Ok(())
}
