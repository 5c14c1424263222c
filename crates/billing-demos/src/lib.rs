//! # billing-demos: Self-Verifying Entry Points
//!
//! Thin process layer around `billing-core`. Every binary in `src/bin/`
//! calls [`launch`] with its own [`Demo`].
//!
//! ## Startup
//! ```text
//! main()
//!   │
//!   ├── DemoConfig::load(None)      defaults → demos.toml → env (no logging yet)
//!   ├── telemetry::init(&log)       RUST_LOG or [log] filter
//!   ├── info!("Loaded demo config") reports config.source
//!   └── Demo::run()
//!         ├── println! progress lines
//!         ├── check(expected, actual)?   first mismatch → Err
//!         └── "tests passed!"
//!
//! Err(..) from main ──► exit code 1
//! ```
//!
//! ## Modules
//!
//! - [`demo`] - the six runners
//! - [`check`] - expected-vs-actual comparison
//! - [`config`] - `DemoConfig` loading
//! - [`telemetry`] - tracing subscriber setup
//! - [`error`] - `DemoError`

pub mod check;
pub mod config;
pub mod demo;
pub mod error;
pub mod telemetry;

pub use config::DemoConfig;
pub use demo::{Demo, Pattern, Style};
pub use error::{DemoError, DemoResult};

use tracing::{debug, info};

/// Loads config, installs logging, and runs `demo`.
pub fn launch(demo: Demo) -> DemoResult<()> {
    let config = DemoConfig::load(None)?;
    telemetry::init(&config.log)?;

    match &config.source {
        Some(path) => info!(path = %path.display(), "Loaded demo config"),
        None => debug!("No config file found, using defaults"),
    }
    info!(%demo, filter = %config.log.filter, "Starting demo");
    demo.run()
}
