//! MiniJ front-end driver.
//!
//! Runs the scanner and parser over one file, or over every file of a test
//! directory, and reports the outcome the way the course harness expects:
//!
//! ```text
//! path ──► discovery ──► [file, ...]
//!                           │
//!                           ▼
//!            Scanner ──► Parser ──► ErrorReporter
//!                                        │
//!                                        ▼
//!                    Success / Error / Compiler mismatch
//! ```
//!
//! Each file gets a fresh scanner, parser and reporter. Nothing but the
//! mismatch tally is carried from one file to the next.

pub mod commands;
pub mod config;
pub mod discovery;
pub mod driver;
mod error;

pub use config::{ConfigError, DriverConfig};
pub use driver::{check_file, check_source, Driver, RunSummary};
pub use error::DriverError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable that switches log output to an indented span tree.
pub const LOG_TREE_ENV: &str = "MJC_LOG_TREE";

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=mj_parse=debug` or `RUST_LOG=mj_lexer=trace`. Setting
/// `MJC_LOG_TREE` as well nests events under their per-file span.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        if std::env::var_os(LOG_TREE_ENV).is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
