// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Driver tests over real files on disk.
//!
//! # Organization
//!
//! - `batch/` - directory runs: ordering, expectations by name, mismatches
//! - `single/` - one-file runs through the driver and the `lex` command
//! - `common/` - temporary test directories
//!
//! # Running
//!
//! ```bash
//! cargo test -p mjc --test phases
//! cargo test -p mjc --test phases batch
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/batch/mod.rs"]
mod batch;

#[path = "phases/single/mod.rs"]
mod single;
