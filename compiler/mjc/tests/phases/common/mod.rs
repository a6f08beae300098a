//! Shared fixtures for driver tests.

use std::fs;
use std::path::{Path, PathBuf};

use mjc::{Driver, DriverConfig, DriverError, RunSummary};
use tempfile::TempDir;

/// Sources the course harness would accept in either dialect.
pub const ACCEPTED: &str = "class A { int x; void m() { return; } }";
/// A void field; rejected in either dialect.
pub const REJECTED: &str = "class A { void x; }";

/// A scratch directory of test inputs, removed on drop.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        TestDir {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `source` to `name` inside the directory.
    pub fn file(&self, name: &str, source: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, source).unwrap();
        path
    }

    pub fn subdir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir(&path).unwrap();
        path
    }
}

/// Run the driver over `path`, capturing its output.
pub fn run(path: &Path, config: DriverConfig) -> Result<(RunSummary, String), DriverError> {
    let mut driver = Driver::new(config, Vec::new());
    let summary = driver.run(path)?;
    let output = String::from_utf8(driver.into_inner()).unwrap();
    Ok((summary, output))
}

/// [`run`] with the default configuration, for inputs that must be readable.
pub fn run_ok(path: &Path) -> (RunSummary, String) {
    run(path, DriverConfig::default()).unwrap()
}
