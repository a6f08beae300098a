//! Checking files and reporting outcomes.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use mj_diagnostic::ErrorReporter;
use mj_ir::Dialect;
use mj_lexer::Scanner;
use mj_parse::Parser;
use tracing::{debug, debug_span};

use crate::discovery::{collect_inputs, expects_failure};
use crate::{DriverConfig, DriverError};

const SEPARATOR: &str = "---------------------------";

/// Scan and parse in-memory source. `name` is stamped on the diagnostics.
pub fn check_source(source: &str, name: &str, dialect: Dialect) -> ErrorReporter {
    let reporter = ErrorReporter::for_file(name);
    mj_parse::parse(source, dialect, &reporter);
    reporter
}

/// Scan and parse the file at `path`, streaming it through the scanner.
pub fn check_file(path: &Path, dialect: Dialect) -> Result<ErrorReporter, DriverError> {
    let file = File::open(path).map_err(|e| DriverError::read(path, e))?;
    let reporter = ErrorReporter::for_file(path.display().to_string());
    let scanner = Scanner::from_reader(BufReader::new(file), dialect, &reporter)
        .map_err(|e| DriverError::read(path, e))?;
    Parser::new(scanner, &reporter).parse();
    Ok(reporter)
}

/// Outcome of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    /// Rejected files in a single-file run; mismatches in a directory run.
    pub failed: usize,
}

impl RunSummary {
    pub fn passed(&self) -> bool {
        self.failed == 0
    }
}

/// Runs the front end over inputs and writes the outcome to `out`.
pub struct Driver<W: Write> {
    config: DriverConfig,
    out: W,
    is_tty: bool,
}

impl<W: Write> Driver<W> {
    pub fn new(config: DriverConfig, out: W) -> Self {
        Driver {
            config,
            out,
            is_tty: false,
        }
    }

    /// Whether `out` is a terminal, for `ColorMode::Auto`.
    #[must_use]
    pub fn with_tty(mut self, is_tty: bool) -> Self {
        self.is_tty = is_tty;
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Check the file or directory at `path`.
    ///
    /// A path that resolves to exactly one file is a single-file run;
    /// anything else is a directory run.
    pub fn run(&mut self, path: &Path) -> Result<RunSummary, DriverError> {
        let files = collect_inputs(path)?;
        debug!(files = files.len(), dialect = %self.config.dialect, "run");
        match files.as_slice() {
            [single] => self.run_single(single),
            _ => self.run_batch(&files),
        }
    }

    /// Prints `Success`, or `Error` followed by every diagnostic and the
    /// summary line.
    fn run_single(&mut self, path: &Path) -> Result<RunSummary, DriverError> {
        let _span = debug_span!("file", path = %path.display()).entered();
        let reporter = check_file(path, self.config.dialect)?;
        if reporter.has_errors() {
            writeln!(self.out, "Error")?;
            self.emit(&reporter);
            Ok(RunSummary { files: 1, failed: 1 })
        } else {
            writeln!(self.out, "Success")?;
            Ok(RunSummary { files: 1, failed: 0 })
        }
    }

    /// Checks each file against the expectation carried by its name.
    fn run_batch(&mut self, files: &[PathBuf]) -> Result<RunSummary, DriverError> {
        let mut mismatches = 0;
        for path in files {
            let name = path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
            let _span = debug_span!("file", %name).entered();
            writeln!(self.out, "Compiling File: {name}")?;

            let reporter = check_file(path, self.config.dialect)?;
            let expected_failure = expects_failure(path);
            debug!(expected_failure, errors = reporter.error_count(), "checked");

            if expected_failure != reporter.has_errors() {
                mismatches += 1;
                writeln!(
                    self.out,
                    "Compiler mismatch: incorrect result for file {name}"
                )?;
                if self.config.verbose {
                    self.emit(&reporter);
                }
            }
            writeln!(self.out, "{SEPARATOR}")?;
        }

        if mismatches == 0 {
            writeln!(self.out, "All tests passed")?;
        }
        Ok(RunSummary {
            files: files.len(),
            failed: mismatches,
        })
    }

    fn emit(&mut self, reporter: &ErrorReporter) {
        reporter.output_errors(&mut self.out, self.config.color, self.is_tty, true);
    }
}
