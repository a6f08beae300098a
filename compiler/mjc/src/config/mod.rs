//! Driver configuration from command-line options and the environment.

use mj_diagnostic::emitter::ColorMode;
use mj_ir::{Dialect, UnknownDialect};
use thiserror::Error;

/// Environment variable holding the default dialect.
pub const DIALECT_ENV: &str = "MJC_DIALECT";

/// Settings shared by every file of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverConfig {
    pub dialect: Dialect,
    /// Print diagnostics for mismatched files in a directory run.
    pub verbose: bool,
    pub color: ColorMode,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Dialect(#[from] UnknownDialect),

    #[error("unknown color mode '{0}' (expected 'auto', 'always' or 'never')")]
    Color(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

impl DriverConfig {
    /// Defaults, with the dialect read from `MJC_DIALECT` when it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_default_dialect(std::env::var(DIALECT_ENV).ok().as_deref())
    }

    /// Defaults, with the dialect named by `dialect` if any.
    pub fn with_default_dialect(dialect: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = DriverConfig::default();
        if let Some(name) = dialect {
            config.dialect = name.parse()?;
        }
        Ok(config)
    }

    /// Apply one argument. Returns `Ok(false)` when `arg` is positional.
    pub fn apply_option(&mut self, arg: &str) -> Result<bool, ConfigError> {
        if let Some(name) = arg.strip_prefix("--dialect=") {
            self.dialect = name.parse()?;
        } else if arg == "--extended" {
            self.dialect = Dialect::Extended;
        } else if arg == "--mini" {
            self.dialect = Dialect::Mini;
        } else if arg == "--verbose" || arg == "-v" {
            self.verbose = true;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            self.color = mode
                .parse()
                .map_err(|()| ConfigError::Color(mode.to_string()))?;
        } else if arg.starts_with('-') {
            return Err(ConfigError::UnknownOption(arg.to_string()));
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// Apply every option in `args`, returning the positional arguments in
    /// order. Options and positionals may be interleaved.
    pub fn apply_args<'a>(&mut self, args: &'a [String]) -> Result<Vec<&'a str>, ConfigError> {
        let mut positional = Vec::new();
        for arg in args {
            if !self.apply_option(arg)? {
                positional.push(arg.as_str());
            }
        }
        Ok(positional)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
