use std::env::VarError;

use thiserror::Error;

/// Failures while reading the environment-driven configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was present but unreadable (e.g. not valid unicode).
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] VarError),

    /// A variable (or its default) could not be parsed into its target type.
    #[error("Parse error: {0}")]
    ParseError(String),
}
