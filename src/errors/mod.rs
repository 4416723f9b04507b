use std::io::Error as IoError;

use thiserror::Error;

pub mod config;
pub mod generator;
pub mod validation;

pub use config::ConfigError;
pub use generator::GeneratorError;
pub use validation::UrlSyntaxError;

#[derive(Debug, Error)]
pub enum AppError {
    // Usage errors
    #[error("Missing URL argument")]
    MissingUrl,
    // Domain errors
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    // Infrastructure/system errors
    #[error("Output error: {0}")]
    Output(#[from] IoError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Logger error: {0}")]
    Logger(String),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}
