use thiserror::Error;

use super::UrlSyntaxError;

/// Errors surfaced by the long URL generator.
#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The input is not URL syntax.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] UrlSyntaxError),
}
