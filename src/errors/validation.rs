use thiserror::Error;

/// Reasons an input string is not accepted as URL syntax
#[derive(Debug, Error, PartialEq)]
pub enum UrlSyntaxError {
    #[error("empty URL")]
    Empty,

    /// Any byte below 0x20 or equal to 0x7f, wherever it appears
    #[error("invalid control character in URL")]
    ControlCharacter,

    /// A scheme-less reference whose first path segment contains `:`
    #[error("first path segment in URL cannot contain colon")]
    ColonInFirstSegment,

    #[error(transparent)]
    Parse(#[from] url::ParseError),
}
