use thiserror::Error;

/// Top-level error type for Klok.
#[derive(Debug, Error)]
pub enum KlokError {
    /// Hour or minute outside the clock's domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Language code or name that Klok has no tables for.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Host text-to-speech command failed.
    #[error("speech error: {0}")]
    Speech(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
