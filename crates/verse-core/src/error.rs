//! Error types and handling for verse-core operations.
//!
//! Errors fall into two groups with different propagation rules:
//!
//! - **Configuration errors** ([`Error::InvalidColorFormat`], [`Error::InvalidPattern`],
//!   [`Error::Config`]) are fatal. They surface while options are resolved, before
//!   any verse is fetched, and stop the whole run.
//! - **Provider errors** ([`ProviderError`]) are local to one lookup. The output
//!   controller prints them inline and sibling lookups still complete.
//!
//! ```rust
//! use verse_core::{Error, Rgb};
//!
//! match Rgb::parse("255, 0") {
//!     Err(err @ Error::InvalidColorFormat(_)) => assert!(err.is_usage()),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Message shown whenever a result color cannot be resolved to three integers.
pub const COLOR_FORMAT_HINT: &str = "Invalid result color. Please provide a string in this format: \
     'r, g, b'. Example: --resultColor '255, 0, 0'";

/// The main error type for verse-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The result color did not resolve to exactly three integers in `0..=255`.
    ///
    /// The payload is the offending input.
    #[error("{hint} (got '{0}')", hint = COLOR_FORMAT_HINT)]
    InvalidColorFormat(String),

    /// The search expression could not be compiled.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    /// A reference string could not be parsed.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Invalid TOML syntax in the config file
    /// - A `search_limit` of zero
    /// - Config directory creation failures
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Whether the error stems from user input or configuration rather than
    /// from the environment.
    ///
    /// Usage errors map to the CLI's usage exit code.
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidColorFormat(_)
                | Self::InvalidPattern(_)
                | Self::InvalidReference(_)
                | Self::Config(_)
        )
    }

    /// Get the error category as a string.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidColorFormat(_) => "color",
            Self::InvalidPattern(_) => "pattern",
            Self::InvalidReference(_) => "reference",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// A failure reported by a verse provider for a single lookup.
///
/// Cloneable so one failed pack load can be reported by every lookup that
/// depends on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No verse data is available for the requested language.
    #[error("no verse data available for language '{language}': {reason}")]
    NotAvailable {
        /// Language that was requested.
        language: String,
        /// Why the data could not be loaded.
        reason: String,
    },

    /// The reference could not be understood by the provider.
    #[error("invalid reference '{0}'")]
    InvalidReference(String),

    /// Any other provider-side failure.
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
