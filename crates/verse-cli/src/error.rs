//! CLI error handling with semantic exit codes.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed (lookup failures are reported inline) |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments or configuration |

use std::fmt;
use std::process::ExitCode;

use tracing::debug;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    ///
    /// Covers malformed result colors, invalid search patterns and
    /// broken config values.
    Usage = 2,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Create an `ExitCode` from this category.
    #[must_use]
    pub fn as_exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }
}

/// A CLI error with a semantic category for exit code mapping.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Internal, source)
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<verse_core::Error> for CliError {
    fn from(err: verse_core::Error) -> Self {
        debug!(category = err.category(), "aborting on core error");
        if err.is_usage() {
            Self::usage(err)
        } else {
            Self::internal(err)
        }
    }
}

/// Determine the error category of an `anyhow::Error`.
///
/// `CliError`s carry their category; bare core errors are classified by
/// kind; anything else is internal.
#[must_use]
pub fn category_from_error(err: &anyhow::Error) -> ErrorCategory {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.category;
    }
    if let Some(core_err) = err.downcast_ref::<verse_core::Error>() {
        if core_err.is_usage() {
            return ErrorCategory::Usage;
        }
    }
    ErrorCategory::Internal
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorCategory::Internal.exit_code(), 1);
        assert_eq!(ErrorCategory::Usage.exit_code(), 2);
    }

    #[test]
    fn test_color_error_is_usage() {
        let err: CliError = verse_core::Error::InvalidColorFormat("1,2".into()).into();
        assert_eq!(err.category, ErrorCategory::Usage);
        assert!(err.to_string().contains("'r, g, b'"));
    }

    #[test]
    fn test_io_error_is_internal() {
        let io = std::io::Error::other("disk on fire");
        let err: CliError = verse_core::Error::Io(io).into();
        assert_eq!(err.category, ErrorCategory::Internal);
    }

    #[test]
    fn test_exit_code_from_wrapped_errors() {
        let usage = anyhow::Error::new(CliError::usage(anyhow!("bad flag")));
        assert_eq!(category_from_error(&usage), ErrorCategory::Usage);

        let core = anyhow::Error::new(verse_core::Error::InvalidPattern("(".into()));
        assert_eq!(category_from_error(&core), ErrorCategory::Usage);

        let other = anyhow!("something odd");
        assert_eq!(category_from_error(&other), ErrorCategory::Internal);
    }

    #[test]
    fn test_as_exit_code_matches_numeric_code() {
        assert_eq!(ErrorCategory::Usage.as_exit_code(), ExitCode::from(2));
        assert_eq!(ErrorCategory::Internal.as_exit_code(), ExitCode::from(1));
    }
}
