//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer
///
/// Selection of an unknown section, language or tab is never an error; those
/// are silent no-ops in the state layer. Everything here belongs to the
/// ambient layers around it.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Content Lookup Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown page: {slug}")]
    UnknownPage { slug: String },

    // ─────────────────────────────────────────────────────────────
    // Headless Command Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid command: {message}")]
    Command { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn unknown_page(slug: impl Into<String>) -> Self {
        Self::UnknownPage { slug: slug.into() }
    }

    pub fn command(message: impl Into<String>) -> Self {
        Self::Command {
            message: message.into(),
        }
    }

    /// Errors that leave the guide usable: the caller reports and continues
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Command { .. }
                | Error::UnknownPage { .. }
                | Error::ConfigNotFound { .. }
                | Error::ConfigParse { .. }
        )
    }

    /// The terminal could not be set up or handed back
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::TerminalRestore(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("missing [ui] table");
        assert_eq!(err.to_string(), "Configuration error: missing [ui] table");

        let err = Error::unknown_page("graphs");
        assert_eq!(err.to_string(), "Unknown page: graphs");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml_parse() {
        let source = toml::from_str::<toml::Table>("[ui\nstart_page = 1").unwrap_err();
        let err = Error::ConfigParse {
            path: PathBuf::from("/tmp/config.toml"),
            source,
        };
        assert!(err.to_string().contains("/tmp/config.toml"));
        assert!(err.is_recoverable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::TerminalRestore("raw mode".into()).is_fatal());
        assert!(!Error::config_not_found("/missing.toml").is_fatal());
        assert!(!Error::command("toggle x").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::command("bad index").is_recoverable());
        assert!(Error::unknown_page("heaps").is_recoverable());
        assert!(Error::config_not_found("/missing.toml").is_recoverable());
        assert!(!Error::terminal("draw failed").is_recoverable());
        assert!(!Error::Io(std::io::Error::other("closed")).is_recoverable());
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("writing config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
