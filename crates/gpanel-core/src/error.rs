//! Application error types with rich context

use std::fmt;

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
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
    // Gateway Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Gateway unreachable ({endpoint}): {message}")]
    Transport { endpoint: String, message: String },

    #[error("Gateway rejected {endpoint} with status {status}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Gateway protocol error: {message}")]
    Protocol { message: String },

    // ─────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{message}")]
    InvalidInput { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
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

    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Text suitable for a notification.
    ///
    /// A rejected request with a non-empty body surfaces the device's own
    /// explanation; everything else falls back to the display string.
    pub fn user_message(&self) -> String {
        match self {
            Error::Status { body, .. } if !body.trim().is_empty() => body.trim().to_string(),
            other => other.to_string(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::Status { .. }
                | Error::Protocol { .. }
                | Error::Json(_)
                | Error::InvalidInput { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_) | Error::ChannelClosed | Error::ConfigInvalid { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Cloneable failure summary
// ─────────────────────────────────────────────────────────────────

/// Cloneable outcome of a failed gateway call.
///
/// Messages travelling through the update loop must be `Clone`, which
/// [`Error`] is not. The split between `Rejected` and `Unreachable` is kept
/// because several views word the two cases differently ("Failed to ..."
/// versus "Error ...").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The device answered with a non-success status.
    Rejected { status: u16, body: String },
    /// The request never produced a usable response.
    Unreachable(String),
}

impl Failure {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Failure::Rejected { .. })
    }

    /// Body text the device sent back, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Failure::Rejected { body, .. } if !body.trim().is_empty() => Some(body.trim()),
            _ => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Rejected { status, body } if body.trim().is_empty() => {
                write!(f, "request rejected with status {status}")
            }
            Failure::Rejected { body, .. } => f.write_str(body.trim()),
            Failure::Unreachable(message) => f.write_str(message),
        }
    }
}

impl From<&Error> for Failure {
    fn from(err: &Error) -> Self {
        match err {
            Error::Status { status, body, .. } => Failure::Rejected {
                status: *status,
                body: body.clone(),
            },
            other => Failure::Unreachable(other.to_string()),
        }
    }
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Failure::from(&err)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
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
        let err = Error::transport("/api/ac/state", "connection refused");
        assert_eq!(
            err.to_string(),
            "Gateway unreachable (/api/ac/state): connection refused"
        );

        let err = Error::invalid_input("Enter a key name");
        assert_eq!(err.to_string(), "Enter a key name");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::ChannelClosed.is_fatal());
        assert!(!Error::transport("/api/ir/list", "timeout").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::transport("/api/ir/list", "timeout").is_recoverable());
        assert!(Error::status("/api/brand/add", 400, "exists").is_recoverable());
        assert!(Error::protocol("bad json").is_recoverable());
        assert!(!Error::ChannelClosed.is_recoverable());
    }

    #[test]
    fn test_user_message_prefers_device_body() {
        let err = Error::status("/api/brand/add", 400, "Brand already exists\n");
        assert_eq!(err.user_message(), "Brand already exists");

        let err = Error::status("/api/brand/add", 500, "   ");
        assert!(err.user_message().contains("status 500"));
    }

    #[test]
    fn test_failure_from_error() {
        let failure = Failure::from(Error::status("/api/save", 409, "Key exists"));
        assert!(failure.is_rejected());
        assert_eq!(failure.body(), Some("Key exists"));
        assert_eq!(failure.to_string(), "Key exists");

        let failure = Failure::from(Error::transport("/api/save", "reset by peer"));
        assert!(!failure.is_rejected());
        assert_eq!(failure.body(), None);
        assert!(failure.to_string().contains("reset by peer"));
    }

    #[test]
    fn test_failure_without_body_mentions_status() {
        let failure = Failure::Rejected {
            status: 500,
            body: String::new(),
        };
        assert_eq!(failure.to_string(), "request rejected with status 500");
    }
}
