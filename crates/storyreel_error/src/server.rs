//! HTTP server error types.

/// Error conditions for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ServerErrorKind {
    /// Server configuration is invalid or incomplete
    #[display("Server configuration error: {}", _0)]
    Configuration(String),
    /// Binding the listen address failed
    #[display("Failed to bind {}: {}", addr, message)]
    Bind {
        /// The address the server attempted to bind
        addr: String,
        /// The underlying error message
        message: String,
    },
    /// Serving requests failed
    #[display("Server error: {}", _0)]
    Serve(String),
}

/// Server error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{ServerError, ServerErrorKind};
///
/// let err = ServerError::new(ServerErrorKind::Configuration("STORYREEL_ADDR not set".into()));
/// assert!(format!("{}", err).contains("STORYREEL_ADDR"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The kind of error that occurred
    pub kind: ServerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
