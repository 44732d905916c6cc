//! Provider client error types.

/// Error conditions raised by the external generation service clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Transport-level failure
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// The service returned a non-success status
    #[display("API error {}: {}", status, message)]
    ApiError {
        /// HTTP status code returned by the service
        status: u16,
        /// Response body or error description
        message: String,
    },
    /// Response body could not be parsed
    #[display("Failed to parse response: {}", _0)]
    Parse(String),
    /// The service replied with no usable text
    #[display("Service returned an empty response")]
    EmptyResponse,
    /// Client misconfiguration (missing key, bad model id)
    #[display("Client configuration error: {}", _0)]
    Configuration(String),
}

/// Error type for provider client operations.
///
/// # Examples
///
/// ```
/// use storyreel_error::{ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at line {} in {}", kind, line, file)]
pub struct ModelsError {
    /// The specific error condition
    pub kind: ModelsErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new ModelsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
