//! Top-level error wrapper types.

#[cfg(feature = "database")]
use crate::DatabaseError;
use crate::{
    ConfigError, HttpError, JsonError, ModelsError, ServerError, StorageError, StoryError,
    VideoError,
};

/// This is the foundation error enum. Each Storyreel crate contributes its
/// domain error through a `From` conversion.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StoryreelError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryreelErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Story validation or authorization error
    #[from(StoryError)]
    Story(StoryError),
    /// Provider client error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Video job error
    #[from(VideoError)]
    Video(VideoError),
    /// Media storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Storyreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, ConfigError};
///
/// fn might_fail() -> StoryreelResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyreel Error: {}", _0)]
pub struct StoryreelError(Box<StoryreelErrorKind>);

impl StoryreelError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryreelErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryreelErrorKind
impl<T> From<T> for StoryreelError
where
    T: Into<StoryreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

// Lets diesel transaction closures use `?` on query results directly.
#[cfg(feature = "database")]
impl From<diesel::result::Error> for StoryreelErrorKind {
    fn from(err: diesel::result::Error) -> Self {
        StoryreelErrorKind::Database(DatabaseError::from(err))
    }
}

/// Result type for Storyreel operations.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, HttpError};
///
/// fn fetch_data() -> StoryreelResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type StoryreelResult<T> = std::result::Result<T, StoryreelError>;
