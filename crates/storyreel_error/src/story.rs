//! Story validation and authorization error types.

/// Specific error conditions for story operations.
///
/// Each variant carries the user-facing message surfaced by the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Title is empty or whitespace
    #[display("Title cannot be empty")]
    EmptyTitle,
    /// Author is empty or whitespace
    #[display("Author nickname cannot be empty")]
    EmptyAuthor,
    /// Content is empty or whitespace
    #[display("Content cannot be empty")]
    EmptyContent,
    /// Contributor cap outside the accepted 1-5 range
    #[display("Contributor limit must be between 1 and 5")]
    ContributorCapOutOfRange,
    /// Parent story does not exist
    #[display("Parent story not found")]
    ParentNotFound,
    /// Parent story has no contributor slots left
    #[display("Story has reached its contributor limit ({} contributors)", _0)]
    ContributorCapReached(i32),
    /// Story does not exist (or is not a root story where one is required)
    #[display("Story {} not found", _0)]
    StoryNotFound(i32),
    /// An author attempted to fork their own story
    #[display("You cannot fork your own story")]
    SelfFork,
    /// An author attempted to fork the same story twice
    #[display("You have already forked this story")]
    AlreadyForked,
    /// Video generation requested on a contribution rather than a root story
    #[display("Videos can only be generated for original stories")]
    NotAnOriginal,
    /// Video generation requested by someone other than the original author
    #[display("Only the original author can generate a video")]
    NotTheAuthor,
    /// A video generation job is already in flight for this story
    #[display("A video is already being generated for this story")]
    AlreadyGenerating,
}

/// Error type for story operations.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::SelfFork);
/// assert!(format!("{}", err).contains("your own story"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
