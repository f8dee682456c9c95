//! State store error types.

/// Kinds of state store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Failed to create the state directory
    #[display("Failed to create state directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the state file
    #[display("Failed to write state file: {}", _0)]
    FileWrite(String),
    /// Failed to move the temp file into place
    #[display("Failed to replace state file: {}", _0)]
    Rename(String),
    /// State could not be serialized
    #[display("Failed to serialize state: {}", _0)]
    Serialize(String),
    /// Invalid state path
    #[display("Invalid state path: {}", _0)]
    InvalidPath(String),
}

/// State store error with location tracking.
///
/// # Examples
///
/// ```
/// use stagewatch_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::FileWrite("disk full".to_string()));
/// assert!(format!("{}", err).contains("disk full"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
