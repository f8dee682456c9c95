//! Show extraction error types.

/// Kinds of extraction errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExtractErrorKind {
    /// Schedule page could not be fetched
    #[display("Failed to fetch schedule page: {}", _0)]
    Fetch(String),
    /// Schedule page returned a non-success status
    #[display("Schedule page returned status {}", _0)]
    Status(u16),
    /// Row selector matched nothing in the rendered page
    #[display("Schedule selector '{}' matched no rows", _0)]
    EmptySchedule(String),
    /// Selector string failed to parse
    #[display("Invalid selector: {}", _0)]
    Selector(String),
}

/// Extraction error with source location tracking.
///
/// # Examples
///
/// ```
/// use stagewatch_error::{ExtractError, ExtractErrorKind};
///
/// let err = ExtractError::new(ExtractErrorKind::Status(503));
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractError {
    /// The kind of error that occurred
    pub kind: ExtractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new extraction error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
