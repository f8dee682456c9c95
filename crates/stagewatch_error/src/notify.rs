//! Notification error types.

/// Kinds of notification errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NotifyErrorKind {
    /// Request to the messaging API failed
    #[display("Messaging API request failed: {}", _0)]
    Request(String),
    /// The messaging API rejected the call
    #[display("Messaging API error {}: {}", status, message)]
    Api {
        /// HTTP status returned by the API
        status: u16,
        /// Error description from the response body
        message: String,
    },
    /// The API envelope reported failure
    #[display("Messaging API reported failure: {}", _0)]
    Envelope(String),
    /// Response body could not be parsed
    #[display("Failed to parse messaging API response: {}", _0)]
    Parse(String),
}

/// Notification error with location tracking.
///
/// # Examples
///
/// ```
/// use stagewatch_error::{NotifyError, NotifyErrorKind};
///
/// let err = NotifyError::new(NotifyErrorKind::Envelope("chat not found".to_string()));
/// assert!(format!("{}", err).contains("chat not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Notify Error: {} at line {} in {}", kind, line, file)]
pub struct NotifyError {
    /// The kind of error that occurred
    pub kind: NotifyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NotifyError {
    /// Create a new notification error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NotifyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
