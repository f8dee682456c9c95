//! Top-level error wrapper types.

use crate::{ConfigError, ExtractError, HttpError, JsonError, NotifyError, StoreError};

/// The foundation error enum. Each variant wraps one domain error type.
///
/// # Examples
///
/// ```
/// use stagewatch_error::{StagewatchError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StagewatchError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StagewatchErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Show extraction error
    #[from(ExtractError)]
    Extract(ExtractError),
    /// State store error
    #[from(StoreError)]
    Store(StoreError),
    /// Notification delivery error
    #[from(NotifyError)]
    Notify(NotifyError),
}

/// Stagewatch error with kind discrimination.
///
/// # Examples
///
/// ```
/// use stagewatch_error::{StagewatchResult, ConfigError};
///
/// fn might_fail() -> StagewatchResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Stagewatch Error: {}", _0)]
pub struct StagewatchError(Box<StagewatchErrorKind>);

impl StagewatchError {
    /// Create a new error from a kind.
    pub fn new(kind: StagewatchErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StagewatchErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StagewatchErrorKind
impl<T> From<T> for StagewatchError
where
    T: Into<StagewatchErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Stagewatch operations.
///
/// # Examples
///
/// ```
/// use stagewatch_error::{StagewatchResult, HttpError};
///
/// fn fetch_page() -> StagewatchResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type StagewatchResult<T> = std::result::Result<T, StagewatchError>;
