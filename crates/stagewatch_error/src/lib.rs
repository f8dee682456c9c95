//! Error types for the Stagewatch show watcher.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums define specific error conditions
//! - `*Error` structs wrap the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use stagewatch_error::{StagewatchResult, HttpError};
//!
//! fn fetch_page() -> StagewatchResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_page() {
//!     Ok(body) => println!("Got: {}", body),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extract;
mod http;
mod json;
mod notify;
mod store;

pub use config::ConfigError;
pub use error::{StagewatchError, StagewatchErrorKind, StagewatchResult};
pub use extract::{ExtractError, ExtractErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use notify::{NotifyError, NotifyErrorKind};
pub use store::{StoreError, StoreErrorKind};
