//! Schedule page extraction for the Stagewatch show watcher.
//!
//! The reconciliation engine never sees HTML. This crate owns the whole
//! extraction boundary: fetching the schedule page over HTTP and parsing the
//! appearances table into an ordered [`Extraction`](stagewatch_core::Extraction)
//! of well-formed rows. Malformed rows are filtered here, with a warning,
//! before anything reaches the engine.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod page;

pub use extract::extract_shows;
pub use page::SchedulePage;

use stagewatch_core::Extraction;
use stagewatch_error::StagewatchResult;

/// Source of the current show schedule.
///
/// The production implementation is [`SchedulePage`]; tests substitute a mock
/// so cycles run without a network.
#[async_trait::async_trait]
pub trait ShowSource: Send + Sync {
    /// Produce the current extraction, in page order.
    async fn current_shows(&self) -> StagewatchResult<Extraction>;
}
