//! Domain types and reconciliation engine for the Stagewatch show watcher.
//!
//! This crate holds the pure heart of the watcher: the scraped show record,
//! the insertion-ordered extraction produced by one scrape, the durable set
//! of every show seen so far, and the reconciliation pass that diffs the two.
//! Nothing here touches the network or the filesystem, so the whole crate is
//! testable in isolation.
//!
//! # Example
//!
//! ```
//! use stagewatch_core::{Extraction, KnownShows, ShowRecord, reconcile};
//!
//! let mut extraction = Extraction::new();
//! extraction.insert(ShowRecord::new(
//!     "12/31/24".to_string(),
//!     "Tue".to_string(),
//!     "Main Hall".to_string(),
//!     "21:00".to_string(),
//!     None,
//!     None,
//! ));
//!
//! let mut known = KnownShows::default();
//! let fresh = reconcile(&extraction, &mut known);
//! assert_eq!(fresh.len(), 1);
//!
//! // Running again with the same extraction discovers nothing.
//! let fresh = reconcile(&extraction, &mut known);
//! assert!(fresh.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod known;
mod reconcile;
mod show;

pub use extraction::Extraction;
pub use known::KnownShows;
pub use reconcile::reconcile;
pub use show::ShowRecord;
