//! Durable known-show state for the Stagewatch show watcher.
//!
//! One flat JSON file maps raw date keys to the show records seen so far.
//! Loading degrades to an empty set on any failure — a missing file is the
//! expected first-run condition, a corrupt one costs at worst a burst of
//! re-notifications, and neither may take the process down. Saving writes a
//! temp file and renames it into place so no partial state is ever visible.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod state;

pub use state::StateStore;
