//! Token discovery and batched enumeration.
//!
//! The driver behind the gallery view: work out which token ids exist, then
//! resolve each one's metadata with bounded request fan-out.
//!
//! ## Concurrency model
//!
//! Candidate ids are partitioned into fixed-size windows. All operations
//! inside a window run as overlapping async I/O on one cooperative scheduler;
//! windows themselves are strictly sequential, separated by a fixed delay.
//! The delay is the backpressure mechanism protecting the RPC provider;
//! latency is deliberately traded for staying under rate limits. There is no
//! shared mutable state: each window's results are merged only after every
//! member settles, and the merge preserves ascending id order.
//!
//! No cancellation: a run goes to completion; a caller that has navigated
//! away simply discards the result.

mod discovery;
mod enumerate;

pub use discovery::{candidate_ids, probe_exists};
pub use enumerate::{enumerate, enumerate_collection, materialize};
