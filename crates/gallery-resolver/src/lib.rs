//! Token URI resolution and metadata fetching.
//!
//! Turns whatever a contract stores in `tokenURI` into a usable metadata
//! document:
//!
//! - [`uri`]: pure classification of a URI string (IPFS rewrite, inline
//!   base64 payload, plain HTTP), with no I/O and no failure paths
//! - [`fetcher`]: retrieval and parsing of the document behind a classified
//!   URI; every failure collapses to `None` so one broken token can never
//!   abort enumeration of the rest

pub mod fetcher;
pub mod uri;

pub use fetcher::{HttpMetadataFetcher, MetadataSource};
pub use uri::{decode_inline_json, resolve, rewrite_ipfs, ResolvedUri, IPFS_GATEWAY};
