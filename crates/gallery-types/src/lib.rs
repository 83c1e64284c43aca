//! Shared types for the dolfina-gallery workspace.
//!
//! This crate provides the canonical data model used across member crates:
//!
//! - [`TokenMetadata`]: a fully-resolved token ready for rendering
//! - [`MetadataDocument`]: the raw off-chain JSON document shape
//! - [`Listing`] / [`AuctionData`]: marketplace state projections
//! - [`FetchState`]: the loading/error/data tri-state handed to the UI
//! - [`GalleryConfig`]: explicit configuration threaded into every component
//!
//! ## Design Principles
//!
//! 1. **Optional fields for unreliable data**: anything the chain or the
//!    metadata host does not reliably provide is `Option`, never a zero or
//!    empty-string stand-in.
//!
//! 2. **No ambient lookups**: components receive a [`GalleryConfig`] value at
//!    construction. Environment variables are read in exactly one place,
//!    [`GalleryConfig::from_env`].

pub mod auction;
pub mod config;
pub mod metadata;
pub mod state;

pub use auction::{AuctionData, Listing};
pub use config::GalleryConfig;
pub use metadata::{MetadataDocument, TokenAttribute, TokenMetadata};
pub use state::FetchState;

/// Token identifier within the collection contract.
///
/// Opaque positive integer, unique per contract, dense-ish but with possible
/// gaps (ids in range that were never minted or were burned).
pub type TokenId = u64;

/// Abbreviate a hex address for display: `0x7a16ab61…` -> `0x7a16…d65d`.
///
/// Strings too short to abbreviate are returned unchanged.
pub fn short_address(addr: &str) -> String {
    if addr.len() <= 12 {
        return addr.to_string();
    }
    format!("{}…{}", &addr[..6], &addr[addr.len() - 4..])
}
