//! Marketplace listing and auction projections.
//!
//! The marketplace accessor returns a positional tuple whose documented
//! field names do not match what the contract actually puts in each slot.
//! [`Listing`] holds only the positions observed to be meaningful, plus the
//! full raw tuple for diagnostics. [`AuctionData`] is the presentation-ready
//! projection; every field the accessor cannot reliably provide is `None`,
//! never zero or `false`-as-a-value.

use serde::{Deserialize, Serialize};

/// A heuristically-matched marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub listing_id: u64,
    /// Seller address, checksummed hex.
    pub seller: String,
    /// Reserve price in wei. Strictly positive for listings treated as real.
    pub reserve_price_wei: u128,
    /// Auction extension interval in seconds.
    pub extension_interval_secs: u64,
    /// Raw flags word. Kept as returned; individual bits are undocumented.
    pub flags: u32,
    pub total_available: u32,
    /// All tuple positions as decimal strings, in return order, for
    /// diagnostics. Addresses appear as their big-endian integer value.
    pub raw_fields: Vec<String>,
}

/// Presentation-ready auction state for one token.
///
/// `is_active` is inferred from the reserve price being positive; the
/// accessor exposes no authoritative status field. Fields the accessor does
/// not reliably return (bid data, start/end times, minimum increment) stay
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionData {
    pub is_active: bool,
    #[serde(default)]
    pub reserve_price: Option<String>,
    #[serde(default)]
    pub current_bid: Option<String>,
    #[serde(default)]
    pub start_time: Option<u64>,
    #[serde(default)]
    pub end_time: Option<u64>,
    #[serde(default)]
    pub extension_interval: Option<u64>,
    #[serde(default)]
    pub min_bid_increment: Option<String>,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub listing_id: Option<u64>,
    #[serde(default)]
    pub total_bids: Option<u32>,
}

impl AuctionData {
    /// The "nothing could be resolved" state: inactive, every field absent.
    ///
    /// Auction resolution failures always degrade to this rather than
    /// surfacing an error.
    pub fn unavailable() -> Self {
        Self::default()
    }
}
