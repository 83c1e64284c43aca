//! Candidate id discovery and existence probing.

use tracing::{debug, warn};

use gallery_transport::CollectionReader;
use gallery_types::{GalleryConfig, TokenId};

/// The ordered candidate id range to probe.
///
/// Tries the supply query first; candidates are `1..=supply`. When the call
/// reverts or the contract does not support it, falls back to
/// `config.fallback_scan_limit`, a conservative guess that may undershoot
/// the true collection size.
pub async fn candidate_ids<C: CollectionReader>(
    reader: &C,
    config: &GalleryConfig,
) -> Vec<TokenId> {
    let bound = match reader.total_supply().await {
        Ok(supply) => supply,
        Err(e) => {
            warn!(
                fallback = config.fallback_scan_limit,
                error = %e,
                "totalSupply unavailable, scanning fallback range"
            );
            config.fallback_scan_limit
        }
    };
    (1..=bound).collect()
}

/// Whether `token_id` exists, determined by an ownership probe.
///
/// Any failure (revert for a nonexistent token, transport error, rate
/// limiting) conflates to `false`. Discovery therefore never fabricates
/// ids, at the cost of dropping tokens behind transient RPC failures.
pub async fn probe_exists<C: CollectionReader>(reader: &C, token_id: TokenId) -> bool {
    match reader.owner_of(token_id).await {
        Ok(_) => true,
        Err(e) => {
            debug!(token_id, error = %e, "ownership probe failed, treating as nonexistent");
            false
        }
    }
}
