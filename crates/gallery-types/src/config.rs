//! Gallery configuration.
//!
//! Every component receives a [`GalleryConfig`] value at construction rather
//! than reading ambient state. [`GalleryConfig::from_env`] applies `GALLERY_*`
//! environment overrides on top of the Base-mainnet defaults in one place, so
//! tests can build configs pointing at mock endpoints directly.

use std::str::FromStr;
use std::time::Duration;

/// ERC-721 collection contract on Base mainnet.
pub const DEFAULT_COLLECTION_ADDRESS: &str = "0x7a16ab61fd1e708436fd4962057e21d57879d65d";

/// Manifold marketplace contract on Base mainnet.
pub const DEFAULT_MARKETPLACE_ADDRESS: &str = "0x5246807fB65d87b0d0a234e0F3D42374DE83b421";

/// Public Base mainnet RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// JSON-RPC endpoint for all chain reads.
    pub rpc_url: String,

    /// ERC-721 collection contract address.
    pub collection_address: String,

    /// Marketplace contract address.
    pub marketplace_address: String,

    /// Collection display name, used in fallback token names.
    pub collection_name: String,

    /// Description applied when the metadata document has none.
    pub fallback_description: String,

    /// Directory prefix for local fallback images (`<dir>/<id 02>.jpg`).
    pub image_dir: String,

    /// Upper bound on the sequential id scan when the supply query fails.
    ///
    /// A deliberately conservative guess, not a guarantee of covering the
    /// true collection size.
    pub fallback_scan_limit: u64,

    /// Number of tokens resolved concurrently per window.
    pub batch_size: usize,

    /// Pause between consecutive windows. Trades latency for staying under
    /// provider rate limits.
    pub batch_delay: Duration,

    /// First listing id probed by the marketplace scan.
    ///
    /// Deployment-specific: the value matches where this collection's
    /// listings happen to live on the shared marketplace contract. Do not
    /// expect it to generalize to other deployments.
    pub listing_scan_base: u64,

    /// Number of consecutive listing ids probed from `listing_scan_base`.
    pub listing_scan_window: u64,

    /// Listing fetched directly when the scan finds nothing valid.
    pub fallback_listing_id: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            collection_address: DEFAULT_COLLECTION_ADDRESS.to_string(),
            marketplace_address: DEFAULT_MARKETPLACE_ADDRESS.to_string(),
            collection_name: "La Dolfina".to_string(),
            fallback_description: "Limited Edition".to_string(),
            image_dir: "/img".to_string(),
            fallback_scan_limit: 20,
            batch_size: 3,
            batch_delay: Duration::from_millis(1000),
            listing_scan_base: 2736,
            listing_scan_window: 20,
            fallback_listing_id: 2737,
        }
    }
}

impl GalleryConfig {
    /// Defaults with `GALLERY_*` environment overrides applied.
    ///
    /// Recognized variables: `GALLERY_RPC_URL`, `GALLERY_COLLECTION_ADDRESS`,
    /// `GALLERY_MARKETPLACE_ADDRESS`, `GALLERY_BATCH_SIZE`,
    /// `GALLERY_BATCH_DELAY_MS`, `GALLERY_FALLBACK_SCAN_LIMIT`,
    /// `GALLERY_LISTING_SCAN_BASE`, `GALLERY_LISTING_SCAN_WINDOW`,
    /// `GALLERY_FALLBACK_LISTING_ID`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rpc_url: env_string_or("GALLERY_RPC_URL", &defaults.rpc_url),
            collection_address: env_string_or(
                "GALLERY_COLLECTION_ADDRESS",
                &defaults.collection_address,
            ),
            marketplace_address: env_string_or(
                "GALLERY_MARKETPLACE_ADDRESS",
                &defaults.marketplace_address,
            ),
            batch_size: env_var_or("GALLERY_BATCH_SIZE", defaults.batch_size),
            batch_delay: Duration::from_millis(env_var_or(
                "GALLERY_BATCH_DELAY_MS",
                defaults.batch_delay.as_millis() as u64,
            )),
            fallback_scan_limit: env_var_or(
                "GALLERY_FALLBACK_SCAN_LIMIT",
                defaults.fallback_scan_limit,
            ),
            listing_scan_base: env_var_or("GALLERY_LISTING_SCAN_BASE", defaults.listing_scan_base),
            listing_scan_window: env_var_or(
                "GALLERY_LISTING_SCAN_WINDOW",
                defaults.listing_scan_window,
            ),
            fallback_listing_id: env_var_or(
                "GALLERY_FALLBACK_LISTING_ID",
                defaults.fallback_listing_id,
            ),
            ..defaults
        }
    }

    /// Batch size with the lower bound applied. A zero from the environment
    /// would stall enumeration forever.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }

    /// Default name for a token whose metadata could not be resolved.
    pub fn fallback_name(&self, token_id: u64) -> String {
        format!("{} #{}", self.collection_name, token_id)
    }

    /// Local fallback image path, zero-padded to two digits.
    pub fn fallback_image(&self, token_id: u64) -> String {
        format!("{}/{:02}.jpg", self.image_dir, token_id)
    }
}

/// Parse an environment variable into any `FromStr` type, falling back to a
/// default when unset or unparseable.
fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_string_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GalleryConfig::default();
        assert_eq!(cfg.fallback_scan_limit, 20);
        assert_eq!(cfg.batch_size, 3);
        assert_eq!(cfg.batch_delay, Duration::from_millis(1000));
        assert_eq!(cfg.listing_scan_base, 2736);
        assert_eq!(cfg.fallback_listing_id, 2737);
    }

    #[test]
    fn test_fallback_name_and_image() {
        let cfg = GalleryConfig::default();
        assert_eq!(cfg.fallback_name(5), "La Dolfina #5");
        assert_eq!(cfg.fallback_image(5), "/img/05.jpg");
        assert_eq!(cfg.fallback_image(12), "/img/12.jpg");
    }

    #[test]
    fn test_effective_batch_size_floor() {
        let cfg = GalleryConfig {
            batch_size: 0,
            ..GalleryConfig::default()
        };
        assert_eq!(cfg.effective_batch_size(), 1);
    }

    #[test]
    fn test_env_var_or() {
        std::env::set_var("GALLERY_TEST_U64", "7");
        assert_eq!(env_var_or("GALLERY_TEST_U64", 3u64), 7);
        assert_eq!(env_var_or("GALLERY_TEST_MISSING", 3u64), 3);
        std::env::set_var("GALLERY_TEST_BAD", "not-a-number");
        assert_eq!(env_var_or("GALLERY_TEST_BAD", 3u64), 3);
        std::env::remove_var("GALLERY_TEST_U64");
        std::env::remove_var("GALLERY_TEST_BAD");
    }
}
