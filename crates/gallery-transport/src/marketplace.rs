//! Marketplace listing reads.
//!
//! The marketplace contract documents `getListing` as returning named struct
//! components, but the positions observed on chain do not all match their
//! declared names. The tuple is therefore decoded *positionally* into a
//! [`RawListing`] of uniform `U256` words, and the [`field`] module records,
//! per index, the declared name against the observed semantics. Downstream
//! code must index through [`field`] constants and must not trust a declared
//! name that is marked unreliable.

use alloy::primitives::aliases::U40;
use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use alloy::sol;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;

use crate::erc721::connect;

sol! {
    #[sol(rpc)]
    interface IMarketplace {
        function getListing(uint40 listingId) external view returns (
            uint256 id,
            address seller,
            uint24 listingType,
            uint24 flags,
            uint8 totalAvailable,
            uint8 totalPerSale,
            uint48 startTime,
            uint48 endTime,
            uint48 extensionInterval,
            uint16 minIncrementBPS,
            uint256 erc20,
            uint256 identityVerifier
        );
    }
}

/// Number of positions in the listing tuple.
pub const LISTING_FIELD_COUNT: usize = 12;

/// Positional indexes into [`RawListing::fields`].
///
/// Declared name vs observed semantics, per index:
///
/// | idx | declared            | observed                                      |
/// |-----|---------------------|-----------------------------------------------|
/// | 0   | `id`                | listing id (reliable)                         |
/// | 1   | `seller`            | seller address (reliable)                     |
/// | 2   | `listingType`       | unreliable, do not surface                    |
/// | 3   | `flags`             | flags word, kept raw                          |
/// | 4   | `totalAvailable`    | total available, kept raw                     |
/// | 5   | `totalPerSale`      | unreliable, do not surface                    |
/// | 6   | `startTime`         | reads as zero: unavailable, not "0"           |
/// | 7   | `endTime`           | reads as zero: unavailable, not "0"           |
/// | 8   | `extensionInterval` | extension interval in seconds (reliable)      |
/// | 9   | `minIncrementBPS`   | unreliable, do not surface                    |
/// | 10  | `erc20`             | carries the reserve price in wei              |
/// | 11  | `identityVerifier`  | unreliable, do not surface                    |
pub mod field {
    pub const ID: usize = 0;
    pub const SELLER: usize = 1;
    pub const FLAGS: usize = 3;
    pub const TOTAL_AVAILABLE: usize = 4;
    pub const EXTENSION_INTERVAL: usize = 8;
    pub const RESERVE_PRICE: usize = 10;
}

/// A listing tuple exactly as returned, widened to `U256` per position.
///
/// The address at [`field::SELLER`] is stored as its big-endian integer
/// value; use [`RawListing::seller_address`] to recover it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub fields: [U256; LISTING_FIELD_COUNT],
}

impl RawListing {
    pub fn listing_id(&self) -> u64 {
        self.fields[field::ID].saturating_to::<u64>()
    }

    /// Reserve price in wei (observed semantics of the declared `erc20`
    /// slot).
    pub fn reserve_price_wei(&self) -> U256 {
        self.fields[field::RESERVE_PRICE]
    }

    /// The validity signal: listings with a zero reserve price are treated
    /// as slots with no real listing behind them.
    pub fn has_reserve_price(&self) -> bool {
        self.reserve_price_wei() > U256::ZERO
    }

    pub fn extension_interval_secs(&self) -> u64 {
        self.fields[field::EXTENSION_INTERVAL].saturating_to::<u64>()
    }

    pub fn flags(&self) -> u32 {
        self.fields[field::FLAGS].saturating_to::<u32>()
    }

    pub fn total_available(&self) -> u32 {
        self.fields[field::TOTAL_AVAILABLE].saturating_to::<u32>()
    }

    /// Recover the seller address from its widened word.
    pub fn seller_address(&self) -> Address {
        Address::from_slice(&self.fields[field::SELLER].to_be_bytes::<32>()[12..])
    }

    /// All positions as decimal strings, for diagnostics.
    pub fn raw_fields(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.to_string()).collect()
    }
}

/// Read access to marketplace listings by listing id.
#[async_trait]
pub trait ListingReader: Send + Sync {
    /// Fetch the listing tuple for `listing_id`. Reverts (common for ids
    /// with no listing) and transport failures both surface as `Err`.
    async fn get_listing(&self, listing_id: u64) -> Result<RawListing>;
}

/// Alloy-backed [`ListingReader`] over HTTP JSON-RPC.
#[derive(Clone)]
pub struct MarketplaceClient {
    contract: IMarketplace::IMarketplaceInstance<DynProvider>,
}

impl MarketplaceClient {
    /// Connect to `rpc_url` and bind the contract at `address`.
    pub fn new(rpc_url: &str, address: &str) -> Result<Self> {
        let provider = connect(rpc_url)?;
        let address: Address = address
            .parse()
            .map_err(|e| anyhow!("invalid marketplace address '{}': {}", address, e))?;
        Ok(Self {
            contract: IMarketplace::new(address, provider),
        })
    }
}

#[async_trait]
impl ListingReader for MarketplaceClient {
    async fn get_listing(&self, listing_id: u64) -> Result<RawListing> {
        let ret = self
            .contract
            .getListing(U40::saturating_from(listing_id))
            .call()
            .await
            .with_context(|| format!("getListing({}) call failed", listing_id))?;

        // Widen every position to U256 in declared order. Field names on the
        // generated struct follow the documented ABI; semantics do not (see
        // the `field` module table).
        let fields = [
            ret.id,
            U256::from_be_slice(ret.seller.as_slice()),
            U256::from(ret.listingType.to::<u64>()),
            U256::from(ret.flags.to::<u64>()),
            U256::from(ret.totalAvailable),
            U256::from(ret.totalPerSale),
            U256::from(ret.startTime.to::<u64>()),
            U256::from(ret.endTime.to::<u64>()),
            U256::from(ret.extensionInterval.to::<u64>()),
            U256::from(ret.minIncrementBPS),
            ret.erc20,
            ret.identityVerifier,
        ];
        Ok(RawListing { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_with(reserve_wei: u64) -> RawListing {
        let mut fields = [U256::ZERO; LISTING_FIELD_COUNT];
        fields[field::ID] = U256::from(2737u64);
        fields[field::SELLER] = U256::from_be_slice(
            Address::repeat_byte(0xab).as_slice(),
        );
        fields[field::FLAGS] = U256::from(2u64);
        fields[field::TOTAL_AVAILABLE] = U256::from(1u64);
        fields[field::EXTENSION_INTERVAL] = U256::from(300u64);
        fields[field::RESERVE_PRICE] = U256::from(reserve_wei);
        RawListing { fields }
    }

    #[test]
    fn test_positional_accessors() {
        let l = listing_with(1_000_000);
        assert_eq!(l.listing_id(), 2737);
        assert_eq!(l.extension_interval_secs(), 300);
        assert_eq!(l.flags(), 2);
        assert_eq!(l.total_available(), 1);
        assert_eq!(l.reserve_price_wei(), U256::from(1_000_000u64));
        assert!(l.has_reserve_price());
    }

    #[test]
    fn test_zero_reserve_is_not_a_listing() {
        assert!(!listing_with(0).has_reserve_price());
    }

    #[test]
    fn test_seller_address_roundtrip() {
        let l = listing_with(1);
        assert_eq!(l.seller_address(), Address::repeat_byte(0xab));
    }

    #[test]
    fn test_raw_fields_decimal_strings() {
        let l = listing_with(42);
        let raw = l.raw_fields();
        assert_eq!(raw.len(), LISTING_FIELD_COUNT);
        assert_eq!(raw[field::ID], "2737");
        assert_eq!(raw[field::RESERVE_PRICE], "42");
    }
}
