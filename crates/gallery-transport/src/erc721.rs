//! ERC-721 collection reads.

use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::sol;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;

use gallery_types::TokenId;

// Minimal ERC-721 surface: the three read functions the pipeline consumes.
sol! {
    #[sol(rpc)]
    interface IErc721 {
        function tokenURI(uint256 tokenId) external view returns (string);
        function ownerOf(uint256 tokenId) external view returns (address);
        function totalSupply() external view returns (uint256);
    }
}

/// Read access to the collection contract.
///
/// Implementations must treat any failure (revert, transport error, rate
/// limit) as an `Err`; the pipeline decides per call site whether that means
/// "does not exist" or "fall back".
#[async_trait]
pub trait CollectionReader: Send + Sync {
    /// Total minted supply. Best-effort: many contracts revert or omit this.
    async fn total_supply(&self) -> Result<u64>;

    /// Owner of `token_id`, checksummed hex. Reverts for nonexistent tokens.
    async fn owner_of(&self, token_id: TokenId) -> Result<String>;

    /// Metadata URI for `token_id`.
    async fn token_uri(&self, token_id: TokenId) -> Result<String>;
}

/// Alloy-backed [`CollectionReader`] over HTTP JSON-RPC.
#[derive(Clone)]
pub struct Erc721Client {
    contract: IErc721::IErc721Instance<DynProvider>,
}

impl Erc721Client {
    /// Connect to `rpc_url` and bind the contract at `address`.
    pub fn new(rpc_url: &str, address: &str) -> Result<Self> {
        let provider = connect(rpc_url)?;
        let address: Address = address
            .parse()
            .map_err(|e| anyhow!("invalid collection address '{}': {}", address, e))?;
        Ok(Self {
            contract: IErc721::new(address, provider),
        })
    }
}

#[async_trait]
impl CollectionReader for Erc721Client {
    async fn total_supply(&self) -> Result<u64> {
        let supply = self
            .contract
            .totalSupply()
            .call()
            .await
            .context("totalSupply call failed")?;
        Ok(supply.saturating_to::<u64>())
    }

    async fn owner_of(&self, token_id: TokenId) -> Result<String> {
        let owner = self
            .contract
            .ownerOf(U256::from(token_id))
            .call()
            .await
            .with_context(|| format!("ownerOf({}) call failed", token_id))?;
        Ok(owner.to_checksum(None))
    }

    async fn token_uri(&self, token_id: TokenId) -> Result<String> {
        self.contract
            .tokenURI(U256::from(token_id))
            .call()
            .await
            .with_context(|| format!("tokenURI({}) call failed", token_id))
    }
}

/// Build an erased HTTP provider for `rpc_url`.
pub fn connect(rpc_url: &str) -> Result<DynProvider> {
    let url = rpc_url
        .parse()
        .map_err(|e| anyhow!("invalid RPC URL '{}': {}", rpc_url, e))?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}
