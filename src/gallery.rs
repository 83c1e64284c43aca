//! The gallery facade: configuration in, presentation-ready data out.

use anyhow::{Context, Result};
use serde::Serialize;

use gallery_enumerator::{enumerate_collection, materialize};
use gallery_marketplace::AuctionResolver;
use gallery_resolver::{HttpMetadataFetcher, MetadataSource};
use gallery_transport::{CollectionReader, Erc721Client, MarketplaceClient};
use gallery_types::{AuctionData, GalleryConfig, TokenId, TokenMetadata};

/// One token's detail view: resolved metadata plus its current owner.
#[derive(Debug, Clone, Serialize)]
pub struct TokenDetail {
    pub token: TokenMetadata,
    /// Current owner, checksummed hex.
    pub owner: String,
}

/// Wires the configured chain clients to the pipeline stages.
pub struct Gallery {
    config: GalleryConfig,
    collection: Erc721Client,
    metadata: HttpMetadataFetcher,
    auctions: AuctionResolver<MarketplaceClient>,
}

impl Gallery {
    pub fn new(config: GalleryConfig) -> Result<Self> {
        let collection = Erc721Client::new(&config.rpc_url, &config.collection_address)?;
        let marketplace = MarketplaceClient::new(&config.rpc_url, &config.marketplace_address)?;
        Ok(Self {
            collection,
            metadata: HttpMetadataFetcher::new(),
            auctions: AuctionResolver::new(marketplace, config.clone()),
            config,
        })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Enumerate the whole collection, ascending by token id.
    ///
    /// Per-token failures degrade to defaults inside the pipeline; an `Err`
    /// here is the single hard-failure state the UI shows as an error
    /// banner.
    pub async fn load_collection(&self) -> Result<Vec<TokenMetadata>> {
        Ok(enumerate_collection(&self.collection, &self.metadata, &self.config).await)
    }

    /// One token's detail view.
    ///
    /// The owner read doubles as the existence check: a token nobody owns is
    /// an error here, matching the gallery's discovery semantics. Metadata
    /// failures still degrade to defaults.
    pub async fn load_token(&self, token_id: TokenId) -> Result<TokenDetail> {
        let owner = self
            .collection
            .owner_of(token_id)
            .await
            .with_context(|| format!("token {} not found", token_id))?;

        let document = match self.collection.token_uri(token_id).await {
            Ok(uri) => self.metadata.fetch_document(&uri).await,
            Err(_) => None,
        };
        Ok(TokenDetail {
            token: materialize(&self.config, token_id, document),
            owner,
        })
    }

    /// Best-effort auction state for one token. Never fails; inconclusive
    /// resolution reports the inactive/unavailable state.
    pub async fn load_auction(&self, token_id: TokenId) -> AuctionData {
        self.auctions.resolve_auction(token_id).await
    }
}
