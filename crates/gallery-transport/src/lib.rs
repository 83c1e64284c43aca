//! Chain read transport for the dolfina-gallery workspace.
//!
//! Two read-only clients over a shared JSON-RPC provider:
//!
//! - [`Erc721Client`]: collection reads (`tokenURI`, `ownerOf`, `totalSupply`)
//! - [`MarketplaceClient`]: marketplace listing reads, returned as an opaque
//!   positional tuple ([`RawListing`])
//!
//! Both are exposed through async traits ([`CollectionReader`],
//! [`ListingReader`]) so the pipeline can be driven by mock readers in tests.
//! Every call is an independent request/response pair against a stateless
//! shared provider; no locking discipline is required.
//!
//! # Example
//!
//! ```ignore
//! use gallery_transport::{Erc721Client, CollectionReader};
//!
//! let client = Erc721Client::new(&config.rpc_url, &config.collection_address)?;
//! let uri = client.token_uri(1).await?;
//! ```

pub mod erc721;
pub mod marketplace;

pub use erc721::{CollectionReader, Erc721Client};
pub use marketplace::{ListingReader, MarketplaceClient, RawListing, LISTING_FIELD_COUNT};
