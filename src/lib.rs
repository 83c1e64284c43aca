//! dolfina-gallery: on-chain data resolution for an NFT gallery front-end.
//!
//! Everything a gallery UI needs from the chain, behind one facade:
//!
//! - **Collection view**: discover which tokens exist and resolve each one's
//!   metadata (HTTP, IPFS, or inline base64), with bounded request fan-out
//!   and an inter-batch throttle; see [`Gallery::load_collection`]
//! - **Detail view**: one token's metadata plus its current owner; see
//!   [`Gallery::load_token`]
//! - **Auction panel**: best-effort marketplace state recovered by bounded
//!   exploratory probing of an unreliable accessor; see
//!   [`Gallery::load_auction`]
//!
//! The member crates hold the pipeline stages; this crate only wires them to
//! real clients and exposes the presentation-facing surface
//! ([`FetchState`], ordered [`TokenMetadata`], [`AuctionData`]).

pub mod gallery;

pub use gallery::{Gallery, TokenDetail};
pub use gallery_types::{
    short_address, AuctionData, FetchState, GalleryConfig, Listing, MetadataDocument,
    TokenAttribute, TokenId, TokenMetadata,
};
