//! Token metadata types.
//!
//! [`MetadataDocument`] is the raw off-chain JSON shape as hosts actually
//! serve it: every field optional, no schema enforced. [`TokenMetadata`] is
//! the resolved, presentation-ready record the enumerator produces from a
//! document (or from defaults when resolution fails).

use serde::{Deserialize, Serialize};

use crate::TokenId;

/// A single `trait_type`/`value` attribute pair.
///
/// `value` is kept as a raw JSON value because hosts serve both strings and
/// numbers here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAttribute {
    pub trait_type: String,
    pub value: serde_json::Value,
}

/// The off-chain metadata document, as fetched.
///
/// Best-effort field presence only. Unknown fields are ignored; missing
/// fields deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub attributes: Option<Vec<TokenAttribute>>,
}

/// A resolved token ready for rendering.
///
/// Invariant: `image` is always directly renderable: either an HTTP(S) URL
/// (gateway-rewritten if the document used `ipfs://`) or a local fallback
/// path. Raw `ipfs://` values never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub token_id: TokenId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image: String,
    #[serde(default)]
    pub attributes: Option<Vec<TokenAttribute>>,
}
