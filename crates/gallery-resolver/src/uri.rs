//! URI classification.
//!
//! Classification is a pure function of the string prefix and never fails;
//! malformed payloads are detected by the caller when it tries to decode or
//! parse them.

use base64::Engine;

/// Public IPFS gateway used for `ipfs://` rewriting. Fixed by design; the
/// original front-end hardcodes the same gateway.
pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

const INLINE_JSON_PREFIX: &str = "data:application/json;base64,";

/// A token URI classified into one of its fetchable forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedUri {
    /// Fetch over HTTP(S). Covers plain URLs and gateway-rewritten IPFS.
    Url(String),
    /// Inline document; the payload is the still-encoded base64 text and is
    /// never fetched over the network.
    InlineBase64(String),
}

/// Classify `uri` by prefix.
///
/// - `ipfs://rest` becomes `https://ipfs.io/ipfs/rest`
/// - `data:application/json;base64,payload` keeps the raw payload
/// - anything else is assumed to be HTTP(S) and passed through unchanged
pub fn resolve(uri: &str) -> ResolvedUri {
    if let Some(payload) = uri.strip_prefix(INLINE_JSON_PREFIX) {
        return ResolvedUri::InlineBase64(payload.to_string());
    }
    ResolvedUri::Url(rewrite_ipfs(uri))
}

/// Apply the gateway rewriting rule to a single URL.
///
/// Used directly on `image` fields so raw `ipfs://` values never reach the
/// presentation layer.
pub fn rewrite_ipfs(url: &str) -> String {
    match url.strip_prefix("ipfs://") {
        Some(rest) => format!("{IPFS_GATEWAY}{rest}"),
        None => url.to_string(),
    }
}

/// Decode an inline base64 payload to JSON text.
///
/// Returns `None` on malformed base64 or non-UTF-8 content; whether the text
/// is valid JSON is the caller's problem.
pub fn decode_inline_json(payload: &str) -> Option<String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .ok()?;
    String::from_utf8(bytes).ok()
}
