//! Metadata document retrieval.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use gallery_types::MetadataDocument;

use crate::uri::{decode_inline_json, resolve, ResolvedUri};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of off-chain metadata documents.
///
/// This is the seam the enumerator is tested through; the production
/// implementation is [`HttpMetadataFetcher`].
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Resolve and fetch the document behind `uri`.
    ///
    /// Never errors: malformed payloads, unreachable hosts, non-success
    /// statuses, and unparseable bodies all collapse to `None`. The caller
    /// fills defaults.
    async fn fetch_document(&self, uri: &str) -> Option<MetadataDocument>;
}

/// Reqwest-backed metadata fetcher.
pub struct HttpMetadataFetcher {
    client: reqwest::Client,
}

impl HttpMetadataFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    async fn fetch_url(&self, url: &str) -> Option<MetadataDocument> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!(url, error = %e, "metadata request failed");
                return None;
            }
        };
        if !response.status().is_success() {
            debug!(url, status = %response.status(), "metadata request returned non-success");
            return None;
        }
        match response.json::<MetadataDocument>().await {
            Ok(doc) => Some(doc),
            Err(e) => {
                debug!(url, error = %e, "metadata body is not a usable document");
                None
            }
        }
    }
}

impl Default for HttpMetadataFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataFetcher {
    async fn fetch_document(&self, uri: &str) -> Option<MetadataDocument> {
        match resolve(uri) {
            ResolvedUri::InlineBase64(payload) => parse_inline(&payload),
            ResolvedUri::Url(url) => self.fetch_url(&url).await,
        }
    }
}

/// Decode and parse an inline payload. No network involved.
fn parse_inline(payload: &str) -> Option<MetadataDocument> {
    let text = match decode_inline_json(payload) {
        Some(t) => t,
        None => {
            debug!("inline metadata payload is not valid base64 text");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(doc) => Some(doc),
        Err(e) => {
            debug!(error = %e, "inline metadata payload is not valid JSON");
            None
        }
    }
}
