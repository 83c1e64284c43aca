//! Windowed enumeration of the candidate id space.

use futures::future::join_all;
use tracing::debug;

use gallery_resolver::{rewrite_ipfs, MetadataSource};
use gallery_transport::CollectionReader;
use gallery_types::{GalleryConfig, MetadataDocument, TokenId, TokenMetadata};

use crate::discovery::{candidate_ids, probe_exists};

/// Discover candidates and enumerate them. The gallery-view entry point.
pub async fn enumerate_collection<C, M>(
    reader: &C,
    metadata: &M,
    config: &GalleryConfig,
) -> Vec<TokenMetadata>
where
    C: CollectionReader,
    M: MetadataSource,
{
    let candidates = candidate_ids(reader, config).await;
    enumerate(reader, metadata, config, &candidates).await
}

/// Resolve `candidates` in sequential windows of `config.batch_size`
/// concurrent operations, with `config.batch_delay` between windows.
///
/// Output is ascending by id and duplicate-free (candidates are iterated in
/// order and each window's results are appended in order). An id is omitted
/// only when its existence probe fails; a probed-existing id always yields
/// an entry, with defaults filled where metadata resolution came up short.
pub async fn enumerate<C, M>(
    reader: &C,
    metadata: &M,
    config: &GalleryConfig,
    candidates: &[TokenId],
) -> Vec<TokenMetadata>
where
    C: CollectionReader,
    M: MetadataSource,
{
    let mut tokens = Vec::new();
    let mut windows = candidates.chunks(config.effective_batch_size()).peekable();

    while let Some(window) = windows.next() {
        let resolved = join_all(
            window
                .iter()
                .map(|&id| resolve_token(reader, metadata, config, id)),
        )
        .await;
        tokens.extend(resolved.into_iter().flatten());

        // Throttle between windows, not after the last one.
        if windows.peek().is_some() {
            tokio::time::sleep(config.batch_delay).await;
        }
    }

    debug!(
        candidates = candidates.len(),
        resolved = tokens.len(),
        "enumeration complete"
    );
    tokens
}

/// Resolve one token: probe, then fetch, then materialize.
///
/// `None` means the probe failed; every other outcome produces an entry.
async fn resolve_token<C, M>(
    reader: &C,
    metadata: &M,
    config: &GalleryConfig,
    token_id: TokenId,
) -> Option<TokenMetadata>
where
    C: CollectionReader,
    M: MetadataSource,
{
    if !probe_exists(reader, token_id).await {
        return None;
    }

    let document = match reader.token_uri(token_id).await {
        Ok(uri) => metadata.fetch_document(&uri).await,
        Err(e) => {
            debug!(token_id, error = %e, "tokenURI read failed, using defaults");
            None
        }
    };
    Some(materialize(config, token_id, document))
}

/// Build the presentation record, filling defaults for anything the
/// document did not provide. The image is gateway-rewritten here so raw
/// `ipfs://` values never leave the pipeline.
pub fn materialize(
    config: &GalleryConfig,
    token_id: TokenId,
    document: Option<MetadataDocument>,
) -> TokenMetadata {
    let doc = document.unwrap_or_default();
    TokenMetadata {
        token_id,
        name: doc
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| config.fallback_name(token_id)),
        description: Some(
            doc.description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| config.fallback_description.clone()),
        ),
        image: doc
            .image
            .filter(|i| !i.is_empty())
            .map(|i| rewrite_ipfs(&i))
            .unwrap_or_else(|| config.fallback_image(token_id)),
        attributes: doc.attributes,
    }
}
