//! Behavioral tests for discovery and batched enumeration, driven through
//! mock readers. Timing assertions use paused virtual time, so nothing here
//! depends on the wall clock.

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::time::Instant;

use gallery_enumerator::{enumerate, enumerate_collection};
use gallery_resolver::MetadataSource;
use gallery_transport::CollectionReader;
use gallery_types::{GalleryConfig, MetadataDocument, TokenId};

/// Collection mock: configurable supply, a set of ids whose ownership probe
/// fails, and a log of (operation, id, virtual timestamp).
#[derive(Default)]
struct MockCollection {
    supply: Option<u64>,
    missing: HashSet<TokenId>,
    calls: Mutex<Vec<(String, TokenId, Instant)>>,
}

impl MockCollection {
    fn record(&self, op: &str, id: TokenId) {
        self.calls
            .lock()
            .unwrap()
            .push((op.to_string(), id, Instant::now()));
    }

    fn probe_times(&self) -> Vec<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(op, _, _)| op == "ownerOf")
            .map(|(_, _, at)| *at)
            .collect()
    }
}

#[async_trait]
impl CollectionReader for MockCollection {
    async fn total_supply(&self) -> Result<u64> {
        self.supply.ok_or_else(|| anyhow!("execution reverted"))
    }

    async fn owner_of(&self, token_id: TokenId) -> Result<String> {
        self.record("ownerOf", token_id);
        if self.missing.contains(&token_id) {
            Err(anyhow!("execution reverted: nonexistent token"))
        } else {
            Ok("0x00000000000000000000000000000000000000a1".to_string())
        }
    }

    async fn token_uri(&self, token_id: TokenId) -> Result<String> {
        self.record("tokenURI", token_id);
        Ok(format!("https://example.com/meta/{token_id}.json"))
    }
}

/// Metadata mock: documents for listed ids, `None` for everything else.
#[derive(Default)]
struct MockMetadata {
    documents: Vec<(TokenId, MetadataDocument)>,
    fetched: Mutex<Vec<String>>,
}

#[async_trait]
impl MetadataSource for MockMetadata {
    async fn fetch_document(&self, uri: &str) -> Option<MetadataDocument> {
        self.fetched.lock().unwrap().push(uri.to_string());
        self.documents
            .iter()
            .find(|(id, _)| uri.ends_with(&format!("/{id}.json")))
            .map(|(_, doc)| doc.clone())
    }
}

fn test_config(batch_size: usize) -> GalleryConfig {
    GalleryConfig {
        batch_size,
        ..GalleryConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_supply_failure_falls_back_to_bound_20() {
    let reader = MockCollection {
        supply: None,
        missing: HashSet::from([3, 7]),
        ..Default::default()
    };
    let metadata = MockMetadata::default();

    let tokens = enumerate_collection(&reader, &metadata, &test_config(3)).await;

    assert_eq!(tokens.len(), 18);
    let ids: Vec<TokenId> = tokens.iter().map(|t| t.token_id).collect();
    assert!(!ids.contains(&3));
    assert!(!ids.contains(&7));
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids, sorted, "output must be ascending and duplicate-free");
}

#[tokio::test(start_paused = true)]
async fn test_probed_existing_id_with_unreachable_metadata_gets_defaults() {
    let reader = MockCollection {
        supply: Some(5),
        ..Default::default()
    };
    let metadata = MockMetadata::default();

    let tokens = enumerate_collection(&reader, &metadata, &test_config(3)).await;

    assert_eq!(tokens.len(), 5);
    let five = &tokens[4];
    assert_eq!(five.token_id, 5);
    assert_eq!(five.name, "La Dolfina #5");
    assert_eq!(five.description.as_deref(), Some("Limited Edition"));
    assert!(!five.image.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_failed_probe_is_never_fetched() {
    let reader = MockCollection {
        supply: Some(4),
        missing: HashSet::from([2]),
        ..Default::default()
    };
    let metadata = MockMetadata::default();

    let tokens = enumerate_collection(&reader, &metadata, &test_config(2)).await;

    assert_eq!(
        tokens.iter().map(|t| t.token_id).collect::<Vec<_>>(),
        vec![1, 3, 4]
    );
    // No tokenURI read and no metadata fetch for the id that failed the
    // probe, regardless of what its fetch would have returned.
    let calls = reader.calls.lock().unwrap();
    assert!(!calls.iter().any(|(op, id, _)| op == "tokenURI" && *id == 2));
    drop(calls);
    assert!(!metadata
        .fetched
        .lock()
        .unwrap()
        .iter()
        .any(|uri| uri.ends_with("/2.json")));
}

#[tokio::test(start_paused = true)]
async fn test_document_fields_flow_through() {
    let doc = MetadataDocument {
        name: Some("Cambiaso".to_string()),
        description: Some("Open champion".to_string()),
        image: Some("ipfs://cid/1.png".to_string()),
        attributes: None,
    };
    let reader = MockCollection {
        supply: Some(1),
        ..Default::default()
    };
    let metadata = MockMetadata {
        documents: vec![(1, doc)],
        ..Default::default()
    };

    let tokens = enumerate_collection(&reader, &metadata, &test_config(3)).await;

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].name, "Cambiaso");
    assert_eq!(tokens[0].image, "https://ipfs.io/ipfs/cid/1.png");
}

#[tokio::test(start_paused = true)]
async fn test_ten_ids_batch_two_is_five_delayed_windows() {
    let reader = MockCollection {
        supply: Some(10),
        ..Default::default()
    };
    let metadata = MockMetadata::default();
    let config = test_config(2);

    let start = Instant::now();
    let candidates: Vec<TokenId> = (1..=10).collect();
    let tokens = enumerate(&reader, &metadata, &config, &candidates).await;
    assert_eq!(tokens.len(), 10);

    // Group probe timestamps: mock calls resolve without yielding to the
    // timer, so every member of a window carries the same virtual instant
    // and consecutive windows are exactly one batch delay apart.
    let times = reader.probe_times();
    assert_eq!(times.len(), 10);
    let mut windows: Vec<(Instant, usize)> = Vec::new();
    for t in times {
        match windows.last_mut() {
            Some((at, n)) if *at == t => *n += 1,
            _ => windows.push((t, 1)),
        }
    }
    assert_eq!(windows.len(), 5, "expected five sequential windows");
    for (_, members) in &windows {
        assert_eq!(*members, 2, "each window holds two concurrent probes");
    }
    for pair in windows.windows(2) {
        assert_eq!(pair[1].0 - pair[0].0, config.batch_delay);
    }
    // Four inter-window delays in total: none before the first window and
    // none after the last.
    assert_eq!(start.elapsed(), config.batch_delay * 4);
}
