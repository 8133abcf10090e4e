use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use indexmap::IndexMap;
use tempfile::tempdir;

use webcorpus::{
    Corpus, CorpusError, RecordStream, ShardFetcher, ShardLocation, Split, SplitConsumer, Variant,
};

/// Fetcher stub that fabricates one local path per requested location and
/// records how it was called.
struct StubFetcher {
    calls: Cell<usize>,
    requested: RefCell<Vec<(Split, usize)>>,
    root: PathBuf,
}

impl StubFetcher {
    fn new(root: &Path) -> Self {
        Self {
            calls: Cell::new(0),
            requested: RefCell::new(Vec::new()),
            root: root.to_path_buf(),
        }
    }
}

impl ShardFetcher for StubFetcher {
    fn fetch(
        &self,
        requests: &IndexMap<Split, Vec<ShardLocation>>,
    ) -> Result<IndexMap<Split, Vec<PathBuf>>, CorpusError> {
        self.calls.set(self.calls.get() + 1);
        let mut resolved = IndexMap::new();
        for (split, locations) in requests {
            self.requested.borrow_mut().push((*split, locations.len()));
            let files = locations
                .iter()
                .map(|location| self.root.join(location.relative_path()))
                .collect();
            resolved.insert(*split, files);
        }
        Ok(resolved)
    }
}

#[test]
fn both_splits_resolve_through_a_single_batched_call() {
    let dir = tempdir().unwrap();
    let fetcher = StubFetcher::new(dir.path());
    let corpus = Corpus::new(Variant::RealNewsLike);

    let groups = corpus.prepare_splits(&fetcher).unwrap();

    assert_eq!(fetcher.calls.get(), 1);
    assert_eq!(
        *fetcher.requested.borrow(),
        vec![(Split::Train, 512), (Split::Validation, 1)]
    );

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].split(), Split::Train);
    assert_eq!(groups[0].files().len(), 512);
    assert_eq!(groups[1].split(), Split::Validation);
    assert_eq!(groups[1].files().len(), 1);

    // File order mirrors shard-index order.
    assert!(
        groups[0].files()[0]
            .to_string_lossy()
            .ends_with("c4-train.00000-of-00512.json.gz")
    );
    assert!(
        groups[0].files()[511]
            .to_string_lossy()
            .ends_with("c4-train.00511-of-00512.json.gz")
    );
}

struct DroppingFetcher;

impl ShardFetcher for DroppingFetcher {
    fn fetch(
        &self,
        requests: &IndexMap<Split, Vec<ShardLocation>>,
    ) -> Result<IndexMap<Split, Vec<PathBuf>>, CorpusError> {
        let mut resolved = IndexMap::new();
        for (split, locations) in requests {
            if *split == Split::Validation {
                continue;
            }
            resolved.insert(*split, vec![PathBuf::new(); locations.len()]);
        }
        Ok(resolved)
    }
}

#[test]
fn fetcher_reply_dropping_a_split_is_a_retrieval_fault() {
    let corpus = Corpus::new(Variant::En);
    let err = corpus.prepare_splits(&DroppingFetcher).unwrap_err();
    assert!(matches!(err, CorpusError::Fetch { .. }));
    assert!(err.to_string().contains("dropped a requested split"));
}

struct TruncatingFetcher;

impl ShardFetcher for TruncatingFetcher {
    fn fetch(
        &self,
        requests: &IndexMap<Split, Vec<ShardLocation>>,
    ) -> Result<IndexMap<Split, Vec<PathBuf>>, CorpusError> {
        let mut resolved = IndexMap::new();
        for (split, locations) in requests {
            let mut files = vec![PathBuf::new(); locations.len()];
            files.pop();
            resolved.insert(*split, files);
        }
        Ok(resolved)
    }
}

#[test]
fn fetcher_reply_with_wrong_cardinality_is_a_retrieval_fault() {
    let corpus = Corpus::new(Variant::En);
    let err = corpus.prepare_splits(&TruncatingFetcher).unwrap_err();
    assert!(matches!(err, CorpusError::Fetch { .. }));
    assert!(err.to_string().contains("1023 files for 1024"));
}

/// Fetcher serving prebuilt local shard fixtures for `realnewslike`-shaped
/// requests, one tiny shard per split.
struct FixtureFetcher {
    train: PathBuf,
    validation: PathBuf,
}

impl ShardFetcher for FixtureFetcher {
    fn fetch(
        &self,
        requests: &IndexMap<Split, Vec<ShardLocation>>,
    ) -> Result<IndexMap<Split, Vec<PathBuf>>, CorpusError> {
        let mut resolved = IndexMap::new();
        for (split, locations) in requests {
            let fixture = match split {
                Split::Train => &self.train,
                Split::Validation => &self.validation,
            };
            resolved.insert(*split, vec![fixture.clone(); locations.len()]);
        }
        Ok(resolved)
    }
}

struct CollectingConsumer {
    seen: Vec<(Split, Vec<u64>)>,
}

impl SplitConsumer for CollectingConsumer {
    fn consume(&mut self, split: Split, records: RecordStream) -> Result<(), CorpusError> {
        let mut ids = Vec::new();
        for entry in records {
            let (id, _) = entry?;
            ids.push(id);
        }
        self.seen.push((split, ids));
        Ok(())
    }
}

fn write_fixture(dir: &Path, name: &str, texts: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    for text in texts {
        let line = format!(
            r#"{{"text":"{text}","timestamp":"2019-04-25T12:57:54Z","url":"https://example.com/{text}"}}"#
        );
        enc.write_all(line.as_bytes()).unwrap();
        enc.write_all(b"\n").unwrap();
    }
    enc.finish().unwrap();
    path
}

#[test]
fn materialize_drives_both_splits_in_canonical_order() {
    let dir = tempdir().unwrap();
    let fetcher = FixtureFetcher {
        train: write_fixture(dir.path(), "train.json.gz", &["t0", "t1"]),
        validation: write_fixture(dir.path(), "validation.json.gz", &["v0"]),
    };
    let corpus = Corpus::new(Variant::RealNewsLike);
    let mut consumer = CollectingConsumer { seen: Vec::new() };

    corpus.materialize(&fetcher, &mut consumer).unwrap();

    assert_eq!(consumer.seen.len(), 2);
    let (train_split, train_ids) = &consumer.seen[0];
    assert_eq!(*train_split, Split::Train);
    // 512 copies of the two-record fixture, ids dense with no per-shard reset.
    assert_eq!(train_ids.len(), 1024);
    assert_eq!(train_ids.first(), Some(&0));
    assert_eq!(train_ids.last(), Some(&1023));

    let (validation_split, validation_ids) = &consumer.seen[1];
    assert_eq!(*validation_split, Split::Validation);
    // Each split's stream restarts id assignment from zero.
    assert_eq!(validation_ids, &vec![0]);
}

#[test]
fn info_exposes_schema_and_variant() {
    let corpus = Corpus::new(Variant::EnNoClean);
    let info = corpus.info();
    assert_eq!(info.variant, Variant::EnNoClean);
    assert_eq!(info.features, ["text", "timestamp", "url"]);
}
