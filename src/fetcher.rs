use std::path::PathBuf;

use indexmap::IndexMap;

use crate::errors::CorpusError;
use crate::resolver::ShardLocation;
use crate::splits::Split;

/// Batched retrieval collaborator turning remote shard locations into local
/// files.
///
/// Implementations own retry, caching, and on-disk placement policy. A reply
/// must keep every requested split key with the same per-split order and
/// cardinality as the request; returned paths must open as gzip byte
/// streams.
pub trait ShardFetcher {
    /// Retrieve every requested shard, grouped by split, in one call.
    fn fetch(
        &self,
        requests: &IndexMap<Split, Vec<ShardLocation>>,
    ) -> Result<IndexMap<Split, Vec<PathBuf>>, CorpusError>;
}

#[cfg(feature = "huggingface")]
mod hub {
    use std::path::PathBuf;
    use std::thread;
    use std::time::Duration;

    use hf_hub::api::sync::{Api, ApiBuilder, ApiRepo};
    use hf_hub::{Repo, RepoType};
    use indexmap::IndexMap;
    use tracing::{debug, info};

    use super::ShardFetcher;
    use crate::constants::corpus::DATASET_REPO;
    use crate::constants::fetch::{
        CACHE_PROBE_ATTEMPTS, CACHE_PROBE_BACKOFF_MS, DEFAULT_RETRIES,
    };
    use crate::errors::CorpusError;
    use crate::resolver::ShardLocation;
    use crate::splits::Split;

    /// `ShardFetcher` backed by the Hugging Face Hub download cache.
    ///
    /// Downloads go through the hub client's own retry and resume handling;
    /// already-cached shards are returned without touching the network.
    pub struct HfHubFetcher {
        repo_id: String,
        retries: usize,
        progress: bool,
    }

    impl HfHubFetcher {
        /// Fetcher for the canonical corpus repository.
        pub fn new() -> Self {
            Self {
                repo_id: DATASET_REPO.to_string(),
                retries: DEFAULT_RETRIES,
                progress: true,
            }
        }

        /// Override the hub repository (mirrors, private forks).
        pub fn with_repo(mut self, repo_id: impl Into<String>) -> Self {
            self.repo_id = repo_id.into();
            self
        }

        /// Toggle per-file progress reporting.
        pub fn with_progress(mut self, progress: bool) -> Self {
            self.progress = progress;
            self
        }

        fn client(&self) -> Result<Api, CorpusError> {
            ApiBuilder::new()
                .with_progress(self.progress)
                .with_retries(self.retries)
                .with_token(None)
                .build()
                .map_err(|err| CorpusError::Fetch {
                    location: self.repo_id.clone(),
                    reason: format!("failed building hf-hub client: {err}"),
                })
        }

        fn fetch_one(
            &self,
            repo: &ApiRepo,
            location: &ShardLocation,
        ) -> Result<PathBuf, CorpusError> {
            let remote_path = location.relative_path();
            let mut local = repo.get(&remote_path).map_err(|err| CorpusError::Fetch {
                location: location.url(),
                reason: format!("failed downloading from hf-hub: {err}"),
            })?;

            // The hub cache can briefly report a path that has not landed on
            // disk yet; force a fresh download a bounded number of times.
            if !local.exists() {
                for _ in 0..CACHE_PROBE_ATTEMPTS {
                    local = repo.download(&remote_path).map_err(|err| CorpusError::Fetch {
                        location: location.url(),
                        reason: format!(
                            "cache path missing and forced download failed: {err}"
                        ),
                    })?;
                    if local.exists() {
                        break;
                    }
                    thread::sleep(Duration::from_millis(CACHE_PROBE_BACKOFF_MS));
                }
            }
            if !local.exists() {
                return Err(CorpusError::Fetch {
                    location: location.url(),
                    reason: format!(
                        "hf-hub returned non-existent cache file at {}",
                        local.display()
                    ),
                });
            }
            Ok(local)
        }
    }

    impl Default for HfHubFetcher {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ShardFetcher for HfHubFetcher {
        fn fetch(
            &self,
            requests: &IndexMap<Split, Vec<ShardLocation>>,
        ) -> Result<IndexMap<Split, Vec<PathBuf>>, CorpusError> {
            let api = self.client()?;
            let repo = api.repo(Repo::new(self.repo_id.clone(), RepoType::Dataset));

            let mut resolved = IndexMap::new();
            for (split, locations) in requests {
                info!(
                    split = split.as_str(),
                    shards = locations.len(),
                    "fetching split shards"
                );
                let mut files = Vec::with_capacity(locations.len());
                for (ordinal, location) in locations.iter().enumerate() {
                    debug!(
                        "fetching shard {}/{}: {}",
                        ordinal + 1,
                        locations.len(),
                        location.relative_path()
                    );
                    files.push(self.fetch_one(&repo, location)?);
                }
                resolved.insert(*split, files);
            }
            Ok(resolved)
        }
    }
}

#[cfg(feature = "huggingface")]
pub use hub::HfHubFetcher;
