use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::info;

use crate::errors::CorpusError;
use crate::fetcher::ShardFetcher;
use crate::metadata::DatasetInfo;
use crate::resolver::{ShardLocation, shard_locations};
use crate::splits::{ALL_SPLITS, Split};
use crate::stream::RecordStream;
use crate::variants::Variant;

/// One corpus instance bound to a single variant, immutable afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Corpus {
    variant: Variant,
}

impl Corpus {
    /// Bind a corpus instance to `variant`.
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    /// The variant this instance was constructed with.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Descriptive metadata for this variant.
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo::for_variant(self.variant)
    }

    /// Compute the full shard plan: every remote location for both splits,
    /// in canonical split order. Pure computation, no I/O.
    pub fn shard_plan(&self) -> IndexMap<Split, Vec<ShardLocation>> {
        let mut plan = IndexMap::new();
        for split in ALL_SPLITS {
            plan.insert(split, shard_locations(self.variant, split));
        }
        plan
    }

    /// Resolve both splits to local shard files through `fetcher`.
    ///
    /// All locations for both splits go to the fetcher in a single batched
    /// call; the fetcher is free to parallelize, serve from cache, or
    /// retrieve sequentially. The reply must echo each requested split with
    /// the same order and cardinality; anything else is a retrieval fault.
    pub fn prepare_splits(
        &self,
        fetcher: &dyn ShardFetcher,
    ) -> Result<Vec<SplitShards>, CorpusError> {
        let plan = self.shard_plan();
        info!(
            variant = self.variant.as_str(),
            train_shards = plan[&Split::Train].len(),
            validation_shards = plan[&Split::Validation].len(),
            "resolving corpus shards"
        );
        let mut resolved = fetcher.fetch(&plan)?;

        let mut groups = Vec::with_capacity(plan.len());
        for (split, locations) in &plan {
            let files = resolved
                .swap_remove(split)
                .ok_or_else(|| CorpusError::Fetch {
                    location: split.to_string(),
                    reason: "fetcher reply dropped a requested split".to_string(),
                })?;
            if files.len() != locations.len() {
                return Err(CorpusError::Fetch {
                    location: split.to_string(),
                    reason: format!(
                        "fetcher returned {} files for {} requested shards",
                        files.len(),
                        locations.len()
                    ),
                });
            }
            groups.push(SplitShards {
                split: *split,
                files,
            });
        }
        Ok(groups)
    }

    /// Drive both splits through `consumer` in canonical order.
    ///
    /// Each split gets a fresh `RecordStream`; the consumer decides whether
    /// to drain it fully or abandon it early.
    pub fn materialize(
        &self,
        fetcher: &dyn ShardFetcher,
        consumer: &mut dyn SplitConsumer,
    ) -> Result<(), CorpusError> {
        for shards in self.prepare_splits(fetcher)? {
            consumer.consume(shards.split, shards.records())?;
        }
        Ok(())
    }
}

/// Local shard files resolved for one split.
#[derive(Clone, Debug)]
pub struct SplitShards {
    split: Split,
    files: Vec<PathBuf>,
}

impl SplitShards {
    /// The split these shards belong to.
    pub fn split(&self) -> Split {
        self.split
    }

    /// Resolved local shard files, in shard-index order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Start a fresh streaming pass over this split's records.
    ///
    /// Every call restarts from id 0 over the same shard list; two passes
    /// over unchanged files yield identical sequences.
    pub fn records(&self) -> RecordStream {
        RecordStream::new(self.files.clone())
    }
}

/// External orchestration capability that drains one split's records.
///
/// The corpus never retains records itself; whoever implements this trait
/// decides what materializing a split means.
pub trait SplitConsumer {
    /// Consume one split's stream to completion or early termination.
    fn consume(&mut self, split: Split, records: RecordStream) -> Result<(), CorpusError>;
}
