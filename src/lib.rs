#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Process-wide corpus layout and metadata constants.
pub mod constants;
/// Corpus instances, split enumeration, and consumer seams.
pub mod corpus;
/// Decoded record schema.
pub mod data;
mod errors;
/// Batched shard retrieval collaborators.
pub mod fetcher;
/// Descriptive dataset metadata.
pub mod metadata;
/// Pure shard location enumeration.
pub mod resolver;
/// Dataset split labels.
pub mod splits;
/// Lazy record decoding.
pub mod stream;
/// Shared type aliases.
pub mod types;
/// Variant registry and the static shard-count table.
pub mod variants;

pub use corpus::{Corpus, SplitConsumer, SplitShards};
pub use data::Document;
pub use errors::CorpusError;
#[cfg(feature = "huggingface")]
pub use fetcher::HfHubFetcher;
pub use fetcher::ShardFetcher;
pub use metadata::DatasetInfo;
pub use resolver::{ShardLocation, shard_locations};
pub use splits::{ALL_SPLITS, Split};
pub use stream::RecordStream;
pub use types::{LineNumber, RecordIndex, ShardUrl};
pub use variants::{ALL_VARIANTS, Variant};
