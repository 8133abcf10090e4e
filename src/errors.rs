use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::LineNumber;

/// Error type for corpus configuration, shard retrieval, and decoding failures.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("shard retrieval failed for '{location}': {reason}")]
    Fetch { location: String, reason: String },
    #[error("failed opening shard {}: {reason}", .shard.display())]
    ShardOpen { shard: PathBuf, reason: String },
    #[error("shard {} is undecodable at line {line}: {reason}", .shard.display())]
    Decode {
        shard: PathBuf,
        line: LineNumber,
        reason: String,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
