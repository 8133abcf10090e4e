use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CorpusError;

pub use crate::constants::splits::ALL_SPLITS;

/// Logical dataset partitions published for this corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    /// Training split.
    Train,
    /// Validation split.
    Validation,
}

impl Split {
    /// Canonical lowercase name used in shard filenames.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "validation",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = CorpusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "train" => Ok(Split::Train),
            "validation" => Ok(Split::Validation),
            other => Err(CorpusError::Configuration(format!(
                "unknown split '{other}' (expected 'train' or 'validation')"
            ))),
        }
    }
}
