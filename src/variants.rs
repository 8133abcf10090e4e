use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CorpusError;
use crate::splits::Split;

/// Named dataset configurations selectable at corpus construction.
///
/// The registry is fixed at authoring time: each variant carries its own
/// static shard-count table and its own shard namespace on the remote host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Cleaned English corpus.
    #[serde(rename = "en")]
    En,
    /// Subset restricted to domains resembling the RealNews corpus.
    #[serde(rename = "realnewslike")]
    RealNewsLike,
    /// English corpus cleaned without the bad-words blocklist filter.
    #[serde(rename = "en.noblocklist")]
    EnNoBlocklist,
    /// Raw English corpus with no cleaning applied.
    #[serde(rename = "en.noclean")]
    EnNoClean,
}

/// Canonical registry order for all published variants.
pub const ALL_VARIANTS: [Variant; 4] = [
    Variant::En,
    Variant::RealNewsLike,
    Variant::EnNoBlocklist,
    Variant::EnNoClean,
];

impl Variant {
    /// Canonical variant name used in shard paths.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Variant::En => "en",
            Variant::RealNewsLike => "realnewslike",
            Variant::EnNoBlocklist => "en.noblocklist",
            Variant::EnNoClean => "en.noclean",
        }
    }

    /// Number of shards published for `split` in this variant.
    ///
    /// The table is fixed ahead of time and never recomputed; shard indices
    /// run contiguously from 0 to the returned count minus one.
    pub const fn shard_count(&self, split: Split) -> usize {
        match (self, split) {
            (Variant::En, Split::Train) => 1024,
            (Variant::En, Split::Validation) => 8,
            (Variant::RealNewsLike, Split::Train) => 512,
            (Variant::RealNewsLike, Split::Validation) => 1,
            (Variant::EnNoBlocklist, Split::Train) => 1024,
            (Variant::EnNoBlocklist, Split::Validation) => 8,
            (Variant::EnNoClean, Split::Train) => 7168,
            (Variant::EnNoClean, Split::Validation) => 64,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = CorpusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ALL_VARIANTS
            .into_iter()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| {
                CorpusError::Configuration(format!(
                    "unknown variant '{value}' (expected one of: en, realnewslike, en.noblocklist, en.noclean)"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_round_trip() {
        for variant in ALL_VARIANTS {
            assert_eq!(variant.as_str().parse::<Variant>().unwrap(), variant);
            assert_eq!(variant.to_string(), variant.as_str());
        }
    }

    #[test]
    fn unknown_variant_is_a_configuration_fault() {
        let err = "en.nosuch".parse::<Variant>().unwrap_err();
        assert!(matches!(err, CorpusError::Configuration(_)));
        assert!(err.to_string().contains("unknown variant 'en.nosuch'"));
    }

    #[test]
    fn shard_count_table_matches_publication() {
        assert_eq!(Variant::En.shard_count(Split::Train), 1024);
        assert_eq!(Variant::En.shard_count(Split::Validation), 8);
        assert_eq!(Variant::RealNewsLike.shard_count(Split::Train), 512);
        assert_eq!(Variant::RealNewsLike.shard_count(Split::Validation), 1);
        assert_eq!(Variant::EnNoBlocklist.shard_count(Split::Train), 1024);
        assert_eq!(Variant::EnNoBlocklist.shard_count(Split::Validation), 8);
        assert_eq!(Variant::EnNoClean.shard_count(Split::Train), 7168);
        assert_eq!(Variant::EnNoClean.shard_count(Split::Validation), 64);
    }
}
