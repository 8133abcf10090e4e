use crate::constants::corpus::{DATA_HOST, DATASET_REPO, DATASET_REVISION, SHARD_INDEX_WIDTH};
use crate::splits::Split;
use crate::types::ShardUrl;
use crate::variants::Variant;

/// Address of one remote shard, parameterized by variant, split, and index.
///
/// No two variants or splits ever share a location: the variant and split
/// names are embedded in every path this type renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShardLocation {
    variant: Variant,
    split: Split,
    index: usize,
    total: usize,
}

impl ShardLocation {
    /// Variant this shard belongs to.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Split this shard belongs to.
    pub fn split(&self) -> Split {
        self.split
    }

    /// Zero-based shard index within the split.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total shard count for the split, as published.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Repository-relative shard path.
    /// Example: `en/c4-train.00000-of-01024.json.gz`.
    pub fn relative_path(&self) -> String {
        format!(
            "{}/c4-{}.{:0width$}-of-{:0width$}.json.gz",
            self.variant.as_str(),
            self.split.as_str(),
            self.index,
            self.total,
            width = SHARD_INDEX_WIDTH
        )
    }

    /// Fully-formed download URL for this shard.
    pub fn url(&self) -> ShardUrl {
        format!(
            "{DATA_HOST}/datasets/{DATASET_REPO}/resolve/{DATASET_REVISION}/{}",
            self.relative_path()
        )
    }
}

/// Enumerate every shard location for `variant` and `split`.
///
/// Pure string computation, no network or filesystem access: exactly
/// `variant.shard_count(split)` locations, ordered by shard index ascending,
/// covering indices 0..count with no gaps or repeats.
pub fn shard_locations(variant: Variant, split: Split) -> Vec<ShardLocation> {
    let total = variant.shard_count(split);
    (0..total)
        .map(|index| ShardLocation {
            variant,
            split,
            index,
            total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_shard_split_renders_the_published_template() {
        let locations = shard_locations(Variant::RealNewsLike, Split::Validation);
        assert_eq!(locations.len(), 1);
        assert_eq!(
            locations[0].url(),
            "https://huggingface.co/datasets/allenai/c4/resolve/main/realnewslike/c4-validation.00000-of-00001.json.gz"
        );
    }

    #[test]
    fn indices_are_zero_padded_to_five_digits() {
        let locations = shard_locations(Variant::EnNoClean, Split::Train);
        assert_eq!(
            locations[7167].relative_path(),
            "en.noclean/c4-train.07167-of-07168.json.gz"
        );
        assert_eq!(
            locations[9].relative_path(),
            "en.noclean/c4-train.00009-of-07168.json.gz"
        );
    }
}
