use crate::variants::Variant;

pub use crate::constants::info::{CITATION, DESCRIPTION, HOMEPAGE};

/// Descriptive dataset metadata exposed alongside the shard plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetInfo {
    /// Variant this metadata describes.
    pub variant: Variant,
    /// Human-readable dataset description.
    pub description: &'static str,
    /// BibTeX citation for the dataset.
    pub citation: &'static str,
    /// Dataset homepage.
    pub homepage: &'static str,
    /// String fields present on every decoded record.
    pub features: [&'static str; 3],
}

impl DatasetInfo {
    pub(crate) fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            description: DESCRIPTION,
            citation: CITATION,
            homepage: HOMEPAGE,
            features: ["text", "timestamp", "url"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_carries_schema_and_provenance() {
        let info = DatasetInfo::for_variant(Variant::En);
        assert_eq!(info.features, ["text", "timestamp", "url"]);
        assert!(info.description.contains("Common Crawl"));
        assert!(info.citation.contains("2019t5"));
        assert!(info.homepage.starts_with("https://"));
    }
}
