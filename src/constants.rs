use crate::splits::Split;

/// Constants describing the remote corpus layout.
pub mod corpus {
    /// Host serving every corpus shard.
    pub const DATA_HOST: &str = "https://huggingface.co";
    /// Hub repository holding all variants of the corpus.
    pub const DATASET_REPO: &str = "allenai/c4";
    /// Repository revision the shard URLs resolve against.
    pub const DATASET_REVISION: &str = "main";
    /// Zero-padding width for shard indices and totals in shard filenames.
    pub const SHARD_INDEX_WIDTH: usize = 5;
}

/// Constants used by the built-in Hugging Face Hub fetcher.
pub mod fetch {
    /// Default download retry count passed to the hub client.
    pub const DEFAULT_RETRIES: usize = 5;
    /// Attempts to re-probe the hub cache when it reports a path that does
    /// not exist on disk yet.
    pub const CACHE_PROBE_ATTEMPTS: usize = 5;
    /// Backoff between cache probes, in milliseconds.
    pub const CACHE_PROBE_BACKOFF_MS: u64 = 400;
}

/// Canonical split handling.
pub mod splits {
    use super::Split;

    /// Canonical split iteration order used when enumerating all splits.
    pub const ALL_SPLITS: [Split; 2] = [Split::Train, Split::Validation];
}

/// Descriptive dataset metadata text.
pub mod info {
    /// Human-readable dataset description.
    pub const DESCRIPTION: &str = "\
A colossal, cleaned version of Common Crawl's web crawl corpus.

Based on Common Crawl dataset: \"https://commoncrawl.org\".

This is the processed version of Google's C4 dataset by AllenAI.
";

    /// BibTeX citation for the dataset.
    pub const CITATION: &str = "\
@article{2019t5,
    author = {Colin Raffel and Noam Shazeer and Adam Roberts and Katherine Lee and Sharan Narang and Michael Matena and Yanqi Zhou and Wei Li and Peter J. Liu},
    title = {Exploring the Limits of Transfer Learning with a Unified Text-to-Text Transformer},
    journal = {arXiv e-prints},
    year = {2019},
    archivePrefix = {arXiv},
    eprint = {1910.10683},
}
";

    /// Dataset homepage.
    pub const HOMEPAGE: &str = "https://github.com/allenai/allennlp/discussions/5056";
}
