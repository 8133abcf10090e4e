/// Dense zero-based identifier assigned to each streamed record.
/// Counts across every shard of one split with no per-shard reset.
pub type RecordIndex = u64;
/// Fully-formed remote shard address.
/// Example: `https://huggingface.co/datasets/allenai/c4/resolve/main/en/c4-train.00000-of-01024.json.gz`
pub type ShardUrl = String;
/// One-based line position inside a shard, reported in decode errors.
pub type LineNumber = usize;
