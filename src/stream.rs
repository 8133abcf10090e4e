use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::PathBuf;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::data::Document;
use crate::errors::CorpusError;
use crate::types::{LineNumber, RecordIndex};

/// Lazy, ordered stream of `(id, Document)` pairs over local shard files.
///
/// Shards are processed strictly in the given order with one open
/// decompression handle at a time; each handle is released as soon as its
/// shard is fully consumed. Ids start at 0 and grow by exactly 1 per
/// emitted record, with no per-shard reset. Entirely empty lines are
/// skipped without consuming an id.
///
/// The first decoding fault (unreadable gzip, invalid UTF-8, malformed
/// JSON, missing field) is yielded as an error and fuses the stream;
/// records yielded before the fault remain valid. Construct a new stream
/// from the same file list to restart from id 0.
pub struct RecordStream {
    pending: std::vec::IntoIter<PathBuf>,
    current: Option<OpenShard>,
    next_index: RecordIndex,
    faulted: bool,
}

struct OpenShard {
    path: PathBuf,
    lines: Lines<BufReader<MultiGzDecoder<File>>>,
    line: LineNumber,
}

impl RecordStream {
    /// Stream records from `files`, in the given order.
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            pending: files.into_iter(),
            current: None,
            next_index: 0,
            faulted: false,
        }
    }

    fn open_next(&mut self) -> Result<bool, CorpusError> {
        let Some(path) = self.pending.next() else {
            return Ok(false);
        };
        debug!(shard = %path.display(), "streaming records from shard");
        // Shards may hold concatenated gzip members; MultiGzDecoder reads
        // through member boundaries the same way the upstream pipeline does.
        let file = File::open(&path).map_err(|err| CorpusError::ShardOpen {
            shard: path.clone(),
            reason: err.to_string(),
        })?;
        self.current = Some(OpenShard {
            lines: BufReader::new(MultiGzDecoder::new(file)).lines(),
            path,
            line: 0,
        });
        Ok(true)
    }

    fn fault(&mut self, error: CorpusError) -> Option<<Self as Iterator>::Item> {
        self.faulted = true;
        self.current = None;
        Some(Err(error))
    }
}

impl Iterator for RecordStream {
    type Item = Result<(RecordIndex, Document), CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.faulted {
            return None;
        }
        loop {
            let Some(shard) = self.current.as_mut() else {
                match self.open_next() {
                    Ok(true) => continue,
                    Ok(false) => return None,
                    Err(error) => return self.fault(error),
                }
            };

            shard.line += 1;
            match shard.lines.next() {
                None => {
                    // Fully consumed; drop the handle before the next shard.
                    self.current = None;
                }
                Some(Err(err)) => {
                    let error = CorpusError::Decode {
                        shard: shard.path.clone(),
                        line: shard.line,
                        reason: format!("unreadable gzip text: {err}"),
                    };
                    return self.fault(error);
                }
                Some(Ok(text)) => {
                    if text.is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<Document>(&text) {
                        Ok(document) => {
                            let id = self.next_index;
                            self.next_index += 1;
                            return Some(Ok((id, document)));
                        }
                        Err(err) => {
                            let error = CorpusError::Decode {
                                shard: shard.path.clone(),
                                line: shard.line,
                                reason: format!("malformed record: {err}"),
                            };
                            return self.fault(error);
                        }
                    }
                }
            }
        }
    }
}
