use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One decoded text example from the corpus.
///
/// Every non-empty shard line decodes to exactly these three string fields.
/// A line missing any of them, or carrying a null, fails decoding and ends
/// the streaming pass it occurred in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Cleaned page text.
    pub text: String,
    /// Crawl timestamp as published, an RFC 3339 string.
    pub timestamp: String,
    /// Source page URL.
    pub url: String,
}

impl Document {
    /// Parse the published timestamp, when it is well-formed RFC 3339.
    pub fn timestamp_parsed(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|value| value.with_timezone(&Utc))
    }
}
