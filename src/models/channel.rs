use chrono::{DateTime, Utc};

/// One broadcast item with its engagement metadata. Counters the platform
/// did not attach to the message stay `None` and count as zero.
#[derive(Debug, Clone)]
pub struct ChannelMessage {
    pub sent_at: DateTime<Utc>,
    pub views: Option<u64>,
    /// Sum of the per-reaction tallies on the message.
    pub reactions: Option<u64>,
    pub comments: Option<u64>,
}

/// One analysis request as typed by the user; the date strings are
/// validated when the window is parsed, not here.
#[derive(Debug)]
pub struct AnalysisRequest {
    pub channel: String,
    pub start: String,
    pub end: String,
}
