use crate::models::ChannelMessage;

/// Summary of one aggregation window. Built per analysis request, rendered
/// once, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelStatistics {
    pub total_messages: u64,
    pub total_views: u64,
    pub total_reactions: u64,
    pub total_comments: u64,
    pub average_views: f64,
    pub average_reactions: f64,
    pub average_comments: f64,
}

/// Running counters for a scan in progress.
#[derive(Default)]
pub struct EngagementTotals {
    messages: u64,
    views: u64,
    reactions: u64,
    comments: u64,
}

impl EngagementTotals {
    pub fn record(&mut self, message: &ChannelMessage) {
        self.messages += 1;
        self.views += message.views.unwrap_or(0);
        self.reactions += message.reactions.unwrap_or(0);
        self.comments += message.comments.unwrap_or(0);
    }

    /// Averages for an empty window are 0, never NaN.
    pub fn into_statistics(self) -> ChannelStatistics {
        let average = |total: u64| {
            if self.messages > 0 {
                total as f64 / self.messages as f64
            } else {
                0.0
            }
        };

        ChannelStatistics {
            average_views: average(self.views),
            average_reactions: average(self.reactions),
            average_comments: average(self.comments),
            total_messages: self.messages,
            total_views: self.views,
            total_reactions: self.reactions,
            total_comments: self.comments,
        }
    }
}
