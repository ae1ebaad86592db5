mod channel;
mod stats;
mod window;

pub use channel::{AnalysisRequest, ChannelMessage};
pub use stats::{ChannelStatistics, EngagementTotals};
pub use window::AggregationWindow;
