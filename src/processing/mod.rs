mod analysis;

pub use analysis::{aggregate_channel, fetch_channel_statistics, run_analysis};
