use anyhow::Result;
use tracing::{debug, error};

use crate::error::AnalyzerError;
use crate::models::{AggregationWindow, AnalysisRequest, ChannelStatistics, EngagementTotals};
use crate::source::{MessageHistory, MessageSource};

/// Scans the channel's history newest-first from the window anchor,
/// summing engagement counters until the window's lower bound.
pub async fn aggregate_channel<S: MessageSource>(
    source: &S,
    handle: &str,
    window: &AggregationWindow,
) -> Result<ChannelStatistics> {
    let channel = source.resolve_channel(handle).await?;
    let mut history = source.open_history(&channel, window.anchor()).await?;

    let mut totals = EngagementTotals::default();
    while let Some(message) = history.next_message().await? {
        // The sequence is monotone newest-first, so the first message
        // before the window start ends the scan; everything behind it is
        // older still. Stop, don't filter.
        if message.sent_at < window.start() {
            break;
        }
        totals.record(&message);
    }

    Ok(totals.into_statistics())
}

/// Boundary around the scan: any session, resolution or fetch fault is
/// logged and collapses to `None`. No partial statistics get out.
pub async fn fetch_channel_statistics<S: MessageSource>(
    source: &S,
    handle: &str,
    window: &AggregationWindow,
) -> Option<ChannelStatistics> {
    match aggregate_channel(source, handle, window).await {
        Ok(statistics) => {
            debug!(
                channel = handle,
                messages = statistics.total_messages,
                "aggregation finished"
            );
            Some(statistics)
        }
        Err(err) => {
            error!(channel = handle, error = %err, "failed to fetch channel statistics");
            None
        }
    }
}

/// One user-triggered analysis, driven to completion before the caller
/// gets control back. A window with zero messages is reported the same way
/// as a failed fetch.
pub async fn run_analysis<S: MessageSource>(
    source: &S,
    request: &AnalysisRequest,
) -> Result<ChannelStatistics, AnalyzerError> {
    let window = AggregationWindow::parse(&request.start, &request.end)?;

    let statistics = fetch_channel_statistics(source, &request.channel, &window)
        .await
        .ok_or(AnalyzerError::NoData)?;

    if statistics.total_messages == 0 {
        return Err(AnalyzerError::NoData);
    }

    Ok(statistics)
}
