use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::ChannelMessage;

mod telegram;

pub use telegram::TelegramSource;

/// A remote platform that can resolve channels and replay their history.
/// The analysis code only talks to this seam, so tests can substitute an
/// in-memory source for the real Telegram session.
#[async_trait]
pub trait MessageSource {
    type Channel: Send + Sync;
    type History: MessageHistory + Send;

    /// Resolves a username or public handle to a channel.
    async fn resolve_channel(&self, handle: &str) -> Result<Self::Channel>;

    /// Opens the channel's history anchored at `anchor`, newest first.
    /// Messages sent after the anchor never appear in the sequence.
    async fn open_history(
        &self,
        channel: &Self::Channel,
        anchor: DateTime<Utc>,
    ) -> Result<Self::History>;
}

/// Lazy message sequence. Each call may suspend while the next batch is
/// fetched from the platform.
#[async_trait]
pub trait MessageHistory {
    async fn next_message(&mut self) -> Result<Option<ChannelMessage>>;
}
