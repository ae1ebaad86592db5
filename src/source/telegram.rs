use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use grammers_client::session::Session;
use grammers_client::types::{Chat, Message};
use grammers_client::{Client, Config, SignInError};
use grammers_tl_types as tl;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{MessageHistory, MessageSource};
use crate::config::ApiCredentials;
use crate::models::ChannelMessage;
use crate::utils::prompt_line;

const SESSION_FILE: &str = "channel_analyzer.session";

/// Pump buffer, roughly one server-side history batch.
const HISTORY_BUFFER: usize = 100;

/// The one Telegram session of the process. Connected at startup and
/// passed by reference into each analysis.
pub struct TelegramSource {
    client: Client,
}

pub struct TelegramChannel {
    chat: Chat,
}

/// Handle on one in-flight history walk. Dropping it tears the pump down.
pub struct TelegramHistory {
    messages: mpsc::Receiver<Result<ChannelMessage>>,
    pump: JoinHandle<()>,
}

impl TelegramSource {
    /// Connects and, if the session file is not yet authorized, runs the
    /// interactive phone/code login on stdin.
    pub async fn connect(credentials: &ApiCredentials) -> Result<Self> {
        let client = Client::connect(Config {
            session: Session::load_file_or_create(SESSION_FILE)
                .context("failed to open session file")?,
            api_id: credentials.api_id,
            api_hash: credentials.api_hash.clone(),
            params: Default::default(),
        })
        .await
        .context("failed to connect to Telegram")?;

        if !client.is_authorized().await? {
            sign_in(&client).await?;
            client
                .session()
                .save_to_file(SESSION_FILE)
                .context("failed to save session file")?;
        }

        Ok(Self { client })
    }
}

async fn sign_in(client: &Client) -> Result<()> {
    let phone = prompt_line("Phone number (international format)")?;
    let token = client.request_login_code(&phone).await?;
    let code = prompt_line("Login code")?;

    match client.sign_in(&token, &code).await {
        Ok(_) => Ok(()),
        Err(SignInError::PasswordRequired(password_token)) => {
            let hint = password_token.hint().unwrap_or("none");
            let password = prompt_line(&format!("2FA password (hint: {hint})"))?;
            client.check_password(password_token, password).await?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[async_trait]
impl MessageSource for TelegramSource {
    type Channel = TelegramChannel;
    type History = TelegramHistory;

    async fn resolve_channel(&self, handle: &str) -> Result<TelegramChannel> {
        let handle = handle.trim().trim_start_matches('@');
        let chat = self
            .client
            .resolve_username(handle)
            .await
            .with_context(|| format!("failed to resolve channel `{handle}`"))?;

        match chat {
            Some(chat) => Ok(TelegramChannel { chat }),
            None => bail!("channel `{handle}` not found"),
        }
    }

    async fn open_history(
        &self,
        channel: &TelegramChannel,
        anchor: DateTime<Utc>,
    ) -> Result<TelegramHistory> {
        let client = self.client.clone();
        let chat = channel.chat.clone();
        let (tx, rx) = mpsc::channel(HISTORY_BUFFER);

        // Runs until the history is exhausted, an error is forwarded, or
        // the receiving side hangs up.
        let pump = tokio::spawn(async move {
            let mut messages = client.iter_messages(&chat);
            loop {
                match messages.next().await {
                    Ok(Some(message)) => {
                        // History runs newest-first; everything newer than
                        // the anchor is outside the window.
                        if message.date() > anchor {
                            continue;
                        }
                        if tx.send(Ok(convert(&message))).await.is_err() {
                            return;
                        }
                    }
                    Ok(None) => return,
                    Err(err) => {
                        let _ = tx.send(Err(err.into())).await;
                        return;
                    }
                }
            }
        });

        Ok(TelegramHistory { messages: rx, pump })
    }
}

#[async_trait]
impl MessageHistory for TelegramHistory {
    async fn next_message(&mut self) -> Result<Option<ChannelMessage>> {
        match self.messages.recv().await {
            Some(Ok(message)) => Ok(Some(message)),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }
}

impl Drop for TelegramHistory {
    fn drop(&mut self) {
        self.pump.abort();
    }
}

fn convert(message: &Message) -> ChannelMessage {
    ChannelMessage {
        sent_at: message.date(),
        views: message.raw.views.map(to_count),
        reactions: message.raw.reactions.as_ref().map(reaction_total),
        comments: message.raw.replies.as_ref().map(reply_total),
    }
}

fn to_count(value: i32) -> u64 {
    value.max(0) as u64
}

fn reaction_total(reactions: &tl::enums::MessageReactions) -> u64 {
    let tl::enums::MessageReactions::Reactions(reactions) = reactions;
    reactions
        .results
        .iter()
        .map(|tally| {
            let tl::enums::ReactionCount::Count(tally) = tally;
            to_count(tally.count)
        })
        .sum()
}

fn reply_total(replies: &tl::enums::MessageReplies) -> u64 {
    let tl::enums::MessageReplies::Replies(replies) = replies;
    to_count(replies.replies)
}
