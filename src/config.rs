use anyhow::{Context, Result};

/// Telegram API credentials, read from the environment (or `.env`) once at
/// startup. Whether they are actually valid only shows up when the session
/// fails to start.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    pub api_id: i32,
    pub api_hash: String,
}

impl ApiCredentials {
    pub fn from_env() -> Result<Self> {
        let api_id = std::env::var("API_ID")
            .context("API_ID not found in environment")?
            .trim()
            .parse::<i32>()
            .context("API_ID must be a number")?;

        let api_hash = std::env::var("API_HASH").context("API_HASH not found in environment")?;

        Ok(Self { api_id, api_hash })
    }
}
