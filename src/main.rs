use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::ApiCredentials;
use crate::processing::run_analysis;
use crate::source::TelegramSource;

mod config;
mod display;
mod error;
mod models;
mod processing;
mod source;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let credentials = ApiCredentials::from_env()?;

    display::print_banner()?;
    let source = TelegramSource::connect(&credentials).await?;

    loop {
        let Some(request) = utils::read_analysis_request()? else {
            break;
        };

        // One analysis at a time; the loop blocks until it finishes.
        match run_analysis(&source, &request).await {
            Ok(statistics) => display::render_report(&request.channel, &statistics)?,
            Err(error) => display::render_error(&error)?,
        }
    }

    Ok(())
}

fn init_tracing() {
    // Logs go to stderr so they don't fight the report rendering.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
