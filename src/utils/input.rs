use std::io::{Write, stdout};

use anyhow::Result;
use crossterm::{
    QueueableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};

use crate::models::AnalysisRequest;

/// Prints a colored prompt and reads one trimmed line from stdin.
pub fn prompt_line(label: &str) -> Result<String> {
    let mut stdout = stdout();
    stdout.queue(SetForegroundColor(Color::Cyan))?;
    write!(stdout, "{label}: ")?;
    stdout.queue(ResetColor)?;
    stdout.flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Reads one analysis request. An empty channel name means quit.
pub fn read_analysis_request() -> Result<Option<AnalysisRequest>> {
    println!();
    let channel = prompt_line("Channel name")?;
    if channel.is_empty() {
        return Ok(None);
    }

    let start = prompt_line("Start date (YYYY-MM-DD)")?;
    let end = prompt_line("End date (YYYY-MM-DD)")?;

    Ok(Some(AnalysisRequest { channel, start, end }))
}
