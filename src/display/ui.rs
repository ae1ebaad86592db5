use std::io::{Write, stdout};

use anyhow::Result;
use colorful::{Colorful, RGB};
use crossterm::{
    ExecutableCommand, cursor,
    terminal::{Clear, ClearType},
};

use crate::error::AnalyzerError;
use crate::models::ChannelStatistics;

const BAR_WIDTH: usize = 40;

pub fn print_banner() -> Result<()> {
    let subtle = RGB::new(107, 114, 128);

    let mut stdout = stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;

    writeln!(stdout, "\n  📡 Telegram Channel Analyzer")?;
    writeln!(
        stdout,
        "  {}",
        "Press Enter on an empty channel name to quit.".color(subtle)
    )?;
    Ok(())
}

/// Clears the screen and redraws the metrics block and the bar chart for
/// the latest analysis, so re-running never bleeds into the old report.
pub fn render_report(channel: &str, statistics: &ChannelStatistics) -> Result<()> {
    let primary = RGB::new(79, 70, 229);     // Indigo
    let secondary = RGB::new(236, 72, 153);   // Pink
    let success = RGB::new(16, 185, 129);    // Emerald
    let warning = RGB::new(245, 158, 11);    // Amber
    let info = RGB::new(59, 130, 246);      // Blue

    let mut stdout = stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;

    writeln!(stdout, "\n  📊 Metrics for {}:", channel.to_string().color(info))?;
    writeln!(
        stdout,
        "     ├─ Total messages: {}",
        statistics.total_messages.to_string().color(success)
    )?;
    writeln!(
        stdout,
        "     ├─ Total views: {}",
        statistics.total_views.to_string().color(success)
    )?;
    writeln!(
        stdout,
        "     ├─ Total reactions: {}",
        statistics.total_reactions.to_string().color(success)
    )?;
    writeln!(
        stdout,
        "     ├─ Total comments: {}",
        statistics.total_comments.to_string().color(success)
    )?;
    writeln!(
        stdout,
        "     ├─ Average views: {}",
        format!("{:.2}", statistics.average_views).color(primary)
    )?;
    writeln!(
        stdout,
        "     ├─ Average reactions: {}",
        format!("{:.2}", statistics.average_reactions).color(primary)
    )?;
    writeln!(
        stdout,
        "     └─ Average comments: {}",
        format!("{:.2}", statistics.average_comments).color(primary)
    )?;

    let values = [
        statistics.total_messages,
        statistics.total_views,
        statistics.total_reactions,
        statistics.total_comments,
    ];
    let labels = ["Messages", "Views", "Reactions", "Comments"];
    let colors = [info, success, secondary, warning];
    let widths = scaled_widths(&values, BAR_WIDTH);

    writeln!(stdout, "\n  📈 Totals:")?;
    for i in 0..values.len() {
        writeln!(
            stdout,
            "     {:<9} {} {}",
            labels[i],
            "█".repeat(widths[i]).color(colors[i]),
            values[i]
        )?;
    }

    Ok(())
}

/// The terminal stand-in for a modal error dialog.
pub fn render_error(error: &AnalyzerError) -> Result<()> {
    let mut stdout = stdout();
    writeln!(
        stdout,
        "\n  {}",
        format!("⚠️  {error}").color(RGB::new(231, 76, 60))
    )?;
    Ok(())
}

/// Bar lengths scaled against the largest value; non-zero values always
/// get at least one cell.
fn scaled_widths(values: &[u64], max_width: usize) -> Vec<usize> {
    let max = values.iter().copied().max().unwrap_or(0);
    values
        .iter()
        .map(|&value| {
            if value == 0 || max == 0 {
                0
            } else {
                (((value as f64 / max as f64) * max_width as f64).round() as usize).max(1)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_widths_cap_at_the_requested_width() {
        let widths = scaled_widths(&[5, 10, 0, 1], 40);
        assert_eq!(widths[1], 40);
        assert_eq!(widths[0], 20);
        assert_eq!(widths[2], 0);
        assert!(widths[3] >= 1);
        assert!(widths.iter().all(|&w| w <= 40));
    }

    #[test]
    fn test_scaled_widths_all_zero_values_draw_nothing() {
        assert_eq!(scaled_widths(&[0, 0, 0, 0], 40), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_scaled_widths_are_monotone() {
        let widths = scaled_widths(&[1, 100, 10_000, 1_000_000], 40);
        assert!(widths[0] <= widths[1] && widths[1] <= widths[2] && widths[2] <= widths[3]);
        assert!(widths[0] >= 1);
    }
}
