use thiserror::Error;

/// Failures surfaced to the user. Each one is terminal for the current
/// analysis; the next request starts from scratch.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("invalid date `{input}`, expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("no data for the selected period")]
    NoData,
}
