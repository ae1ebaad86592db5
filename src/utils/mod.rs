mod input;

pub use input::{prompt_line, read_analysis_request};
