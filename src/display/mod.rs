mod ui;

pub use ui::{print_banner, render_error, render_report};
