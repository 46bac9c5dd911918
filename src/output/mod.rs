pub mod formatter;

pub use formatter::{format_lineup_summary, format_salary, should_use_colors};
