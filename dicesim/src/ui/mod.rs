//! Terminal rendering: theme, message helpers, roll tables and reports.

pub mod output_format;
pub mod report;
pub mod roll_table;
pub mod theme;
