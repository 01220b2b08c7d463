//! Output formatting for analysis results.
//!
//! This module handles formatting and outputting findings:
//! - [`csv`] - CSV export
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::{create_output_file, escape_csv_field, export_csv};
pub use terminal::{
    format_banner, format_for_display, format_separator, format_subscription_result,
    format_summary, print_summary,
};
