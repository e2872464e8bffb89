//! Presentation helpers for CLI output.

mod tables;

pub use tables::{format_date, print_package_table, print_separator, truncate_string};
