//! Table formatting utilities for CLI output.

use pkgreg_core::EncodablePackage;

/// Truncates a string to a maximum length, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use pkgreg_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Date part of an RFC 3339 timestamp.
pub fn format_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Print packages as a name / downloads / versions / updated table.
pub fn print_package_table(packages: &[EncodablePackage]) {
    println!(
        "{:<30} {:>10} {:>9} {:<10}",
        "Name", "Downloads", "Versions", "Updated"
    );
    print_separator(62);
    for package in packages {
        println!(
            "{:<30} {:>10} {:>9} {:<10}",
            truncate_string(&package.name, 29),
            package.downloads,
            package.versions.len(),
            format_date(&package.updated_at)
        );
    }
}
