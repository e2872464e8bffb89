//! Show command handler.

use crate::bootstrap::CliConfig;
use crate::error::CliError;
use crate::presentation::{format_date, print_separator};

/// Execute the show command.
pub async fn execute(config: &CliConfig, name: &str) -> Result<(), CliError> {
    let client = config.registry_client()?;
    let detail = client.package(name).await?;
    let package = &detail.package;

    println!("{}", package.name);
    println!("  Downloads: {}", package.downloads);
    println!("  Created:   {}", format_date(&package.created_at));
    println!("  Updated:   {}", format_date(&package.updated_at));
    println!();

    if detail.versions.is_empty() {
        println!("No versions published.");
        return Ok(());
    }

    println!("{:<16} {:>10} {:<10}  Download path", "Version", "Downloads", "Published");
    print_separator(72);
    for version in &detail.versions {
        println!(
            "{:<16} {:>10} {:<10}  {}",
            version.num,
            version.downloads,
            format_date(&version.created_at),
            version.dl_path
        );
    }
    Ok(())
}
