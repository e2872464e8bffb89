//! Summary command handler.

use pkgreg_core::EncodablePackage;

use crate::bootstrap::CliConfig;
use crate::error::CliError;

fn print_section(title: &str, packages: &[EncodablePackage]) {
    println!("{title}:");
    if packages.is_empty() {
        println!("  (none)");
    }
    for package in packages {
        println!("  {:<30} {:>10}", package.name, package.downloads);
    }
    println!();
}

/// Execute the summary command.
pub async fn execute(config: &CliConfig) -> Result<(), CliError> {
    let client = config.registry_client()?;
    let summary = client.summary().await?;

    println!("Packages:  {}", summary.num_packages);
    println!("Downloads: {}", summary.num_downloads);
    println!();
    print_section("New packages", &summary.new_packages);
    print_section("Most downloaded", &summary.most_downloaded);
    print_section("Just updated", &summary.just_updated);
    Ok(())
}
