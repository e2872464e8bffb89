//! List command handler.

use pkgreg_core::IndexQuery;

use crate::bootstrap::CliConfig;
use crate::error::CliError;
use crate::presentation::print_package_table;

/// Execute the list command.
pub async fn execute(config: &CliConfig, query: IndexQuery) -> Result<(), CliError> {
    let client = config.registry_client()?;
    let page = client.packages(&query).await?;

    if page.packages.is_empty() {
        println!("No packages found.");
        return Ok(());
    }

    print_package_table(&page.packages);
    println!();
    println!(
        "Page {} - showing {} of {} packages",
        query.page(),
        page.packages.len(),
        page.meta.total
    );
    Ok(())
}
