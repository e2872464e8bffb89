//! Publish command handler.
//!
//! Records a version in the local registry database. Tarball upload is
//! handled outside the registry.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the publish command.
pub async fn execute(
    ctx: &CliContext,
    name: &str,
    version: &str,
    user_id: i64,
) -> Result<(), CliError> {
    let (package, version) = ctx.app().registry().publish(name, version, user_id).await?;

    println!("Published {} {}", package.name, version.num);
    println!("Download path: {}", package.dl_path(&version.num));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgreg_core::services::AppCore;
    use pkgreg_db::TestDb;

    #[tokio::test]
    async fn test_publish_then_duplicate() {
        let db = TestDb::new().await.unwrap();
        let ctx = CliContext {
            app: AppCore::new(db.repos(), "static.test"),
        };

        execute(&ctx, "foo", "1.0.0", 1).await.unwrap();
        let err = execute(&ctx, "foo", "1.0.0", 1).await.unwrap_err();

        assert!(matches!(err, CliError::Arguments(ref m) if m.contains("already uploaded")));
        assert_eq!(err.exit_code(), 2);
    }
}
