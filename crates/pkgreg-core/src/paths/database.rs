//! Database path resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::data_root;

/// Environment variable holding a full database URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Get the path to the registry database file.
///
/// Returns `data/pkgreg.db` under the data root, creating `data/` if needed.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Database file location below an explicit data root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join("pkgreg.db"))
}

/// The `SQLite` connection URL for the registry database.
///
/// `DATABASE_URL` wins when set; otherwise the file from [`database_path`]
/// is opened in create mode.
pub fn database_url() -> Result<String, PathError> {
    if let Ok(url) = env::var(DATABASE_URL_ENV) {
        return Ok(url);
    }
    Ok(sqlite_url(&database_path()?))
}

/// Format a file path as a `SQLite` URL that creates the file if missing.
pub fn sqlite_url(path: &Path) -> String {
    format!("sqlite://{}?mode=rwc", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_ends_with_pkgreg_db() {
        let root = tempfile::tempdir().unwrap();
        let path = database_path_in(root.path()).unwrap();

        assert!(path.ends_with("data/pkgreg.db"));
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_sqlite_url_uses_create_mode() {
        let url = sqlite_url(Path::new("/tmp/x/pkgreg.db"));
        assert_eq!(url, "sqlite:///tmp/x/pkgreg.db?mode=rwc");
    }
}
