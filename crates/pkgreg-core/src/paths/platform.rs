//! Data root resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "PKGREG_DATA_DIR";

/// Get the root directory for registry data (database, `.env`).
///
/// Resolution order:
/// 1. `PKGREG_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/pkgreg`)
pub fn data_root() -> Result<PathBuf, PathError> {
    data_root_from(env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

/// Resolve the data root from an explicit override.
///
/// The directory is created if it does not exist.
pub fn data_root_from(override_dir: Option<PathBuf>) -> Result<PathBuf, PathError> {
    let root = match override_dir {
        Some(path) => path,
        None => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("pkgreg"),
    };

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}
