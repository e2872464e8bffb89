//! Path utilities for the registry data directory.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O

mod database;
mod error;
mod platform;

pub use database::{DATABASE_URL_ENV, database_path, database_path_in, database_url, sqlite_url};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, data_root_from};

/// Path to the `.env` file in the data root.
pub fn env_file_path() -> Result<std::path::PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}
