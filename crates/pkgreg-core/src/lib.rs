#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod contracts;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_PORT, DEFAULT_REGISTRY_URL, DEFAULT_STORAGE_HOST, RegistryConfig};
pub use domain::{
    DEFAULT_PER_PAGE, EncodablePackage, EncodableVersion, IndexQuery, MAX_PER_PAGE, Package,
    PackageDetail, PackageFilter, PackageOrder, PackagePage, PackageView, PageMeta,
    RegistrySummary, Version, VersionView, views_from_detail,
};
pub use ports::{
    CoreError, DownloadFrame, DownloadUrlSource, RecordingFrame, RegistryRepository, Repos,
    RepositoryError, ResolveError, ResolvedDownload,
};
pub use services::{AppCore, DownloadAction, LoadingFlag, RegistryService};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path, database_url, env_file_path};
