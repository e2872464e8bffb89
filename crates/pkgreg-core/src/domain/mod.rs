//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, UI).
//!
//! # Structure
//!
//! - `package` - Package types and name/path rules
//! - `version` - Version types and version number rules
//! - `listing` - Index paging, summary and detail types
//! - `view` - Client-side view models with optimistic counters

mod listing;
mod package;
mod version;
mod view;

pub use listing::{
    DEFAULT_PER_PAGE, IndexQuery, MAX_PER_PAGE, PackageDetail, PackageFilter, PackageOrder,
    PackagePage, PageMeta, RegistrySummary, SUMMARY_LIST_SIZE,
};
pub use package::{EncodablePackage, Package, storage_path, version_from_filename};
pub use version::{EncodableVersion, Version};
pub use view::{PackageView, VersionView, views_from_detail};
