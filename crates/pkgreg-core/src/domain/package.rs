//! Package domain types.
//!
//! A package is the distributable unit of the registry. It owns a set of
//! versions and a registry-wide download counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A package persisted in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Database ID of the package.
    pub id: i64,
    /// Lower-cased package name, unique across the registry.
    pub name: String,
    /// ID of the user that first published the package.
    pub user_id: i64,
    /// UTC timestamp of the last change to the package.
    pub updated_at: DateTime<Utc>,
    /// UTC timestamp of the first publish.
    pub created_at: DateTime<Utc>,
    /// Number of downloads across all versions.
    pub downloads: i64,
}

/// Wire representation of a package.
///
/// `id` carries the package name so clients can address packages by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodablePackage {
    pub id: String,
    pub name: String,
    /// IDs of every version of this package.
    pub versions: Vec<i64>,
    pub updated_at: String,
    pub created_at: String,
    pub downloads: i64,
}

impl Package {
    /// Returns true if `name` is usable as a package name.
    ///
    /// Names are non-empty and made only of alphanumerics, `_` and `-`.
    pub fn valid_name(name: &str) -> bool {
        !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    }

    /// Path that resolves (and counts) a download of `version`.
    pub fn dl_path(&self, version: &str) -> String {
        format!("/download/{}/{}-{}.tar.gz", self.name, self.name, version)
    }

    /// Location of the tarball for `version` on the storage host.
    pub fn storage_path(&self, version: &str) -> String {
        storage_path(&self.name, version)
    }

    /// Convert into the wire representation.
    pub fn encodable(self, versions: Vec<i64>) -> EncodablePackage {
        let Self {
            name,
            created_at,
            updated_at,
            downloads,
            ..
        } = self;
        EncodablePackage {
            id: name.clone(),
            name,
            versions,
            updated_at: updated_at.to_rfc3339(),
            created_at: created_at.to_rfc3339(),
            downloads,
        }
    }
}

/// Storage location of a package tarball, relative to the storage host.
pub fn storage_path(name: &str, version: &str) -> String {
    format!("/pkg/{name}/{name}-{version}.tar.gz")
}

/// Extract the version number from a download filename.
///
/// The filename must be `{name}-{version}.tar.gz`. Returns `None` when the
/// filename does not carry the package name as prefix, is not a tarball, or
/// has no version between the two.
pub fn version_from_filename<'a>(name: &str, filename: &'a str) -> Option<&'a str> {
    filename
        .strip_prefix(name)?
        .strip_prefix('-')?
        .strip_suffix(".tar.gz")
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str) -> Package {
        let now = Utc::now();
        Package {
            id: 1,
            name: name.to_string(),
            user_id: 7,
            updated_at: now,
            created_at: now,
            downloads: 12,
        }
    }

    #[test]
    fn test_valid_name() {
        assert!(Package::valid_name("foo"));
        assert!(Package::valid_name("foo_bar-2"));
        assert!(!Package::valid_name(""));
        assert!(!Package::valid_name("foo bar"));
        assert!(!Package::valid_name("foo/bar"));
        assert!(!Package::valid_name("foo.bar"));
    }

    #[test]
    fn test_paths() {
        let pkg = package("foo");
        assert_eq!(pkg.dl_path("1.0.0"), "/download/foo/foo-1.0.0.tar.gz");
        assert_eq!(pkg.storage_path("1.0.0"), "/pkg/foo/foo-1.0.0.tar.gz");
    }

    #[test]
    fn test_version_from_filename() {
        assert_eq!(version_from_filename("foo", "foo-1.0.0.tar.gz"), Some("1.0.0"));
        assert_eq!(
            version_from_filename("foo", "foo-0.1.0-beta.1.tar.gz"),
            Some("0.1.0-beta.1")
        );
        assert_eq!(version_from_filename("foo", "bar-1.0.0.tar.gz"), None);
        assert_eq!(version_from_filename("foo", "foo-1.0.0.zip"), None);
        assert_eq!(version_from_filename("foo", "foo-.tar.gz"), None);
        assert_eq!(version_from_filename("foo", "foo1.0.0.tar.gz"), None);
    }

    #[test]
    fn test_encodable_uses_name_as_id() {
        let encoded = package("foo").encodable(vec![3, 4]);
        assert_eq!(encoded.id, "foo");
        assert_eq!(encoded.name, "foo");
        assert_eq!(encoded.versions, vec![3, 4]);
        assert_eq!(encoded.downloads, 12);
    }
}
