//! Version domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::package::Package;

/// A published version of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Database ID of the version.
    pub id: i64,
    /// ID of the owning package.
    pub package_id: i64,
    /// Version number, e.g. `1.0.0`.
    pub num: String,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Number of downloads of this version.
    pub downloads: i64,
}

/// Wire representation of a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodableVersion {
    pub id: i64,
    /// Name of the owning package.
    pub pkg: String,
    pub num: String,
    /// Path that resolves the download URL of this version.
    pub dl_path: String,
    pub updated_at: String,
    pub created_at: String,
    pub downloads: i64,
}

impl Version {
    /// Returns true if `num` is an acceptable version number.
    ///
    /// Accepts `MAJOR.MINOR.PATCH` with numeric components, optionally
    /// followed by a `-pre` and/or `+build` suffix made of alphanumerics,
    /// `.` and `-`.
    pub fn valid(num: &str) -> bool {
        let (core, build) = match num.split_once('+') {
            Some((core, build)) => (core, Some(build)),
            None => (num, None),
        };
        let (core, pre) = match core.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (core, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return false;
        }
        if !parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
        {
            return false;
        }

        [pre, build].into_iter().flatten().all(|suffix| {
            !suffix.is_empty()
                && suffix
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        })
    }

    /// Convert into the wire representation.
    pub fn encodable(self, package: &Package) -> EncodableVersion {
        EncodableVersion {
            dl_path: package.dl_path(&self.num),
            id: self.id,
            pkg: package.name.clone(),
            num: self.num,
            updated_at: self.updated_at.to_rfc3339(),
            created_at: self.created_at.to_rfc3339(),
            downloads: self.downloads,
        }
    }
}
