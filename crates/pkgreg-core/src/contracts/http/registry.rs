//! Registry API route constants.

/// Liveness probe.
pub const HEALTH_PATH: &str = "/health";

/// Paged package index.
pub const PACKAGES_PATH: &str = "/api/v1/packages";

/// Registry summary.
pub const SUMMARY_PATH: &str = "/api/v1/summary";

/// Prefix of the download endpoint.
/// Full form: `/download/{name}/{name}-{version}.tar.gz`.
pub const DOWNLOAD_PREFIX: &str = "/download";

/// Path of a single package.
pub fn package_path(name: &str) -> String {
    format!("{PACKAGES_PATH}/{name}")
}
