use std::path::PathBuf;

/// Package shown when a path matches no route.
pub const DEFAULT_PACKAGE: &str = "Biobase";

/// Where the catalog JSON is served from when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Host of the versioned tarball archive.
pub const DEFAULT_ARCHIVE_URL: &str = "https://bioarchive.galaxyproject.org";

pub struct Config {
    /// Base URL the `pkg/api/...` endpoints are joined onto.
    pub base_url: String,
    /// Read the catalog from a local mirror instead of over HTTP.
    ///
    /// The directory must follow the same `pkg/api/...json` layout as the server.
    pub archive_dir: Option<PathBuf>,
    /// Base URL for tarball existence checks.
    pub archive_url: String,
    /// Package id the fallback route redirects to.
    pub default_package: String,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            archive_dir: None,
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            default_package: DEFAULT_PACKAGE.to_string(),
            quiet: 0,
        }
    }
}
