//! Catalog URL layout.
//!
//! | query | path |
//! |---|---|
//! | list packages | `pkg/api/api.json` |
//! | one package | `pkg/api/{pkgId}.json` |
//! | version dependencies | `pkg/api/{pkgId}/{pkgVers}.json` |
//!
//! Endpoints are kept as raw segments. Adapters decide how to encode them
//! (URL segments for HTTP, path components for a local mirror).

use std::fmt;

/// Key the package list is stored under.
pub const LIST_SENTINEL: &str = "api";
/// Version used for dependency queries that do not name one.
pub const DEFAULT_VERSION: &str = "1.0";

const API_ROOT: [&str; 2] = ["pkg", "api"];
const EXT: &str = ".json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
}

impl Endpoint {
    /// `pkg/api/api.json`
    pub fn package_list() -> Self {
        Self::under_root(&[LIST_SENTINEL])
    }

    /// `pkg/api/{id}.json`
    ///
    /// Without an id the empty segment is dropped and the extension moves onto
    /// the parent, giving `pkg/api.json`. No default id is substituted.
    pub fn package(id: Option<&str>) -> Self {
        match non_empty(id) {
            Some(id) => Self::under_root(&[id]),
            None => {
                let mut segments: Vec<String> = API_ROOT.iter().map(|s| s.to_string()).collect();
                if let Some(last) = segments.last_mut() {
                    last.push_str(EXT);
                }
                Self { segments }
            }
        }
    }

    /// `pkg/api/{id}/{version}.json`, with the list sentinel and
    /// [`DEFAULT_VERSION`] standing in for missing parts.
    pub fn version_deps(id: Option<&str>, version: Option<&str>) -> Self {
        let id = non_empty(id).unwrap_or(LIST_SENTINEL);
        let version = non_empty(version).unwrap_or(DEFAULT_VERSION);
        Self::under_root(&[id, version])
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    fn under_root(parts: &[&str]) -> Self {
        let mut segments: Vec<String> = API_ROOT
            .iter()
            .chain(parts.iter())
            .map(|s| s.to_string())
            .collect();
        if let Some(last) = segments.last_mut() {
            last.push_str(EXT);
        }
        Self { segments }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
