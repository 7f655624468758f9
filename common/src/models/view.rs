use crate::error::RepoError;
use crate::models::dependency::DependencyRecord;
use crate::models::package::Package;

/// Outcome of one catalog query.
#[derive(Clone, Debug, PartialEq)]
pub enum Load<T> {
    Loaded(T),
    /// The query failed; holds a human readable reason.
    Failed(String),
}

impl<T> Load<T> {
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Load::Loaded(value) => Some(value),
            Load::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Load::Failed(_))
    }
}

impl<T> From<Result<T, RepoError>> for Load<T> {
    fn from(res: Result<T, RepoError>) -> Self {
        match res {
            Ok(value) => Load::Loaded(value),
            Err(err) => Load::Failed(err.to_string()),
        }
    }
}

/// Dependency state for a routed version.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionDeps {
    pub version: String,
    pub deps: Load<Vec<DependencyRecord>>,
}

/// Everything the package view shows after one activation.
#[derive(Clone, Debug, PartialEq)]
pub struct PackageView {
    pub pkg_list: Load<Vec<Package>>,
    pub pkg: Load<Package>,
    /// Only present when the route carried a version.
    pub version: Option<VersionDeps>,
}
