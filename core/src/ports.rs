//! # Outbound Ports
//!
//! Contracts the controller depends on. Implementations live in
//! [`crate::adapters`] and are injected as trait objects, so the controller
//! never knows whether the catalog comes from a server or from disk.

use async_trait::async_trait;
use pkgview_common::error::RepoResult;
use pkgview_common::models::dependency::DependencyRecord;
use pkgview_common::models::package::Package;

/// Typed access to the package catalog.
///
/// Each call maps to exactly one request. Implementations must not retry or cache.
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Lists every package in the catalog.
    async fn query_packages(&self) -> RepoResult<Vec<Package>>;

    /// Fetches one package. `None` reproduces the request made without an id.
    async fn get_package(&self, id: Option<&str>) -> RepoResult<Package>;

    /// Lists the dependency records of one package version.
    async fn query_version_deps(
        &self,
        id: Option<&str>,
        version: Option<&str>,
    ) -> RepoResult<Vec<DependencyRecord>>;
}
