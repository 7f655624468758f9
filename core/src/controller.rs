use std::sync::Arc;

use pkgview_common::error::RepoResult;
use pkgview_common::models::route::RouteParams;
use pkgview_common::models::view::{Load, PackageView, VersionDeps};
use tracing::{debug, warn};

use crate::ports::PackageRepository;

/// Loads everything the package view shows for one set of route params.
pub struct PackageController {
    repo: Arc<dyn PackageRepository>,
}

impl PackageController {
    pub fn new(repo: Arc<dyn PackageRepository>) -> Self {
        Self { repo }
    }

    /// Issues the list and detail queries, plus the dependency query when a
    /// version is routed, all at once. A failed query only affects its own field.
    pub async fn activate(&self, params: &RouteParams) -> PackageView {
        let pkg_id = params.pkg_id.as_deref();
        debug!(?pkg_id, pkg_version = ?params.pkg_version, "activating package view");

        let list = self.repo.query_packages();
        let detail = self.repo.get_package(pkg_id);

        match params.pkg_version.as_deref() {
            Some(version) => {
                let deps = self.repo.query_version_deps(pkg_id, Some(version));
                let (list, detail, deps) = tokio::join!(list, detail, deps);
                PackageView {
                    pkg_list: settle("package list", list),
                    pkg: settle("package", detail),
                    version: Some(VersionDeps {
                        version: version.to_string(),
                        deps: settle("dependencies", deps),
                    }),
                }
            }
            None => {
                let (list, detail) = tokio::join!(list, detail);
                PackageView {
                    pkg_list: settle("package list", list),
                    pkg: settle("package", detail),
                    version: None,
                }
            }
        }
    }
}

fn settle<T>(what: &str, res: RepoResult<T>) -> Load<T> {
    if let Err(e) = &res {
        warn!("failed to load {what}: {e}");
    }
    res.into()
}
