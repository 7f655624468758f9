use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use pkgview_common::error::{RepoError, RepoResult};
use pkgview_common::models::dependency::DependencyRecord;
use pkgview_common::models::history::{VersionChange, collapse_revisions, version_at_rev};
use pkgview_common::models::package::Package;

use crate::endpoint::Endpoint;
use crate::ports::PackageRepository;

/// Reads the catalog from a local mirror of the server's `pkg/api` tree.
///
/// Dependency queries fall back to the archive's reduced
/// `{pkg}_{version}_dependencies.txt` files when no JSON is mirrored, and
/// failing that, resolve the version's dependencies from the revision histories.
pub struct ArchiveDirRepository {
    root: PathBuf,
}

impl ArchiveDirRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, endpoint: &Endpoint) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(endpoint.segments());
        path
    }

    /// Version changes recorded in `{pkg}_versions_full.txt`, in the order the file lists them.
    pub async fn version_history(&self, id: &str) -> RepoResult<Vec<VersionChange>> {
        let contents = read_text(self.history_path(id)).await?;
        Ok(collapse_revisions(contents.lines()))
    }

    /// The version `dep` had at `revision`. `None` when the archive has no
    /// history for `dep` or the history skips that revision.
    pub async fn version_at_rev(&self, dep: &str, revision: &str) -> RepoResult<Option<String>> {
        match read_text(self.history_path(dep)).await {
            Ok(contents) => Ok(version_at_rev(contents.lines(), revision)),
            Err(RepoError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Pins every dependency of `change` to its version at the change's revision.
    pub async fn resolve_dependencies(
        &self,
        change: &VersionChange,
    ) -> RepoResult<Vec<DependencyRecord>> {
        let mut records = Vec::with_capacity(change.dependencies.len());
        for dep in &change.dependencies {
            let record = match self.version_at_rev(dep, &change.revision).await? {
                Some(version) => DependencyRecord::resolved(dep, &version),
                None => DependencyRecord::missing(dep, &change.revision),
            };
            records.push(record);
        }
        Ok(records)
    }

    fn history_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}_versions_full.txt"))
    }

    async fn read<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> RepoResult<T> {
        let path = self.path_for(endpoint);
        let bytes = read_bytes(&path).await?;
        serde_json::from_slice(&bytes).map_err(|source| RepoError::Decode {
            origin: path.display().to_string(),
            source,
        })
    }

    async fn read_reduced(&self, id: &str, version: &str) -> RepoResult<Vec<DependencyRecord>> {
        let path = self.root.join(format!("{id}_{version}_dependencies.txt"));
        let contents = read_text(path).await?;
        Ok(DependencyRecord::parse_reduced(&contents))
    }

    /// Rebuilds a version's dependency list from `{id}_versions_full.txt` when
    /// no reduced file was written for it.
    async fn derive_from_history(
        &self,
        id: &str,
        version: &str,
    ) -> RepoResult<Option<Vec<DependencyRecord>>> {
        let history = match self.version_history(id).await {
            Ok(history) => history,
            Err(RepoError::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };
        match history.iter().find(|change| change.version == version) {
            Some(change) => self.resolve_dependencies(change).await.map(Some),
            None => Ok(None),
        }
    }
}

async fn read_bytes(path: &Path) -> RepoResult<Vec<u8>> {
    debug!("reading {}", path.display());
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(RepoError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(RepoError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn read_text(path: PathBuf) -> RepoResult<String> {
    let bytes = read_bytes(&path).await?;
    String::from_utf8(bytes).map_err(|e| RepoError::Io {
        path,
        source: io::Error::new(ErrorKind::InvalidData, e),
    })
}

#[async_trait]
impl PackageRepository for ArchiveDirRepository {
    async fn query_packages(&self) -> RepoResult<Vec<Package>> {
        self.read(&Endpoint::package_list()).await
    }

    async fn get_package(&self, id: Option<&str>) -> RepoResult<Package> {
        self.read(&Endpoint::package(id)).await
    }

    async fn query_version_deps(
        &self,
        id: Option<&str>,
        version: Option<&str>,
    ) -> RepoResult<Vec<DependencyRecord>> {
        let path = match self.read(&Endpoint::version_deps(id, version)).await {
            Err(RepoError::NotFound { path }) => path,
            res => return res,
        };
        let (Some(id), Some(version)) = (id, version) else {
            return Err(RepoError::NotFound { path });
        };

        match self.read_reduced(id, version).await {
            Err(RepoError::NotFound { .. }) => {}
            res => return res,
        }
        match self.derive_from_history(id, version).await? {
            Some(records) => Ok(records),
            None => Err(RepoError::NotFound { path }),
        }
    }
}
