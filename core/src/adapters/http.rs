use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use pkgview_common::error::{RepoError, RepoResult};
use pkgview_common::models::dependency::DependencyRecord;
use pkgview_common::models::package::Package;

use crate::endpoint::Endpoint;
use crate::ports::PackageRepository;

const USER_AGENT: &str = concat!("pkgview/", env!("CARGO_PKG_VERSION"));

/// Reads the catalog from a server.
pub struct HttpRepository {
    client: Client,
    base: Url,
}

impl HttpRepository {
    pub fn new(base_url: &str) -> RepoResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RepoError::Request {
                url: base_url.to_string(),
                source: e.into(),
            })?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> RepoResult<Self> {
        let base = Url::parse(base_url).map_err(|e| RepoError::Url(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(RepoError::Url(format!("{base_url}: cannot be a base url")));
        }
        Ok(Self { client, base })
    }

    /// Joins an endpoint onto the base url, encoding each segment.
    pub fn url_for(&self, endpoint: &Endpoint) -> RepoResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RepoError::Url(format!("{}: cannot be a base url", self.base)))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> RepoResult<T> {
        let url = self.url_for(endpoint)?;
        debug!("GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| RepoError::Request {
                url: url.to_string(),
                source: e.into(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RepoError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| RepoError::Request {
            url: url.to_string(),
            source: e.into(),
        })?;

        serde_json::from_slice(&body).map_err(|source| RepoError::Decode {
            origin: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PackageRepository for HttpRepository {
    async fn query_packages(&self) -> RepoResult<Vec<Package>> {
        self.fetch(&Endpoint::package_list()).await
    }

    async fn get_package(&self, id: Option<&str>) -> RepoResult<Package> {
        self.fetch(&Endpoint::package(id)).await
    }

    async fn query_version_deps(
        &self,
        id: Option<&str>,
        version: Option<&str>,
    ) -> RepoResult<Vec<DependencyRecord>> {
        self.fetch(&Endpoint::version_deps(id, version)).await
    }
}
