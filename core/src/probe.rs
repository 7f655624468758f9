//! Archive tarball checks.
//!
//! The archive publishes every stored version as `{pkg}_{version}.tar.gz`.
//! A HEAD request answered with a success status or a `302 Found` redirect
//! counts as present.

use reqwest::{Client, StatusCode, redirect};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use pkgview_common::error::{RepoError, RepoResult};

pub struct ArchiveProbe {
    client: Client,
    archive_url: String,
}

impl ArchiveProbe {
    pub fn new(archive_url: &str) -> RepoResult<Self> {
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| RepoError::Request {
                url: archive_url.to_string(),
                source: e.into(),
            })?;
        Ok(Self {
            client,
            archive_url: archive_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn tarball_url(&self, pkg: &str, version: &str) -> String {
        format!("{}/{pkg}_{version}.tar.gz", self.archive_url)
    }

    pub async fn exists(&self, url: &str) -> RepoResult<bool> {
        head(&self.client, url).await
    }

    /// Probes every url concurrently and returns the reachable ones, in input order.
    ///
    /// Urls that fail at the transport level are logged and left out.
    pub async fn check_all(&self, urls: &[String]) -> Vec<String> {
        let mut set = JoinSet::new();
        for (idx, url) in urls.iter().cloned().enumerate() {
            let client = self.client.clone();
            set.spawn(async move {
                let res = head(&client, &url).await;
                (idx, url, res)
            });
        }

        let mut found: Vec<(usize, String)> = Vec::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((idx, url, Ok(true))) => found.push((idx, url)),
                Ok((_, url, Ok(false))) => debug!("{url} is not in the archive"),
                Ok((_, _, Err(e))) => warn!("{e}"),
                Err(e) => warn!("probe task failed: {e}"),
            }
        }

        found.sort_by_key(|(idx, _)| *idx);
        found.into_iter().map(|(_, url)| url).collect()
    }
}

async fn head(client: &Client, url: &str) -> RepoResult<bool> {
    let resp = client.head(url).send().await.map_err(|e| RepoError::Request {
        url: url.to_string(),
        source: e.into(),
    })?;
    let status = resp.status();
    debug!("HEAD {url} -> {status}");
    Ok(status.is_success() || status == StatusCode::FOUND)
}
