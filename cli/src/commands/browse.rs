use std::sync::Arc;

use anyhow::Context;
use tracing::Instrument;

use crate::terminal::{spinner, view};
use pkgview_common::{config::Config, warn};
use pkgview_core::adapters::{archive_dir::ArchiveDirRepository, http::HttpRepository};
use pkgview_core::controller::PackageController;
use pkgview_core::navigator::Navigator;
use pkgview_core::ports::PackageRepository;
use pkgview_core::router::RouteTable;

pub async fn browse(path: &str, cfg: &Config) -> anyhow::Result<()> {
    let repo: Arc<dyn PackageRepository> = repository(cfg)?;
    let navigator = Navigator::new(
        RouteTable::package_routes(&cfg.default_package),
        PackageController::new(repo),
    );

    let span = spinner::loading_span(&format!("loading {path}"));
    let screen = navigator
        .open(path)
        .instrument(span)
        .await
        .with_context(|| format!("navigation to {path} was superseded"))?;

    if screen.navigation.redirected {
        warn!("{path} matches no route, showing {}", screen.navigation.path);
    }

    view::render(&screen, cfg);
    Ok(())
}

/// Picks the catalog source: a local mirror when one is configured, the server otherwise.
pub fn repository(cfg: &Config) -> anyhow::Result<Arc<dyn PackageRepository>> {
    match &cfg.archive_dir {
        Some(dir) => Ok(Arc::new(ArchiveDirRepository::new(dir))),
        None => {
            let repo = HttpRepository::new(&cfg.base_url)
                .with_context(|| format!("cannot use {} as catalog server", cfg.base_url))?;
            Ok(Arc::new(repo))
        }
    }
}
