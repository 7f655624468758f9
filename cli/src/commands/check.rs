use std::time::Instant;

use anyhow::Context;
use colored::*;
use tracing::Instrument;

use crate::terminal::{colors, print, spinner};
use pkgview_common::filter::checkmark;
use pkgview_common::{config::Config, success, warn};
use pkgview_core::probe::ArchiveProbe;

pub async fn check(id: &str, versions: &[String], cfg: &Config) -> anyhow::Result<()> {
    let probe = ArchiveProbe::new(&cfg.archive_url)
        .with_context(|| format!("cannot probe {}", cfg.archive_url))?;

    let urls: Vec<String> = versions
        .iter()
        .map(|version| probe.tarball_url(id, version))
        .collect();

    let start_time = Instant::now();
    let span = spinner::loading_span(&format!("probing {} tarballs", urls.len()));
    let found: Vec<String> = probe.check_all(&urls).instrument(span).await;

    for (version, url) in versions.iter().zip(&urls) {
        let present: bool = found.contains(url);
        let color = if present { colors::CHECK_OK } else { colors::CHECK_FAIL };
        let line: String = format!("{} {id} {version}", checkmark(present));
        print::print_status(format!("{}  {}", line.color(color), url.dimmed()));
    }

    let summary: String = format!(
        "{} of {} versions archived in {:.2}s",
        found.len(),
        urls.len(),
        start_time.elapsed().as_secs_f64()
    );
    match cfg.quiet {
        0 => {
            print::fat_separator(cfg.quiet);
            print::centerln(&summary);
        }
        _ if found.len() == urls.len() => success!("{summary}"),
        _ => warn!("{summary}"),
    }

    Ok(())
}
