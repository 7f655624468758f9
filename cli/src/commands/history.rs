use anyhow::Context;
use colored::*;

use crate::terminal::{colors, print, view};
use pkgview_common::config::Config;
use pkgview_core::adapters::archive_dir::ArchiveDirRepository;

pub async fn history(id: &str, cfg: &Config) -> anyhow::Result<()> {
    let dir = cfg
        .archive_dir
        .as_ref()
        .context("'history' reads the archive directly; pass --archive-dir")?;
    let repo = ArchiveDirRepository::new(dir);

    let changes = repo
        .version_history(id)
        .await
        .with_context(|| format!("no version history for {id}"))?;

    if changes.is_empty() {
        print::no_results("version changes");
        return Ok(());
    }

    for (idx, change) in changes.iter().enumerate() {
        let deps = repo
            .resolve_dependencies(change)
            .await
            .with_context(|| format!("resolving dependencies of {id} {}", change.version))?;

        print::tree_head(idx, &change.version);
        let mut rows: Vec<(String, ColoredString)> =
            vec![("rev".to_string(), format!("r{}", change.revision).color(colors::VERSION))];
        if deps.is_empty() {
            rows.push(("depends".to_string(), "-".normal()));
        }
        for dep in &deps {
            let color = if dep.ok { colors::CHECK_OK } else { colors::CHECK_FAIL };
            rows.push(("depends".to_string(), view::dependency_line(dep).color(color)));
        }
        print::as_tree_one_level(rows);
    }

    Ok(())
}
