use colored::*;

use crate::terminal::{colors, print};
use pkgview_common::config::Config;
use pkgview_core::router::RouteTable;

pub fn routes(cfg: &Config) {
    let table = RouteTable::package_routes(&cfg.default_package);

    let mut rows: Vec<(String, ColoredString)> = table
        .routes()
        .map(|(pattern, view)| (pattern.to_string(), view.to_string().color(colors::ACCENT)))
        .collect();
    rows.push((
        "otherwise".to_string(),
        format!("redirect {}", table.fallback_path()).color(colors::VERSION),
    ));

    print::as_tree_one_level(rows);
}
