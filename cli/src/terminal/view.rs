//! Render step: lays a [`Screen`] out as [`Line`]s and prints them.
//! Nothing here talks to the catalog.

use colored::*;
use pkgview_common::config::Config;
use pkgview_common::filter::checkmark;
use pkgview_common::models::dependency::DependencyRecord;
use pkgview_common::models::package::Package;
use pkgview_common::models::view::{Load, PackageView, VersionDeps};
use pkgview_core::navigator::Screen;
use serde_json::Value;

use crate::terminal::{colors, print};

/// One line of the rendered screen, before any styling.
#[derive(Debug, PartialEq)]
pub enum Line {
    Header(String),
    Entry { id: String, selected: bool },
    Package { id: String, fields: Vec<(String, String)> },
    Dependency { text: String, ok: bool },
    NoResults(&'static str),
    LoadFailed { what: &'static str, reason: String },
    Separator,
}

pub fn render(screen: &Screen, cfg: &Config) {
    let selected: Option<&str> = screen.navigation.params.pkg_id.as_deref();
    for line in layout(&screen.view, selected) {
        emit(line, cfg.quiet);
    }
}

/// Lays a view out top to bottom. Absent version state adds no lines at all.
pub fn layout(view: &PackageView, selected: Option<&str>) -> Vec<Line> {
    let mut lines: Vec<Line> = vec![Line::Header("packages".into())];
    match &view.pkg_list {
        Load::Loaded(list) if list.is_empty() => lines.push(Line::NoResults("packages")),
        Load::Loaded(list) => lines.extend(list.iter().map(|pkg| Line::Entry {
            id: display_id(pkg),
            selected: !pkg.id.is_empty() && Some(pkg.id.as_str()) == selected,
        })),
        Load::Failed(reason) => lines.push(failed("package list", reason)),
    }

    lines.push(Line::Header("package".into()));
    match &view.pkg {
        Load::Loaded(pkg) => lines.push(Line::Package {
            id: display_id(pkg),
            fields: pkg
                .fields
                .iter()
                .map(|(key, value)| (key.clone(), format_value(value)))
                .collect(),
        }),
        Load::Failed(reason) => lines.push(failed("package", reason)),
    }

    if let Some(version) = &view.version {
        lines.push(Line::Header(format!("version {}", version.version)));
        lines.extend(version_lines(version));
    }

    lines.push(Line::Separator);
    lines
}

fn version_lines(version: &VersionDeps) -> Vec<Line> {
    match &version.deps {
        Load::Loaded(deps) if deps.is_empty() => vec![Line::NoResults("dependencies")],
        Load::Loaded(deps) => deps
            .iter()
            .map(|dep| Line::Dependency {
                text: dependency_line(dep),
                ok: dep.ok,
            })
            .collect(),
        Load::Failed(reason) => vec![failed("dependencies", reason)],
    }
}

fn failed(what: &'static str, reason: &str) -> Line {
    Line::LoadFailed {
        what,
        reason: reason.to_string(),
    }
}

fn display_id(pkg: &Package) -> String {
    if pkg.id.is_empty() {
        "(no id)".to_string()
    } else {
        pkg.id.clone()
    }
}

fn emit(line: Line, quiet: u8) {
    match line {
        Line::Header(title) => print::header(&title, quiet),
        Line::Entry { id, selected } => {
            let name: ColoredString = if selected {
                id.as_str().color(colors::PRIMARY).bold()
            } else {
                id.as_str().normal()
            };
            print::print_status(format!("{name}"));
        }
        Line::Package { id, fields } => {
            print::tree_head(0, &id);
            print::as_tree_one_level(fields.into_iter().map(|(k, v)| (k, v.normal())).collect());
        }
        Line::Dependency { text, ok } => {
            let color = if ok { colors::CHECK_OK } else { colors::CHECK_FAIL };
            print::print_status(format!("{}", text.color(color)));
        }
        Line::NoResults(what) => print::no_results(what),
        Line::LoadFailed { what, reason } => print::load_failed(what, &reason),
        Line::Separator => print::fat_separator(quiet),
    }
}

/// One dependency row: glyph, name and version when known.
pub fn dependency_line(dep: &DependencyRecord) -> String {
    match &dep.version {
        Some(version) => format!("{} {} {}", checkmark(dep.ok), dep.name, version),
        None => format!("{} {}", checkmark(dep.ok), dep.name),
    }
}

/// Flattens an opaque field for display. Booleans go through the checkmark filter.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(b) => checkmark(*b).to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}
