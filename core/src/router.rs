//! # Route Table
//!
//! An ordered list of `(pattern, view)` pairs checked first-match, with a
//! fallback redirect for every path no pattern accepts.
//!
//! Patterns are slash separated. A segment is either a literal or a `:name`
//! capture. Captures never match an empty segment, and a single trailing slash
//! on the incoming path is optional. Captured values are percent-decoded.
//!
//! The fallback target is resolved once, when the table is built, so
//! [`RouteTable::navigate`] can never fail.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use pkgview_common::config::DEFAULT_PACKAGE;
use pkgview_common::models::route::{PKG_ID, PKG_VERSION, RouteParams, decode_segment};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("fallback '{0}' is not matched by any route")]
    UnroutableFallback(String),
}

/// Screens the router can activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Package,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Package => f.write_str("package"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Capture(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl FromStr for RoutePattern {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: s.to_string(),
            reason: reason.to_string(),
        };

        if !s.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut segments = Vec::new();
        for part in split_path(s) {
            match part.strip_prefix(':') {
                Some("") => return Err(invalid("capture without a name")),
                Some(name) => segments.push(Segment::Capture(name.to_string())),
                None if part.is_empty() => return Err(invalid("empty segment")),
                None => segments.push(Segment::Literal(part.to_string())),
            }
        }

        Ok(Self {
            raw: s.to_string(),
            segments,
        })
    }
}

impl RoutePattern {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the decoded captures when `path` fits this pattern.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = split_path(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut captures = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Capture(name) if !part.is_empty() => {
                    captures.insert(name.clone(), decode_segment(part));
                }
                _ => return None,
            }
        }
        Some(captures)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Result of looking a path up in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Matched { view: View, params: RouteParams },
    Redirect { to: String },
}

/// Where a navigation ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// The path that was finally matched.
    pub path: String,
    pub view: View,
    pub params: RouteParams,
    pub redirected: bool,
}

pub struct RouteTable {
    routes: Vec<(RoutePattern, View)>,
    fallback: Navigation,
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .field("fallback", &self.fallback.path)
            .finish()
    }
}

#[derive(Default)]
pub struct RouteTableBuilder {
    routes: Vec<(RoutePattern, View)>,
}

impl RouteTableBuilder {
    pub fn when(mut self, pattern: &str, view: View) -> Result<Self, RouteError> {
        self.routes.push((pattern.parse()?, view));
        Ok(self)
    }

    /// Finishes the table with the path every unmatched navigation redirects to.
    pub fn otherwise(self, redirect_to: &str) -> Result<RouteTable, RouteError> {
        let Some((view, params)) = first_match(&self.routes, redirect_to) else {
            return Err(RouteError::UnroutableFallback(redirect_to.to_string()));
        };

        Ok(RouteTable {
            routes: self.routes,
            fallback: Navigation {
                path: redirect_to.to_string(),
                view,
                params,
                redirected: true,
            },
        })
    }
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The package browser's table.
    ///
    /// `/pkg/`, `/pkg/:pkgId/` and `/pkg/:pkgId/:pkgVersion/` all open the
    /// package view; anything else redirects to `/pkg/{default_id}/`.
    /// A default id that would not route falls back to [`DEFAULT_PACKAGE`].
    pub fn package_routes(default_id: &str) -> Self {
        let build = |id: &str| -> Result<RouteTable, RouteError> {
            Self::builder()
                .when("/pkg/", View::Package)?
                .when(&format!("/pkg/:{PKG_ID}/"), View::Package)?
                .when(&format!("/pkg/:{PKG_ID}/:{PKG_VERSION}/"), View::Package)?
                .otherwise(&format!("/pkg/{id}/"))
        };

        match build(default_id) {
            Ok(table) => table,
            Err(_) => Self::package_routes(DEFAULT_PACKAGE),
        }
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        match first_match(&self.routes, path) {
            Some((view, params)) => Resolution::Matched { view, params },
            None => Resolution::Redirect {
                to: self.fallback.path.clone(),
            },
        }
    }

    /// Resolves `path`, following the fallback redirect when nothing matches.
    pub fn navigate(&self, path: &str) -> Navigation {
        match self.resolve(path) {
            Resolution::Matched { view, params } => Navigation {
                path: path.to_string(),
                view,
                params,
                redirected: false,
            },
            Resolution::Redirect { .. } => self.fallback.clone(),
        }
    }

    pub fn routes(&self) -> impl Iterator<Item = (&RoutePattern, View)> {
        self.routes.iter().map(|(pattern, view)| (pattern, *view))
    }

    pub fn fallback_path(&self) -> &str {
        &self.fallback.path
    }
}

fn first_match(routes: &[(RoutePattern, View)], path: &str) -> Option<(View, RouteParams)> {
    let path = normalize(path);
    routes.iter().find_map(|(pattern, view)| {
        pattern
            .matches(path)
            .map(|captures| (*view, RouteParams::from_captures(&captures)))
    })
}

/// Drops a hash-routing prefix, query string and fragment.
fn normalize(path: &str) -> &str {
    let path = path.strip_prefix('#').unwrap_or(path);
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    // "" splits into one empty segment; the root has none.
    trimmed.split('/').filter(move |_| !trimmed.is_empty())
}
