use std::collections::HashMap;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Name of the package id capture in route patterns.
pub const PKG_ID: &str = "pkgId";
/// Name of the version capture in route patterns.
pub const PKG_VERSION: &str = "pkgVersion";

/// Bytes escaped when a value is written into a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Escapes `value` so it stays one segment of a client path.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Reverses [`encode_segment`]. Invalid UTF-8 after decoding is replaced, not rejected.
pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Route state derived from the current path.
///
/// Recomputed on every navigation and never stored anywhere else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub pkg_id: Option<String>,
    pub pkg_version: Option<String>,
}

impl RouteParams {
    pub fn new(pkg_id: Option<&str>, pkg_version: Option<&str>) -> Self {
        Self {
            pkg_id: pkg_id.map(String::from),
            pkg_version: pkg_version.map(String::from),
        }
    }

    /// Picks the known captures out of a router match. Captures are already decoded.
    pub fn from_captures(captures: &HashMap<String, String>) -> Self {
        Self {
            pkg_id: captures.get(PKG_ID).cloned(),
            pkg_version: captures.get(PKG_VERSION).cloned(),
        }
    }

    /// The client path these params would be navigated from, with each value
    /// escaped so a `/` inside an id cannot shift it into the version slot.
    pub fn to_path(&self) -> String {
        match (&self.pkg_id, &self.pkg_version) {
            (Some(id), Some(version)) => {
                format!("/pkg/{}/{}/", encode_segment(id), encode_segment(version))
            }
            (Some(id), None) => format!("/pkg/{}/", encode_segment(id)),
            (None, _) => "/pkg/".to_string(),
        }
    }
}
