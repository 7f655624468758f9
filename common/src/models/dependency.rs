use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{is_truthy, take_label};

const NAME_KEYS: &[&str] = &["name", "id", "package"];
const OK_KEYS: &[&str] = &["ok", "satisfied", "checked"];
const MISSING_PREFIX: &str = "# Could not find ";

/// One dependency of a package version, with whether it was satisfied.
///
/// Decoding never fails on a JSON object: a missing name decodes as empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct DependencyRecord {
    pub name: String,
    pub ok: bool,
    pub version: Option<String>,
    pub fields: Map<String, Value>,
}

impl DependencyRecord {
    pub fn new(name: impl Into<String>, ok: bool) -> Self {
        Self {
            name: name.into(),
            ok,
            version: None,
            fields: Map::new(),
        }
    }

    /// A dependency pinned to `version`, with the archive file names that go with it.
    pub fn resolved(name: &str, version: &str) -> Self {
        let mut record = Self::new(name, true);
        record.version = Some(version.to_string());
        record.fields.insert(
            "dependencies".into(),
            Value::String(format!("{name}_{version}_dependencies.txt")),
        );
        record
            .fields
            .insert("tarball".into(), Value::String(format!("{name}_{version}.tar.gz")));
        record
    }

    /// A dependency with no known version at `revision`.
    pub fn missing(name: &str, revision: &str) -> Self {
        let mut record = Self::new(name, false);
        record.fields.insert("revision".into(), Value::String(revision.to_string()));
        record
    }

    /// Parses a line of a reduced `{pkg}_{version}_dependencies.txt` file.
    ///
    /// Resolved dependencies look like `name\tversion\tdeps_file\ttarball`.
    /// Unresolved ones are written as `# Could not find NAME at rREV`.
    /// Returns `None` for blank lines and anything else that is not a record.
    pub fn from_reduced_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if let Some(rest) = line.strip_prefix(MISSING_PREFIX) {
            let (name, revision) = match rest.split_once(" at ") {
                Some((name, rev)) => (name, Some(rev.trim_start_matches('r'))),
                None => (rest, None),
            };
            return Some(match revision {
                Some(rev) => Self::missing(name.trim(), rev),
                None => Self::new(name.trim(), false),
            });
        }

        if line.starts_with('#') {
            return None;
        }

        let mut cols = line.split('\t');
        let name = cols.next()?.trim();
        let version = cols.next()?.trim();
        if name.is_empty() || version.is_empty() {
            return None;
        }

        let mut record = Self::new(name, true);
        record.version = Some(version.to_string());
        if let Some(deps_file) = cols.next() {
            record.fields.insert("dependencies".into(), Value::String(deps_file.to_string()));
        }
        if let Some(tarball) = cols.next() {
            record.fields.insert("tarball".into(), Value::String(tarball.to_string()));
        }
        Some(record)
    }

    /// Parses a whole reduced dependency file, skipping lines that carry no record.
    pub fn parse_reduced(contents: &str) -> Vec<Self> {
        contents.lines().filter_map(Self::from_reduced_line).collect()
    }
}

impl From<Map<String, Value>> for DependencyRecord {
    fn from(mut fields: Map<String, Value>) -> Self {
        let name = take_label(&mut fields, NAME_KEYS).unwrap_or_default();
        let ok = OK_KEYS
            .iter()
            .find_map(|key| fields.remove(*key))
            .is_some_and(|v| is_truthy(&v));
        let version = take_label(&mut fields, &["version"]);
        Self {
            name,
            ok,
            version,
            fields,
        }
    }
}

impl From<DependencyRecord> for Map<String, Value> {
    fn from(record: DependencyRecord) -> Self {
        let mut map = Map::new();
        map.insert("name".into(), Value::String(record.name));
        map.insert("ok".into(), Value::Bool(record.ok));
        if let Some(version) = record.version {
            map.insert("version".into(), Value::String(version));
        }
        map.extend(record.fields);
        map
    }
}
