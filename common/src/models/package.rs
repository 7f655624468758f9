use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::take_label;

const ID_KEYS: &[&str] = &["id", "name", "pkgId"];

/// A package as served by the catalog.
///
/// Only the identifier is interpreted. Every other field is carried through
/// untouched, in the order the backend sent it, so the render step can show it.
/// Numeric ids are stringified; an entry with no usable id gets an empty one
/// rather than failing the whole response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Package {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Package {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }
}

impl From<Map<String, Value>> for Package {
    fn from(mut fields: Map<String, Value>) -> Self {
        let id = take_label(&mut fields, ID_KEYS).unwrap_or_default();
        Self { id, fields }
    }
}

impl From<Package> for Map<String, Value> {
    fn from(package: Package) -> Self {
        let mut map = Map::new();
        if !package.id.is_empty() {
            map.insert("id".into(), Value::String(package.id));
        }
        map.extend(package.fields);
        map
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
