//! # Catalog Models
//!
//! * [`package::Package`]: one entry of the catalog.
//! * [`dependency::DependencyRecord`]: one dependency of a package version.
//! * [`history::VersionChange`]: a point in a package's revision history where its version moved.
//! * [`route::RouteParams`]: what the router extracted from the current path.
//! * [`view::PackageView`]: the state the controller hands to the render step.

pub mod dependency;
pub mod history;
pub mod package;
pub mod route;
pub mod view;

use serde_json::{Map, Value};

/// Loose truthiness for JSON flags.
///
/// Backends are not consistent about flag types, so `"yes"`, `1` and `true`
/// all count as set, while `null`, `0`, `""` and `false` do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Removes the first key out of `keys` holding a string or a number.
///
/// Numbers are kept in their JSON spelling, so `42` becomes `"42"`. Keys holding
/// anything else stay in the map as opaque fields.
fn take_label(fields: &mut Map<String, Value>, keys: &[&str]) -> Option<String> {
    let key = keys
        .iter()
        .find(|key| matches!(fields.get(**key), Some(Value::String(_) | Value::Number(_))))?;
    match fields.remove(*key)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
