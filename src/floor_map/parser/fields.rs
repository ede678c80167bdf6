//! Pfad-bewusster Zugriff auf `serde_json::Value`.
//!
//! Fehlende Schlüssel melden den vollständigen JSON-Pfad
//! (z.B. `floor[0].pillar[1].points[2].x`), falsche Typen ergeben einen
//! Parse-Fehler mit demselben Pfad.

use crate::core::MapError;
use glam::DVec3;
use serde_json::{Map, Value};

/// Hängt einen Objekt-Schlüssel an einen Pfad an.
pub(crate) fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Hängt einen Array-Index an einen Pfad an.
pub(crate) fn index(path: &str, i: usize) -> String {
    format!("{path}[{i}]")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "Zahl",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Objekt",
    }
}

fn wrong_type(path: &str, expected: &str, found: &Value) -> MapError {
    let shown = if path.is_empty() { "<root>" } else { path };
    MapError::parse(format!(
        "{shown}: {expected} erwartet, {} gefunden",
        type_name(found)
    ))
}

pub(crate) fn as_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, MapError> {
    value
        .as_object()
        .ok_or_else(|| wrong_type(path, "Objekt", value))
}

/// Pflichtfeld `key` des Objekts unter `path`.
pub(crate) fn field<'a>(value: &'a Value, path: &str, key: &str) -> Result<&'a Value, MapError> {
    as_object(value, path)?
        .get(key)
        .ok_or_else(|| MapError::KeyNotFound(join(path, key)))
}

pub(crate) fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], MapError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| wrong_type(path, "Array", value))
}

pub(crate) fn as_f64(value: &Value, path: &str) -> Result<f64, MapError> {
    value
        .as_f64()
        .ok_or_else(|| wrong_type(path, "Zahl", value))
}

/// Ganzzahl; Fliesskommawerte wie `3.5` sind ein Typfehler.
pub(crate) fn as_i64(value: &Value, path: &str) -> Result<i64, MapError> {
    value
        .as_i64()
        .ok_or_else(|| wrong_type(path, "Ganzzahl", value))
}

/// Array-Feld `key`, liefert jedes Element mit seinem Pfad.
pub(crate) fn array_field<'a>(
    value: &'a Value,
    path: &str,
    key: &str,
) -> Result<impl Iterator<Item = (String, &'a Value)> + 'a, MapError> {
    let array_path = join(path, key);
    let items = as_array(field(value, path, key)?, &array_path)?;
    Ok(items
        .iter()
        .enumerate()
        .map(move |(i, item)| (index(&array_path, i), item)))
}

pub(crate) fn f64_field(value: &Value, path: &str, key: &str) -> Result<f64, MapError> {
    as_f64(field(value, path, key)?, &join(path, key))
}

pub(crate) fn i64_field(value: &Value, path: &str, key: &str) -> Result<i64, MapError> {
    as_i64(field(value, path, key)?, &join(path, key))
}

/// Liest ein Objekt `{x, y, z}` als Punkt.
pub(crate) fn point(value: &Value, path: &str) -> Result<DVec3, MapError> {
    Ok(DVec3::new(
        f64_field(value, path, "x")?,
        f64_field(value, path, "y")?,
        f64_field(value, path, "z")?,
    ))
}
