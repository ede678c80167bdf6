//! Koordinaten-Strings der Partitionszeile (`"lon,lat,alt"`, `"a,b,id"`).

use crate::core::MapError;
use glam::DVec3;
use std::str::FromStr;

/// Anzahl der Werte, die jeder Koordinaten-String mindestens liefern muss.
const POINT_ARITY: usize = 3;

/// Parsed `"lon,lat,alt"` als Punkt (x = lon, y = lat, z = alt).
///
/// Überzählige Werte werden mit Warnung ignoriert, `nan`/`inf` sind ungültig.
pub fn parse_point(input: &str) -> Result<DVec3, MapError> {
    let values = parse_triple::<f64>(input)?;
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(invalid_value(input, &bad.to_string()));
    }
    let [lon, lat, alt] = values;
    Ok(DVec3::new(lon, lat, alt))
}

/// Parsed die Ziel-Parkplatz-Angabe; die Id ist der dritte Wert.
pub fn parse_target_prk_id(input: &str) -> Result<i64, MapError> {
    let [_, _, id] = parse_triple::<i64>(input)?;
    Ok(id)
}

fn parse_triple<T: FromStr + Copy>(input: &str) -> Result<[T; 3], MapError> {
    let values = parse_list::<T>(input)?;
    if values.len() < POINT_ARITY {
        return Err(MapError::MalformedPoint {
            input: truncate_for_error(input).to_string(),
            expected: POINT_ARITY,
            found: values.len(),
        });
    }
    if values.len() > POINT_ARITY {
        log::warn!(
            "Koordinaten-String '{}' hat {} Werte, nur die ersten {} werden verwendet",
            truncate_for_error(input),
            values.len(),
            POINT_ARITY
        );
    }
    Ok([values[0], values[1], values[2]])
}

/// Komma-getrennte Werte; leere Tokens werden übersprungen.
fn parse_list<T: FromStr>(input: &str) -> Result<Vec<T>, MapError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|token| {
            token
                .parse::<T>()
                .map_err(|_| invalid_value(input, token))
        })
        .collect()
}

fn invalid_value(input: &str, token: &str) -> MapError {
    MapError::InvalidPointValue {
        input: truncate_for_error(input).to_string(),
        token: truncate_for_error(token).to_string(),
    }
}

/// Kürzt lange Eingaben für Fehlermeldungen.
fn truncate_for_error(s: &str) -> &str {
    match s.char_indices().nth(40) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
