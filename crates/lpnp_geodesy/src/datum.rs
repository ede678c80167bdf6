//! WGS84 ↔ GCJ02 Datum-Korrektur.
//!
//! Die Koeffizienten sind empirisch und müssen unverändert bleiben, sonst passen
//! neu geladene Partitionen nicht mehr zu bereits verarbeiteten Datensätzen.

use crate::{GCJ02_EE, WGS84_A};
use glam::DVec2;
use std::f64::consts::PI;

/// Prüft, ob ein Punkt ausserhalb der China-Bounding-Box liegt (offenes Intervall).
pub fn out_of_china(lon: f64, lat: f64) -> bool {
    !(lon > 73.66 && lon < 135.05 && lat > 3.86 && lat < 53.55)
}

/// Konvertiert WGS84 nach GCJ02. Ausserhalb Chinas bleibt der Punkt unverändert.
///
/// Rückgabe: `DVec2 { x: lon, y: lat }`
pub fn wgs84_to_gcj02(lon: f64, lat: f64) -> DVec2 {
    if out_of_china(lon, lat) {
        return DVec2::new(lon, lat);
    }
    DVec2::new(lon, lat) + gcj02_offset(lon, lat)
}

/// Näherungsweise Rückrechnung GCJ02 → WGS84.
///
/// Einmalige (nicht iterative) Inversion: der Offset wird am Eingabepunkt selbst
/// berechnet, als wäre dieser bereits WGS84. Der Restfehler liegt im Bereich
/// weniger Meter und ist Teil des Datenvertrags.
pub fn gcj02_to_wgs84(lon: f64, lat: f64) -> DVec2 {
    if out_of_china(lon, lat) {
        return DVec2::new(lon, lat);
    }
    let input = DVec2::new(lon, lat);
    let shifted = input + gcj02_offset(lon, lat);
    input * 2.0 - shifted
}

/// Berechnet den GCJ02-Offset (Δlon, Δlat) in Grad.
fn gcj02_offset(lon: f64, lat: f64) -> DVec2 {
    let dlat = transform_lat(lon - 105.0, lat - 35.0);
    let dlng = transform_lng(lon - 105.0, lat - 35.0);

    let radlat = lat / 180.0 * PI;
    let magic = radlat.sin();
    let magic = 1.0 - GCJ02_EE * magic * magic;
    let sqrtmagic = magic.sqrt();

    let dlat = (dlat * 180.0) / ((WGS84_A * (1.0 - GCJ02_EE)) / (magic * sqrtmagic) * PI);
    let dlng = (dlng * 180.0) / (WGS84_A / sqrtmagic * radlat.cos() * PI);

    DVec2::new(dlng, dlat)
}

fn transform_lat(lng: f64, lat: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * lng + 3.0 * lat + 0.2 * lat * lat + 0.1 * lng * lat
        + 0.2 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lat * PI).sin() + 40.0 * (lat / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (lat / 12.0 * PI).sin() + 320.0 * (lat * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(lng: f64, lat: f64) -> f64 {
    let mut ret =
        300.0 + lng + 2.0 * lat + 0.1 * lng * lng + 0.1 * lng * lat + 0.1 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lng * PI).sin() + 40.0 * (lng / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (lng / 12.0 * PI).sin() + 300.0 * (lng / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}
