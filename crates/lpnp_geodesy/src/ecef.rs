//! Geodätisch → ECEF → ENU.

use crate::{WGS84_A, WGS84_E_SQ};
use glam::DVec3;

/// Konvertiert Breite/Länge (Grad) und Höhe (m) in ECEF-Koordinaten (m).
pub fn geodetic_to_ecef(lat: f64, lon: f64, alt: f64) -> DVec3 {
    let phi = lat.to_radians();
    let lambda = lon.to_radians();
    let s_phi = phi.sin();
    let n = WGS84_A / (1.0 - WGS84_E_SQ * s_phi * s_phi).sqrt();

    DVec3::new(
        (n + alt) * phi.cos() * lambda.cos(),
        (n + alt) * phi.cos() * lambda.sin(),
        ((1.0 - WGS84_E_SQ) * n + alt) * s_phi,
    )
}

/// Rotiert eine ECEF-Differenz in die Tangentialebene am Referenzpunkt.
///
/// Rückgabe: `DVec3 { x: E, y: N, z: U }`
pub fn ecef_to_enu(ref_lat: f64, ref_lon: f64, delta: DVec3) -> DVec3 {
    let lat_rad = ref_lat.to_radians();
    let lon_rad = ref_lon.to_radians();
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_lon, cos_lon) = lon_rad.sin_cos();

    let e = -sin_lon * delta.x + cos_lon * delta.y;
    let n = -sin_lat * cos_lon * delta.x - sin_lat * sin_lon * delta.y + cos_lat * delta.z;
    let u = cos_lat * cos_lon * delta.x + cos_lat * sin_lon * delta.y + sin_lat * delta.z;

    DVec3::new(e, n, u)
}
