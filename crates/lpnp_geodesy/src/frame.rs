//! Lokales ENU-Bezugssystem um einen festen Referenzpunkt.

use crate::ecef::{ecef_to_enu, geodetic_to_ecef};
use glam::DVec3;

/// Projiziert geografische Punkte in ENU-Koordinaten relativ zu einem Referenzpunkt.
///
/// Unveränderlich nach der Konstruktion, daher ohne Synchronisation zwischen
/// Threads teilbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    /// Referenzpunkt als (lon, lat, alt)
    origin: DVec3,
    /// ECEF-Koordinaten des Referenzpunkts
    origin_ecef: DVec3,
}

impl ReferenceFrame {
    /// Erstellt ein Bezugssystem am Punkt (lon, lat, alt).
    pub fn new(ref_lon: f64, ref_lat: f64, ref_alt: f64) -> Self {
        let origin_ecef = geodetic_to_ecef(ref_lat, ref_lon, ref_alt);
        log::debug!(
            "ReferenceFrame: lon={:.8} lat={:.8} alt={:.3} -> ECEF ({:.3}, {:.3}, {:.3})",
            ref_lon,
            ref_lat,
            ref_alt,
            origin_ecef.x,
            origin_ecef.y,
            origin_ecef.z
        );
        Self {
            origin: DVec3::new(ref_lon, ref_lat, ref_alt),
            origin_ecef,
        }
    }

    /// Referenzpunkt als (lon, lat, alt).
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Projiziert (lon, lat, alt) in lokale ENU-Koordinaten (Meter).
    ///
    /// Zieht zusätzlich den ENU-Versatz des Referenzpunkts zu sich selbst ab
    /// (Rotation eines Null-Deltas). Arithmetisch neutral, wird aber pro Aufruf
    /// berechnet, damit die Ausgabe bitgleich zu bestehenden Datensätzen bleibt.
    pub fn project(&self, lon: f64, lat: f64, alt: f64) -> DVec3 {
        let target = geodetic_to_ecef(lat, lon, alt);
        let ref_lon = self.origin.x;
        let ref_lat = self.origin.y;

        let self_bias = ecef_to_enu(ref_lat, ref_lon, DVec3::ZERO);
        let enu = ecef_to_enu(ref_lat, ref_lon, target - self.origin_ecef);

        enu - self_bias
    }

    /// Projiziert den Referenzpunkt selbst (liefert den Ursprung).
    pub fn project_origin(&self) -> DVec3 {
        self.project(self.origin.x, self.origin.y, self.origin.z)
    }
}
