//! `lpnp_geodesy` — Datum-Korrektur und lokale Projektion für LPNP-Karten.
//!
//! Stellt die reinen Koordinaten-Transformationen bereit, die beide Map-Loader
//! benötigen:
//! - WGS84 ↔ GCJ02 (empirische China-Korrektur)
//! - Geodätisch (lat/lon/alt) → ECEF
//! - ECEF-Differenz → ENU (East-North-Up) am Referenzpunkt
//! - [`ReferenceFrame`] als zustandsbehafteter Projektor auf einen festen Ursprung
//!
//! Alle Funktionen sind rein numerisch und schlagen nie fehl. Eingaben ausserhalb
//! des sinnvollen Wertebereichs (z.B. ±90° Breite) liefern degenerierte, aber
//! definierte Ergebnisse.
//!
//! # Beispiel
//! ```no_run
//! use lpnp_geodesy::{wgs84_to_gcj02, ReferenceFrame};
//!
//! let gcj = wgs84_to_gcj02(116.397128, 39.916527);
//! let frame = ReferenceFrame::new(gcj.x, gcj.y, 43.5);
//! let enu = frame.project(116.4041, 39.9180, 44.0);
//! println!("E={:.2} N={:.2} U={:.2}", enu.x, enu.y, enu.z);
//! ```

pub mod datum;
pub mod ecef;
pub mod frame;

pub use datum::{gcj02_to_wgs84, out_of_china, wgs84_to_gcj02};
pub use ecef::{ecef_to_enu, geodetic_to_ecef};
pub use frame::ReferenceFrame;

/// Große Halbachse des WGS-84-Ellipsoids in Metern.
pub const WGS84_A: f64 = 6378137.0;
/// Kehrwert der WGS-84-Abplattung.
pub const WGS84_INV_F: f64 = 298.257223563;
/// WGS-84-Abplattung.
pub const WGS84_F: f64 = 1.0 / WGS84_INV_F;
/// Quadrat der ersten Exzentrizität, abgeleitet aus der Abplattung (ECEF-Umrechnung).
pub const WGS84_E_SQ: f64 = WGS84_F * (2.0 - WGS84_F);
/// Exzentrizitätsquadrat der GCJ02-Korrektur.
///
/// Bewusst getrennt von [`WGS84_E_SQ`]: beide Formeln müssen ihre bisherigen
/// Zahlenwerte exakt beibehalten, damit bereits importierte Daten passen.
pub const GCJ02_EE: f64 = 0.00669342162296594323;
