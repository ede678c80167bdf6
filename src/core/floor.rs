//! Etage mit ihren Entitäts-Collections.

use super::{ParkingSpace, Pillar, Road, SpeedBump};
use std::fmt;

/// Kanonischer Etagen-Schlüssel: Etagenwert × 1000, gerundet.
///
/// Das Dokument liefert Etagen als Fliesskommazahl (`-1`, `1.5`, ...). Als
/// Map-Schlüssel dient der ganzzahlige Milli-Wert, damit `1.0` und `1.0000001`
/// nicht zu verschiedenen Etagen werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FloorKey(i64);

impl FloorKey {
    /// Bildet den Schlüssel aus dem Etagenwert des Dokuments.
    pub fn from_value(value: f64) -> Self {
        Self((value * 1000.0).round() as i64)
    }

    /// Milli-Wert des Schlüssels
    pub fn milli(self) -> i64 {
        self.0
    }

    /// Etagenwert, aus dem Schlüssel zurückgerechnet
    pub fn value(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl From<f64> for FloorKey {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

impl fmt::Display for FloorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Eine Etage des Grundriss-Dokuments.
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    pub key: FloorKey,
    /// Originalwert aus dem Dokument (nur Anzeige)
    pub name: f64,
    pub pillars: Vec<Pillar>,
    pub parking_spaces: Vec<ParkingSpace>,
    pub speed_bumps: Vec<SpeedBump>,
    pub roads: Vec<Road>,
}

impl Floor {
    /// Leere Etage zum Wert `name`
    pub fn new(name: f64) -> Self {
        Self {
            key: FloorKey::from_value(name),
            name,
            pillars: Vec::new(),
            parking_spaces: Vec::new(),
            speed_bumps: Vec::new(),
            roads: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_key_is_milli_scaled() {
        assert_eq!(FloorKey::from_value(1.0).milli(), 1000);
        assert_eq!(FloorKey::from_value(-1.0).milli(), -1000);
        assert_eq!(FloorKey::from_value(1.5).milli(), 1500);
        assert_eq!(FloorKey::from_value(1.0), FloorKey::from_value(1.000_000_1));
        assert_ne!(FloorKey::from_value(1.0), FloorKey::from_value(1.001));
    }

    #[test]
    fn test_floor_key_display_uses_value() {
        assert_eq!(FloorKey::from(-2.0).to_string(), "-2");
        assert_eq!(FloorKey::from(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_new_floor_is_empty() {
        let floor = Floor::new(-1.0);
        assert_eq!(floor.key, FloorKey::from_value(-1.0));
        assert_eq!(floor.name, -1.0);
        assert!(floor.pillars.is_empty() && floor.roads.is_empty());
    }
}
