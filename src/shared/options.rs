//! Zentrale Konfiguration der Map-Loader und der Render-Übergabe.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Partition-Speicher ──────────────────────────────────────────────

/// Standard-Tabellenname der Partitions-Datenbank.
pub const PARTITION_TABLE_NAME: &str = "LPNP_table";

// ── Säulen ──────────────────────────────────────────────────────────

/// Extrusionshöhe für Säulen mit 4-Punkt-Grundriss (Meter).
pub const PILLAR_HEIGHT: f32 = 3.0;
/// Farbe der unteren Säulenkante (RGBA: Weiß).
pub const PILLAR_BOTTOM_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der oberen Säulenkante (RGBA: Hellgelb, transparent).
pub const PILLAR_TOP_COLOR: [f32; 4] = [1.0, 0.9, 0.5, 0.2];

// ── Parkflächen ─────────────────────────────────────────────────────

/// Parkfläche, erste Tönung (RGBA: Hellgrau).
pub const PSD_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
/// Parkfläche, zweite Tönung (RGBA: Dunkelgrau).
pub const PSD_COLOR_ALT: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
/// Ziel-Parkfläche, erste Tönung (RGBA: Weiß).
pub const PSD_TARGET_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Ziel-Parkfläche, zweite Tönung (RGBA: Orange).
pub const PSD_TARGET_COLOR_ALT: [f32; 4] = [1.0, 0.55, 0.0, 1.0];

// ── Linien-Entitäten ────────────────────────────────────────────────

/// Bodenschwellen und Fahrbahnmarkierungen (RGBA: Gelb).
pub const ROAD_MARK_COLOR: [f32; 4] = [1.0, 0.83, 0.01, 1.0];
/// Straßen-Mittellinie (RGBA: Hellblau).
pub const ROAD_COLOR: [f32; 4] = [0.0, 0.7, 1.0, 1.0];
/// Rampen-Mittellinie (RGBA: Blau).
pub const ROAD_SLOPE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

// ── POI / Hindernisse ───────────────────────────────────────────────

/// Garageneinfahrt (RGBA: Orangerot).
pub const POI_GARAGE_ENTRANCE_COLOR: [f32; 4] = [1.0, 0.27, 0.0, 1.0];
/// Kontrollpunkt (RGBA: Dunkelgrün).
pub const POI_CHECK_POINT_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Steigung (RGBA: Lachs).
pub const POI_HILL_COLOR: [f32; 4] = [1.0, 0.5, 0.3, 1.0];
/// Kreuzung (RGBA: Mintgrün).
pub const POI_INTERSECTION_COLOR: [f32; 4] = [0.0, 1.0, 0.5, 1.0];
/// Hindernis vom Typ Säule (RGBA: Orange).
pub const OBSTACLE_PILLAR_COLOR: [f32; 4] = [1.0, 0.56, 0.0, 1.0];
/// Hindernis vom Typ Wand (RGBA: Braun).
pub const OBSTACLE_WALL_COLOR: [f32; 4] = [0.65, 0.16, 0.16, 1.0];
/// Alle übrigen Kategorien (RGBA: Weiß).
pub const DEFAULT_ENTITY_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `lpnp_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapOptions {
    // ── Partition ───────────────────────────────────────────────
    /// Tabelle mit den Partitionszeilen
    pub table_name: String,

    // ── Säulen ──────────────────────────────────────────────────
    /// Extrusionshöhe für 4-Punkt-Säulen
    pub pillar_height: f32,
    pub pillar_bottom_color: [f32; 4],
    pub pillar_top_color: [f32; 4],

    // ── Parkflächen ─────────────────────────────────────────────
    pub psd_color: [f32; 4],
    pub psd_color_alt: [f32; 4],
    /// Hervorhebung der Ziel-Parkfläche
    pub psd_target_color: [f32; 4],
    pub psd_target_color_alt: [f32; 4],

    // ── Linien ──────────────────────────────────────────────────
    /// Bodenschwellen und Fahrbahnmarkierungen
    pub road_mark_color: [f32; 4],
    pub road_color: [f32; 4],
    pub road_slope_color: [f32; 4],

    // ── POI / Hindernisse ───────────────────────────────────────
    pub poi_garage_entrance_color: [f32; 4],
    pub poi_check_point_color: [f32; 4],
    pub poi_hill_color: [f32; 4],
    pub poi_intersection_color: [f32; 4],
    pub obstacle_pillar_color: [f32; 4],
    pub obstacle_wall_color: [f32; 4],
    /// Fallback für nicht eingefärbte Kategorien
    pub default_entity_color: [f32; 4],
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            table_name: PARTITION_TABLE_NAME.to_string(),

            pillar_height: PILLAR_HEIGHT,
            pillar_bottom_color: PILLAR_BOTTOM_COLOR,
            pillar_top_color: PILLAR_TOP_COLOR,

            psd_color: PSD_COLOR,
            psd_color_alt: PSD_COLOR_ALT,
            psd_target_color: PSD_TARGET_COLOR,
            psd_target_color_alt: PSD_TARGET_COLOR_ALT,

            road_mark_color: ROAD_MARK_COLOR,
            road_color: ROAD_COLOR,
            road_slope_color: ROAD_SLOPE_COLOR,

            poi_garage_entrance_color: POI_GARAGE_ENTRANCE_COLOR,
            poi_check_point_color: POI_CHECK_POINT_COLOR,
            poi_hill_color: POI_HILL_COLOR,
            poi_intersection_color: POI_INTERSECTION_COLOR,
            obstacle_pillar_color: OBSTACLE_PILLAR_COLOR,
            obstacle_wall_color: OBSTACLE_WALL_COLOR,
            default_entity_color: DEFAULT_ENTITY_COLOR,
        }
    }
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("lpnp-map-inspect"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("lpnp_map.toml")
    }
}
