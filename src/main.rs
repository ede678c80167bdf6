//! LPNP Map Inspector.
//!
//! Lädt eine Parkhauskarte und gibt Zusammenfassung, Start-/Endpunkt und
//! Mesh-Größen aus.
//!
//! ```text
//! lpnp-map-inspect <map.json>
//! lpnp-map-inspect <db_file> <partition_id> [navi|loc|render]
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lpnp_map_core::render::{floor_meshes, partition_meshes};
use lpnp_map_core::{load_map, MapOptions, MapSource, ParkingMap, TileKind};
use std::path::PathBuf;

/// Welche Daten einer Partition geladen werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DataKind {
    /// Navigations-Tile (`blob_data`)
    Navi,
    /// Lokalisierungs-Tile (`road_mark`)
    Loc,
    /// Eingebetteter Grundriss (`render_data`)
    Render,
}

#[derive(Debug, Parser)]
#[command(name = "lpnp-map-inspect", version)]
#[command(about = "Laedt eine LPNP-Parkhauskarte und gibt eine Zusammenfassung aus", long_about = None)]
struct Args {
    /// Grundriss-JSON oder Partitions-Datenbank
    path: PathBuf,

    /// partition_id in der Datenbank; ohne Angabe wird `path` als JSON gelesen
    partition_id: Option<i64>,

    /// Datenart der Partition (Standard: navi)
    #[arg(value_enum, requires = "partition_id")]
    kind: Option<DataKind>,
}

impl Args {
    fn source(&self) -> MapSource {
        let Some(partition_id) = self.partition_id else {
            return MapSource::JsonFile(self.path.clone());
        };
        let db_path = self.path.clone();
        match self.kind.unwrap_or(DataKind::Navi) {
            DataKind::Navi => MapSource::Partition {
                db_path,
                partition_id,
                tile_kind: TileKind::Navigation,
            },
            DataKind::Loc => MapSource::Partition {
                db_path,
                partition_id,
                tile_kind: TileKind::Localization,
            },
            DataKind::Render => MapSource::EmbeddedFloorMap {
                db_path,
                partition_id,
            },
        }
    }
}

fn main() -> Result<()> {
    Inspector::run(Args::parse())
}

struct Inspector;

impl Inspector {
    fn run(args: Args) -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("LPNP Map Inspector v{} startet...", env!("CARGO_PKG_VERSION"));

        let source = args.source();
        let options = MapOptions::load_from_file(&MapOptions::config_path());
        let map = load_map(&source, &options)
            .with_context(|| format!("Karte konnte nicht geladen werden: {source:?}"))?;

        Self::report(&map, &options)
    }

    fn report(map: &ParkingMap, options: &MapOptions) -> Result<()> {
        let start = map.start_point();
        let end = map.end_point();
        log::info!("{}", map.summary());
        log::info!("Start: ({:.3}, {:.3}, {:.3})", start.x, start.y, start.z);
        log::info!("Ziel:  ({:.3}, {:.3}, {:.3})", end.x, end.y, end.z);
        log::info!("Ziel-Parkflaeche: {}", map.target_id());

        match map {
            ParkingMap::Floor(floor_map) => {
                for name in floor_map.floor_names() {
                    let meshes = floor_meshes(floor_map, name, options)
                        .with_context(|| format!("Etage {name}"))?;
                    log::info!(
                        "Etage {}: {} Meshes, {} Vertices",
                        name,
                        meshes.iter().count(),
                        meshes.total_vertices()
                    );
                }
            }
            ParkingMap::Partition(partition) => {
                let origin = partition.frame().origin();
                log::info!(
                    "Referenzpunkt (GCJ02): lon={:.8} lat={:.8} alt={:.3}",
                    origin.x,
                    origin.y,
                    origin.z
                );
                let meshes = partition_meshes(partition, options);
                log::info!(
                    "Partition {}: {} Meshes, {} Vertices",
                    partition.partition_id(),
                    meshes.iter().count(),
                    meshes.total_vertices()
                );
            }
        }
        Ok(())
    }
}
