/// Integration-Tests für Partitions-Karten (SQLite + Tile-Blob)
use anyhow::Result;
use approx::assert_abs_diff_eq;
use lpnp_map_core::geodesy::{wgs84_to_gcj02, ReferenceFrame};
use lpnp_map_core::partition::tile::wire;
use lpnp_map_core::render::{partition_meshes, point_counts, Primitive};
use lpnp_map_core::{
    load_map, ErrorKind, MapOptions, MapSource, PartitionMap, PoiType, RoadMarkType,
    RoadObstacleType, TileKind,
};
use prost::Message;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

const REF_POINT: &str = "121.47,31.23,10.0";
const DEST_POINT: &str = "121.4702,31.2301,10.0";
const FLOOR_MAP: &str = include_str!("fixtures/floor_map.json");

fn geo(lon: f64, lat: f64, alt: f64) -> wire::GeoPoint {
    wire::GeoPoint {
        longitude: lon,
        latitude: lat,
        altitude: alt,
    }
}

fn fid(count: u64) -> Option<wire::FeatureId> {
    Some(wire::FeatureId { count })
}

fn navigation_tile() -> wire::RoadTile {
    wire::RoadTile {
        road: vec![
            wire::Road {
                id: fid(1),
                length: 30.0,
                road_center: Some(wire::Polyline {
                    points: vec![
                        geo(121.4752, 31.2282, 10.0),
                        geo(121.4755, 31.2282, 10.0),
                        geo(121.4755, 31.2284, 10.0),
                    ],
                }),
            },
            wire::Road {
                id: fid(2),
                length: 12.0,
                road_center: Some(wire::Polyline {
                    points: vec![geo(121.4755, 31.2284, 10.0), geo(121.4756, 31.2285, 11.0)],
                }),
            },
        ],
        poi: vec![wire::Poi {
            id: fid(10),
            poi_type: 19,
            shape: vec![geo(121.4753, 31.2283, 10.0)],
        }],
        road_mark: vec![],
        road_obstacle: vec![wire::RoadObstacle {
            id: fid(20),
            r#type: 6,
            shape: vec![
                geo(121.4754, 31.2283, 10.0),
                geo(121.47541, 31.2283, 10.0),
                geo(121.47541, 31.22831, 10.0),
            ],
        }],
        parking_space: vec![
            wire::ParkingSpace {
                id: fid(77),
                shape: vec![geo(121.4753, 31.2284, 10.0); 4],
            },
            wire::ParkingSpace {
                id: fid(78),
                shape: vec![geo(121.4754, 31.2284, 10.0); 4],
            },
        ],
    }
}

fn localization_tile() -> wire::RoadTile {
    wire::RoadTile {
        road_mark: vec![wire::RoadMark {
            id: fid(40),
            r#type: 2,
            shape: vec![geo(121.4753, 31.2282, 10.0), geo(121.4753, 31.22825, 10.0)],
        }],
        ..wire::RoadTile::default()
    }
}

struct Row<'a> {
    partition_id: i64,
    ref_point: Option<&'a str>,
    target_prk_id: &'a str,
    trace_dest: &'a str,
    blob: Vec<u8>,
}

fn row(partition_id: i64) -> Row<'static> {
    Row {
        partition_id,
        ref_point: Some(REF_POINT),
        target_prk_id: "3,1,77",
        trace_dest: DEST_POINT,
        blob: navigation_tile().encode_to_vec(),
    }
}

fn create_db(dir: &Path, table: &str, rows: &[Row<'_>]) -> PathBuf {
    let path = dir.join("lpnp.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(&format!(
        "CREATE TABLE {table} (
            partition_id INTEGER PRIMARY KEY,
            ref_point TEXT, target_prk_id TEXT, trace_dest TEXT,
            render_data TEXT, blob_data BLOB, road_mark BLOB
        );"
    ))
    .unwrap();
    for r in rows {
        conn.execute(
            &format!("INSERT INTO {table} VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
            params![
                r.partition_id,
                r.ref_point,
                r.target_prk_id,
                r.trace_dest,
                FLOOR_MAP,
                r.blob,
                localization_tile().encode_to_vec()
            ],
        )
        .unwrap();
    }
    path
}

#[test]
fn test_navigation_partition_is_projected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = create_db(dir.path(), "LPNP_table", &[row(7)]);

    let map = PartitionMap::open(&db, 7, TileKind::Navigation)?;
    assert_eq!(map.partition_id(), 7);
    assert_eq!(map.tile_kind(), TileKind::Navigation);
    assert_eq!(map.target_id(), 77);

    // Start = Referenzpunkt im eigenen System
    let start = map.start_point();
    assert_abs_diff_eq!(start.length(), 0.0, epsilon = 1e-6);

    // Bezugssystem liegt auf dem GCJ02-korrigierten Referenzpunkt, Höhe unverändert
    let gcj = wgs84_to_gcj02(121.47, 31.23);
    let expected = ReferenceFrame::new(gcj.x, gcj.y, 10.0);
    assert_eq!(map.frame(), &expected);
    assert_eq!(map.end_point(), expected.project(121.4702, 31.2301, 10.0));

    assert_eq!(map.roads().len(), 2);
    assert_eq!(map.roads()[0].length, Some(30.0));
    assert_eq!(map.roads()[0].center.len(), 9);
    assert_eq!(map.pois()[0].kind, PoiType::CheckPoint);
    assert_eq!(map.obstacles()[0].kind, RoadObstacleType::Pillar);
    assert_eq!(map.parking_spaces().len(), 2);
    assert!(map.road_marks().is_empty());

    let p = expected.project(121.4752, 31.2282, 10.0);
    assert_abs_diff_eq!(map.roads()[0].center[0], p.x as f32, epsilon = 1e-3);
    assert_abs_diff_eq!(map.roads()[0].center[1], p.y as f32, epsilon = 1e-3);
    Ok(())
}

#[test]
fn test_repeated_queries_are_identical() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = create_db(dir.path(), "LPNP_table", &[row(1)]);
    let map = PartitionMap::open(&db, 1, TileKind::Navigation)?;

    let first: Vec<u32> = map.roads()[0].center.iter().map(|v| v.to_bits()).collect();
    let second: Vec<u32> = map.roads()[0].center.iter().map(|v| v.to_bits()).collect();
    assert_eq!(first, second);

    let again = PartitionMap::open(&db, 1, TileKind::Navigation)?;
    assert_eq!(again, map);
    Ok(())
}

#[test]
fn test_localization_kind_reads_road_mark_column() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = create_db(dir.path(), "LPNP_table", &[row(1)]);
    let map = PartitionMap::open(&db, 1, TileKind::Localization)?;

    assert!(map.roads().is_empty());
    assert_eq!(map.road_marks().len(), 1);
    assert_eq!(map.road_marks()[0].kind, RoadMarkType::StopLine);
    Ok(())
}

#[test]
fn test_short_ref_point_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = row(1);
    r.ref_point = Some("116.3,39.9");
    let db = create_db(dir.path(), "LPNP_table", &[r]);

    let err = PartitionMap::open(&db, 1, TileKind::Navigation).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedPoint);
}

#[test]
fn test_non_finite_points_are_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let mut nan_ref = row(1);
    nan_ref.ref_point = Some("nan,inf,-inf");
    let mut inf_dest = row(2);
    inf_dest.trace_dest = "121.47,inf,10.0";
    let db = create_db(dir.path(), "LPNP_table", &[nan_ref, inf_dest]);

    for id in [1, 2] {
        let err = PartitionMap::open(&db, id, TileKind::Navigation).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedPoint, "partition {id}");
    }
}

#[test]
fn test_missing_row_null_column_and_missing_db() {
    let dir = tempfile::tempdir().unwrap();
    let mut null_ref = row(2);
    null_ref.ref_point = None;
    let db = create_db(dir.path(), "LPNP_table", &[row(1), null_ref]);

    let missing = PartitionMap::open(&db, 99, TileKind::Navigation).unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::Query);

    let null = PartitionMap::open(&db, 2, TileKind::Navigation).unwrap_err();
    assert_eq!(null.kind(), ErrorKind::Query);

    let no_db = PartitionMap::open(dir.path().join("fehlt.db"), 1, TileKind::Navigation)
        .unwrap_err();
    assert_eq!(no_db.kind(), ErrorKind::Io);
}

#[test]
fn test_text_file_instead_of_database_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.db");
    std::fs::write(&path, "kein SQLite-Header, nur Text\n".repeat(10)).unwrap();

    let err = PartitionMap::open(&path, 1, TileKind::Navigation).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_undecodable_blob_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = row(1);
    r.blob = vec![0x0a, 0x05, 0x01];
    let db = create_db(dir.path(), "LPNP_table", &[r]);

    let err = PartitionMap::open(&db, 1, TileKind::Navigation).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_unknown_category_code_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut tile = navigation_tile();
    tile.poi[0].poi_type = 99;
    let mut r = row(1);
    r.blob = tile.encode_to_vec();
    let db = create_db(dir.path(), "LPNP_table", &[r]);

    let err = PartitionMap::open(&db, 1, TileKind::Navigation).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_table_name_from_options() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = create_db(dir.path(), "parking_partitions", &[row(3)]);

    let default_err = PartitionMap::open(&db, 3, TileKind::Navigation).unwrap_err();
    assert_eq!(default_err.kind(), ErrorKind::Query);

    let options = MapOptions {
        table_name: "parking_partitions".to_string(),
        ..MapOptions::default()
    };
    let map = PartitionMap::open_with(&db, 3, TileKind::Navigation, &options)?;
    assert_eq!(map.target_id(), 77);

    let injected = MapOptions {
        table_name: "x; DROP TABLE parking_partitions".to_string(),
        ..MapOptions::default()
    };
    let err = PartitionMap::open_with(&db, 3, TileKind::Navigation, &injected).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Query);
    Ok(())
}

#[test]
fn test_factory_selects_loader() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = create_db(dir.path(), "LPNP_table", &[row(5)]);
    let options = MapOptions::default();

    let partition = load_map(
        &MapSource::Partition {
            db_path: db.clone(),
            partition_id: 5,
            tile_kind: TileKind::Navigation,
        },
        &options,
    )?;
    assert!(partition.as_partition_map().is_some());
    assert_eq!(partition.target_id(), 77);
    assert_eq!(partition.summary().roads, 2);
    assert_eq!(partition.summary().floors, 0);

    let embedded = load_map(
        &MapSource::EmbeddedFloorMap {
            db_path: db,
            partition_id: 5,
        },
        &options,
    )?;
    let floor_map = embedded.as_floor_map().expect("Grundriss erwartet");
    assert_eq!(floor_map.floor_names(), vec![-1.0, 1.0]);
    assert_eq!(embedded.target_id(), 502);
    Ok(())
}

#[test]
fn test_partition_meshes_highlight_target() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = create_db(dir.path(), "LPNP_table", &[row(1)]);
    let map = PartitionMap::open(&db, 1, TileKind::Navigation)?;
    let options = MapOptions::default();

    let meshes = partition_meshes(&map, &options);
    assert_eq!(point_counts(&meshes.roads), vec![3, 2]);
    assert_eq!(point_counts(&meshes.pois), vec![1]);
    assert_eq!(meshes.pois[0].primitive, Primitive::Points);
    assert_eq!(&meshes.pois[0].colors[..], &options.poi_check_point_color);
    assert_eq!(&meshes.obstacles[0].colors[0..4], &options.obstacle_pillar_color);

    // Parkfläche 77 ist das Ziel, 78 nicht
    assert_eq!(&meshes.parking_spaces[0].colors[8..12], &options.psd_target_color_alt);
    assert_eq!(&meshes.parking_spaces[1].colors[8..12], &options.psd_color_alt);
    assert!(meshes.pillars.is_empty());
    Ok(())
}
