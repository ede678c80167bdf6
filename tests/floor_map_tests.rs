/// Integration-Tests für Grundriss-Karten
use anyhow::Result;
use glam::DVec3;
use lpnp_map_core::render::{floor_meshes, point_counts, Primitive};
use lpnp_map_core::{ErrorKind, FloorMap, LoadType, MapOptions, Shape};

const FIXTURE: &str = include_str!("fixtures/floor_map.json");

fn fixture_path() -> String {
    format!("{}/tests/fixtures/floor_map.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_load_fixture_from_string() -> Result<()> {
    let map = FloorMap::load(FIXTURE, LoadType::Data)?;

    assert_eq!(map.floor_names(), vec![-1.0, 1.0]);
    assert_eq!(map.pillars(-1.0)?.len(), 2);
    assert_eq!(map.parking_spaces(-1.0)?.len(), 2);
    assert_eq!(map.speed_bumps(-1.0)?.len(), 1);
    assert_eq!(map.roads(-1.0)?.len(), 2);
    assert_eq!(map.roads(1.0)?.len(), 1);
    assert!(map.pillars(1.0)?.is_empty());

    assert_eq!(map.target_id(), 502);
    assert_eq!(map.start_point(), DVec3::ZERO);
    assert_eq!(map.end_point(), DVec3::new(5.8, 8.6, 0.0));
    Ok(())
}

#[test]
fn test_file_and_string_loading_agree() -> Result<()> {
    let from_file = FloorMap::load(&fixture_path(), LoadType::File)?;
    let from_str = FloorMap::from_json_str(FIXTURE)?;
    assert_eq!(from_file, from_str);
    Ok(())
}

#[test]
fn test_point_lists_are_multiples_of_three() -> Result<()> {
    let map = FloorMap::from_json_str(FIXTURE)?;
    for floor in map.floors() {
        let all = floor
            .pillars
            .iter()
            .map(|e| e.points())
            .chain(floor.parking_spaces.iter().map(|e| e.points()))
            .chain(floor.speed_bumps.iter().map(|e| e.points()))
            .chain(floor.roads.iter().map(|e| e.points()));
        for points in all {
            assert_eq!(points.len() % 3, 0);
        }
    }
    Ok(())
}

#[test]
fn test_unknown_floor_and_missing_file() {
    let map = FloorMap::from_json_str(FIXTURE).unwrap();
    assert_eq!(map.roads(7.0).unwrap_err().kind(), ErrorKind::KeyNotFound);

    let err = FloorMap::load("/nicht/vorhanden.json", LoadType::File).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_floor_meshes_of_fixture() -> Result<()> {
    let map = FloorMap::from_json_str(FIXTURE)?;
    let options = MapOptions::default();
    let meshes = floor_meshes(&map, -1.0, &options)?;

    // 8-Punkt-Säule unverändert, 4-Punkt-Säule extrudiert
    assert_eq!(meshes.pillars[0].vertex_count(), 8);
    assert_eq!(meshes.pillars[1].vertex_count(), 8);
    assert_eq!(meshes.pillars[1].vertices[14], options.pillar_height);

    // nur die Ziel-Parkfläche 502 ist hervorgehoben
    assert_eq!(&meshes.parking_spaces[0].colors[0..4], &options.psd_color);
    assert_eq!(
        &meshes.parking_spaces[1].colors[4..8],
        &options.psd_target_color_alt
    );

    assert_eq!(meshes.speed_bumps[0].primitive, Primitive::Lines);
    assert_eq!(point_counts(&meshes.roads), vec![4, 2]);
    assert_eq!(&meshes.roads[1].colors[0..4], &options.road_slope_color);
    assert!(meshes.pois.is_empty());

    let err = floor_meshes(&map, 3.0, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    Ok(())
}

#[test]
fn test_models_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FloorMap>();
    assert_send_sync::<lpnp_map_core::PartitionMap>();
    assert_send_sync::<lpnp_map_core::ParkingMap>();
    assert_send_sync::<lpnp_map_core::ReferenceFrame>();
}
