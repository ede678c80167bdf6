//! Parser für Grundriss-Dokumente (JSON).

mod fields;

use super::FloorMap;
use crate::core::{
    ensure_unique_ids, push_point, Floor, MapError, ParkingSpace, Pillar, Road, SpeedBump,
};
use fields::{array_field, f64_field, field, i64_field, point};
use indexmap::IndexMap;
use serde_json::Value;

/// Parsed ein Grundriss-Dokument aus einem JSON-String.
pub fn parse_floor_map(json: &str) -> Result<FloorMap, MapError> {
    let root: Value = serde_json::from_str(json)
        .map_err(|e| MapError::parse(format!("Ungueltiges JSON: {e}")))?;

    let mut floors = IndexMap::new();
    for (path, entry) in array_field(&root, "", "floor")? {
        let floor = parse_floor(entry, &path)?;
        if floors.contains_key(&floor.key) {
            return Err(MapError::parse(format!(
                "{path}: Etage {} kommt mehrfach vor",
                floor.name
            )));
        }
        floors.insert(floor.key, floor);
    }

    let info = field(&root, "", "info")?;
    let start = point(field(info, "info", "learningStart")?, "info.learningStart")?;
    let end = point(field(info, "info", "learningEnd")?, "info.learningEnd")?;
    let target_id = i64_field(
        field(info, "info", "targetPrk")?,
        "info.targetPrk",
        "targetPrkId",
    )?;

    Ok(FloorMap {
        floors,
        start,
        end,
        target_id,
    })
}

fn parse_floor(entry: &Value, path: &str) -> Result<Floor, MapError> {
    let mut floor = Floor::new(f64_field(entry, path, "floorName")?);

    for (p, item) in array_field(entry, path, "pillar")? {
        floor.pillars.push(Pillar {
            id: i64_field(item, &p, "pillarId")?,
            road_ids: road_ids(item, &p)?,
            points: points(item, &p)?,
        });
    }
    for (p, item) in array_field(entry, path, "psd")? {
        floor.parking_spaces.push(ParkingSpace {
            id: i64_field(item, &p, "psdId")?,
            road_ids: road_ids(item, &p)?,
            points: points(item, &p)?,
        });
    }
    for (p, item) in array_field(entry, path, "speedBump")? {
        floor.speed_bumps.push(SpeedBump {
            id: i64_field(item, &p, "speedBumpId")?,
            road_ids: road_ids(item, &p)?,
            points: points(item, &p)?,
        });
    }
    for (p, item) in array_field(entry, path, "road")? {
        floor.roads.push(parse_road(item, &p)?);
    }

    ensure_unique_ids(&floor.pillars, &fields::join(path, "pillar"))?;
    ensure_unique_ids(&floor.parking_spaces, &fields::join(path, "psd"))?;
    ensure_unique_ids(&floor.speed_bumps, &fields::join(path, "speedBump"))?;
    ensure_unique_ids(&floor.roads, &fields::join(path, "road"))?;

    log::trace!(
        "Etage {}: {} Saeulen, {} Parkflaechen, {} Schwellen, {} Strassen",
        floor.name,
        floor.pillars.len(),
        floor.parking_spaces.len(),
        floor.speed_bumps.len(),
        floor.roads.len()
    );

    Ok(floor)
}

fn parse_road(item: &Value, path: &str) -> Result<Road, MapError> {
    let id = i64_field(item, path, "roadId")?;
    let slope = match i64_field(item, path, "slopeType")? {
        0 => false,
        1 => true,
        other => {
            return Err(MapError::parse(format!(
                "{}: slopeType muss 0 oder 1 sein, gefunden {other}",
                fields::join(path, "slopeType")
            )))
        }
    };

    let mut center = Vec::new();
    for (p, entry) in array_field(item, path, "roadCenter")? {
        let point_path = fields::join(&p, "point");
        push_point(&mut center, point(field(entry, &p, "point")?, &point_path)?);
    }
    if center.len() < 6 {
        return Err(MapError::parse(format!(
            "{path}: Strasse {id} braucht mindestens 2 Mittellinienpunkte, {} gefunden",
            center.len() / 3
        )));
    }

    Ok(Road {
        id,
        slope,
        length: None,
        center,
    })
}

fn road_ids(item: &Value, path: &str) -> Result<Vec<i64>, MapError> {
    array_field(item, path, "roadId")?
        .map(|(p, id)| fields::as_i64(id, &p))
        .collect()
}

fn points(item: &Value, path: &str) -> Result<Vec<f32>, MapError> {
    let mut out = Vec::new();
    for (p, entry) in array_field(item, path, "points")? {
        push_point(&mut out, point(entry, &p)?);
    }
    Ok(out)
}
