//! Kategorie-Codes der Tile-Entitäten (POI, Fahrbahnmarkierung, Hindernis).
//!
//! Die Codes entsprechen den Wire-Werten im Tile-Blob. Unbekannte Codes sind
//! ein Parse-Fehler und werden nicht auf `Unknown` abgebildet.

use super::MapError;

/// Kategorie eines Point-of-Interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoiType {
    #[default]
    Unknown,
    BusStop,
    BarrierGap,
    HumanAccess,
    GarageEntrance,
    GarageExit,
    FacilityEntrance,
    FacilityExit,
    FacilityExitAndEntrance,
    GarageEntranceExit,
    MarketEntrance,
    ElevatorEntrance,
    EscalatorEntrance,
    StoppingArea,
    EmergencyParkingArea,
    EmergencyEscapeArea,
    TollGate,
    CheckPoint,
    ServiceArea,
    ConstructionArea,
    ParkIntersection,
    Hill,
}

impl PoiType {
    /// Wandelt einen Wire-Code in die Kategorie um.
    pub fn from_code(code: i32) -> Result<Self, MapError> {
        let kind = match code {
            0 => Self::Unknown,
            1 => Self::BusStop,
            2 => Self::BarrierGap,
            4 => Self::HumanAccess,
            5 => Self::GarageEntrance,
            6 => Self::GarageExit,
            7 => Self::FacilityEntrance,
            8 => Self::FacilityExit,
            9 => Self::FacilityExitAndEntrance,
            10 => Self::GarageEntranceExit,
            11 => Self::MarketEntrance,
            12 => Self::ElevatorEntrance,
            13 => Self::EscalatorEntrance,
            14 => Self::StoppingArea,
            16 => Self::EmergencyParkingArea,
            17 => Self::EmergencyEscapeArea,
            18 => Self::TollGate,
            19 => Self::CheckPoint,
            20 => Self::ServiceArea,
            21 => Self::ConstructionArea,
            22 => Self::ParkIntersection,
            23 => Self::Hill,
            other => return Err(unknown_code("POI", other)),
        };
        Ok(kind)
    }

    /// Wire-Code der Kategorie
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::BusStop => 1,
            Self::BarrierGap => 2,
            Self::HumanAccess => 4,
            Self::GarageEntrance => 5,
            Self::GarageExit => 6,
            Self::FacilityEntrance => 7,
            Self::FacilityExit => 8,
            Self::FacilityExitAndEntrance => 9,
            Self::GarageEntranceExit => 10,
            Self::MarketEntrance => 11,
            Self::ElevatorEntrance => 12,
            Self::EscalatorEntrance => 13,
            Self::StoppingArea => 14,
            Self::EmergencyParkingArea => 16,
            Self::EmergencyEscapeArea => 17,
            Self::TollGate => 18,
            Self::CheckPoint => 19,
            Self::ServiceArea => 20,
            Self::ConstructionArea => 21,
            Self::ParkIntersection => 22,
            Self::Hill => 23,
        }
    }
}

/// Kategorie einer Fahrbahnmarkierung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoadMarkType {
    #[default]
    Unknown,
    SpeedBump,
    StopLine,
    GuideArrow,
    Crosswalk,
    CentralCircle,
    NoParkingZone,
    IndicatedLine,
    LateralDecelerationMarking,
    Symbol,
    Text,
}

impl RoadMarkType {
    /// Wandelt einen Wire-Code in die Kategorie um.
    pub fn from_code(code: i32) -> Result<Self, MapError> {
        let kind = match code {
            0 => Self::Unknown,
            1 => Self::SpeedBump,
            2 => Self::StopLine,
            3 => Self::GuideArrow,
            4 => Self::Crosswalk,
            6 => Self::CentralCircle,
            7 => Self::NoParkingZone,
            8 => Self::IndicatedLine,
            9 => Self::LateralDecelerationMarking,
            10 => Self::Symbol,
            11 => Self::Text,
            other => return Err(unknown_code("Fahrbahnmarkierung", other)),
        };
        Ok(kind)
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::SpeedBump => 1,
            Self::StopLine => 2,
            Self::GuideArrow => 3,
            Self::Crosswalk => 4,
            Self::CentralCircle => 6,
            Self::NoParkingZone => 7,
            Self::IndicatedLine => 8,
            Self::LateralDecelerationMarking => 9,
            Self::Symbol => 10,
            Self::Text => 11,
        }
    }
}

/// Kategorie eines Fahrbahn-Hindernisses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoadObstacleType {
    #[default]
    Unknown,
    IsolationIsland,
    SafetyIsland,
    PortableTrafficLight,
    PoleInRoad,
    TrafficControlBox,
    Pillar,
    Wall,
    Fence,
    Step,
    Special,
}

impl RoadObstacleType {
    /// Wandelt einen Wire-Code in die Kategorie um.
    pub fn from_code(code: i32) -> Result<Self, MapError> {
        let kind = match code {
            0 => Self::Unknown,
            1 => Self::IsolationIsland,
            2 => Self::SafetyIsland,
            3 => Self::PortableTrafficLight,
            4 => Self::PoleInRoad,
            5 => Self::TrafficControlBox,
            6 => Self::Pillar,
            7 => Self::Wall,
            8 => Self::Fence,
            9 => Self::Step,
            10 => Self::Special,
            other => return Err(unknown_code("Hindernis", other)),
        };
        Ok(kind)
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::IsolationIsland => 1,
            Self::SafetyIsland => 2,
            Self::PortableTrafficLight => 3,
            Self::PoleInRoad => 4,
            Self::TrafficControlBox => 5,
            Self::Pillar => 6,
            Self::Wall => 7,
            Self::Fence => 8,
            Self::Step => 9,
            Self::Special => 10,
        }
    }
}

fn unknown_code(category: &str, code: i32) -> MapError {
    MapError::parse(format!("Unbekannter {category}-Code {code}"))
}
