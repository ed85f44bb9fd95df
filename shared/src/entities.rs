use serde::{Deserialize, Serialize};

use crate::coords::{Edge, Qr, Qrp};
use crate::snapshot::BuildingType;

/// Harbor type used when the board leaves a harbor untyped.
pub const THREE_TO_ONE: &str = "threetoone";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexEntity {
    pub id: String,
    pub qr: Qr,
    pub terrain: String,
    pub roll: Option<u8>,
    pub has_robber: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingEntity {
    pub id: String,
    pub qrp: Qrp,
    pub building_type: BuildingType,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadEntity {
    pub id: String,
    pub edge: Edge,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarborEntity {
    pub id: String,
    pub qrp: Qrp,
    pub harbor_type: String,
}

/// Flat, keyed projection of one snapshot's board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardEntities {
    pub hexes: Vec<HexEntity>,
    pub buildings: Vec<BuildingEntity>,
    pub roads: Vec<RoadEntity>,
    pub harbors: Vec<HarborEntity>,
}
