//! Per-category placement: how each entity kind turns into drawable attributes.

use hexboard_shared::{
    BuildingEntity, BuildingType, HarborEntity, HexEntity, Qr, Qrp, RoadEntity, decode_qrp,
    encode_qr, encode_qrp, unit_hex_corners,
};
use serde::Serialize;

use crate::reconcile::Keyed;
use crate::scale::Placement;

pub const BUILDING_RADIUS: f64 = 10.0;
pub const ROAD_WIDTH: f64 = 8.0;
pub const COORD_LABEL_WIDTH: f64 = 30.0;
pub const COORD_LABEL_HEIGHT: f64 = 13.0;

/// Qrp keys of the corner points on a standard 19-hex board. Drawn as a
/// hidden alignment overlay.
pub const COORD_LABELS: [&str; 54] = [
    "-3,1,t", "-3,2,t", "-3,3,t", "-2,-1,b", "-2,0,t", "-2,0,b", "-2,1,t", "-2,1,b", "-2,2,t",
    "-2,2,b", "-2,3,t", "-1,-2,b", "-1,-1,t", "-1,-1,b", "-1,0,t", "-1,0,b", "-1,1,t", "-1,1,b",
    "-1,2,t", "-1,2,b", "-1,3,t", "0,-3,b", "0,-2,t", "0,-2,b", "0,-1,t", "0,-1,b", "0,0,t",
    "0,0,b", "0,1,t", "0,1,b", "0,2,t", "0,2,b", "0,3,t", "1,-3,b", "1,-2,t", "1,-2,b", "1,-1,t",
    "1,-1,b", "1,0,t", "1,0,b", "1,1,t", "1,1,b", "1,2,t", "2,-3,b", "2,-2,t", "2,-2,b", "2,-1,t",
    "2,-1,b", "2,0,t", "2,0,b", "2,1,t", "3,-3,b", "3,-2,b", "3,-1,b",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Hexes,
    BuildingGroups,
    Buildings,
    Roads,
    Harbors,
    Coords,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HexVisual {
    pub translate: (f64, f64),
    /// Unit hexagon outline, drawn scaled by `outline_scale`.
    pub outline: [(f64, f64); 6],
    pub outline_scale: f64,
    pub fill: (u8, u8, u8),
    pub roll: Option<u8>,
    pub robber_visible: bool,
}

pub fn place_hex(p: &Placement, hex: &HexEntity) -> HexVisual {
    HexVisual {
        translate: p.hex_center(hex.qr),
        outline: unit_hex_corners(),
        outline_scale: p.hex_px,
        fill: p.terrain_fill(&hex.terrain),
        roll: hex.roll,
        robber_visible: hex.has_robber,
    }
}

/// Buildings sharing an owning hex, positioned together at the hex center.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingGroup {
    pub qr: Qr,
    pub buildings: Vec<BuildingEntity>,
}

impl Keyed for BuildingGroup {
    fn key(&self) -> String {
        encode_qr(self.qr)
    }
}

/// Group buildings by the hex their corner belongs to, in first-seen order.
pub fn group_buildings(buildings: &[BuildingEntity]) -> Vec<BuildingGroup> {
    let mut groups: Vec<BuildingGroup> = Vec::new();
    for building in buildings {
        let qr = building.qrp.qr();
        match groups.iter_mut().find(|g| g.qr == qr) {
            Some(group) => group.buildings.push(building.clone()),
            None => groups.push(BuildingGroup {
                qr,
                buildings: vec![building.clone()],
            }),
        }
    }
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingGroupVisual {
    pub translate: (f64, f64),
}

pub fn place_building_group(p: &Placement, group: &BuildingGroup) -> BuildingGroupVisual {
    BuildingGroupVisual {
        translate: p.hex_center(group.qr),
    }
}

/// A building drawn inside its group; `cy` is local to the group translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingVisual {
    pub group: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: (u8, u8, u8),
    pub building_type: BuildingType,
}

pub fn place_building(p: &Placement, building: &BuildingEntity) -> BuildingVisual {
    BuildingVisual {
        group: encode_qr(building.qrp.qr()),
        cx: 0.0,
        cy: building.qrp.p.offset() * p.hex_px,
        radius: BUILDING_RADIUS,
        fill: p.player_fill(&building.color),
        building_type: building.building_type,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadVisual {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: (u8, u8, u8),
    pub stroke_width: f64,
}

pub fn place_road(p: &Placement, road: &RoadEntity) -> RoadVisual {
    let [a, b] = road.edge.points();
    let (x1, y1) = p.corner(*a);
    let (x2, y2) = p.corner(*b);
    RoadVisual {
        x1,
        y1,
        x2,
        y2,
        stroke: p.player_fill(&road.color),
        stroke_width: ROAD_WIDTH,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarborVisual {
    pub translate: (f64, f64),
    pub harbor_type: String,
}

pub fn place_harbor(p: &Placement, harbor: &HarborEntity) -> HarborVisual {
    HarborVisual {
        translate: p.corner(harbor.qrp),
        harbor_type: harbor.harbor_type.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordVisual {
    /// Top-left of the label box, centered on the corner point.
    pub translate: (f64, f64),
    pub text: String,
    pub visible: bool,
}

pub fn place_coord(p: &Placement, qrp: &Qrp, visible: bool) -> CoordVisual {
    let (x, y) = p.corner(*qrp);
    CoordVisual {
        translate: (x - COORD_LABEL_WIDTH / 2.0, y - COORD_LABEL_HEIGHT / 2.0),
        text: encode_qrp(*qrp),
        visible,
    }
}

/// The fixed coordinate overlay set.
pub fn coord_points() -> Vec<Qrp> {
    COORD_LABELS
        .iter()
        .filter_map(|key| match decode_qrp(key) {
            Ok(qrp) => Some(qrp),
            Err(e) => {
                tracing::warn!(error = %e, "skipping coordinate label");
                None
            }
        })
        .collect()
}

/// Any visual, as handed to a board surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visual {
    Hex(HexVisual),
    BuildingGroup(BuildingGroupVisual),
    Building(BuildingVisual),
    Road(RoadVisual),
    Harbor(HarborVisual),
    Coord(CoordVisual),
}
