use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::{Edge, Position, Qr, Qrp};

/// One immutable game-state snapshot as emitted by the game engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub index: u64,
    #[serde(default)]
    pub domain: Option<Domain>,
    #[serde(default)]
    pub prev_domain: Option<Domain>,
    pub data: GameState,
}

/// Visible coordinate window, `[min, max]` in board units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub xy: [f64; 2],
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { xy: [min, max] }
    }

    pub const fn min(&self) -> f64 {
        self.xy[0]
    }

    pub const fn max(&self) -> f64 {
        self.xy[1]
    }

    /// Hex size in board units: an eighth of the visible span, anchored at
    /// the window's lower bound.
    pub fn hex_size(&self) -> f64 {
        (self.max() - self.min()) / 8.0 + self.min()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: BoardState,
    #[serde(default)]
    pub players: Vec<PlayerState>,
    #[serde(default)]
    pub last_action: serde_json::Value,
    #[serde(default)]
    pub valid_actions: serde_json::Value,
}

/// Board sub-collections, each an ordered list of `(locatable, occupant)` pairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    pub hexes: Vec<(HexPoint, HexCenter)>,
    #[serde(default)]
    pub buildings: Vec<(CornerPoint, Option<OnPoint>)>,
    #[serde(default)]
    pub roads: Vec<(EdgeSlot, Option<OnEdge>)>,
    #[serde(default)]
    pub harbors: Vec<(CornerPoint, Option<HarborSlot>)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexPoint {
    pub coord: [i32; 2],
}

impl HexPoint {
    pub const fn qr(&self) -> Qr {
        Qr::new(self.coord[0], self.coord[1])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerPoint {
    pub coord: [i32; 2],
    pub position: Position,
}

impl CornerPoint {
    pub const fn qrp(&self) -> Qrp {
        Qrp::new(self.coord[0], self.coord[1], self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSlot {
    pub point1: CornerPoint,
    pub point2: CornerPoint,
}

impl EdgeSlot {
    pub const fn edge(&self) -> Edge {
        Edge::new(self.point1.qrp(), self.point2.qrp())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HexCenter {
    pub terrain: String,
    #[serde(default)]
    pub roll: Option<u8>,
    #[serde(default)]
    pub has_robber: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    Settlement,
    City,
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Settlement => "settlement",
            Self::City => "city",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnPoint {
    pub building_type: BuildingType,
    pub point_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnEdge {
    pub edge_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HarborSlot {
    #[serde(default)]
    pub harbor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub player_index: u32,
    pub player_color: String,
    #[serde(default)]
    pub resources: BTreeMap<String, i64>,
    /// Possession items; the HUD reads their shape through JSON pointers.
    #[serde(default)]
    pub constructed: Vec<serde_json::Value>,
}
