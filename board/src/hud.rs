//! Per-player text summaries shown next to the board.

use std::collections::BTreeMap;

use hexboard_shared::{CornerPoint, EdgeSlot, Snapshot, encode_edge, encode_qrp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BUILDING_POINT: &str = "/building/building/edifice/onPoint/point";
const BUILDING_TYPE: &str = "/building/building/edifice/onPoint/buildingType";
const ROAD_EDGE: &str = "/building/building/roadway/onEdge/edge";
const CARD: &str = "/card/card";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudFrame {
    pub index: u64,
    pub players: Vec<PlayerHud>,
    pub last_action: String,
    pub valid_actions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerHud {
    pub player_index: u32,
    pub color: (u8, u8, u8),
    /// `Player N`, resource summary, constructed-items summary.
    pub rows: [String; 3],
}

pub fn hud_frame(snapshot: &Snapshot, player_fill: impl Fn(&str) -> (u8, u8, u8)) -> HudFrame {
    let players = snapshot
        .data
        .players
        .iter()
        .map(|player| PlayerHud {
            player_index: player.player_index,
            color: player_fill(&player.player_color),
            rows: [
                format!("Player {}", player.player_index),
                summarize_resources(&player.resources),
                summarize_items(&player.constructed),
            ],
        })
        .collect();

    HudFrame {
        index: snapshot.index,
        players,
        last_action: snapshot.data.last_action.to_string(),
        valid_actions: snapshot.data.valid_actions.to_string(),
    }
}

/// Compact JSON of the non-zero resource counts, e.g. `{"brick":2,"wheat":1}`.
pub fn summarize_resources(resources: &BTreeMap<String, i64>) -> String {
    let reduced: serde_json::Map<String, Value> = resources
        .iter()
        .filter(|(_, count)| **count != 0)
        .map(|(kind, count)| (kind.clone(), Value::from(*count)))
        .collect();
    Value::Object(reduced).to_string()
}

/// One label per real (non-potential) item, joined with `"; "`.
pub fn summarize_items(items: &[Value]) -> String {
    items
        .iter()
        .filter(|item| !is_potential(item))
        .map(item_label)
        .collect::<Vec<_>>()
        .join("; ")
}

fn is_potential(item: &Value) -> bool {
    item.get("potential").is_some_and(truthy)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Try building-on-point, then road-on-edge, then card. Shapes matching
/// none of them render as an explicit error label so regressions stay visible.
///
/// The first shape whose pointer holds a present value decides: a point that
/// does not decode as a corner is an error, even if a road or card is also set.
fn item_label(item: &Value) -> String {
    if let Some(point) = present(item, BUILDING_POINT) {
        if let Ok(point) = CornerPoint::deserialize(point) {
            let building_type = item
                .pointer(BUILDING_TYPE)
                .map(text_of)
                .unwrap_or_else(|| "null".to_string());
            return format!("{building_type} ({})", encode_qrp(point.qrp()));
        }
    } else if let Some(edge) = present(item, ROAD_EDGE) {
        if let Ok(edge) = EdgeSlot::deserialize(edge) {
            return format!("road {}", encode_edge(&edge.edge()));
        }
    } else if let Some(card) = present(item, CARD) {
        return text_of(card);
    }
    format!("ERROR unknown item type: {item}")
}

fn present<'a>(item: &'a Value, pointer: &str) -> Option<&'a Value> {
    item.pointer(pointer).filter(|v| truthy(v))
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_summary_drops_zero_entries() {
        let resources: BTreeMap<String, i64> = [
            ("wood", 0),
            ("brick", 2),
            ("ore", 0),
            ("wheat", 1),
            ("sheep", 0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        assert_eq!(summarize_resources(&resources), r#"{"brick":2,"wheat":1}"#);
    }

    #[test]
    fn resource_summary_of_nothing_is_empty_object() {
        assert_eq!(summarize_resources(&BTreeMap::new()), "{}");
    }

    #[test]
    fn labels_buildings_roads_and_cards() {
        let items = vec![
            json!({"building": {"building": {"edifice": {"onPoint": {
                "point": {"coord": [0, -1], "position": "top"},
                "buildingType": "settlement"}}}}}),
            json!({"building": {"building": {"roadway": {"onEdge": {"edge": {
                "point1": {"coord": [0, 0], "position": "top"},
                "point2": {"coord": [1, -1], "position": "bottom"}}}}}}}),
            json!({"card": {"card": "knight"}}),
        ];
        assert_eq!(
            summarize_items(&items),
            "settlement (0,-1,t); road (0,0,t)-(1,-1,b); knight"
        );
    }

    #[test]
    fn potential_items_are_excluded() {
        let items = vec![
            json!({"potential": true, "card": {"card": "monopoly"}}),
            json!({"potential": false, "card": {"card": "victoryPoint"}}),
        ];
        assert_eq!(summarize_items(&items), "victoryPoint");
    }

    #[test]
    fn unknown_shapes_are_tagged_not_dropped() {
        let items = vec![json!({"trophy": "longestRoad"})];
        assert_eq!(
            summarize_items(&items),
            r#"ERROR unknown item type: {"trophy":"longestRoad"}"#
        );
    }

    #[test]
    fn malformed_point_is_reported_as_unknown() {
        let items = vec![json!({"building": {"building": {"edifice": {"onPoint": {
            "point": {"coord": "nowhere"}}}}}})];
        assert!(summarize_items(&items).starts_with("ERROR unknown item type: "));
    }

    #[test]
    fn malformed_point_wins_over_later_shapes() {
        let items = vec![json!({
            "building": {"building": {"edifice": {"onPoint": {"point": "somewhere"}}}},
            "card": {"card": "knight"}
        })];
        let label = summarize_items(&items);
        assert!(label.starts_with("ERROR unknown item type: "), "{label}");
    }
}
