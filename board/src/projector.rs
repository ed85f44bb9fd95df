use hexboard_shared::entities::THREE_TO_ONE;
use hexboard_shared::{
    BoardEntities, BoardState, BuildingEntity, GameState, HarborEntity, HexEntity, RoadEntity,
    encode_edge, encode_qr, encode_qrp,
};

/// Project one snapshot's board into flat keyed entity collections.
///
/// Unoccupied building and road slots are dropped; every harbor maps through.
/// Order follows the source.
pub fn project(state: &GameState) -> BoardEntities {
    project_board(&state.board)
}

pub fn project_board(board: &BoardState) -> BoardEntities {
    let hexes = board
        .hexes
        .iter()
        .map(|(point, center)| {
            let qr = point.qr();
            HexEntity {
                id: encode_qr(qr),
                qr,
                terrain: center.terrain.clone(),
                roll: center.roll,
                has_robber: center.has_robber,
            }
        })
        .collect();

    let buildings = board
        .buildings
        .iter()
        .filter_map(|(point, on_point)| {
            let on_point = on_point.as_ref()?;
            let qrp = point.qrp();
            Some(BuildingEntity {
                id: encode_qrp(qrp),
                qrp,
                building_type: on_point.building_type,
                color: on_point.point_color.clone(),
            })
        })
        .collect();

    let roads = board
        .roads
        .iter()
        .filter_map(|(slot, on_edge)| {
            let on_edge = on_edge.as_ref()?;
            let edge = slot.edge();
            Some(RoadEntity {
                id: encode_edge(&edge),
                edge,
                color: on_edge.edge_color.clone(),
            })
        })
        .collect();

    let harbors = board
        .harbors
        .iter()
        .map(|(point, slot)| {
            let qrp = point.qrp();
            let harbor_type = slot
                .as_ref()
                .and_then(|s| s.harbor.as_deref())
                .filter(|h| !h.is_empty())
                .unwrap_or(THREE_TO_ONE)
                .to_string();
            HarborEntity {
                id: encode_qrp(qrp),
                qrp,
                harbor_type,
            }
        })
        .collect();

    BoardEntities {
        hexes,
        buildings,
        roads,
        harbors,
    }
}
