use hexboard_shared::{BuildingEntity, HarborEntity, HexEntity, Qrp, RoadEntity, Snapshot};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::hud::{HudFrame, hud_frame};
use crate::layers::{
    BuildingGroup, BuildingGroupVisual, BuildingVisual, CoordVisual, HarborVisual, HexVisual,
    Layer, RoadVisual, Visual, coord_points, group_buildings, place_building,
    place_building_group, place_coord, place_harbor, place_hex, place_road,
};
use crate::projector::project;
use crate::reconcile::{Instruction, KeyedSet, PlanStats, Removal};
use crate::scale::{Dims, Placement, RenderTarget, Scales};
use crate::surface::BoardSurface;

/// Everything one snapshot changed, layer by layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: u64,
    pub hex_size: f64,
    pub hex_px: f64,
    pub hexes: Vec<Instruction<HexVisual>>,
    pub building_groups: Vec<Instruction<BuildingGroupVisual>>,
    pub buildings: Vec<Instruction<BuildingVisual>>,
    pub roads: Vec<Instruction<RoadVisual>>,
    pub harbors: Vec<Instruction<HarborVisual>>,
    pub coords: Vec<Instruction<CoordVisual>>,
    pub hud: HudFrame,
}

impl Frame {
    pub fn stats(&self) -> Vec<(Layer, PlanStats)> {
        vec![
            (Layer::Hexes, PlanStats::of(&self.hexes)),
            (Layer::BuildingGroups, PlanStats::of(&self.building_groups)),
            (Layer::Buildings, PlanStats::of(&self.buildings)),
            (Layer::Roads, PlanStats::of(&self.roads)),
            (Layer::Harbors, PlanStats::of(&self.harbors)),
            (Layer::Coords, PlanStats::of(&self.coords)),
        ]
    }

    /// Flatten into surface calls, in drawing-layer order.
    pub fn into_instructions(self) -> Vec<(Layer, Instruction<Visual>)> {
        let mut out = Vec::new();
        out.extend(tag(Layer::Hexes, self.hexes, Visual::Hex));
        out.extend(tag(
            Layer::BuildingGroups,
            self.building_groups,
            Visual::BuildingGroup,
        ));
        out.extend(tag(Layer::Buildings, self.buildings, Visual::Building));
        out.extend(tag(Layer::Roads, self.roads, Visual::Road));
        out.extend(tag(Layer::Harbors, self.harbors, Visual::Harbor));
        out.extend(tag(Layer::Coords, self.coords, Visual::Coord));
        out
    }
}

fn tag<V>(
    layer: Layer,
    plan: Vec<Instruction<V>>,
    wrap: fn(V) -> Visual,
) -> impl Iterator<Item = (Layer, Instruction<Visual>)> {
    plan.into_iter().map(move |ins| (layer, ins.map(wrap)))
}

/// What a rendered pass produced, minus the instructions themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSummary {
    pub index: u64,
    pub hex_px: f64,
    pub stats: Vec<(Layer, PlanStats)>,
    pub hud: HudFrame,
}

/// Retained board state between snapshots.
///
/// Each category's keyed set is replaced at the end of every pass; passes
/// run one at a time to completion.
#[derive(Debug)]
pub struct Board {
    target: RenderTarget,
    dims: Dims,
    config: RenderConfig,
    hexes: KeyedSet<HexEntity>,
    building_groups: KeyedSet<BuildingGroup>,
    buildings: KeyedSet<BuildingEntity>,
    roads: KeyedSet<RoadEntity>,
    harbors: KeyedSet<HarborEntity>,
    coords: KeyedSet<Qrp>,
}

impl Board {
    pub fn new(target: RenderTarget, config: RenderConfig) -> Self {
        let dims = target.dims();
        debug!(width = dims.width, height = dims.height, "board created");
        Self {
            target,
            dims,
            config,
            hexes: KeyedSet::default(),
            building_groups: KeyedSet::default(),
            buildings: KeyedSet::default(),
            roads: KeyedSet::default(),
            harbors: KeyedSet::default(),
            coords: KeyedSet::default(),
        }
    }

    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Reconcile the retained entity sets against `snapshot`.
    ///
    /// Returns `None` (and keeps the retained sets) when the snapshot has no
    /// visible window to place entities in.
    pub fn update(&mut self, snapshot: &Snapshot) -> Option<Frame> {
        let Some(domain) = snapshot.domain.as_ref() else {
            warn!(index = snapshot.index, "snapshot has no domain, skipping pass");
            return None;
        };

        let placement = Placement::new(domain, self.dims);
        let has_previous = Scales::for_domain(snapshot.prev_domain.as_ref(), self.dims).is_some();
        let removal = Removal::for_pass(has_previous, self.config.animation_ms);
        let entities = project(&snapshot.data);

        let hexes = self
            .hexes
            .reconcile(entities.hexes, |h| place_hex(&placement, h), removal);

        let groups = group_buildings(&entities.buildings);
        let building_groups = self.building_groups.reconcile(
            groups,
            |g| place_building_group(&placement, g),
            removal,
        );
        let buildings = self.buildings.reconcile(
            entities.buildings,
            |b| place_building(&placement, b),
            removal,
        );

        let roads = self
            .roads
            .reconcile(entities.roads, |r| place_road(&placement, r), removal);
        let harbors = self
            .harbors
            .reconcile(entities.harbors, |h| place_harbor(&placement, h), removal);

        let show_coords = self.config.show_coords;
        let coords = self.coords.reconcile(
            coord_points(),
            |q| place_coord(&placement, q, show_coords),
            Removal::Immediate,
        );

        let hud = hud_frame(snapshot, |color| placement.player_fill(color));

        let frame = Frame {
            index: snapshot.index,
            hex_size: placement.hex_size,
            hex_px: placement.hex_px,
            hexes,
            building_groups,
            buildings,
            roads,
            harbors,
            coords,
            hud,
        };

        for (layer, stats) in frame.stats() {
            if !stats.is_empty() {
                debug!(
                    index = frame.index,
                    ?layer,
                    created = stats.created,
                    updated = stats.updated,
                    removed = stats.removed,
                    "layer reconciled"
                );
            }
        }

        Some(frame)
    }

    /// Run a pass and push its instructions into `surface`.
    pub fn render<S: BoardSurface>(
        &mut self,
        snapshot: &Snapshot,
        surface: &mut S,
    ) -> Option<FrameSummary> {
        let frame = self.update(snapshot)?;
        let summary = FrameSummary {
            index: frame.index,
            hex_px: frame.hex_px,
            stats: frame.stats(),
            hud: frame.hud.clone(),
        };
        for (layer, instruction) in frame.into_instructions() {
            surface.apply(layer, instruction);
        }
        Some(summary)
    }

    /// Forget everything on the surface. The next pass creates from scratch.
    pub fn destroy(&mut self) {
        self.hexes.clear();
        self.building_groups.clear();
        self.buildings.clear();
        self.roads.clear();
        self.harbors.clear();
        self.coords.clear();
    }
}
