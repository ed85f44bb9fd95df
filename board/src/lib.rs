//! Keeps a keyed set of board draw instructions in sync with a stream of
//! game-state snapshots.

pub mod animation;
pub mod board;
pub mod config;
pub mod hud;
pub mod layers;
pub mod projector;
pub mod reconcile;
pub mod scale;
pub mod surface;

pub use board::{Board, Frame, FrameSummary};
pub use config::RenderConfig;
pub use layers::{Layer, Visual};
pub use reconcile::{Instruction, KeyedSet, PlanStats, Removal};
pub use scale::{Dims, Margin, Placement, RenderTarget, Scales};
pub use surface::{BoardSurface, Exiting, RecordingSurface};
