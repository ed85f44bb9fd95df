pub mod colors;
pub mod coords;
pub mod entities;
pub mod identity;
pub mod snapshot;

pub use colors::{player_color, terrain_color};
pub use coords::*;
pub use entities::*;
pub use identity::{KeyError, decode_qr, decode_qrp, encode_edge, encode_qr, encode_qrp};
pub use snapshot::*;
