/// Terrain labels in palette order.
pub const TERRAINS: [&str; 6] = ["forest", "hill", "mountain", "desert", "pasture", "field"];

/// ColorBrewer Pastel2, 6 classes.
pub const TERRAIN_PALETTE: [(u8, u8, u8); 6] = [
    (0xb3, 0xe2, 0xcd),
    (0xfd, 0xcd, 0xac),
    (0xcb, 0xd5, 0xe8),
    (0xf4, 0xca, 0xe4),
    (0xe6, 0xf5, 0xc9),
    (0xff, 0xf2, 0xae),
];

/// Player color labels in palette order.
pub const PLAYER_COLORS: [&str; 4] = ["red", "blue", "white", "orange"];

/// ColorBrewer Set1, 4 classes.
pub const PLAYER_PALETTE: [(u8, u8, u8); 4] = [
    (0xe4, 0x1a, 0x1c),
    (0x37, 0x7e, 0xb8),
    (0x4d, 0xaf, 0x4a),
    (0x98, 0x4e, 0xa3),
];

/// Fill used when a label falls outside the fixed domains.
pub const UNKNOWN_COLOR: (u8, u8, u8) = (0x99, 0x99, 0x99);

/// Fill color for a terrain label, `None` for labels outside [`TERRAINS`].
pub fn terrain_color(terrain: &str) -> Option<(u8, u8, u8)> {
    TERRAINS
        .iter()
        .position(|t| *t == terrain)
        .map(|idx| TERRAIN_PALETTE[idx])
}

/// Fill color for a player color label, `None` for labels outside [`PLAYER_COLORS`].
pub fn player_color(color: &str) -> Option<(u8, u8, u8)> {
    PLAYER_COLORS
        .iter()
        .position(|c| *c == color)
        .map(|idx| PLAYER_PALETTE[idx])
}
