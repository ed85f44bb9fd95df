use serde::{Deserialize, Serialize};

/// Axial hex coordinate as assigned by the board generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qr {
    pub q: i32,
    pub r: i32,
}

impl Qr {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cartesian center of the hex in board units (pointy-top layout).
    ///
    /// `y` is negated so that the board's "up" renders upward once it goes
    /// through the inverted Y scale.
    pub fn to_cartesian(self) -> (f64, f64) {
        let q = self.q as f64;
        let r = self.r as f64;
        (3f64.sqrt() * (q + r / 2.0), -1.5 * r)
    }
}

/// Which of the two settlement corners of a hex a point refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
}

impl Position {
    /// Unit vertical offset from the hex center in screen space.
    /// Screen Y grows downward, so the top corner sits at -1.
    pub const fn offset(self) -> f64 {
        match self {
            Self::Top => -1.0,
            Self::Bottom => 1.0,
        }
    }

    pub const fn key_token(self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Bottom => "b",
        }
    }

    /// Inverse of [`Position::key_token`].
    ///
    /// Permissive: only `"t"` means top, every other token (including garbage)
    /// decodes to bottom. This is the single place that default is applied.
    pub fn from_key_token(token: &str) -> Self {
        if token == "t" { Self::Top } else { Self::Bottom }
    }
}

/// A corner point: one hex's view of a board vertex.
///
/// Up to three `Qrp` values can name the same physical vertex; they are not
/// canonicalized here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qrp {
    pub q: i32,
    pub r: i32,
    pub p: Position,
}

impl Qrp {
    pub const fn new(q: i32, r: i32, p: Position) -> Self {
        Self { q, r, p }
    }

    /// The hex this corner belongs to.
    pub const fn qr(self) -> Qr {
        Qr::new(self.q, self.r)
    }
}

/// A road slot between two corner points, kept in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge(pub [Qrp; 2]);

impl Edge {
    pub const fn new(a: Qrp, b: Qrp) -> Self {
        Self([a, b])
    }

    pub const fn points(&self) -> &[Qrp; 2] {
        &self.0
    }
}

/// Corners of a unit pointy-top hexagon centered on the origin.
pub fn unit_hex_corners() -> [(f64, f64); 6] {
    std::array::from_fn(|i| {
        let angle = std::f64::consts::TAU / 6.0 * (i as f64 + 0.5);
        (angle.cos(), angle.sin())
    })
}
