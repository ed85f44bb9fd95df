use hexboard_shared::colors::{UNKNOWN_COLOR, player_color, terrain_color};
use hexboard_shared::{Domain, Qr, Qrp};
use serde::{Deserialize, Serialize};

/// Linear mapping from a board-unit domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub const fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range. A zero-width domain pins every
    /// input to the start of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.domain[1] - self.domain[0];
        if span == 0.0 {
            return self.range[0];
        }
        let t = (value - self.domain[0]) / span;
        self.range[0] + t * (self.range[1] - self.range[0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 10.0,
            left: 10.0,
        }
    }
}

/// Outer size of the drawable surface, supplied once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderTarget {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margin: Margin,
}

impl RenderTarget {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
        }
    }

    /// Inner drawing area once margins are taken off.
    pub fn dims(&self) -> Dims {
        Dims {
            width: self.width - self.margin.left - self.margin.right,
            height: self.height - self.margin.top - self.margin.bottom,
        }
    }

    /// Translation applied to the board layer group.
    pub fn board_origin(&self) -> (f64, f64) {
        (self.margin.left, self.margin.top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dims {
    pub width: f64,
    pub height: f64,
}

/// The X/Y scale pair for one domain. Y is inverted so board "up" renders up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Scales {
    pub fn new(domain: &Domain, dims: Dims) -> Self {
        Self {
            x: LinearScale::new(domain.xy, [0.0, dims.width]),
            y: LinearScale::new(domain.xy, [dims.height, 0.0]),
        }
    }

    /// `None` when no window has been established yet.
    pub fn for_domain(domain: Option<&Domain>, dims: Dims) -> Option<Self> {
        domain.map(|d| Self::new(d, dims))
    }

    pub fn hex_center(&self, qr: Qr) -> (f64, f64) {
        let (cx, cy) = qr.to_cartesian();
        (self.x.apply(cx), self.y.apply(cy))
    }
}

/// Everything a placement computation needs for one render pass.
///
/// Built once per pass and passed explicitly; nothing is captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scales: Scales,
    /// Hex size in board units.
    pub hex_size: f64,
    /// Hex size in pixels, i.e. the X scale applied to `hex_size`.
    pub hex_px: f64,
}

impl Placement {
    pub fn new(domain: &Domain, dims: Dims) -> Self {
        let scales = Scales::new(domain, dims);
        let hex_size = domain.hex_size();
        Self {
            scales,
            hex_size,
            hex_px: scales.x.apply(hex_size),
        }
    }

    pub fn hex_center(&self, qr: Qr) -> (f64, f64) {
        self.scales.hex_center(qr)
    }

    /// Pixel position of a corner point: its hex center shifted vertically by
    /// one rendered hex size.
    pub fn corner(&self, qrp: Qrp) -> (f64, f64) {
        let (x, y) = self.hex_center(qrp.qr());
        (x, y + self.hex_px * qrp.p.offset())
    }

    pub fn terrain_fill(&self, terrain: &str) -> (u8, u8, u8) {
        terrain_color(terrain).unwrap_or_else(|| {
            tracing::debug!(terrain, "terrain outside the palette domain");
            UNKNOWN_COLOR
        })
    }

    pub fn player_fill(&self, color: &str) -> (u8, u8, u8) {
        player_color(color).unwrap_or_else(|| {
            tracing::debug!(color, "player color outside the palette domain");
            UNKNOWN_COLOR
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexboard_shared::Position;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    fn dims() -> Dims {
        Dims {
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn linear_scale_maps_endpoints_and_midpoint() {
        let s = LinearScale::new([0.0, 100.0], [0.0, 200.0]);
        assert_close(s.apply(0.0), 0.0);
        assert_close(s.apply(100.0), 200.0);
        assert_close(s.apply(25.0), 50.0);
        assert_close(s.apply(-10.0), -20.0);
    }

    #[test]
    fn y_scale_is_inverted() {
        let scales = Scales::new(&Domain::new(0.0, 100.0), dims());
        assert_close(scales.y.apply(0.0), 100.0);
        assert_close(scales.y.apply(100.0), 0.0);
        assert_close(scales.x.apply(0.0), 0.0);
    }

    #[test]
    fn zero_width_domain_pins_to_range_start() {
        let s = LinearScale::new([5.0, 5.0], [10.0, 20.0]);
        assert_close(s.apply(5.0), 10.0);
        assert_close(s.apply(99.0), 10.0);
    }

    #[test]
    fn missing_domain_yields_no_scales() {
        assert!(Scales::for_domain(None, dims()).is_none());
        assert!(Scales::for_domain(Some(&Domain::new(0.0, 1.0)), dims()).is_some());
    }

    #[test]
    fn render_target_subtracts_margins() {
        let target = RenderTarget::new(500.0, 400.0);
        assert_eq!(
            target.dims(),
            Dims {
                width: 480.0,
                height: 380.0
            }
        );
        assert_eq!(target.board_origin(), (10.0, 10.0));
    }

    #[test]
    fn placement_hex_px_goes_through_x_scale() {
        let p = Placement::new(&Domain::new(0.0, 100.0), dims());
        assert_close(p.hex_size, 12.5);
        assert_close(p.hex_px, 25.0);
    }

    #[test]
    fn corner_offsets_by_hex_px() {
        let p = Placement::new(&Domain::new(-4.0, 4.0), dims());
        let (cx, cy) = p.hex_center(Qr::new(0, 0));
        let (tx, ty) = p.corner(Qrp::new(0, 0, Position::Top));
        let (bx, by) = p.corner(Qrp::new(0, 0, Position::Bottom));
        assert_close(tx, cx);
        assert_close(bx, cx);
        assert_close(ty, cy - p.hex_px);
        assert_close(by, cy + p.hex_px);
    }

    #[test]
    fn unknown_labels_fall_back_to_neutral_fill() {
        let p = Placement::new(&Domain::new(0.0, 1.0), dims());
        assert_eq!(p.terrain_fill("ocean"), UNKNOWN_COLOR);
        assert_eq!(p.player_fill("red"), (0xe4, 0x1a, 0x1c));
    }
}
