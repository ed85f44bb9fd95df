pub const DEFAULT_ANIMATION_MS: f64 = 400.0;
pub const DEFAULT_TARGET_WIDTH: f64 = 960.0;
pub const DEFAULT_TARGET_HEIGHT: f64 = 800.0;

/// Knobs for one board instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Removal transition length in milliseconds; 0 removes immediately.
    pub animation_ms: f64,
    /// Whether the coordinate debug overlay is visible.
    pub show_coords: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            animation_ms: DEFAULT_ANIMATION_MS,
            show_coords: false,
        }
    }
}

impl RenderConfig {
    pub fn from_env() -> Self {
        Self {
            animation_ms: animation_ms(),
            show_coords: show_coords(),
        }
    }
}

pub fn animation_ms() -> f64 {
    std::env::var("HEXBOARD_ANIMATION_MS")
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(DEFAULT_ANIMATION_MS)
}

pub fn show_coords() -> bool {
    std::env::var("HEXBOARD_SHOW_COORDS")
        .map(|value| {
            let normalized = value.trim().to_ascii_lowercase();
            matches!(normalized.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(false)
}

pub fn target_width() -> f64 {
    positive_f64("HEXBOARD_WIDTH").unwrap_or(DEFAULT_TARGET_WIDTH)
}

pub fn target_height() -> f64 {
    positive_f64("HEXBOARD_HEIGHT").unwrap_or(DEFAULT_TARGET_HEIGHT)
}

fn positive_f64(key: &str) -> Option<f64> {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        temp_env::with_vars_unset(
            [
                "HEXBOARD_ANIMATION_MS",
                "HEXBOARD_SHOW_COORDS",
                "HEXBOARD_WIDTH",
                "HEXBOARD_HEIGHT",
            ],
            || {
                assert_eq!(RenderConfig::from_env(), RenderConfig::default());
                assert_eq!(target_width(), DEFAULT_TARGET_WIDTH);
                assert_eq!(target_height(), DEFAULT_TARGET_HEIGHT);
            },
        );
    }

    #[test]
    fn animation_ms_accepts_zero_and_rejects_garbage() {
        temp_env::with_var("HEXBOARD_ANIMATION_MS", Some("0"), || {
            assert_eq!(animation_ms(), 0.0);
        });
        temp_env::with_var("HEXBOARD_ANIMATION_MS", Some("-5"), || {
            assert_eq!(animation_ms(), DEFAULT_ANIMATION_MS);
        });
        temp_env::with_var("HEXBOARD_ANIMATION_MS", Some("soon"), || {
            assert_eq!(animation_ms(), DEFAULT_ANIMATION_MS);
        });
        temp_env::with_var("HEXBOARD_ANIMATION_MS", Some(" 250 "), || {
            assert_eq!(animation_ms(), 250.0);
        });
    }

    #[test]
    fn show_coords_flag_values() {
        for on in ["1", "true", "YES", " on "] {
            temp_env::with_var("HEXBOARD_SHOW_COORDS", Some(on), || {
                assert!(show_coords(), "{on:?} should enable the overlay");
            });
        }
        temp_env::with_var("HEXBOARD_SHOW_COORDS", Some("off"), || {
            assert!(!show_coords());
        });
    }

    #[test]
    fn target_size_ignores_non_positive() {
        temp_env::with_vars(
            [("HEXBOARD_WIDTH", Some("0")), ("HEXBOARD_HEIGHT", Some("640"))],
            || {
                assert_eq!(target_width(), DEFAULT_TARGET_WIDTH);
                assert_eq!(target_height(), 640.0);
            },
        );
    }
}
