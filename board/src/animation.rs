use serde::Serialize;

/// Slide-then-remove description attached to an animated removal.
///
/// The entity moves to `target` (where it would sit under the new scale)
/// over `duration_ms`, then the surface drops it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExitTransition<V> {
    pub target: V,
    pub duration_ms: f64,
}

impl<V> ExitTransition<V> {
    /// Start the exit at `now`; the surface removes the entity once it finishes.
    pub fn start(&self, now: f64) -> Transition {
        Transition::new(now, self.duration_ms)
    }
}

/// A running transition, started by the surface when it applies an instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub start_time: f64,
    pub duration: f64, // milliseconds
}

impl Transition {
    pub fn new(start_time: f64, duration: f64) -> Self {
        Self {
            start_time,
            duration,
        }
    }

    /// Eased progress in `0.0..=1.0`, or `None` once the transition is over.
    pub fn progress(&self, now: f64) -> Option<f64> {
        let elapsed = now - self.start_time;
        if elapsed >= self.duration {
            return None;
        }
        Some(cubic_in_out((elapsed / self.duration).max(0.0)))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now).is_none()
    }
}

/// Cubic ease-in-out: accelerate through the first half, decelerate through the second.
fn cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_close(cubic_in_out(0.0), 0.0);
        assert_close(cubic_in_out(0.5), 0.5);
        assert_close(cubic_in_out(1.0), 1.0);
        assert!(cubic_in_out(0.25) < 0.25);
        assert!(cubic_in_out(0.75) > 0.75);
    }

    #[test]
    fn progress_ends_after_duration() {
        let t = Transition::new(1_000.0, 400.0);
        assert_close(t.progress(1_000.0).unwrap_or(-1.0), 0.0);
        assert_close(t.progress(1_200.0).unwrap_or(-1.0), 0.5);
        assert_eq!(t.progress(1_400.0), None);
        assert!(t.is_finished(1_400.0));
        assert!(!t.is_finished(1_399.0));
    }

    #[test]
    fn exit_transition_starts_with_its_duration() {
        let exit = ExitTransition {
            target: (0.0, 0.0),
            duration_ms: 400.0,
        };
        let running = exit.start(50.0);
        assert_eq!(running, Transition::new(50.0, 400.0));
        assert!(running.is_finished(450.0));
    }

    #[test]
    fn zero_duration_is_immediately_finished() {
        let t = Transition::new(5.0, 0.0);
        assert_eq!(t.progress(5.0), None);
        assert!(t.is_finished(5.0));
    }
}
