use crate::animation::Transition;
use crate::layers::{Layer, Visual};
use crate::reconcile::Instruction;

/// The drawing target. It owns the actual shapes and runs any exit
/// transitions; the board only tells it what changed.
pub trait BoardSurface {
    fn apply(&mut self, layer: Layer, instruction: Instruction<Visual>);
}

/// An entity sliding out after an animated removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Exiting {
    pub layer: Layer,
    pub key: String,
    pub transition: Transition,
}

/// Keeps every applied instruction in order. Used by tests and the replay tool.
///
/// Animated removals are started at the surface clock and stay in
/// [`RecordingSurface::exiting`] until [`RecordingSurface::advance`] moves the
/// clock past their end.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub applied: Vec<(Layer, Instruction<Visual>)>,
    now: f64,
    exiting: Vec<Exiting>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Instruction<Visual>> {
        self.applied
            .iter()
            .filter(move |(l, _)| *l == layer)
            .map(|(_, ins)| ins)
    }

    pub fn take(&mut self) -> Vec<(Layer, Instruction<Visual>)> {
        std::mem::take(&mut self.applied)
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn exiting(&self) -> &[Exiting] {
        &self.exiting
    }

    /// Move the clock to `now` and drop every exit that has finished by then.
    /// Returns the finished exits in the order they were started.
    pub fn advance(&mut self, now: f64) -> Vec<Exiting> {
        self.now = now;
        let (done, running): (Vec<_>, Vec<_>) = std::mem::take(&mut self.exiting)
            .into_iter()
            .partition(|e| e.transition.is_finished(now));
        self.exiting = running;
        done
    }
}

impl BoardSurface for RecordingSurface {
    fn apply(&mut self, layer: Layer, instruction: Instruction<Visual>) {
        if let Instruction::Remove {
            key,
            exit: Some(exit),
        } = &instruction
        {
            self.exiting.push(Exiting {
                layer,
                key: key.clone(),
                transition: exit.start(self.now),
            });
        }
        self.applied.push((layer, instruction));
    }
}
