//! Keyed reconciliation of a retained entity set against a new one.

use std::collections::HashSet;

use hexboard_shared::{BuildingEntity, HarborEntity, HexEntity, Qrp, RoadEntity, encode_qrp};
use serde::Serialize;

use crate::animation::ExitTransition;

/// Render identity of an entity.
pub trait Keyed {
    fn key(&self) -> String;
}

/// Hex identity is geometry plus robber presence, so a robber moving on or
/// off a hex re-creates it instead of toggling the marker in place.
impl Keyed for HexEntity {
    fn key(&self) -> String {
        format!("{},{}", self.id, self.has_robber)
    }
}

impl Keyed for BuildingEntity {
    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Keyed for RoadEntity {
    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Keyed for HarborEntity {
    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Keyed for Qrp {
    fn key(&self) -> String {
        encode_qrp(*self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Instruction<V> {
    Create {
        key: String,
        visual: V,
    },
    Update {
        key: String,
        visual: V,
    },
    Remove {
        key: String,
        exit: Option<ExitTransition<V>>,
    },
}

impl<V> Instruction<V> {
    pub fn key(&self) -> &str {
        match self {
            Self::Create { key, .. } | Self::Update { key, .. } | Self::Remove { key, .. } => key,
        }
    }

    pub fn map<W>(self, f: impl Fn(V) -> W) -> Instruction<W> {
        match self {
            Self::Create { key, visual } => Instruction::Create {
                key,
                visual: f(visual),
            },
            Self::Update { key, visual } => Instruction::Update {
                key,
                visual: f(visual),
            },
            Self::Remove { key, exit } => Instruction::Remove {
                key,
                exit: exit.map(|e| ExitTransition {
                    target: f(e.target),
                    duration_ms: e.duration_ms,
                }),
            },
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create { .. })
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    pub fn is_remove(&self) -> bool {
        matches!(self, Self::Remove { .. })
    }
}

/// How entities that left the set are taken off the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Removal {
    Immediate,
    Animated { duration_ms: f64 },
}

impl Removal {
    /// Animated only when a previous window existed and the duration is non-zero.
    pub fn for_pass(has_previous_domain: bool, duration_ms: f64) -> Self {
        if has_previous_domain && duration_ms > 0.0 {
            Self::Animated { duration_ms }
        } else {
            Self::Immediate
        }
    }
}

/// Per-category counts of one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlanStats {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

impl PlanStats {
    pub fn of<V>(plan: &[Instruction<V>]) -> Self {
        plan.iter().fold(Self::default(), |mut stats, ins| {
            match ins {
                Instruction::Create { .. } => stats.created += 1,
                Instruction::Update { .. } => stats.updated += 1,
                Instruction::Remove { .. } => stats.removed += 1,
            }
            stats
        })
    }

    pub fn is_empty(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.removed == 0
    }
}

/// The keyed set currently on the surface for one category.
#[derive(Debug, Clone)]
pub struct KeyedSet<E> {
    entries: Vec<(String, E)>,
}

impl<E> Default for KeyedSet<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Keyed> KeyedSet<E> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Diff the retained set against `next`, then retain `next`.
    ///
    /// Creates and updates come in `next` order, removals in retained order.
    /// A removed entity is placed with the same `place` as the new set, so an
    /// animated exit slides toward where it would sit under the new scale.
    pub fn reconcile<V>(
        &mut self,
        next: Vec<E>,
        place: impl Fn(&E) -> V,
        removal: Removal,
    ) -> Vec<Instruction<V>> {
        let previous: HashSet<&str> = self.keys().collect();
        let mut seen: HashSet<String> = HashSet::with_capacity(next.len());
        let mut plan = Vec::with_capacity(next.len());
        let mut retained = Vec::with_capacity(next.len());

        for entity in next {
            let key = entity.key();
            if !seen.insert(key.clone()) {
                tracing::warn!(key = %key, "duplicate key in entity set, keeping first");
                continue;
            }
            let visual = place(&entity);
            if previous.contains(key.as_str()) {
                plan.push(Instruction::Update {
                    key: key.clone(),
                    visual,
                });
            } else {
                plan.push(Instruction::Create {
                    key: key.clone(),
                    visual,
                });
            }
            retained.push((key, entity));
        }

        for (key, entity) in &self.entries {
            if seen.contains(key) {
                continue;
            }
            let exit = match removal {
                Removal::Immediate => None,
                Removal::Animated { duration_ms } => Some(ExitTransition {
                    target: place(entity),
                    duration_ms,
                }),
            };
            plan.push(Instruction::Remove {
                key: key.clone(),
                exit,
            });
        }

        drop(previous);
        self.entries = retained;
        plan
    }
}
