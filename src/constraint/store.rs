use indexmap::IndexMap;

use crate::constraint::attribute::{Attribute, Axis};
use crate::constraint::rule::{Comparison, Constraint};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SlotKey {
    attribute: Attribute,
    guard: Option<String>,
}

impl SlotKey {
    fn of(c: &Constraint) -> Self {
        Self {
            attribute: c.target,
            guard: c.condition.as_ref().map(|g| g.key()),
        }
    }
}

/// Per-view constraint set.
///
/// Equalities live in one slot per `(attribute, guard)`; inequalities are
/// independent bounds kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ConstraintState {
    equals: IndexMap<SlotKey, Constraint>,
    bounds: Vec<Constraint>,
}

impl ConstraintState {
    pub fn is_empty(&self) -> bool {
        self.equals.is_empty() && self.bounds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.equals.len() + self.bounds.len()
    }

    /// Constraints in emission order: equalities, then `<`, then `>`.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        let lt = self.bounds.iter().filter(|c| c.comparison == Comparison::Lt);
        let gt = self.bounds.iter().filter(|c| c.comparison == Comparison::Gt);
        self.equals.values().chain(lt).chain(gt)
    }

    pub fn for_attribute(&self, attribute: Attribute) -> Vec<&Constraint> {
        self.iter().filter(|c| c.target == attribute).collect()
    }

    /// Distinct attributes with at least one constraint, first-set first.
    pub fn constrained(&self) -> Vec<Attribute> {
        let mut out = Vec::new();
        for c in self.iter() {
            if !out.contains(&c.target) {
                out.push(c.target);
            }
        }
        out
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Constraint> {
        self.equals.values_mut().chain(self.bounds.iter_mut())
    }

    /// Drop every constraint on `attribute`. Returns whether anything changed.
    pub(crate) fn clear_attribute(&mut self, attribute: Attribute) -> bool {
        let before = self.len();
        self.equals.retain(|k, _| k.attribute != attribute);
        self.bounds.retain(|c| c.target != attribute);
        before != self.len()
    }

    pub(crate) fn clear_all(&mut self) -> bool {
        let changed = !self.is_empty();
        self.equals.clear();
        self.bounds.clear();
        changed
    }

    /// Store the result of one assignment to `target`. Any `=` in the batch
    /// replaces the attribute's previous equalities; bounds accumulate.
    /// Returns the attributes dropped by pruning.
    pub(crate) fn assign(&mut self, target: Attribute, batch: Vec<Constraint>) -> Vec<Attribute> {
        let mut guards = Vec::new();
        if batch.iter().any(|c| c.comparison == Comparison::Eq) {
            self.equals.retain(|k, _| k.attribute != target);
        }
        for c in batch {
            if c.comparison == Comparison::Eq {
                let key = SlotKey::of(&c);
                if !guards.contains(&key.guard) {
                    guards.push(key.guard.clone());
                }
                self.equals.shift_remove(&key);
                self.equals.insert(key, c);
            } else {
                self.bounds.push(c);
            }
        }

        let mut dropped = Vec::new();
        for guard in guards {
            dropped.extend(self.prune(target, guard.as_deref()));
        }
        dropped
    }

    /// Keep at most two equalities per axis within one guard group, never
    /// dropping `just_set`.
    fn prune(&mut self, just_set: Attribute, guard: Option<&str>) -> Vec<Attribute> {
        let axis: Axis = just_set.axis();
        let priority = axis.priority();
        let mut dropped = Vec::new();
        loop {
            let set: Vec<Attribute> = priority
                .iter()
                .copied()
                .filter(|a| {
                    self.equals.contains_key(&SlotKey {
                        attribute: *a,
                        guard: guard.map(str::to_owned),
                    })
                })
                .collect();
            if set.len() <= 2 {
                break;
            }
            let Some(victim) = set.iter().rev().copied().find(|a| *a != just_set) else {
                break;
            };
            self.equals.shift_remove(&SlotKey {
                attribute: victim,
                guard: guard.map(str::to_owned),
            });
            dropped.push(victim);
        }
        dropped
    }

    /// The `ui4` attribute value.
    pub fn serialize(&self) -> String {
        self.iter()
            .map(Constraint::serialize)
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/store.rs"]
mod tests;
