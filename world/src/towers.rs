//! Authoritative tower storage.

use lane_defence_core::{Tower, TowerId};

/// Registry that stores towers in placement order and resolves identifiers.
#[derive(Clone, Debug)]
pub(crate) struct TowerRegistry {
    entries: Vec<Tower>,
}

impl TowerRegistry {
    /// Creates a registry holding the provided towers in firing order.
    pub(crate) fn new(entries: Vec<Tower>) -> Self {
        Self { entries }
    }

    /// Looks up the tower registered under the identifier.
    pub(crate) fn get(&self, tower: TowerId) -> Option<&Tower> {
        self.entries.get(tower.get())
    }

    /// Towers in firing order.
    pub(crate) fn as_slice(&self) -> &[Tower] {
        &self.entries
    }
}
