#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that emits strike commands from tower targeting decisions.

use lane_defence_core::{Command, Enemy, Tower, TowerId};

/// Tower combat system that queues a strike for a tower with a valid target.
#[derive(Debug, Default)]
pub struct TowerCombat;

impl TowerCombat {
    /// Creates a new tower combat system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Emits at most one `Command::StrikeEnemy` for the tower.
    ///
    /// `candidates` should contain the active enemies in spawn order as they
    /// stand right now, including damage dealt by towers that already fired
    /// this tick.
    pub fn handle<'a, I>(&self, tower: TowerId, stats: &Tower, candidates: I, out: &mut Vec<Command>)
    where
        I: IntoIterator<Item = &'a Enemy>,
    {
        if let Some(target) = stats.target(candidates) {
            out.push(Command::StrikeEnemy {
                tower,
                enemy: target.id(),
            });
        }
    }
}
