#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic movement system that pushes surviving enemies down the track.

use lane_defence_core::{Command, Enemy, STEP_DT};

/// Pure system that emits one advance command per active enemy.
#[derive(Debug)]
pub struct Movement {
    dt: f64,
}

impl Movement {
    /// Creates a movement system that advances enemies by `dt` each step.
    #[must_use]
    pub const fn with_step(dt: f64) -> Self {
        Self { dt }
    }

    /// Emits `Command::AdvanceEnemy` for every enemy, preserving order.
    ///
    /// Callers pass active enemies only; defeated enemies never move.
    pub fn handle<'a, I>(&self, enemies: I, out: &mut Vec<Command>)
    where
        I: IntoIterator<Item = &'a Enemy>,
    {
        let enemies = enemies.into_iter();
        let (lower, _) = enemies.size_hint();
        out.reserve(lower);

        for enemy in enemies {
            out.push(Command::AdvanceEnemy {
                enemy: enemy.id(),
                dt: self.dt,
            });
        }
    }
}

impl Default for Movement {
    fn default() -> Self {
        Self::with_step(STEP_DT)
    }
}
