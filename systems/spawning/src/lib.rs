#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for emitting enemy spawn commands.

use std::collections::VecDeque;

use lane_defence_core::{Command, SpawnPlan};

/// Pending spawn plans, consumed front to back in ascending tick order.
#[derive(Clone, Debug, Default)]
pub struct SpawnSchedule {
    pending: VecDeque<SpawnPlan>,
}

impl SpawnSchedule {
    /// Creates a schedule from plans supplied in any order.
    ///
    /// Plans sharing a tick keep their relative order.
    #[must_use]
    pub fn new(plans: impl IntoIterator<Item = SpawnPlan>) -> Self {
        let mut plans: Vec<SpawnPlan> = plans.into_iter().collect();
        plans.sort_by_key(SpawnPlan::tick);
        Self {
            pending: plans.into(),
        }
    }

    /// Emits a spawn command for every pending plan due at or before `tick`.
    ///
    /// Plans with a negative tick are due on the very first call.
    pub fn handle(&mut self, tick: u64, out: &mut Vec<Command>) {
        let now = i64::try_from(tick).unwrap_or(i64::MAX);
        while self
            .pending
            .front()
            .is_some_and(|plan| plan.tick() <= now)
        {
            if let Some(plan) = self.pending.pop_front() {
                out.push(Command::SpawnEnemy { plan });
            }
        }
    }

    /// Reports whether any plan has yet to fire.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Plans that have yet to fire, in the order they will fire.
    pub fn pending(&self) -> impl Iterator<Item = &SpawnPlan> {
        self.pending.iter()
    }

    /// Tick of the next plan to fire, if any remain.
    #[must_use]
    pub fn next_tick(&self) -> Option<i64> {
        self.pending.front().map(SpawnPlan::tick)
    }
}
