#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Tick-driven simulation that drives the Lane Defence world.
//!
//! [`GameEngine`] owns the authoritative [`GameState`] together with the pure
//! systems. Every [`GameEngine::step`] runs four phases in a fixed order:
//!
//! 1. spawn every plan due at the current tick,
//! 2. let each tower strike its target, then purge defeated enemies,
//! 3. advance every surviving enemy,
//! 4. increment the tick counter.
//!
//! The events produced by the first three phases are returned in the order
//! they occurred.

use lane_defence_core::{Command, ConfigError, Event, Scenario, SpawnPlan, Tower, TowerId};
use lane_defence_system_movement::Movement;
use lane_defence_system_spawning::SpawnSchedule;
use lane_defence_system_tower_combat::TowerCombat;
use lane_defence_world::{self as world, GameState};
use log::{debug, info, trace};

/// Step bound applied by [`GameEngine::run`] when the caller supplies none.
pub const DEFAULT_MAX_TICKS: u64 = 200;

/// Terminal result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// An enemy reached the end of the track.
    Lost,
    /// Every enemy was defeated and no spawns remain.
    Cleared,
}

/// Step-based simulation for a single-lane tower defence match.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    schedule: SpawnSchedule,
    combat: TowerCombat,
    movement: Movement,
    commands: Vec<Command>,
}

impl GameEngine {
    /// Creates an engine without validating its inputs.
    ///
    /// Degenerate values such as zero damage or a non-positive track are
    /// accepted and simulated as given.
    #[must_use]
    pub fn new(
        track_length: i64,
        towers: impl IntoIterator<Item = Tower>,
        spawns: impl IntoIterator<Item = SpawnPlan>,
    ) -> Self {
        Self {
            state: GameState::new(track_length, towers.into_iter().collect()),
            schedule: SpawnSchedule::new(spawns),
            combat: TowerCombat::new(),
            movement: Movement::default(),
            commands: Vec::new(),
        }
    }

    /// Creates an engine from a scenario after validating it.
    pub fn from_scenario(scenario: Scenario) -> Result<Self, ConfigError> {
        scenario.validate()?;
        Ok(Self::new(
            scenario.track_length,
            scenario.towers,
            scenario.spawns,
        ))
    }

    /// Read-only access to the match state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Reports whether spawn plans remain that have not fired yet.
    #[must_use]
    pub fn has_pending_spawns(&self) -> bool {
        self.schedule.has_pending()
    }

    /// Spawn plans that have not fired yet, in firing order.
    pub fn pending_spawns(&self) -> impl Iterator<Item = &SpawnPlan> {
        self.schedule.pending()
    }

    /// Tick at which the next pending spawn plan fires, if any remain.
    #[must_use]
    pub fn next_spawn_tick(&self) -> Option<i64> {
        self.schedule.next_tick()
    }

    /// Reports whether the match has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Terminal result of the match, or `None` while it is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.state.has_lost() {
            Some(Outcome::Lost)
        } else if self.state.is_cleared() && !self.schedule.has_pending() {
            Some(Outcome::Cleared)
        } else {
            None
        }
    }

    /// Advances the simulation by one tick and returns the events it produced.
    ///
    /// The engine keeps stepping even after the match ended; stopping is left
    /// to the caller.
    pub fn step(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        self.spawn_ready(&mut events);
        self.towers_fire(&mut events);
        self.advance_enemies(&mut events);
        world::apply(&mut self.state, Command::AdvanceTick, &mut events);

        for event in &events {
            trace!("{event}");
        }
        events
    }

    /// Steps until the match ends or `max_ticks` steps were executed.
    ///
    /// `None` applies [`DEFAULT_MAX_TICKS`].
    pub fn run(&mut self, max_ticks: Option<u64>) -> &GameState {
        let max_ticks = max_ticks.unwrap_or(DEFAULT_MAX_TICKS);
        let mut elapsed = 0;

        while elapsed < max_ticks && !self.is_terminal() {
            let _ = self.step();
            elapsed += 1;
        }

        match self.outcome() {
            Some(outcome) => info!(
                "match ended at tick {} with outcome {outcome:?}, {} defeated",
                self.state.tick(),
                self.state.defeated()
            ),
            None => info!(
                "match stopped after {elapsed} steps without a result at tick {}",
                self.state.tick()
            ),
        }

        &self.state
    }

    /// Renders the events of a step as human-readable log lines.
    #[must_use]
    pub fn messages(events: &[Event]) -> Vec<String> {
        events.iter().map(Event::to_string).collect()
    }

    fn spawn_ready(&mut self, events: &mut Vec<Event>) {
        self.schedule.handle(self.state.tick(), &mut self.commands);
        if !self.commands.is_empty() {
            debug!(
                "tick {}: spawning {} enemies",
                self.state.tick(),
                self.commands.len()
            );
        }
        self.flush_commands(events);
    }

    fn towers_fire(&mut self, events: &mut Vec<Event>) {
        let tower_count = self.state.towers().len();
        let mut shots = 0;

        for index in 0..tower_count {
            let tower = TowerId::new(index);
            let Some(stats) = self.state.tower(tower).copied() else {
                continue;
            };

            self.combat.handle(
                tower,
                &stats,
                self.state.active_enemies(),
                &mut self.commands,
            );
            shots += self.commands.len();
            self.flush_commands(events);
        }

        world::apply(&mut self.state, Command::PurgeDefeated, events);
        debug!(
            "tick {}: {shots} of {tower_count} towers fired, {} enemies remain",
            self.state.tick(),
            self.state.enemies().len()
        );
    }

    fn advance_enemies(&mut self, events: &mut Vec<Event>) {
        self.movement
            .handle(self.state.active_enemies(), &mut self.commands);
        self.flush_commands(events);
    }

    fn flush_commands(&mut self, events: &mut Vec<Event>) {
        for command in self.commands.drain(..) {
            world::apply(&mut self.state, command, events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_without_spawns_is_immediately_cleared() {
        let engine = GameEngine::new(10, [Tower::new(1, 1, 1)], Vec::<SpawnPlan>::new());
        assert!(!engine.has_pending_spawns());
        assert_eq!(engine.outcome(), Some(Outcome::Cleared));
    }

    #[test]
    fn pending_spawns_keep_the_match_running() {
        let engine = GameEngine::new(10, Vec::<Tower>::new(), [SpawnPlan::new(5, 1, 1.0)]);
        assert!(engine.state().is_cleared());
        assert!(engine.has_pending_spawns());
        assert!(!engine.is_terminal());
        assert_eq!(engine.pending_spawns().count(), 1);
        assert_eq!(engine.next_spawn_tick(), Some(5));
    }

    #[test]
    fn next_spawn_tick_follows_the_schedule() {
        let mut engine = GameEngine::new(
            10,
            Vec::<Tower>::new(),
            [SpawnPlan::new(2, 1, 1.0), SpawnPlan::new(0, 1, 1.0)],
        );
        assert_eq!(engine.next_spawn_tick(), Some(0));

        let _ = engine.step();
        assert_eq!(engine.next_spawn_tick(), Some(2));

        let _ = engine.run(Some(2));
        assert_eq!(engine.next_spawn_tick(), None);
    }

    #[test]
    fn step_increments_tick_without_events_when_idle() {
        let mut engine = GameEngine::new(10, Vec::<Tower>::new(), [SpawnPlan::new(5, 1, 1.0)]);
        let events = engine.step();
        assert!(events.is_empty());
        assert_eq!(engine.state().tick(), 1);
    }

    #[test]
    fn from_scenario_rejects_invalid_configuration() {
        let scenario = Scenario {
            track_length: -1,
            towers: Vec::new(),
            spawns: Vec::new(),
        };
        let error = GameEngine::from_scenario(scenario).expect_err("scenario is invalid");
        assert_eq!(
            error,
            ConfigError::NonPositiveTrackLength { track_length: -1 }
        );
    }

    #[test]
    fn zero_damage_is_simulated_not_rejected() {
        let mut engine = GameEngine::new(3, [Tower::new(0, 10, 0)], [SpawnPlan::new(0, 1, 1.0)]);
        let state = engine.run(None);
        assert_eq!(state.defeated(), 0);
        assert!(state.has_lost());
        assert_eq!(state.tick(), 3);
    }
}
