#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Lane Defence engine.
//!
//! This crate defines the entities that populate a match and the message
//! surface that connects the authoritative world with pure systems. Systems
//! inspect the world's state and respond with [`Command`] values describing
//! desired mutations, the world executes those commands via its `apply` entry
//! point, and then reports [`Event`] values describing what happened. The
//! [`fmt::Display`] form of every event is the human-readable log line shown
//! to players.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulated time that elapses during a single simulation step.
pub const STEP_DT: f64 = 1.0;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Materialises a new enemy at the start of the track.
    SpawnEnemy {
        /// Plan describing the stats of the enemy.
        plan: SpawnPlan,
    },
    /// Requests that a tower deals its damage to an enemy.
    StrikeEnemy {
        /// Tower firing the shot.
        tower: TowerId,
        /// Enemy receiving the damage.
        enemy: EnemyId,
    },
    /// Drops every enemy whose health has been depleted.
    PurgeDefeated,
    /// Moves an enemy forward along the track.
    AdvanceEnemy {
        /// Enemy that should advance.
        enemy: EnemyId,
        /// Amount of simulated time the enemy travels for.
        dt: f64,
    },
    /// Advances the tick counter by one.
    AdvanceTick,
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that an enemy entered the track.
    EnemySpawned {
        /// Identifier assigned to the enemy.
        enemy: EnemyId,
        /// Hit points the enemy started with.
        health: i64,
        /// Tick during which the enemy appeared.
        tick: u64,
    },
    /// Reports that a tower damaged an enemy.
    EnemyHit {
        /// Tower that fired.
        tower: TowerId,
        /// Track location of the tower.
        tower_position: i64,
        /// Enemy that took the hit.
        enemy: EnemyId,
        /// Track location of the enemy when it was hit.
        enemy_position: f64,
        /// Damage dealt by the shot.
        damage: i64,
    },
    /// Reports that an enemy's health dropped to zero or below.
    EnemyDefeated {
        /// Enemy that was defeated.
        enemy: EnemyId,
    },
    /// Reports that an enemy moved along the track.
    EnemyAdvanced {
        /// Enemy that moved.
        enemy: EnemyId,
        /// Position reached after moving.
        position: f64,
        /// Hit points remaining.
        health: i64,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnemySpawned { health, tick, .. } => {
                write!(f, "Spawned enemy with {health} hp at tick {tick}.")
            }
            Self::EnemyHit {
                tower_position,
                enemy_position,
                damage,
                ..
            } => write!(
                f,
                "Tower at {tower_position} hit enemy at {enemy_position:.1} for {damage} damage."
            ),
            Self::EnemyDefeated { .. } => write!(f, "Enemy defeated!"),
            Self::EnemyAdvanced {
                position, health, ..
            } => write!(
                f,
                "Enemy advanced to {position:.1} with {health} hp remaining."
            ),
        }
    }
}

/// Unique identifier assigned to an enemy in spawn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Identifier of a tower, equal to its index in placement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TowerId(usize);

impl TowerId {
    /// Creates a new tower identifier from a placement index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Retrieves the placement index of the tower.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }
}

/// Hostile unit travelling along the track.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    id: EnemyId,
    position: f64,
    health: i64,
    speed: f64,
}

impl Enemy {
    /// Creates an enemy at an arbitrary track position.
    #[must_use]
    pub const fn new(id: EnemyId, position: f64, health: i64, speed: f64) -> Self {
        Self {
            id,
            position,
            health,
            speed,
        }
    }

    /// Identifier assigned when the enemy spawned.
    #[must_use]
    pub const fn id(&self) -> EnemyId {
        self.id
    }

    /// Distance travelled from the start of the track.
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Remaining hit points. May be negative after a lethal hit.
    #[must_use]
    pub const fn health(&self) -> i64 {
        self.health
    }

    /// Distance advanced per unit of simulated time.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Reports whether the enemy still has hit points left.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Moves the enemy forward by `speed * dt`.
    ///
    /// Positions are not clamped to the track; crossing its end is how a match
    /// is lost.
    pub fn advance(&mut self, dt: f64) {
        self.position += self.speed * dt;
    }

    /// Subtracts `damage` from the remaining hit points.
    pub fn apply_damage(&mut self, damage: i64) {
        self.health = self.health.saturating_sub(damage);
    }
}

/// Stationary defender placed beside the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tower {
    position: i64,
    attack_range: i64,
    damage: i64,
}

impl Tower {
    /// Creates a tower description.
    #[must_use]
    pub const fn new(position: i64, attack_range: i64, damage: i64) -> Self {
        Self {
            position,
            attack_range,
            damage,
        }
    }

    /// Track location of the tower.
    #[must_use]
    pub const fn position(&self) -> i64 {
        self.position
    }

    /// Inclusive radius within which the tower can fire.
    #[must_use]
    pub const fn attack_range(&self) -> i64 {
        self.attack_range
    }

    /// Damage dealt by a single shot.
    #[must_use]
    pub const fn damage(&self) -> i64 {
        self.damage
    }

    /// Reports whether the enemy lies within the tower's inclusive range.
    #[must_use]
    pub fn in_range(&self, enemy: &Enemy) -> bool {
        (enemy.position() - self.position as f64).abs() <= self.attack_range as f64
    }

    /// Selects the enemy this tower should fire at.
    ///
    /// Among the candidates within range the one with the smallest track
    /// position wins. Equal positions resolve to the candidate encountered
    /// first, so callers should supply enemies in spawn order.
    pub fn target<'a, I>(&self, candidates: I) -> Option<&'a Enemy>
    where
        I: IntoIterator<Item = &'a Enemy>,
    {
        let mut best: Option<&'a Enemy> = None;

        for candidate in candidates {
            if !self.in_range(candidate) {
                continue;
            }

            let replaces = match best {
                Some(existing) => candidate.position() < existing.position(),
                None => true,
            };
            if replaces {
                best = Some(candidate);
            }
        }

        best
    }
}

/// Declarative instruction describing when and with which stats an enemy enters the track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnPlan {
    tick: i64,
    health: i64,
    speed: f64,
}

impl SpawnPlan {
    /// Creates a new spawn plan.
    #[must_use]
    pub const fn new(tick: i64, health: i64, speed: f64) -> Self {
        Self {
            tick,
            health,
            speed,
        }
    }

    /// Tick at which the enemy becomes eligible to spawn.
    ///
    /// Negative ticks are already overdue when the match starts.
    #[must_use]
    pub const fn tick(&self) -> i64 {
        self.tick
    }

    /// Hit points assigned to the spawned enemy.
    #[must_use]
    pub const fn health(&self) -> i64 {
        self.health
    }

    /// Speed assigned to the spawned enemy.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Materialises the planned enemy at the start of the track.
    #[must_use]
    pub const fn spawn_enemy(&self, id: EnemyId) -> Enemy {
        Enemy::new(id, 0.0, self.health, self.speed)
    }
}

/// Complete description of a match: the track, its defenders and the incoming wave.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Position at which an enemy breaches the base.
    pub track_length: i64,
    /// Towers in firing order.
    #[serde(default)]
    pub towers: Vec<Tower>,
    /// Enemies scheduled to enter the track.
    #[serde(default)]
    pub spawns: Vec<SpawnPlan>,
}

impl Scenario {
    /// Checks the scenario for values that make the match meaningless.
    ///
    /// The simulation itself accepts any input; this check is opt-in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track_length <= 0 {
            return Err(ConfigError::NonPositiveTrackLength {
                track_length: self.track_length,
            });
        }

        for (index, tower) in self.towers.iter().enumerate() {
            if tower.damage() < 0 {
                return Err(ConfigError::NegativeTowerDamage {
                    tower: index,
                    damage: tower.damage(),
                });
            }
            if tower.attack_range() < 0 {
                return Err(ConfigError::NegativeTowerRange {
                    tower: index,
                    attack_range: tower.attack_range(),
                });
            }
        }

        for (index, plan) in self.spawns.iter().enumerate() {
            if plan.health() <= 0 {
                return Err(ConfigError::NonPositiveSpawnHealth {
                    spawn: index,
                    health: plan.health(),
                });
            }
        }

        Ok(())
    }
}

/// Reasons a scenario is rejected at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The track has no length for enemies to travel.
    #[error("track length must be positive, got {track_length}")]
    NonPositiveTrackLength {
        /// Configured track length.
        track_length: i64,
    },
    /// A tower would heal the enemies it hits.
    #[error("tower {tower} has negative damage {damage}")]
    NegativeTowerDamage {
        /// Index of the offending tower.
        tower: usize,
        /// Configured damage.
        damage: i64,
    },
    /// A tower has a negative attack radius.
    #[error("tower {tower} has negative attack range {attack_range}")]
    NegativeTowerRange {
        /// Index of the offending tower.
        tower: usize,
        /// Configured range.
        attack_range: i64,
    },
    /// A spawn plan would create an enemy that is already defeated.
    #[error("spawn {spawn} has non-positive health {health}")]
    NonPositiveSpawnHealth {
        /// Index of the offending spawn plan.
        spawn: usize,
        /// Configured health.
        health: i64,
    },
}
