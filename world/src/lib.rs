#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative match state management for Lane Defence.

mod towers;

use lane_defence_core::{Command, Enemy, EnemyId, Event, Tower, TowerId};

use towers::TowerRegistry;

/// Represents the authoritative state of a single Lane Defence match.
#[derive(Clone, Debug)]
pub struct GameState {
    track_length: i64,
    enemies: Vec<Enemy>,
    towers: TowerRegistry,
    tick: u64,
    defeated: u64,
    next_enemy_id: u32,
}

impl GameState {
    /// Creates a fresh match on a track of the given length defended by `towers`.
    ///
    /// Towers fire in the order provided.
    #[must_use]
    pub fn new(track_length: i64, towers: Vec<Tower>) -> Self {
        Self {
            track_length,
            enemies: Vec::new(),
            towers: TowerRegistry::new(towers),
            tick: 0,
            defeated: 0,
            next_enemy_id: 0,
        }
    }

    /// Position at which an enemy breaches the base.
    #[must_use]
    pub const fn track_length(&self) -> i64 {
        self.track_length
    }

    /// Number of completed simulation steps.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of enemies defeated since the match began.
    #[must_use]
    pub const fn defeated(&self) -> u64 {
        self.defeated
    }

    /// Every enemy currently stored, in spawn order.
    ///
    /// Enemies defeated during the current combat phase remain here until the
    /// phase purges them.
    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Towers in firing order.
    #[must_use]
    pub fn towers(&self) -> &[Tower] {
        self.towers.as_slice()
    }

    /// Looks up a tower by identifier.
    #[must_use]
    pub fn tower(&self, tower: TowerId) -> Option<&Tower> {
        self.towers.get(tower)
    }

    /// Enemies that still have hit points, in spawn order.
    pub fn active_enemies(&self) -> impl Iterator<Item = &Enemy> + '_ {
        self.enemies.iter().filter(|enemy| enemy.is_alive())
    }

    /// Reports whether an active enemy reached or passed the end of the track.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        let boundary = self.track_length as f64;
        self.active_enemies()
            .any(|enemy| enemy.position() >= boundary)
    }

    /// Reports whether no active enemies remain on the track.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.active_enemies().next().is_none()
    }

    fn enemy_mut(&mut self, enemy: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|candidate| candidate.id() == enemy)
    }

    fn allocate_enemy_id(&mut self) -> EnemyId {
        let id = EnemyId::new(self.next_enemy_id);
        self.next_enemy_id = self.next_enemy_id.saturating_add(1);
        id
    }
}

/// Applies the provided command to the match, mutating state deterministically.
///
/// Commands that reference unknown towers or enemies are ignored.
pub fn apply(state: &mut GameState, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::SpawnEnemy { plan } => {
            let id = state.allocate_enemy_id();
            let enemy = plan.spawn_enemy(id);
            out_events.push(Event::EnemySpawned {
                enemy: id,
                health: enemy.health(),
                tick: state.tick,
            });
            state.enemies.push(enemy);
        }
        Command::StrikeEnemy { tower, enemy } => {
            let Some(stats) = state.towers.get(tower).copied() else {
                return;
            };
            let Some(target) = state.enemy_mut(enemy) else {
                return;
            };

            let was_alive = target.is_alive();
            target.apply_damage(stats.damage());
            out_events.push(Event::EnemyHit {
                tower,
                tower_position: stats.position(),
                enemy,
                enemy_position: target.position(),
                damage: stats.damage(),
            });

            if was_alive && !target.is_alive() {
                state.defeated = state.defeated.saturating_add(1);
                out_events.push(Event::EnemyDefeated { enemy });
            }
        }
        Command::PurgeDefeated => {
            state.enemies.retain(Enemy::is_alive);
        }
        Command::AdvanceEnemy { enemy, dt } => {
            if let Some(target) = state.enemy_mut(enemy) {
                target.advance(dt);
                out_events.push(Event::EnemyAdvanced {
                    enemy,
                    position: target.position(),
                    health: target.health(),
                });
            }
        }
        Command::AdvanceTick => {
            state.tick = state.tick.saturating_add(1);
        }
    }
}

/// Query functions that provide read-only snapshots of the match state.
pub mod query {
    use super::GameState;
    use lane_defence_core::EnemyId;

    /// Captures a read-only view of the active enemies in spawn order.
    #[must_use]
    pub fn enemy_view(state: &GameState) -> EnemyView {
        let snapshots = state
            .active_enemies()
            .map(|enemy| EnemySnapshot {
                id: enemy.id(),
                position: enemy.position(),
                health: enemy.health(),
            })
            .collect();
        EnemyView { snapshots }
    }

    /// Read-only snapshot describing every active enemy on the track.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct EnemyView {
        snapshots: Vec<EnemySnapshot>,
    }

    impl EnemyView {
        /// Iterator over the captured snapshots in spawn order.
        pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
            self.snapshots.iter()
        }

        /// Reports whether the view captured no enemies.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.snapshots.is_empty()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<EnemySnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single enemy used for presentation.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct EnemySnapshot {
        /// Identifier assigned to the enemy.
        pub id: EnemyId,
        /// Distance travelled along the track.
        pub position: f64,
        /// Remaining hit points.
        pub health: i64,
    }
}
