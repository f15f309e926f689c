use lane_defence_core::{Command, EnemyId, Event, SpawnPlan, Tower, TowerId};
use lane_defence_system_movement::Movement;
use lane_defence_world::{self as world, GameState};

fn spawn_all(state: &mut GameState, plans: &[SpawnPlan], events: &mut Vec<Event>) {
    for plan in plans {
        world::apply(state, Command::SpawnEnemy { plan: *plan }, events);
    }
}

fn pump(state: &mut GameState, movement: &Movement) -> Vec<Event> {
    let mut commands = Vec::new();
    movement.handle(state.active_enemies(), &mut commands);

    let mut events = Vec::new();
    for command in commands {
        world::apply(state, command, &mut events);
    }
    events
}

#[test]
fn enemies_advance_by_their_speed_in_spawn_order() {
    let mut state = GameState::new(12, Vec::new());
    let mut events = Vec::new();
    spawn_all(
        &mut state,
        &[SpawnPlan::new(0, 4, 1.0), SpawnPlan::new(0, 5, 1.5)],
        &mut events,
    );

    let movement = Movement::default();
    let events = pump(&mut state, &movement);
    let messages: Vec<_> = events.iter().map(Event::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "Enemy advanced to 1.0 with 4 hp remaining.",
            "Enemy advanced to 1.5 with 5 hp remaining.",
        ]
    );

    let _ = pump(&mut state, &movement);
    let positions: Vec<_> = state.enemies().iter().map(|enemy| enemy.position()).collect();
    assert_eq!(positions, vec![2.0, 3.0]);
}

#[test]
fn defeated_enemies_do_not_move() {
    let mut state = GameState::new(12, vec![Tower::new(0, 0, 10)]);
    let mut events = Vec::new();
    spawn_all(
        &mut state,
        &[SpawnPlan::new(0, 1, 1.0), SpawnPlan::new(0, 1, 2.0)],
        &mut events,
    );
    world::apply(
        &mut state,
        Command::StrikeEnemy {
            tower: TowerId::new(0),
            enemy: EnemyId::new(0),
        },
        &mut events,
    );

    let events = pump(&mut state, &Movement::default());
    assert_eq!(
        events,
        vec![Event::EnemyAdvanced {
            enemy: EnemyId::new(1),
            position: 2.0,
            health: 1,
        }]
    );
    assert_eq!(state.enemies()[0].position(), 0.0);
}

#[test]
fn custom_step_scales_distance() {
    let mut state = GameState::new(12, Vec::new());
    let mut events = Vec::new();
    spawn_all(&mut state, &[SpawnPlan::new(0, 1, 2.0)], &mut events);

    let _ = pump(&mut state, &Movement::with_step(0.5));
    assert_eq!(state.enemies()[0].position(), 1.0);
}
