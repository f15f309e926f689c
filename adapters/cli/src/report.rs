//! Console presentation of match progress.

use lane_defence_simulation::Outcome;
use lane_defence_world::{query, GameState};

/// Summarises the state after a step on a single line.
pub(crate) fn format_state(state: &GameState) -> String {
    let enemies = query::enemy_view(state);
    let status = if enemies.is_empty() {
        String::from("none")
    } else {
        enemies
            .iter()
            .map(|enemy| format!("pos {:.1} ({} hp)", enemy.position, enemy.health))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Tick {}: enemies [{status}], defeated {}, lost: {}",
        state.tick(),
        state.defeated(),
        state.has_lost()
    )
}

/// Final line printed once the loop stops.
pub(crate) fn verdict(outcome: Option<Outcome>) -> &'static str {
    match outcome {
        Some(Outcome::Lost) => "Base lost!",
        Some(Outcome::Cleared) => "Wave cleared!",
        None => "Tick limit reached.",
    }
}
