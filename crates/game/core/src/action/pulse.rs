//! The pulse sense: a pure read of everything within reach.

use crate::command::{ArgValue, CommandPayload, CommandResult, PulseOutcome};
use crate::config::GameConfig;
use crate::grid::{TileFlags, TileKind};
use crate::path::bfs_reachable;
use crate::state::{Direction, Faction, GameState, Position, StatusKind};

pub(crate) fn execute(state: &GameState, result: &mut CommandResult) {
    let radius = result
        .args
        .get("radius")
        .and_then(ArgValue::as_int)
        .unwrap_or(GameConfig::DEFAULT_PULSE_RADIUS)
        .clamp(1, GameConfig::MAX_PULSE_RADIUS as i64) as u32;

    result.push_line("Your senses extend outward.");

    let origin = state.player.position;
    let reachable = bfs_reachable(&state.grid, origin, radius);
    let mut outcome = PulseOutcome {
        radius,
        ..PulseOutcome::default()
    };

    // Emission order is fixed: doors, lit fireplaces, entities, traps.
    for (position, _) in &reachable {
        if state.grid.kind_at(*position) == TileKind::Door {
            result.push_line(sensed_line("a door", origin, *position));
        }
    }
    for (position, _) in &reachable {
        if state.grid.kind_at(*position) == TileKind::Fireplace
            && state.grid.flags_at(*position).contains(TileFlags::IGNITED)
        {
            result.push_line(sensed_line("the warmth of a fire", origin, *position));
        }
    }
    for (position, _) in &reachable {
        let Some(entity) = state.living_entity_at(*position) else {
            continue;
        };
        match entity.faction {
            Faction::Hostile => {
                outcome.hostiles += 1;
                result.push_line(sensed_line("a hostile presence", origin, *position));
            }
            Faction::Friendly => {
                outcome.friendlies += 1;
                result.push_line(sensed_line("your summoned ally", origin, *position));
            }
        }
    }
    for (position, _) in &reachable {
        let TileKind::Trap(kind) = state.grid.kind_at(*position) else {
            continue;
        };
        outcome.traps += 1;
        let noun = match kind {
            StatusKind::OnFire => "a fire trap",
            StatusKind::Poisoned => "a poison trap",
            StatusKind::Wet => "a water trap",
        };
        result.push_line(sensed_line(noun, origin, *position));
    }

    result.payload = CommandPayload::Pulse(outcome);
}

fn sensed_line(noun: &str, origin: Position, position: Position) -> String {
    match Direction::between(origin, position) {
        Some(direction) => format!(
            "You sense {noun} to the {direction}, {}.",
            distance_phrase(origin.chebyshev(position))
        ),
        // The player's own tile has no compass direction.
        None => format!("You sense {noun} {}.", distance_phrase(0)),
    }
}

fn distance_phrase(distance: i32) -> String {
    match distance {
        0 => "right next to you".to_string(),
        1 => "1 step away".to_string(),
        n => format!("{n} steps away"),
    }
}
