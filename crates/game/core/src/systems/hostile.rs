//! Per-turn decision procedure for hostile entities.

use crate::action::trigger_trap;
use crate::command::CommandResult;
use crate::path::first_step_towards;
use crate::state::{AiState, Direction, EntityId, Faction, GameState, Position};

/// Runs every living hostile once, in storage order.
///
/// A hostile out of aggro range of both the player and every minion idles.
/// Otherwise it closes on the strictly nearer of the two, attacking when
/// adjacent. Once the player falls, the remaining hostiles stand down for
/// the turn. Dead friendlies are swept before returning.
pub fn process_turn(state: &mut GameState, result: &mut CommandResult) {
    let ids: Vec<EntityId> = state
        .entities
        .iter()
        .filter(|e| e.is_alive() && e.faction == Faction::Hostile && e.ai_state == AiState::Attack)
        .map(|e| e.id)
        .collect();

    let mut player_died = false;
    for id in ids {
        // The remaining hostiles stand down once the player falls.
        if player_died {
            break;
        }
        let Some(entity) = state.entity(id) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        let position = entity.position;
        let attack = entity.attack;
        let aggro = entity.aggro_range;

        let player_distance = position.manhattan(state.player.position);
        let nearest_friendly = nearest_living_friendly(state, position);
        let friendly_distance = nearest_friendly.map(|(_, d)| d).unwrap_or(i32::MAX);
        if player_distance > aggro && friendly_distance > aggro {
            continue;
        }

        // Prefer the minion only when strictly closer than the player.
        if let Some((target_id, distance)) = nearest_friendly {
            if distance < player_distance {
                engage_friendly(state, result, id, target_id, attack);
                continue;
            }
        }

        if position.is_adjacent(state.player.position) {
            claw_player(state, result, position, attack, &mut player_died);
        } else {
            step_towards(state, result, id, state.player.position);
        }
    }

    if player_died {
        result.push_line("You collapse as the last of your strength drains away.");
        result.set_game_over();
        state.game_over = true;
    }
    state.sweep_corpses(Faction::Friendly);
}

fn nearest_living_friendly(state: &GameState, from: Position) -> Option<(EntityId, i32)> {
    state
        .living_entities(Faction::Friendly)
        .map(|e| (e.id, from.manhattan(e.position)))
        .min_by_key(|(_, distance)| *distance)
}

fn engage_friendly(
    state: &mut GameState,
    result: &mut CommandResult,
    hostile: EntityId,
    target: EntityId,
    attack: u32,
) {
    let Some(position) = state.entity(hostile).map(|e| e.position) else {
        return;
    };
    let Some(target_position) = state.entity(target).map(|e| e.position) else {
        return;
    };
    if position.is_adjacent(target_position) {
        if let Some(entity) = state.entity_mut(target) {
            entity.health.apply_damage(attack);
            if entity.is_alive() {
                result.push_line("A hostile lashes out at your summoned ally.");
            } else {
                result.push_line("A hostile slays your summoned ally.");
            }
        }
    } else {
        step_towards(state, result, hostile, target_position);
    }
}

fn claw_player(
    state: &mut GameState,
    result: &mut CommandResult,
    from: Position,
    attack: u32,
    player_died: &mut bool,
) {
    if let Some(direction) = Direction::between(state.player.position, from) {
        result.push_line(format!("A hostile claws at you from the {direction}."));
    }
    state.player.health.apply_damage(attack);
    if !state.player.is_alive() {
        *player_died = true;
    }
}

fn step_towards(
    state: &mut GameState,
    result: &mut CommandResult,
    id: EntityId,
    target: Position,
) {
    let Some(position) = state.entity(id).map(|e| e.position) else {
        return;
    };
    let Some(next) = first_step_towards(&state.grid, position, target) else {
        return;
    };
    if !state.is_tile_free(next) {
        return;
    }
    // Narrated from the player's point of view, before the entity moves.
    if let Some(direction) = Direction::between(state.player.position, position) {
        result.push_line(format!("A hostile shuffles closer from the {direction}."));
    }
    let Some(index) = state.entities.iter().position(|e| e.id == id) else {
        return;
    };
    state.entities[index].position = next;
    let name = state.entities[index].name.clone();
    if let Some(line) = trigger_trap(
        &mut state.grid,
        &mut state.entities[index].statuses,
        next,
        &name,
    ) {
        result.push_line(line);
    }
}
