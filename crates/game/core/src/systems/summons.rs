//! Per-turn decision procedure for summoned minions.

use crate::action::trigger_trap;
use crate::command::CommandResult;
use crate::path::first_step_towards;
use crate::state::{AiState, EntityId, Faction, GameState, Position};

/// Runs every living minion once, in storage order.
///
/// Followers trail the player, guards hold or retake their post and fight
/// from it, attackers hunt the nearest hostile in aggro range. Dead hostiles
/// are swept before returning.
pub fn process_turn(state: &mut GameState, result: &mut CommandResult) {
    let ids: Vec<EntityId> = state
        .entities
        .iter()
        .filter(|e| e.is_alive() && e.faction == Faction::Friendly)
        .map(|e| e.id)
        .collect();

    for id in ids {
        let Some(entity) = state.entity(id) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        match entity.ai_state {
            AiState::Idle => {}
            AiState::FollowPlayer => follow_player(state, result, id),
            AiState::Guard => {
                let post = entity.guard_post;
                let position = entity.position;
                match post {
                    Some(post) if post != position => {
                        if step_to(state, result, id, post) {
                            result.push_line("Your summoned ally returns to its post.");
                        }
                    }
                    _ => hunt_hostiles(state, result, id),
                }
            }
            AiState::Attack => hunt_hostiles(state, result, id),
        }
    }

    state.sweep_corpses(Faction::Hostile);
}

fn follow_player(state: &mut GameState, result: &mut CommandResult, id: EntityId) {
    let Some(position) = state.entity(id).map(|e| e.position) else {
        return;
    };
    if position.is_adjacent(state.player.position) {
        return;
    }
    if step_to(state, result, id, state.player.position) {
        result.push_line("Your summoned ally moves closer to you.");
    }
}

fn hunt_hostiles(state: &mut GameState, result: &mut CommandResult, id: EntityId) {
    let Some(entity) = state.entity(id) else {
        return;
    };
    let position = entity.position;
    let attack = entity.attack;
    let aggro = entity.aggro_range;

    let target = state
        .living_entities(Faction::Hostile)
        .map(|e| (e.id, position.manhattan(e.position), e.position))
        .min_by_key(|(_, distance, _)| *distance);
    let Some((target_id, distance, target_position)) = target else {
        // A soft failure: narrated, but the turn still counts as a success.
        result.push_line("Your summoned ally has no targets.");
        return;
    };
    if distance > aggro {
        result.push_line("Your summoned ally has no targets.");
        return;
    }

    if position.is_adjacent(target_position) {
        if let Some(target) = state.entity_mut(target_id) {
            target.health.apply_damage(attack);
            if target.is_alive() {
                result.push_line("Your summoned ally strikes at a foe.");
            } else {
                result.push_line("Your summoned ally's foe crumbles into dust.");
            }
        }
    } else if step_to(state, result, id, target_position) {
        result.push_line("Your summoned ally stalks a distant foe.");
    }
}

/// One pathfinder hop towards `target`; true when the minion actually moved.
fn step_to(
    state: &mut GameState,
    result: &mut CommandResult,
    id: EntityId,
    target: Position,
) -> bool {
    let Some(position) = state.entity(id).map(|e| e.position) else {
        return false;
    };
    let Some(next) = first_step_towards(&state.grid, position, target) else {
        return false;
    };
    if !state.is_tile_free(next) {
        return false;
    }
    let Some(index) = state.entities.iter().position(|e| e.id == id) else {
        return false;
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
    true
}
