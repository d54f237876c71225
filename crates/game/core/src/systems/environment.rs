//! End-of-turn environment pass: tile contact and status ticks.

use crate::command::CommandResult;
use crate::grid::Grid;
use crate::state::{
    GameState, Position, StatusDescriptor, StatusEffects, StatusKind, StatusTickOutcome,
};

/// Ticks the player first, then every living entity in storage order.
///
/// Each actor picks up statuses from the tile it stands on before its own
/// statuses tick, so stepping into flames burns the same turn. Entities
/// killed here linger as corpses until the next turn's AI sweeps.
pub fn tick(state: &mut GameState, result: &mut CommandResult) {
    tile_contact(&state.grid, state.player.position, &mut state.player.statuses);
    let events = state.player.statuses.tick(&mut state.player.health);
    for event in events {
        let descriptor = event.kind.descriptor();
        match event.outcome {
            StatusTickOutcome::Ticked => result.push_line(descriptor.player_tick),
            StatusTickOutcome::Killed => {
                result.push_line(descriptor.player_death);
                result.set_game_over();
                state.game_over = true;
            }
            StatusTickOutcome::Expired => result.push_line(descriptor.player_end),
        }
    }

    for index in 0..state.entities.len() {
        if !state.entities[index].is_alive() {
            continue;
        }
        let position = state.entities[index].position;
        tile_contact(&state.grid, position, &mut state.entities[index].statuses);
        let entity = &mut state.entities[index];
        let name = entity.name.clone();
        let events = entity.statuses.tick(&mut entity.health);
        for event in events {
            let descriptor = event.kind.descriptor();
            let template = match event.outcome {
                StatusTickOutcome::Ticked => descriptor.entity_tick,
                StatusTickOutcome::Killed => descriptor.entity_death,
                StatusTickOutcome::Expired => descriptor.entity_end,
            };
            result.push_line(StatusDescriptor::for_entity(template, &name));
        }
    }
}

/// Applies tile-borne statuses without refreshing ones already burning down.
fn tile_contact(grid: &Grid, position: Position, statuses: &mut StatusEffects) {
    let flags = grid.flags_at(position);
    for kind in StatusKind::ALL {
        if let Some(flag) = kind.tile_flag() {
            if flags.contains(flag) {
                statuses.apply_if_absent(kind);
            }
        }
    }
}
