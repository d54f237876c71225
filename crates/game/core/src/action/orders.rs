use super::traps;
use crate::command::{ArgValue, CommandPayload, CommandResult, OrderKind, OrderOutcome};
use crate::state::{AiState, Direction, EntityId, Faction, GameState};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("You have no minions to command.")]
    NoMinions,
    #[error("No minion answers to the name {0}.")]
    UnknownTarget(String),
    #[error("Your minions do not understand the order {0}.")]
    UnknownOrder(String),
    #[error("You point {0}, but the notion of that direction escapes this realm.")]
    UnknownDirection(String),
}

pub(crate) fn execute(
    state: &mut GameState,
    result: &mut CommandResult,
) -> Result<(), OrderError> {
    if state.living_entities(Faction::Friendly).next().is_none() {
        return Err(OrderError::NoMinions);
    }

    let raw_target = result
        .args
        .get("target")
        .and_then(ArgValue::as_str)
        .unwrap_or_default();
    let targets: Vec<EntityId> = state
        .living_entities(Faction::Friendly)
        .filter(|e| raw_target == "all" || e.name == raw_target)
        .map(|e| e.id)
        .collect();
    if targets.is_empty() {
        return Err(OrderError::UnknownTarget(raw_target.to_string()));
    }

    let raw_order = result
        .args
        .get("order")
        .and_then(ArgValue::as_str)
        .unwrap_or_default();
    let order: OrderKind = raw_order
        .parse()
        .map_err(|_| OrderError::UnknownOrder(raw_order.to_string()))?;

    let mut affected = 0u32;
    match order {
        OrderKind::Follow => {
            for id in &targets {
                if let Some(entity) = state.entity_mut(*id) {
                    entity.ai_state = AiState::FollowPlayer;
                    affected += 1;
                }
            }
        }
        OrderKind::Guard => {
            for id in &targets {
                if let Some(entity) = state.entity_mut(*id) {
                    entity.ai_state = AiState::Guard;
                    entity.guard_post = Some(entity.position);
                    affected += 1;
                }
            }
        }
        OrderKind::Attack => {
            for id in &targets {
                if let Some(entity) = state.entity_mut(*id) {
                    entity.ai_state = AiState::Attack;
                    affected += 1;
                }
            }
        }
        OrderKind::Move => {
            let raw_direction = result
                .args
                .get("direction")
                .and_then(ArgValue::as_str)
                .unwrap_or_default();
            let direction: Direction = raw_direction
                .parse()
                .map_err(|_| OrderError::UnknownDirection(raw_direction.to_string()))?;
            for id in &targets {
                let Some(index) = state.entities.iter().position(|e| e.id == *id) else {
                    continue;
                };
                let destination = state.entities[index].position.step(direction);
                if !state.is_tile_free(destination) {
                    continue;
                }
                state.entities[index].position = destination;
                let name = state.entities[index].name.clone();
                if let Some(line) = traps::trigger(
                    &mut state.grid,
                    &mut state.entities[index].statuses,
                    destination,
                    &name,
                ) {
                    result.push_line(line);
                }
                affected += 1;
            }
        }
    }

    result.push_line("Your minions heed your command.");
    result.payload = CommandPayload::Order(OrderOutcome { order, affected });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse;
    use crate::grid::{Grid, MapBlueprint, TileKind};
    use crate::state::Position;

    fn open_state() -> GameState {
        let mut grid = Grid::new(5, 5);
        let all: Vec<Position> = grid.positions().collect();
        for pos in all {
            grid.set_kind(pos, TileKind::Floor);
        }
        let blueprint = MapBlueprint {
            name: "test".into(),
            grid,
            player_spawn: Position::new(0, 2),
            hostile_spawns: Vec::new(),
        };
        GameState::from_blueprint("Ares", &blueprint)
    }

    #[test]
    fn no_minions_means_no_command() {
        let mut state = open_state();
        let mut result = parse("command all attack");
        let err = execute(&mut state, &mut result).unwrap_err();
        assert_eq!(err.to_string(), "You have no minions to command.");
    }

    #[test]
    fn guard_snapshots_the_post() {
        let mut state = open_state();
        let id = state.spawn_summon(Position::new(1, 2));
        let mut result = parse("command all guard");
        execute(&mut state, &mut result).unwrap();
        let entity = state.entity(id).unwrap();
        assert_eq!(entity.ai_state, AiState::Guard);
        assert_eq!(entity.guard_post, Some(Position::new(1, 2)));
    }

    #[test]
    fn orders_can_single_out_a_minion_by_name() {
        let mut state = open_state();
        let named = state.spawn_summon(Position::new(1, 2));
        state.entity_mut(named).unwrap().name = "skely".into();
        let other = state.spawn_summon(Position::new(2, 2));
        let mut result = parse("command skely attack");
        execute(&mut state, &mut result).unwrap();
        assert_eq!(state.entity(named).unwrap().ai_state, AiState::Attack);
        assert_eq!(state.entity(other).unwrap().ai_state, AiState::FollowPlayer);
    }

    #[test]
    fn unknown_name_and_order_are_rejected() {
        let mut state = open_state();
        state.spawn_summon(Position::new(1, 2));
        let mut result = parse("command minions attack");
        let err = execute(&mut state, &mut result).unwrap_err();
        assert_eq!(err.to_string(), "No minion answers to the name minions.");
        let mut result = parse("command all defend");
        let err = execute(&mut state, &mut result).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Your minions do not understand the order defend."
        );
    }

    #[test]
    fn move_order_relocates_and_springs_traps() {
        let mut state = open_state();
        let id = state.spawn_summon(Position::new(1, 2));
        state.entity_mut(id).unwrap().name = "skely".into();
        state
            .grid
            .set_kind(Position::new(2, 2), TileKind::Trap(crate::state::StatusKind::OnFire));
        let mut result = parse("command skely move east");
        execute(&mut state, &mut result).unwrap();
        let entity = state.entity(id).unwrap();
        assert_eq!(entity.position, Position::new(2, 2));
        assert!(entity.statuses.has(crate::state::StatusKind::OnFire));
        assert!(result
            .description
            .contains("A hidden fire trap erupts beneath skely!"));
    }
}
