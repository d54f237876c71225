use super::traps;
use crate::command::{ArgValue, CommandPayload, CommandResult, MoveOutcome};
use crate::state::{Direction, GameState};

#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error("You turn {0}, but the notion of that direction escapes this realm.")]
    UnknownDirection(String),
    #[error("You bump into something unyielding in the dark.")]
    Blocked,
}

pub(crate) fn execute(state: &mut GameState, result: &mut CommandResult) -> Result<(), MoveError> {
    let raw = result
        .args
        .get("direction")
        .and_then(ArgValue::as_str)
        .unwrap_or_default();
    let direction: Direction = raw
        .parse()
        .map_err(|_| MoveError::UnknownDirection(raw.to_string()))?;

    let from = state.player.position;
    let to = from.step(direction);
    if !state.grid.is_walkable(to) || state.living_entity_at(to).is_some() {
        return Err(MoveError::Blocked);
    }

    state.player.position = to;
    result.push_line(format!("You move {direction}."));
    let name = state.player.name.clone();
    if let Some(line) = traps::trigger(&mut state.grid, &mut state.player.statuses, to, &name) {
        result.push_line(line);
    }
    result.payload = CommandPayload::Move(MoveOutcome {
        direction,
        from,
        to,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse;
    use crate::grid::{Grid, MapBlueprint, TileKind};
    use crate::state::{Position, StatusKind};

    fn open_state(width: u32, height: u32, spawn: Position) -> GameState {
        let mut grid = Grid::new(width, height);
        let all: Vec<Position> = grid.positions().collect();
        for pos in all {
            grid.set_kind(pos, TileKind::Floor);
        }
        let blueprint = MapBlueprint {
            name: "test".into(),
            grid,
            player_spawn: spawn,
            hostile_spawns: Vec::new(),
        };
        GameState::from_blueprint("Ares", &blueprint)
    }

    #[test]
    fn moving_relocates_and_narrates() {
        let mut state = open_state(3, 3, Position::new(1, 1));
        let mut result = parse("move north");
        execute(&mut state, &mut result).unwrap();
        assert_eq!(state.player.position, Position::new(1, 0));
        assert_eq!(result.description, "You move north.");
    }

    #[test]
    fn walls_and_bodies_block() {
        let mut state = open_state(3, 1, Position::new(1, 0));
        state.grid.set_kind(Position::new(0, 0), TileKind::Wall);
        state.spawn_hostile(Position::new(2, 0));
        let mut result = parse("move west");
        assert!(matches!(
            execute(&mut state, &mut result),
            Err(MoveError::Blocked)
        ));
        let mut result = parse("move east");
        assert!(matches!(
            execute(&mut state, &mut result),
            Err(MoveError::Blocked)
        ));
        assert_eq!(state.player.position, Position::new(1, 0));
    }

    #[test]
    fn unknown_direction_is_an_execution_failure() {
        let mut state = open_state(3, 3, Position::new(1, 1));
        let mut result = parse("move upward");
        let err = execute(&mut state, &mut result).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You turn upward, but the notion of that direction escapes this realm."
        );
    }

    #[test]
    fn stepping_onto_a_trap_springs_it() {
        let mut state = open_state(3, 1, Position::new(0, 0));
        state
            .grid
            .set_kind(Position::new(1, 0), TileKind::Trap(StatusKind::Poisoned));
        let mut result = parse("move east");
        execute(&mut state, &mut result).unwrap();
        assert!(state.player.statuses.has(StatusKind::Poisoned));
        assert!(result
            .description
            .contains("A hidden poison trap is sprung beneath Ares!"));
        assert_eq!(state.grid.kind_at(Position::new(1, 0)), TileKind::Floor);
    }
}
