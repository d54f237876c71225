//! Action execution: turns a parsed command into world mutation.
//!
//! Each family owns an error enum whose `Display` strings are the in-game
//! narration; the dispatcher folds errors into `success = false` results so
//! nothing ever escapes the core as a hard error.

pub mod combat;
pub mod movement;
pub mod orders;
pub mod pulse;
pub mod spells;
pub mod summon;
mod traps;

pub(crate) use traps::trigger as trigger_trap;

use std::fmt::Display;

use crate::command::{CommandKind, CommandResult};
use crate::state::GameState;

/// Executes a successfully parsed command against the world.
pub fn execute(state: &mut GameState, mut result: CommandResult) -> CommandResult {
    debug_assert!(result.success, "executing a failed parse");
    match result.kind {
        CommandKind::Move => fold(movement::execute(state, &mut result), &mut result),
        CommandKind::Attack => fold(combat::execute(state, &mut result), &mut result),
        CommandKind::Summon => fold(summon::execute(state, &mut result), &mut result),
        CommandKind::Cast => fold(spells::execute(state, &mut result), &mut result),
        CommandKind::Order => fold(orders::execute(state, &mut result), &mut result),
        CommandKind::Pulse => pulse::execute(state, &mut result),
        CommandKind::Wait => result.push_line("You wait, and the darkness waits with you."),
        CommandKind::Unknown => {
            result.success = false;
        }
    }
    result
}

fn fold<E: Display>(outcome: Result<(), E>, result: &mut CommandResult) {
    if let Err(error) = outcome {
        result.success = false;
        result.push_line(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse;
    use crate::grid::{Grid, MapBlueprint, TileKind};
    use crate::state::Position;

    fn open_state() -> GameState {
        let mut grid = Grid::new(3, 3);
        let all: Vec<Position> = grid.positions().collect();
        for pos in all {
            grid.set_kind(pos, TileKind::Floor);
        }
        let blueprint = MapBlueprint {
            name: "test".into(),
            grid,
            player_spawn: Position::new(1, 1),
            hostile_spawns: Vec::new(),
        };
        GameState::from_blueprint("Ares", &blueprint)
    }

    #[test]
    fn execution_failures_keep_their_narration() {
        let mut state = open_state();
        let result = execute(&mut state, parse("attack east"));
        assert!(!result.success);
        assert_eq!(result.description, "You strike east but hit nothing.");
    }

    #[test]
    fn waiting_always_succeeds() {
        let mut state = open_state();
        let result = execute(&mut state, parse("wait"));
        assert!(result.success);
        assert_eq!(result.description, "You wait, and the darkness waits with you.");
    }
}
