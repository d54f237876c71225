//! Turn orchestration.

use tracing::debug;

use crate::action;
use crate::command::{self, CommandResult};
use crate::state::GameState;
use crate::systems;

/// Drives one full turn through its fixed phases:
/// parse, execute, summoned AI, hostile AI, environment tick.
///
/// A failed parse or execution ends the turn immediately; the AI and
/// environment phases never run on a failed player action. Phases only ever
/// append narration and only ever set `game_over`, never clear it.
pub struct TurnEngine;

impl TurnEngine {
    /// Parses and executes the player's action without running the rest of
    /// the turn.
    pub fn apply_command(state: &mut GameState, input: &str) -> CommandResult {
        let parsed = command::parse(input);
        debug!(kind = %parsed.kind, success = parsed.success, "command parsed");
        if !parsed.success {
            return parsed;
        }
        action::execute(state, parsed)
    }

    /// Runs one complete turn.
    pub fn apply_turn(state: &mut GameState, input: &str) -> CommandResult {
        let mut result = Self::apply_command(state, input);
        if !result.success {
            debug!(kind = %result.kind, "player action failed, turn aborted");
            return result;
        }

        systems::summons::process_turn(state, &mut result);
        systems::hostile::process_turn(state, &mut result);
        systems::environment::tick(state, &mut result);

        state.turn += 1;
        if result.game_over {
            state.game_over = true;
        }
        debug!(turn = state.turn, game_over = state.game_over, "turn complete");
        result
    }
}
