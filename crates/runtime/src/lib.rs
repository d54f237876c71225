//! Session hosting for the simulation core.
//!
//! A [`Session`] owns one world exclusively: callers feed it one command
//! line per turn and receive the turn's [`CommandResult`]. Nothing is shared
//! between sessions, so hosts may run any number of them independently.

use tracing::{debug, info_span};

use necro_content::{ContentError, load_map};
use necro_core::{CommandResult, GameState, MapBlueprint, TurnEngine};

pub use necro_content::{DEFAULT_MAP, map_names};

/// Errors surfaced by the hosting layer.
///
/// In-game failures (bad directions, blocked moves) are not errors; they
/// come back as unsuccessful [`CommandResult`]s.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("the game is over")]
    GameOver,
}

/// One hosted game, from map load to game over.
pub struct Session {
    state: GameState,
}

impl Session {
    /// Opens a session on a built-in map. `DEFAULT_MAP` is the usual choice.
    pub fn new(player_name: &str, map_name: &str, seed: u64) -> Result<Self, SessionError> {
        let blueprint = load_map(map_name, seed)?;
        Ok(Self::from_blueprint(player_name, &blueprint))
    }

    /// Opens a session on the default map.
    pub fn start(player_name: &str) -> Result<Self, SessionError> {
        Self::new(player_name, DEFAULT_MAP, 0)
    }

    /// Opens a session on a caller-supplied blueprint.
    pub fn from_blueprint(player_name: &str, blueprint: &MapBlueprint) -> Self {
        debug!(map = %blueprint.name, player = player_name, "session opened");
        Self {
            state: GameState::from_blueprint(player_name, blueprint),
        }
    }

    /// Resumes a session from a previously captured state.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Runs one turn. Refuses further turns once the game is over.
    pub fn apply_turn(&mut self, input: &str) -> Result<CommandResult, SessionError> {
        if self.state.game_over {
            return Err(SessionError::GameOver);
        }
        let span = info_span!("turn", number = self.state.turn);
        let _guard = span.enter();
        Ok(TurnEngine::apply_turn(&mut self.state, input))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access to the world, for hosts that stage scenarios or edit
    /// state between turns.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }
}
