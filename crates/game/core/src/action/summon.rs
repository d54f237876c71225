use crate::command::{ArgValue, CommandPayload, CommandResult, SummonOutcome};
use crate::state::{Direction, GameState};

#[derive(Debug, thiserror::Error)]
pub enum SummonError {
    #[error("You know no rite that would bind a {0}.")]
    UnknownCreature(String),
    #[error("You call into the shadows, but no spirit can take form.")]
    NoRoom,
}

/// Places a skeleton on the first open compass cell, north first.
pub(crate) fn execute(
    state: &mut GameState,
    result: &mut CommandResult,
) -> Result<(), SummonError> {
    let creature = result
        .args
        .get("creature")
        .and_then(ArgValue::as_str)
        .unwrap_or_default();
    if creature != "skeleton" {
        return Err(SummonError::UnknownCreature(creature.to_string()));
    }

    for direction in Direction::ALL {
        let position = state.player.position.step(direction);
        if !state.is_tile_free(position) {
            continue;
        }
        let id = state.spawn_summon(position);
        result.push_line(format!(
            "You summon a loyal servant from the shadows to the {direction}."
        ));
        result.payload = CommandPayload::Summon(SummonOutcome {
            id,
            position,
            direction,
        });
        return Ok(());
    }
    Err(SummonError::NoRoom)
}
