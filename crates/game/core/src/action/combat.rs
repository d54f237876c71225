use crate::command::{ArgValue, AttackOutcome, CommandPayload, CommandResult};
use crate::state::{Direction, Faction, GameState};

#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    #[error("You swing {0}, but the notion of that direction escapes this realm.")]
    UnknownDirection(String),
    #[error("You strike {0} but hit nothing.")]
    NoTarget(Direction),
}

pub(crate) fn execute(
    state: &mut GameState,
    result: &mut CommandResult,
) -> Result<(), CombatError> {
    let raw = result
        .args
        .get("direction")
        .and_then(ArgValue::as_str)
        .unwrap_or_default();
    let direction: Direction = raw
        .parse()
        .map_err(|_| CombatError::UnknownDirection(raw.to_string()))?;

    let target_pos = state.player.position.step(direction);
    let Some(index) = state
        .entities
        .iter()
        .position(|e| e.is_alive() && e.faction == Faction::Hostile && e.position == target_pos)
    else {
        return Err(CombatError::NoTarget(direction));
    };

    let damage = state.player.attack;
    let entity = &mut state.entities[index];
    entity.health.apply_damage(damage);
    let target = entity.id;
    let killed = !entity.is_alive();

    if killed {
        state.entities.remove(index);
        result.push_line(format!(
            "You strike {direction} and your foe crumbles into dust."
        ));
    } else {
        result.push_line(format!("You deal a blow and hear a grunt {direction}."));
    }
    result.payload = CommandPayload::Attack(AttackOutcome {
        direction,
        target,
        killed,
    });
    Ok(())
}
