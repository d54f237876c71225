use crate::command::{ArgValue, CastOutcome, CommandPayload, CommandResult, Element};
use crate::grid::{TileFlags, TileKind};
use crate::state::{Direction, GameState, StatusKind};

#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    #[error("The arcane forces reject your unknown element: {0}.")]
    UnknownElement(String),
    #[error("The arcane forces reject your unknown direction: {0}.")]
    UnknownDirection(String),
}

/// The cast target: a neighbouring tile or the caster.
enum SpellTarget {
    Tile(Direction),
    Caster,
}

pub(crate) fn execute(
    state: &mut GameState,
    result: &mut CommandResult,
) -> Result<(), SpellError> {
    let raw_element = result
        .args
        .get("element")
        .and_then(ArgValue::as_str)
        .unwrap_or_default();
    let element: Element = raw_element
        .parse()
        .map_err(|_| SpellError::UnknownElement(raw_element.to_string()))?;

    let raw_direction = result
        .args
        .get("direction")
        .and_then(ArgValue::as_str)
        .unwrap_or_default();
    let target = if raw_direction == "self" {
        SpellTarget::Caster
    } else {
        let direction: Direction = raw_direction
            .parse()
            .map_err(|_| SpellError::UnknownDirection(raw_direction.to_string()))?;
        SpellTarget::Tile(direction)
    };

    let affected = match element {
        Element::Water => cast_water(state, result, &target),
        Element::Fire => cast_fire(state, result, &target),
        // Known to the lexicon, but no rite answers it.
        Element::Poison => {
            result.push_line(format!(
                "You cast a spell of {element} towards {raw_direction}, but nothing happens."
            ));
            false
        }
    };
    result.payload = CommandPayload::Cast(CastOutcome { element, affected });
    Ok(())
}

/// Water quenches burning tiles and burning actors.
fn cast_water(state: &mut GameState, result: &mut CommandResult, target: &SpellTarget) -> bool {
    let mut extinguished = false;
    match target {
        SpellTarget::Caster => {
            extinguished = state.player.statuses.clear(StatusKind::OnFire);
        }
        SpellTarget::Tile(direction) => {
            let position = state.player.position.step(*direction);
            if state.grid.flags_at(position).contains(TileFlags::IGNITED) {
                state.grid.remove_flags(position, TileFlags::IGNITED);
                // A doused trap is a trap no longer.
                if matches!(state.grid.kind_at(position), TileKind::Trap(_)) {
                    state.grid.set_kind(position, TileKind::Floor);
                }
                extinguished = true;
            }
            let occupant = state.living_entity_at(position).map(|e| e.id);
            if let Some(id) = occupant {
                if let Some(entity) = state.entity_mut(id) {
                    extinguished |= entity.statuses.clear(StatusKind::OnFire);
                }
            }
        }
    }
    if extinguished {
        result.push_line("Water splashes over the flames, extinguishing them.");
    } else {
        result.push_line("Water splashes harmlessly onto the cold stone.");
    }
    extinguished
}

/// Fire lights fireplaces, or raises one from whatever tile it hits.
fn cast_fire(state: &mut GameState, result: &mut CommandResult, target: &SpellTarget) -> bool {
    let SpellTarget::Tile(direction) = target else {
        result.push_line("You cast a spell of fire towards yourself, but nothing happens.");
        return false;
    };
    let position = state.player.position.step(*direction);
    if state.grid.in_bounds(position) {
        state.grid.set_kind(position, TileKind::Fireplace);
        state.grid.insert_flags(position, TileFlags::IGNITED);
        result.push_line(format!(
            "You cast a spell of fire towards {direction}, igniting the fireplace."
        ));
        true
    } else {
        result.push_line(format!(
            "You cast a spell of fire towards {direction}, but nothing happens."
        ));
        false
    }
}
