use crate::grid::{Grid, TileKind};
use crate::state::{Position, StatusEffects, StatusKind};

/// Springs the trap under an actor that just arrived on `position`, if any.
///
/// One-shot: the tile collapses to plain floor and its flags are wiped, so a
/// second visit finds nothing. Returns the discovery line for the narration.
pub(crate) fn trigger(
    grid: &mut Grid,
    statuses: &mut StatusEffects,
    position: Position,
    actor_name: &str,
) -> Option<String> {
    let TileKind::Trap(kind) = grid.kind_at(position) else {
        return None;
    };
    statuses.apply(kind);
    if let Some(tile) = grid.tile_mut(position) {
        tile.kind = TileKind::Floor;
        tile.flags = crate::grid::TileFlags::empty();
    }
    let line = match kind {
        StatusKind::OnFire => format!("A hidden fire trap erupts beneath {actor_name}!"),
        StatusKind::Poisoned => format!("A hidden poison trap is sprung beneath {actor_name}!"),
        StatusKind::Wet => format!("A hidden water trap drenches {actor_name}!"),
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileFlags;

    #[test]
    fn trap_springs_once_and_collapses() {
        let mut grid = Grid::new(1, 1);
        let pos = Position::ORIGIN;
        grid.set_kind(pos, TileKind::Trap(StatusKind::OnFire));
        grid.insert_flags(pos, TileFlags::IGNITED);
        let mut statuses = StatusEffects::new();

        let line = trigger(&mut grid, &mut statuses, pos, "Ares");
        assert_eq!(
            line.as_deref(),
            Some("A hidden fire trap erupts beneath Ares!")
        );
        assert!(statuses.has(StatusKind::OnFire));
        assert_eq!(grid.kind_at(pos), TileKind::Floor);
        assert!(grid.flags_at(pos).is_empty());

        let mut statuses = StatusEffects::new();
        assert_eq!(trigger(&mut grid, &mut statuses, pos, "Ares"), None);
        assert!(!statuses.has(StatusKind::OnFire));
    }
}
