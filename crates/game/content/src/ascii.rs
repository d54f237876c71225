//! ASCII map format.
//!
//! One character per tile, rows top to bottom:
//!
//! ```text
//! #   wall              .   floor
//! +   door              @   floor, player spawn
//! o   floor, hostile    t   trap (fire or poison, from the map seed)
//! f   ignited fireplace
//! ```
//!
//! Space and any unrecognized character read as void. Short rows are padded
//! with void to the widest row.

use necro_core::{Grid, MapBlueprint, Position, StatusKind, TileFlags, TileKind};

use crate::rng::PcgRng;
use crate::ContentError;

/// Parses an ASCII map into a blueprint.
///
/// The `seed` fixes the kind of every `t` trap, so the same seed always
/// yields the same map.
pub fn parse_map(name: &str, text: &str, seed: u64) -> Result<MapBlueprint, ContentError> {
    let rows: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim_end().is_empty())
        .collect();
    if rows.is_empty() {
        return Err(ContentError::EmptyMap(name.to_string()));
    }
    let width = rows
        .iter()
        .map(|row| row.chars().count())
        .max()
        .unwrap_or(0) as u32;
    let height = rows.len() as u32;

    let mut grid = Grid::new(width, height);
    let mut player_spawn = None;
    let mut hostile_spawns = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let position = Position::new(x as i32, y as i32);
            match ch {
                '#' => grid.set_kind(position, TileKind::Wall),
                '.' => grid.set_kind(position, TileKind::Floor),
                '+' => grid.set_kind(position, TileKind::Door),
                '@' => {
                    grid.set_kind(position, TileKind::Floor);
                    player_spawn = Some(position);
                }
                'o' => {
                    grid.set_kind(position, TileKind::Floor);
                    hostile_spawns.push(position);
                }
                't' => {
                    let roll = PcgRng::next_u32(PcgRng::tile_seed(seed, position.x, position.y));
                    let kind = if roll % 2 == 0 {
                        StatusKind::OnFire
                    } else {
                        StatusKind::Poisoned
                    };
                    grid.set_kind(position, TileKind::Trap(kind));
                    if let Some(flag) = kind.tile_flag() {
                        grid.insert_flags(position, flag);
                    }
                }
                'f' => {
                    grid.set_kind(position, TileKind::Fireplace);
                    grid.insert_flags(position, TileFlags::IGNITED);
                }
                _ => {}
            }
        }
    }

    let player_spawn = player_spawn.ok_or_else(|| ContentError::MissingSpawn(name.to_string()))?;
    Ok(MapBlueprint {
        name: name.to_string(),
        grid,
        player_spawn,
        hostile_spawns,
    })
}
