//! Tile grid and map blueprints.

use crate::state::{Position, StatusKind};

bitflags::bitflags! {
    /// Transient per-tile markers layered on top of the tile kind.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        /// The tile is burning; standing on it sets the actor on fire.
        const IGNITED = 1 << 0;
        /// The tile is coated in poison; standing on it poisons the actor.
        const POISON = 1 << 1;
        /// The tile is drenched; standing on it soaks the actor.
        const WET = 1 << 2;
    }
}

/// Static terrain of one tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    /// Void outside the carved dungeon. Not walkable.
    #[default]
    Empty,
    Floor,
    Wall,
    Door,
    /// Braziers the fire spell can ignite.
    Fireplace,
    /// Hidden one-shot trap; collapses to `Floor` once sprung.
    Trap(StatusKind),
}

impl TileKind {
    pub fn is_walkable(self) -> bool {
        matches!(
            self,
            TileKind::Floor | TileKind::Door | TileKind::Trap(_) | TileKind::Fireplace
        )
    }
}

/// One grid cell: terrain plus transient flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    pub flags: TileFlags,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            flags: TileFlags::empty(),
        }
    }
}

/// Rectangular tile grid in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Grid of the given dimensions, every tile `Empty`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn from_tiles(width: u32, height: u32, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| (position.y as usize) * (self.width as usize) + position.x as usize)
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index(position).map(move |i| &mut self.tiles[i])
    }

    /// Terrain at `position`; out-of-bounds reads as `Empty`.
    pub fn kind_at(&self, position: Position) -> TileKind {
        self.tile(position).map(|t| t.kind).unwrap_or_default()
    }

    pub fn flags_at(&self, position: Position) -> TileFlags {
        self.tile(position).map(|t| t.flags).unwrap_or_default()
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.kind_at(position).is_walkable()
    }

    pub fn set_kind(&mut self, position: Position, kind: TileKind) {
        if let Some(tile) = self.tile_mut(position) {
            tile.kind = kind;
        }
    }

    pub fn insert_flags(&mut self, position: Position, flags: TileFlags) {
        if let Some(tile) = self.tile_mut(position) {
            tile.flags.insert(flags);
        }
    }

    pub fn remove_flags(&mut self, position: Position, flags: TileFlags) {
        if let Some(tile) = self.tile_mut(position) {
            tile.flags.remove(flags);
        }
    }

    /// Iterates every in-bounds position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}

/// Everything needed to instantiate a fresh game state for one map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapBlueprint {
    pub name: String,
    pub grid: Grid,
    pub player_spawn: Position,
    /// Where the map seeds its initial hostiles.
    pub hostile_spawns: Vec<Position>,
}
