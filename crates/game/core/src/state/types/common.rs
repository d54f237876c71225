use std::fmt;

/// Unique identifier for an AI-controlled entity.
///
/// Allocated by [`crate::GameState`] from a monotonic counter and never
/// reused within a session, so external references stay stable until the
/// entity is swept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// The y axis grows southward, matching the row order of the ASCII maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one tile away in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn chebyshev(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Adjacency in the eight-neighbour sense; a tile is not adjacent to itself.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev(other) == 1
    }
}

/// The eight compass directions.
///
/// `ALL` fixes the iteration order (N, NE, NW, E, W, SE, SW, S). That order
/// is load-bearing: it breaks ties in pathfinding, decides summon placement
/// and keeps narration deterministic. Never reorder it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Direction {
    North,
    NorthEast,
    NorthWest,
    East,
    West,
    SouthEast,
    SouthWest,
    South,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::East,
        Direction::West,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::South,
    ];

    /// Unit delta, north being negative y.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
        }
    }

    /// Direction matching a unit-normalized delta, or `None` when dx==dy==0.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        let delta = (dx.signum(), dy.signum());
        Direction::ALL.iter().copied().find(|d| d.delta() == delta)
    }

    /// Compass name of `to` as seen from `from`.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        Direction::from_delta(to.x - from.x, to.y - from.y)
    }
}

/// Bounded integer resource tracked per actor (health for now).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: u32,
    pub maximum: u32,
}

impl Health {
    /// Full meter at the given maximum.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn apply_damage(&mut self, damage: u32) {
        self.current = self.current.saturating_sub(damage);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current > 0
    }
}
