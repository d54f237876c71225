//! Static game content: built-in maps and the ASCII map loader.
//!
//! Content is consumed once at session creation to build a
//! [`necro_core::MapBlueprint`]; nothing in this crate appears in live game
//! state afterwards.

pub mod ascii;
pub mod maps;
pub mod rng;

pub use ascii::parse_map;
pub use maps::{DEFAULT_MAP, load_map, map_names};
pub use rng::PcgRng;

/// Errors raised while resolving or parsing map content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("unknown map: {0}")]
    UnknownMap(String),
    #[error("map {0} has no player spawn marker")]
    MissingSpawn(String),
    #[error("map {0} is empty")]
    EmptyMap(String),
}
