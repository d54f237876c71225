//! Built-in maps.

use necro_core::MapBlueprint;

use crate::ascii::parse_map;
use crate::ContentError;

/// Map loaded when the caller names none.
pub const DEFAULT_MAP: &str = "map1";

/// The starting crypt. Two clear tiles north of the spawn, then a lit
/// fireplace; a door breaks the east wall and a trap hides to the south.
const MAP1: &str = "\
#########
#...f...#
#.......#
#.......#
#...@...+
#.......#
#..t....#
#########";

/// Ring corridor around a solid block, for exercising the pathfinder.
const PATH_TEST: &str = "\
#######
#@....#
#.###.#
#.#.#.#
#.###.#
#.....#
#######";

/// A lit fireplace directly north of the spawn.
const FIRE_PLACE_TEST: &str = "\
#####
#.f.#
#.@.#
#...#
#####";

/// Names of every built-in map.
pub fn map_names() -> [&'static str; 3] {
    [DEFAULT_MAP, "path_test", "fire_place_test"]
}

/// Resolves a built-in map by name.
pub fn load_map(name: &str, seed: u64) -> Result<MapBlueprint, ContentError> {
    let text = match name {
        "map1" => MAP1,
        "path_test" => PATH_TEST,
        "fire_place_test" => FIRE_PLACE_TEST,
        _ => return Err(ContentError::UnknownMap(name.to_string())),
    };
    parse_map(name, text, seed)
}
