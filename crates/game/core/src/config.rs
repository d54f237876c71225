/// Compile-time tuning constants for the simulation.
///
/// Collected in one place so collection bounds and default stats stay
/// consistent between the state types and the spawn helpers.
pub struct GameConfig;

impl GameConfig {
    /// Maximum simultaneous status effects per actor.
    pub const MAX_STATUS_EFFECTS: usize = 4;

    /// Radius used by `pulse` when the player gives none.
    pub const DEFAULT_PULSE_RADIUS: i64 = 10;

    /// Hard cap on the pulse radius; larger requests are clamped.
    pub const MAX_PULSE_RADIUS: u32 = 10;

    /// Player starting stats.
    pub const PLAYER_HP: u32 = 10;
    pub const PLAYER_ATTACK: u32 = 1;

    /// Default stats for hostiles spawned from map markers.
    pub const HOSTILE_HP: u32 = 10;
    pub const HOSTILE_ATTACK: u32 = 1;

    /// Manhattan radius inside which an AI entity acquires targets.
    pub const DEFAULT_AGGRO_RANGE: i32 = 10;

    /// Stats for the one summonable creature.
    pub const SKELETON_HP: u32 = 10;
    pub const SKELETON_ATTACK: u32 = 1;
}
