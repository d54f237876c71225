use super::common::{Health, Position};
use super::status::StatusEffects;
use crate::config::GameConfig;

/// Which side an entity fights for.
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
pub enum Faction {
    Hostile,
    Friendly,
}

/// Behaviour an entity runs during its AI pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiState {
    /// Stand still, act on nothing.
    Idle,
    /// Close in on the nearest enemy within aggro range and strike it.
    Attack,
    /// Step towards the player whenever not adjacent.
    FollowPlayer,
    /// Hold or return to a fixed post, fighting like `Attack` while there.
    Guard,
}

/// The player character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub name: String,
    pub position: Position,
    pub health: Health,
    pub attack: u32,
    pub statuses: StatusEffects,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            health: Health::full(GameConfig::PLAYER_HP),
            attack: GameConfig::PLAYER_ATTACK,
            statuses: StatusEffects::new(),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }
}

/// An AI-controlled entity, hostile or summoned.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityState {
    pub id: super::common::EntityId,
    pub name: String,
    pub faction: Faction,
    pub position: Position,
    pub health: Health,
    pub attack: u32,
    pub aggro_range: i32,
    pub ai_state: AiState,
    /// Post a guarding entity returns to. Snapshotted when the guard order
    /// is issued.
    pub guard_post: Option<Position>,
    pub statuses: StatusEffects,
}

impl EntityState {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }
}
