//! Canonical game state: the grid, the player and every live entity.

pub mod types;

pub use types::{
    AiState, Direction, EntityId, EntityState, Faction, Health, PlayerState, Position,
    StatusDescriptor, StatusEffects, StatusEntry, StatusKind, StatusTickEvent, StatusTickOutcome,
};

use crate::config::GameConfig;
use crate::grid::{Grid, MapBlueprint};

/// Full simulation state for one session.
///
/// Everything the turn engine reads or writes lives here; the engine itself
/// holds no hidden state, so serializing `GameState` captures the whole game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub grid: Grid,
    pub player: PlayerState,
    pub entities: Vec<EntityState>,
    pub turn: u64,
    pub game_over: bool,
    next_entity_id: u32,
}

impl GameState {
    /// Fresh state from a map blueprint, with the map's hostiles in place.
    pub fn from_blueprint(player_name: impl Into<String>, blueprint: &MapBlueprint) -> Self {
        let mut state = Self {
            grid: blueprint.grid.clone(),
            player: PlayerState::new(player_name, blueprint.player_spawn),
            entities: Vec::new(),
            turn: 0,
            game_over: false,
            next_entity_id: 0,
        };
        for &spawn in &blueprint.hostile_spawns {
            state.spawn_hostile(spawn);
        }
        state
    }

    /// Next entity id. Ids are never reused within a session.
    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    pub fn spawn_entity(
        &mut self,
        name: impl Into<String>,
        faction: Faction,
        position: Position,
        health: Health,
        attack: u32,
        ai_state: AiState,
    ) -> EntityId {
        let id = self.allocate_id();
        self.entities.push(EntityState {
            id,
            name: name.into(),
            faction,
            position,
            health,
            attack,
            aggro_range: GameConfig::DEFAULT_AGGRO_RANGE,
            ai_state,
            guard_post: None,
            statuses: StatusEffects::new(),
        });
        id
    }

    /// Standard hostile with default stats, already seeking the player.
    pub fn spawn_hostile(&mut self, position: Position) -> EntityId {
        self.spawn_entity(
            "hostile",
            Faction::Hostile,
            position,
            Health::full(GameConfig::HOSTILE_HP),
            GameConfig::HOSTILE_ATTACK,
            AiState::Attack,
        )
    }

    /// Skeleton raised by the summon command. Follows the player until
    /// ordered otherwise.
    pub fn spawn_summon(&mut self, position: Position) -> EntityId {
        self.spawn_entity(
            "skeleton",
            Faction::Friendly,
            position,
            Health::full(GameConfig::SKELETON_HP),
            GameConfig::SKELETON_ATTACK,
            AiState::FollowPlayer,
        )
    }

    pub fn entity(&self, id: EntityId) -> Option<&EntityState> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut EntityState> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Living entity occupying `position`, if any.
    pub fn living_entity_at(&self, position: Position) -> Option<&EntityState> {
        self.entities
            .iter()
            .find(|e| e.is_alive() && e.position == position)
    }

    pub fn living_entities(&self, faction: Faction) -> impl Iterator<Item = &EntityState> {
        self.entities
            .iter()
            .filter(move |e| e.is_alive() && e.faction == faction)
    }

    /// Walkable and unoccupied by the player or a living entity.
    pub fn is_tile_free(&self, position: Position) -> bool {
        self.grid.is_walkable(position)
            && self.player.position != position
            && self.living_entity_at(position).is_none()
    }

    pub fn remove_entity(&mut self, id: EntityId) {
        self.entities.retain(|e| e.id != id);
    }

    /// Drops dead entities of one faction. Run between AI passes so a corpse
    /// never acts.
    pub fn sweep_corpses(&mut self, faction: Faction) {
        self.entities
            .retain(|e| e.faction != faction || e.is_alive());
    }
}
