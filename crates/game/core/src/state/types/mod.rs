pub mod actor;
pub mod common;
pub mod status;

pub use actor::{AiState, EntityState, Faction, PlayerState};
pub use common::{Direction, EntityId, Health, Position};
pub use status::{
    StatusDescriptor, StatusEffects, StatusEntry, StatusKind, StatusTickEvent, StatusTickOutcome,
};
