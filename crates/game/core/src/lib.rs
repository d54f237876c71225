//! Deterministic simulation core for the dungeon.
//!
//! `necro-core` owns the canonical rules: the tile grid, pathfinding, the
//! status-effect engine, the command interpreter and executor, the per-turn
//! AI procedures and the turn orchestrator that sequences them. Everything
//! here is pure, single-threaded and synchronous; hosting layers (session
//! storage, transports, serialization) live in supporting crates and only
//! ever touch world state through [`engine::TurnEngine`].
pub mod action;
pub mod command;
pub mod config;
pub mod engine;
pub mod grid;
pub mod path;
pub mod state;
pub mod systems;

pub use command::{
    ArgMap, ArgValue, AttackOutcome, CastOutcome, CommandKind, CommandPayload, CommandResult,
    Element, MoveOutcome, OrderKind, OrderOutcome, PulseOutcome, SummonOutcome,
};
pub use config::GameConfig;
pub use engine::TurnEngine;
pub use grid::{Grid, MapBlueprint, TileFlags, TileKind};
pub use state::{
    AiState, Direction, EntityId, EntityState, Faction, GameState, Health, PlayerState, Position,
    StatusDescriptor, StatusEffects, StatusKind,
};
