//! Stateless per-turn systems, run by the engine after the player acts.

pub mod environment;
pub mod hostile;
pub mod summons;
