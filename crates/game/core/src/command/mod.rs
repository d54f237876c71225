//! Command results and the text interpreter.

pub mod parse;

pub use parse::parse;

use std::collections::BTreeMap;

use crate::state::{Direction, EntityId, Position};

/// Recognized command verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
pub enum CommandKind {
    Unknown,
    Pulse,
    Move,
    Summon,
    Attack,
    Cast,
    Order,
    Wait,
}

/// Spell elements the caster's lexicon recognizes.
///
/// Poison is a known element without a handler; casting it narrates failure
/// instead of rejecting the word outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Element {
    Water,
    Fire,
    Poison,
}

/// Orders the player can issue to summoned minions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum OrderKind {
    Follow,
    Guard,
    Attack,
    Move,
}

/// Typed value in a command's argument bag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl ArgValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

/// Ordered argument bag; `BTreeMap` keeps iteration deterministic.
pub type ArgMap = BTreeMap<String, ArgValue>;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub direction: Direction,
    pub from: Position,
    pub to: Position,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub direction: Direction,
    pub target: EntityId,
    pub killed: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonOutcome {
    pub id: EntityId,
    pub position: Position,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastOutcome {
    pub element: Element,
    /// Whether the spell changed anything in the world.
    pub affected: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderOutcome {
    pub order: OrderKind,
    /// How many minions accepted the order.
    pub affected: u32,
}

/// One line of sensed detail plus the per-faction tallies.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PulseOutcome {
    pub radius: u32,
    pub hostiles: u32,
    pub friendlies: u32,
    pub traps: u32,
}

/// Structured result of the executed action, one variant per family.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandPayload {
    #[default]
    None,
    Move(MoveOutcome),
    Summon(SummonOutcome),
    Attack(AttackOutcome),
    Pulse(PulseOutcome),
    Cast(CastOutcome),
    Order(OrderOutcome),
}

/// The single record threaded through parse, execution, the AI passes and
/// the environment tick. Every phase appends narration; `game_over` is
/// sticky once set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandResult {
    pub kind: CommandKind,
    pub description: String,
    pub args: ArgMap,
    pub payload: CommandPayload,
    pub success: bool,
    pub game_over: bool,
}

impl CommandResult {
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            description: String::new(),
            args: ArgMap::new(),
            payload: CommandPayload::None,
            success: false,
            game_over: false,
        }
    }

    /// Failed result carrying only flavor text.
    pub fn failure(kind: CommandKind, description: impl Into<String>) -> Self {
        let mut result = Self::new(kind);
        result.description = description.into();
        result
    }

    /// Appends one narration line, newline-joined.
    pub fn push_line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if line.is_empty() {
            return;
        }
        if !self.description.is_empty() {
            self.description.push('\n');
        }
        self.description.push_str(line);
    }

    /// Marks the game as over. Never cleared once set.
    pub fn set_game_over(&mut self) {
        self.game_over = true;
    }
}
