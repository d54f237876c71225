use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::grid::TileFlags;

/// A condition an actor can suffer from.
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
pub enum StatusKind {
    OnFire,
    Poisoned,
    Wet,
}

impl StatusKind {
    pub const ALL: [StatusKind; 3] = [StatusKind::OnFire, StatusKind::Poisoned, StatusKind::Wet];

    /// Static per-kind tuning and narration table.
    pub fn descriptor(self) -> &'static StatusDescriptor {
        match self {
            StatusKind::OnFire => &StatusDescriptor {
                kind: StatusKind::OnFire,
                damage_per_turn: 1,
                duration: 3,
                player_tick: "Flames bite at your legs, heat searing your skin.",
                entity_tick: "A {entity} writhes in fire.",
                player_death: "You finally sink into the blaze, vision drowning in red.",
                entity_death: "A {entity} is consumed by the flames.",
                player_end: "The flames around you die out.",
                entity_end: "The flames consuming the {entity} die out.",
            },
            StatusKind::Poisoned => &StatusDescriptor {
                kind: StatusKind::Poisoned,
                damage_per_turn: 2,
                duration: 3,
                player_tick: "The poison courses through your veins, burning with acidic pain.",
                entity_tick: "A {entity} coughs violently, poisoned.",
                player_death: "The poison overwhelms you, and you collapse to the ground.",
                entity_death: "A {entity} succumbs to the poison and collapses.",
                player_end: "The poison's grip on you loosens, and you feel relief.",
                entity_end: "The {entity} looks healthier as the poison wears off.",
            },
            StatusKind::Wet => &StatusDescriptor {
                kind: StatusKind::Wet,
                damage_per_turn: 0,
                duration: 3,
                player_tick: "Cold water drips from your clothes.",
                entity_tick: "A {entity} shivers, soaked through.",
                player_death: "",
                entity_death: "",
                player_end: "Your clothes finally dry out.",
                entity_end: "The {entity} shakes itself dry.",
            },
        }
    }

    /// Tile flag that inflicts this condition on contact, if any.
    pub fn tile_flag(self) -> Option<TileFlags> {
        match self {
            StatusKind::OnFire => Some(TileFlags::IGNITED),
            StatusKind::Poisoned => Some(TileFlags::POISON),
            StatusKind::Wet => Some(TileFlags::WET),
        }
    }
}

/// Tuning values and narration strings for one status kind.
///
/// Entity-facing strings carry a `{entity}` placeholder substituted with the
/// entity's display name at narration time.
#[derive(Debug)]
pub struct StatusDescriptor {
    pub kind: StatusKind,
    pub damage_per_turn: u32,
    pub duration: u8,
    pub player_tick: &'static str,
    pub entity_tick: &'static str,
    pub player_death: &'static str,
    pub entity_death: &'static str,
    pub player_end: &'static str,
    pub entity_end: &'static str,
}

impl StatusDescriptor {
    /// Entity-facing string with the `{entity}` placeholder filled in.
    pub fn for_entity(template: &str, name: &str) -> String {
        template.replace("{entity}", name)
    }
}

/// One active condition on an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEntry {
    pub kind: StatusKind,
    pub remaining: u8,
}

/// What a single status produced during an environment tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTickOutcome {
    /// Damage (possibly zero) was applied and the actor survived.
    Ticked,
    /// Damage reduced the actor's health to zero this tick.
    Killed,
    /// The condition ran out after this tick.
    Expired,
}

/// One narration-worthy event from ticking an actor's statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusTickEvent {
    pub kind: StatusKind,
    pub outcome: StatusTickOutcome,
}

/// Fixed-capacity set of active conditions, at most one entry per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    entries: ArrayVec<StatusEntry, { GameConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inflicts `kind` with its default duration, resetting the remaining
    /// duration if already present.
    pub fn apply(&mut self, kind: StatusKind) {
        self.apply_with_duration(kind, kind.descriptor().duration);
    }

    /// Inflicts `kind` for `duration` turns. Re-application sets the counter
    /// to exactly `duration`, never extending past it.
    pub fn apply_with_duration(&mut self, kind: StatusKind, duration: u8) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.kind == kind) {
            entry.remaining = duration;
            return;
        }
        // Capacity holds every kind, so the push cannot fail.
        let _ = self.entries.try_push(StatusEntry {
            kind,
            remaining: duration,
        });
    }

    /// Inflicts `kind` only when not already active. Repeated tile contact
    /// must not refresh an effect already burning down.
    pub fn apply_if_absent(&mut self, kind: StatusKind) {
        if !self.has(kind) {
            self.apply(kind);
        }
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    pub fn remaining(&self, kind: StatusKind) -> Option<u8> {
        self.entries.iter().find(|e| e.kind == kind).map(|e| e.remaining)
    }

    pub fn clear(&mut self, kind: StatusKind) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.kind != kind);
        self.entries.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter()
    }

    /// Advances every active condition by one turn against `health`.
    ///
    /// Per entry: apply the per-turn damage while the actor is alive, emit a
    /// `Killed` or `Ticked` event, then decrement the counter and emit
    /// `Expired` when it reaches zero. Entries that were already at zero are
    /// dropped silently. A dead actor's remaining entries do not tick.
    pub fn tick(&mut self, health: &mut super::common::Health) -> Vec<StatusTickEvent> {
        let mut events = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            let entry = self.entries[index];
            if entry.remaining == 0 {
                self.entries.remove(index);
                continue;
            }
            if health.is_alive() {
                let descriptor = entry.kind.descriptor();
                if descriptor.damage_per_turn > 0 {
                    health.apply_damage(descriptor.damage_per_turn);
                }
                let outcome = if health.is_alive() {
                    StatusTickOutcome::Ticked
                } else {
                    StatusTickOutcome::Killed
                };
                events.push(StatusTickEvent {
                    kind: entry.kind,
                    outcome,
                });
            }
            let remaining = entry.remaining - 1;
            if remaining == 0 {
                // A death message already covers the effect ending.
                if health.is_alive() {
                    events.push(StatusTickEvent {
                        kind: entry.kind,
                        outcome: StatusTickOutcome::Expired,
                    });
                }
                self.entries.remove(index);
            } else {
                self.entries[index].remaining = remaining;
                index += 1;
            }
        }
        events
    }
}
