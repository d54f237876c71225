//! Text-to-command interpreter.
//!
//! Parsing is purely syntactic: it recognizes the verb and extracts raw
//! arguments into the bag, but never validates them against the world.
//! Whether "upward" names a real direction is the executor's problem.

use super::{ArgValue, CommandKind, CommandResult};
use crate::config::GameConfig;

/// Parses one line of player input.
///
/// Failures come back as `success = false` with flavor text and no other
/// effect; callers must not run the rest of the turn on a failed parse.
pub fn parse(input: &str) -> CommandResult {
    let mut tokens = input.split_whitespace();
    let Some(verb) = tokens.next() else {
        return CommandResult::failure(CommandKind::Unknown, "Your words have no meaning.");
    };

    match verb {
        "pulse" => {
            let mut result = CommandResult::new(CommandKind::Pulse);
            // A malformed radius falls back to the default, as if omitted.
            let radius = tokens
                .next()
                .and_then(|raw| raw.parse::<i64>().ok())
                .unwrap_or(GameConfig::DEFAULT_PULSE_RADIUS);
            result.args.insert("radius".into(), ArgValue::Int(radius));
            result.success = true;
            result
        }
        "move" => {
            let mut result = CommandResult::new(CommandKind::Move);
            let Some(direction) = tokens.next() else {
                result.description = "You make to move, but name no direction.".into();
                return result;
            };
            result
                .args
                .insert("direction".into(), ArgValue::Str(direction.into()));
            result.success = true;
            result
        }
        "attack" => {
            let mut result = CommandResult::new(CommandKind::Attack);
            let Some(direction) = tokens.next() else {
                result.description = "You lash out blindly at the darkness.".into();
                return result;
            };
            result
                .args
                .insert("direction".into(), ArgValue::Str(direction.into()));
            result.success = true;
            result
        }
        "summon" => {
            let mut result = CommandResult::new(CommandKind::Summon);
            let Some(creature) = tokens.next() else {
                result.description = "You call into the dark, but name no creature.".into();
                return result;
            };
            result
                .args
                .insert("creature".into(), ArgValue::Str(creature.into()));
            result.success = true;
            result
        }
        "cast" => {
            let mut result = CommandResult::new(CommandKind::Cast);
            let (Some(element), Some(direction)) = (tokens.next(), tokens.next()) else {
                result.description =
                    "You gesture at the darkness, but the spell needs an element and a direction."
                        .into();
                return result;
            };
            result
                .args
                .insert("element".into(), ArgValue::Str(element.into()));
            result
                .args
                .insert("direction".into(), ArgValue::Str(direction.into()));
            result.success = true;
            result
        }
        "command" => {
            let mut result = CommandResult::new(CommandKind::Order);
            let (Some(target), Some(order)) = (tokens.next(), tokens.next()) else {
                result.description = "Your minions await an order that never comes.".into();
                return result;
            };
            result
                .args
                .insert("target".into(), ArgValue::Str(target.into()));
            result.args.insert("order".into(), ArgValue::Str(order.into()));
            // The move order needs one more token, captured raw like the rest.
            if order == "move" {
                let Some(direction) = tokens.next() else {
                    result.description =
                        "You order a march, but name no direction.".into();
                    return result;
                };
                result
                    .args
                    .insert("direction".into(), ArgValue::Str(direction.into()));
            }
            result.success = true;
            result
        }
        "wait" => {
            let mut result = CommandResult::new(CommandKind::Wait);
            result.success = true;
            result
        }
        _ => CommandResult::failure(CommandKind::Unknown, format!("Unknown command: {verb}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_meaning() {
        let result = parse("   ");
        assert!(!result.success);
        assert_eq!(result.kind, CommandKind::Unknown);
        assert_eq!(result.description, "Your words have no meaning.");
    }

    #[test]
    fn unknown_verb_is_echoed() {
        let result = parse("pules 10");
        assert!(!result.success);
        assert_eq!(result.kind, CommandKind::Unknown);
        assert_eq!(result.description, "Unknown command: pules");
    }

    #[test]
    fn pulse_radius_defaults_when_missing_or_malformed() {
        let result = parse("pulse");
        assert!(result.success);
        assert_eq!(result.args["radius"], ArgValue::Int(10));
        let result = parse("pulse abc");
        assert_eq!(result.args["radius"], ArgValue::Int(10));
        let result = parse("pulse 5");
        assert_eq!(result.args["radius"], ArgValue::Int(5));
    }

    #[test]
    fn direction_tokens_are_not_validated_here() {
        let result = parse("move upward");
        assert!(result.success);
        assert_eq!(result.kind, CommandKind::Move);
        assert_eq!(result.args["direction"], ArgValue::Str("upward".into()));
    }

    #[test]
    fn attack_without_direction_fails_with_flavor() {
        let result = parse("attack");
        assert!(!result.success);
        assert_eq!(result.kind, CommandKind::Attack);
        assert_eq!(result.description, "You lash out blindly at the darkness.");
    }

    #[test]
    fn summon_requires_a_creature_token() {
        let result = parse("summon ");
        assert!(!result.success);
        assert_eq!(result.kind, CommandKind::Summon);
        let result = parse("summon dragon");
        assert!(result.success);
        assert_eq!(result.args["creature"], ArgValue::Str("dragon".into()));
    }

    #[test]
    fn order_extracts_target_and_order() {
        let result = parse("command all attack");
        assert!(result.success);
        assert_eq!(result.kind, CommandKind::Order);
        assert_eq!(result.args["target"], ArgValue::Str("all".into()));
        assert_eq!(result.args["order"], ArgValue::Str("attack".into()));
    }

    #[test]
    fn order_missing_order_fails() {
        let result = parse("command all");
        assert!(!result.success);
        assert_eq!(result.kind, CommandKind::Order);
    }

    #[test]
    fn move_order_needs_a_direction() {
        let result = parse("command skely move");
        assert!(!result.success);
        let result = parse("command skely move east");
        assert!(result.success);
        assert_eq!(result.args["direction"], ArgValue::Str("east".into()));
    }

    #[test]
    fn wait_passes_the_turn() {
        let result = parse("wait");
        assert!(result.success);
        assert_eq!(result.kind, CommandKind::Wait);
    }
}
