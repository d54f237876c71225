//! End-to-end turn scenarios against hosted sessions.

use necro_core::{
    AiState, CommandKind, Faction, Grid, Health, MapBlueprint, Position, StatusKind, TileFlags,
    TileKind,
};
use necro_runtime::{Session, SessionError};

fn open_blueprint(width: u32, height: u32, spawn: Position) -> MapBlueprint {
    let mut grid = Grid::new(width, height);
    let all: Vec<Position> = grid.positions().collect();
    for pos in all {
        grid.set_kind(pos, TileKind::Floor);
    }
    MapBlueprint {
        name: "arena".into(),
        grid,
        player_spawn: spawn,
        hostile_spawns: Vec::new(),
    }
}

fn open_session(width: u32, height: u32, spawn: Position) -> Session {
    Session::from_blueprint("Ares", &open_blueprint(width, height, spawn))
}

#[test]
fn hostile_closes_in_and_claws_over_successive_turns() {
    let mut session = open_session(9, 9, Position::new(4, 4));
    session.state_mut().spawn_hostile(Position::new(4, 7));

    let result = session.apply_turn("wait").unwrap();
    assert!(result
        .description
        .contains("A hostile shuffles closer from the south."));

    session.apply_turn("wait").unwrap();
    let result = session.apply_turn("wait").unwrap();
    assert!(result.description.contains("A hostile claws at you from the"));
    assert_eq!(session.state().player.health.current, 9);
}

#[test]
fn killing_the_last_hostile_with_an_adjacent_attack() {
    let mut session = open_session(5, 5, Position::new(2, 2));
    let id = session.state_mut().spawn_hostile(Position::new(2, 1));
    session.state_mut().entity_mut(id).unwrap().health = Health::new(1, 10);

    let result = session.apply_turn("attack north").unwrap();
    assert!(result.success);
    assert!(result.description.contains("crumbles into dust"));
    assert!(session.state().entity(id).is_none());
}

#[test]
fn a_trap_fires_exactly_once() {
    let mut session = open_session(5, 1, Position::new(0, 0));
    session
        .state_mut()
        .grid
        .set_kind(Position::new(1, 0), TileKind::Trap(StatusKind::Poisoned));

    let first = session.apply_turn("move east").unwrap();
    assert!(first
        .description
        .contains("A hidden poison trap is sprung beneath Ares!"));

    session.apply_turn("move east").unwrap();
    let third = session.apply_turn("move west").unwrap();
    assert!(!third.description.contains("A hidden poison trap"));
    assert_eq!(
        session.state().grid.kind_at(Position::new(1, 0)),
        TileKind::Floor
    );
}

#[test]
fn water_douses_a_lit_fireplace_and_nothing_else() {
    let mut session = Session::new("Ares", "fire_place_test", 0).unwrap();
    let north = session.state().player.position.offset(0, -1);

    let result = session.apply_turn("cast water north").unwrap();
    assert!(result
        .description
        .contains("Water splashes over the flames, extinguishing them."));
    assert!(!session
        .state()
        .grid
        .flags_at(north)
        .contains(TileFlags::IGNITED));

    let result = session.apply_turn("cast water south").unwrap();
    assert!(result
        .description
        .contains("Water splashes harmlessly onto the cold stone."));
}

#[test]
fn fire_then_water_round_trips_a_fireplace() {
    let mut session = open_session(5, 5, Position::new(2, 2));
    let east = Position::new(3, 2);

    let result = session.apply_turn("cast fire east").unwrap();
    assert!(result
        .description
        .contains("You cast a spell of fire towards east, igniting the fireplace."));
    assert_eq!(session.state().grid.kind_at(east), TileKind::Fireplace);

    session.apply_turn("cast water east").unwrap();
    assert!(!session
        .state()
        .grid
        .flags_at(east)
        .contains(TileFlags::IGNITED));
}

#[test]
fn boxed_in_summon_fails_without_spawning() {
    let blueprint = {
        let mut blueprint = open_blueprint(3, 3, Position::new(1, 1));
        for pos in [
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(0, 1),
            Position::new(2, 1),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(2, 2),
        ] {
            blueprint.grid.set_kind(pos, TileKind::Wall);
        }
        blueprint
    };
    let mut session = Session::from_blueprint("Ares", &blueprint);
    let result = session.apply_turn("summon skeleton").unwrap();
    assert!(!result.success);
    assert!(result.description.contains("no spirit can take form"));
    assert!(session.state().entities.is_empty());
}

#[test]
fn summoned_skeleton_fights_on_command() {
    let mut session = open_session(9, 9, Position::new(4, 4));
    let hostile = session.state_mut().spawn_hostile(Position::new(4, 2));
    session.state_mut().entity_mut(hostile).unwrap().health = Health::new(2, 10);

    let result = session.apply_turn("summon skeleton").unwrap();
    assert!(result.success);
    assert!(result.description.contains("to the north."));
    let ally = session
        .state()
        .living_entities(Faction::Friendly)
        .next()
        .unwrap()
        .id;
    assert_eq!(session.state().entity(ally).unwrap().position, Position::new(4, 3));

    // The skeleton stands adjacent to the wounded hostile; ordering the
    // attack lands a strike the same turn, and the kill on the next.
    let result = session.apply_turn("command all attack").unwrap();
    assert!(result
        .description
        .contains("Your summoned ally strikes at a foe."));
    let result = session.apply_turn("wait").unwrap();
    assert!(result
        .description
        .contains("Your summoned ally's foe crumbles into dust."));
    assert!(session.state().entity(hostile).is_none());
}

#[test]
fn orders_with_no_minions_abort_the_turn() {
    let mut session = open_session(9, 9, Position::new(4, 4));
    session.state_mut().spawn_hostile(Position::new(4, 8));
    let result = session.apply_turn("command all attack").unwrap();
    assert!(!result.success);
    assert!(result.description.contains("You have no minions to command."));
    // No AI phase ran: the hostile never moved.
    assert_eq!(
        session
            .state()
            .living_entities(Faction::Hostile)
            .next()
            .unwrap()
            .position,
        Position::new(4, 8)
    );
}

#[test]
fn guard_order_holds_a_minion_while_the_player_leaves() {
    let mut session = open_session(9, 9, Position::new(4, 4));
    let ally = session.state_mut().spawn_summon(Position::new(5, 4));

    session.apply_turn("command all guard").unwrap();
    assert_eq!(
        session.state().entity(ally).unwrap().ai_state,
        AiState::Guard
    );
    session.apply_turn("move west").unwrap();
    session.apply_turn("move west").unwrap();
    assert_eq!(
        session.state().entity(ally).unwrap().position,
        Position::new(5, 4)
    );
}

#[test]
fn pulse_is_idempotent_when_the_world_holds_still() {
    let mut session = Session::new("Ares", "map1", 0).unwrap();
    let first = session.apply_turn("pulse").unwrap();
    let second = session.apply_turn("pulse").unwrap();
    assert_eq!(first.description, second.description);
    assert!(first.description.starts_with("Your senses extend outward."));
}

#[test]
fn pulse_senses_the_crypt_fixtures() {
    let mut session = Session::new("Ares", "map1", 0).unwrap();
    let result = session.apply_turn("pulse").unwrap();
    assert_eq!(result.kind, CommandKind::Pulse);
    assert!(result.description.contains("You sense a door to the east"));
    assert!(result
        .description
        .contains("You sense the warmth of a fire to the north"));
    assert!(result.description.contains(" trap to the "));
}

#[test]
fn the_session_refuses_turns_after_game_over() {
    let mut session = open_session(5, 5, Position::new(2, 2));
    session.state_mut().player.health = Health::new(1, 10);
    session.state_mut().spawn_hostile(Position::new(3, 2));

    let result = session.apply_turn("wait").unwrap();
    assert!(result.game_over);
    assert!(session.is_game_over());
    assert!(matches!(
        session.apply_turn("wait"),
        Err(SessionError::GameOver)
    ));
}

#[test]
fn unknown_maps_are_reported() {
    assert!(matches!(
        Session::new("Ares", "catacombs", 0),
        Err(SessionError::Content(_))
    ));
}

#[test]
fn path_test_hostile_walks_the_ring() {
    let mut session = Session::new("Ares", "path_test", 0).unwrap();
    session.state_mut().spawn_hostile(Position::new(5, 5));

    // The block in the middle forces real pathfinding; within a handful of
    // turns the hostile reaches the player by walking the corridor.
    let mut clawed = false;
    for _ in 0..10 {
        if session.is_game_over() {
            break;
        }
        let result = session.apply_turn("wait").unwrap();
        if result.description.contains("A hostile claws at you") {
            clawed = true;
            break;
        }
    }
    assert!(clawed);
}
