//! End-to-end turn flow: opening formation, layer ordering, memory capture.

use arena_marshal::arena::{in_arena_bounds, ArenaOccupancy, OccupancyFlags};
use arena_marshal::constants::HALF_ARENA;
use arena_marshal::layers::opening::{
    OPENING_DESTRUCTORS, OPENING_ENCRYPTOR, OPENING_FILTERS,
};
use arena_marshal::{
    Location, Player, ResourceKind, StaticTurnData, TurnController, TurnDataSource, UnitType,
};

const CONFIG: &str = r#"{
    "unitInformation": [
        { "shorthand": "FF", "cost": 1.0 },
        { "shorthand": "EF", "cost": 4.0 },
        { "shorthand": "DF", "cost": 6.0 },
        { "shorthand": "PI", "cost": 1.0 },
        { "shorthand": "EI", "cost": 3.0 },
        { "shorthand": "SI", "cost": 1.0 }
    ]
}"#;

fn controller() -> TurnController {
    TurnController::from_config_str(CONFIG, 1234).expect("valid config")
}

fn game_start_snapshot() -> StaticTurnData {
    StaticTurnData {
        turn_number: 0,
        bits: [5.0, 5.0],
        cores: [100.0, 100.0],
        health: [30, 30],
        ..Default::default()
    }
}

#[test]
fn opening_formation_leads_the_first_turn() {
    let mut controller = controller();
    let commands = controller.play_turn(&game_start_snapshot());

    let expected: Vec<(UnitType, Location)> = OPENING_FILTERS
        .iter()
        .map(|&c| (UnitType::Filter, Location::from(c)))
        .chain(
            OPENING_DESTRUCTORS
                .iter()
                .map(|&c| (UnitType::Destructor, Location::from(c))),
        )
        .chain(std::iter::once((
            UnitType::Encryptor,
            Location::from(OPENING_ENCRYPTOR),
        )))
        .collect();

    assert!(commands.len() >= expected.len());
    for (request, (unit_type, location)) in commands.requests.iter().zip(&expected) {
        assert_eq!(request.unit_type, *unit_type);
        assert_eq!(request.location, *location);
    }
    assert_eq!(commands.of_type(UnitType::Filter).count(), 6);
    assert_eq!(commands.of_type(UnitType::Encryptor).count(), 1);
}

#[test]
fn opening_formation_never_repeats() {
    let mut controller = controller();
    controller.play_turn(&game_start_snapshot());

    // A later turn with nothing to spend must produce no commands at all;
    // in particular no second copy of the opening formation.
    let broke = StaticTurnData {
        turn_number: 1,
        bits: [0.0, 5.0],
        cores: [0.0, 100.0],
        health: [30, 30],
        ..Default::default()
    };
    let commands = controller.play_turn(&broke);
    assert!(commands.is_empty());
}

#[test]
fn every_request_is_in_bounds_and_in_budget() {
    let mut controller = controller();
    let snapshot = game_start_snapshot();
    let commands = controller.play_turn(&snapshot);

    let mut bits_spent = 0.0;
    let mut cores_spent = 0.0;
    for request in &commands.requests {
        assert!(in_arena_bounds(request.location.x(), request.location.y()));
        match request.unit_type {
            UnitType::Filter => cores_spent += 1.0,
            UnitType::Encryptor => cores_spent += 4.0,
            UnitType::Destructor => cores_spent += 6.0,
            UnitType::Ping => bits_spent += 1.0,
            UnitType::Emp => bits_spent += 3.0,
            UnitType::Scrambler => bits_spent += 1.0,
        }
        if request.unit_type.is_stationary() {
            assert!(request.location.y() < HALF_ARENA);
        }
    }
    assert!(bits_spent <= snapshot.resource(ResourceKind::Bits, Player::Own));
    assert!(cores_spent <= snapshot.resource(ResourceKind::Cores, Player::Own));

    // No two stationary units share a cell.
    let stationary: Vec<Location> = commands
        .requests
        .iter()
        .filter(|request| request.unit_type.is_stationary())
        .map(|request| request.location)
        .collect();
    let mut deduped = stationary.clone();
    deduped.sort_by_key(|location| location.packed_repr());
    deduped.dedup();
    assert_eq!(stationary.len(), deduped.len());
}

#[test]
fn memory_records_the_turn_it_observed() {
    let mut controller = controller();

    let first = StaticTurnData {
        turn_number: 0,
        bits: [5.0, 6.5],
        cores: [20.0, 18.0],
        health: [30, 28],
        ..Default::default()
    };
    controller.play_turn(&first);

    let memory = controller.memory().expect("memory after first turn");
    assert_eq!(memory.own_bits, 5.0);
    assert_eq!(memory.enemy_bits, 6.5);
    assert_eq!(memory.own_cores, 20.0);
    assert_eq!(memory.enemy_cores, 18.0);
    assert_eq!(memory.own_health, 30);
    assert_eq!(memory.enemy_health, 28);

    // Whatever happens before the next play_turn call leaves memory alone.
    let _unplayed = StaticTurnData {
        turn_number: 1,
        bits: [9.0, 9.0],
        ..Default::default()
    };
    let memory = controller.memory().expect("memory unchanged");
    assert_eq!(memory.enemy_bits, 6.5);
}

#[test]
fn occupied_cells_are_respected_across_the_whole_turn() {
    let mut controller = controller();
    let mut occupancy = ArenaOccupancy::new();
    // Block one opening cell and one friendly edge cell.
    occupancy.insert(Location::from(OPENING_ENCRYPTOR), OccupancyFlags::STATIONARY);
    occupancy.insert(Location::from_xy(13, 0), OccupancyFlags::STATIONARY);

    let snapshot = StaticTurnData {
        turn_number: 0,
        bits: [5.0, 5.0],
        cores: [50.0, 50.0],
        health: [30, 30],
        occupancy,
    };
    let commands = controller.play_turn(&snapshot);
    assert!(commands
        .requests
        .iter()
        .all(|request| request.location != Location::from(OPENING_ENCRYPTOR)));
    assert!(commands
        .requests
        .iter()
        .all(|request| request.location != Location::from_xy(13, 0)));
}
