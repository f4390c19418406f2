//! Integration tests for Spawn Rolls against the built-in faction tables

use horde_companion::core::HordeError;
use horde_companion::spawn::{
    resolve_bracket, round_modifier, zones_for_points_limit, Bracket, SpawnTables, NO_SPAWN,
};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_same_seed_same_rolls() {
    let tables = SpawnTables::builtin().unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let first = tables
        .spawn_for_all_zones("Orks", 3, 4, 0, &mut rng)
        .unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let second = tables
        .spawn_for_all_zones("Orks", 3, 4, 0, &mut rng)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_every_faction_spawns_from_its_own_table() {
    let tables = SpawnTables::builtin().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for faction in tables.factions() {
        let table = tables.get(faction).unwrap();
        for round in 1..=6 {
            let result = tables
                .perform_spawn_roll(faction, round, 0, &mut rng)
                .unwrap();
            assert!((2..=12).contains(&result.roll));
            assert_eq!(result.modified_roll, result.roll + round_modifier(round));
            match &result.selected_unit {
                Some(unit) => {
                    assert_ne!(unit, NO_SPAWN);
                    assert!(table.units(result.bracket).contains(unit));
                }
                None => assert_eq!(result.bracket, Bracket::NoSpawn),
            }
        }
    }
}

#[test]
fn test_late_rounds_reach_ten_plus() {
    let tables = SpawnTables::builtin().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let mut saw_ten_plus = false;
    for _ in 0..200 {
        let result = tables
            .perform_spawn_roll("Tyranids", 8, 0, &mut rng)
            .unwrap();
        if result.roll > 2 {
            assert_ne!(result.bracket, Bracket::NoSpawn);
        }
        saw_ten_plus |= result.bracket == Bracket::TenPlus;
    }
    assert!(saw_ten_plus);
}

#[test]
fn test_double_one_ignores_modifiers() {
    let tables = SpawnTables::builtin().unwrap();
    let mut rng = StepRng::new(0, 0);

    let result = tables
        .perform_spawn_roll("Grey Knights", 10, 6, &mut rng)
        .unwrap();

    assert_eq!(result.roll, 2);
    assert_eq!(result.modified_roll, 11);
    assert_eq!(result.bracket, Bracket::NoSpawn);
    assert!(result.selected_unit.is_none());
}

#[test]
fn test_negative_modifier_drops_bracket() {
    assert_eq!(resolve_bracket(3, 1), Bracket::NoSpawn);
    assert_eq!(resolve_bracket(5, 4), Bracket::ThreeToFour);
    assert_eq!(resolve_bracket(9, 11), Bracket::TenPlus);
}

#[test]
fn test_points_limit_sets_zone_count() {
    let tables = SpawnTables::builtin().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let small = tables
        .spawn_for_all_zones("Necrons", 1, zones_for_points_limit(1000), 0, &mut rng)
        .unwrap();
    let large = tables
        .spawn_for_all_zones("Necrons", 1, zones_for_points_limit(2000), 0, &mut rng)
        .unwrap();

    assert_eq!(small.len(), 2);
    assert_eq!(large.len(), 4);
}

#[test]
fn test_unknown_faction_reports_name() {
    let tables = SpawnTables::builtin().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = tables
        .spawn_for_all_zones("Tau Empire", 1, 4, 0, &mut rng)
        .unwrap_err();

    assert!(matches!(err, HordeError::UnknownFaction(ref name) if name == "Tau Empire"));
    assert_eq!(err.to_string(), "Spawn table not found for faction: Tau Empire");
}

#[test]
fn test_spawn_result_json_shape() {
    let tables = SpawnTables::builtin().unwrap();
    let mut rng = StepRng::new(0, 0);
    let result = tables
        .perform_spawn_roll("Chaos Daemons", 1, 0, &mut rng)
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["roll"], 2);
    assert_eq!(json["modifiedRoll"], 2);
    assert_eq!(json["bracket"], "2");
    assert!(json["selectedUnit"].is_null());
}
