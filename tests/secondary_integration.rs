//! Integration tests for Secondary Mission draws and resolution passes

use std::cell::Cell;

use horde_companion::core::{HordeError, Language};
use horde_companion::secondary::{
    draw_secondary_missions, mission_resolution_timing, parse_misery_card_punishment,
    require_secondary_mission, ActiveMissionRecord, Outcome, ResolutionPass, ResolutionTiming,
    SECONDARY_MISSIONS,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_first_round_draws_only_valid_missions() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..200 {
        let drawn = draw_secondary_missions(3, 1, &[], &mut rng).unwrap();
        assert!(drawn.len() <= 3);
        for mission in drawn {
            assert!(
                ![11, 13, 14, 17, 18, 19].contains(&mission.id),
                "mission {} drawn in round 1",
                mission.id
            );
        }
    }
}

#[test]
fn test_later_rounds_can_draw_round_one_exclusions() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let valid: Vec<u32> = SECONDARY_MISSIONS
        .iter()
        .filter(|m| m.first_round_valid)
        .map(|m| m.id)
        .collect();

    let drawn = draw_secondary_missions(6, 2, &valid, &mut rng).unwrap();

    assert_eq!(drawn.len(), 6);
    assert!(drawn.iter().all(|m| !m.first_round_valid));
}

#[test]
fn test_only_invalid_missions_left_in_round_one() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let valid: Vec<u32> = SECONDARY_MISSIONS
        .iter()
        .filter(|m| m.first_round_valid)
        .map(|m| m.id)
        .collect();

    let drawn = draw_secondary_missions(2, 1, &valid, &mut rng).unwrap();

    assert!(drawn.is_empty());
}

#[test]
fn test_draw_excludes_and_never_repeats() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let exclude = [1, 2, 3, 4, 5];

    for _ in 0..100 {
        let drawn = draw_secondary_missions(4, 3, &exclude, &mut rng).unwrap();
        assert_eq!(drawn.len(), 4);
        let mut ids: Vec<u32> = drawn.iter().map(|m| m.id).collect();
        assert!(ids.iter().all(|id| !exclude.contains(id)));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}

#[test]
fn test_round_zero_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(matches!(
        draw_secondary_missions(1, 0, &[], &mut rng),
        Err(HordeError::InvalidRound(0))
    ));
}

#[test]
fn test_resolution_timing_lookup() {
    for mission in &SECONDARY_MISSIONS {
        let expected = if [4, 5, 15].contains(&mission.id) {
            ResolutionTiming::EndOfTurn
        } else {
            ResolutionTiming::EndOfRound
        };
        assert_eq!(mission_resolution_timing(mission.id), expected);
    }
    assert_eq!(mission_resolution_timing(999), ResolutionTiming::EndOfRound);
}

#[test]
fn test_punishment_texts_parse_the_same_in_both_languages() {
    for mission in &SECONDARY_MISSIONS {
        assert_eq!(
            parse_misery_card_punishment(mission.punishment(Language::En)),
            parse_misery_card_punishment(mission.punishment(Language::Pt)),
            "mission {}",
            mission.id
        );
    }
}

#[test]
fn test_end_of_round_pass_shares_one_draw() {
    let active: Vec<_> = [2, 4, 19]
        .into_iter()
        .map(|id| require_secondary_mission(id).unwrap())
        .collect();
    let mut pass = ResolutionPass::new(&active, ResolutionTiming::EndOfRound);

    // Mission 4 resolves at end of turn and is left out
    assert_eq!(pass.resolutions().len(), 2);
    assert!(matches!(
        pass.resolve(4, false),
        Err(HordeError::MissionTimingMismatch { mission: 4, .. })
    ));

    pass.resolve(2, false).unwrap();
    assert!(pass.settle_with(&[], |_, _| Vec::new()).is_none());
    pass.resolve(19, false).unwrap();

    let calls = Cell::new(0);
    let settlement = pass
        .settle_with(&[9, 10], |count, exclude| {
            calls.set(calls.get() + 1);
            assert_eq!(count, 3);
            assert_eq!(exclude, &[9, 10]);
            Vec::new()
        })
        .unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(settlement.failed_mission_ids, vec![2, 19]);
    assert!(settlement.completed_mission_ids.is_empty());
    assert_eq!(settlement.misery_cards_owed, 3);
}

#[test]
fn test_successful_pass_draws_nothing() {
    let active = [require_secondary_mission(1).unwrap()];
    let mut pass = ResolutionPass::new(&active, ResolutionTiming::EndOfRound);
    pass.resolve(1, true).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let settlement = pass.settle(&[], &mut rng).unwrap();

    assert_eq!(settlement.completed_mission_ids, vec![1]);
    assert_eq!(settlement.misery_cards_owed, 0);
    assert!(settlement.revealed.is_empty());
}

#[test]
fn test_settle_reveals_cards_outside_active_set() {
    let active = [require_secondary_mission(5).unwrap()];
    let mut pass = ResolutionPass::new(&active, ResolutionTiming::EndOfTurn);
    pass.resolve(5, false).unwrap();

    let in_play = [1, 2, 3];
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let settlement = pass.settle(&in_play, &mut rng).unwrap();

    assert_eq!(settlement.misery_cards_owed, 2);
    assert!(!settlement.deferred);
    assert!(settlement.revealed.len() >= 2);
    assert!(settlement.revealed.iter().all(|card| !in_play.contains(&card.id)));
}

#[test]
fn test_deferred_settlement_reveals_nothing() {
    let active = [require_secondary_mission(7).unwrap()];
    let mut pass = ResolutionPass::new(&active, ResolutionTiming::EndOfRound);
    pass.resolve(7, false).unwrap();

    let settlement = pass.settle_deferred().unwrap();

    assert_eq!(settlement.misery_cards_owed, 2);
    assert!(settlement.revealed.is_empty());
}

#[test]
fn test_records_survive_json() {
    let records = vec![
        ActiveMissionRecord::new(3),
        ActiveMissionRecord {
            mission_id: 8,
            status: Outcome::Succeeded,
        },
    ];
    let json = serde_json::to_string(&records).unwrap();
    let restored: Vec<ActiveMissionRecord> = serde_json::from_str(&json).unwrap();

    // Mission 8 is already settled and stays out of the new pass
    let pass = ResolutionPass::from_records(&restored, ResolutionTiming::EndOfRound).unwrap();
    let ids: Vec<u32> = pass.resolutions().iter().map(|r| r.mission.id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn test_end_of_turn_verdicts_written_back_without_losing_missions() {
    let records = vec![ActiveMissionRecord::new(4), ActiveMissionRecord::new(12)];
    let mut pass = ResolutionPass::from_records(&records, ResolutionTiming::EndOfTurn).unwrap();
    pass.resolve(4, true).unwrap();

    let merged = pass.merged_records(&records);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].status, Outcome::Succeeded);
    assert_eq!(merged[1], ActiveMissionRecord::new(12));
}

#[test]
fn test_end_of_round_failure_feeds_next_round_reveal() {
    use horde_companion::core::EngineConfig;
    use horde_companion::round::{start_of_round, RoundContext};

    let active = [require_secondary_mission(2).unwrap()];
    let mut pass = ResolutionPass::new(&active, ResolutionTiming::EndOfRound);
    pass.resolve(2, false).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let settlement = pass.settle(&[], &mut rng).unwrap();
    assert!(settlement.deferred);
    assert!(settlement.revealed.is_empty());

    let context = RoundContext {
        pending_misery_cards: settlement.misery_cards_owed,
        ..RoundContext::default()
    };
    let start = start_of_round(&EngineConfig::default(), 3, &context, &mut rng).unwrap();
    assert_eq!(start.misery_cards_requested, 3);
}

#[test]
fn test_wrong_timing_is_not_reported_as_unknown() {
    let active = [require_secondary_mission(4).unwrap()];
    let mut pass = ResolutionPass::new(&active, ResolutionTiming::EndOfRound);

    let err = pass.resolve(4, false).unwrap_err();

    assert!(matches!(err, HordeError::MissionTimingMismatch { mission: 4, .. }));
}
