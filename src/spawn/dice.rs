//! Spawn Roll dice and round-based escalation

use rand::Rng;

use crate::core::types::BattleRound;

/// Roll 2D6 for a Spawn Roll
pub fn roll_two_dice<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    let first: i32 = rng.gen_range(1..=6);
    let second: i32 = rng.gen_range(1..=6);
    first + second
}

/// Spawn Roll modifier for a battle round
///
/// Rounds 1-2 add nothing, rounds 3-4 add 1 and round 5 onwards adds 2.
/// Round 0 is not a real round; it gets no modifier.
pub fn round_modifier(round: BattleRound) -> i32 {
    match round {
        0..=2 => 0,
        3..=4 => 1,
        _ => 2,
    }
}

/// Number of spawning zones for a game size
///
/// A 1000 point game uses 2 zones. Every other size plays as the 2000 point
/// game with 4 zones, including sizes below 1000.
pub fn zones_for_points_limit(points_limit: u32) -> usize {
    if points_limit != 1000 && points_limit != 2000 {
        tracing::warn!(
            "Points limit {} is neither 1000 nor 2000; using 4 spawning zones",
            points_limit
        );
    }
    if points_limit == 1000 {
        2
    } else {
        4
    }
}
