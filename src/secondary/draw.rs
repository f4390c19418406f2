//! Secondary Mission draws
//!
//! Missions that make no sense in the first battle round are put back and
//! redrawn. Every pick, kept or put back, spends one attempt from a budget
//! of `count * attempt_factor`, so a draw always ends.

use rand::Rng;

use super::catalog::{SecondaryMission, SECONDARY_MISSIONS};
use crate::core::config::config;
use crate::core::error::Result;
use crate::core::types::{ensure_round, BattleRound, MissionId};

/// Draw Secondary Missions for a battle round
///
/// Returns fewer than `count` missions when the deck or the attempt budget
/// runs out. Fails only for round 0.
pub fn draw_secondary_missions<R: Rng + ?Sized>(
    count: usize,
    round: BattleRound,
    exclude_ids: &[MissionId],
    rng: &mut R,
) -> Result<Vec<&'static SecondaryMission>> {
    draw_from_catalog(
        &SECONDARY_MISSIONS,
        count,
        round,
        exclude_ids,
        config().secondary_attempt_factor,
        rng,
    )
}

/// Draw from an arbitrary mission list with an explicit attempt factor
pub fn draw_from_catalog<'a, R: Rng + ?Sized>(
    catalog: &'a [SecondaryMission],
    count: usize,
    round: BattleRound,
    exclude_ids: &[MissionId],
    attempt_factor: usize,
    rng: &mut R,
) -> Result<Vec<&'a SecondaryMission>> {
    let round = ensure_round(round)?;
    let mut deck: Vec<&'a SecondaryMission> = catalog
        .iter()
        .filter(|mission| !exclude_ids.contains(&mission.id))
        .collect();
    let mut drawn = Vec::with_capacity(count);
    let max_attempts = count.saturating_mul(attempt_factor);
    let mut attempts = 0;

    while drawn.len() < count && attempts < max_attempts && !deck.is_empty() {
        attempts += 1;
        let index = rng.gen_range(0..deck.len());

        if round == 1 && !deck[index].first_round_valid {
            tracing::trace!("Mission {} invalid in round 1, redrawing", deck[index].id);
            continue;
        }

        drawn.push(deck.remove(index));
    }

    if drawn.len() < count {
        tracing::warn!(
            "Drew {} of {} Secondary Missions after {} attempts",
            drawn.len(),
            count,
            attempts
        );
    }
    tracing::debug!(
        "Round {} Secondary Missions: {:?}",
        round,
        drawn.iter().map(|mission| mission.id).collect::<Vec<_>>()
    );

    Ok(drawn)
}
