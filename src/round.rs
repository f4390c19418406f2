//! Start-of-round reveal
//!
//! At the start of each battle round the players reveal the round's Misery
//! cards (the round quota plus anything owed by missions failed last round)
//! and the round's Secondary Missions. Spawn Rolls for the round use the
//! round modifier reported here.

use rand::Rng;
use serde::Serialize;

use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::{ensure_round, BattleRound, MiseryCardId, MissionId};
use crate::misery::{draw_misery_cards, misery_card_count, MiseryCard};
use crate::secondary::{self, SecondaryMission, SECONDARY_MISSIONS};
use crate::spawn::round_modifier;

/// Battle state read by the start-of-round reveal
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundContext<'a> {
    /// Misery cards currently in play
    pub active_misery_ids: &'a [MiseryCardId],
    /// Secondary Missions already revealed this battle
    pub active_mission_ids: &'a [MissionId],
    /// Misery cards owed by missions failed in the previous round
    pub pending_misery_cards: u32,
}

/// Everything revealed at the start of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStart {
    pub round: BattleRound,
    pub spawn_modifier: i32,
    /// Round quota plus pending cards
    pub misery_cards_requested: usize,
    pub misery_cards: Vec<&'static MiseryCard>,
    pub secondary_missions: Vec<&'static SecondaryMission>,
}

/// Run the start-of-round reveal
pub fn start_of_round<R: Rng + ?Sized>(
    config: &EngineConfig,
    round: BattleRound,
    context: &RoundContext<'_>,
    rng: &mut R,
) -> Result<RoundStart> {
    let round = ensure_round(round)?;
    let misery_cards_requested = misery_card_count(round) + context.pending_misery_cards as usize;

    let misery_cards = draw_misery_cards(misery_cards_requested, context.active_misery_ids, rng);
    let secondary_missions = secondary::draw_from_catalog(
        &SECONDARY_MISSIONS,
        config.secondary_missions_per_round,
        round,
        context.active_mission_ids,
        config.secondary_attempt_factor,
        rng,
    )?;

    tracing::info!(
        round,
        misery = misery_cards.len(),
        missions = secondary_missions.len(),
        "Battle round started"
    );

    Ok(RoundStart {
        round,
        spawn_modifier: round_modifier(round),
        misery_cards_requested,
        misery_cards,
        secondary_missions,
    })
}
