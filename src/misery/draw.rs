//! Misery card draws with cascade expansion
//!
//! A draw starts with a budget of cards to reveal. Every revealed card
//! spends one from the budget; cascade cards add their count back on top,
//! so one reveal event can grow past what was asked for. The draw stops
//! when the budget is spent or no eligible card is left in the deck.

use rand::Rng;

use super::catalog::{MiseryCard, MISERY_CARDS};
use crate::core::types::{BattleRound, MiseryCardId};

/// Misery cards revealed at the start of a battle round
///
/// None in round 1, one in rounds 2-4, three from round 5 onwards.
pub fn misery_card_count(round: BattleRound) -> usize {
    match round {
        0..=1 => 0,
        2..=4 => 1,
        _ => 3,
    }
}

/// Draw Misery cards from the full deck, skipping cards already active
pub fn draw_misery_cards<R: Rng + ?Sized>(
    base_count: usize,
    exclude_ids: &[MiseryCardId],
    rng: &mut R,
) -> Vec<&'static MiseryCard> {
    draw_from_catalog(&MISERY_CARDS, base_count, exclude_ids, rng)
}

/// Draw from an arbitrary card list
///
/// Cards are returned in draw order and never repeat. The result may be
/// longer than `base_count` (cascades) or shorter (deck exhausted).
pub fn draw_from_catalog<'a, R: Rng + ?Sized>(
    catalog: &'a [MiseryCard],
    base_count: usize,
    exclude_ids: &[MiseryCardId],
    rng: &mut R,
) -> Vec<&'a MiseryCard> {
    let mut deck: Vec<&'a MiseryCard> = catalog
        .iter()
        .filter(|card| !exclude_ids.contains(&card.id))
        .collect();
    let mut drawn = Vec::with_capacity(base_count.min(deck.len()));
    let mut remaining = base_count;

    while remaining > 0 && !deck.is_empty() {
        let index = rng.gen_range(0..deck.len());
        let card = deck.remove(index);
        drawn.push(card);
        remaining -= 1;

        if let Some(extra) = card.cascade_count {
            tracing::trace!("Misery card {} cascades into {} more", card.id, extra);
            remaining += extra as usize;
        }
    }

    if remaining > 0 {
        tracing::warn!(
            "Misery deck exhausted with {} cards still owed ({} drawn)",
            remaining,
            drawn.len()
        );
    }
    tracing::debug!(
        "Drew {} Misery cards (asked for {}): {:?}",
        drawn.len(),
        base_count,
        drawn.iter().map(|card| card.id).collect::<Vec<_>>()
    );

    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::misery::catalog::MiseryTag;
    use crate::core::types::Bilingual;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn plain_card(id: MiseryCardId) -> MiseryCard {
        MiseryCard {
            id,
            name: Bilingual::new("Plain", "Simples"),
            effect: Bilingual::new("Nothing", "Nada"),
            tags: &[MiseryTag::HordeBuff],
            cascade_count: None,
        }
    }

    fn cascade_card(id: MiseryCardId, count: u32) -> MiseryCard {
        MiseryCard {
            id,
            name: Bilingual::new("Cascade", "Cascata"),
            effect: Bilingual::new("Reveal more", "Revele mais"),
            tags: &[MiseryTag::Cascade],
            cascade_count: Some(count),
        }
    }

    #[test]
    fn test_round_policy() {
        assert_eq!(misery_card_count(0), 0);
        assert_eq!(misery_card_count(1), 0);
        assert_eq!(misery_card_count(2), 1);
        assert_eq!(misery_card_count(3), 1);
        assert_eq!(misery_card_count(4), 1);
        assert_eq!(misery_card_count(5), 3);
        assert_eq!(misery_card_count(9), 3);
    }

    #[test]
    fn test_zero_count_draws_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(draw_misery_cards(0, &[], &mut rng).is_empty());
    }

    #[test]
    fn test_plain_draw_count_exact() {
        let catalog: Vec<MiseryCard> = (1..=10).map(plain_card).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let drawn = draw_from_catalog(&catalog, 3, &[], &mut rng);
        assert_eq!(drawn.len(), 3);
        let ids: HashSet<MiseryCardId> = drawn.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_cascade_extends_draw() {
        // First-index picks: the cascade card comes first, then two more
        let catalog = vec![cascade_card(1, 2), plain_card(2), plain_card(3), plain_card(4)];
        let mut rng = StepRng::new(0, 0);
        let drawn = draw_from_catalog(&catalog, 1, &[], &mut rng);
        let ids: Vec<MiseryCardId> = drawn.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_cascade_stops_at_exhaustion() {
        let catalog = vec![cascade_card(1, 2), plain_card(2)];
        let mut rng = StepRng::new(0, 0);
        let drawn = draw_from_catalog(&catalog, 1, &[], &mut rng);
        assert_eq!(drawn.len(), 2);
    }

    #[test]
    fn test_exclusions_respected() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let exclude: Vec<MiseryCardId> = (1..=20).collect();
        for _ in 0..50 {
            let drawn = draw_misery_cards(3, &exclude, &mut rng);
            assert!(drawn.iter().all(|c| !exclude.contains(&c.id)));
        }
    }

    #[test]
    fn test_fully_excluded_deck_is_empty_draw() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let exclude: Vec<MiseryCardId> = (1..=32).collect();
        assert!(draw_misery_cards(5, &exclude, &mut rng).is_empty());
    }
}
