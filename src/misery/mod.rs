//! Misery deck: negative events revealed during a battle

pub mod catalog;
pub mod draw;

pub use catalog::{
    misery_card_by_id, misery_cards_by_ids, misery_cards_by_tag, MiseryCard, MiseryTag,
    MISERY_CARDS,
};
pub use draw::{draw_from_catalog, draw_misery_cards, misery_card_count};
