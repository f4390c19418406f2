//! Core type definitions shared by the engines

use serde::{Deserialize, Serialize};

use crate::core::error::{HordeError, Result};

/// Catalog id of a Misery card (1-32)
pub type MiseryCardId = u32;

/// Catalog id of a Secondary Mission (1-20)
pub type MissionId = u32;

/// Battle round counter. Round 1 is the first round of a battle.
pub type BattleRound = u32;

/// Reject round 0 before it reaches any round-dependent rule.
pub fn ensure_round(round: BattleRound) -> Result<BattleRound> {
    if round == 0 {
        return Err(HordeError::InvalidRound(round));
    }
    Ok(round)
}

/// Language used for card and mission text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

/// A piece of text carried in both supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bilingual {
    pub en: &'static str,
    pub pt: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, pt: &'static str) -> Self {
        Self { en, pt }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Pt => self.pt,
        }
    }
}
