//! Spawn Roll resolution
//!
//! One Spawn Roll is a single 2D6 roll: modifiers move it between brackets,
//! then one unit is picked at random from the faction's row for that
//! bracket. An unmodified 2 always means no spawn, whatever the modifiers.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::dice::{roll_two_dice, round_modifier};
use super::table::{Bracket, SpawnTable, SpawnTables};
use crate::core::error::Result;
use crate::core::types::{ensure_round, BattleRound};

/// Outcome of a single Spawn Roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnResult {
    /// Unmodified 2D6 total
    pub roll: i32,
    /// Roll after round and situational modifiers
    pub modified_roll: i32,
    pub bracket: Bracket,
    /// Every unit listed for the bracket (empty on "2")
    pub available_units: Vec<String>,
    pub selected_unit: Option<String>,
}

/// Bracket for a roll, honouring the unmodified-2 rule
pub fn resolve_bracket(raw_roll: i32, modified_roll: i32) -> Bracket {
    if raw_roll == 2 {
        Bracket::NoSpawn
    } else {
        Bracket::for_roll(modified_roll)
    }
}

impl SpawnTable {
    /// Resolve one Spawn Roll against this table
    ///
    /// `round` is assumed valid; [`SpawnTables::perform_spawn_roll`] checks it.
    pub fn resolve_spawn<R: Rng + ?Sized>(
        &self,
        round: BattleRound,
        extra_modifier: i32,
        rng: &mut R,
    ) -> SpawnResult {
        let roll = roll_two_dice(rng);
        let modified_roll = roll
            .saturating_add(round_modifier(round))
            .saturating_add(extra_modifier);
        let bracket = resolve_bracket(roll, modified_roll);

        let available_units = match bracket {
            Bracket::NoSpawn => Vec::new(),
            _ => self.units(bracket).to_vec(),
        };

        let selected_unit = if available_units.is_empty() {
            None
        } else {
            let index = rng.gen_range(0..available_units.len());
            Some(available_units[index].clone())
        };

        tracing::debug!(
            faction = %self.faction,
            roll,
            modified_roll,
            bracket = %bracket,
            selected = selected_unit.as_deref().unwrap_or("none"),
            "Spawn roll"
        );

        SpawnResult {
            roll,
            modified_roll,
            bracket,
            available_units,
            selected_unit,
        }
    }
}

impl SpawnTables {
    /// Perform a Spawn Roll for a faction
    ///
    /// Fails for unknown factions and for round 0.
    pub fn perform_spawn_roll<R: Rng + ?Sized>(
        &self,
        faction: &str,
        round: BattleRound,
        extra_modifier: i32,
        rng: &mut R,
    ) -> Result<SpawnResult> {
        let table = self.require(faction)?;
        let round = ensure_round(round)?;
        Ok(table.resolve_spawn(round, extra_modifier, rng))
    }

    /// Roll independently for every spawning zone
    pub fn spawn_for_all_zones<R: Rng + ?Sized>(
        &self,
        faction: &str,
        round: BattleRound,
        zones: usize,
        extra_modifier: i32,
        rng: &mut R,
    ) -> Result<Vec<SpawnResult>> {
        let table = self.require(faction)?;
        let round = ensure_round(round)?;
        Ok((0..zones)
            .map(|_| table.resolve_spawn(round, extra_modifier, rng))
            .collect())
    }
}
