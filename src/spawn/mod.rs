//! Horde reinforcement spawning
//!
//! Spawn Rolls decide which enemy unit enters the battlefield for a faction,
//! battle round and stack of situational modifiers.

pub mod dice;
pub mod roll;
pub mod table;

pub use dice::{roll_two_dice, round_modifier, zones_for_points_limit};
pub use roll::{resolve_bracket, SpawnResult};
pub use table::{Bracket, BracketUnits, SpawnTable, SpawnTables, NO_SPAWN};
