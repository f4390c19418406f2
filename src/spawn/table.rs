//! Faction spawn tables
//!
//! Each faction maps the five roll brackets to the units that can arrive
//! on that result. Tables are static reference data: loaded once from TOML,
//! validated, and never mutated afterwards.

use std::fmt;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{HordeError, Result};

/// Marker held by bracket "2" in every table
pub const NO_SPAWN: &str = "No Spawn";

const BUILTIN_TABLES: &str = include_str!("../../data/spawn_tables.toml");

/// Roll-result band used to pick a row of a spawn table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bracket {
    #[serde(rename = "2")]
    NoSpawn,
    #[serde(rename = "3-4")]
    ThreeToFour,
    #[serde(rename = "5-6")]
    FiveToSix,
    #[serde(rename = "7-9")]
    SevenToNine,
    #[serde(rename = "10+")]
    TenPlus,
}

impl Bracket {
    pub const ALL: [Bracket; 5] = [
        Bracket::NoSpawn,
        Bracket::ThreeToFour,
        Bracket::FiveToSix,
        Bracket::SevenToNine,
        Bracket::TenPlus,
    ];

    /// Map a (possibly modified) roll to its bracket
    ///
    /// Modified rolls can leave the 2-12 range in both directions: anything
    /// at or below 2 is "2", anything at or above 10 is "10+".
    pub fn for_roll(roll: i32) -> Self {
        match roll {
            i32::MIN..=2 => Self::NoSpawn,
            3..=4 => Self::ThreeToFour,
            5..=6 => Self::FiveToSix,
            7..=9 => Self::SevenToNine,
            _ => Self::TenPlus,
        }
    }

    /// Table key as written on the rules sheet
    pub fn key(&self) -> &'static str {
        match self {
            Self::NoSpawn => "2",
            Self::ThreeToFour => "3-4",
            Self::FiveToSix => "5-6",
            Self::SevenToNine => "7-9",
            Self::TenPlus => "10+",
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unit lists for the five brackets
///
/// Every key is required, so a table missing a bracket fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketUnits {
    #[serde(rename = "2")]
    pub no_spawn: Vec<String>,
    #[serde(rename = "3-4")]
    pub three_to_four: Vec<String>,
    #[serde(rename = "5-6")]
    pub five_to_six: Vec<String>,
    #[serde(rename = "7-9")]
    pub seven_to_nine: Vec<String>,
    #[serde(rename = "10+")]
    pub ten_plus: Vec<String>,
}

impl BracketUnits {
    pub fn get(&self, bracket: Bracket) -> &[String] {
        match bracket {
            Bracket::NoSpawn => &self.no_spawn,
            Bracket::ThreeToFour => &self.three_to_four,
            Bracket::FiveToSix => &self.five_to_six,
            Bracket::SevenToNine => &self.seven_to_nine,
            Bracket::TenPlus => &self.ten_plus,
        }
    }
}

/// Spawn table for one Horde faction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTable {
    #[serde(rename = "name")]
    pub faction: String,
    pub brackets: BracketUnits,
}

impl SpawnTable {
    /// Units listed for a bracket
    pub fn units(&self, bracket: Bracket) -> &[String] {
        self.brackets.get(bracket)
    }

    fn validate(&self) -> Result<()> {
        let no_spawn = &self.brackets.no_spawn;
        if no_spawn.len() > 1 || no_spawn.iter().any(|unit| unit != NO_SPAWN) {
            return Err(HordeError::InvalidSpawnTable {
                faction: self.faction.clone(),
                reason: format!("bracket \"2\" may only hold \"{}\"", NO_SPAWN),
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct SpawnTableFile {
    factions: Vec<SpawnTable>,
}

/// All known faction spawn tables, keyed by faction name
#[derive(Debug, Clone, Default)]
pub struct SpawnTables {
    tables: AHashMap<String, SpawnTable>,
}

impl SpawnTables {
    /// Tables shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_TABLES)
    }

    /// Load tables from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let tables = Self::from_toml_str(&contents)?;
        tracing::info!(
            "Loaded {} spawn tables from {}",
            tables.len(),
            path.display()
        );
        Ok(tables)
    }

    /// Tables from the configured file, or the built-in ones when none is set
    pub fn from_config(config: &crate::core::EngineConfig) -> Result<Self> {
        match &config.spawn_tables {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: SpawnTableFile = toml::from_str(contents)?;
        let mut tables = Self::default();
        for table in file.factions {
            tables.insert(table)?;
        }
        Ok(tables)
    }

    /// Add a table, rejecting duplicates and malformed "2" brackets
    pub fn insert(&mut self, table: SpawnTable) -> Result<()> {
        table.validate()?;
        if self.tables.contains_key(&table.faction) {
            return Err(HordeError::InvalidSpawnTable {
                faction: table.faction,
                reason: "faction defined twice".into(),
            });
        }
        self.tables.insert(table.faction.clone(), table);
        Ok(())
    }

    /// Spawn table for a faction, if one exists
    pub fn get(&self, faction: &str) -> Option<&SpawnTable> {
        self.tables.get(faction)
    }

    /// Spawn table for a faction, failing for unknown names
    pub fn require(&self, faction: &str) -> Result<&SpawnTable> {
        self.get(faction)
            .ok_or_else(|| HordeError::UnknownFaction(faction.to_string()))
    }

    /// Faction names in alphabetical order
    pub fn factions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
