use thiserror::Error;

#[derive(Error, Debug)]
pub enum HordeError {
    #[error("Spawn table not found for faction: {0}")]
    UnknownFaction(String),

    #[error("Invalid battle round: {0} (rounds start at 1)")]
    InvalidRound(u32),

    #[error("Invalid spawn table for {faction}: {reason}")]
    InvalidSpawnTable { faction: String, reason: String },

    #[error("Secondary mission not found: {0}")]
    UnknownMission(u32),

    #[error("Secondary mission {mission} resolves at {timing:?}, not in this pass")]
    MissionTimingMismatch {
        mission: u32,
        timing: crate::secondary::ResolutionTiming,
    },

    #[error("Secondary mission already resolved: {0}")]
    MissionAlreadyResolved(u32),

    #[error("Misery card not found: {0}")]
    UnknownMiseryCard(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HordeError>;
