pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{HordeError, Result};
pub use types::{BattleRound, Language, MiseryCardId, MissionId};
