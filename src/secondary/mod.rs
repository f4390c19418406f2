//! Secondary Missions: optional objectives revealed each battle round

pub mod catalog;
pub mod draw;
pub mod punishment;
pub mod resolution;

pub use catalog::{
    mission_resolution_timing, require_secondary_mission, secondary_mission_by_id,
    secondary_missions_by_tag, MissionTag, ResolutionTiming, SecondaryMission,
    SECONDARY_MISSIONS,
};
pub use draw::{draw_from_catalog, draw_secondary_missions};
pub use punishment::parse_misery_card_punishment;
pub use resolution::{
    ActiveMissionRecord, MissionResolution, Outcome, ResolutionPass, Settlement,
};
