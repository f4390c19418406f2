//! Secondary Mission resolution
//!
//! At each resolution point (end of turn, end of round) the missions in
//! that timing bucket are judged by the players one by one. Once every
//! mission has a verdict the pass is settled: failed missions' Misery card
//! punishments are summed into a single shared draw. End-of-turn failures
//! reveal their cards at once; end-of-round failures carry the count into
//! the next round's reveal.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::{
    require_secondary_mission, secondary_mission_by_id, ResolutionTiming, SecondaryMission,
};
use super::punishment::parse_misery_card_punishment;
use crate::core::error::{HordeError, Result};
use crate::core::types::{Language, MiseryCardId, MissionId};
use crate::misery::{draw_misery_cards, MiseryCard};

/// Verdict on an active mission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    Unresolved,
    Succeeded,
    Failed,
}

impl Outcome {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// Persisted form of an active mission: id plus status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveMissionRecord {
    pub mission_id: MissionId,
    pub status: Outcome,
}

impl ActiveMissionRecord {
    pub fn new(mission_id: MissionId) -> Self {
        Self {
            mission_id,
            status: Outcome::Unresolved,
        }
    }
}

/// A mission paired with its verdict for the current pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionResolution {
    pub mission: &'static SecondaryMission,
    pub outcome: Outcome,
}

/// Result of settling a completed pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub completed_mission_ids: Vec<MissionId>,
    pub failed_mission_ids: Vec<MissionId>,
    /// Misery cards owed by all failed missions together
    pub misery_cards_owed: u32,
    /// Cards revealed for those punishments (empty when deferred)
    pub revealed: Vec<&'static MiseryCard>,
    /// True when the owed cards go to the next round's reveal
    pub deferred: bool,
}

/// One resolution pass over the missions of a timing bucket
#[derive(Debug, Clone)]
pub struct ResolutionPass {
    timing: ResolutionTiming,
    resolutions: Vec<MissionResolution>,
}

impl ResolutionPass {
    /// Start a pass over the active missions that resolve at `timing`
    pub fn new(active: &[&'static SecondaryMission], timing: ResolutionTiming) -> Self {
        let resolutions = active
            .iter()
            .filter(|mission| mission.timing == timing)
            .map(|&mission| MissionResolution {
                mission,
                outcome: Outcome::Unresolved,
            })
            .collect();
        Self {
            timing,
            resolutions,
        }
    }

    /// Start a pass from persisted records
    ///
    /// Only unresolved records take part; missions already judged in an
    /// earlier pass stay settled.
    pub fn from_records(records: &[ActiveMissionRecord], timing: ResolutionTiming) -> Result<Self> {
        let active = records
            .iter()
            .filter(|record| !record.status.is_resolved())
            .map(|record| require_secondary_mission(record.mission_id))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(&active, timing))
    }

    pub fn timing(&self) -> ResolutionTiming {
        self.timing
    }

    pub fn resolutions(&self) -> &[MissionResolution] {
        &self.resolutions
    }

    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }

    /// Record the players' verdict on a mission
    ///
    /// A verdict is final: judging the same mission twice is an error.
    pub fn resolve(&mut self, mission_id: MissionId, success: bool) -> Result<()> {
        let resolution = self
            .resolutions
            .iter_mut()
            .find(|r| r.mission.id == mission_id)
            .ok_or_else(|| match secondary_mission_by_id(mission_id) {
                Some(mission) => HordeError::MissionTimingMismatch {
                    mission: mission_id,
                    timing: mission.timing,
                },
                None => HordeError::UnknownMission(mission_id),
            })?;
        if resolution.outcome.is_resolved() {
            return Err(HordeError::MissionAlreadyResolved(mission_id));
        }
        resolution.outcome = if success {
            Outcome::Succeeded
        } else {
            Outcome::Failed
        };
        tracing::debug!(
            "Mission {} ({}) {:?}",
            mission_id,
            resolution.mission.name(Language::En),
            resolution.outcome
        );
        Ok(())
    }

    /// True once every mission in the pass has a verdict
    pub fn is_complete(&self) -> bool {
        self.resolutions.iter().all(|r| r.outcome.is_resolved())
    }

    /// Misery cards owed by the failed missions so far
    pub fn misery_cards_owed(&self) -> u32 {
        self.resolutions
            .iter()
            .filter(|r| r.outcome == Outcome::Failed)
            .map(|r| parse_misery_card_punishment(r.mission.punishment(Language::Pt)))
            .sum()
    }

    /// Records for the missions in this pass only
    pub fn records(&self) -> Vec<ActiveMissionRecord> {
        self.resolutions
            .iter()
            .map(|r| ActiveMissionRecord {
                mission_id: r.mission.id,
                status: r.outcome,
            })
            .collect()
    }

    /// Copy this pass's verdicts onto a full active-mission list
    ///
    /// Records outside the pass (other timing, or judged earlier) are
    /// returned unchanged and in their original order.
    pub fn merged_records(&self, records: &[ActiveMissionRecord]) -> Vec<ActiveMissionRecord> {
        records
            .iter()
            .map(|record| {
                match self
                    .resolutions
                    .iter()
                    .find(|r| r.mission.id == record.mission_id && r.outcome.is_resolved())
                {
                    Some(resolution) => ActiveMissionRecord {
                        mission_id: record.mission_id,
                        status: resolution.outcome,
                    },
                    None => *record,
                }
            })
            .collect()
    }

    /// Settle the pass the way its timing calls for
    ///
    /// End-of-turn passes reveal owed Misery cards now. End-of-round passes
    /// defer them to the next round. Returns None until every mission has a
    /// verdict.
    pub fn settle<R: Rng + ?Sized>(
        &self,
        active_misery_ids: &[MiseryCardId],
        rng: &mut R,
    ) -> Option<Settlement> {
        match self.timing {
            ResolutionTiming::EndOfTurn => self.settle_now(active_misery_ids, rng),
            ResolutionTiming::EndOfRound => self.settle_deferred(),
        }
    }

    /// Settle the pass revealing owed Misery cards immediately, whatever the timing
    pub fn settle_now<R: Rng + ?Sized>(
        &self,
        active_misery_ids: &[MiseryCardId],
        rng: &mut R,
    ) -> Option<Settlement> {
        self.settle_with(active_misery_ids, |count, exclude| {
            draw_misery_cards(count, exclude, rng)
        })
    }

    /// Settle the pass with a custom Misery draw
    ///
    /// `draw` is called at most once, with the combined count of every
    /// failed mission.
    pub fn settle_with<F>(&self, active_misery_ids: &[MiseryCardId], draw: F) -> Option<Settlement>
    where
        F: FnOnce(usize, &[MiseryCardId]) -> Vec<&'static MiseryCard>,
    {
        let mut settlement = self.settle_deferred()?;
        settlement.deferred = false;
        if settlement.misery_cards_owed > 0 {
            settlement.revealed = draw(settlement.misery_cards_owed as usize, active_misery_ids);
        }
        tracing::info!(
            "Revealed {} Misery cards for failed missions",
            settlement.revealed.len()
        );
        Some(settlement)
    }

    /// Settle the pass without drawing
    ///
    /// The owed count is carried into the next round's reveal instead.
    pub fn settle_deferred(&self) -> Option<Settlement> {
        if !self.is_complete() {
            return None;
        }

        let ids_with = |outcome: Outcome| -> Vec<MissionId> {
            self.resolutions
                .iter()
                .filter(|r| r.outcome == outcome)
                .map(|r| r.mission.id)
                .collect()
        };
        let settlement = Settlement {
            completed_mission_ids: ids_with(Outcome::Succeeded),
            failed_mission_ids: ids_with(Outcome::Failed),
            misery_cards_owed: self.misery_cards_owed(),
            revealed: Vec::new(),
            deferred: true,
        };

        tracing::info!(
            timing = ?self.timing,
            completed = settlement.completed_mission_ids.len(),
            failed = settlement.failed_mission_ids.len(),
            misery_owed = settlement.misery_cards_owed,
            "Secondary Missions settled"
        );
        Some(settlement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn missions(ids: &[MissionId]) -> Vec<&'static SecondaryMission> {
        ids.iter()
            .map(|&id| secondary_mission_by_id(id).unwrap())
            .collect()
    }

    #[test]
    fn test_pass_filters_by_timing() {
        let active = missions(&[1, 4, 5, 7]);
        let end_of_turn = ResolutionPass::new(&active, ResolutionTiming::EndOfTurn);
        let end_of_round = ResolutionPass::new(&active, ResolutionTiming::EndOfRound);
        let ids = |pass: &ResolutionPass| -> Vec<MissionId> {
            pass.resolutions().iter().map(|r| r.mission.id).collect()
        };
        assert_eq!(ids(&end_of_turn), vec![4, 5]);
        assert_eq!(ids(&end_of_round), vec![1, 7]);
    }

    #[test]
    fn test_settle_waits_for_every_verdict() {
        let mut pass = ResolutionPass::new(&missions(&[1, 2]), ResolutionTiming::EndOfRound);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        pass.resolve(1, false).unwrap();
        assert!(!pass.is_complete());
        assert!(pass.settle(&[], &mut rng).is_none());
        pass.resolve(2, true).unwrap();
        assert!(pass.is_complete());
        assert!(pass.settle(&[], &mut rng).is_some());
    }

    #[test]
    fn test_verdicts_are_final() {
        let mut pass = ResolutionPass::new(&missions(&[1]), ResolutionTiming::EndOfRound);
        pass.resolve(1, true).unwrap();
        assert!(matches!(
            pass.resolve(1, false),
            Err(HordeError::MissionAlreadyResolved(1))
        ));
        assert!(matches!(
            pass.resolve(42, false),
            Err(HordeError::UnknownMission(42))
        ));
    }

    #[test]
    fn test_mission_from_other_timing_reports_its_timing() {
        // Mission 4 is a real end-of-turn mission, absent from an end-of-round pass
        let mut pass = ResolutionPass::new(&missions(&[1, 4]), ResolutionTiming::EndOfRound);
        assert!(matches!(
            pass.resolve(4, false),
            Err(HordeError::MissionTimingMismatch {
                mission: 4,
                timing: ResolutionTiming::EndOfTurn
            })
        ));
        pass.resolve(1, false).unwrap();
        assert!(pass.is_complete());
    }

    #[test]
    fn test_failures_share_one_draw() {
        // Mission 19: "+1 Carta de Miséria", mission 2: "+2 Cartas de Miséria"
        let mut pass = ResolutionPass::new(&missions(&[19, 2]), ResolutionTiming::EndOfRound);
        pass.resolve(19, false).unwrap();
        pass.resolve(2, false).unwrap();

        let mut calls = Vec::new();
        let settlement = pass
            .settle_with(&[7], |count, exclude| {
                calls.push((count, exclude.to_vec()));
                Vec::new()
            })
            .unwrap();

        assert_eq!(calls, vec![(3, vec![7])]);
        assert_eq!(settlement.misery_cards_owed, 3);
        assert_eq!(settlement.failed_mission_ids, vec![19, 2]);
    }

    #[test]
    fn test_no_draw_without_misery_punishment() {
        // Mission 6 fails into a purchase-table restriction, mission 1 succeeds
        let mut pass = ResolutionPass::new(&missions(&[6, 1]), ResolutionTiming::EndOfRound);
        pass.resolve(6, false).unwrap();
        pass.resolve(1, true).unwrap();

        let mut called = false;
        let settlement = pass
            .settle_with(&[], |_, _| {
                called = true;
                Vec::new()
            })
            .unwrap();
        assert!(!called);
        assert_eq!(settlement.misery_cards_owed, 0);
        assert_eq!(settlement.completed_mission_ids, vec![1]);
    }

    #[test]
    fn test_end_of_turn_settle_reveals_now() {
        // Missions 5 and 15 resolve at end of turn, two cards each
        let mut pass = ResolutionPass::new(&missions(&[5, 15]), ResolutionTiming::EndOfTurn);
        pass.resolve(5, false).unwrap();
        pass.resolve(15, false).unwrap();
        let active: Vec<MiseryCardId> = (1..=10).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let settlement = pass.settle(&active, &mut rng).unwrap();
        assert_eq!(settlement.misery_cards_owed, 4);
        assert!(!settlement.deferred);
        assert!(settlement.revealed.len() >= 4);
        assert!(settlement.revealed.iter().all(|c| !active.contains(&c.id)));
    }

    #[test]
    fn test_end_of_round_settle_defers() {
        let mut pass = ResolutionPass::new(&missions(&[2, 7]), ResolutionTiming::EndOfRound);
        pass.resolve(2, false).unwrap();
        pass.resolve(7, false).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let settlement = pass.settle(&[], &mut rng).unwrap();
        assert_eq!(settlement.misery_cards_owed, 4);
        assert!(settlement.deferred);
        assert!(settlement.revealed.is_empty());
    }

    #[test]
    fn test_end_of_round_can_reveal_now() {
        let mut pass = ResolutionPass::new(&missions(&[2]), ResolutionTiming::EndOfRound);
        pass.resolve(2, false).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let settlement = pass.settle_now(&[], &mut rng).unwrap();
        assert!(!settlement.deferred);
        assert!(settlement.revealed.len() >= 2);
    }

    #[test]
    fn test_deferred_settlement_draws_nothing() {
        let mut pass = ResolutionPass::new(&missions(&[11]), ResolutionTiming::EndOfRound);
        pass.resolve(11, false).unwrap();
        let settlement = pass.settle_deferred().unwrap();
        assert_eq!(settlement.misery_cards_owed, 1);
        assert!(settlement.revealed.is_empty());
    }

    #[test]
    fn test_records_round_trip_through_json() {
        let records = vec![ActiveMissionRecord::new(4), ActiveMissionRecord::new(12)];
        let json = serde_json::to_string(&records).unwrap();
        assert_eq!(
            json,
            r#"[{"missionId":4,"status":"unresolved"},{"missionId":12,"status":"unresolved"}]"#
        );

        let mut pass = ResolutionPass::from_records(&records, ResolutionTiming::EndOfTurn).unwrap();
        pass.resolve(4, true).unwrap();
        let updated = pass.records();
        assert_eq!(updated, vec![ActiveMissionRecord { mission_id: 4, status: Outcome::Succeeded }]);
    }

    #[test]
    fn test_merged_records_keep_missions_outside_the_pass() {
        let records = vec![
            ActiveMissionRecord::new(4),
            ActiveMissionRecord::new(12),
            ActiveMissionRecord {
                mission_id: 5,
                status: Outcome::Failed,
            },
            ActiveMissionRecord::new(15),
        ];
        let mut pass = ResolutionPass::from_records(&records, ResolutionTiming::EndOfTurn).unwrap();
        pass.resolve(4, true).unwrap();

        let merged = pass.merged_records(&records);
        assert_eq!(
            merged,
            vec![
                ActiveMissionRecord {
                    mission_id: 4,
                    status: Outcome::Succeeded
                },
                ActiveMissionRecord::new(12),
                ActiveMissionRecord {
                    mission_id: 5,
                    status: Outcome::Failed
                },
                ActiveMissionRecord::new(15),
            ]
        );
    }

    #[test]
    fn test_from_records_rejects_unknown_ids() {
        let records = vec![ActiveMissionRecord::new(42)];
        assert!(matches!(
            ResolutionPass::from_records(&records, ResolutionTiming::EndOfRound),
            Err(HordeError::UnknownMission(42))
        ));
    }
}
