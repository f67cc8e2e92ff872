//! Election engine - presidential succession.
//!
//! The sitting President opens an election, Executives nominate themselves,
//! any active member casts one vote by candidate index, and once the deadline
//! has passed the President closes it. The winner takes the presidency and the
//! outgoing President steps down to Executive, so exactly one President exists
//! before and after.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, StateMachine, Timestamp, ValidationError};
use crate::domain::governance::{GovernanceError, GovernanceEvent};
use crate::domain::membership::{MembershipRegistry, Role};

use super::{Candidate, Election, ElectionPhase, TieBreak};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionEngine {
    election: Election,
}

impl ElectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new election ending `duration_secs` after `now`.
    ///
    /// Clears the candidates and voters of any previous election.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` unless the caller is the active President
    /// - `InvalidState` if an election is already active
    /// - `Validation` if the end time is not representable
    pub fn start(
        &mut self,
        registry: &MembershipRegistry,
        caller: &MemberId,
        duration_secs: u64,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        registry.require_role(caller, Role::President, "start an election")?;

        if self.election.is_active() {
            return Err(GovernanceError::invalid_state(
                "start an election",
                "an election is already active",
            ));
        }
        let end_time = now.checked_plus_secs(duration_secs).ok_or_else(|| {
            ValidationError::invalid_format("duration", "election end time is not representable")
        })?;
        let phase = self.election.phase.transition_to(ElectionPhase::Active)?;

        self.election.reset(phase, end_time);

        Ok(GovernanceEvent::ElectionStarted {
            end_time,
            occurred_at: now,
        })
    }

    /// Nominates the caller as a candidate.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` unless the caller is an active Executive (the
    ///   President cannot stand)
    /// - `InvalidState` if no election is active
    /// - `AlreadyExists` if the caller is already nominated
    pub fn nominate(
        &mut self,
        registry: &MembershipRegistry,
        caller: &MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        registry.require_role(caller, Role::Executive, "nominate for election")?;

        if !self.election.is_active() {
            return Err(GovernanceError::invalid_state(
                "nominate for election",
                "no election is active",
            ));
        }
        if self.election.is_candidate(caller) {
            return Err(GovernanceError::already_exists("candidate", caller));
        }

        self.election.nominate(caller.clone());

        Ok(GovernanceEvent::CandidateNominated {
            candidate: caller.clone(),
            occurred_at: now,
        })
    }

    /// Casts the caller's vote for the candidate at `candidate_index`.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller is not an active member
    /// - `InvalidState` if no election is active
    /// - `NotFound` if the index is out of bounds
    /// - `AlreadyExists` if the caller already voted in this election
    pub fn vote(
        &mut self,
        registry: &MembershipRegistry,
        caller: &MemberId,
        candidate_index: usize,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        registry.require_active(caller, "vote in election")?;

        if !self.election.is_active() {
            return Err(GovernanceError::invalid_state(
                "vote in election",
                "no election is active",
            ));
        }
        if candidate_index >= self.election.candidates().len() {
            return Err(GovernanceError::not_found("candidate index", candidate_index));
        }
        if self.election.has_voted(caller) {
            return Err(GovernanceError::already_exists("election vote", caller));
        }

        self.election.record_vote(caller.clone(), candidate_index);

        Ok(GovernanceEvent::CandidateVoted {
            candidate_index,
            occurred_at: now,
        })
    }

    /// Closes the election once its deadline has passed and installs the winner.
    ///
    /// Only candidates that are still active Executives are eligible. With no
    /// eligible candidate the incumbent keeps office and is reported as the
    /// winner.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` unless the caller is the active President
    /// - `InvalidState` if no election is active or the deadline is pending
    pub fn end(
        &mut self,
        registry: &mut MembershipRegistry,
        caller: &MemberId,
        tie_break: TieBreak,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        registry.require_role(caller, Role::President, "end the election")?;

        if !self.election.is_active() {
            return Err(GovernanceError::invalid_state(
                "end the election",
                "no election is active",
            ));
        }
        if self.election.deadline_pending(now) {
            let end_time = self
                .election
                .end_time
                .map(|t| t.to_string())
                .unwrap_or_default();
            return Err(GovernanceError::invalid_state(
                "end the election",
                format!("voting is open until {}", end_time),
            ));
        }
        let phase = self.election.phase.transition_to(ElectionPhase::Inactive)?;

        let winner = match self.leading_candidate(registry, tie_break) {
            Some(winner) => {
                registry.transfer_presidency(&winner)?;
                winner
            }
            None => caller.clone(),
        };
        self.election.phase = phase;

        Ok(GovernanceEvent::ElectionEnded {
            winner,
            occurred_at: now,
        })
    }

    /// Nominated identities in nomination order.
    pub fn candidate_addresses(&self) -> Vec<MemberId> {
        self.election
            .candidates()
            .iter()
            .map(|c| c.identity.clone())
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.election.is_active()
    }

    pub fn election(&self) -> &Election {
        &self.election
    }

    fn leading_candidate(
        &self,
        registry: &MembershipRegistry,
        tie_break: TieBreak,
    ) -> Option<MemberId> {
        let eligible = self.election.candidates().iter().filter(|c| {
            registry
                .member_details(&c.identity)
                .is_ok_and(|m| m.holds(Role::Executive))
        });

        let mut leader: Option<&Candidate> = None;
        for candidate in eligible {
            leader = match leader {
                Some(current) if !tie_break.displaces(candidate.vote_count, current.vote_count) => {
                    Some(current)
                }
                _ => Some(candidate),
            };
        }
        leader.map(|c| c.identity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::promotion::PromotionWorkflow;

    const DAY: u64 = 86_400;

    fn id(s: &str) -> MemberId {
        MemberId::new(s).unwrap()
    }

    fn at(secs: i64) -> Timestamp {
        Timestamp::from_unix_secs(secs)
    }

    /// president + exec1, exec2 + member1..member3
    fn registry() -> MembershipRegistry {
        let mut registry = MembershipRegistry::founded_by(id("president"), Timestamp::epoch());
        let mut promotions = PromotionWorkflow::new();
        for name in ["exec1", "exec2", "member1", "member2", "member3"] {
            registry.add_member(id(name), at(0)).unwrap();
        }
        for name in ["exec1", "exec2"] {
            promotions.initiate(&registry, &id(name), at(0)).unwrap();
            promotions
                .approve(&mut registry, &id("president"), &id(name), 1, at(0))
                .unwrap();
        }
        registry
    }

    fn started(registry: &MembershipRegistry) -> ElectionEngine {
        let mut engine = ElectionEngine::new();
        engine.start(registry, &id("president"), DAY, at(0)).unwrap();
        engine
    }

    #[test]
    fn start_requires_president() {
        let registry = registry();
        let mut engine = ElectionEngine::new();

        let result = engine.start(&registry, &id("exec1"), DAY, at(0));

        assert!(matches!(result, Err(GovernanceError::Unauthorized { .. })));
        assert!(!engine.is_active());
    }

    #[test]
    fn start_emits_end_time() {
        let registry = registry();
        let mut engine = ElectionEngine::new();

        let event = engine.start(&registry, &id("president"), DAY, at(100)).unwrap();

        assert_eq!(
            event,
            GovernanceEvent::ElectionStarted {
                end_time: at(100 + DAY as i64),
                occurred_at: at(100),
            }
        );
        assert!(engine.is_active());
    }

    #[test]
    fn second_start_while_active_fails() {
        let registry = registry();
        let mut engine = started(&registry);

        let result = engine.start(&registry, &id("president"), DAY, at(1));
        assert!(matches!(result, Err(GovernanceError::InvalidState { .. })));
    }

    #[test]
    fn president_and_members_cannot_nominate() {
        let registry = registry();
        let mut engine = started(&registry);

        for name in ["president", "member1"] {
            let result = engine.nominate(&registry, &id(name), at(1));
            assert!(matches!(result, Err(GovernanceError::Unauthorized { .. })));
        }
        assert!(engine.candidate_addresses().is_empty());
    }

    #[test]
    fn nominate_requires_active_election() {
        let registry = registry();
        let mut engine = ElectionEngine::new();

        let result = engine.nominate(&registry, &id("exec1"), at(1));
        assert!(matches!(result, Err(GovernanceError::InvalidState { .. })));
    }

    #[test]
    fn duplicate_nomination_fails() {
        let registry = registry();
        let mut engine = started(&registry);
        engine.nominate(&registry, &id("exec1"), at(1)).unwrap();

        let result = engine.nominate(&registry, &id("exec1"), at(2));
        assert!(matches!(result, Err(GovernanceError::AlreadyExists { .. })));
        assert_eq!(engine.candidate_addresses(), vec![id("exec1")]);
    }

    #[test]
    fn vote_checks_index_then_duplicate() {
        let registry = registry();
        let mut engine = started(&registry);
        engine.nominate(&registry, &id("exec1"), at(1)).unwrap();

        let out_of_bounds = engine.vote(&registry, &id("member1"), 5, at(2));
        assert!(matches!(out_of_bounds, Err(GovernanceError::NotFound { .. })));

        let event = engine.vote(&registry, &id("member1"), 0, at(2)).unwrap();
        assert_eq!(
            event,
            GovernanceEvent::CandidateVoted {
                candidate_index: 0,
                occurred_at: at(2)
            }
        );

        let again = engine.vote(&registry, &id("member1"), 0, at(3));
        assert!(matches!(again, Err(GovernanceError::AlreadyExists { .. })));
        assert_eq!(engine.election().candidates()[0].vote_count, 1);
    }

    #[test]
    fn vote_without_election_is_invalid_state() {
        let registry = registry();
        let mut engine = ElectionEngine::new();

        let result = engine.vote(&registry, &id("member1"), 0, at(2));
        assert!(matches!(result, Err(GovernanceError::InvalidState { .. })));
    }

    #[test]
    fn end_before_deadline_fails_and_stays_active() {
        let mut registry = registry();
        let mut engine = started(&registry);

        let result = engine.end(&mut registry, &id("president"), TieBreak::default(), at(10));

        assert!(matches!(result, Err(GovernanceError::InvalidState { .. })));
        assert!(engine.is_active());
    }

    #[test]
    fn winner_becomes_president_and_incumbent_steps_down() {
        let mut registry = registry();
        let mut engine = started(&registry);
        engine.nominate(&registry, &id("exec1"), at(1)).unwrap();
        engine.nominate(&registry, &id("exec2"), at(1)).unwrap();
        for voter in ["member1", "member2", "member3"] {
            engine.vote(&registry, &id(voter), 1, at(2)).unwrap();
        }

        let event = engine
            .end(&mut registry, &id("president"), TieBreak::default(), at(DAY as i64 + 1))
            .unwrap();

        assert_eq!(
            event,
            GovernanceEvent::ElectionEnded {
                winner: id("exec2"),
                occurred_at: at(DAY as i64 + 1)
            }
        );
        assert_eq!(registry.member_details(&id("exec2")).unwrap().role, Role::President);
        assert_eq!(registry.member_details(&id("president")).unwrap().role, Role::Executive);
        assert!(!engine.is_active());
        assert_eq!(engine.candidate_addresses(), vec![id("exec1"), id("exec2")]);
    }

    #[test]
    fn tie_break_policy_decides_ties() {
        for (policy, expected) in [
            (TieBreak::FirstNominated, "exec1"),
            (TieBreak::LatestNominated, "exec2"),
        ] {
            let mut registry = registry();
            let mut engine = started(&registry);
            engine.nominate(&registry, &id("exec1"), at(1)).unwrap();
            engine.nominate(&registry, &id("exec2"), at(1)).unwrap();
            engine.vote(&registry, &id("member1"), 0, at(2)).unwrap();
            engine.vote(&registry, &id("member2"), 1, at(2)).unwrap();

            let event = engine
                .end(&mut registry, &id("president"), policy, at(DAY as i64))
                .unwrap();

            assert!(
                matches!(event, GovernanceEvent::ElectionEnded { ref winner, .. } if winner == &id(expected)),
                "policy {} produced {:?}",
                policy,
                event
            );
        }
    }

    #[test]
    fn removed_candidate_is_ineligible() {
        let mut registry = registry();
        let mut engine = started(&registry);
        engine.nominate(&registry, &id("exec1"), at(1)).unwrap();
        engine.nominate(&registry, &id("exec2"), at(1)).unwrap();
        engine.vote(&registry, &id("member1"), 1, at(2)).unwrap();
        registry
            .remove_member(&id("president"), &id("exec2"), at(3))
            .unwrap();

        let event = engine
            .end(&mut registry, &id("president"), TieBreak::default(), at(DAY as i64))
            .unwrap();

        assert!(matches!(event, GovernanceEvent::ElectionEnded { ref winner, .. } if winner == &id("exec1")));
    }

    #[test]
    fn no_candidates_keeps_incumbent() {
        let mut registry = registry();
        let mut engine = started(&registry);

        let event = engine
            .end(&mut registry, &id("president"), TieBreak::default(), at(DAY as i64))
            .unwrap();

        assert!(matches!(event, GovernanceEvent::ElectionEnded { ref winner, .. } if winner == &id("president")));
        assert_eq!(registry.president().map(|m| m.identity.clone()), Some(id("president")));
        assert!(!engine.is_active());
    }

    #[test]
    fn restart_clears_candidates_and_voters() {
        let mut registry = registry();
        let mut engine = started(&registry);
        engine.nominate(&registry, &id("exec1"), at(1)).unwrap();
        engine.vote(&registry, &id("member1"), 0, at(2)).unwrap();
        engine
            .end(&mut registry, &id("president"), TieBreak::default(), at(DAY as i64))
            .unwrap();

        // exec1 now presides
        engine
            .start(&registry, &id("exec1"), DAY, at(DAY as i64 + 1))
            .unwrap();

        assert!(engine.candidate_addresses().is_empty());
        assert!(!engine.election().has_voted(&id("member1")));
    }
}
