//! Election record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Timestamp};

use super::ElectionPhase;

/// A nominated Executive and their tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub identity: MemberId,
    pub vote_count: u32,
}

/// The singleton election record.
///
/// Candidates keep nomination order; voters are recorded so nobody votes
/// twice within one election. Both are cleared when the next election starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    pub phase: ElectionPhase,
    pub end_time: Option<Timestamp>,
    candidates: Vec<Candidate>,
    voters: BTreeSet<MemberId>,
}

impl Election {
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn is_candidate(&self, identity: &MemberId) -> bool {
        self.candidates.iter().any(|c| &c.identity == identity)
    }

    pub fn has_voted(&self, voter: &MemberId) -> bool {
        self.voters.contains(voter)
    }

    /// True while `now` is before the recorded end time.
    pub fn deadline_pending(&self, now: Timestamp) -> bool {
        self.end_time.is_some_and(|end| now < end)
    }

    pub(crate) fn reset(&mut self, phase: ElectionPhase, end_time: Timestamp) {
        self.phase = phase;
        self.end_time = Some(end_time);
        self.candidates.clear();
        self.voters.clear();
    }

    pub(crate) fn nominate(&mut self, identity: MemberId) {
        self.candidates.push(Candidate {
            identity,
            vote_count: 0,
        });
    }

    /// Records `voter` against the candidate at `index`. The caller has
    /// already checked the index is in bounds.
    pub(crate) fn record_vote(&mut self, voter: MemberId, index: usize) {
        if let Some(candidate) = self.candidates.get_mut(index) {
            candidate.vote_count += 1;
            self.voters.insert(voter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> MemberId {
        MemberId::new(s).unwrap()
    }

    #[test]
    fn reset_clears_previous_round() {
        let mut election = Election::default();
        election.reset(ElectionPhase::Active, Timestamp::from_unix_secs(10));
        election.nominate(id("exec"));
        election.record_vote(id("voter"), 0);

        election.reset(ElectionPhase::Active, Timestamp::from_unix_secs(20));

        assert!(election.candidates().is_empty());
        assert!(!election.has_voted(&id("voter")));
        assert_eq!(election.end_time, Some(Timestamp::from_unix_secs(20)));
    }

    #[test]
    fn deadline_pending_until_end_time() {
        let mut election = Election::default();
        assert!(!election.deadline_pending(Timestamp::from_unix_secs(0)));

        election.reset(ElectionPhase::Active, Timestamp::from_unix_secs(10));
        assert!(election.deadline_pending(Timestamp::from_unix_secs(9)));
        assert!(!election.deadline_pending(Timestamp::from_unix_secs(10)));
    }

    #[test]
    fn record_vote_increments_tally() {
        let mut election = Election::default();
        election.reset(ElectionPhase::Active, Timestamp::from_unix_secs(10));
        election.nominate(id("a"));
        election.nominate(id("b"));

        election.record_vote(id("v1"), 1);
        election.record_vote(id("v2"), 1);

        assert_eq!(election.candidates()[0].vote_count, 0);
        assert_eq!(election.candidates()[1].vote_count, 2);
        assert!(election.has_voted(&id("v1")));
    }
}
