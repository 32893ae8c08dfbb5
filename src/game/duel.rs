//! Player-versus-player dice duels.
//!
//! A duel starts as a [`DuelChallenge`] awaiting the challenged party's
//! consent within a bounded window. Only the two parties may respond: "yes"
//! from the challenged accepts, "no" from either cancels, anything else is
//! ignored, and an expired challenge can no longer be accepted. Resolution
//! itself is two independent d20 rolls, higher wins.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::types::UserId;

/// Duel variants offered by the duel command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuelKind {
    Dice,
    DiceHardcore,
}

impl DuelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuelKind::Dice => "dice",
            DuelKind::DiceHardcore => "dice hardcore",
        }
    }
}

/// Uniform d20 roll, 1..=20 inclusive.
pub fn roll_d20<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=20)
}

/// Who won the roll-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelVerdict {
    ChallengerWins,
    TargetWins,
    Tie,
}

pub fn resolve(challenger_roll: u8, target_roll: u8) -> DuelVerdict {
    use std::cmp::Ordering::*;
    match challenger_roll.cmp(&target_roll) {
        Greater => DuelVerdict::ChallengerWins,
        Less => DuelVerdict::TargetWins,
        Equal => DuelVerdict::Tie,
    }
}

/// A pending consent prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuelChallenge {
    pub id: Uuid,
    pub kind: DuelKind,
    pub challenger: UserId,
    pub target: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// How a response (or the clock) settled a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentOutcome {
    Accepted,
    Declined,
    /// Response from a non-party, or a "yes" from the challenger; the
    /// challenge stays pending.
    Ignored,
    Expired,
}

impl DuelChallenge {
    pub fn new(
        kind: DuelKind,
        challenger: UserId,
        target: UserId,
        now: DateTime<Utc>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            challenger,
            target,
            created_at: now,
            expires_at: now + Duration::seconds(timeout_secs as i64),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn involves(&self, user: UserId) -> bool {
        user == self.challenger || user == self.target
    }

    /// Apply one response from `responder`.
    pub fn respond(&self, responder: UserId, accept: bool, now: DateTime<Utc>) -> ConsentOutcome {
        if self.is_expired(now) {
            return ConsentOutcome::Expired;
        }
        if !self.involves(responder) {
            return ConsentOutcome::Ignored;
        }
        if accept {
            if responder == self.target {
                ConsentOutcome::Accepted
            } else {
                ConsentOutcome::Ignored
            }
        } else {
            ConsentOutcome::Declined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn challenge(now: DateTime<Utc>) -> DuelChallenge {
        DuelChallenge::new(DuelKind::Dice, 10, 20, now, 180)
    }

    #[test]
    fn d20_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let roll = roll_d20(&mut rng);
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn verdicts() {
        assert_eq!(resolve(15, 7), DuelVerdict::ChallengerWins);
        assert_eq!(resolve(2, 19), DuelVerdict::TargetWins);
        assert_eq!(resolve(11, 11), DuelVerdict::Tie);
    }

    #[test]
    fn target_yes_accepts() {
        let now = Utc::now();
        assert_eq!(challenge(now).respond(20, true, now), ConsentOutcome::Accepted);
    }

    #[test]
    fn challenger_yes_is_ignored() {
        let now = Utc::now();
        assert_eq!(challenge(now).respond(10, true, now), ConsentOutcome::Ignored);
    }

    #[test]
    fn either_party_may_decline() {
        let now = Utc::now();
        assert_eq!(challenge(now).respond(10, false, now), ConsentOutcome::Declined);
        assert_eq!(challenge(now).respond(20, false, now), ConsentOutcome::Declined);
    }

    #[test]
    fn outsiders_are_ignored() {
        let now = Utc::now();
        assert_eq!(challenge(now).respond(99, true, now), ConsentOutcome::Ignored);
        assert_eq!(challenge(now).respond(99, false, now), ConsentOutcome::Ignored);
    }

    #[test]
    fn expiry_beats_consent() {
        let now = Utc::now();
        let c = challenge(now);
        let later = now + Duration::seconds(181);
        assert!(c.is_expired(later));
        assert_eq!(c.respond(20, true, later), ConsentOutcome::Expired);
    }
}
