//! Pending duel challenges.
//!
//! At most one open challenge per challenged player. Expired entries are
//! purged lazily on access; the registry never spawns timers, so the
//! timeout is enforced by timestamp comparison exactly like the cooldown
//! gate.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::game::duel::{ConsentOutcome, DuelChallenge, DuelKind};
use crate::game::types::UserId;

/// Why a new challenge could not be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeRejected {
    /// The challenged player already has an open prompt.
    TargetBusy,
}

/// In-memory registry of open consent prompts, keyed by challenged player.
#[derive(Debug, Default)]
pub struct DuelBoard {
    pending: HashMap<UserId, DuelChallenge>,
}

impl DuelBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn purge_expired(&mut self, now: DateTime<Utc>) {
        self.pending.retain(|_, c| !c.is_expired(now));
    }

    /// Open a new challenge.
    pub fn challenge(
        &mut self,
        kind: DuelKind,
        challenger: UserId,
        target: UserId,
        now: DateTime<Utc>,
        timeout_secs: u64,
    ) -> Result<DuelChallenge, ChallengeRejected> {
        self.purge_expired(now);
        if self.pending.contains_key(&target) {
            return Err(ChallengeRejected::TargetBusy);
        }
        let challenge = DuelChallenge::new(kind, challenger, target, now, timeout_secs);
        self.pending.insert(target, challenge.clone());
        Ok(challenge)
    }

    /// Route a yes/no from `responder` to the challenge involving them.
    /// Returns the challenge plus the consent outcome; `None` when there is
    /// no live challenge for this user. Settled challenges leave the board.
    pub fn respond(
        &mut self,
        responder: UserId,
        accept: bool,
        now: DateTime<Utc>,
    ) -> Option<(DuelChallenge, ConsentOutcome)> {
        self.purge_expired(now);
        let target_key = self
            .pending
            .iter()
            .find(|(_, c)| c.involves(responder))
            .map(|(k, _)| *k)?;
        let challenge = self.pending.get(&target_key)?.clone();
        let outcome = challenge.respond(responder, accept, now);
        match outcome {
            ConsentOutcome::Accepted | ConsentOutcome::Declined | ConsentOutcome::Expired => {
                self.pending.remove(&target_key);
            }
            ConsentOutcome::Ignored => {}
        }
        Some((challenge, outcome))
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
