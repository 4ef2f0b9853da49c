//! Durable election state: the standing winner, the last election time,
//! and the epoch counter.

use rcv_types::{Epoch, Timestamp, VoterAddress};
use serde::{Deserialize, Serialize};

/// The committed outcome of the election cycle.
///
/// The winner starts as the deployer/administrator identity and the
/// deployment time seeds `last_election_at`, so the first real election
/// becomes due one full cooldown after deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionState {
    winner: VoterAddress,
    last_election_at: Timestamp,
    epoch: Epoch,
}

impl ElectionState {
    pub fn new(admin: VoterAddress, deployed_at: Timestamp) -> Self {
        Self {
            winner: admin,
            last_election_at: deployed_at,
            epoch: Epoch::ZERO,
        }
    }

    /// Whether an election may run at `now`: the cooldown must have
    /// strictly elapsed since the last one.
    pub fn is_due(&self, now: Timestamp, cooldown_secs: u64) -> bool {
        self.last_election_at
            .has_strictly_elapsed(cooldown_secs, now)
    }

    /// Commit a resolved winner: set the winner, stamp the election time,
    /// and advance the epoch. The three writes happen together — callers
    /// must have fully resolved before invoking this.
    pub fn commit(&mut self, winner: VoterAddress, now: Timestamp) {
        self.winner = winner;
        self.last_election_at = now;
        self.epoch = self.epoch.next();
    }

    pub fn winner(&self) -> VoterAddress {
        self.winner
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn last_election_at(&self) -> Timestamp {
        self.last_election_at
    }
}
