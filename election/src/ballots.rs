//! Per-epoch ballot storage.

use crate::error::ElectionError;
use rcv_types::{Epoch, VoterAddress};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ranked ballots keyed by `(voter, epoch)`.
///
/// A new submission for the same key replaces the prior ballot in its
/// entirety; no history is kept within an epoch. Ballots of concluded
/// epochs stay in the map as immutable history — operations only ever
/// touch the current epoch's keys.
///
/// Content is deliberately unchecked beyond length: a ballot may rank the
/// same candidate twice and a voter may rank themself. Neither grants
/// extra weight at tally time (only the first surviving entry of a ballot
/// counts per round).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BallotStore {
    ballots: HashMap<(VoterAddress, Epoch), Vec<VoterAddress>>,
}

impl BallotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ranked` as `voter`'s ballot for `epoch`, replacing any prior
    /// ballot for that pair.
    ///
    /// Fails with `InvalidBallotLength` when the list ranks more than
    /// `max_candidates` entries.
    pub fn record(
        &mut self,
        voter: VoterAddress,
        epoch: Epoch,
        ranked: Vec<VoterAddress>,
        max_candidates: usize,
    ) -> Result<(), ElectionError> {
        if ranked.len() > max_candidates {
            return Err(ElectionError::InvalidBallotLength {
                len: ranked.len(),
                max: max_candidates,
            });
        }
        self.ballots.insert((voter, epoch), ranked);
        Ok(())
    }

    /// The stored ranking, or the empty slice when the voter never
    /// submitted a ballot for `epoch`.
    pub fn get(&self, voter: &VoterAddress, epoch: Epoch) -> &[VoterAddress] {
        self.ballots
            .get(&(*voter, epoch))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of ballots stored for an epoch.
    pub fn ballot_count(&self, epoch: Epoch) -> usize {
        self.ballots.keys().filter(|(_, e)| *e == epoch).count()
    }
}
