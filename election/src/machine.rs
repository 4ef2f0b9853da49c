//! The election machine — the operation surface callers invoke.
//!
//! The hosting environment authenticates the caller and reads the clock;
//! both arrive here as plain parameters. Every operation validates (and,
//! for the trigger, fully resolves) before its first write, so a failed
//! call leaves the machine exactly as it was.

use crate::ballots::BallotStore;
use crate::error::ElectionError;
use crate::registry::VoterRegistry;
use crate::resolver;
use crate::state::ElectionState;
use rcv_crypto::recover_ballot_signer;
use rcv_types::{ElectionParams, Epoch, RecoverableSignature, Timestamp, VoterAddress};
use serde::{Deserialize, Serialize};

/// A complete election deployment: registry, ballots, committed state,
/// and parameters.
#[derive(Clone, Debug)]
pub struct ElectionMachine {
    registry: VoterRegistry,
    ballots: BallotStore,
    state: ElectionState,
    params: ElectionParams,
}

/// Serializable snapshot of a machine, the hook a durable storage layer
/// persists between invocations.
#[derive(Serialize, Deserialize)]
struct MachineSnapshot {
    voters: Vec<VoterAddress>,
    ballots: BallotStore,
    state: ElectionState,
    params: ElectionParams,
}

impl ElectionMachine {
    /// Deploy a new machine. `admin` is the standing winner until the
    /// first election; `deployed_at` starts the first cooldown.
    pub fn new(
        voters: Vec<VoterAddress>,
        admin: VoterAddress,
        deployed_at: Timestamp,
        params: ElectionParams,
    ) -> Self {
        Self {
            registry: VoterRegistry::new(voters),
            ballots: BallotStore::new(),
            state: ElectionState::new(admin, deployed_at),
            params,
        }
    }

    /// Record `ranked` as the caller's ballot for the current epoch.
    ///
    /// The authorizing identity is the caller itself.
    pub fn record_ballot(
        &mut self,
        caller: VoterAddress,
        ranked: Vec<VoterAddress>,
    ) -> Result<(), ElectionError> {
        if !self.registry.is_eligible(&caller) {
            tracing::warn!(voter = %caller, "ballot rejected: not a registered voter");
            return Err(ElectionError::UnauthorizedVoter(caller));
        }
        let epoch = self.state.epoch();
        self.ballots
            .record(caller, epoch, ranked, self.params.max_candidates)?;
        tracing::debug!(voter = %caller, %epoch, "ballot recorded");
        Ok(())
    }

    /// Record a ballot on behalf of whoever signed it.
    ///
    /// The authorizing identity is recovered from the signature; the
    /// transport-level caller is irrelevant. Returns the recovered voter.
    pub fn record_ballot_with_signature(
        &mut self,
        ranked: Vec<VoterAddress>,
        signature: &RecoverableSignature,
    ) -> Result<VoterAddress, ElectionError> {
        let signer = recover_ballot_signer(&ranked, signature)?;
        if !self.registry.is_eligible(&signer) {
            tracing::warn!(voter = %signer, "signed ballot rejected: not a registered voter");
            return Err(ElectionError::UnauthorizedVoter(signer));
        }
        let epoch = self.state.epoch();
        self.ballots
            .record(signer, epoch, ranked, self.params.max_candidates)?;
        tracing::debug!(voter = %signer, %epoch, "signed ballot recorded");
        Ok(signer)
    }

    /// Run the election for the current epoch.
    ///
    /// Fails with `ElectionNotYetDue` until the cooldown has strictly
    /// elapsed, and with `ResolutionInvariantViolation` when no ballot
    /// names a candidate. On success the winner, election time, and epoch
    /// commit as one step and the winner is returned.
    pub fn trigger_election(&mut self, now: Timestamp) -> Result<VoterAddress, ElectionError> {
        if !self.state.is_due(now, self.params.cooldown_secs) {
            return Err(ElectionError::ElectionNotYetDue {
                elapsed_secs: self.state.last_election_at().elapsed_since(now),
                cooldown_secs: self.params.cooldown_secs,
            });
        }

        let epoch = self.state.epoch();
        let outcome = resolver::resolve(&self.registry, &self.ballots, epoch)?;
        self.state.commit(outcome.winner, now);

        tracing::info!(
            winner = %outcome.winner,
            rounds = outcome.rounds,
            candidates = outcome.initial_candidates,
            ballots = self.ballots.ballot_count(epoch),
            concluded = %epoch,
            "election committed"
        );
        Ok(outcome.winner)
    }

    /// The voter's ballot for the current epoch (empty when none recorded).
    pub fn ballot(&self, voter: &VoterAddress) -> &[VoterAddress] {
        self.ballots.get(voter, self.state.epoch())
    }

    /// The standing winner.
    pub fn current_winner(&self) -> VoterAddress {
        self.state.winner()
    }

    /// The configured cooldown between elections, in seconds.
    pub fn cooldown_secs(&self) -> u64 {
        self.params.cooldown_secs
    }

    /// The active epoch.
    pub fn epoch(&self) -> Epoch {
        self.state.epoch()
    }

    pub fn params(&self) -> &ElectionParams {
        &self.params
    }

    pub fn registry(&self) -> &VoterRegistry {
        &self.registry
    }

    /// Serialize the machine for persistence.
    pub fn save_state(&self) -> Vec<u8> {
        let snapshot = MachineSnapshot {
            voters: self.registry.voters().to_vec(),
            ballots: self.ballots.clone(),
            state: self.state.clone(),
            params: self.params,
        };
        bincode::serialize(&snapshot).unwrap_or_default()
    }

    /// Restore a machine from serialized bytes, rebuilding the registry
    /// index from the stored voter list.
    pub fn load_state(data: &[u8]) -> Result<Self, ElectionError> {
        let snapshot: MachineSnapshot =
            bincode::deserialize(data).map_err(|e| ElectionError::Snapshot(e.to_string()))?;
        Ok(Self {
            registry: VoterRegistry::new(snapshot.voters),
            ballots: snapshot.ballots,
            state: snapshot.state,
            params: snapshot.params,
        })
    }
}
