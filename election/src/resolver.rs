//! Instant-runoff winner resolution.
//!
//! Resolution is a pure read over the ballot store: it builds the candidate
//! pool for the epoch, then repeatedly tallies first-remaining-choice votes
//! and eliminates the weakest candidate until one remains. The pool and the
//! per-round tallies live on this call's stack and are dropped on return.

use crate::ballots::BallotStore;
use crate::error::ElectionError;
use crate::registry::VoterRegistry;
use rcv_types::{Epoch, VoterAddress};
use std::collections::HashMap;

/// Summary of a completed resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionOutcome {
    /// The single surviving candidate.
    pub winner: VoterAddress,
    /// Elimination rounds run; always `initial_candidates - 1`.
    pub rounds: u32,
    /// Size of the candidate pool before the first elimination.
    pub initial_candidates: usize,
}

/// Resolve the election for `epoch` over all ballots currently stored.
///
/// Fails with `ResolutionInvariantViolation` when no voter's ballot names
/// any candidate — the elimination loop has no base case for an empty pool.
pub fn resolve(
    registry: &VoterRegistry,
    ballots: &BallotStore,
    epoch: Epoch,
) -> Result<ResolutionOutcome, ElectionError> {
    let mut pool = build_pool(registry, ballots, epoch);
    if pool.is_empty() {
        return Err(ElectionError::ResolutionInvariantViolation);
    }

    let initial_candidates = pool.len();
    let mut round = 0u32;

    while pool.len() > 1 {
        let tally = tally_round(registry, ballots, epoch, &pool);
        let weakest = weakest_candidate(&pool, &tally);
        let votes = tally.get(&weakest).copied().unwrap_or(0);
        tracing::debug!(
            round,
            eliminated = %weakest,
            votes,
            remaining = pool.len() - 1,
            "candidate eliminated"
        );
        // Position is always found: `weakest` came from scanning `pool`.
        if let Some(position) = pool.iter().position(|c| *c == weakest) {
            pool.remove(position);
        }
        round += 1;
    }

    Ok(ResolutionOutcome {
        winner: pool[0],
        rounds: round,
        initial_candidates,
    })
}

/// Collect every candidate named on any ballot, in ballot-scan order.
///
/// Registry order, then ranking order within each ballot, decides where a
/// candidate first enters the pool — and pool order decides tie-breaks, so
/// this ordering is load-bearing.
fn build_pool(registry: &VoterRegistry, ballots: &BallotStore, epoch: Epoch) -> Vec<VoterAddress> {
    let mut pool: Vec<VoterAddress> = Vec::new();
    for voter in registry.iter() {
        for candidate in ballots.get(voter, epoch) {
            if !pool.contains(candidate) {
                pool.push(*candidate);
            }
        }
    }
    pool
}

/// One tally pass: each voter's first ranked candidate still in the pool
/// gets one vote. A voter whose ballot is empty or fully eliminated casts
/// nothing this round (exhaustion/abstention, not an error).
fn tally_round(
    registry: &VoterRegistry,
    ballots: &BallotStore,
    epoch: Epoch,
    pool: &[VoterAddress],
) -> HashMap<VoterAddress, u32> {
    let mut tally: HashMap<VoterAddress, u32> = HashMap::new();
    for voter in registry.iter() {
        let first_surviving = ballots
            .get(voter, epoch)
            .iter()
            .find(|candidate| pool.contains(candidate));
        if let Some(candidate) = first_surviving {
            *tally.entry(*candidate).or_insert(0) += 1;
        }
    }
    tally
}

/// The candidate to eliminate: strictly minimum tally, ties broken by
/// keeping the minimum encountered first in pool order.
///
/// `pool` must be non-empty.
fn weakest_candidate(pool: &[VoterAddress], tally: &HashMap<VoterAddress, u32>) -> VoterAddress {
    let mut weakest = pool[0];
    let mut weakest_votes = tally.get(&weakest).copied().unwrap_or(0);
    for candidate in &pool[1..] {
        let votes = tally.get(candidate).copied().unwrap_or(0);
        if votes < weakest_votes {
            weakest = *candidate;
            weakest_votes = votes;
        }
    }
    weakest
}
