//! Election parameters.
//!
//! Fixed at deployment; there is no in-band governance over these values.

use serde::{Deserialize, Serialize};

/// Seconds in a (non-leap) year.
const YEAR_SECS: u64 = 365 * 24 * 3600;

/// Configuration of an election machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionParams {
    /// Maximum number of candidates a single ballot may rank.
    ///
    /// Note this bounds ballot length only — the candidate pool at
    /// resolution time is bounded by `voters × max_candidates` distinct
    /// identities, not by this value.
    pub max_candidates: usize,

    /// Minimum seconds that must strictly elapse between successive
    /// elections.
    pub cooldown_secs: u64,
}

impl ElectionParams {
    /// Standard term configuration: ballots rank up to 10 candidates and
    /// elections run four years apart.
    pub fn quadrennial() -> Self {
        Self {
            max_candidates: 10,
            cooldown_secs: 4 * YEAR_SECS,
        }
    }
}

/// Default is the quadrennial configuration.
impl Default for ElectionParams {
    fn default() -> Self {
        Self::quadrennial()
    }
}
