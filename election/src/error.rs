use rcv_crypto::SignatureError;
use rcv_types::VoterAddress;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ElectionError {
    #[error("ballot ranks {len} candidates, limit is {max}")]
    InvalidBallotLength { len: usize, max: usize },

    #[error("{0} is not a registered voter")]
    UnauthorizedVoter(VoterAddress),

    #[error("invalid ballot signature: {0}")]
    InvalidSignature(String),

    #[error("cooldown not elapsed: {elapsed_secs}s of {cooldown_secs}s")]
    ElectionNotYetDue {
        elapsed_secs: u64,
        cooldown_secs: u64,
    },

    #[error("no candidate appears on any ballot for the current epoch")]
    ResolutionInvariantViolation,

    #[error("snapshot decode failed: {0}")]
    Snapshot(String),
}

impl From<SignatureError> for ElectionError {
    fn from(err: SignatureError) -> Self {
        Self::InvalidSignature(err.to_string())
    }
}
