//! Instant-runoff election state machine.
//!
//! A fixed registry of voters submits ranked ballots — directly, or through
//! a detached recoverable signature — and once the cooldown has strictly
//! elapsed, any caller may trigger an election. Resolution eliminates the
//! weakest candidate round by round until one remains, commits that winner,
//! and advances the epoch.
//!
//! The host environment supplies the caller identity and the clock as
//! explicit parameters; the machine itself holds no ambient state and
//! performs no I/O.

pub mod ballots;
pub mod error;
pub mod machine;
pub mod registry;
pub mod resolver;
pub mod state;

pub use ballots::BallotStore;
pub use error::ElectionError;
pub use machine::ElectionMachine;
pub use registry::VoterRegistry;
pub use resolver::{resolve, ResolutionOutcome};
pub use state::ElectionState;
