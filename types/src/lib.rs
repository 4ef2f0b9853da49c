//! Fundamental types for the RCV protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: voter addresses, epochs, timestamps, recoverable signatures,
//! and election parameters.

pub mod address;
pub mod epoch;
pub mod params;
pub mod signature;
pub mod time;

pub use address::VoterAddress;
pub use epoch::Epoch;
pub use params::ElectionParams;
pub use signature::RecoverableSignature;
pub use time::Timestamp;
