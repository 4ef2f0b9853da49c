//! Cryptographic primitives for the RCV protocol.
//!
//! Ballot authorization is recovery-based: a detached signature over a
//! domain-separated digest of the ranked candidate list identifies the
//! voter, so the transport caller is irrelevant to whose ballot is
//! recorded. This crate provides the digest, the signing side, and the
//! recovery side.

pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;
pub mod typed_data;

pub use error::SignatureError;
pub use hash::{keccak256, keccak256_multi};
pub use keys::{generate_signing_key, signing_key_from_seed, voter_address};
pub use sign::{recover_ballot_signer, sign_ballot};
pub use typed_data::ballot_digest;
