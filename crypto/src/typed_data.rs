//! Domain-separated structured digest of a ranked ballot.
//!
//! The digest binds a type descriptor and a domain separator into the hash
//! so a ballot signature cannot be replayed as any other kind of message:
//! `keccak256(0x19 ‖ 0x01 ‖ domain_separator ‖ struct_hash)`, with each
//! candidate address encoded as a left-padded 32-byte word.

use crate::hash::{keccak256, keccak256_multi};
use rcv_types::VoterAddress;

/// Type descriptor bound into every ballot digest.
///
/// The descriptor names a `uint256[]` payload while the encoded words are
/// addresses. Signers in the field already produce digests under this
/// string, so it is kept verbatim; changing it invalidates every existing
/// signature.
pub const BALLOT_TYPE: &str = "Ballot(uint256[] choices)";

const DOMAIN_TYPE: &str = "EIP712Domain(string name,string version)";
const DOMAIN_NAME: &str = "RCV";
const DOMAIN_VERSION: &str = "1";

/// The domain separator: hash of the domain type descriptor and the
/// protocol name/version.
pub fn domain_separator() -> [u8; 32] {
    keccak256_multi(&[
        &keccak256(DOMAIN_TYPE.as_bytes()),
        &keccak256(DOMAIN_NAME.as_bytes()),
        &keccak256(DOMAIN_VERSION.as_bytes()),
    ])
}

/// Encode each candidate as a 32-byte word, address bytes right-aligned.
fn encode_candidates(ranked: &[VoterAddress]) -> Vec<u8> {
    let mut words = Vec::with_capacity(ranked.len() * 32);
    for candidate in ranked {
        words.extend_from_slice(&[0u8; 12]);
        words.extend_from_slice(candidate.as_bytes());
    }
    words
}

/// Hash of the typed ballot payload: typehash ‖ hash of the encoded words.
pub fn ballot_struct_hash(ranked: &[VoterAddress]) -> [u8; 32] {
    keccak256_multi(&[
        &keccak256(BALLOT_TYPE.as_bytes()),
        &keccak256(&encode_candidates(ranked)),
    ])
}

/// The digest a voter signs to authorize a ranked ballot.
pub fn ballot_digest(ranked: &[VoterAddress]) -> [u8; 32] {
    keccak256_multi(&[
        &[0x19, 0x01],
        &domain_separator(),
        &ballot_struct_hash(ranked),
    ])
}
