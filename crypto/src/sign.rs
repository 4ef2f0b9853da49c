//! Recoverable ballot signing and signer recovery.
//!
//! There is no replay nonce in the signed payload: a captured signature can
//! re-assert the same ballot for the same signer any number of times within
//! an epoch, e.g. to restore a ranking the voter meant to replace. It cannot
//! produce a different ballot or a different signer.

use crate::error::SignatureError;
use crate::keys::voter_address;
use crate::typed_data::ballot_digest;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use rcv_types::{RecoverableSignature, VoterAddress};

/// Sign a ranked ballot, producing a detached recoverable signature.
pub fn sign_ballot(
    key: &SigningKey,
    ranked: &[VoterAddress],
) -> Result<RecoverableSignature, SignatureError> {
    let digest = ballot_digest(ranked);
    let (sig, recovery_id) = key
        .sign_prehash_recoverable(&digest)
        .map_err(|_| SignatureError::SigningFailed)?;

    let bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..]);
    Ok(RecoverableSignature::new(r, s, recovery_id.to_byte()))
}

/// Recover the authorizing voter from a ranked ballot and its signature.
///
/// The recovered identity is whose ballot the list represents; any
/// transport-level caller is irrelevant.
pub fn recover_ballot_signer(
    ranked: &[VoterAddress],
    signature: &RecoverableSignature,
) -> Result<VoterAddress, SignatureError> {
    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let sig =
        Signature::from_slice(&sig_bytes).map_err(|_| SignatureError::MalformedSignature)?;

    let digest = ballot_digest(ranked);
    let recovered = VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(voter_address(&recovered))
}

/// Accept both recovery id conventions: `{0, 1}` and the legacy `{27, 28}`.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        0 | 1 => v,
        27 | 28 => v - 27,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };
    RecoveryId::try_from(id).map_err(|_| SignatureError::InvalidRecoveryId(v))
}
