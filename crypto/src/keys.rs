//! secp256k1 key generation and address derivation.

use crate::error::SignatureError;
use crate::hash::keccak256;
use k256::ecdsa::{SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use rcv_types::VoterAddress;

/// Generate a new signing key from a secure random source.
pub fn generate_signing_key() -> SigningKey {
    SigningKey::random(&mut OsRng)
}

/// Derive a signing key from a 32-byte seed (deterministic).
///
/// Fails when the seed is zero or not below the curve order.
pub fn signing_key_from_seed(seed: &[u8; 32]) -> Result<SigningKey, SignatureError> {
    SigningKey::from_slice(seed).map_err(|_| SignatureError::InvalidSeed)
}

/// Derive the 20-byte voter address from a public key.
///
/// The address is the last 20 bytes of the Keccak-256 hash of the
/// uncompressed curve point, without its 0x04 prefix byte.
pub fn voter_address(public_key: &VerifyingKey) -> VoterAddress {
    let point = public_key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    VoterAddress::new(address)
}
