//! Voter address type — the identity of voters and candidates alike.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte RCV voter address.
///
/// Derived from a secp256k1 public key as the last 20 bytes of the
/// Keccak-256 hash of the uncompressed point (see `rcv-crypto`). Candidates
/// on a ballot are addressed the same way, so a voter may appear on a
/// ballot as a candidate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoterAddress([u8; 20]);

impl VoterAddress {
    pub const ZERO: Self = Self([0u8; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for VoterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoterAddress(0x{}…)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for VoterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl From<[u8; 20]> for VoterAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed_hex() {
        let addr = VoterAddress::new([0xAB; 20]);
        let shown = addr.to_string();
        assert!(shown.starts_with("0x"));
        assert_eq!(shown.len(), 2 + 40);
        assert!(shown[2..].chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn debug_is_truncated() {
        let addr = VoterAddress::new([0xCD; 20]);
        let shown = format!("{:?}", addr);
        assert!(shown.contains("cdcdcdcd"));
        assert!(!shown.contains("cdcdcdcdcd"));
    }

    #[test]
    fn zero_detection() {
        assert!(VoterAddress::ZERO.is_zero());
        assert!(!VoterAddress::new([1; 20]).is_zero());
    }

    #[test]
    fn roundtrip_bytes() {
        let bytes = [7u8; 20];
        assert_eq!(VoterAddress::new(bytes).as_bytes(), &bytes);
    }
}
