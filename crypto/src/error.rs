use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature scalars are not a valid r/s pair")]
    MalformedSignature,

    #[error("invalid recovery id {0}, expected 0, 1, 27 or 28")]
    InvalidRecoveryId(u8),

    #[error("public key recovery failed")]
    RecoveryFailed,

    #[error("seed is not a valid secp256k1 secret scalar")]
    InvalidSeed,

    #[error("signing failed")]
    SigningFailed,
}
