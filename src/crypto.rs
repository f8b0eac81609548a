/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Keccak-256 hashing and recoverable secp256k1 ECDSA.
//!
//! Transactions, checks and redeem proofs all authenticate through signature
//! recovery: the signer is never named on the wire, only recovered from a
//! 65-byte `r ‖ s ‖ recovery_id` signature over a Keccak-256 digest.

use libsecp256k1::{Message, PublicKey, RecoveryId, SecretKey, Signature};
use thiserror::Error;
use tiny_keccak::{Hasher as _, Keccak};

use crate::types::{Address, Hash, ADDRESS_LENGTH, HASH_LENGTH};

/// Length of a recoverable signature: 32-byte `r`, 32-byte `s`, 1-byte recovery id.
pub const SIGNATURE_LENGTH: usize = 65;

/// Length of an uncompressed secp256k1 public key (`0x04` prefix included).
pub const PUBLIC_KEY_LENGTH: usize = 65;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("signature must be {SIGNATURE_LENGTH} bytes")]
    InvalidSignatureLength,

    #[error("invalid signature: {0:?}")]
    Secp(libsecp256k1::Error),
}

impl From<libsecp256k1::Error> for CryptoError {
    fn from(err: libsecp256k1::Error) -> Self {
        CryptoError::Secp(err)
    }
}

/// Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut keccak = Keccak::v256();
    keccak.update(data);
    let mut out = [0u8; HASH_LENGTH];
    keccak.finalize(&mut out);
    Hash(out)
}

/// Recovers the uncompressed public key that produced `sig` over `msg_hash`.
///
/// `sig` is `r ‖ s ‖ recovery_id` with the recovery id in `[0, 3]`.
pub fn ecrecover(msg_hash: &Hash, sig: &[u8]) -> Result<[u8; PUBLIC_KEY_LENGTH], CryptoError> {
    if sig.len() != SIGNATURE_LENGTH {
        return Err(CryptoError::InvalidSignatureLength);
    }
    let message = Message::parse(&msg_hash.0);
    let signature = Signature::parse_standard_slice(&sig[..64])?;
    let recovery_id = RecoveryId::parse(sig[64])?;
    let public_key = libsecp256k1::recover(&message, &signature, &recovery_id)?;
    Ok(public_key.serialize())
}

/// Address of an uncompressed public key: last 20 bytes of the Keccak-256 of
/// the 64 coordinate bytes (the `0x04` prefix is not hashed).
pub fn public_key_to_address(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> Address {
    let digest = keccak256(&public_key[1..]);
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes.copy_from_slice(&digest.0[HASH_LENGTH - ADDRESS_LENGTH..]);
    Address(bytes)
}

/// Recovers the signing address from `sig` over `msg_hash`.
pub fn recover_address(msg_hash: &Hash, sig: &[u8]) -> Result<Address, CryptoError> {
    let public_key = ecrecover(msg_hash, sig)?;
    Ok(public_key_to_address(&public_key))
}

/// Produces a 65-byte recoverable signature over `msg_hash`.
pub fn sign_recoverable(msg_hash: &Hash, secret: &SecretKey) -> [u8; SIGNATURE_LENGTH] {
    let message = Message::parse(&msg_hash.0);
    let (signature, recovery_id) = libsecp256k1::sign(&message, secret);
    let mut out = [0u8; SIGNATURE_LENGTH];
    out[..64].copy_from_slice(&signature.serialize());
    out[64] = recovery_id.serialize();
    out
}

/// Address controlled by `secret`.
pub fn secret_to_address(secret: &SecretKey) -> Address {
    let public_key = PublicKey::from_secret_key(secret);
    public_key_to_address(&public_key.serialize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(byte: u8) -> SecretKey {
        SecretKey::parse(&[byte; 32]).unwrap()
    }

    #[test]
    fn keccak256_known_vector() {
        // Keccak-256 of the empty string.
        assert_eq!(
            hex::encode(keccak256(&[]).0),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn sign_and_recover_roundtrip() {
        let secret = secret(0x42);
        let hash = keccak256(b"message");
        let sig = sign_recoverable(&hash, &secret);
        assert_eq!(recover_address(&hash, &sig).unwrap(), secret_to_address(&secret));
    }

    #[test]
    fn recover_rejects_short_signature() {
        let hash = keccak256(b"message");
        assert_eq!(
            ecrecover(&hash, &[0u8; 64]),
            Err(CryptoError::InvalidSignatureLength)
        );
    }

    #[test]
    fn recover_distinguishes_messages() {
        let secret = secret(0x42);
        let sig = sign_recoverable(&keccak256(b"one"), &secret);
        let recovered = recover_address(&keccak256(b"two"), &sig).unwrap();
        assert_ne!(recovered, secret_to_address(&secret));
    }
}
