/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Defines common data structures to be used inside this library, or from outside application.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of bytes in an account address.
pub const ADDRESS_LENGTH: usize = 20;

/// Number of bytes in a hash digest.
pub const HASH_LENGTH: usize = 32;

/// Maximum number of ASCII characters in a coin symbol.
pub const MAX_COIN_SYMBOL_LENGTH: usize = 10;

/// Minimum number of ASCII characters in a coin symbol.
pub const MIN_COIN_SYMBOL_LENGTH: usize = 3;

/// Symbol of the base coin, the reserve numeraire of the chain.
pub const BASE_COIN_SYMBOL: &str = "BND";

/// 20-byte account identifier, derived from the last 20 bytes of the
/// Keccak-256 of an uncompressed secp256k1 public key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; ADDRESS_LENGTH] = bytes.try_into().ok()?;
        Some(Address(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// 32-byte opaque digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; HASH_LENGTH]);

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// ASCII coin ticker, stored zero-padded to its maximum length.
///
/// A symbol on the wire is its bare ASCII bytes; symbols registered through
/// CreateCoin must match `^[A-Z0-9]{3,10}$`, which [CoinSymbol::is_valid]
/// checks. Symbols read from untrusted payloads may be arbitrary bytes and
/// simply fail registry lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoinSymbol([u8; MAX_COIN_SYMBOL_LENGTH]);

impl CoinSymbol {
    /// Builds a symbol from raw bytes. `None` if longer than the maximum.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > MAX_COIN_SYMBOL_LENGTH {
            return None;
        }
        let mut padded = [0u8; MAX_COIN_SYMBOL_LENGTH];
        padded[..bytes.len()].copy_from_slice(bytes);
        Some(CoinSymbol(padded))
    }

    /// The base coin of the chain.
    pub fn base_coin() -> Self {
        Self::from_bytes(BASE_COIN_SYMBOL.as_bytes()).expect("base coin symbol fits")
    }

    pub fn is_base(&self) -> bool {
        *self == Self::base_coin()
    }

    /// Symbol bytes without the zero padding.
    pub fn as_bytes(&self) -> &[u8] {
        let end = self
            .0
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_COIN_SYMBOL_LENGTH);
        &self.0[..end]
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the symbol matches `^[A-Z0-9]{3,10}$`.
    pub fn is_valid(&self) -> bool {
        let bytes = self.as_bytes();
        (MIN_COIN_SYMBOL_LENGTH..=MAX_COIN_SYMBOL_LENGTH).contains(&bytes.len())
            && bytes
                .iter()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }
}

impl fmt::Display for CoinSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

/// Key/value byte pair attached to a [Response](crate::transition::Response)
/// for external indexing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl Tag {
    pub fn new(key: &[u8], value: Vec<u8>) -> Self {
        Tag {
            key: key.to_vec(),
            value,
        }
    }
}
