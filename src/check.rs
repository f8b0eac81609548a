/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Off-chain check instrument.
//!
//! A check is a bearer note issued off-chain by a funded account: anyone who
//! learns the secret behind its lock key can redeem it once, on-chain, before
//! its due block. The wire form is an RLP list of eight items: `nonce`,
//! `coin`, `value`, `due_block`, `lock`, `v`, `r`, `s`.
//!
//! Two signatures bind a check. The *lock* is a recoverable signature by the
//! lock key over the first four fields; it commits the check to that key
//! without naming it. The outer `v`, `r`, `s` are the issuer's signature over
//! the first five fields, and the issuer's account is the one debited on
//! redemption.

use libsecp256k1::SecretKey;
use num_bigint::BigUint;
use rlp::{DecoderError, Rlp, RlpStream};

use crate::{
    crypto::{self, CryptoError, PUBLIC_KEY_LENGTH},
    error::ExecutionError,
    transaction::{
        data::{amount_bytes, decode_amount, decode_symbol},
        signature_bytes,
    },
    types::{Address, CoinSymbol, Hash},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    pub nonce: u64,
    pub coin: CoinSymbol,
    pub value: BigUint,
    pub due_block: u64,
    /// Recoverable signature by the lock key over [Check::hash_without_lock].
    pub lock: Vec<u8>,
    pub v: BigUint,
    pub r: BigUint,
    pub s: BigUint,
}

impl Check {
    pub fn decode_from_bytes(raw: &[u8]) -> Result<Self, ExecutionError> {
        let rlp = Rlp::new(raw);
        if rlp.item_count()? != 8 {
            return Err(DecoderError::RlpIncorrectListLen.into());
        }
        Ok(Check {
            nonce: rlp.val_at(0)?,
            coin: decode_symbol(&rlp.at(1)?)?,
            value: decode_amount(&rlp.at(2)?)?,
            due_block: rlp.val_at(3)?,
            lock: rlp.val_at(4)?,
            v: decode_amount(&rlp.at(5)?)?,
            r: decode_amount(&rlp.at(6)?)?,
            s: decode_amount(&rlp.at(7)?)?,
        })
    }

    fn rlp_append_without_lock(&self, s: &mut RlpStream) {
        s.append(&self.nonce);
        s.append(&self.coin.as_bytes().to_vec());
        s.append(&amount_bytes(&self.value));
        s.append(&self.due_block);
    }

    /// Digest the lock key signs.
    pub fn hash_without_lock(&self) -> Hash {
        let mut s = RlpStream::new_list(4);
        self.rlp_append_without_lock(&mut s);
        crypto::keccak256(&s.out())
    }

    /// Digest the issuer signs.
    pub fn hash(&self) -> Hash {
        let mut s = RlpStream::new_list(5);
        self.rlp_append_without_lock(&mut s);
        s.append(&self.lock);
        crypto::keccak256(&s.out())
    }

    /// Full eight-field wire encoding.
    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(8);
        self.rlp_append_without_lock(&mut s);
        s.append(&self.lock);
        s.append(&amount_bytes(&self.v));
        s.append(&amount_bytes(&self.r));
        s.append(&amount_bytes(&self.s));
        s.out().to_vec()
    }

    /// Identifier in the used-check set.
    pub fn id(&self) -> Hash {
        crypto::keccak256(&self.encode())
    }

    /// Uncompressed public key recovered from the lock.
    pub fn lock_pub_key(&self) -> Result<[u8; PUBLIC_KEY_LENGTH], CryptoError> {
        crypto::ecrecover(&self.hash_without_lock(), &self.lock)
    }

    /// Issuer address recovered from the outer signature.
    pub fn sender(&self) -> Result<Address, ExecutionError> {
        let sig = signature_bytes(&self.v, &self.r, &self.s)?;
        Ok(crypto::recover_address(&self.hash(), &sig)?)
    }

    /// Installs the lock signature for `lock_secret`.
    pub fn set_lock(&mut self, lock_secret: &SecretKey) {
        self.lock = crypto::sign_recoverable(&self.hash_without_lock(), lock_secret).to_vec();
    }

    /// Signs the locked check as the issuer, setting `v`, `r`, `s`.
    pub fn sign(&mut self, issuer_secret: &SecretKey) {
        let sig = crypto::sign_recoverable(&self.hash(), issuer_secret);
        self.r = BigUint::from_bytes_be(&sig[..32]);
        self.s = BigUint::from_bytes_be(&sig[32..64]);
        self.v = BigUint::from(u32::from(sig[64]) + 27);
    }
}

/// Digest a redeemer proves control of an address over: the Keccak-256 of the
/// RLP of the one-element list holding the redeemer's address.
pub fn proof_message(redeemer: &Address) -> Hash {
    let mut s = RlpStream::new_list(1);
    s.append(&redeemer.0.to_vec());
    crypto::keccak256(&s.out())
}

/// Builds a redeem proof: the lock key's signature over [proof_message].
pub fn make_proof(redeemer: &Address, lock_secret: &SecretKey) -> Vec<u8> {
    crypto::sign_recoverable(&proof_message(redeemer), lock_secret).to_vec()
}
