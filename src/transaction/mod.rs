/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Transaction envelope: wire decoding, signing hash and sender recovery.
//!
//! A transaction on the wire is an RLP list of nine items: `nonce`,
//! `gas_price`, `type`, `data` (a byte string containing the RLP of the typed
//! payload), `payload`, `service_data`, `v`, `r`, `s`. The sender is recovered
//! from the signature over the Keccak-256 of the first six items re-encoded as
//! a six-item list.

pub mod data;

use std::fmt;

use libsecp256k1::SecretKey;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rlp::{DecoderError, Rlp, RlpStream};

use crate::{
    crypto::{self, SIGNATURE_LENGTH},
    error::ExecutionError,
    types::{Address, Hash},
};

pub use data::{
    BuyCoinData, CreateCoinData, DeclareCandidacyData, DelegateData, RedeemCheckData,
    SellCoinData, SendData, SetCandidateOffData, SetCandidateOnData, TransactionData, UnbondData,
};

/// Maximum encoded transaction length in bytes.
pub const MAX_TX_LENGTH: usize = 1024;

/// Maximum `payload` field length in bytes.
pub const MAX_PAYLOAD_LENGTH: usize = 128;

/// Maximum `service_data` field length in bytes.
pub const MAX_SERVICE_DATA_LENGTH: usize = 128;

pub const TYPE_SEND: u8 = 0x01;
pub const TYPE_SELL_COIN: u8 = 0x02;
pub const TYPE_BUY_COIN: u8 = 0x04;
pub const TYPE_CREATE_COIN: u8 = 0x05;
pub const TYPE_DECLARE_CANDIDACY: u8 = 0x06;
pub const TYPE_DELEGATE: u8 = 0x07;
pub const TYPE_UNBOND: u8 = 0x08;
pub const TYPE_REDEEM_CHECK: u8 = 0x09;
pub const TYPE_SET_CANDIDATE_ONLINE: u8 = 0x0A;
pub const TYPE_SET_CANDIDATE_OFFLINE: u8 = 0x0B;

/// Decoded transaction envelope.
///
/// `data` is `None` when the type tag is not recognized; execution then
/// answers `UnknownTransactionType` (the envelope itself is well-formed).
#[derive(Clone, Debug)]
pub struct Transaction {
    pub nonce: u64,
    pub gas_price: BigUint,
    pub tx_type: u8,
    pub data_raw: Vec<u8>,
    pub payload: Vec<u8>,
    pub service_data: Vec<u8>,
    pub v: BigUint,
    pub r: BigUint,
    pub s: BigUint,
    pub data: Option<TransactionData>,
}

impl Transaction {
    /// Decodes an envelope and its typed payload from raw bytes.
    pub fn decode_from_bytes(raw: &[u8]) -> Result<Self, ExecutionError> {
        let rlp = Rlp::new(raw);
        if rlp.item_count()? != 9 {
            return Err(DecoderError::RlpIncorrectListLen.into());
        }
        let nonce: u64 = rlp.val_at(0)?;
        let gas_price = data::decode_amount(&rlp.at(1)?)?;
        let tx_type: u8 = rlp.val_at(2)?;
        let data_raw: Vec<u8> = rlp.val_at(3)?;
        let payload: Vec<u8> = rlp.val_at(4)?;
        let service_data: Vec<u8> = rlp.val_at(5)?;
        let v = data::decode_amount(&rlp.at(6)?)?;
        let r = data::decode_amount(&rlp.at(7)?)?;
        let s = data::decode_amount(&rlp.at(8)?)?;

        let decoded = TransactionData::decode(tx_type, &data_raw)?;

        Ok(Transaction {
            nonce,
            gas_price,
            tx_type,
            data_raw,
            payload,
            service_data,
            v,
            r,
            s,
            data: decoded,
        })
    }

    fn rlp_append_unsigned(&self, s: &mut RlpStream) {
        s.append(&self.nonce);
        s.append(&data::amount_bytes(&self.gas_price));
        s.append(&self.tx_type);
        s.append(&self.data_raw);
        s.append(&self.payload);
        s.append(&self.service_data);
    }

    /// Keccak-256 of the six unsigned envelope fields; the digest the sender
    /// signs.
    pub fn signing_hash(&self) -> Hash {
        let mut s = RlpStream::new_list(6);
        self.rlp_append_unsigned(&mut s);
        crypto::keccak256(&s.out())
    }

    /// Full nine-field wire encoding.
    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(9);
        self.rlp_append_unsigned(&mut s);
        s.append(&data::amount_bytes(&self.v));
        s.append(&data::amount_bytes(&self.r));
        s.append(&data::amount_bytes(&self.s));
        s.out().to_vec()
    }

    /// Signs the envelope in place, setting `v`, `r`, `s`.
    pub fn sign(&mut self, secret: &SecretKey) {
        let sig = crypto::sign_recoverable(&self.signing_hash(), secret);
        self.r = BigUint::from_bytes_be(&sig[..32]);
        self.s = BigUint::from_bytes_be(&sig[32..64]);
        self.v = BigUint::from(u32::from(sig[64]) + 27);
    }

    /// Recovers the sender address from the signature.
    pub fn sender(&self) -> Result<Address, ExecutionError> {
        let sig = signature_bytes(&self.v, &self.r, &self.s)?;
        Ok(crypto::recover_address(&self.signing_hash(), &sig)?)
    }
}

/// Assembles a 65-byte recoverable signature from Ethereum-style `v`, `r`,
/// `s` components (`v` is the recovery id plus 27).
pub(crate) fn signature_bytes(
    v: &BigUint,
    r: &BigUint,
    s: &BigUint,
) -> Result<[u8; SIGNATURE_LENGTH], ExecutionError> {
    let v = v
        .to_u64()
        .filter(|v| (27..=30).contains(v))
        .ok_or_else(|| ExecutionError::Decode("invalid signature recovery value".into()))?;

    let mut sig = [0u8; SIGNATURE_LENGTH];
    copy_padded(&mut sig[..32], r)?;
    copy_padded(&mut sig[32..64], s)?;
    sig[64] = (v - 27) as u8;
    Ok(sig)
}

fn copy_padded(out: &mut [u8], value: &BigUint) -> Result<(), ExecutionError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > out.len() {
        return Err(ExecutionError::Decode("signature component too long".into()));
    }
    let start = out.len() - bytes.len();
    out[start..].copy_from_slice(&bytes);
    Ok(())
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction{{type: {}, nonce: {}, gas_price: {}}}",
            type_name(self.tx_type),
            self.nonce,
            self.gas_price
        )
    }
}

fn type_name(tx_type: u8) -> &'static str {
    match tx_type {
        TYPE_SEND => "Send",
        TYPE_SELL_COIN => "SellCoin",
        TYPE_BUY_COIN => "BuyCoin",
        TYPE_CREATE_COIN => "CreateCoin",
        TYPE_DECLARE_CANDIDACY => "DeclareCandidacy",
        TYPE_DELEGATE => "Delegate",
        TYPE_UNBOND => "Unbond",
        TYPE_REDEEM_CHECK => "RedeemCheck",
        TYPE_SET_CANDIDATE_ONLINE => "SetCandidateOnline",
        TYPE_SET_CANDIDATE_OFFLINE => "SetCandidateOffline",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CoinSymbol;

    fn secret() -> SecretKey {
        SecretKey::parse(&[0x17; 32]).unwrap()
    }

    fn send_tx() -> Transaction {
        let data = SendData {
            coin: CoinSymbol::base_coin(),
            to: Address([0xAA; 20]),
            value: BigUint::from(100u8),
        };
        Transaction {
            nonce: 1,
            gas_price: BigUint::from(1u8),
            tx_type: TYPE_SEND,
            data_raw: data.encode(),
            payload: Vec::new(),
            service_data: Vec::new(),
            v: BigUint::default(),
            r: BigUint::default(),
            s: BigUint::default(),
            data: Some(TransactionData::Send(data)),
        }
    }

    #[test]
    fn encode_decode_roundtrip() {
        let mut tx = send_tx();
        tx.sign(&secret());
        let decoded = Transaction::decode_from_bytes(&tx.encode()).unwrap();
        assert_eq!(decoded.nonce, tx.nonce);
        assert_eq!(decoded.gas_price, tx.gas_price);
        assert_eq!(decoded.tx_type, TYPE_SEND);
        match decoded.data {
            Some(TransactionData::Send(ref d)) => {
                assert_eq!(d.to, Address([0xAA; 20]));
                assert_eq!(d.value, BigUint::from(100u8));
            }
            ref other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn sender_recovery() {
        let mut tx = send_tx();
        tx.sign(&secret());
        let decoded = Transaction::decode_from_bytes(&tx.encode()).unwrap();
        assert_eq!(
            decoded.sender().unwrap(),
            crate::crypto::secret_to_address(&secret())
        );
    }

    #[test]
    fn tampering_changes_sender() {
        let mut tx = send_tx();
        tx.sign(&secret());
        let honest = tx.sender().unwrap();
        tx.nonce = 2;
        match tx.sender() {
            Ok(recovered) => assert_ne!(recovered, honest),
            Err(ExecutionError::Decode(_)) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_keeps_envelope() {
        let mut tx = send_tx();
        tx.tx_type = 0xEE;
        tx.sign(&secret());
        let decoded = Transaction::decode_from_bytes(&tx.encode()).unwrap();
        assert!(decoded.data.is_none());
    }

    #[test]
    fn garbage_bytes_fail_decoding() {
        assert!(matches!(
            Transaction::decode_from_bytes(&[0x01, 0x02, 0x03]),
            Err(ExecutionError::Decode(_))
        ));
    }
}
