/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Typed transaction payloads and their RLP form.

use num_bigint::BigUint;
use num_traits::Zero;
use rlp::{DecoderError, Rlp, RlpStream};

use crate::{
    gas,
    types::{Address, CoinSymbol},
};

use super::{
    TYPE_BUY_COIN, TYPE_CREATE_COIN, TYPE_DECLARE_CANDIDACY, TYPE_DELEGATE, TYPE_REDEEM_CHECK,
    TYPE_SELL_COIN, TYPE_SEND, TYPE_SET_CANDIDATE_OFFLINE, TYPE_SET_CANDIDATE_ONLINE, TYPE_UNBOND,
};

/// Decoded payload of one transaction, tagged by type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionData {
    Send(SendData),
    SellCoin(SellCoinData),
    BuyCoin(BuyCoinData),
    CreateCoin(CreateCoinData),
    DeclareCandidacy(DeclareCandidacyData),
    Delegate(DelegateData),
    Unbond(UnbondData),
    RedeemCheck(RedeemCheckData),
    SetCandidateOnline(SetCandidateOnData),
    SetCandidateOffline(SetCandidateOffData),
}

impl TransactionData {
    /// Decodes the payload for `tx_type` from the envelope's `data` bytes.
    /// `Ok(None)` for an unrecognized type tag.
    pub fn decode(tx_type: u8, raw: &[u8]) -> Result<Option<Self>, DecoderError> {
        let rlp = Rlp::new(raw);
        let data = match tx_type {
            TYPE_SEND => Self::Send(SendData::decode(&rlp)?),
            TYPE_SELL_COIN => Self::SellCoin(SellCoinData::decode(&rlp)?),
            TYPE_BUY_COIN => Self::BuyCoin(BuyCoinData::decode(&rlp)?),
            TYPE_CREATE_COIN => Self::CreateCoin(CreateCoinData::decode(&rlp)?),
            TYPE_DECLARE_CANDIDACY => Self::DeclareCandidacy(DeclareCandidacyData::decode(&rlp)?),
            TYPE_DELEGATE => Self::Delegate(DelegateData::decode(&rlp)?),
            TYPE_UNBOND => Self::Unbond(UnbondData::decode(&rlp)?),
            TYPE_REDEEM_CHECK => Self::RedeemCheck(RedeemCheckData::decode(&rlp)?),
            TYPE_SET_CANDIDATE_ONLINE => {
                Self::SetCandidateOnline(SetCandidateOnData::decode(&rlp)?)
            }
            TYPE_SET_CANDIDATE_OFFLINE => {
                Self::SetCandidateOffline(SetCandidateOffData::decode(&rlp)?)
            }
            _ => return Ok(None),
        };
        Ok(Some(data))
    }

    /// Fixed gas weight of this transaction type.
    pub fn gas(&self) -> i64 {
        match self {
            TransactionData::Send(_) => gas::GAS_SEND,
            TransactionData::SellCoin(_) => gas::GAS_SELL_COIN,
            TransactionData::BuyCoin(_) => gas::GAS_BUY_COIN,
            TransactionData::CreateCoin(_) => gas::GAS_CREATE_COIN,
            TransactionData::DeclareCandidacy(_) => gas::GAS_DECLARE_CANDIDACY,
            TransactionData::Delegate(_) => gas::GAS_DELEGATE,
            TransactionData::Unbond(_) => gas::GAS_UNBOND,
            TransactionData::RedeemCheck(_) => gas::GAS_REDEEM_CHECK,
            TransactionData::SetCandidateOnline(_) => gas::GAS_SET_CANDIDATE_ONLINE,
            TransactionData::SetCandidateOffline(_) => gas::GAS_SET_CANDIDATE_OFFLINE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendData {
    pub coin: CoinSymbol,
    pub to: Address,
    pub value: BigUint,
}

impl SendData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 3)?;
        Ok(SendData {
            coin: decode_symbol(&rlp.at(0)?)?,
            to: decode_address(&rlp.at(1)?)?,
            value: decode_amount(&rlp.at(2)?)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(3);
        s.append(&self.coin.as_bytes().to_vec());
        s.append(&self.to.0.to_vec());
        s.append(&amount_bytes(&self.value));
        s.out().to_vec()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SellCoinData {
    pub coin_to_sell: CoinSymbol,
    pub value_to_sell: BigUint,
    pub coin_to_buy: CoinSymbol,
}

impl SellCoinData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 3)?;
        Ok(SellCoinData {
            coin_to_sell: decode_symbol(&rlp.at(0)?)?,
            value_to_sell: decode_amount(&rlp.at(1)?)?,
            coin_to_buy: decode_symbol(&rlp.at(2)?)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(3);
        s.append(&self.coin_to_sell.as_bytes().to_vec());
        s.append(&amount_bytes(&self.value_to_sell));
        s.append(&self.coin_to_buy.as_bytes().to_vec());
        s.out().to_vec()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuyCoinData {
    pub coin_to_buy: CoinSymbol,
    pub value_to_buy: BigUint,
    pub coin_to_sell: CoinSymbol,
}

impl BuyCoinData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 3)?;
        Ok(BuyCoinData {
            coin_to_buy: decode_symbol(&rlp.at(0)?)?,
            value_to_buy: decode_amount(&rlp.at(1)?)?,
            coin_to_sell: decode_symbol(&rlp.at(2)?)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(3);
        s.append(&self.coin_to_buy.as_bytes().to_vec());
        s.append(&amount_bytes(&self.value_to_buy));
        s.append(&self.coin_to_sell.as_bytes().to_vec());
        s.out().to_vec()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateCoinData {
    pub name: String,
    pub symbol: CoinSymbol,
    pub initial_amount: BigUint,
    pub initial_reserve: BigUint,
    pub crr: u32,
}

impl CreateCoinData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 5)?;
        Ok(CreateCoinData {
            name: rlp.val_at(0)?,
            symbol: decode_symbol(&rlp.at(1)?)?,
            initial_amount: decode_amount(&rlp.at(2)?)?,
            initial_reserve: decode_amount(&rlp.at(3)?)?,
            crr: rlp.val_at(4)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(5);
        s.append(&self.name);
        s.append(&self.symbol.as_bytes().to_vec());
        s.append(&amount_bytes(&self.initial_amount));
        s.append(&amount_bytes(&self.initial_reserve));
        s.append(&self.crr);
        s.out().to_vec()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclareCandidacyData {
    pub address: Address,
    pub pub_key: Vec<u8>,
    pub commission: u32,
    pub coin: CoinSymbol,
    pub stake: BigUint,
}

impl DeclareCandidacyData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 5)?;
        Ok(DeclareCandidacyData {
            address: decode_address(&rlp.at(0)?)?,
            pub_key: rlp.val_at(1)?,
            commission: rlp.val_at(2)?,
            coin: decode_symbol(&rlp.at(3)?)?,
            stake: decode_amount(&rlp.at(4)?)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(5);
        s.append(&self.address.0.to_vec());
        s.append(&self.pub_key);
        s.append(&self.commission);
        s.append(&self.coin.as_bytes().to_vec());
        s.append(&amount_bytes(&self.stake));
        s.out().to_vec()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelegateData {
    pub pub_key: Vec<u8>,
    pub coin: CoinSymbol,
    pub stake: BigUint,
}

impl DelegateData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 3)?;
        Ok(DelegateData {
            pub_key: rlp.val_at(0)?,
            coin: decode_symbol(&rlp.at(1)?)?,
            stake: decode_amount(&rlp.at(2)?)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(3);
        s.append(&self.pub_key);
        s.append(&self.coin.as_bytes().to_vec());
        s.append(&amount_bytes(&self.stake));
        s.out().to_vec()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnbondData {
    pub pub_key: Vec<u8>,
    pub coin: CoinSymbol,
    pub value: BigUint,
}

impl UnbondData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 3)?;
        Ok(UnbondData {
            pub_key: rlp.val_at(0)?,
            coin: decode_symbol(&rlp.at(1)?)?,
            value: decode_amount(&rlp.at(2)?)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(3);
        s.append(&self.pub_key);
        s.append(&self.coin.as_bytes().to_vec());
        s.append(&amount_bytes(&self.value));
        s.out().to_vec()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedeemCheckData {
    pub raw_check: Vec<u8>,
    pub proof: Vec<u8>,
}

impl RedeemCheckData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 2)?;
        Ok(RedeemCheckData {
            raw_check: rlp.val_at(0)?,
            proof: rlp.val_at(1)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(2);
        s.append(&self.raw_check);
        s.append(&self.proof);
        s.out().to_vec()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCandidateOnData {
    pub pub_key: Vec<u8>,
}

impl SetCandidateOnData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 1)?;
        Ok(SetCandidateOnData {
            pub_key: rlp.val_at(0)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(1);
        s.append(&self.pub_key);
        s.out().to_vec()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCandidateOffData {
    pub pub_key: Vec<u8>,
}

impl SetCandidateOffData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_items(rlp, 1)?;
        Ok(SetCandidateOffData {
            pub_key: rlp.val_at(0)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(1);
        s.append(&self.pub_key);
        s.out().to_vec()
    }
}

fn expect_items(rlp: &Rlp, count: usize) -> Result<(), DecoderError> {
    if rlp.item_count()? != count {
        return Err(DecoderError::RlpIncorrectListLen);
    }
    Ok(())
}

/// Decodes a coin symbol from its bare ASCII bytes.
pub(crate) fn decode_symbol(rlp: &Rlp) -> Result<CoinSymbol, DecoderError> {
    CoinSymbol::from_bytes(rlp.data()?)
        .ok_or(DecoderError::Custom("coin symbol longer than 10 bytes"))
}

/// Decodes a 20-byte address.
pub(crate) fn decode_address(rlp: &Rlp) -> Result<Address, DecoderError> {
    Address::from_slice(rlp.data()?).ok_or(DecoderError::Custom("address must be 20 bytes"))
}

/// Decodes a non-negative integer from canonical big-endian bytes.
pub(crate) fn decode_amount(rlp: &Rlp) -> Result<BigUint, DecoderError> {
    let bytes = rlp.data()?;
    if bytes.first() == Some(&0) {
        return Err(DecoderError::Custom("non-canonical integer (leading zero)"));
    }
    Ok(BigUint::from_bytes_be(bytes))
}

/// Canonical big-endian bytes of an amount (empty for zero).
pub(crate) fn amount_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}
