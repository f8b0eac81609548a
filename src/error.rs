/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! error defines the set of failure outcomes a transaction execution can end in.
//!
//! Errors are values: every failure carries a numeric wire code (stable across
//! validators, part of the consensus contract) and renders through `Display`
//! into the human-readable log of a [Response](crate::transition::Response).

use num_bigint::BigUint;
use thiserror::Error;

use crate::types::Address;

/// Descriptive error definitions of a transaction execution.
///
/// Validation order per handler decides which variant an invalid transaction
/// maps to; the first failing check wins.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// Encoded transaction exceeds the maximum length.
    #[error("TX length is over {} bytes", crate::transaction::MAX_TX_LENGTH)]
    TxTooLarge,

    /// Transaction, check or proof bytes failed to decode or recover.
    #[error("{0}")]
    Decode(String),

    /// Payload field exceeds the maximum length.
    #[error("TX payload length is over {} bytes", crate::transaction::MAX_PAYLOAD_LENGTH)]
    TxPayloadTooLarge,

    /// Service data field exceeds the maximum length.
    #[error("TX service data length is over {} bytes", crate::transaction::MAX_SERVICE_DATA_LENGTH)]
    TxServiceDataTooLarge,

    /// Nonce is not the sender's next nonce.
    #[error("Unexpected nonce. Expected: {expected}, got {got}.")]
    WrongNonce { expected: u64, got: u64 },

    /// Paying account holds less than the transaction's total cost.
    #[error("Insufficient funds for sender account: {address}. Wanted {wanted}")]
    InsufficientFunds { address: Address, wanted: BigUint },

    /// Referenced coin is not in the registry.
    #[error("Coin not exists")]
    CoinNotExists,

    /// The fee coin's reserve cannot cover the base-coin commission.
    #[error("Coin reserve balance is not sufficient for transaction. Has: {has}, required {required}")]
    CoinReserveNotSufficient { has: BigUint, required: BigUint },

    /// CreateCoin for a symbol that is already registered.
    #[error("Coin already exists")]
    CoinAlreadyExists,

    /// Symbol does not match the allowed pattern.
    #[error("Invalid coin symbol. Should match ^[A-Z0-9]{{3,10}}$")]
    InvalidCoinSymbol,

    /// Constant reserve ratio outside [10, 100].
    #[error("Constant Reserve Ratio should be between 10 and 100")]
    WrongCrr,

    /// Conversion where both sides are the same coin.
    #[error("\"From\" coin equals to \"to\" coin")]
    CrossConvert,

    /// DeclareCandidacy for a public key that already has a candidate.
    #[error("Candidate with such public key already exists")]
    CandidateExists,

    /// Referenced candidate public key is unknown.
    #[error("Candidate with such public key not found")]
    CandidateNotFound,

    /// Candidate control transaction not signed by the candidate's owner.
    #[error("Sender is not an owner of a candidate")]
    IsNotOwnerOfCandidate,

    /// Candidate public key is not 32 bytes.
    #[error("Incorrect PubKey")]
    IncorrectPubKey,

    /// Candidate commission outside [0, 100].
    #[error("Commission should be between 0 and 100")]
    WrongCommission,

    /// Unbond from a candidate the sender has no stake in.
    #[error("Stake of current user not found")]
    StakeNotFound,

    /// Unbond of more than the live stake.
    #[error("Insufficient stake for sender account")]
    InsufficientStake,

    /// Check's due block is in the past.
    #[error("Check expired")]
    CheckExpired,

    /// Check has already been redeemed.
    #[error("Check already redeemed")]
    CheckUsed,

    /// RedeemCheck with a gas price above 1.
    #[error("Gas price for check is limited to 1")]
    TooHighGasPrice,

    /// Redeem proof does not recover to the check's lock key.
    #[error("Invalid proof")]
    CheckInvalidLock,

    /// Transaction type tag is not recognized.
    #[error("Unknown transaction type")]
    UnknownTransactionType,
}

/// Wire code of a successful execution.
pub const CODE_OK: u32 = 0;

impl ExecutionError {
    /// Numeric wire code of this failure.
    pub fn code(&self) -> u32 {
        match self {
            ExecutionError::WrongNonce { .. } => 101,
            ExecutionError::CoinNotExists => 102,
            ExecutionError::CoinReserveNotSufficient { .. } => 103,
            ExecutionError::TxTooLarge => 105,
            ExecutionError::Decode(_) => 106,
            ExecutionError::InsufficientFunds { .. } => 107,
            ExecutionError::UnknownTransactionType => 108,
            ExecutionError::TxPayloadTooLarge => 109,
            ExecutionError::TxServiceDataTooLarge => 110,
            ExecutionError::CoinAlreadyExists => 201,
            ExecutionError::WrongCrr => 202,
            ExecutionError::InvalidCoinSymbol => 203,
            ExecutionError::CrossConvert => 301,
            ExecutionError::CandidateExists => 401,
            ExecutionError::WrongCommission => 402,
            ExecutionError::CandidateNotFound => 403,
            ExecutionError::StakeNotFound => 404,
            ExecutionError::InsufficientStake => 405,
            ExecutionError::IsNotOwnerOfCandidate => 406,
            ExecutionError::IncorrectPubKey => 407,
            ExecutionError::CheckInvalidLock => 501,
            ExecutionError::CheckExpired => 502,
            ExecutionError::CheckUsed => 503,
            ExecutionError::TooHighGasPrice => 504,
        }
    }
}

impl From<rlp::DecoderError> for ExecutionError {
    fn from(err: rlp::DecoderError) -> Self {
        ExecutionError::Decode(err.to_string())
    }
}

impl From<crate::crypto::CryptoError> for ExecutionError {
    fn from(err: crate::crypto::CryptoError) -> Self {
        ExecutionError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errors = [
            ExecutionError::TxTooLarge,
            ExecutionError::Decode(String::new()),
            ExecutionError::TxPayloadTooLarge,
            ExecutionError::TxServiceDataTooLarge,
            ExecutionError::WrongNonce {
                expected: 1,
                got: 2,
            },
            ExecutionError::InsufficientFunds {
                address: Address::default(),
                wanted: BigUint::default(),
            },
            ExecutionError::CoinNotExists,
            ExecutionError::CoinReserveNotSufficient {
                has: BigUint::default(),
                required: BigUint::default(),
            },
            ExecutionError::CoinAlreadyExists,
            ExecutionError::InvalidCoinSymbol,
            ExecutionError::WrongCrr,
            ExecutionError::CrossConvert,
            ExecutionError::CandidateExists,
            ExecutionError::CandidateNotFound,
            ExecutionError::IsNotOwnerOfCandidate,
            ExecutionError::IncorrectPubKey,
            ExecutionError::WrongCommission,
            ExecutionError::StakeNotFound,
            ExecutionError::InsufficientStake,
            ExecutionError::CheckExpired,
            ExecutionError::CheckUsed,
            ExecutionError::TooHighGasPrice,
            ExecutionError::CheckInvalidLock,
            ExecutionError::UnknownTransactionType,
        ];
        let mut codes: Vec<u32> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&CODE_OK));
    }
}
