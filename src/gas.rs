/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Protocol gas constants.
//!
//! Gas here is not a metered execution budget: each transaction type carries a
//! fixed weight, and the fee charged is
//! `gas_price · gas · COMMISSION_MULTIPLIER` base units (converted through the
//! fee coin's bonding curve when the fee is not paid in base coin). The values
//! are consensus constants.

use num_bigint::BigUint;
use num_traits::Pow;

use crate::types::CoinSymbol;

/// Base units of the smallest denomination per `gas_price · gas` unit.
pub const COMMISSION_MULTIPLIER: u64 = 1_000_000_000;

pub const GAS_SEND: i64 = 10;
pub const GAS_SELL_COIN: i64 = 100;
pub const GAS_BUY_COIN: i64 = 100;
pub const GAS_CREATE_COIN: i64 = 1_000;
pub const GAS_DECLARE_CANDIDACY: i64 = 10_000;
pub const GAS_DELEGATE: i64 = 100;
pub const GAS_UNBOND: i64 = 100;
pub const GAS_REDEEM_CHECK: i64 = 10;
pub const GAS_SET_CANDIDATE_ONLINE: i64 = 100;
pub const GAS_SET_CANDIDATE_OFFLINE: i64 = 100;

/// Decimals of the base coin: one whole unit is `10^18` of the smallest
/// denomination.
pub const BASE_COIN_DECIMALS: u32 = 18;

/// Fixed CreateCoin surcharge in whole base units, by symbol length. Short
/// vanity tickers pay progressively more; lengths 9 and 10 are free.
pub fn coin_symbol_fee(symbol: &CoinSymbol) -> BigUint {
    let whole_units: u64 = match symbol.len() {
        3 => 1_000_000,
        4 => 100_000,
        5 => 10_000,
        6 => 1_000,
        7 => 100,
        8 => 10,
        _ => 0,
    };
    BigUint::from(whole_units) * Pow::pow(&BigUint::from(10u8), BASE_COIN_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_fee_tiers() {
        let fee = |s: &[u8]| coin_symbol_fee(&CoinSymbol::from_bytes(s).unwrap());
        let unit = BigUint::from(10u8).pow(BASE_COIN_DECIMALS);
        assert_eq!(fee(b"ABC"), BigUint::from(1_000_000u64) * &unit);
        assert_eq!(fee(b"ABCD"), BigUint::from(100_000u64) * &unit);
        assert_eq!(fee(b"ABCDE"), BigUint::from(10_000u64) * &unit);
        assert_eq!(fee(b"ABCDEF"), BigUint::from(1_000u64) * &unit);
        assert_eq!(fee(b"ABCDEFG"), BigUint::from(100u64) * &unit);
        assert_eq!(fee(b"ABCDEFGH"), BigUint::from(10u64) * &unit);
        assert_eq!(fee(b"ABCDEFGHI"), BigUint::from(0u64));
        assert_eq!(fee(b"ABCDEFGHIJ"), BigUint::from(0u64));
    }
}
