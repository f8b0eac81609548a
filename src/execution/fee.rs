/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Fee engine: prices a transaction's commission in the coin it is paid with.
//!
//! Every transaction owes `gas_price · gas · COMMISSION_MULTIPLIER` base
//! units. When the fee coin is not the base coin the charge is converted
//! through the coin's bonding curve: the commission is the coin amount whose
//! sale would release exactly the base-coin figure from the reserve, and the
//! reserve must be able to cover that figure.

use num_bigint::BigUint;

use crate::{
    error::ExecutionError,
    formulas,
    gas::COMMISSION_MULTIPLIER,
    types::CoinSymbol,
    world_state::WorldState,
};

/// A transaction's commission, priced in the fee coin and in base coin.
///
/// The two figures are equal when the fee is paid in base coin.
pub(crate) struct Commission {
    /// Amount charged in the coin the fee is paid with.
    pub in_fee_coin: BigUint,
    /// The same commission expressed in base coin.
    pub in_base_coin: BigUint,
}

/// Base-coin commission owed for `gas` units at `gas_price`.
pub(crate) fn commission_in_base_coin(gas_price: &BigUint, gas: i64) -> BigUint {
    gas_price * BigUint::from(gas as u64) * BigUint::from(COMMISSION_MULTIPLIER)
}

/// Prices the commission in `coin`, verifying reserve sufficiency for
/// non-base fee coins.
pub(crate) fn coin_commission<S: WorldState>(
    ws: &S,
    coin: &CoinSymbol,
    gas_price: &BigUint,
    gas: i64,
) -> Result<Commission, ExecutionError> {
    let in_base_coin = commission_in_base_coin(gas_price, gas);

    if coin.is_base() {
        return Ok(Commission {
            in_fee_coin: in_base_coin.clone(),
            in_base_coin,
        });
    }

    let entry = ws.get_coin(coin).ok_or(ExecutionError::CoinNotExists)?;
    if entry.reserve_balance < in_base_coin {
        return Err(ExecutionError::CoinReserveNotSufficient {
            has: entry.reserve_balance,
            required: in_base_coin,
        });
    }

    let in_fee_coin = formulas::sale_amount(
        &entry.volume,
        &entry.reserve_balance,
        entry.crr,
        &in_base_coin,
    );
    Ok(Commission {
        in_fee_coin,
        in_base_coin,
    })
}
