/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Execution of the coin commands: CreateCoin, SellCoin and BuyCoin.
//!
//! The conversion handlers interleave fee burning and trade mutation in a
//! fixed order. SellCoin burns the commission out of the sold coin *before*
//! pricing the trade, so the trade executes against the post-fee curve;
//! BuyCoin prices the trade first and burns the commission *after* applying
//! the trade's volume and reserve shifts. Reordering either would change
//! every validator's results.

use num_bigint::BigUint;

use crate::{
    error::ExecutionError,
    execution::{fee, state::ExecutionState},
    formulas,
    gas::coin_symbol_fee,
    transaction::{
        data::amount_bytes, BuyCoinData, CreateCoinData, SellCoinData, TYPE_BUY_COIN,
        TYPE_CREATE_COIN, TYPE_SELL_COIN,
    },
    types::{CoinSymbol, Tag},
    world_state::WorldState,
};

/// Registers a new coin backed by a base-coin reserve and credits the whole
/// initial supply to the creator. On top of the gas fee, short symbols pay a
/// fixed surcharge.
pub(crate) fn create_coin<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &CreateCoinData,
) -> Result<Vec<Tag>, ExecutionError> {
    if !data.symbol.is_valid() {
        return Err(ExecutionError::InvalidCoinSymbol);
    }

    let commission =
        fee::commission_in_base_coin(&state.tx.gas_price, state.gas) + coin_symbol_fee(&data.symbol);

    let total_tx_cost = &data.initial_reserve + &commission;
    let base_coin = CoinSymbol::base_coin();
    if state.ws.get_balance(&state.sender, &base_coin) < total_tx_cost {
        return Err(ExecutionError::InsufficientFunds {
            address: state.sender,
            wanted: total_tx_cost,
        });
    }

    if state.ws.coin_exists(&data.symbol) {
        return Err(ExecutionError::CoinAlreadyExists);
    }

    if !(10..=100).contains(&data.crr) {
        return Err(ExecutionError::WrongCrr);
    }

    if state.deliver() {
        *state.reward_pool += &commission;

        state.ws.sub_balance(&state.sender, &base_coin, &total_tx_cost);
        state.ws.create_coin(
            &data.symbol,
            &data.name,
            &data.initial_amount,
            data.crr,
            &data.initial_reserve,
            &state.sender,
        );
        state
            .ws
            .add_balance(&state.sender, &data.symbol, &data.initial_amount);
        state.bump_nonce();
    }

    Ok(vec![
        Tag::new(b"tx.type", vec![TYPE_CREATE_COIN]),
        Tag::new(b"tx.from", hex::encode(state.sender.0).into_bytes()),
        Tag::new(b"tx.coin", data.symbol.to_string().into_bytes()),
    ])
}

/// Converts a fixed amount of the sold coin into as much of the bought coin
/// as the curves yield, routing through the base coin when neither side is
/// base.
pub(crate) fn sell_coin<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &SellCoinData,
) -> Result<Vec<Tag>, ExecutionError> {
    if data.coin_to_sell == data.coin_to_buy {
        return Err(ExecutionError::CrossConvert);
    }
    if !state.ws.coin_exists(&data.coin_to_sell) {
        return Err(ExecutionError::CoinNotExists);
    }
    if !state.ws.coin_exists(&data.coin_to_buy) {
        return Err(ExecutionError::CoinNotExists);
    }

    let commission =
        fee::coin_commission(state.ws, &data.coin_to_sell, &state.tx.gas_price, state.gas)?;

    let total_tx_cost = &data.value_to_sell + &commission.in_fee_coin;
    if state.ws.get_balance(&state.sender, &data.coin_to_sell) < total_tx_cost {
        return Err(ExecutionError::InsufficientFunds {
            address: state.sender,
            wanted: total_tx_cost,
        });
    }

    // The fee burn lands before the trade is priced: delivery sells against
    // the post-commission curve.
    if state.deliver() {
        *state.reward_pool += &commission.in_base_coin;

        state
            .ws
            .sub_balance(&state.sender, &data.coin_to_sell, &total_tx_cost);

        if !data.coin_to_sell.is_base() {
            state
                .ws
                .sub_coin_volume(&data.coin_to_sell, &commission.in_fee_coin);
            state
                .ws
                .sub_coin_reserve(&data.coin_to_sell, &commission.in_base_coin);
        }
    }

    let value: BigUint;

    if data.coin_to_sell.is_base() {
        let coin = state
            .ws
            .get_coin(&data.coin_to_buy)
            .ok_or(ExecutionError::CoinNotExists)?;

        value = formulas::purchase_return(
            &coin.volume,
            &coin.reserve_balance,
            coin.crr,
            &data.value_to_sell,
        );

        if state.deliver() {
            state.ws.add_coin_volume(&data.coin_to_buy, &value);
            state
                .ws
                .add_coin_reserve(&data.coin_to_buy, &data.value_to_sell);
        }
    } else if data.coin_to_buy.is_base() {
        let coin = state
            .ws
            .get_coin(&data.coin_to_sell)
            .ok_or(ExecutionError::CoinNotExists)?;

        value = formulas::sale_return(
            &coin.volume,
            &coin.reserve_balance,
            coin.crr,
            &data.value_to_sell,
        );

        if state.deliver() {
            state
                .ws
                .sub_coin_volume(&data.coin_to_sell, &data.value_to_sell);
            state.ws.sub_coin_reserve(&data.coin_to_sell, &value);
        }
    } else {
        let coin_from = state
            .ws
            .get_coin(&data.coin_to_sell)
            .ok_or(ExecutionError::CoinNotExists)?;
        let coin_to = state
            .ws
            .get_coin(&data.coin_to_buy)
            .ok_or(ExecutionError::CoinNotExists)?;

        let base_coin_value = formulas::sale_return(
            &coin_from.volume,
            &coin_from.reserve_balance,
            coin_from.crr,
            &data.value_to_sell,
        );
        value = formulas::purchase_return(
            &coin_to.volume,
            &coin_to.reserve_balance,
            coin_to.crr,
            &base_coin_value,
        );

        if state.deliver() {
            state.ws.add_coin_volume(&data.coin_to_buy, &value);
            state
                .ws
                .sub_coin_volume(&data.coin_to_sell, &data.value_to_sell);

            state
                .ws
                .add_coin_reserve(&data.coin_to_buy, &base_coin_value);
            state
                .ws
                .sub_coin_reserve(&data.coin_to_sell, &base_coin_value);
        }
    }

    if state.deliver() {
        state.ws.add_balance(&state.sender, &data.coin_to_buy, &value);
        state.bump_nonce();
    }

    Ok(vec![
        Tag::new(b"tx.type", vec![TYPE_SELL_COIN]),
        Tag::new(b"tx.from", hex::encode(state.sender.0).into_bytes()),
        Tag::new(b"tx.coin_to_buy", data.coin_to_buy.to_string().into_bytes()),
        Tag::new(
            b"tx.coin_to_sell",
            data.coin_to_sell.to_string().into_bytes(),
        ),
        Tag::new(b"tx.return", amount_bytes(&value)),
    ])
}

/// Converts into a fixed amount of the bought coin, charging the sender
/// whatever amount of the sold coin the curves require.
pub(crate) fn buy_coin<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &BuyCoinData,
) -> Result<Vec<Tag>, ExecutionError> {
    if data.coin_to_sell == data.coin_to_buy {
        return Err(ExecutionError::CrossConvert);
    }
    if !state.ws.coin_exists(&data.coin_to_sell) {
        return Err(ExecutionError::CoinNotExists);
    }
    if !state.ws.coin_exists(&data.coin_to_buy) {
        return Err(ExecutionError::CoinNotExists);
    }

    // Commission is priced against the pristine curve, but burned only after
    // the trade's shifts are applied below.
    let commission =
        fee::coin_commission(state.ws, &data.coin_to_sell, &state.tx.gas_price, state.gas)?;

    let value: BigUint;

    if data.coin_to_sell.is_base() {
        let coin = state
            .ws
            .get_coin(&data.coin_to_buy)
            .ok_or(ExecutionError::CoinNotExists)?;

        value = formulas::purchase_amount(
            &coin.volume,
            &coin.reserve_balance,
            coin.crr,
            &data.value_to_buy,
        );

        check_conversion_funds(state, data, &value, &commission.in_fee_coin)?;

        if state.deliver() {
            state.ws.sub_balance(&state.sender, &data.coin_to_sell, &value);
            state
                .ws
                .add_coin_volume(&data.coin_to_buy, &data.value_to_buy);
            state.ws.add_coin_reserve(&data.coin_to_buy, &value);
        }
    } else if data.coin_to_buy.is_base() {
        let coin = state
            .ws
            .get_coin(&data.coin_to_sell)
            .ok_or(ExecutionError::CoinNotExists)?;

        // Both the bought base and the fee burn drain the sold coin's
        // reserve; the reserve must cover their sum.
        check_reserve_extraction(&coin.reserve_balance, &data.value_to_buy, &commission.in_base_coin)?;

        value = formulas::sale_amount(
            &coin.volume,
            &coin.reserve_balance,
            coin.crr,
            &data.value_to_buy,
        );

        check_conversion_funds(state, data, &value, &commission.in_fee_coin)?;

        if state.deliver() {
            state.ws.sub_balance(&state.sender, &data.coin_to_sell, &value);
            state.ws.sub_coin_volume(&data.coin_to_sell, &value);
            state
                .ws
                .sub_coin_reserve(&data.coin_to_sell, &data.value_to_buy);
        }
    } else {
        let coin_from = state
            .ws
            .get_coin(&data.coin_to_sell)
            .ok_or(ExecutionError::CoinNotExists)?;
        let coin_to = state
            .ws
            .get_coin(&data.coin_to_buy)
            .ok_or(ExecutionError::CoinNotExists)?;

        let base_coin_needed = formulas::purchase_amount(
            &coin_to.volume,
            &coin_to.reserve_balance,
            coin_to.crr,
            &data.value_to_buy,
        );

        check_reserve_extraction(
            &coin_from.reserve_balance,
            &base_coin_needed,
            &commission.in_base_coin,
        )?;

        value = formulas::sale_amount(
            &coin_from.volume,
            &coin_from.reserve_balance,
            coin_from.crr,
            &base_coin_needed,
        );

        check_conversion_funds(state, data, &value, &commission.in_fee_coin)?;

        if state.deliver() {
            state.ws.sub_balance(&state.sender, &data.coin_to_sell, &value);

            state
                .ws
                .add_coin_volume(&data.coin_to_buy, &data.value_to_buy);
            state.ws.sub_coin_volume(&data.coin_to_sell, &value);

            state
                .ws
                .add_coin_reserve(&data.coin_to_buy, &base_coin_needed);
            state
                .ws
                .sub_coin_reserve(&data.coin_to_sell, &base_coin_needed);
        }
    }

    if state.deliver() {
        *state.reward_pool += &commission.in_base_coin;

        state
            .ws
            .sub_balance(&state.sender, &data.coin_to_sell, &commission.in_fee_coin);

        if !data.coin_to_sell.is_base() {
            state
                .ws
                .sub_coin_volume(&data.coin_to_sell, &commission.in_fee_coin);
            state
                .ws
                .sub_coin_reserve(&data.coin_to_sell, &commission.in_base_coin);
        }

        state.ws.add_balance(&state.sender, &data.coin_to_buy, &value);
        state.bump_nonce();
    }

    Ok(vec![
        Tag::new(b"tx.type", vec![TYPE_BUY_COIN]),
        Tag::new(b"tx.from", hex::encode(state.sender.0).into_bytes()),
        Tag::new(b"tx.coin_to_buy", data.coin_to_buy.to_string().into_bytes()),
        Tag::new(
            b"tx.coin_to_sell",
            data.coin_to_sell.to_string().into_bytes(),
        ),
        Tag::new(b"tx.return", amount_bytes(&value)),
    ])
}

fn check_reserve_extraction(
    reserve: &BigUint,
    base_out: &BigUint,
    fee_in_base: &BigUint,
) -> Result<(), ExecutionError> {
    let required = base_out + fee_in_base;
    if *reserve < required {
        return Err(ExecutionError::CoinReserveNotSufficient {
            has: reserve.clone(),
            required,
        });
    }
    Ok(())
}

fn check_conversion_funds<S: WorldState>(
    state: &ExecutionState<S>,
    data: &BuyCoinData,
    value: &BigUint,
    commission: &BigUint,
) -> Result<(), ExecutionError> {
    let total_tx_cost = value + commission;
    if state.ws.get_balance(&state.sender, &data.coin_to_sell) < total_tx_cost {
        return Err(ExecutionError::InsufficientFunds {
            address: state.sender,
            wanted: total_tx_cost,
        });
    }
    Ok(())
}
