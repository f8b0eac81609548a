/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Execution of the Send command.

use crate::{
    error::ExecutionError,
    execution::{fee, state::ExecutionState},
    transaction::{SendData, TYPE_SEND},
    types::Tag,
    world_state::WorldState,
};

/// Transfers `value` of one coin to another account. The fee is paid in the
/// transferred coin; for a non-base coin the fee is burned out of the coin's
/// volume against its reserve.
pub(crate) fn send<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &SendData,
) -> Result<Vec<Tag>, ExecutionError> {
    if !state.ws.coin_exists(&data.coin) {
        return Err(ExecutionError::CoinNotExists);
    }

    let commission = fee::coin_commission(state.ws, &data.coin, &state.tx.gas_price, state.gas)?;

    let total_tx_cost = &data.value + &commission.in_fee_coin;
    if state.ws.get_balance(&state.sender, &data.coin) < total_tx_cost {
        return Err(ExecutionError::InsufficientFunds {
            address: state.sender,
            wanted: total_tx_cost,
        });
    }

    if state.deliver() {
        *state.reward_pool += &commission.in_base_coin;

        if !data.coin.is_base() {
            state.ws.sub_coin_volume(&data.coin, &commission.in_fee_coin);
            state.ws.sub_coin_reserve(&data.coin, &commission.in_base_coin);
        }

        state.ws.sub_balance(&state.sender, &data.coin, &total_tx_cost);
        state.ws.add_balance(&data.to, &data.coin, &data.value);
        state.bump_nonce();
    }

    Ok(vec![
        Tag::new(b"tx.type", vec![TYPE_SEND]),
        Tag::new(b"tx.from", hex::encode(state.sender.0).into_bytes()),
        Tag::new(b"tx.to", hex::encode(data.to.0).into_bytes()),
        Tag::new(b"tx.coin", data.coin.to_string().into_bytes()),
    ])
}
