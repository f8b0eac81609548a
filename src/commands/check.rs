/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Execution of the RedeemCheck command.

use num_bigint::BigUint;

use crate::{
    check::{proof_message, Check},
    crypto,
    error::ExecutionError,
    execution::{fee, state::ExecutionState},
    transaction::{RedeemCheckData, TYPE_REDEEM_CHECK},
    types::Tag,
    world_state::WorldState,
};

/// Redeems an off-chain check: debits the issuer, credits the redeemer.
///
/// The redeem proof is the lock key's signature over the Keccak-256 of the
/// RLP-encoded one-element list holding the redeemer's address; recovering it
/// and comparing against the check's lock key binds this exact redeemer
/// without the lock key ever appearing on-chain before redemption. The gas
/// price is capped at 1 so a redeemer cannot inflate the fee the *issuer*
/// pays.
pub(crate) fn redeem_check<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &RedeemCheckData,
) -> Result<Vec<Tag>, ExecutionError> {
    let check = Check::decode_from_bytes(&data.raw_check)?;
    let issuer = check.sender()?;

    if !state.ws.coin_exists(&check.coin) {
        return Err(ExecutionError::CoinNotExists);
    }

    if check.due_block < state.block_height {
        return Err(ExecutionError::CheckExpired);
    }

    if state.ws.is_check_used(&check.id()) {
        return Err(ExecutionError::CheckUsed);
    }

    if state.tx.gas_price > BigUint::from(1u8) {
        return Err(ExecutionError::TooHighGasPrice);
    }

    let lock_pub_key = check.lock_pub_key()?;

    let proof_pub_key = crypto::ecrecover(&proof_message(&state.sender), &data.proof)?;

    if proof_pub_key != lock_pub_key {
        return Err(ExecutionError::CheckInvalidLock);
    }

    let commission = fee::coin_commission(state.ws, &check.coin, &state.tx.gas_price, state.gas)?;

    let total_tx_cost = &check.value + &commission.in_fee_coin;
    if state.ws.get_balance(&issuer, &check.coin) < total_tx_cost {
        return Err(ExecutionError::InsufficientFunds {
            address: issuer,
            wanted: total_tx_cost,
        });
    }

    if state.deliver() {
        state.ws.use_check(&check.id());
        *state.reward_pool += &commission.in_base_coin;

        if !check.coin.is_base() {
            state.ws.sub_coin_volume(&check.coin, &commission.in_fee_coin);
            state.ws.sub_coin_reserve(&check.coin, &commission.in_base_coin);
        }

        state.ws.sub_balance(&issuer, &check.coin, &total_tx_cost);
        state.ws.add_balance(&state.sender, &check.coin, &check.value);
        state.bump_nonce();
    }

    Ok(vec![
        Tag::new(b"tx.type", vec![TYPE_REDEEM_CHECK]),
        Tag::new(b"tx.from", hex::encode(issuer.0).into_bytes()),
        Tag::new(b"tx.to", hex::encode(state.sender.0).into_bytes()),
        Tag::new(b"tx.coin", check.coin.to_string().into_bytes()),
    ])
}
