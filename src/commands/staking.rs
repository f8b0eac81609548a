/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Execution of the staking commands: DeclareCandidacy, Delegate, Unbond,
//! SetCandidateOnline and SetCandidateOffline.

use crate::{
    error::ExecutionError,
    execution::{fee, state::ExecutionState},
    transaction::{
        DeclareCandidacyData, DelegateData, SetCandidateOffData, SetCandidateOnData, UnbondData,
    },
    types::{CoinSymbol, Tag},
    world_state::{CandidateStatus, WorldState},
};

/// Blocks an unbonded stake stays frozen before release (roughly 31 days).
pub const UNBONDING_PERIOD: u64 = 518_400;

/// Length in bytes of a candidate public key.
pub const CANDIDATE_PUB_KEY_LENGTH: usize = 32;

/// Registers a new validator candidate with its initial self-delegated stake.
/// The candidate starts offline.
pub(crate) fn declare_candidacy<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &DeclareCandidacyData,
) -> Result<Vec<Tag>, ExecutionError> {
    if data.pub_key.len() != CANDIDATE_PUB_KEY_LENGTH {
        return Err(ExecutionError::IncorrectPubKey);
    }

    let commission = fee::coin_commission(state.ws, &data.coin, &state.tx.gas_price, state.gas)?;

    let total_tx_cost = &data.stake + &commission.in_fee_coin;
    if state.ws.get_balance(&state.sender, &data.coin) < total_tx_cost {
        return Err(ExecutionError::InsufficientFunds {
            address: state.sender,
            wanted: total_tx_cost,
        });
    }

    if state.ws.candidate_exists(&data.pub_key) {
        return Err(ExecutionError::CandidateExists);
    }

    if data.commission > 100 {
        return Err(ExecutionError::WrongCommission);
    }

    if state.deliver() {
        *state.reward_pool += &commission.in_fee_coin;

        state.ws.sub_balance(&state.sender, &data.coin, &total_tx_cost);
        state.ws.create_candidate(
            &data.address,
            &data.pub_key,
            data.commission,
            state.block_height,
            &state.sender,
            &data.coin,
            &data.stake,
        );
        state.bump_nonce();
    }

    Ok(Vec::new())
}

/// Adds stake to an existing candidate under the sender's name.
pub(crate) fn delegate<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &DelegateData,
) -> Result<Vec<Tag>, ExecutionError> {
    let commission = fee::coin_commission(state.ws, &data.coin, &state.tx.gas_price, state.gas)?;

    let total_tx_cost = &data.stake + &commission.in_fee_coin;
    if state.ws.get_balance(&state.sender, &data.coin) < total_tx_cost {
        return Err(ExecutionError::InsufficientFunds {
            address: state.sender,
            wanted: total_tx_cost,
        });
    }

    if !state.ws.candidate_exists(&data.pub_key) {
        return Err(ExecutionError::CandidateNotFound);
    }

    if state.deliver() {
        *state.reward_pool += &commission.in_fee_coin;

        state.ws.sub_balance(&state.sender, &data.coin, &total_tx_cost);
        state
            .ws
            .delegate(&state.sender, &data.pub_key, &data.coin, &data.stake);
        state.bump_nonce();
    }

    Ok(Vec::new())
}

/// Moves stake out of a candidate into the frozen-funds schedule; the amount
/// becomes liquid [UNBONDING_PERIOD] blocks later (release is performed by
/// block processing, not here). The fee is paid in base coin.
pub(crate) fn unbond<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &UnbondData,
) -> Result<Vec<Tag>, ExecutionError> {
    let commission = fee::commission_in_base_coin(&state.tx.gas_price, state.gas);

    let base_coin = CoinSymbol::base_coin();
    if state.ws.get_balance(&state.sender, &base_coin) < commission {
        return Err(ExecutionError::InsufficientFunds {
            address: state.sender,
            wanted: commission,
        });
    }

    if !state.ws.candidate_exists(&data.pub_key) {
        return Err(ExecutionError::CandidateNotFound);
    }

    let candidate = state
        .ws
        .get_candidate(&data.pub_key)
        .ok_or(ExecutionError::CandidateNotFound)?;

    let stake = candidate
        .stake_of(&state.sender, &data.coin)
        .ok_or(ExecutionError::StakeNotFound)?;

    if stake.value < data.value {
        return Err(ExecutionError::InsufficientStake);
    }

    if state.deliver() {
        let unbond_at_block = state.block_height + UNBONDING_PERIOD;

        *state.reward_pool += &commission;

        state.ws.sub_balance(&state.sender, &base_coin, &commission);
        state
            .ws
            .sub_stake(&state.sender, &data.pub_key, &data.coin, &data.value);
        state.ws.add_frozen_fund(
            unbond_at_block,
            &state.sender,
            &data.pub_key,
            &data.coin,
            &data.value,
        );
        state.bump_nonce();
    }

    Ok(Vec::new())
}

/// Marks the sender's candidate as eligible for validator selection.
pub(crate) fn set_candidate_online<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &SetCandidateOnData,
) -> Result<Vec<Tag>, ExecutionError> {
    set_candidate_status(state, &data.pub_key, CandidateStatus::Online)
}

/// Takes the sender's candidate out of validator selection.
pub(crate) fn set_candidate_offline<S: WorldState>(
    state: &mut ExecutionState<S>,
    data: &SetCandidateOffData,
) -> Result<Vec<Tag>, ExecutionError> {
    set_candidate_status(state, &data.pub_key, CandidateStatus::Offline)
}

fn set_candidate_status<S: WorldState>(
    state: &mut ExecutionState<S>,
    pub_key: &[u8],
    status: CandidateStatus,
) -> Result<Vec<Tag>, ExecutionError> {
    let commission = fee::commission_in_base_coin(&state.tx.gas_price, state.gas);

    let base_coin = CoinSymbol::base_coin();
    if state.ws.get_balance(&state.sender, &base_coin) < commission {
        return Err(ExecutionError::InsufficientFunds {
            address: state.sender,
            wanted: commission,
        });
    }

    if !state.ws.candidate_exists(pub_key) {
        return Err(ExecutionError::CandidateNotFound);
    }

    let candidate = state
        .ws
        .get_candidate(pub_key)
        .ok_or(ExecutionError::CandidateNotFound)?;

    if candidate.owner_address != state.sender {
        return Err(ExecutionError::IsNotOwnerOfCandidate);
    }

    if state.deliver() {
        *state.reward_pool += &commission;

        state.ws.sub_balance(&state.sender, &base_coin, &commission);
        match status {
            CandidateStatus::Online => state.ws.set_candidate_online(pub_key),
            CandidateStatus::Offline => state.ws.set_candidate_offline(pub_key),
        }
        state.bump_nonce();
    }

    Ok(Vec::new())
}
