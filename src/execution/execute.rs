/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Envelope validation and typed dispatch.
//!
//! Control flow is strictly linear: size checks, decode, sender recovery,
//! nonce check (deliver only), then one command handler per transaction type.
//! The first failing validation decides the response code; handlers mutate
//! the world state only after all of their validations pass, and never in
//! check mode.

use num_bigint::BigUint;

use crate::{
    commands,
    error::ExecutionError,
    execution::state::ExecutionState,
    transaction::{
        Transaction, TransactionData, MAX_PAYLOAD_LENGTH, MAX_SERVICE_DATA_LENGTH, MAX_TX_LENGTH,
    },
    transition::{ExecutionMode, Response},
    types::Tag,
    world_state::WorldState,
};

/// Validates and executes one encoded transaction against the world state.
pub(crate) fn run_tx<S: WorldState>(
    ws: &mut S,
    raw_tx: &[u8],
    mode: ExecutionMode,
    block_height: u64,
    reward_pool: &mut BigUint,
) -> Response {
    if raw_tx.len() > MAX_TX_LENGTH {
        return Response::error(&ExecutionError::TxTooLarge);
    }

    let tx = match Transaction::decode_from_bytes(raw_tx) {
        Ok(tx) => tx,
        Err(err) => return Response::error(&err),
    };

    if mode == ExecutionMode::Deliver {
        tracing::info!(tx = %tx, "deliver tx");
    }

    if tx.payload.len() > MAX_PAYLOAD_LENGTH {
        return Response::error(&ExecutionError::TxPayloadTooLarge);
    }

    if tx.service_data.len() > MAX_SERVICE_DATA_LENGTH {
        return Response::error(&ExecutionError::TxServiceDataTooLarge);
    }

    let sender = match tx.sender() {
        Ok(sender) => sender,
        Err(err) => return Response::error(&err),
    };

    // The nonce is not checked in check mode: that allows a mempool to accept
    // several consecutive transactions from one account for the same block.
    if mode == ExecutionMode::Deliver {
        let expected = ws.get_nonce(&sender) + 1;
        if tx.nonce != expected {
            return Response::error(&ExecutionError::WrongNonce {
                expected,
                got: tx.nonce,
            });
        }
    }

    let Some(data) = tx.data.clone() else {
        return Response::error(&ExecutionError::UnknownTransactionType);
    };
    let gas = data.gas();

    let mut state = ExecutionState {
        tx: &tx,
        sender,
        gas,
        mode,
        block_height,
        ws,
        reward_pool,
    };

    let result: Result<Vec<Tag>, ExecutionError> = match &data {
        TransactionData::Send(data) => commands::account::send(&mut state, data),
        TransactionData::SellCoin(data) => commands::coin::sell_coin(&mut state, data),
        TransactionData::BuyCoin(data) => commands::coin::buy_coin(&mut state, data),
        TransactionData::CreateCoin(data) => commands::coin::create_coin(&mut state, data),
        TransactionData::DeclareCandidacy(data) => {
            commands::staking::declare_candidacy(&mut state, data)
        }
        TransactionData::Delegate(data) => commands::staking::delegate(&mut state, data),
        TransactionData::Unbond(data) => commands::staking::unbond(&mut state, data),
        TransactionData::RedeemCheck(data) => commands::check::redeem_check(&mut state, data),
        TransactionData::SetCandidateOnline(data) => {
            commands::staking::set_candidate_online(&mut state, data)
        }
        TransactionData::SetCandidateOffline(data) => {
            commands::staking::set_candidate_offline(&mut state, data)
        }
    };

    match result {
        Ok(tags) => Response::ok(gas, tags),
        Err(err) => Response::error(&err),
    }
}
