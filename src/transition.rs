/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Implementation of the state transition function.
//!
//! [execute] is the entry point to transit the world state by one
//! transaction. It intakes the encoded transaction with the current block
//! height and a mutable reward-pool accumulator, executes over the
//! [WorldState], and commits a deterministic change of state which can be
//! inputted to the next transition.
//!
//! ```text
//! f(WS, B, TX) -> (WS', R)
//!
//! WS = World state: balances, nonces, coin registry, candidates,
//!      frozen funds, used checks
//! B  = Block context: height and the block's reward pool
//! TX = One RLP-encoded transaction
//! R  = Response: outcome code, gas, log, indexed tags
//! ```
//!
//! In [check mode](ExecutionMode::Check) the transaction is validated and
//! priced but the world state, reward pool and nonces are left untouched; in
//! [deliver mode](ExecutionMode::Deliver) a valid transaction's effects are
//! applied atomically before the response is produced.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ExecutionError, CODE_OK},
    execution::execute::run_tx,
    types::Tag,
    world_state::WorldState,
};

/// Whether execution may mutate the world state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Mempool admission: validate and price only, enforce no nonce ordering.
    Check,
    /// Block execution: apply state effects and bump the sender's nonce.
    Deliver,
}

/// Outcome of executing one transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// `0` for success, or the failing check's wire code.
    pub code: u32,
    /// Reserved for handler return data; empty in the current protocol.
    pub data: Vec<u8>,
    /// Human-readable failure description; empty on success.
    pub log: String,
    /// Reserved for non-deterministic diagnostics; never part of consensus.
    pub info: String,
    pub gas_wanted: i64,
    pub gas_used: i64,
    /// Key/value pairs for external indexing.
    pub tags: Vec<Tag>,
}

impl Response {
    pub(crate) fn ok(gas: i64, tags: Vec<Tag>) -> Self {
        Response {
            code: CODE_OK,
            gas_wanted: gas,
            gas_used: gas,
            tags,
            ..Response::default()
        }
    }

    pub(crate) fn error(err: &ExecutionError) -> Self {
        Response {
            code: err.code(),
            log: err.to_string(),
            ..Response::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }
}

/// Executes one encoded transaction against the world state.
///
/// `reward_pool` is the per-block commission accumulator in base coin; the
/// executor only adds to it, and only in deliver mode. On any non-OK response
/// the world state, the reward pool and the sender's nonce are untouched.
pub fn execute<S: WorldState>(
    ws: &mut S,
    raw_tx: &[u8],
    mode: ExecutionMode,
    block_height: u64,
    reward_pool: &mut BigUint,
) -> Response {
    run_tx(ws, raw_tx, mode, block_height, reward_pool)
}
