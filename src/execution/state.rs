/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Defines a struct as Execution State which carries one transaction through
//! validation and state mutation.
//!
//! This is the state of the execution model, not the blockchain storage: it
//! borrows the world state and the block reward pool exclusively for the
//! duration of one transaction and never outlives it.

use num_bigint::BigUint;

use crate::{
    transaction::Transaction,
    transition::ExecutionMode,
    types::Address,
    world_state::WorldState,
};

/// Everything a command handler needs to validate and apply one transaction.
pub(crate) struct ExecutionState<'a, S: WorldState> {
    /// Decoded transaction being executed.
    pub tx: &'a Transaction,
    /// Recovered signer of the transaction.
    pub sender: Address,
    /// Gas weight of the transaction's type.
    pub gas: i64,
    /// Check or deliver.
    pub mode: ExecutionMode,
    /// Height of the block the transaction executes in.
    pub block_height: u64,
    /// Exclusive handle to the world state.
    pub ws: &'a mut S,
    /// Per-block commission accumulator, in base coin.
    pub reward_pool: &'a mut BigUint,
}

impl<'a, S: WorldState> ExecutionState<'a, S> {
    /// Whether state effects are applied. In check mode every handler runs
    /// its validations and pricing but leaves the world untouched.
    pub fn deliver(&self) -> bool {
        self.mode == ExecutionMode::Deliver
    }

    /// Records the executed nonce for the sender.
    pub fn bump_nonce(&mut self) {
        self.ws.set_nonce(&self.sender, self.tx.nonce);
    }
}
