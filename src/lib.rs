/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! BondChain Runtime is the **transaction execution core** of the BondChain
//! proof-of-stake network: the pure function that transits from an input
//! world state to the next state, one transaction at a time.
//!
//! ```text
//! f(WS, B, TX) -> (WS', R)
//!
//! WS = World state: balances, nonces, coin registry, candidate set,
//!      frozen funds, used checks
//! B  = Block context: height and the per-block reward pool
//! TX = RLP-encoded transaction
//! R  = Response: outcome code, gas, log, indexed tags
//! ```
//!
//! ### Example
//!
//! ```rust,ignore
//! // prepare a world state handle (ws), an encoded transaction (raw_tx),
//! // the block height and the block's reward pool, and call execute.
//! let response = bondchain_runtime::execute(
//!     &mut ws,
//!     &raw_tx,
//!     bondchain_runtime::ExecutionMode::Deliver,
//!     block_height,
//!     &mut reward_pool,
//! );
//! ```
//!
//! Ten transaction types share one [transition] entry point: plain transfers,
//! conversions against each coin's constant-reserve-ratio bonding curve
//! ([formulas]), coin issuance, the bonded-stake lifecycle, and the redemption
//! of off-chain [checks](check). Execution is deterministic and single
//! threaded per transaction: the [error] codes, the [gas] constants, the
//! curve math and every handler's validation and mutation order are all part
//! of the consensus contract. The persistent store stays behind the
//! [WorldState] seam; decoding lives in [transaction].

pub mod check;

pub mod commands;

pub mod crypto;

pub mod error;
pub use error::{ExecutionError, CODE_OK};

pub(crate) mod execution;

pub mod formulas;

pub mod gas;

pub mod transaction;

pub mod transition;
pub use transition::{execute, ExecutionMode, Response};

pub mod types;
pub use types::{Address, CoinSymbol, Hash, Tag};

pub mod world_state;
pub use world_state::{Candidate, CandidateStatus, CoinEntry, FrozenFund, Stake, WorldState};
