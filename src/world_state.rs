/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! The world-state seam between the executor and the persistent store.
//!
//! The executor never talks to storage directly; it drives an exclusive
//! mutable [WorldState] handle for the duration of one transaction. All
//! mutating operations are called only after every validation has passed, so
//! implementations may treat underflow (subtracting more than is present) as a
//! programming error.

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::types::{Address, CoinSymbol, Hash};

/// Registry entry of a non-base coin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinEntry {
    pub symbol: CoinSymbol,
    pub name: String,
    /// Outstanding supply.
    pub volume: BigUint,
    /// Base-coin reserve backing the supply.
    pub reserve_balance: BigUint,
    /// Constant reserve ratio, percent in [10, 100].
    pub crr: u32,
    pub creator: Address,
}

/// Validator-candidate status toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    Online,
    Offline,
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateStatus::Online => write!(f, "online"),
            CandidateStatus::Offline => write!(f, "offline"),
        }
    }
}

/// A delegator's bonded amount under a candidate, in one coin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stake {
    pub owner: Address,
    pub coin: CoinSymbol,
    pub value: BigUint,
}

/// Validator candidate, uniquely identified by its 32-byte public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub pub_key: Vec<u8>,
    pub owner_address: Address,
    /// Reward commission, percent in [0, 100].
    pub commission: u32,
    pub created_at_block: u64,
    pub status: CandidateStatus,
    pub stakes: Vec<Stake>,
}

impl Candidate {
    /// The delegator's live stake in `coin`, if any.
    pub fn stake_of(&self, owner: &Address, coin: &CoinSymbol) -> Option<&Stake> {
        self.stakes
            .iter()
            .find(|stake| stake.owner == *owner && stake.coin == *coin)
    }
}

/// Unbonded amount pending release at a future block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenFund {
    pub address: Address,
    pub candidate_key: Vec<u8>,
    pub coin: CoinSymbol,
    pub value: BigUint,
}

/// Operations the executor requires from the world state.
///
/// The base coin is implicit: it has no [CoinEntry], `coin_exists` is true for
/// it, and the coin-registry mutations are never called with it.
pub trait WorldState {
    fn get_balance(&self, address: &Address, coin: &CoinSymbol) -> BigUint;
    fn add_balance(&mut self, address: &Address, coin: &CoinSymbol, value: &BigUint);
    fn sub_balance(&mut self, address: &Address, coin: &CoinSymbol, value: &BigUint);

    /// Number of transactions delivered from `address`; 0 for a fresh account.
    fn get_nonce(&self, address: &Address) -> u64;
    fn set_nonce(&mut self, address: &Address, nonce: u64);

    fn coin_exists(&self, symbol: &CoinSymbol) -> bool;
    fn get_coin(&self, symbol: &CoinSymbol) -> Option<CoinEntry>;
    #[allow(clippy::too_many_arguments)]
    fn create_coin(
        &mut self,
        symbol: &CoinSymbol,
        name: &str,
        volume: &BigUint,
        crr: u32,
        reserve: &BigUint,
        creator: &Address,
    );
    fn add_coin_volume(&mut self, symbol: &CoinSymbol, value: &BigUint);
    fn sub_coin_volume(&mut self, symbol: &CoinSymbol, value: &BigUint);
    fn add_coin_reserve(&mut self, symbol: &CoinSymbol, value: &BigUint);
    fn sub_coin_reserve(&mut self, symbol: &CoinSymbol, value: &BigUint);

    fn candidate_exists(&self, pub_key: &[u8]) -> bool;
    fn get_candidate(&self, pub_key: &[u8]) -> Option<Candidate>;
    #[allow(clippy::too_many_arguments)]
    fn create_candidate(
        &mut self,
        owner_address: &Address,
        pub_key: &[u8],
        commission: u32,
        created_at_block: u64,
        initial_delegator: &Address,
        coin: &CoinSymbol,
        stake: &BigUint,
    );
    fn set_candidate_online(&mut self, pub_key: &[u8]);
    fn set_candidate_offline(&mut self, pub_key: &[u8]);

    /// Adds `value` to the delegator's stake under the candidate, creating the
    /// stake if absent.
    fn delegate(&mut self, address: &Address, pub_key: &[u8], coin: &CoinSymbol, value: &BigUint);
    fn sub_stake(&mut self, address: &Address, pub_key: &[u8], coin: &CoinSymbol, value: &BigUint);

    /// Schedules `value` to become liquid for `address` at `block`.
    fn add_frozen_fund(
        &mut self,
        block: u64,
        address: &Address,
        pub_key: &[u8],
        coin: &CoinSymbol,
        value: &BigUint,
    );

    fn is_check_used(&self, id: &Hash) -> bool;
    fn use_check(&mut self, id: &Hash);
}
