//! Shared test fixtures: an in-memory world state and signed-artifact
//! builders.

// Not every test binary exercises every helper.
#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use libsecp256k1::SecretKey;
use num_bigint::BigUint;
use num_traits::Pow;

use bondchain_runtime::{
    check::Check,
    crypto,
    transaction::Transaction,
    types::{Address, CoinSymbol, Hash},
    world_state::{Candidate, CandidateStatus, CoinEntry, FrozenFund, Stake, WorldState},
};

/// In-memory [WorldState] with fully ordered containers, so whole-state
/// equality can assert that failed or check-mode executions left nothing
/// behind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulateWorldState {
    pub balances: BTreeMap<(Address, CoinSymbol), BigUint>,
    pub nonces: BTreeMap<Address, u64>,
    pub coins: BTreeMap<CoinSymbol, CoinEntry>,
    pub candidates: BTreeMap<Vec<u8>, Candidate>,
    pub frozen_funds: BTreeMap<u64, Vec<FrozenFund>>,
    pub used_checks: BTreeSet<Hash>,
}

impl SimulateWorldState {
    pub fn set_balance(&mut self, address: Address, coin: CoinSymbol, value: BigUint) {
        self.balances.insert((address, coin), value);
    }
}

impl WorldState for SimulateWorldState {
    fn get_balance(&self, address: &Address, coin: &CoinSymbol) -> BigUint {
        self.balances
            .get(&(*address, *coin))
            .cloned()
            .unwrap_or_default()
    }

    fn add_balance(&mut self, address: &Address, coin: &CoinSymbol, value: &BigUint) {
        *self.balances.entry((*address, *coin)).or_default() += value;
    }

    fn sub_balance(&mut self, address: &Address, coin: &CoinSymbol, value: &BigUint) {
        let balance = self
            .balances
            .entry((*address, *coin))
            .or_default();
        *balance -= value;
    }

    fn get_nonce(&self, address: &Address) -> u64 {
        self.nonces.get(address).copied().unwrap_or_default()
    }

    fn set_nonce(&mut self, address: &Address, nonce: u64) {
        self.nonces.insert(*address, nonce);
    }

    fn coin_exists(&self, symbol: &CoinSymbol) -> bool {
        symbol.is_base() || self.coins.contains_key(symbol)
    }

    fn get_coin(&self, symbol: &CoinSymbol) -> Option<CoinEntry> {
        self.coins.get(symbol).cloned()
    }

    fn create_coin(
        &mut self,
        symbol: &CoinSymbol,
        name: &str,
        volume: &BigUint,
        crr: u32,
        reserve: &BigUint,
        creator: &Address,
    ) {
        self.coins.insert(
            *symbol,
            CoinEntry {
                symbol: *symbol,
                name: name.to_string(),
                volume: volume.clone(),
                reserve_balance: reserve.clone(),
                crr,
                creator: *creator,
            },
        );
    }

    fn add_coin_volume(&mut self, symbol: &CoinSymbol, value: &BigUint) {
        let coin = self.coins.get_mut(symbol).expect("coin must exist");
        coin.volume += value;
    }

    fn sub_coin_volume(&mut self, symbol: &CoinSymbol, value: &BigUint) {
        let coin = self.coins.get_mut(symbol).expect("coin must exist");
        coin.volume -= value;
    }

    fn add_coin_reserve(&mut self, symbol: &CoinSymbol, value: &BigUint) {
        let coin = self.coins.get_mut(symbol).expect("coin must exist");
        coin.reserve_balance += value;
    }

    fn sub_coin_reserve(&mut self, symbol: &CoinSymbol, value: &BigUint) {
        let coin = self.coins.get_mut(symbol).expect("coin must exist");
        coin.reserve_balance -= value;
    }

    fn candidate_exists(&self, pub_key: &[u8]) -> bool {
        self.candidates.contains_key(pub_key)
    }

    fn get_candidate(&self, pub_key: &[u8]) -> Option<Candidate> {
        self.candidates.get(pub_key).cloned()
    }

    fn create_candidate(
        &mut self,
        owner_address: &Address,
        pub_key: &[u8],
        commission: u32,
        created_at_block: u64,
        initial_delegator: &Address,
        coin: &CoinSymbol,
        stake: &BigUint,
    ) {
        self.candidates.insert(
            pub_key.to_vec(),
            Candidate {
                pub_key: pub_key.to_vec(),
                owner_address: *owner_address,
                commission,
                created_at_block,
                status: CandidateStatus::Offline,
                stakes: vec![Stake {
                    owner: *initial_delegator,
                    coin: *coin,
                    value: stake.clone(),
                }],
            },
        );
    }

    fn set_candidate_online(&mut self, pub_key: &[u8]) {
        let candidate = self.candidates.get_mut(pub_key).expect("candidate must exist");
        candidate.status = CandidateStatus::Online;
    }

    fn set_candidate_offline(&mut self, pub_key: &[u8]) {
        let candidate = self.candidates.get_mut(pub_key).expect("candidate must exist");
        candidate.status = CandidateStatus::Offline;
    }

    fn delegate(&mut self, address: &Address, pub_key: &[u8], coin: &CoinSymbol, value: &BigUint) {
        let candidate = self.candidates.get_mut(pub_key).expect("candidate must exist");
        match candidate
            .stakes
            .iter_mut()
            .find(|stake| stake.owner == *address && stake.coin == *coin)
        {
            Some(stake) => stake.value += value,
            None => candidate.stakes.push(Stake {
                owner: *address,
                coin: *coin,
                value: value.clone(),
            }),
        }
    }

    fn sub_stake(&mut self, address: &Address, pub_key: &[u8], coin: &CoinSymbol, value: &BigUint) {
        let candidate = self.candidates.get_mut(pub_key).expect("candidate must exist");
        let stake = candidate
            .stakes
            .iter_mut()
            .find(|stake| stake.owner == *address && stake.coin == *coin)
            .expect("stake must exist");
        stake.value -= value;
    }

    fn add_frozen_fund(
        &mut self,
        block: u64,
        address: &Address,
        pub_key: &[u8],
        coin: &CoinSymbol,
        value: &BigUint,
    ) {
        self.frozen_funds.entry(block).or_default().push(FrozenFund {
            address: *address,
            candidate_key: pub_key.to_vec(),
            coin: *coin,
            value: value.clone(),
        });
    }

    fn is_check_used(&self, id: &Hash) -> bool {
        self.used_checks.contains(id)
    }

    fn use_check(&mut self, id: &Hash) {
        self.used_checks.insert(*id);
    }
}

pub fn secret(byte: u8) -> SecretKey {
    SecretKey::parse(&[byte; 32]).unwrap()
}

pub fn address_of(secret: &SecretKey) -> Address {
    crypto::secret_to_address(secret)
}

pub fn base() -> CoinSymbol {
    CoinSymbol::base_coin()
}

pub fn symbol(bytes: &[u8]) -> CoinSymbol {
    CoinSymbol::from_bytes(bytes).unwrap()
}

pub fn big(value: u128) -> BigUint {
    BigUint::from(value)
}

pub fn pow10(exp: u32) -> BigUint {
    Pow::pow(&BigUint::from(10u8), exp)
}

/// Builds and signs a transaction, returning its wire bytes.
pub fn make_tx(
    secret: &SecretKey,
    nonce: u64,
    gas_price: u64,
    tx_type: u8,
    data_raw: Vec<u8>,
) -> Vec<u8> {
    make_tx_full(secret, nonce, gas_price, tx_type, data_raw, Vec::new(), Vec::new())
}

pub fn make_tx_full(
    secret: &SecretKey,
    nonce: u64,
    gas_price: u64,
    tx_type: u8,
    data_raw: Vec<u8>,
    payload: Vec<u8>,
    service_data: Vec<u8>,
) -> Vec<u8> {
    let mut tx = Transaction {
        nonce,
        gas_price: BigUint::from(gas_price),
        tx_type,
        data_raw,
        payload,
        service_data,
        v: BigUint::default(),
        r: BigUint::default(),
        s: BigUint::default(),
        data: None,
    };
    tx.sign(secret);
    tx.encode()
}

/// Issues a locked and signed check, returning it and its wire bytes.
pub fn make_check(
    issuer: &SecretKey,
    lock: &SecretKey,
    coin: CoinSymbol,
    value: BigUint,
    due_block: u64,
) -> (Check, Vec<u8>) {
    let mut check = Check {
        nonce: 1,
        coin,
        value,
        due_block,
        lock: Vec::new(),
        v: BigUint::default(),
        r: BigUint::default(),
        s: BigUint::default(),
    };
    check.set_lock(lock);
    check.sign(issuer);
    let raw = check.encode();
    (check, raw)
}
