/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! One handler per transaction type.
//!
//! Every handler validates in its documented order (the first failing check
//! decides the response code), applies state effects only in deliver mode and
//! only after all validations pass, and returns the tags to index the
//! transaction under. Validation order and mutation order are both part of
//! the consensus contract.

pub mod account;
pub mod check;
pub mod coin;
pub mod staking;
