/*
    Copyright © 2026, BondChain Developers
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Execution machinery: envelope validation, the per-transaction execution
//! state, the fee engine and the typed dispatch into [command
//! handlers](crate::commands).

pub(crate) mod execute;
pub(crate) mod fee;
pub(crate) mod state;
