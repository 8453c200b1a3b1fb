//! Ledger events.
//!
//! Events are the ledger's only externally durable log: every
//! state-mutating entry point emits at least one, carrying the actor,
//! counterparties and amounts for off-chain audit and indexing.

use odra::casper_types::{U256, U512};
use odra::prelude::*;

/// Asset moved between two accounts.
#[odra::event]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub amount: U256,
}

/// Spending allowance set by `owner` for `spender`.
#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub amount: U256,
}

/// New supply created.
#[odra::event]
pub struct Minted {
    pub to: Address,
    pub amount: U256,
}

/// Supply destroyed from the caller's own balance.
#[odra::event]
pub struct Burned {
    pub from: Address,
    pub amount: U256,
}

/// Role granted to an account. Emitted even when the account already held
/// the role.
#[odra::event]
pub struct RoleGranted {
    pub role: u8,
    pub account: Address,
    pub granted_by: Address,
}

/// Role revoked from an account. Emitted even when the account did not
/// hold the role.
#[odra::event]
pub struct RoleRevoked {
    pub role: u8,
    pub account: Address,
    pub revoked_by: Address,
}

/// Value movement halted.
#[odra::event]
pub struct Paused {
    pub by: Address,
}

/// Value movement resumed.
#[odra::event]
pub struct Unpaused {
    pub by: Address,
}

/// Custodian identity replaced.
#[odra::event]
pub struct CustodianChanged {
    pub previous: Address,
    pub custodian: Address,
}

/// Native value attached to the ledger's treasury.
#[odra::event]
pub struct NativeDeposited {
    pub from: Address,
    pub amount: U512,
}

/// Entire native treasury balance paid out by the custodian.
#[odra::event]
pub struct NativeWithdrawn {
    pub to: Address,
    pub amount: U512,
}

/// Entire balance held in a foreign token contract paid out by the
/// custodian.
#[odra::event]
pub struct ForeignAssetWithdrawn {
    pub asset: Address,
    pub to: Address,
    pub amount: U256,
}

/// Tokens pulled from the caller into the ledger's own reserve.
#[odra::event]
pub struct TokensReceived {
    pub from: Address,
    pub amount: U256,
}

/// Module address enabled for delegated execution.
#[odra::event]
pub struct ModuleAdded {
    pub module: Address,
}

/// Module address disabled for delegated execution.
#[odra::event]
pub struct ModuleRemoved {
    pub module: Address,
}

/// Delegated call into an allowlisted module completed. A failing call
/// reverts the whole operation, so only successful executions are
/// observable.
#[odra::event]
pub struct ModuleExecuted {
    pub module: Address,
    pub caller: Address,
}

/// Airdrop entry appended to the distribution list.
#[odra::event]
pub struct AirdropEntryAdded {
    pub index: u64,
    pub recipient: Address,
    pub amount: U256,
}

/// Oracle price accepted and stored.
#[odra::event]
pub struct PriceUpdated {
    pub price: U256,
    pub updated_at: u64,
}

/// Tokens bought from the ledger reserve for attached native value.
#[odra::event]
pub struct TokensPurchased {
    pub buyer: Address,
    pub native_value: U512,
    pub amount: U256,
}

/// Balance locked into the ledger's own account.
#[odra::event]
pub struct Staked {
    pub account: Address,
    pub amount: U256,
}

/// Locked balance released back to its owner.
#[odra::event]
pub struct Unstaked {
    pub account: Address,
    pub amount: U256,
}
