//! Common types used across the ledger.

use odra::casper_types::account::AccountHash;
use odra::casper_types::U256;
use odra::prelude::*;

/// A pending, at-most-once distribution record.
///
/// Entries are append-only; once `distributed` is set the entry is
/// immutable.
#[odra::odra_type]
pub struct AirdropEntry {
    /// Recipient address
    pub recipient: Address,
    /// Amount to distribute (18-decimal fixed point)
    pub amount: U256,
    /// Whether this entry has been paid out
    pub distributed: bool,
}

/// Last accepted oracle price.
///
/// Absent until the first successful `update_price`.
#[odra::odra_type]
pub struct PriceSnapshot {
    /// Price in native units per whole token (18-decimal fixed point)
    pub price: U256,
    /// Block time at which the price was stored
    pub updated_at: u64,
}

/// A single observation reported by an external price feed.
#[odra::odra_type]
pub struct PriceRound {
    /// Reported price
    pub price: U256,
    /// Feed-side timestamp of the observation
    pub timestamp: u64,
}

/// The null identity.
///
/// Casper has no canonical burn address; the all-zero account hash plays
/// the role the zero address plays on EVM chains.
pub fn null_address() -> Address {
    Address::Account(AccountHash::default())
}

/// Check an identity against the null identity.
pub fn is_null_address(address: &Address) -> bool {
    *address == null_address()
}
