//! External contract interfaces.
//!
//! Traits for the contracts the ledger calls out to: foreign CEP-18
//! tokens, the price feed, and allowlisted modules.

use odra::casper_types::bytesrepr::Bytes;
use odra::casper_types::U256;
use odra::prelude::*;

use crate::types::PriceRound;

/// CEP-18 token interface for cross-contract calls
#[odra::external_contract]
pub trait Cep18Token {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn balance_of(&self, account: Address) -> U256;
}

/// External price feed interface
#[odra::external_contract]
pub trait PriceFeed {
    /// Latest observation of the feed, with the feed's own timestamp
    fn latest_round(&self) -> PriceRound;
}

/// Interface an allowlisted module must expose for delegated execution
#[odra::external_contract]
pub trait LedgerModule {
    fn execute(&mut self, payload: Bytes);
}
