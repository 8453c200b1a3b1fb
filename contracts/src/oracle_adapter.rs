//! Price oracle adapter.
//!
//! Consumes an external price feed and stores the last accepted price for
//! the purchase-by-value path. An observation is only accepted while the
//! feed's own timestamp is inside the staleness window, and the stored
//! price is age-checked again at every consumption.

use odra::casper_types::{RuntimeArgs, U256};
use odra::prelude::*;
use odra::CallDef;

use crate::errors::LedgerError;
use crate::events::PriceUpdated;
use crate::types::{PriceRound, PriceSnapshot};

/// Default maximum price age in seconds (1 hour)
pub const DEFAULT_MAX_PRICE_AGE_SECONDS: u64 = 3600;

/// Staleness-checked price state
#[odra::module(events = [PriceUpdated])]
pub struct PriceOracleAdapter {
    /// External feed contract address
    feed: Var<Option<Address>>,
    /// Last accepted price; absent until the first successful update
    snapshot: Var<PriceSnapshot>,
    /// Maximum accepted price age in seconds
    max_price_age: Var<u64>,
}

#[odra::module]
impl PriceOracleAdapter {
    /// Initialize with no feed and the default staleness window
    pub fn init(&mut self) {
        self.feed.set(None);
        self.max_price_age.set(DEFAULT_MAX_PRICE_AGE_SECONDS);
    }

    // ========== Configuration ==========

    /// Set the external feed address
    pub fn set_feed(&mut self, feed: Address) {
        self.feed.set(Some(feed));
    }

    /// Get the external feed address
    pub fn get_feed(&self) -> Option<Address> {
        self.feed.get().flatten()
    }

    /// Set the staleness window in seconds
    pub fn set_staleness_window(&mut self, seconds: u64) {
        self.max_price_age.set(seconds);
    }

    /// Get the staleness window in seconds
    pub fn staleness_window(&self) -> u64 {
        self.max_price_age.get().unwrap_or(DEFAULT_MAX_PRICE_AGE_SECONDS)
    }

    // ========== Price Consumption ==========

    /// Last accepted price, if any
    pub fn snapshot(&self) -> Option<PriceSnapshot> {
        self.snapshot.get()
    }

    /// Read the feed and store its price.
    ///
    /// Reverts `PriceUnset` while no feed is configured or the feed
    /// reports a zero price, `StalePrice` when the feed's observation is
    /// older than the staleness window.
    pub fn update_price(&mut self) {
        let feed = self.feed.get().flatten();
        if feed.is_none() {
            self.env().revert(LedgerError::PriceUnset);
        }

        let call_def = CallDef::new("latest_round", false, RuntimeArgs::new());
        let round: PriceRound = self.env().call_contract(feed.unwrap(), call_def);

        if round.price.is_zero() {
            self.env().revert(LedgerError::PriceUnset);
        }

        let now = self.env().get_block_time();
        if round.timestamp < now.saturating_sub(self.staleness_window()) {
            self.env().revert(LedgerError::StalePrice);
        }

        self.snapshot.set(PriceSnapshot {
            price: round.price,
            updated_at: now,
        });

        self.env().emit_event(PriceUpdated {
            price: round.price,
            updated_at: now,
        });
    }

    /// Stored price, re-checked for staleness.
    ///
    /// Reverts `PriceUnset` before the first update, `StalePrice` once the
    /// stored price has outlived the window.
    pub fn require_fresh_price(&self) -> U256 {
        let snapshot = self.snapshot.get();
        if snapshot.is_none() {
            self.env().revert(LedgerError::PriceUnset);
        }
        let snapshot = snapshot.unwrap();

        let age = self.env().get_block_time().saturating_sub(snapshot.updated_at);
        if age > self.staleness_window() {
            self.env().revert(LedgerError::StalePrice);
        }

        snapshot.price
    }

    /// Convert native value into a token amount at the stored price.
    ///
    /// Integer division; `calculate(0) == 0`. Reverts `PriceUnset` while
    /// no price has ever been recorded.
    pub fn calculate_token_amount(&self, native_value: U256) -> U256 {
        let snapshot = self.snapshot.get();
        if snapshot.is_none() {
            self.env().revert(LedgerError::PriceUnset);
        }
        let snapshot = snapshot.unwrap();

        if snapshot.price.is_zero() {
            self.env().revert(LedgerError::PriceUnset);
        }

        native_value / snapshot.price
    }
}
