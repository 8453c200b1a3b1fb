//! Airdrop ledger.
//!
//! Append-only list of (recipient, amount) entries indexed by position.
//! An entry transitions `distributed: false -> true` exactly once and is
//! immutable afterwards. Distribution itself (moving balances) lives in
//! the token contract; this module is the bookkeeping.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::events::AirdropEntryAdded;
use crate::types::AirdropEntry;

/// Append-only distribution list
#[odra::module(events = [AirdropEntryAdded])]
pub struct AirdropLedger {
    /// Entry storage: index -> entry
    entries: Mapping<u64, AirdropEntry>,
    /// Number of entries appended so far
    len: Var<u64>,
}

#[odra::module]
impl AirdropLedger {
    /// Number of entries ever appended
    pub fn count(&self) -> u64 {
        self.len.get().unwrap_or(0)
    }

    /// Get an entry by index
    pub fn get(&self, index: u64) -> Option<AirdropEntry> {
        self.entries.get(&index)
    }

    /// Append a pending entry and return its index
    pub fn append(&mut self, recipient: Address, amount: U256) -> u64 {
        let index = self.count();
        self.entries.set(
            &index,
            AirdropEntry {
                recipient,
                amount,
                distributed: false,
            },
        );
        self.len.set(index + 1);

        self.env().emit_event(AirdropEntryAdded {
            index,
            recipient,
            amount,
        });

        index
    }

    /// Mark an entry as paid out
    pub fn mark_distributed(&mut self, index: u64) {
        if let Some(mut entry) = self.entries.get(&index) {
            entry.distributed = true;
            self.entries.set(&index, entry);
        }
    }
}
