//! Module registry.
//!
//! Allowlist of external addresses permitted to receive delegated calls.
//! Only MODULE_ADMIN role holders may edit the list (enforced by the
//! owning contract); execution against the list is the token contract's
//! guarded `execute_module`.

use odra::prelude::*;

use crate::events::{ModuleAdded, ModuleRemoved};

/// Delegated-execution allowlist
#[odra::module(events = [ModuleAdded, ModuleRemoved])]
pub struct ModuleRegistry {
    /// Enabled flags per module address
    allowed: Mapping<Address, bool>,
}

#[odra::module]
impl ModuleRegistry {
    /// Whether an address may receive delegated calls
    pub fn is_allowed(&self, module: Address) -> bool {
        self.allowed.get(&module).unwrap_or(false)
    }

    /// Enable an address for delegated calls
    pub fn add(&mut self, module: Address) {
        self.allowed.set(&module, true);
        self.env().emit_event(ModuleAdded { module });
    }

    /// Disable an address for delegated calls
    pub fn remove(&mut self, module: Address) {
        self.allowed.set(&module, false);
        self.env().emit_event(ModuleRemoved { module });
    }
}
