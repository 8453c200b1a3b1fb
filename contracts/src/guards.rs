//! Liveness and re-entry guards.
//!
//! Two small modules shared by every value-moving entry point:
//! - `Pausable`: global circuit breaker toggled by ADMIN
//! - `ReentrancyGuard`: single-entry mutex around operations that call out
//!   to external code
//!
//! Authorization for `pause`/`unpause` is the owning contract's concern;
//! these modules only hold the flags and the revert helpers.

use odra::prelude::*;

use crate::errors::LedgerError;
use crate::events::{Paused, Unpaused};

/// Global circuit breaker for value movement
#[odra::module(events = [Paused, Unpaused])]
pub struct Pausable {
    paused: Var<bool>,
}

#[odra::module]
impl Pausable {
    /// Whether value movement is halted
    pub fn is_paused(&self) -> bool {
        self.paused.get().unwrap_or(false)
    }

    /// Halt value movement. Idempotent; always emits.
    pub fn pause(&mut self) {
        self.paused.set(true);
        self.env().emit_event(Paused {
            by: self.env().caller(),
        });
    }

    /// Resume value movement. Idempotent; always emits.
    pub fn unpause(&mut self) {
        self.paused.set(false);
        self.env().emit_event(Unpaused {
            by: self.env().caller(),
        });
    }

    /// Revert with `Paused` while the breaker is active
    pub fn require_not_paused(&self) {
        if self.is_paused() {
            self.env().revert(LedgerError::Paused);
        }
    }
}

/// Single-entry mutex wrapping calls into untrusted code.
///
/// At most one guarded operation is in flight per ledger instance. A
/// nested attempt reverts with `ReentrantCall`; the revert also rolls the
/// flag back, so failure paths release the guard without explicit
/// bookkeeping.
#[odra::module]
pub struct ReentrancyGuard {
    entered: Var<bool>,
}

#[odra::module]
impl ReentrancyGuard {
    /// Acquire the guard before an outbound call
    pub fn enter(&mut self) {
        if self.entered.get().unwrap_or(false) {
            self.env().revert(LedgerError::ReentrantCall);
        }
        self.entered.set(true);
    }

    /// Release the guard after the outbound call returned
    pub fn exit(&mut self) {
        self.entered.set(false);
    }
}
