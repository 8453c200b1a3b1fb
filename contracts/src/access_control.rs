//! Role registry.
//!
//! Role-based authorization for the ledger's privileged operations.
//! The role set is fixed:
//! - ADMIN administers every role (including itself)
//! - PRICE_UPDATER can store oracle prices
//! - AIRDROPPER can schedule and run distributions
//! - MINTER can create new supply
//! - MODULE_ADMIN can edit the module allowlist
//! - CUSTODIAN marks the treasury identity (the treasury itself checks the
//!   registered custodian address, not this role bit)
//!
//! Grant/revoke are authorized against an explicit role -> admin-role
//! mapping checked on every call, and are idempotent: re-granting a held
//! role or revoking an unheld one changes nothing but still emits, so the
//! event log stays a complete record of attempted administration.

use odra::prelude::*;

use crate::errors::LedgerError;
use crate::events::{RoleGranted, RoleRevoked};

/// Role constants (u8 for efficient storage)
pub const ROLE_ADMIN: u8 = 0;
pub const ROLE_PRICE_UPDATER: u8 = 1;
pub const ROLE_AIRDROPPER: u8 = 2;
pub const ROLE_MINTER: u8 = 3;
pub const ROLE_MODULE_ADMIN: u8 = 4;
pub const ROLE_CUSTODIAN: u8 = 5;

/// Number of defined roles
pub const ROLE_COUNT: u8 = 6;

/// Role registry module
#[odra::module(events = [RoleGranted, RoleRevoked])]
pub struct AccessControl {
    /// Role assignments: (role, account) -> bool
    roles: Mapping<(u8, Address), bool>,
    /// Role admin mapping: role -> admin_role
    role_admin: Mapping<u8, u8>,
    /// Number of accounts holding each role
    role_count: Mapping<u8, u32>,
}

#[odra::module]
impl AccessControl {
    /// Initialize the registry with an initial admin.
    ///
    /// Every role is administered by ADMIN in the default hierarchy.
    pub fn init(&mut self, initial_admin: Address) {
        for role in 0..ROLE_COUNT {
            self.role_admin.set(&role, ROLE_ADMIN);
        }
        self.set_role_internal(ROLE_ADMIN, initial_admin, true);
    }

    // ========== Role Query Functions ==========

    /// Check if an account holds a role
    pub fn has_role(&self, role: u8, account: Address) -> bool {
        self.roles.get(&(role, account)).unwrap_or(false)
    }

    /// Get the admin role for a role
    pub fn get_role_admin(&self, role: u8) -> u8 {
        self.role_admin.get(&role).unwrap_or(ROLE_ADMIN)
    }

    /// Get the number of accounts holding a role
    pub fn get_role_member_count(&self, role: u8) -> u32 {
        self.role_count.get(&role).unwrap_or(0)
    }

    // ========== Role Management Functions ==========

    /// Grant a role to an account (requires the role's admin role)
    pub fn grant_role(&mut self, role: u8, account: Address) {
        self.require_role_admin(role);

        if !self.has_role(role, account) {
            self.set_role_internal(role, account, true);
        }

        self.env().emit_event(RoleGranted {
            role,
            account,
            granted_by: self.env().caller(),
        });
    }

    /// Revoke a role from an account (requires the role's admin role)
    pub fn revoke_role(&mut self, role: u8, account: Address) {
        self.require_role_admin(role);

        if self.has_role(role, account) {
            self.set_role_internal(role, account, false);
        }

        self.env().emit_event(RoleRevoked {
            role,
            account,
            revoked_by: self.env().caller(),
        });
    }

    // ========== Modifier-like Functions ==========

    /// Revert unless the caller holds the given role
    pub fn require_role(&self, role: u8) {
        if !self.has_role(role, self.env().caller()) {
            self.env().revert(LedgerError::Unauthorized);
        }
    }

    /// Revert unless the caller holds ADMIN
    pub fn require_admin(&self) {
        self.require_role(ROLE_ADMIN);
    }

    // ========== Internal Functions ==========

    fn set_role_internal(&mut self, role: u8, account: Address, value: bool) {
        let had_role = self.has_role(role, account);
        self.roles.set(&(role, account), value);

        let count = self.role_count.get(&role).unwrap_or(0);
        if value && !had_role {
            self.role_count.set(&role, count + 1);
        } else if !value && had_role && count > 0 {
            self.role_count.set(&role, count - 1);
        }
    }

    fn require_role_admin(&self, role: u8) {
        if role >= ROLE_COUNT {
            self.env().revert(LedgerError::Unauthorized);
        }
        self.require_role(self.get_role_admin(role));
    }
}
