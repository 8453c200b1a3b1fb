//! Ledger error definitions.

use odra::prelude::*;

/// Custodial ledger errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LedgerError {
    // Authorization errors (1xx)
    Unauthorized = 100,
    NotAuthorized = 101,

    // Liveness errors (2xx)
    Paused = 200,
    ReentrantCall = 201,

    // Token errors (3xx)
    ZeroAddress = 300,
    InsufficientBalance = 301,
    SupplyCapExceeded = 302,

    // Airdrop errors (4xx)
    LengthMismatch = 400,

    // Module errors (5xx)
    ModuleNotAllowed = 500,

    // Oracle errors (6xx)
    StalePrice = 600,
    PriceUnset = 601,
}

impl LedgerError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Authorization
            LedgerError::Unauthorized => "Unauthorized: caller is missing the required role",
            LedgerError::NotAuthorized => "Not authorized: caller is not the custodian",

            // Liveness
            LedgerError::Paused => "Operation blocked: ledger is paused",
            LedgerError::ReentrantCall => "Reentrant call into a guarded operation",

            // Token
            LedgerError::ZeroAddress => "Zero address is not a valid identity",
            LedgerError::InsufficientBalance => "Insufficient balance",
            LedgerError::SupplyCapExceeded => "Mint exceeds the maximum supply",

            // Airdrop
            LedgerError::LengthMismatch => "Recipient and amount lists must be of equal length",

            // Module
            LedgerError::ModuleNotAllowed => "Module is not on the allowlist",

            // Oracle
            LedgerError::StalePrice => "Oracle price is stale",
            LedgerError::PriceUnset => "No usable oracle price has been recorded",
        }
    }
}

impl core::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<LedgerError> for OdraError {
    fn from(error: LedgerError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
