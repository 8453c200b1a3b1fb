//! Lumen Ledger Contracts
//!
//! Permissioned custodial ledger for the capped-supply Lumen (LMN) asset.
//!
//! ## Architecture
//!
//! - **LumenToken**: the ledger contract; balances, supply, treasury,
//!   purchases, staking and delegated execution
//! - **AccessControl**: role membership and admin relationships
//! - **Pausable / ReentrancyGuard**: circuit breaker and single-entry
//!   mutex for value movement
//! - **AirdropLedger**: append-only distribution list
//! - **PriceOracleAdapter**: staleness-checked external price consumption
//! - **ModuleRegistry**: allowlist for delegated module calls
//!
//! ## Authority model
//!
//! Privileged operations are role-gated (ADMIN, PRICE_UPDATER, AIRDROPPER,
//! MINTER, MODULE_ADMIN), except treasury movement and module execution,
//! which require the caller to equal the registered custodian identity
//! regardless of role membership.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod types;

// Contract modules
pub mod access_control;
pub mod airdrop;
pub mod guards;
pub mod module_registry;
pub mod oracle_adapter;
pub mod token;
