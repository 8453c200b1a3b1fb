//! Lumen (LMN) Token Contract
//!
//! Permissioned custodial ledger for a fungible, capped-supply asset.
//! One contract instance owns all ledger state:
//! - CEP-18 style balances, transfers and approvals
//! - mint/burn under a hard supply cap
//! - custodian-gated treasury (native value, foreign assets, reserve moves)
//! - append-only airdrop list with idempotent, rangeable distribution
//! - staleness-checked oracle pricing for purchase-by-value
//! - allowlisted delegated module execution
//!
//! Every entry point checks roles first, then the pause gate, then the
//! reentrancy guard, before touching state and emitting events. Failures
//! are reverts, so each operation is atomic.

use odra::casper_types::bytesrepr::Bytes;
use odra::casper_types::{runtime_args, U256, U512};
use odra::prelude::*;
use odra::CallDef;

use crate::access_control::{
    AccessControl, ROLE_AIRDROPPER, ROLE_MINTER, ROLE_MODULE_ADMIN, ROLE_PRICE_UPDATER,
};
use crate::airdrop::AirdropLedger;
use crate::errors::LedgerError;
use crate::events::{
    Approval, Burned, CustodianChanged, ForeignAssetWithdrawn, Minted, ModuleExecuted,
    NativeDeposited, NativeWithdrawn, Staked, TokensPurchased, TokensReceived, Transfer, Unstaked,
};
use crate::guards::{Pausable, ReentrancyGuard};
use crate::module_registry::ModuleRegistry;
use crate::oracle_adapter::PriceOracleAdapter;
use crate::types::{is_null_address, null_address, AirdropEntry, PriceSnapshot};

/// Token name
const TOKEN_NAME: &str = "Lumen";
/// Token symbol
const TOKEN_SYMBOL: &str = "LMN";
/// Decimals (18-decimal fixed point)
const DECIMALS: u8 = 18;

/// Lumen Token Contract
#[odra::module(events = [
    Transfer, Approval, Minted, Burned, CustodianChanged, NativeDeposited,
    NativeWithdrawn, ForeignAssetWithdrawn, TokensReceived, ModuleExecuted,
    TokensPurchased, Staked, Unstaked
])]
pub struct LumenToken {
    /// Role registry
    access: SubModule<AccessControl>,
    /// Global circuit breaker
    pausable: SubModule<Pausable>,
    /// Single-entry mutex for outbound calls
    guard: SubModule<ReentrancyGuard>,
    /// Append-only airdrop list
    airdrop_list: SubModule<AirdropLedger>,
    /// Oracle price state
    oracle: SubModule<PriceOracleAdapter>,
    /// Delegated-execution allowlist
    modules: SubModule<ModuleRegistry>,
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals
    decimals: Var<u8>,
    /// Circulating supply
    total_supply: Var<U256>,
    /// Hard supply cap, fixed at construction
    max_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner, spender) -> amount
    allowances: Mapping<(Address, Address), U256>,
    /// Locked balance per account
    staked: Mapping<Address, U256>,
    /// Total locked balance
    total_staked: Var<U256>,
    /// Sole treasury authority; non-null from init onwards
    custodian: Var<Address>,
}

#[odra::module]
impl LumenToken {
    /// Initialize the ledger.
    ///
    /// Mints the genesis distribution (cap-checked), designates the
    /// custodian and grants ADMIN to the deployer.
    pub fn init(
        &mut self,
        recipients: Vec<Address>,
        amounts: Vec<U256>,
        max_supply: U256,
        custodian: Address,
    ) {
        if recipients.len() != amounts.len() {
            self.env().revert(LedgerError::LengthMismatch);
        }
        if is_null_address(&custodian) {
            self.env().revert(LedgerError::ZeroAddress);
        }

        self.name.set(String::from(TOKEN_NAME));
        self.symbol.set(String::from(TOKEN_SYMBOL));
        self.decimals.set(DECIMALS);
        self.total_supply.set(U256::zero());
        self.max_supply.set(max_supply);
        self.custodian.set(custodian);

        let caller = self.env().caller();
        self.access.init(caller);
        self.oracle.init();

        for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
            self.mint_internal(*recipient, *amount);
        }
    }

    // ========== CEP-18 Standard Functions ==========

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_else(|| String::from(TOKEN_NAME))
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_else(|| String::from(TOKEN_SYMBOL))
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(DECIMALS)
    }

    /// Get circulating supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get the hard supply cap
    pub fn max_supply(&self) -> U256 {
        self.max_supply.get().unwrap_or(U256::zero())
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    /// Get allowance for spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or(U256::zero())
    }

    /// Transfer tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        self.pausable.require_not_paused();
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount);
        true
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        self.env().emit_event(Approval {
            owner,
            spender,
            amount,
        });
        true
    }

    /// Transfer tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        self.pausable.require_not_paused();
        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(LedgerError::InsufficientBalance);
        }

        self.transfer_internal(owner, recipient, amount);
        self.allowances.set(&(owner, spender), current_allowance - amount);
        true
    }

    // ========== Supply Functions ==========

    /// Mint new tokens (MINTER role)
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.access.require_role(ROLE_MINTER);
        self.pausable.require_not_paused();
        self.mint_internal(to, amount);
    }

    /// Burn tokens from the caller's own balance
    pub fn burn(&mut self, amount: U256) {
        self.pausable.require_not_paused();
        let caller = self.env().caller();

        let balance = self.balance_of(caller);
        if balance < amount {
            self.env().revert(LedgerError::InsufficientBalance);
        }

        self.balances.set(&caller, balance - amount);
        self.total_supply.set(self.total_supply() - amount);

        self.env().emit_event(Burned {
            from: caller,
            amount,
        });
    }

    // ========== Role Functions ==========

    /// Grant a role (requires the role's admin role)
    pub fn grant_role(&mut self, role: u8, account: Address) {
        self.access.grant_role(role, account);
    }

    /// Revoke a role (requires the role's admin role)
    pub fn revoke_role(&mut self, role: u8, account: Address) {
        self.access.revoke_role(role, account);
    }

    /// Check if an account holds a role
    pub fn has_role(&self, role: u8, account: Address) -> bool {
        self.access.has_role(role, account)
    }

    /// Get the number of accounts holding a role
    pub fn get_role_member_count(&self, role: u8) -> u32 {
        self.access.get_role_member_count(role)
    }

    // ========== Pause Functions ==========

    /// Halt value movement (ADMIN role)
    pub fn pause(&mut self) {
        self.access.require_admin();
        self.pausable.pause();
    }

    /// Resume value movement (ADMIN role)
    pub fn unpause(&mut self) {
        self.access.require_admin();
        self.pausable.unpause();
    }

    /// Whether value movement is halted
    pub fn is_paused(&self) -> bool {
        self.pausable.is_paused()
    }

    // ========== Treasury Functions (Custodian Only) ==========

    /// Get the custodian identity
    pub fn get_custodian(&self) -> Address {
        self.custodian.get().unwrap_or_else(null_address)
    }

    /// Replace the custodian (ADMIN role). The custodian can change but
    /// never clear to the null identity.
    pub fn set_custodian(&mut self, custodian: Address) {
        self.access.require_admin();
        if is_null_address(&custodian) {
            self.env().revert(LedgerError::ZeroAddress);
        }

        let previous = self.get_custodian();
        self.custodian.set(custodian);

        self.env().emit_event(CustodianChanged {
            previous,
            custodian,
        });
    }

    /// Attach native value to the treasury
    #[odra(payable)]
    pub fn deposit_native(&mut self) {
        let amount = self.env().attached_value();
        self.env().emit_event(NativeDeposited {
            from: self.env().caller(),
            amount,
        });
    }

    /// Withdraw the treasury's entire native balance to `to`
    pub fn withdraw_native(&mut self, to: Address) {
        self.require_custodian();
        self.pausable.require_not_paused();

        self.guard.enter();
        let amount = self.env().self_balance();
        self.env().transfer_tokens(&to, &amount);
        self.guard.exit();

        self.env().emit_event(NativeWithdrawn { to, amount });
    }

    /// Withdraw the ledger's entire balance of a foreign CEP-18 asset to `to`
    pub fn withdraw_foreign_asset(&mut self, asset: Address, to: Address) {
        self.require_custodian();
        self.pausable.require_not_paused();

        self.guard.enter();
        let ledger = self.env().self_address();

        let balance_args = runtime_args! {
            "account" => ledger
        };
        let balance: U256 = self
            .env()
            .call_contract(asset, CallDef::new("balance_of", false, balance_args));

        let transfer_args = runtime_args! {
            "recipient" => to,
            "amount" => balance
        };
        let _transferred: bool = self
            .env()
            .call_contract(asset, CallDef::new("transfer", true, transfer_args));
        self.guard.exit();

        self.env().emit_event(ForeignAssetWithdrawn {
            asset,
            to,
            amount: balance,
        });
    }

    /// Move `amount` of the ledger's own holdings to `to`
    pub fn transfer_tokens(&mut self, to: Address, amount: U256) {
        self.require_custodian();
        self.pausable.require_not_paused();
        let ledger = self.env().self_address();
        self.transfer_internal(ledger, to, amount);
    }

    /// Pull `amount` from the caller's balance into the ledger's reserve
    pub fn receive_tokens(&mut self, amount: U256) {
        let from = self.env().caller();
        let ledger = self.env().self_address();
        self.transfer_internal(from, ledger, amount);
        self.env().emit_event(TokensReceived { from, amount });
    }

    /// Native balance held by the treasury
    pub fn native_reserve(&self) -> U512 {
        self.env().self_balance()
    }

    // ========== Module Functions ==========

    /// Enable a module address for delegated calls (MODULE_ADMIN role)
    pub fn add_module(&mut self, module: Address) {
        self.access.require_role(ROLE_MODULE_ADMIN);
        self.modules.add(module);
    }

    /// Disable a module address (MODULE_ADMIN role)
    pub fn remove_module(&mut self, module: Address) {
        self.access.require_role(ROLE_MODULE_ADMIN);
        self.modules.remove(module);
    }

    /// Whether a module address is enabled
    pub fn is_module_allowed(&self, module: Address) -> bool {
        self.modules.is_allowed(module)
    }

    /// Execute an allowlisted module (custodian only).
    ///
    /// The delegated call runs inside the reentrancy guard; a failure
    /// anywhere in the module reverts this whole operation.
    pub fn execute_module(&mut self, module: Address, payload: Bytes) {
        self.require_custodian();
        self.pausable.require_not_paused();

        if !self.modules.is_allowed(module) {
            self.env().revert(LedgerError::ModuleNotAllowed);
        }

        self.guard.enter();
        let execute_args = runtime_args! {
            "payload" => payload
        };
        self.env()
            .call_contract::<()>(module, CallDef::new("execute", true, execute_args));
        self.guard.exit();

        self.env().emit_event(ModuleExecuted {
            module,
            caller: self.env().caller(),
        });
    }

    // ========== Airdrop Functions ==========

    /// Append paired (recipient, amount) entries (AIRDROPPER role)
    pub fn add_airdrop_recipients(&mut self, recipients: Vec<Address>, amounts: Vec<U256>) {
        self.access.require_role(ROLE_AIRDROPPER);

        if recipients.len() != amounts.len() {
            self.env().revert(LedgerError::LengthMismatch);
        }

        for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
            if is_null_address(recipient) {
                self.env().revert(LedgerError::ZeroAddress);
            }
            self.airdrop_list.append(*recipient, *amount);
        }
    }

    /// Distribute entries in `[start, end)` from the ledger's holdings
    /// (AIRDROPPER role).
    ///
    /// Already-distributed entries are skipped, so replaying a range is a
    /// no-op. The bounded range lets a caller split a large backlog across
    /// operations; `end` past the list is clamped. A shortfall on any
    /// entry reverts the whole range.
    pub fn airdrop(&mut self, start: u64, end: u64) {
        self.access.require_role(ROLE_AIRDROPPER);
        self.pausable.require_not_paused();

        let ledger = self.env().self_address();
        let end = end.min(self.airdrop_list.count());

        for index in start..end {
            if let Some(entry) = self.airdrop_list.get(index) {
                if !entry.distributed {
                    self.transfer_internal(ledger, entry.recipient, entry.amount);
                    self.airdrop_list.mark_distributed(index);
                }
            }
        }
    }

    /// Number of airdrop entries ever added
    pub fn airdrop_count(&self) -> u64 {
        self.airdrop_list.count()
    }

    /// Get an airdrop entry by index
    pub fn airdrop_entry(&self, index: u64) -> Option<AirdropEntry> {
        self.airdrop_list.get(index)
    }

    // ========== Oracle Functions ==========

    /// Set the external price feed (ADMIN role)
    pub fn set_price_feed(&mut self, feed: Address) {
        self.access.require_admin();
        self.oracle.set_feed(feed);
    }

    /// Get the external price feed address
    pub fn get_price_feed(&self) -> Option<Address> {
        self.oracle.get_feed()
    }

    /// Set the staleness window in seconds (ADMIN role)
    pub fn set_staleness_window(&mut self, seconds: u64) {
        self.access.require_admin();
        self.oracle.set_staleness_window(seconds);
    }

    /// Get the staleness window in seconds
    pub fn staleness_window(&self) -> u64 {
        self.oracle.staleness_window()
    }

    /// Read the feed and store its price (PRICE_UPDATER role)
    pub fn update_price(&mut self) {
        self.access.require_role(ROLE_PRICE_UPDATER);
        self.oracle.update_price();
    }

    /// Last accepted price, if any
    pub fn price(&self) -> Option<PriceSnapshot> {
        self.oracle.snapshot()
    }

    /// Convert native value into a token amount at the stored price
    pub fn calculate_token_amount(&self, native_value: U256) -> U256 {
        self.oracle.calculate_token_amount(native_value)
    }

    /// Buy tokens from the ledger's reserve for the attached native value.
    ///
    /// Purchases redistribute existing supply; nothing is minted and
    /// `total_supply` is unchanged.
    #[odra(payable)]
    pub fn purchase_tokens(&mut self) {
        self.pausable.require_not_paused();

        let price = self.oracle.require_fresh_price();
        let native_value = self.env().attached_value();
        let amount = u512_to_u256(native_value) / price;

        let buyer = self.env().caller();
        let ledger = self.env().self_address();
        self.transfer_internal(ledger, buyer, amount);

        self.env().emit_event(TokensPurchased {
            buyer,
            native_value,
            amount,
        });
    }

    // ========== Staking Functions ==========

    /// Lock `amount` of the caller's balance into the ledger's account
    pub fn stake(&mut self, amount: U256) {
        self.pausable.require_not_paused();
        let caller = self.env().caller();
        let ledger = self.env().self_address();

        self.transfer_internal(caller, ledger, amount);
        self.staked.set(&caller, self.staked_of(caller) + amount);
        self.total_staked.set(self.total_staked() + amount);

        self.env().emit_event(Staked {
            account: caller,
            amount,
        });
    }

    /// Release `amount` of the caller's locked balance
    pub fn unstake(&mut self, amount: U256) {
        self.pausable.require_not_paused();
        let caller = self.env().caller();
        let ledger = self.env().self_address();

        let staked = self.staked_of(caller);
        if staked < amount {
            self.env().revert(LedgerError::InsufficientBalance);
        }

        self.staked.set(&caller, staked - amount);
        self.total_staked.set(self.total_staked() - amount);
        self.transfer_internal(ledger, caller, amount);

        self.env().emit_event(Unstaked {
            account: caller,
            amount,
        });
    }

    /// Locked balance of an account
    pub fn staked_of(&self, account: Address) -> U256 {
        self.staked.get(&account).unwrap_or(U256::zero())
    }

    /// Total locked balance
    pub fn total_staked(&self) -> U256 {
        self.total_staked.get().unwrap_or(U256::zero())
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        if is_null_address(&to) {
            self.env().revert(LedgerError::ZeroAddress);
        }

        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(LedgerError::InsufficientBalance);
        }

        // Zero-amount transfers succeed and still emit: explicit policy.
        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer { from, to, amount });
    }

    fn mint_internal(&mut self, to: Address, amount: U256) {
        if is_null_address(&to) {
            self.env().revert(LedgerError::ZeroAddress);
        }

        let supply = self.total_supply();
        if supply + amount > self.max_supply() {
            self.env().revert(LedgerError::SupplyCapExceeded);
        }

        let balance = self.balance_of(to);
        self.balances.set(&to, balance + amount);
        self.total_supply.set(supply + amount);

        self.env().emit_event(Minted { to, amount });
    }

    fn require_custodian(&self) {
        if self.env().caller() != self.get_custodian() {
            self.env().revert(LedgerError::NotAuthorized);
        }
    }
}

// ===== Helper Functions =====

/// Convert U512 to U256, taking the lower 256 bits.
///
/// Native amounts fit comfortably in U256.
fn u512_to_u256(value: U512) -> U256 {
    let mut bytes = [0u8; 64];
    value.to_little_endian(&mut bytes);
    U256::from_little_endian(&bytes[..32])
}
