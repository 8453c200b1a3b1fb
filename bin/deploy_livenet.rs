//! Deploy the Lumen ledger to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000

use odra::casper_types::U256;
use odra::host::Deployer;
use odra::prelude::Addressable;

use lumen_ledger_contracts::token::{LumenToken, LumenTokenInitArgs};

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== Lumen Ledger Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    // Get deployer address
    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // Ledger parameters
    let max_supply = U256::from(2_006_000_000u64) * U256::from(10u64).pow(U256::from(18u64));

    // Genesis is distributed post-deploy via mint/airdrop; the deployer
    // acts as custodian until the treasury account takes over.
    // TODO: run set_custodian against the treasury multisig before mainnet.
    let custodian = deployer;

    println!("Deploying LumenToken...");
    let token = LumenToken::deploy(
        &env,
        LumenTokenInitArgs {
            recipients: vec![],
            amounts: vec![],
            max_supply,
            custodian,
        },
    );
    println!("LumenToken deployed at: {:?}", token.address().clone());

    println!();
    println!("=== Deployment Complete ===");
    println!();
    println!("Next steps:");
    println!("  - grant PRICE_UPDATER / AIRDROPPER / MINTER / MODULE_ADMIN roles");
    println!("  - set_price_feed against the live feed contract");
    println!("  - set_custodian against the treasury account");
}
