//! Deploy FundMe to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!
//! Optional:
//!   FUND_ME_PRICE_FEED=hash-...   existing CSPR/USD feed; a mock feed is
//!                                 deployed when unset

use std::str::FromStr;

use odra::host::{Deployer, HostRef};
use odra::prelude::*;

use fund_me_contracts::fund_me::{FundMe, FundMeInitArgs};
use fund_me_contracts::mock_aggregator::{MockV3Aggregator, MockV3AggregatorInitArgs};
use fund_me_contracts::types::{MOCK_DECIMALS, MOCK_INITIAL_PRICE};

/// Network-specific deployment settings
struct NetworkConfig {
    /// Gas payment per deploy/call
    payment_amount: u64,
    /// Existing price feed, if the network has one
    price_feed: Option<Address>,
}

impl NetworkConfig {
    fn from_env() -> Self {
        let payment_amount = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(200_000_000_000);

        let price_feed = std::env::var("FUND_ME_PRICE_FEED").ok().map(|v| {
            Address::from_str(&v).unwrap_or_else(|_| panic!("Invalid FUND_ME_PRICE_FEED: {}", v))
        });

        Self {
            payment_amount,
            price_feed,
        }
    }
}

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== FundMe Livenet Deployment ===");
    println!();

    let config = NetworkConfig::from_env();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();
    env.set_gas(config.payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // ==================== Phase 1: Price Feed ====================
    println!("=== Phase 1: Price Feed ===");
    let price_feed = match config.price_feed {
        Some(feed) => {
            println!("Using configured price feed: {:?}", feed);
            feed
        }
        None => {
            println!("No FUND_ME_PRICE_FEED set, deploying MockV3Aggregator...");
            let mock = MockV3Aggregator::deploy(
                &env,
                MockV3AggregatorInitArgs {
                    decimals: MOCK_DECIMALS,
                    initial_answer: MOCK_INITIAL_PRICE,
                },
            );
            let mock_addr = mock.address().clone();
            println!("MockV3Aggregator deployed at: {:?}", mock_addr);
            mock_addr
        }
    };
    println!();

    // ==================== Phase 2: FundMe ====================
    println!("=== Phase 2: FundMe ===");
    let fund_me = FundMe::deploy(&env, FundMeInitArgs { price_feed });
    println!("FundMe deployed at: {:?}", fund_me.address().clone());
    println!("Owner: {:?}", fund_me.get_owner());
    println!("Feed version: {}", fund_me.get_version());
    println!();

    println!("=== Deployment Complete ===");
    println!("Set FUND_ME_CONTRACT to the FundMe address above to interact.");
}
