//! Fund or withdraw from a deployed FundMe contract.
//!
//! Usage:
//!   FUND_ME_ACTION=fund cargo run --bin interact_livenet --release
//!   FUND_ME_ACTION=withdraw cargo run --bin interact_livenet --release
//!
//! Requires the livenet variables used by `deploy_livenet` plus:
//!   FUND_ME_CONTRACT=hash-...      deployed FundMe address
//!   FUND_ME_FUND_AMOUNT=100000000  motes to send on `fund` (default 0.1 CSPR)

use std::str::FromStr;

use odra::casper_types::U512;
use odra::host::{HostRef, HostRefLoader};
use odra::prelude::*;

use fund_me_contracts::fund_me::FundMe;

/// Default contribution: 0.1 CSPR
const DEFAULT_FUND_AMOUNT: u64 = 100_000_000;

fn env_var(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{} must be set", name))
}

fn main() {
    dotenv::dotenv().ok();

    let env = odra_casper_livenet_env::env();
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    let contract = env_var("FUND_ME_CONTRACT");
    let address = Address::from_str(&contract)
        .unwrap_or_else(|_| panic!("Invalid FUND_ME_CONTRACT: {}", contract));
    let mut fund_me = FundMe::load(&env, address);

    println!("Caller: {:?}", env.caller());
    println!("FundMe: {:?}", fund_me.address().clone());

    match env_var("FUND_ME_ACTION").as_str() {
        "fund" => {
            let amount: u64 = std::env::var("FUND_ME_FUND_AMOUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FUND_AMOUNT);

            println!("Funding with {} motes...", amount);
            fund_me.with_tokens(U512::from(amount)).fund();
            println!(
                "Funded. Caller total: {}",
                fund_me.get_address_to_amount_funded(env.caller())
            );
        }
        "withdraw" => {
            println!("Withdrawing...");
            fund_me.cheaper_withdraw();
            println!("Withdrawn. Funders left: {}", fund_me.get_funders_count());
        }
        other => panic!("Unknown FUND_ME_ACTION: {} (expected fund or withdraw)", other),
    }
}
