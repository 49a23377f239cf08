//! FundMe Contract
//!
//! Accepts CSPR contributions worth at least `MINIMUM_USD` at the current
//! feed price and lets the owner drain them. Implements:
//! - USD-gated funding through `fund` and the bare-transfer `receive` path
//! - Funder ledger (ordered funder list + cumulative amount per funder)
//! - Owner-only withdrawal in two variants with identical effects
//!
//! Ledger state is always cleared before the balance leaves the contract.

use odra::prelude::*;
use odra::ContractRef;
use odra::casper_types::{U256, U512};

use crate::errors::FundMeError;
use crate::price_converter;
use crate::price_feed::{self, AggregatorV3ContractRef};
use crate::types::minimum_usd;

/// FundMe Contract
#[odra::module]
pub struct FundMe {
    /// Owner, bound at deployment
    owner: Var<Address>,
    /// Price feed used for USD conversion
    price_feed: Var<Address>,
    /// Cumulative contribution per funder (motes)
    address_to_amount_funded: Mapping<Address, U512>,
    /// Funder list: index -> funder
    funders: Mapping<u32, Address>,
    /// Length of the funder list
    funders_count: Var<u32>,
}

#[odra::module]
impl FundMe {
    /// Initialize with the price feed; the deployer becomes owner
    pub fn init(&mut self, price_feed: Address) {
        let deployer = self.env().caller();
        self.owner.set(deployer);
        self.price_feed.set(price_feed);
        self.funders_count.set(0);
    }

    // ========== Funding ==========

    /// Contribute the attached CSPR
    #[odra(payable)]
    pub fn fund(&mut self) {
        self.record_contribution();
    }

    /// Plain value transfer; same rules as `fund`
    #[odra(payable)]
    pub fn receive(&mut self) {
        self.record_contribution();
    }

    // ========== Withdrawal (Owner Only) ==========

    /// Reset the ledger and send the whole balance to the owner
    pub fn withdraw(&mut self) {
        self.require_owner();

        let mut index = 0;
        while index < self.funders_count.get_or_default() {
            let funder = self.funder_at(index);
            self.address_to_amount_funded.set(&funder, U512::zero());
            index += 1;
        }
        self.funders_count.set(0);

        self.pay_out_balance();
    }

    /// Same as `withdraw`, reading the funder count once
    pub fn cheaper_withdraw(&mut self) {
        self.require_owner();

        let funders_count = self.funders_count.get_or_default();
        for index in 0..funders_count {
            let funder = self.funder_at(index);
            self.address_to_amount_funded.set(&funder, U512::zero());
        }
        self.funders_count.set(0);

        self.pay_out_balance();
    }

    // ========== View Functions ==========

    /// Total contributed by `funder` since the last withdrawal
    pub fn get_address_to_amount_funded(&self, funder: Address) -> U512 {
        self.address_to_amount_funded.get_or_default(&funder)
    }

    /// Funder at `index` in contribution order
    pub fn get_funder(&self, index: u32) -> Address {
        if index >= self.funders_count.get_or_default() {
            self.env().revert(FundMeError::IndexOutOfRange);
        }
        self.funder_at(index)
    }

    /// Number of entries in the funder list, duplicates included
    pub fn get_funders_count(&self) -> u32 {
        self.funders_count.get_or_default()
    }

    /// Owner bound at deployment
    pub fn get_owner(&self) -> Address {
        match self.owner.get() {
            Some(owner) => owner,
            None => self.env().revert(FundMeError::MissingState),
        }
    }

    /// Price feed bound at deployment
    pub fn get_price_feed(&self) -> Address {
        match self.price_feed.get() {
            Some(price_feed) => price_feed,
            None => self.env().revert(FundMeError::MissingState),
        }
    }

    /// Interface version of the bound price feed
    pub fn get_version(&self) -> u64 {
        AggregatorV3ContractRef::new(self.env(), self.get_price_feed()).version()
    }

    /// Minimum contribution in USD (18 decimals)
    pub fn get_minimum_usd(&self) -> U256 {
        minimum_usd()
    }

    /// USD value (18 decimals) of `amount` motes at the current price
    pub fn get_conversion_rate(&self, amount: U512) -> U256 {
        self.usd_value_of(amount)
    }

    // ========== Internal Functions ==========

    fn record_contribution(&mut self) {
        let amount = self.env().attached_value();
        if self.usd_value_of(amount) < minimum_usd() {
            self.env().revert(FundMeError::InsufficientValue);
        }

        let funder = self.env().caller();
        let index = self.funders_count.get_or_default();
        self.funders.set(&index, funder);
        self.funders_count.set(index + 1);

        let funded = self.address_to_amount_funded.get_or_default(&funder);
        self.address_to_amount_funded.set(&funder, funded + amount);
    }

    fn usd_value_of(&self, amount: U512) -> U256 {
        let env = self.env();
        let feed = AggregatorV3ContractRef::new(env.clone(), self.get_price_feed());
        let converted = price_feed::read_price(&feed)
            .and_then(|reading| price_converter::get_conversion_rate(amount, &reading));

        match converted {
            Ok(usd_value) => usd_value,
            Err(error) => env.revert(error),
        }
    }

    /// Transfer the full balance to the owner and check the purse is empty
    fn pay_out_balance(&self) {
        let env = self.env();
        let balance = env.self_balance();
        if balance.is_zero() {
            return;
        }

        let owner = self.get_owner();
        env.transfer_tokens(&owner, &balance);

        if !env.self_balance().is_zero() {
            env.revert(FundMeError::TransferFailed);
        }
    }

    fn require_owner(&self) {
        if self.env().caller() != self.get_owner() {
            self.env().revert(FundMeError::NotOwner);
        }
    }

    fn funder_at(&self, index: u32) -> Address {
        match self.funders.get(&index) {
            Some(funder) => funder,
            None => self.env().revert(FundMeError::MissingState),
        }
    }
}
