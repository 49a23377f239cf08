//! Price Feed Integration
//!
//! Reads the current native/USD price from an aggregator-style feed contract
//! (`latest_round_data`, `decimals`, `version`). The feed is untrusted input:
//! a non-positive answer is rejected before any conversion happens.

use odra::prelude::*;
use odra::casper_types::U256;

use crate::errors::FundMeError;
use crate::types::RoundData;

/// Aggregator-style price feed contract
#[odra::external_contract]
pub trait AggregatorV3 {
    /// Latest round reported by the feed
    fn latest_round_data(&self) -> RoundData;
    /// Decimal places of `RoundData::answer`
    fn decimals(&self) -> u8;
    /// Feed interface version
    fn version(&self) -> u64;
}

/// Read-only capability consumed by the price conversion
pub trait PriceOracle {
    fn latest_round_data(&self) -> RoundData;
    fn decimals(&self) -> u8;
    fn version(&self) -> u64;
}

/// Validated price reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceReading {
    /// Positive price, scaled by `decimals`
    pub price: U256,
    /// Decimal places of `price`
    pub decimals: u8,
}

impl PriceOracle for AggregatorV3ContractRef {
    fn latest_round_data(&self) -> RoundData {
        AggregatorV3ContractRef::latest_round_data(self)
    }

    fn decimals(&self) -> u8 {
        AggregatorV3ContractRef::decimals(self)
    }

    fn version(&self) -> u64 {
        AggregatorV3ContractRef::version(self)
    }
}

/// Query the feed for `(price, decimals)`.
///
/// Fails with `OracleFailure` when the reported answer is zero or negative.
pub fn read_price<O: PriceOracle>(oracle: &O) -> Result<PriceReading, FundMeError> {
    let round = oracle.latest_round_data();
    if round.answer <= 0 {
        return Err(FundMeError::OracleFailure);
    }

    Ok(PriceReading {
        price: U256::from(round.answer as u64),
        decimals: oracle.decimals(),
    })
}
