//! Common types and constants used across the funding contracts.

use odra::prelude::*;
use odra::casper_types::U256;

/// Fixed-point scale for USD values and normalized prices (1e18)
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Decimal places of USD values handled by the converter
pub const USD_DECIMALS: u8 = 18;

/// Decimal places of the native currency (1 CSPR = 1e9 motes)
pub const NATIVE_DECIMALS: u8 = 9;

/// Minimum accepted contribution: $5 scaled by 1e18
pub const MINIMUM_USD: u128 = 5 * PRICE_SCALE;

/// Decimals reported by the mock feed on local networks
pub const MOCK_DECIMALS: u8 = 8;

/// Initial mock price: $2000 with 8 decimals
pub const MOCK_INITIAL_PRICE: i64 = 200_000_000_000;

/// Aggregator interface version reported by the mock feed
pub const MOCK_VERSION: u64 = 4;

/// Round data reported by an aggregator-style price feed
#[odra::odra_type]
#[derive(Copy)]
pub struct RoundData {
    /// Round identifier
    pub round_id: u64,
    /// Price answer, scaled by the feed's decimals
    pub answer: i64,
    /// Timestamp when the round started
    pub started_at: u64,
    /// Timestamp when the answer was last updated
    pub updated_at: u64,
    /// Round in which the answer was computed
    pub answered_in_round: u64,
}

/// Minimum contribution as a 256-bit value
pub fn minimum_usd() -> U256 {
    U256::from(MINIMUM_USD)
}
