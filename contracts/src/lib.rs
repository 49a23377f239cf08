//! FundMe Contracts
//!
//! USD-gated crowdfunding contract for Casper, priced through an external
//! aggregator-style feed.
//!
//! ## Architecture
//!
//! - **FundMe**: Funding ledger, owner access control and withdrawal
//! - **PriceFeed**: Read-only price queries against the bound feed
//! - **PriceConverter**: Mote amount to 18-decimal USD value
//! - **MockV3Aggregator**: Settable feed for local networks and tests

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod price_feed;
pub mod price_converter;

// Contract modules
pub mod fund_me;
pub mod mock_aggregator;
