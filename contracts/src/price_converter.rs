//! Native-to-USD price conversion.
//!
//! All values use 18-decimal fixed point. Attached values arrive in motes
//! (9 decimals) and are scaled up before conversion. Multiplication happens
//! before the single division so only the final result is truncated.

use odra::casper_types::{U256, U512};

use crate::errors::FundMeError;
use crate::price_feed::PriceReading;
use crate::types::{NATIVE_DECIMALS, PRICE_SCALE, USD_DECIMALS};

fn pow10(exponent: u8) -> U256 {
    U256::from(10u64).pow(U256::from(exponent))
}

/// Oracle price rescaled to 18 decimals
pub fn normalize_price(reading: &PriceReading) -> Result<U256, FundMeError> {
    if reading.decimals <= USD_DECIMALS {
        reading
            .price
            .checked_mul(pow10(USD_DECIMALS - reading.decimals))
            .ok_or(FundMeError::ConversionOverflow)
    } else {
        Ok(reading.price / pow10(reading.decimals - USD_DECIMALS))
    }
}

/// USD value (18 decimals) of an 18-decimal native amount.
///
/// `usd = amount * price * 10^(18 - decimals) / 10^18`, truncated.
pub fn to_usd(native_amount: U256, reading: &PriceReading) -> Result<U256, FundMeError> {
    let price = normalize_price(reading)?;
    let product = native_amount
        .checked_mul(price)
        .ok_or(FundMeError::ConversionOverflow)?;
    Ok(product / U256::from(PRICE_SCALE))
}

/// Scale a mote amount to the 18-decimal native representation.
pub fn motes_to_native_wei(motes: U512) -> Result<U256, FundMeError> {
    let mut bytes = [0u8; 64];
    motes.to_little_endian(&mut bytes);
    if bytes[32..].iter().any(|byte| *byte != 0) {
        return Err(FundMeError::ConversionOverflow);
    }

    U256::from_little_endian(&bytes[..32])
        .checked_mul(pow10(USD_DECIMALS - NATIVE_DECIMALS))
        .ok_or(FundMeError::ConversionOverflow)
}

/// USD value (18 decimals) of a mote amount.
pub fn get_conversion_rate(motes: U512, reading: &PriceReading) -> Result<U256, FundMeError> {
    to_usd(motes_to_native_wei(motes)?, reading)
}
