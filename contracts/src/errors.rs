//! Funding contract error definitions.

use odra::prelude::*;

/// FundMe contract errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FundMeError {
    // Access control errors (1xx)
    NotOwner = 100,

    // Funding errors (2xx)
    InsufficientValue = 200,

    // Oracle errors (3xx)
    OracleFailure = 300,

    // Withdrawal errors (4xx)
    TransferFailed = 400,

    // Query errors (5xx)
    IndexOutOfRange = 500,

    // Arithmetic errors (6xx)
    ConversionOverflow = 600,

    // Storage errors (9xx)
    MissingState = 900,
}

impl FundMeError {
    pub const fn message(&self) -> &'static str {
        match self {
            FundMeError::NotOwner => "Caller is not the owner",
            FundMeError::InsufficientValue => "You need to spend more CSPR",
            FundMeError::OracleFailure => "Price feed returned no usable price",
            FundMeError::TransferFailed => "Balance transfer to owner failed",
            FundMeError::IndexOutOfRange => "Funder index out of range",
            FundMeError::ConversionOverflow => "Amount too large for price conversion",
            FundMeError::MissingState => "Contract storage not initialized",
        }
    }

    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl core::fmt::Display for FundMeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<FundMeError> for OdraError {
    fn from(error: FundMeError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
