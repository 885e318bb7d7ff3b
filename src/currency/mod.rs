//! Fixed currency table used when reporting remaining cash.
//!
//! Rates are expressed in base-currency units per one foreign unit and are
//! compile-time constants; fetching live rates is out of scope.

use serde::{Deserialize, Serialize};

pub const RUB_RATE: f64 = 1.0;
pub const USD_RATE: f64 = 104.80;
pub const EUR_RATE: f64 = 115.93;

/// Currencies the cash calculator can report in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    /// Resolves one of the fixed short codes. Codes are matched exactly;
    /// anything else is unknown and handled by the caller as a soft failure.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "rub" => Some(Currency::Rub),
            "usd" => Some(Currency::Usd),
            "eur" => Some(Currency::Eur),
            _ => None,
        }
    }

    /// Human-readable name used in report messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Rub => "руб",
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
        }
    }

    /// Base-currency units per one unit of this currency.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Rub => RUB_RATE,
            Currency::Usd => USD_RATE,
            Currency::Eur => EUR_RATE,
        }
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
