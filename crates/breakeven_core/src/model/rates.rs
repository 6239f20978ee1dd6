use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Currency every monetary field is stored in
pub const BASE_CURRENCY: CurrencyCode = CurrencyCode::Eur;

/// Display currency. Rates are fixed multipliers relative to EUR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::Eur, CurrencyCode::Usd, CurrencyCode::Gbp];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Gbp => "GBP",
        }
    }

    /// Multiplier from base currency to this currency
    pub fn rate(&self) -> f64 {
        match self {
            CurrencyCode::Eur => 1.0,
            CurrencyCode::Usd => 1.09,
            CurrencyCode::Gbp => 0.84,
        }
    }

    /// Short symbol used in labels and chart axes
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "€",
            CurrencyCode::Usd => "$",
            CurrencyCode::Gbp => "£",
        }
    }

    /// Prefix used for formatted amounts (British English conventions, where
    /// the dollar is disambiguated as `US$`)
    pub fn amount_prefix(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "€",
            CurrencyCode::Usd => "US$",
            CurrencyCode::Gbp => "£",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            CurrencyCode::Eur => CurrencyCode::Usd,
            CurrencyCode::Usd => CurrencyCode::Gbp,
            CurrencyCode::Gbp => CurrencyCode::Eur,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.symbol())
    }
}

impl FromStr for CurrencyCode {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code) || c.symbol() == code)
            .ok_or_else(|| ParameterError::UnknownCurrency(s.to_string()))
    }
}
