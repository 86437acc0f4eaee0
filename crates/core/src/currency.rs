//! Currencies

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rusty_money::iso;
use thiserror::Error;

/// Returned when text does not name one of the supported currencies.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported currency `{0}` (expected USD, RMB or MRU)")]
pub struct UnknownCurrency(pub String);

/// Currencies a product can be priced in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,

    /// Chinese Yuan, labelled RMB throughout the office's paperwork.
    Rmb,

    /// Mauritanian Ouguiya
    Mru,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Rmb, Currency::Mru];

    /// Code used in storage and on reports.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Rmb => "RMB",
            Currency::Mru => "MRU",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Rmb => "Chinese Yuan",
            Currency::Mru => "Mauritanian Ouguiya",
        }
    }

    /// ISO 4217 currency used for money arithmetic. RMB maps to CNY.
    pub fn iso(self) -> &'static iso::Currency {
        match self {
            Currency::Usd => iso::USD,
            Currency::Rmb => iso::CNY,
            Currency::Mru => iso::MRU,
        }
    }

    /// Reverse of [`Currency::iso`].
    pub fn from_iso(currency: &iso::Currency) -> Option<Self> {
        Currency::ALL
            .into_iter()
            .find(|candidate| candidate.iso().iso_alpha_code == currency.iso_alpha_code)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_codes_case_insensitively() -> TestResult {
        assert_eq!("USD".parse::<Currency>()?, Currency::Usd);
        assert_eq!("rmb".parse::<Currency>()?, Currency::Rmb);
        assert_eq!(" MRU ".parse::<Currency>()?, Currency::Mru);

        Ok(())
    }

    #[test]
    fn rejects_free_text() {
        assert_eq!(
            "EUR".parse::<Currency>(),
            Err(UnknownCurrency("EUR".to_string()))
        );
    }

    #[test]
    fn rmb_uses_cny_for_arithmetic() {
        assert_eq!(Currency::Rmb.iso().iso_alpha_code, "CNY");
        assert_eq!(Currency::from_iso(iso::CNY), Some(Currency::Rmb));
        assert_eq!(Currency::Rmb.to_string(), "RMB");
    }

    #[test]
    fn default_is_usd() {
        assert_eq!(Currency::default(), Currency::Usd);
    }
}
