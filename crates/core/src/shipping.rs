//! Shipping

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Returned when text does not name a shipping mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported shipping mode `{0}` (expected air or sea)")]
pub struct UnknownShippingMode(pub String);

/// How an order travels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShippingMode {
    /// Air freight
    #[default]
    Air,

    /// Sea freight
    Sea,
}

impl ShippingMode {
    /// Both modes, in display order.
    pub const ALL: [ShippingMode; 2] = [ShippingMode::Air, ShippingMode::Sea];

    /// Code used in storage and on the command line.
    pub const fn code(self) -> &'static str {
        match self {
            ShippingMode::Air => "air",
            ShippingMode::Sea => "sea",
        }
    }

    /// Label shown on screens and reports.
    pub const fn label(self) -> &'static str {
        match self {
            ShippingMode::Air => "Aerial",
            ShippingMode::Sea => "Marine",
        }
    }
}

impl Display for ShippingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

impl FromStr for ShippingMode {
    type Err = UnknownShippingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShippingMode::ALL
            .into_iter()
            .find(|mode| mode.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownShippingMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn labels_match_office_terms() {
        assert_eq!(ShippingMode::Air.label(), "Aerial");
        assert_eq!(ShippingMode::Sea.label(), "Marine");
    }

    #[test]
    fn parses_codes() -> TestResult {
        assert_eq!("air".parse::<ShippingMode>()?, ShippingMode::Air);
        assert_eq!("SEA".parse::<ShippingMode>()?, ShippingMode::Sea);
        assert!("road".parse::<ShippingMode>().is_err());

        Ok(())
    }
}
