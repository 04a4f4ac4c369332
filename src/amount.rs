use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Side of the ledger an amount lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Outflow,
    Inflow,
}

impl Direction {
    /// Tag written to the memo when no category is available
    pub fn memo(self) -> &'static str {
        match self {
            Direction::Outflow => "Outflow",
            Direction::Inflow => "Inflow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAmount {
    pub direction: Direction,
    /// Always non-negative, with exactly two fraction digits
    pub value: Decimal,
}

impl ParsedAmount {
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.value)
    }
}

const MINOR_UNIT_SCALE: u32 = 2;

/// Parses a locale-formatted amount such as `-10.000,00`.
///
/// Every character besides ASCII digits and `-` is dropped, and what remains is read as a
/// number of minor units. Zero counts as an inflow.
pub fn parse_amount(raw: &str) -> Result<ParsedAmount> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let minor_units: i64 = digits.parse().map_err(|_| Error::MalformedAmount {
        raw: raw.to_owned(),
    })?;
    let direction = if minor_units < 0 {
        Direction::Outflow
    } else {
        Direction::Inflow
    };
    let value = Decimal::new(minor_units, MINOR_UNIT_SCALE).abs();
    Ok(ParsedAmount { direction, value })
}
