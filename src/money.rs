//! Typed currency amounts and the parser for opportunity savings text.
//!
//! Savings are written as `"$5,800/month"` or `"$5.8K/month"`. The grammar is
//!
//! ```text
//! savings = "$" amount [ "K" | "M" ] [ "/month" ]
//! amount  = digits-with-thousands-commas [ "." digits ]
//! ```
//!
//! Anything outside it is a [`ParseError`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty savings figure")]
    Empty,

    #[error("missing '$' prefix in {0:?}")]
    MissingCurrency(String),

    #[error("malformed amount in {0:?}")]
    InvalidAmount(String),

    #[error("amount out of range in {0:?}")]
    Overflow(String),
}

/// A currency amount held as whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    pub fn cents(self) -> i64 {
        self.cents
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn as_dollars(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// `None` when the total no longer fits in whole cents.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.cents.checked_add(rhs.cents).map(Self::from_cents)
    }

    /// Parses a monthly savings figure such as `"$2,400/month"`.
    pub fn parse_monthly(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let Some(rest) = trimmed.strip_prefix('$') else {
            return Err(ParseError::MissingCurrency(input.to_string()));
        };
        let rest = rest.strip_suffix("/month").unwrap_or(rest);

        let (amount, multiplier) = if let Some(a) = rest.strip_suffix('K') {
            (a, 1_000)
        } else if let Some(a) = rest.strip_suffix('M') {
            (a, 1_000_000)
        } else {
            (rest, 1)
        };

        let (whole, fraction) = split_amount(amount)
            .ok_or_else(|| ParseError::InvalidAmount(input.to_string()))?;

        to_cents(&whole, fraction, multiplier)
            .map(Self::from_cents)
            .ok_or_else(|| ParseError::Overflow(input.to_string()))
    }
}

/// Splits `"5,800.25"` into `("5800", "25")`, checking comma grouping.
fn split_amount(amount: &str) -> Option<(String, &str)> {
    let (whole, fraction) = match amount.split_once('.') {
        Some((w, f)) => (w, f),
        None => (amount, ""),
    };

    if whole.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if amount.contains('.') && fraction.is_empty() {
        return None;
    }

    let groups: Vec<&str> = whole.split(',').collect();
    let well_grouped = groups.iter().enumerate().all(|(i, group)| {
        let digits_only = !group.is_empty() && group.chars().all(|c| c.is_ascii_digit());
        let width_ok = if i == 0 {
            groups.len() == 1 || group.len() <= 3
        } else {
            group.len() == 3
        };
        digits_only && width_ok
    });

    well_grouped.then(|| (groups.concat(), fraction))
}

fn to_cents(whole: &str, fraction: &str, multiplier: i128) -> Option<i64> {
    let scale = 10_i128.checked_pow(u32::try_from(fraction.len()).ok()?)?;
    let whole: i128 = whole.parse().ok()?;
    let fraction: i128 = if fraction.is_empty() {
        0
    } else {
        fraction.parse().ok()?
    };

    let scaled = whole
        .checked_mul(scale)?
        .checked_add(fraction)?
        .checked_mul(multiplier)?
        .checked_mul(100)?;

    // Round half up to the nearest cent
    let cents = (scaled + scale / 2) / scale;
    i64::try_from(cents).ok()
}

impl FromStr for Money {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_monthly(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let dollars = (abs / 100).to_string();

        let mut grouped = String::new();
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}${grouped}.{:02}", abs % 100)
    }
}
