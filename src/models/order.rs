use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order identifier, kept in its textual form.
///
/// Event sources encode ids inconsistently (JSON string vs JSON integer);
/// both are normalized to text at the boundary so that textually identical
/// encodings always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        OrderId(id.to_string())
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        OrderId(id)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Num(u64),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => OrderId(s),
            Raw::Num(n) => OrderId(n.to_string()),
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is not a base-10 unsigned integer: {0:?}")]
    NotAnInteger(String),
    #[error("amount {amount} does not fit a decimal with {decimals} fractional digits")]
    OutOfRange { amount: u128, decimals: u8 },
}

/// A token quantity in smallest units.
///
/// Wide enough for any realistic on-chain amount (exact past 10^27).
/// Serializes as a string; deserializes from either a string or a JSON
/// integer. Amounts beyond `u64::MAX` must be encoded as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(0);

    pub const fn new(raw: u128) -> Self {
        TokenAmount(raw)
    }

    pub fn raw(self) -> u128 {
        self.0
    }

    /// Human-scale value with `decimals` fractional digits, as an exact
    /// fixed-point decimal. No float reinterpretation anywhere on this path.
    pub fn to_decimal(self, decimals: u8) -> Result<Decimal, AmountError> {
        let units = i128::try_from(self.0).map_err(|_| AmountError::OutOfRange {
            amount: self.0,
            decimals,
        })?;
        Decimal::try_from_i128_with_scale(units, u32::from(decimals))
            .map(|d| d.normalize())
            .map_err(|_| AmountError::OutOfRange {
                amount: self.0,
                decimals,
            })
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for TokenAmount {
    fn from(raw: u128) -> Self {
        TokenAmount(raw)
    }
}

impl FromStr for TokenAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u128>()
            .map(TokenAmount)
            .map_err(|_| AmountError::NotAnInteger(s.to_string()))
    }
}

impl Serialize for TokenAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Num(u64),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s.parse().map_err(serde::de::Error::custom),
            Raw::Num(n) => Ok(TokenAmount(u128::from(n))),
        }
    }
}

/// A single order event from the on-chain log. Immutable input record:
/// every derived field lives on `DecoratedOrder`, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Address of the account that placed the order.
    pub user: String,
    /// Token the order wants to receive.
    pub token_get: String,
    pub amount_get: TokenAmount,
    /// Token the order is offering.
    pub token_give: String,
    pub amount_give: TokenAmount,
    /// Unix seconds.
    pub timestamp: i64,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        user: &str,
        token_get: &str,
        amount_get: TokenAmount,
        token_give: &str,
        amount_give: TokenAmount,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            user: user.to_string(),
            token_get: token_get.to_string(),
            amount_get,
            token_give: token_give.to_string(),
            amount_give,
            timestamp,
        }
    }
}

/// Immutable snapshot of the three order collections produced by the event
/// ingestion pipeline. Views never mutate it; each view call recomputes from
/// whatever snapshot it is handed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeSnapshot {
    #[serde(default)]
    pub all_orders: Vec<Order>,
    #[serde(default)]
    pub filled_orders: Vec<Order>,
    #[serde(default)]
    pub cancelled_orders: Vec<Order>,
}
