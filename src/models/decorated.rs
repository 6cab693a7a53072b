use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Order;

/// Buy or sell, relative to the base token of the active pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// What a counterparty does to fill an order of this side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Side::Buy => Color::Green,
            Side::Sell => Color::Red,
        }
    }
}

/// The two display colors the presentation layer styles with.
/// Serializes straight to the hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    #[serde(rename = "#25CE8F")]
    Green,
    #[serde(rename = "#F45353")]
    Red,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::Green => "#25CE8F",
            Color::Red => "#F45353",
        }
    }
}

/// An order enriched with derived display fields.
///
/// Built fresh on every view invocation from the raw `Order` plus computed
/// fields; the input order is never touched. `token_price` is `None` when the
/// price is undefined (zero base amount), serialized as `null`. The trailing
/// fields are view-specific and omitted from JSON where a view does not set
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedOrder {
    #[serde(flatten)]
    pub order: Order,
    /// Base-token quantity, human scale.
    pub token0_amount: Decimal,
    /// Quote-token quantity, human scale.
    pub token1_amount: Decimal,
    /// token1 per token0, rounded half-up to 5 decimal places.
    pub token_price: Option<Decimal>,
    pub formatted_timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type_class: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_fill_action: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_price_class: Option<Color>,
}
