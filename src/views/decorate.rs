use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::models::{DecoratedOrder, Order, Side, TokenAmount, TokenPair};
use crate::utils::format_timestamp;

/// Displayed unit prices carry five decimal places.
const PRICE_DECIMALS: u32 = 5;

/// Label an order buy or sell relative to the base token: an order giving
/// the quote token is acquiring the base token, so it is a buy.
pub fn assign_side(order: &Order, pair: &TokenPair) -> Side {
    if order.token_give == pair.token1.address {
        Side::Buy
    } else {
        Side::Sell
    }
}

/// Base decoration shared by every view: normalized amounts, unit price,
/// display timestamp.
///
/// Which side of the swap each amount sits on depends only on the token flow
/// direction, not on buy/sell: an order giving token0 has its give-amount on
/// the base leg, any other order has its get-amount there.
pub fn decorate_order(order: &Order, pair: &TokenPair) -> DecoratedOrder {
    let (base_amount, quote_amount) = if order.token_give == pair.token0.address {
        (order.amount_give, order.amount_get)
    } else {
        (order.amount_get, order.amount_give)
    };

    let token0_amount = scale_amount(base_amount, pair.token0.decimals, order);
    let token1_amount = scale_amount(quote_amount, pair.token1.decimals, order);

    let token_price = match (token0_amount, token1_amount) {
        (Some(base), Some(quote)) => unit_price(base, quote, order),
        _ => None,
    };

    DecoratedOrder {
        order: order.clone(),
        token0_amount: token0_amount.unwrap_or(Decimal::ZERO),
        token1_amount: token1_amount.unwrap_or(Decimal::ZERO),
        token_price,
        formatted_timestamp: format_timestamp(order.timestamp),
        order_type: None,
        order_type_class: None,
        order_fill_action: None,
        token_price_class: None,
    }
}

/// Decoration for the my-open-orders view: base fields plus side and its
/// color.
pub(crate) fn decorate_open_order(order: &Order, pair: &TokenPair) -> DecoratedOrder {
    let side = assign_side(order, pair);
    DecoratedOrder {
        order_type: Some(side),
        order_type_class: Some(side.color()),
        ..decorate_order(order, pair)
    }
}

/// Decoration for the order-book view: additionally carries the action a
/// counterparty takes to fill the order.
pub(crate) fn decorate_order_book_order(order: &Order, pair: &TokenPair) -> DecoratedOrder {
    let side = assign_side(order, pair);
    DecoratedOrder {
        order_type: Some(side),
        order_type_class: Some(side.color()),
        order_fill_action: Some(side.opposite()),
        ..decorate_order(order, pair)
    }
}

fn scale_amount(amount: TokenAmount, decimals: u8, order: &Order) -> Option<Decimal> {
    match amount.to_decimal(decimals) {
        Ok(scaled) => Some(scaled),
        Err(e) => {
            warn!(order = %order.id, error = %e, "amount cannot be scaled, price left unset");
            None
        }
    }
}

/// token1 per token0, rounded half-up to five decimal places. A zero base
/// amount makes the price undefined; the order is kept, only its price is
/// the sentinel.
fn unit_price(token0_amount: Decimal, token1_amount: Decimal, order: &Order) -> Option<Decimal> {
    if token0_amount.is_zero() {
        warn!(order = %order.id, "zero base amount, price undefined");
        return None;
    }
    token1_amount
        .checked_div(token0_amount)
        .map(|price| price.round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
}
