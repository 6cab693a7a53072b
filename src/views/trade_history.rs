use rust_decimal::Decimal;

use crate::models::{Color, DecoratedOrder, ExchangeSnapshot, OrderId, TokenSelection};

use super::decorate::decorate_order;
use super::orders_in_pair;

/// Filled orders on the active pair, colored by price trend, newest first.
/// `None` until both tokens are selected.
pub fn trade_history(
    snapshot: &ExchangeSnapshot,
    selection: &TokenSelection,
) -> Option<Vec<DecoratedOrder>> {
    let pair = selection.pair()?;

    let mut fills = orders_in_pair(&snapshot.filled_orders, &pair);
    // the trend scan walks the fills oldest-first
    fills.sort_by_key(|o| o.timestamp);

    let mut trades = color_price_trends(fills.iter().map(|o| decorate_order(o, &pair)));

    // newest first for display
    trades.sort_by(|a, b| b.order.timestamp.cmp(&a.order.timestamp));

    Some(trades)
}

/// Sequential left-to-right scan over trades sorted oldest-first: each trade
/// is colored GREEN when its price holds or improves on its predecessor's,
/// RED when it drops. The accumulator carries the previous trade's id and
/// price; the first trade has no predecessor and shows GREEN. Reordering the
/// input changes the output, so this must stay a single in-order pass.
pub fn color_price_trends<I>(trades: I) -> Vec<DecoratedOrder>
where
    I: IntoIterator<Item = DecoratedOrder>,
{
    let mut previous: Option<(OrderId, Option<Decimal>)> = None;
    let mut colored = Vec::new();

    for trade in trades {
        let class = price_trend(&trade, previous.as_ref());
        let trade = DecoratedOrder {
            token_price_class: Some(class),
            ..trade
        };
        previous = Some((trade.order.id.clone(), trade.token_price));
        colored.push(trade);
    }

    colored
}

fn price_trend(trade: &DecoratedOrder, previous: Option<&(OrderId, Option<Decimal>)>) -> Color {
    match previous {
        None => Color::Green,
        Some((previous_id, previous_price)) => {
            // a repeated id is the same order seen again, never a downtick;
            // undefined prices order below every defined price
            if *previous_id == trade.order.id || *previous_price <= trade.token_price {
                Color::Green
            } else {
                Color::Red
            }
        }
    }
}
