//! The view composition pipeline: pure functions from an order-event
//! snapshot and the active token selection to display-ready view objects.
//! Every entry point returns `None` while fewer than two tokens are
//! selected.

use serde::Serialize;

use crate::models::{
    DecoratedOrder, ExchangeSnapshot, Order, OrderBookView, PriceChartView, TokenPair,
    TokenSelection,
};

pub mod decorate;
pub mod open_orders;
pub mod order_book;
pub mod price_chart;
pub mod trade_history;

pub use decorate::{assign_side, decorate_order};
pub use open_orders::{my_open_orders, open_orders};
pub use order_book::order_book;
pub use price_chart::price_chart;
pub use trade_history::{color_price_trends, trade_history};

/// Orders whose both legs trade inside the active pair, in input order.
pub(crate) fn orders_in_pair<'a>(orders: &'a [Order], pair: &TokenPair) -> Vec<&'a Order> {
    orders.iter().filter(|o| pair.contains_order(o)).collect()
}

/// All four composed views in one bundle, for export surfaces. The
/// my-open-orders view needs a caller account; without one it stays unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketViews {
    pub my_open_orders: Option<Vec<DecoratedOrder>>,
    pub trade_history: Option<Vec<DecoratedOrder>>,
    pub order_book: Option<OrderBookView>,
    pub price_chart: Option<PriceChartView>,
}

pub fn all_views(
    snapshot: &ExchangeSnapshot,
    selection: &TokenSelection,
    account: Option<&str>,
) -> MarketViews {
    MarketViews {
        my_open_orders: account.and_then(|a| my_open_orders(snapshot, selection, a)),
        trade_history: trade_history(snapshot, selection),
        order_book: order_book(snapshot, selection),
        price_chart: price_chart(snapshot, selection),
    }
}
