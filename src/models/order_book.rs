use serde::Serialize;

use crate::models::DecoratedOrder;

/// Open buy and sell orders for the active pair, each side sorted by price
/// descending (best price first, ties in original order, undefined prices
/// last).
///
/// Some consumers address the sides as `buy`/`sell`, others as
/// `buyOrders`/`sellOrders`; the two conventions are unified here under the
/// latter names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookView {
    pub buy_orders: Vec<DecoratedOrder>,
    pub sell_orders: Vec<DecoratedOrder>,
}
