use crate::models::{DecoratedOrder, ExchangeSnapshot, OrderBookView, Side, TokenSelection};

use super::decorate::decorate_order_book_order;
use super::open_orders::open_orders;

/// The order book for the active pair: open orders partitioned by side,
/// each side sorted by price descending (stable, so equal prices keep their
/// original relative order; undefined prices sink to the end). `None` until
/// both tokens are selected.
pub fn order_book(
    snapshot: &ExchangeSnapshot,
    selection: &TokenSelection,
) -> Option<OrderBookView> {
    let pair = selection.pair()?;

    let open = open_orders(
        &snapshot.all_orders,
        &snapshot.filled_orders,
        &snapshot.cancelled_orders,
    );

    let (mut buy_orders, mut sell_orders): (Vec<DecoratedOrder>, Vec<DecoratedOrder>) = open
        .into_iter()
        .filter(|o| pair.contains_order(o))
        .map(|o| decorate_order_book_order(o, &pair))
        .partition(|d| d.order_type == Some(Side::Buy));

    buy_orders.sort_by(|a, b| b.token_price.cmp(&a.token_price));
    sell_orders.sort_by(|a, b| b.token_price.cmp(&a.token_price));

    Some(OrderBookView {
        buy_orders,
        sell_orders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, TokenAmount, TokenDescriptor};
    use rust_decimal_macros::dec;

    const DAPP: &str = "0xdapp";
    const METH: &str = "0xmeth";
    const E18: u128 = 1_000_000_000_000_000_000;

    fn selection() -> TokenSelection {
        TokenSelection::select(TokenDescriptor::new(DAPP), TokenDescriptor::new(METH))
    }

    /// Buy order for 1 base token at the given price in hundredths.
    fn buy(id: u64, price_in_hundredths: u128) -> Order {
        Order::new(
            id,
            "0xa",
            DAPP,
            TokenAmount::new(E18),
            METH,
            TokenAmount::new(price_in_hundredths * E18 / 100),
            i64::try_from(id).unwrap(),
        )
    }

    /// Sell order for 1 base token at the given price in hundredths.
    fn sell(id: u64, price_in_hundredths: u128) -> Order {
        Order::new(
            id,
            "0xa",
            METH,
            TokenAmount::new(price_in_hundredths * E18 / 100),
            DAPP,
            TokenAmount::new(E18),
            i64::try_from(id).unwrap(),
        )
    }

    #[test]
    fn test_partitions_by_side() {
        let snapshot = ExchangeSnapshot {
            all_orders: vec![buy(1, 100), sell(2, 110), buy(3, 105)],
            ..Default::default()
        };
        let book = order_book(&snapshot, &selection()).unwrap();
        assert_eq!(book.buy_orders.len(), 2);
        assert_eq!(book.sell_orders.len(), 1);
        assert!(book
            .sell_orders
            .iter()
            .all(|o| o.order_fill_action == Some(Side::Buy)));
    }

    #[test]
    fn test_sides_are_sorted_price_descending() {
        let snapshot = ExchangeSnapshot {
            all_orders: vec![
                buy(1, 100),
                buy(2, 150),
                buy(3, 125),
                sell(4, 90),
                sell(5, 130),
            ],
            ..Default::default()
        };
        let book = order_book(&snapshot, &selection()).unwrap();

        for side in [&book.buy_orders, &book.sell_orders] {
            for pair in side.windows(2) {
                assert!(
                    pair[0].token_price >= pair[1].token_price,
                    "prices must be non-increasing"
                );
            }
        }
        assert_eq!(book.buy_orders[0].token_price, Some(dec!(1.5)));
        assert_eq!(book.sell_orders[0].token_price, Some(dec!(1.3)));
    }

    #[test]
    fn test_equal_prices_keep_original_order() {
        let snapshot = ExchangeSnapshot {
            all_orders: vec![buy(1, 100), buy(2, 100), buy(3, 100)],
            ..Default::default()
        };
        let book = order_book(&snapshot, &selection()).unwrap();
        let ids: Vec<&str> = book.buy_orders.iter().map(|o| o.order.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_excludes_filled_and_cancelled_orders() {
        let snapshot = ExchangeSnapshot {
            all_orders: vec![buy(1, 100), buy(2, 110), buy(3, 120)],
            filled_orders: vec![buy(2, 110)],
            cancelled_orders: vec![buy(3, 120)],
        };
        let book = order_book(&snapshot, &selection()).unwrap();
        let ids: Vec<&str> = book.buy_orders.iter().map(|o| o.order.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_undefined_prices_sort_last() {
        let zero_base = Order::new(
            9u64,
            "0xa",
            DAPP,
            TokenAmount::ZERO,
            METH,
            TokenAmount::new(E18),
            9,
        );
        let snapshot = ExchangeSnapshot {
            all_orders: vec![zero_base, buy(1, 100)],
            ..Default::default()
        };
        let book = order_book(&snapshot, &selection()).unwrap();
        assert_eq!(book.buy_orders[0].order.id.as_str(), "1");
        assert_eq!(book.buy_orders[1].token_price, None);
    }
}
