use std::collections::HashSet;

use tracing::warn;

use crate::models::{DecoratedOrder, ExchangeSnapshot, Order, OrderId, TokenSelection};

use super::decorate::decorate_open_order;

/// Orders in `all` that are neither filled nor cancelled.
///
/// Ids are compared by their textual form, so the same id arriving under
/// different numeric encodings still matches. The result keeps `all`'s
/// order. An id reported in both `filled` and `cancelled` is a data-source
/// anomaly; it is still excluded, and flagged.
pub fn open_orders<'a>(
    all: &'a [Order],
    filled: &[Order],
    cancelled: &[Order],
) -> Vec<&'a Order> {
    let filled_ids: HashSet<&OrderId> = filled.iter().map(|o| &o.id).collect();
    let cancelled_ids: HashSet<&OrderId> = cancelled.iter().map(|o| &o.id).collect();

    for id in filled_ids.intersection(&cancelled_ids) {
        warn!(order = %id, "order reported both filled and cancelled, treating as closed");
    }

    all.iter()
        .filter(|o| !filled_ids.contains(&o.id) && !cancelled_ids.contains(&o.id))
        .collect()
}

/// Open orders placed by `account` on the active pair, decorated with side,
/// newest first. `None` until both tokens are selected.
pub fn my_open_orders(
    snapshot: &ExchangeSnapshot,
    selection: &TokenSelection,
    account: &str,
) -> Option<Vec<DecoratedOrder>> {
    let pair = selection.pair()?;

    let open = open_orders(
        &snapshot.all_orders,
        &snapshot.filled_orders,
        &snapshot.cancelled_orders,
    );

    let mut orders: Vec<DecoratedOrder> = open
        .into_iter()
        .filter(|o| o.user == account)
        .filter(|o| pair.contains_order(o))
        .map(|o| decorate_open_order(o, &pair))
        .collect();

    orders.sort_by(|a, b| b.order.timestamp.cmp(&a.order.timestamp));

    Some(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Side, TokenAmount, TokenDescriptor};
    use serde_json::json;

    const DAPP: &str = "0xdapp";
    const METH: &str = "0xmeth";
    const E18: u128 = 1_000_000_000_000_000_000;

    fn order(id: u64, user: &str, timestamp: i64) -> Order {
        Order::new(
            id,
            user,
            DAPP,
            TokenAmount::new(100 * E18),
            METH,
            TokenAmount::new(200 * E18),
            timestamp,
        )
    }

    fn selection() -> TokenSelection {
        TokenSelection::select(TokenDescriptor::new(DAPP), TokenDescriptor::new(METH))
    }

    #[test]
    fn test_open_orders_is_set_difference() {
        let all = vec![
            order(1, "0xa", 10),
            order(2, "0xa", 20),
            order(3, "0xa", 30),
            order(4, "0xa", 40),
        ];
        let filled = vec![order(2, "0xa", 20)];
        let cancelled = vec![order(4, "0xa", 40)];

        let open = open_orders(&all, &filled, &cancelled);
        let ids: Vec<&str> = open.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"], "keeps all-orders order");
    }

    #[test]
    fn test_open_orders_matches_ids_across_encodings() {
        let all: Vec<Order> = serde_json::from_value(json!([{
            "id": 1,
            "user": "0xa",
            "tokenGet": DAPP,
            "amountGet": "100",
            "tokenGive": METH,
            "amountGive": "200",
            "timestamp": 10
        }]))
        .unwrap();
        let filled: Vec<Order> = serde_json::from_value(json!([{
            "id": "1",
            "user": "0xa",
            "tokenGet": DAPP,
            "amountGet": "100",
            "tokenGive": METH,
            "amountGive": "200",
            "timestamp": 10
        }]))
        .unwrap();

        assert!(open_orders(&all, &filled, &[]).is_empty());
    }

    #[test]
    fn test_anomalous_order_is_still_excluded() {
        let all = vec![order(1, "0xa", 10), order(2, "0xa", 20)];
        let both = vec![order(1, "0xa", 10)];

        let open = open_orders(&all, &both, &both);
        let ids: Vec<&str> = open.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_my_open_orders_requires_full_selection() {
        let snapshot = ExchangeSnapshot {
            all_orders: vec![order(1, "0xa", 10)],
            ..Default::default()
        };
        assert!(my_open_orders(&snapshot, &TokenSelection::default(), "0xa").is_none());
    }

    #[test]
    fn test_my_open_orders_filters_and_sorts() {
        let foreign = Order::new(
            5u64,
            "0xa",
            "0xother",
            TokenAmount::new(E18),
            METH,
            TokenAmount::new(E18),
            50,
        );
        let snapshot = ExchangeSnapshot {
            all_orders: vec![
                order(1, "0xa", 10),
                order(2, "0xb", 20), // someone else's
                order(3, "0xa", 30),
                foreign, // off-pair
                order(4, "0xa", 40),
            ],
            filled_orders: vec![order(4, "0xa", 40)],
            cancelled_orders: vec![],
        };

        let mine = my_open_orders(&snapshot, &selection(), "0xa").unwrap();
        let ids: Vec<&str> = mine.iter().map(|o| o.order.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"], "newest first, filtered");
        assert!(mine.iter().all(|o| o.order_type == Some(Side::Buy)));
    }
}
