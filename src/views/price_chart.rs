use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{
    Candle, CandleSeries, DecoratedOrder, ExchangeSnapshot, PriceChange, PriceChartView,
    TokenSelection,
};
use crate::utils::hour_bucket;

use super::decorate::decorate_order;
use super::orders_in_pair;

/// Hourly OHLC candles over the filled orders of the active pair, plus the
/// latest fill price and its direction. `None` until both tokens are
/// selected.
pub fn price_chart(
    snapshot: &ExchangeSnapshot,
    selection: &TokenSelection,
) -> Option<PriceChartView> {
    let pair = selection.pair()?;

    let mut fills = orders_in_pair(&snapshot.filled_orders, &pair);
    // bucket membership and open/close depend on chronological order
    fills.sort_by_key(|o| o.timestamp);

    let trades: Vec<DecoratedOrder> = fills.iter().map(|o| decorate_order(o, &pair)).collect();

    let (last_price, last_price_change) = closing_prices(&trades);

    Some(PriceChartView {
        last_price,
        last_price_change,
        series: vec![CandleSeries {
            data: build_candles(&trades),
        }],
    })
}

/// Price of the chronologically last fill and its direction against the one
/// before it. Fewer than two fills reports 0 / "-"; an undefined tail price
/// reads as 0.
fn closing_prices(trades: &[DecoratedOrder]) -> (Decimal, PriceChange) {
    if trades.len() < 2 {
        return (Decimal::ZERO, PriceChange::Down);
    }

    let last_price = trades[trades.len() - 1].token_price.unwrap_or(Decimal::ZERO);
    let second_last_price = trades[trades.len() - 2]
        .token_price
        .unwrap_or(Decimal::ZERO);

    let change = if last_price >= second_last_price {
        PriceChange::Up
    } else {
        PriceChange::Down
    };

    (last_price, change)
}

/// One OHLC candle per populated UTC hour, oldest bucket first. Input must
/// already be sorted oldest-first: open is the bucket's first price, close
/// its last, high/low take the first occurrence on ties. Fills without a
/// defined price are left out of the chart. Hours with no fills get no
/// candle.
fn build_candles(trades: &[DecoratedOrder]) -> Vec<Candle> {
    let mut buckets: BTreeMap<i64, Vec<Decimal>> = BTreeMap::new();

    for trade in trades {
        let price = match trade.token_price {
            Some(price) => price,
            None => {
                warn!(order = %trade.order.id, "fill without a defined price left out of the chart");
                continue;
            }
        };
        buckets
            .entry(hour_bucket(trade.order.timestamp))
            .or_default()
            .push(price);
    }

    buckets
        .into_iter()
        .map(|(bucket_start, prices)| {
            let open = prices[0];
            let close = prices[prices.len() - 1];
            let mut high = open;
            let mut low = open;
            for price in &prices {
                if *price > high {
                    high = *price;
                }
                if *price < low {
                    low = *price;
                }
            }
            Candle {
                bucket_start,
                open,
                high,
                low,
                close,
            }
        })
        .collect()
}
