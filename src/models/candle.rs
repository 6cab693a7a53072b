use rust_decimal::Decimal;
use serde::Serialize;

/// OHLC summary of the trade prices inside one chart bucket.
/// `bucket_start` is the open time: unix seconds truncated to the UTC hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub bucket_start: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

/// One chart series. The chart consumer expects the candles wrapped in a
/// `series: [{data: [...]}]` envelope even though there is only ever one
/// series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleSeries {
    pub data: Vec<Candle>,
}

/// Direction of the most recent fill price against the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceChange {
    #[serde(rename = "+")]
    Up,
    #[serde(rename = "-")]
    Down,
}

impl PriceChange {
    pub fn symbol(self) -> &'static str {
        match self {
            PriceChange::Up => "+",
            PriceChange::Down => "-",
        }
    }
}

/// The composed price-chart view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChartView {
    /// Price of the chronologically last fill (0 with fewer than two fills).
    pub last_price: Decimal,
    pub last_price_change: PriceChange,
    pub series: Vec<CandleSeries>,
}
