pub mod candle;
pub mod decorated;
pub mod order;
pub mod order_book;
pub mod token;

pub use candle::{Candle, CandleSeries, PriceChange, PriceChartView};
pub use decorated::{Color, DecoratedOrder, Side};
pub use order::{AmountError, ExchangeSnapshot, Order, OrderId, TokenAmount};
pub use order_book::OrderBookView;
pub use token::{TokenDescriptor, TokenPair, TokenSelection};
