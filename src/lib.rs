//! # dex-views-rs
//!
//! A Rust library deriving display-ready trading views from a raw,
//! append-only log of DEX order events (created, filled, cancelled).
//!
//! ## Views
//!
//! | View | Reads | Produces |
//! |------|-------|----------|
//! | My open orders | all/filled/cancelled + account | decorated orders, newest first |
//! | Trade history | filled | decorated orders with price-trend colors, newest first |
//! | Order book | all/filled/cancelled | buy/sell sides, best price first |
//! | Price chart | filled | hourly OHLC candles + last price direction |
//!
//! Everything is a pure, synchronous function over an immutable
//! [`ExchangeSnapshot`] and the active [`TokenSelection`]: no shared state,
//! no suspension points, safe to recompute on every upstream change. While
//! fewer than two tokens are selected every view is `None`; "nothing
//! selected" is a steady state, not an error. Prices are exact fixed-point
//! decimals scaled from smallest-unit amounts (18 decimals by default) and
//! rounded half-up to five places; an order with a zero base amount keeps
//! flowing through the pipeline with an undefined (`None`) price.
//!
//! ## Quick Start
//!
//! ```rust
//! use dex_views_rs::{order_book, ExchangeSnapshot, Order, TokenAmount, TokenDescriptor, TokenSelection};
//!
//! let snapshot = ExchangeSnapshot {
//!     all_orders: vec![Order::new(
//!         1u64,
//!         "0xab03..",
//!         "0xdapp",
//!         TokenAmount::new(100_000_000_000_000_000_000),
//!         "0xmeth",
//!         TokenAmount::new(200_000_000_000_000_000_000),
//!         1_700_000_000,
//!     )],
//!     filled_orders: vec![],
//!     cancelled_orders: vec![],
//! };
//!
//! let selection = TokenSelection::select(
//!     TokenDescriptor::new("0xdapp"),
//!     TokenDescriptor::new("0xmeth"),
//! );
//!
//! let book = order_book(&snapshot, &selection).expect("both tokens selected");
//! assert_eq!(book.buy_orders.len(), 1);
//! assert_eq!(book.buy_orders[0].token_price.unwrap().to_string(), "2");
//! ```
//!
//! ## CLI Usage
//!
//! The library includes a binary for composing views over a snapshot file:
//!
//! ```bash
//! # All views for a pair
//! cargo run --release -- --snapshot exchange.json 0xdapp 0xmeth
//!
//! # One view, written to a file
//! cargo run --release -- --snapshot exchange.json 0xdapp 0xmeth --view order-book --out book.json
//!
//! # Views that need the caller's account
//! cargo run --release -- --snapshot exchange.json 0xdapp 0xmeth --view my-open-orders --account 0xab03..
//! ```

pub mod cache;
pub mod models;
pub mod utils;
pub mod views;

pub use cache::{load_snapshot, save_view};
pub use models::{
    AmountError, Candle, CandleSeries, Color, DecoratedOrder, ExchangeSnapshot, Order,
    OrderBookView, OrderId, PriceChange, PriceChartView, Side, TokenAmount, TokenDescriptor,
    TokenPair, TokenSelection,
};
pub use views::{
    all_views, assign_side, decorate_order, my_open_orders, open_orders, order_book, price_chart,
    trade_history, MarketViews,
};
