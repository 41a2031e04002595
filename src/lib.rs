//! stockdex-rs: dividends, prices, statements, options and holders of a stock or ETF,
//! scraped from the tables of public finance web pages.
//!
//! Every report is fetched fresh, located on its page (by a marker text or by its
//! position), and returned as a [`Table`] of raw cell text. The helpers in
//! [`crate::core::normalize`] turn the cells a caller needs into numbers and dates.
//!
//! ```no_run
//! # use stockdex_rs::{SdClient, Ticker};
//! # #[tokio::main]
//! # async fn main() -> Result<(), stockdex_rs::SdError> {
//! let client = SdClient::default();
//! let series = Ticker::new(&client, "KO").digrin_dividend_series().await?;
//! for point in series.iter().take(3) {
//!     println!("{} {:.2}", point.ex_dividend_date, point.amount);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod digrin;
pub mod ticker;
pub mod yahoo;

pub use crate::core::{Backoff, RetryConfig, SdClient, SdClientBuilder, SdError, Table};
pub use digrin::{
    AssetsLiabilitiesPoint, Digrin, DigrinReport, DividendPoint, FreeCashFlowPoint,
    NetIncomePoint, PricePoint,
};
pub use ticker::{SecurityType, Ticker};
pub use yahoo::{OptionTables, Yahoo};
