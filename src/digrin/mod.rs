//! Digrin reports: dividends, prices, splits, financial statement lines and
//! dividend-growth projections, each read from one table on a Digrin page.
//!
//! Every report is located by a marker (a header text that only its table carries)
//! and returned as raw text. The `*_series` methods additionally normalize the columns
//! a chart of that report needs.

mod api;
mod model;
mod series;

pub use model::{
    AssetsLiabilitiesPoint, DividendPoint, FreeCashFlowPoint, NetIncomePoint, PricePoint,
};

use crate::core::{SdClient, SdError, Table};

/// One table published by Digrin for a ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigrinReport {
    /// Dividend history.
    Dividend,
    /// Payout ratio history.
    PayoutRatio,
    /// Real and adjusted price history.
    Price,
    /// Stock split history.
    StockSplits,
    /// Assets vs liabilities.
    AssetsVsLiabilities,
    /// Free cash flow and stock based compensation.
    FreeCashFlow,
    /// Net income.
    NetIncome,
    /// Cash, debt and capital leases.
    CashAndDebt,
    /// Shares outstanding.
    SharesOutstanding,
    /// Capital expenditures.
    Expenses,
    /// Cost of revenue.
    CostOfRevenue,
    /// Projection at the 3 year dividend growth rate.
    Dgr3,
    /// Projection at the 5 year dividend growth rate.
    Dgr5,
    /// Projection at the 10 year dividend growth rate.
    Dgr10,
    /// Actual and estimated EPS.
    UpcomingEstimatedEarnings,
}

impl DigrinReport {
    /// Every report, in the order the site lists them.
    pub const ALL: [Self; 15] = [
        Self::Dividend,
        Self::PayoutRatio,
        Self::Price,
        Self::StockSplits,
        Self::AssetsVsLiabilities,
        Self::FreeCashFlow,
        Self::NetIncome,
        Self::CashAndDebt,
        Self::SharesOutstanding,
        Self::Expenses,
        Self::CostOfRevenue,
        Self::Dgr3,
        Self::Dgr5,
        Self::Dgr10,
        Self::UpcomingEstimatedEarnings,
    ];

    /// Path appended to `<base><ticker>`; empty for the main detail page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dividend => "",
            Self::PayoutRatio => "/payout_ratio",
            Self::Price => "/price",
            Self::StockSplits => "/stock_split",
            Self::AssetsVsLiabilities
            | Self::FreeCashFlow
            | Self::NetIncome
            | Self::CashAndDebt
            | Self::SharesOutstanding
            | Self::Expenses
            | Self::CostOfRevenue => "/financials",
            Self::Dgr3 => "/dgr3",
            Self::Dgr5 => "/dgr5",
            Self::Dgr10 => "/dgr10",
            Self::UpcomingEstimatedEarnings => "/earnings",
        }
    }

    /// Text of a cell that identifies the report's table on its page.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Dividend => "Ex-dividend date",
            Self::PayoutRatio => "Payout ratio",
            Self::Price => "Adjusted price",
            Self::StockSplits => "Split Ratio",
            Self::AssetsVsLiabilities => "Assets",
            Self::FreeCashFlow => "Free Cash Flow",
            Self::NetIncome => "Net Income",
            Self::CashAndDebt => "Capital Lease",
            Self::SharesOutstanding => "Shares Outstanding",
            Self::Expenses => "Capex",
            Self::CostOfRevenue => "Cost of Revenue",
            Self::Dgr3 | Self::Dgr5 | Self::Dgr10 => "Estimated Yield on Cost",
            Self::UpcomingEstimatedEarnings => "Actual / Estimated EPS",
        }
    }

    /// Name used in the "no such report" error.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dividend => "dividend",
            Self::PayoutRatio => "payout ratio",
            Self::Price => "price",
            Self::StockSplits => "stock split",
            other => other.marker(),
        }
    }

    /// Fixture/dump name of the page the report lives on.
    const fn endpoint(self) -> &'static str {
        match self {
            Self::Dividend => "digrin_detail",
            Self::PayoutRatio => "digrin_payout_ratio",
            Self::Price => "digrin_price",
            Self::StockSplits => "digrin_stock_split",
            Self::Dgr3 => "digrin_dgr3",
            Self::Dgr5 => "digrin_dgr5",
            Self::Dgr10 => "digrin_dgr10",
            Self::UpcomingEstimatedEarnings => "digrin_earnings",
            _ => "digrin_financials",
        }
    }
}

/// Client for the Digrin pages of one ticker.
#[derive(Debug, Clone)]
pub struct Digrin {
    client: SdClient,
    ticker: String,
}

impl Digrin {
    /// Creates a Digrin client for `ticker`.
    pub fn new(client: &SdClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
        }
    }

    /// The ticker this client reads.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Fetches one report table.
    ///
    /// # Errors
    ///
    /// [`SdError::NotFound`] when the page has no table carrying the report's marker,
    /// or any fetch error.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn report(&self, report: DigrinReport) -> Result<Table, SdError> {
        api::fetch_report(&self.client, &self.ticker, report).await
    }

    /// Dividend history (`Ex-dividend date`, `Dividend amount (change)`, ...).
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn dividend(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::Dividend).await
    }

    /// Payout ratio history.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn payout_ratio(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::PayoutRatio).await
    }

    /// Real and adjusted price history.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn price(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::Price).await
    }

    /// Stock split history.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn stock_splits(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::StockSplits).await
    }

    /// Assets vs liabilities.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn assets_vs_liabilities(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::AssetsVsLiabilities).await
    }

    /// Free cash flow.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn free_cash_flow(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::FreeCashFlow).await
    }

    /// Net income.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn net_income(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::NetIncome).await
    }

    /// Cash and debt.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn cash_and_debt(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::CashAndDebt).await
    }

    /// Shares outstanding.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn shares_outstanding(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::SharesOutstanding).await
    }

    /// Expenses (capex).
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn expenses(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::Expenses).await
    }

    /// Cost of revenue.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn cost_of_revenue(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::CostOfRevenue).await
    }

    /// Yield-on-cost projection at the 3 year dividend growth rate.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn dgr3(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::Dgr3).await
    }

    /// Yield-on-cost projection at the 5 year dividend growth rate.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn dgr5(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::Dgr5).await
    }

    /// Yield-on-cost projection at the 10 year dividend growth rate.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn dgr10(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::Dgr10).await
    }

    /// Actual and estimated EPS for upcoming quarters.
    ///
    /// # Errors
    ///
    /// See [`Digrin::report`].
    pub async fn upcoming_estimated_earnings(&self) -> Result<Table, SdError> {
        self.report(DigrinReport::UpcomingEstimatedEarnings).await
    }

    /* ---------------- Chart series ---------------- */

    /// Real vs adjusted price per date.
    ///
    /// # Errors
    ///
    /// Report errors, [`SdError::Data`] for a missing column and
    /// [`SdError::Normalize`] for a cell that does not parse.
    pub async fn price_series(&self) -> Result<Vec<PricePoint>, SdError> {
        series::price_points(&self.price().await?)
    }

    /// Dividend amount per ex-dividend date, without the change in parentheses.
    ///
    /// # Errors
    ///
    /// See [`Digrin::price_series`].
    pub async fn dividend_series(&self) -> Result<Vec<DividendPoint>, SdError> {
        series::dividend_points(&self.dividend().await?)
    }

    /// Assets and liabilities per balance sheet date.
    ///
    /// # Errors
    ///
    /// See [`Digrin::price_series`].
    pub async fn assets_vs_liabilities_series(
        &self,
    ) -> Result<Vec<AssetsLiabilitiesPoint>, SdError> {
        series::assets_liabilities_points(&self.assets_vs_liabilities().await?)
    }

    /// Free cash flow and stock based compensation per date. Unknown (`?`) values are 0.
    ///
    /// # Errors
    ///
    /// See [`Digrin::price_series`].
    pub async fn free_cash_flow_series(&self) -> Result<Vec<FreeCashFlowPoint>, SdError> {
        series::free_cash_flow_points(&self.free_cash_flow().await?)
    }

    /// Net income per date. Unknown (`?`) values are 0.
    ///
    /// # Errors
    ///
    /// See [`Digrin::price_series`].
    pub async fn net_income_series(&self) -> Result<Vec<NetIncomePoint>, SdError> {
        series::net_income_points(&self.net_income().await?)
    }
}
