mod model;

pub use model::SecurityType;

use crate::core::{SdClient, SdError, Table};
use crate::digrin::{
    AssetsLiabilitiesPoint, Digrin, DividendPoint, FreeCashFlowPoint, NetIncomePoint, PricePoint,
};
use crate::yahoo::{OptionTables, Yahoo};

/// A high-level interface for a single security, merging the report accessors of every
/// page source under one name.
///
/// A `Ticker` holds one client per source ([`Digrin`], [`Yahoo`]) and delegates each
/// accessor to the source that publishes it. Every call fetches its page anew; nothing
/// is cached between calls.
///
/// # Example
///
/// ```no_run
/// # use stockdex_rs::{SdClient, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SdClient::default();
/// let ticker = Ticker::new(&client, "AAPL");
///
/// let dividends = ticker.digrin_dividend().await?;
/// println!("{} dividends, columns {:?}", dividends.len(), dividends.columns());
///
/// let holders = ticker.major_holders().await?;
/// println!("{holders:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    digrin: Option<Digrin>,
    yahoo: Option<Yahoo>,
    isin: Option<String>,
    security_type: SecurityType,
}

impl Ticker {
    /// Creates a `Ticker` for a stock symbol.
    ///
    /// An empty symbol attaches no page source, so every report returns
    /// [`SdError::Unsupported`] without a request. Use [`Ticker::with_identifiers`]
    /// to reject missing identifiers up front.
    pub fn new(client: &SdClient, symbol: impl Into<String>) -> Self {
        let symbol = Some(symbol.into()).filter(|s| !s.is_empty());
        Self {
            digrin: symbol.as_ref().map(|s| Digrin::new(client, s.clone())),
            yahoo: symbol.map(|s| Yahoo::new(client, s)),
            isin: None,
            security_type: SecurityType::Stock,
        }
    }

    /// Creates a `Ticker` for an ETF known only by its ISIN.
    ///
    /// No page source is attached: every report returns [`SdError::Unsupported`].
    pub fn from_isin(isin: impl Into<String>) -> Self {
        Self {
            digrin: None,
            yahoo: None,
            isin: Some(isin.into()),
            security_type: SecurityType::Etf,
        }
    }

    /// Creates a `Ticker` from whichever identifiers are known.
    ///
    /// # Errors
    ///
    /// [`SdError::MissingIdentifier`] when both identifiers are missing or empty.
    pub fn with_identifiers(
        client: &SdClient,
        symbol: Option<String>,
        isin: Option<String>,
        security_type: SecurityType,
    ) -> Result<Self, SdError> {
        let symbol = symbol.filter(|s| !s.is_empty());
        let isin = isin.filter(|s| !s.is_empty());
        if symbol.is_none() && isin.is_none() {
            return Err(SdError::MissingIdentifier);
        }

        Ok(Self {
            digrin: symbol.as_ref().map(|s| Digrin::new(client, s.clone())),
            yahoo: symbol.map(|s| Yahoo::new(client, s)),
            isin,
            security_type,
        })
    }

    /// The ticker symbol, or `""` for an ISIN-only ticker.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.yahoo.as_ref().map_or("", Yahoo::ticker)
    }

    /// The ISIN, if one was given.
    #[must_use]
    pub fn isin(&self) -> Option<&str> {
        self.isin.as_deref()
    }

    /// The security type.
    #[must_use]
    pub const fn security_type(&self) -> SecurityType {
        self.security_type
    }

    /// Direct access to the Digrin source.
    #[must_use]
    pub const fn digrin(&self) -> Option<&Digrin> {
        self.digrin.as_ref()
    }

    /// Direct access to the Yahoo source.
    #[must_use]
    pub const fn yahoo(&self) -> Option<&Yahoo> {
        self.yahoo.as_ref()
    }

    fn digrin_source(&self) -> Result<&Digrin, SdError> {
        self.digrin.as_ref().ok_or_else(|| self.needs_symbol())
    }

    fn yahoo_source(&self) -> Result<&Yahoo, SdError> {
        self.yahoo.as_ref().ok_or_else(|| self.needs_symbol())
    }

    fn needs_symbol(&self) -> SdError {
        match self.isin.as_deref() {
            Some(isin) => SdError::Unsupported(format!(
                "report needs a ticker symbol, only ISIN {isin} is known"
            )),
            None => SdError::Unsupported("report needs a ticker symbol".into()),
        }
    }

    /* ---------------- Digrin ---------------- */

    /// Digrin dividend history.
    ///
    /// # Errors
    ///
    /// See [`Digrin::dividend`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_dividend(&self) -> Result<Table, SdError> {
        self.digrin_source()?.dividend().await
    }

    /// Digrin payout ratio history.
    ///
    /// # Errors
    ///
    /// See [`Digrin::payout_ratio`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_payout_ratio(&self) -> Result<Table, SdError> {
        self.digrin_source()?.payout_ratio().await
    }

    /// Digrin real and adjusted price history.
    ///
    /// # Errors
    ///
    /// See [`Digrin::price`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_price(&self) -> Result<Table, SdError> {
        self.digrin_source()?.price().await
    }

    /// Digrin stock split history.
    ///
    /// # Errors
    ///
    /// See [`Digrin::stock_splits`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_stock_splits(&self) -> Result<Table, SdError> {
        self.digrin_source()?.stock_splits().await
    }

    /// Digrin assets vs liabilities.
    ///
    /// # Errors
    ///
    /// See [`Digrin::assets_vs_liabilities`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_assets_vs_liabilities(&self) -> Result<Table, SdError> {
        self.digrin_source()?.assets_vs_liabilities().await
    }

    /// Digrin free cash flow.
    ///
    /// # Errors
    ///
    /// See [`Digrin::free_cash_flow`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_free_cash_flow(&self) -> Result<Table, SdError> {
        self.digrin_source()?.free_cash_flow().await
    }

    /// Digrin net income.
    ///
    /// # Errors
    ///
    /// See [`Digrin::net_income`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_net_income(&self) -> Result<Table, SdError> {
        self.digrin_source()?.net_income().await
    }

    /// Digrin cash and debt.
    ///
    /// # Errors
    ///
    /// See [`Digrin::cash_and_debt`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_cash_and_debt(&self) -> Result<Table, SdError> {
        self.digrin_source()?.cash_and_debt().await
    }

    /// Digrin shares outstanding.
    ///
    /// # Errors
    ///
    /// See [`Digrin::shares_outstanding`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_shares_outstanding(&self) -> Result<Table, SdError> {
        self.digrin_source()?.shares_outstanding().await
    }

    /// Digrin expenses (capex).
    ///
    /// # Errors
    ///
    /// See [`Digrin::expenses`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_expenses(&self) -> Result<Table, SdError> {
        self.digrin_source()?.expenses().await
    }

    /// Digrin cost of revenue.
    ///
    /// # Errors
    ///
    /// See [`Digrin::cost_of_revenue`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_cost_of_revenue(&self) -> Result<Table, SdError> {
        self.digrin_source()?.cost_of_revenue().await
    }

    /// Digrin projection at the 3 year dividend growth rate.
    ///
    /// # Errors
    ///
    /// See [`Digrin::dgr3`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_dgr3(&self) -> Result<Table, SdError> {
        self.digrin_source()?.dgr3().await
    }

    /// Digrin projection at the 5 year dividend growth rate.
    ///
    /// # Errors
    ///
    /// See [`Digrin::dgr5`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_dgr5(&self) -> Result<Table, SdError> {
        self.digrin_source()?.dgr5().await
    }

    /// Digrin projection at the 10 year dividend growth rate.
    ///
    /// # Errors
    ///
    /// See [`Digrin::dgr10`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_dgr10(&self) -> Result<Table, SdError> {
        self.digrin_source()?.dgr10().await
    }

    /// Digrin actual and estimated EPS.
    ///
    /// # Errors
    ///
    /// See [`Digrin::upcoming_estimated_earnings`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_upcoming_estimated_earnings(&self) -> Result<Table, SdError> {
        self.digrin_source()?.upcoming_estimated_earnings().await
    }

    /// Digrin price history as numbers, ready to chart.
    ///
    /// # Errors
    ///
    /// See [`Digrin::price_series`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_price_series(&self) -> Result<Vec<PricePoint>, SdError> {
        self.digrin_source()?.price_series().await
    }

    /// Digrin dividends as numbers, ready to chart.
    ///
    /// # Errors
    ///
    /// See [`Digrin::dividend_series`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_dividend_series(&self) -> Result<Vec<DividendPoint>, SdError> {
        self.digrin_source()?.dividend_series().await
    }

    /// Digrin assets and liabilities as numbers, ready to chart.
    ///
    /// # Errors
    ///
    /// See [`Digrin::assets_vs_liabilities_series`]; [`SdError::Unsupported`] without a
    /// ticker symbol.
    pub async fn digrin_assets_vs_liabilities_series(
        &self,
    ) -> Result<Vec<AssetsLiabilitiesPoint>, SdError> {
        self.digrin_source()?.assets_vs_liabilities_series().await
    }

    /// Digrin free cash flow as numbers, ready to chart.
    ///
    /// # Errors
    ///
    /// See [`Digrin::free_cash_flow_series`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_free_cash_flow_series(&self) -> Result<Vec<FreeCashFlowPoint>, SdError> {
        self.digrin_source()?.free_cash_flow_series().await
    }

    /// Digrin net income as numbers, ready to chart.
    ///
    /// # Errors
    ///
    /// See [`Digrin::net_income_series`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn digrin_net_income_series(&self) -> Result<Vec<NetIncomePoint>, SdError> {
        self.digrin_source()?.net_income_series().await
    }

    /* ---------------- Yahoo ---------------- */

    /// Quote page summary (`field`, `value`).
    ///
    /// # Errors
    ///
    /// See [`Yahoo::summary`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn summary(&self) -> Result<Table, SdError> {
        self.yahoo_source()?.summary().await
    }

    /// Key statistics (`field`, `value`).
    ///
    /// # Errors
    ///
    /// See [`Yahoo::statistics`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn statistics(&self) -> Result<Table, SdError> {
        self.yahoo_source()?.statistics().await
    }

    /// Analyst estimates.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::analysis`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn analysis(&self) -> Result<Table, SdError> {
        self.yahoo_source()?.analysis().await
    }

    /// Call contracts of the nearest expiry.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::calls`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn calls(&self) -> Result<Table, SdError> {
        self.yahoo_source()?.calls().await
    }

    /// Put contracts of the nearest expiry.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::puts`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn puts(&self) -> Result<Table, SdError> {
        self.yahoo_source()?.puts().await
    }

    /// Calls and puts from one fetch of the options page.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::options`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn options(&self) -> Result<OptionTables, SdError> {
        self.yahoo_source()?.options().await
    }

    /// Key executives.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::key_executives`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn key_executives(&self) -> Result<Table, SdError> {
        self.yahoo_source()?.key_executives().await
    }

    /// Business description of the company.
    ///
    /// # Errors
    ///
    /// [`SdError::Unsupported`] for ETFs, whose description is not published on these
    /// pages; otherwise see [`Yahoo::description`].
    pub async fn description(&self) -> Result<String, SdError> {
        if self.security_type == SecurityType::Etf {
            return Err(SdError::Unsupported(format!(
                "no description source for ETF {}",
                self.isin.as_deref().unwrap_or(self.symbol())
            )));
        }
        self.yahoo_source()?.description().await
    }

    /// Corporate governance paragraph.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::corporate_governance`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn corporate_governance(&self) -> Result<String, SdError> {
        self.yahoo_source()?.corporate_governance().await
    }

    /// Major holders breakdown.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::major_holders`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn major_holders(&self) -> Result<Table, SdError> {
        self.yahoo_source()?.major_holders().await
    }

    /// Top institutional holders.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::top_institutional_holders`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn top_institutional_holders(&self) -> Result<Table, SdError> {
        self.yahoo_source()?.top_institutional_holders().await
    }

    /// Top mutual fund holders.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::top_mutual_fund_holders`]; [`SdError::Unsupported`] without a ticker symbol.
    pub async fn top_mutual_fund_holders(&self) -> Result<Table, SdError> {
        self.yahoo_source()?.top_mutual_fund_holders().await
    }
}
