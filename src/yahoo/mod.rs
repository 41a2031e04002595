//! Yahoo Finance quote pages: summary, statistics, analysis, options, profile and holders.
//!
//! Unlike the Digrin reports, most of these pages have no header text unique to the
//! wanted table. Tables and paragraphs are therefore picked by attribute predicates or
//! by their ordinal on the page; each ordinal is a named constant in the module that
//! reads it, and a page that no longer has that many elements fails with
//! [`SdError::Layout`].

mod analysis;
mod holders;
mod options;
mod profile;
mod quote;

pub use options::OptionTables;

use url::Url;

use crate::core::{SdClient, SdError, Table, net};

/// The Yahoo pages a ticker's reports are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YahooPage {
    Quote,
    KeyStatistics,
    Analysis,
    Options,
    Profile,
    Holders,
}

impl YahooPage {
    const fn path(self) -> &'static str {
        match self {
            Self::Quote => "",
            Self::KeyStatistics => "key-statistics",
            Self::Analysis => "analysis",
            Self::Options => "options",
            Self::Profile => "profile",
            Self::Holders => "holders",
        }
    }

    const fn endpoint(self) -> &'static str {
        match self {
            Self::Quote => "yahoo_quote",
            Self::KeyStatistics => "yahoo_key_statistics",
            Self::Analysis => "yahoo_analysis",
            Self::Options => "yahoo_options",
            Self::Profile => "yahoo_profile",
            Self::Holders => "yahoo_holders",
        }
    }

    fn url(self, base: &Url, ticker: &str) -> Result<Url, SdError> {
        net::page_url(base, &[ticker, self.path()])
    }
}

/// Client for the Yahoo Finance pages of one ticker.
#[derive(Debug, Clone)]
pub struct Yahoo {
    client: SdClient,
    ticker: String,
}

impl Yahoo {
    /// Creates a Yahoo client for `ticker`.
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

    async fn page(&self, page: YahooPage) -> Result<String, SdError> {
        let url = page.url(self.client.base_yahoo(), &self.ticker)?;
        net::fetch_html(&self.client, url, page.endpoint(), &self.ticker).await
    }

    /// Key/value pairs shown on the quote page (`field`, `value` columns).
    ///
    /// # Errors
    ///
    /// Fetch errors only; a page without any tagged cell yields an empty table.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn summary(&self) -> Result<Table, SdError> {
        let body = self.page(YahooPage::Quote).await?;
        Ok(quote::parse_summary(&body))
    }

    /// Key statistics (`field`, `value` columns).
    ///
    /// # Errors
    ///
    /// [`SdError::Layout`] when a statistics row has a label but no value cell.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn statistics(&self) -> Result<Table, SdError> {
        let body = self.page(YahooPage::KeyStatistics).await?;
        quote::parse_statistics(&body, &self.ticker)
    }

    /// Analyst estimates, one row per criterion.
    ///
    /// # Errors
    ///
    /// Fetch errors only.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn analysis(&self) -> Result<Table, SdError> {
        let body = self.page(YahooPage::Analysis).await?;
        Ok(analysis::parse_analysis(&body))
    }

    /// Call contracts of the nearest expiry.
    ///
    /// # Errors
    ///
    /// [`SdError::Layout`] when the options page has no tables.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn calls(&self) -> Result<Table, SdError> {
        let body = self.page(YahooPage::Options).await?;
        options::parse_calls(&body, &self.ticker)
    }

    /// Put contracts of the nearest expiry.
    ///
    /// # Errors
    ///
    /// [`SdError::Layout`] when the options page has fewer than two tables.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn puts(&self) -> Result<Table, SdError> {
        let body = self.page(YahooPage::Options).await?;
        options::parse_puts(&body, &self.ticker)
    }

    /// Calls and puts read from a single fetch of the options page.
    ///
    /// # Errors
    ///
    /// See [`Yahoo::puts`].
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn options(&self) -> Result<OptionTables, SdError> {
        let body = self.page(YahooPage::Options).await?;
        options::parse_option_tables(&body, &self.ticker)
    }

    /// Key executives listed on the profile page.
    ///
    /// # Errors
    ///
    /// [`SdError::Layout`] when the profile page has no table.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn key_executives(&self) -> Result<Table, SdError> {
        let body = self.page(YahooPage::Profile).await?;
        profile::parse_key_executives(&body, &self.ticker)
    }

    /// Business description from the profile page.
    ///
    /// # Errors
    ///
    /// [`SdError::Layout`] when the page has too few paragraphs.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn description(&self) -> Result<String, SdError> {
        let body = self.page(YahooPage::Profile).await?;
        profile::parse_description(&body, &self.ticker)
    }

    /// Corporate governance paragraph from the profile page.
    ///
    /// # Errors
    ///
    /// [`SdError::Layout`] when the page has too few paragraphs.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn corporate_governance(&self) -> Result<String, SdError> {
        let body = self.page(YahooPage::Profile).await?;
        profile::parse_corporate_governance(&body, &self.ticker)
    }

    /// Major holders breakdown (`percentage`, `holders` columns).
    ///
    /// # Errors
    ///
    /// [`SdError::Layout`] when the page has no holder summary block.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn major_holders(&self) -> Result<Table, SdError> {
        let body = self.page(YahooPage::Holders).await?;
        holders::parse_major_holders(&body, &self.ticker)
    }

    /// Top institutional holders.
    ///
    /// # Errors
    ///
    /// [`SdError::Layout`] when the holders page has fewer than two tables.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn top_institutional_holders(&self) -> Result<Table, SdError> {
        let body = self.page(YahooPage::Holders).await?;
        holders::parse_institutional_holders(&body, &self.ticker)
    }

    /// Top mutual fund holders.
    ///
    /// # Errors
    ///
    /// [`SdError::Layout`] when the holders page has fewer than three tables.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn top_mutual_fund_holders(&self) -> Result<Table, SdError> {
        let body = self.page(YahooPage::Holders).await?;
        holders::parse_mutual_fund_holders(&body, &self.ticker)
    }
}
