use thiserror::Error;

use crate::core::html::HtmlError;
use crate::core::normalize::NormalizeError;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum SdError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// No table on the page matched the marker of the requested report.
    #[error("There is no {report} data for the ticker {ticker}")]
    NotFound {
        /// Human-readable name of the report (e.g. `dividend`).
        report: String,
        /// The ticker the report was requested for.
        ticker: String,
    },

    /// A positional lookup (the Nth table or paragraph of a page) was out of range.
    ///
    /// This usually means the page layout changed or the report does not exist
    /// for this kind of security.
    #[error("expected {what} #{index} on the page for {ticker}, found only {found}")]
    Layout {
        /// What was looked up (e.g. `table`, `paragraph`).
        what: String,
        /// The zero-based ordinal that was requested.
        index: usize,
        /// How many matching elements the page actually had.
        found: usize,
        /// The ticker the page was fetched for.
        ticker: String,
    },

    /// A raw cell could not be converted to a number or a date.
    #[error("normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    /// Neither a ticker nor an ISIN was provided.
    #[error("Please provide either a ticker or an ISIN")]
    MissingIdentifier,

    /// The report is not available for this security type.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// The page had an unexpected shape (e.g. a table without a header section).
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl SdError {
    /// Labels a locator/extractor failure with the report and ticker it belongs to.
    pub(crate) fn from_html(err: HtmlError, report: &str, ticker: &str) -> Self {
        match err {
            HtmlError::MarkerNotFound { .. } => Self::NotFound {
                report: report.to_string(),
                ticker: ticker.to_string(),
            },
            HtmlError::MissingSection { .. } => {
                Self::Data(format!("{report} table for {ticker}: {err}"))
            }
            HtmlError::OutOfRange { what, index, found } => Self::Layout {
                what,
                index,
                found,
                ticker: ticker.to_string(),
            },
        }
    }
}
