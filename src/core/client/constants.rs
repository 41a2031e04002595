//! Centralized constants for default endpoints and UA.

/// Default desktop UA; both sites serve reduced markup to unknown agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Digrin stock detail base (ticker and report path are appended).
pub(crate) const DEFAULT_BASE_DIGRIN: &str = "https://www.digrin.com/stocks/detail/";

/// Yahoo quote HTML base (ticker and page are appended).
pub(crate) const DEFAULT_BASE_YAHOO: &str = "https://finance.yahoo.com/quote/";
