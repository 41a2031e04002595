//! Public client surface + builder.
//! Internals are split into `retry` (backoff + resend loop) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::SdError;
use constants::{DEFAULT_BASE_DIGRIN, DEFAULT_BASE_YAHOO, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Holds a configured HTTP client and the base URLs of every page source.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SdClient {
    http: Client,
    base_digrin: Url,
    base_yahoo: Url,
    retry: RetryConfig,
}

impl Default for SdClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl SdClient {
    /// Create a new builder.
    pub fn builder() -> SdClientBuilder {
        SdClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_digrin(&self) -> &Url {
        &self.base_digrin
    }
    pub(crate) fn base_yahoo(&self) -> &Url {
        &self.base_yahoo
    }

    /// The retry policy applied to every page fetch.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Default)]
pub struct SdClientBuilder {
    user_agent: Option<String>,
    base_digrin: Option<Url>,
    base_yahoo: Option<Url>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SdClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the Digrin base (e.g., `https://www.digrin.com/stocks/detail/`).
    pub fn base_digrin(mut self, url: Url) -> Self {
        self.base_digrin = Some(url);
        self
    }

    /// Override the Yahoo quote HTML base (e.g., `https://finance.yahoo.com/quote/`).
    pub fn base_yahoo(mut self, url: Url) -> Self {
        self.base_yahoo = Some(url);
        self
    }

    /// Replace the default retry policy.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<SdClient, SdError> {
        let base_digrin = match self.base_digrin {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_DIGRIN)?,
        };
        let base_yahoo = match self.base_yahoo {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_YAHOO)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(SdClient {
            http,
            base_digrin,
            base_yahoo,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
