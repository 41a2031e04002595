use std::time::Duration;

use crate::core::SdError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
    },
}

impl Backoff {
    /// Delay before retry number `attempt` (zero-based).
    ///
    /// Exponential delays saturate at `max`; a product that is not a finite,
    /// non-negative number of seconds also yields `max`.
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential { base, factor, max } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                let secs = (base.as_secs_f64() * factor.powi(exp)).min(max.as_secs_f64());
                Duration::try_from_secs_f64(secs).unwrap_or(*max)
            }
        }
    }
}

/// Configuration for the automatic retry mechanism of the page fetcher.
///
/// Report accessors never retry on their own; only transient transport failures and
/// the listed statuses are retried here.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl RetryConfig {
    /// A configuration that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 4,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl super::SdClient {
    /// Sends `req`, retrying according to the client's [`RetryConfig`].
    ///
    /// The last response is returned as-is once retries are exhausted, so status
    /// checking stays with the caller.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, SdError> {
        let cfg = self.retry_config();
        let mut attempt = 0u32;

        loop {
            let Some(this) = req.try_clone() else {
                return Ok(req.send().await?);
            };
            let may_retry = cfg.enabled && attempt < cfg.max_retries;

            match this.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if !(may_retry && cfg.retry_on_status.contains(&status)) {
                        return Ok(resp);
                    }
                    tracing::warn!(status, url = %resp.url(), attempt, "retryable status");
                }
                Err(e) => {
                    let transient = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if !(may_retry && transient) {
                        return Err(e.into());
                    }
                    tracing::warn!(error = %e, attempt, "transient transport error");
                }
            }

            let delay = cfg.backoff.delay(attempt);
            tracing::debug!(?delay, attempt, "backing off before retry");
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}
