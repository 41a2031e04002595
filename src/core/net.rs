use reqwest::Response;
use url::Url;

use crate::core::{SdClient, SdError};

/// Appends `segments` to `base` as path segments, percent-encoding each one.
///
/// A ticker such as `TSE:7203` or `BRK/B` thus stays a single segment instead of
/// being read as a scheme or a nested path. Empty segments are skipped.
pub(crate) fn page_url(base: &Url, segments: &[&str]) -> Result<Url, SdError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| SdError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(segments.iter().filter(|s| !s.is_empty()));
    Ok(url)
}

/// Fetches `url` and returns the page body.
///
/// Non-2xx responses (after the client's retries) become [`SdError::Status`].
/// `endpoint` and `symbol` only name the fixture written in `test-mode` recording
/// and the optional debug dump.
pub(crate) async fn fetch_html(
    client: &SdClient,
    url: Url,
    endpoint: &str,
    symbol: &str,
) -> Result<String, SdError> {
    tracing::debug!(%url, endpoint, symbol, "fetching page");

    let resp = client.send_with_retry(client.http().get(url.clone())).await?;
    if !resp.status().is_success() {
        return Err(SdError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = get_text(resp, endpoint, symbol, "html").await?;
    tracing::debug!(bytes = body.len(), endpoint, symbol, "page fetched");

    #[cfg(feature = "debug-dumps")]
    {
        if std::env::var("SD_DEBUG").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::debug::debug_dump_html(endpoint, symbol, &body)
        {
            tracing::warn!(symbol, error = %e, "SD_DEBUG: failed to write page dump");
        }
    }

    Ok(body)
}

/// Read the response body as text.
/// In `test-mode`, if `SD_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: Response,
    _endpoint: &str,
    _symbol: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if std::env::var("SD_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _symbol, _ext, &text)
        {
            tracing::warn!(symbol = _symbol, error = %e, "SD_RECORD: failed to write fixture");
        }
    }

    Ok(text)
}
