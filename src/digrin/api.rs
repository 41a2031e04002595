use scraper::Html;
use url::Url;

use super::DigrinReport;
use crate::core::{SdClient, SdError, Table, html, net};

pub(super) async fn fetch_report(
    client: &SdClient,
    ticker: &str,
    report: DigrinReport,
) -> Result<Table, SdError> {
    let url = report_url(client.base_digrin(), ticker, report)?;
    let body = net::fetch_html(client, url, report.endpoint(), ticker).await?;
    parse_report(&body, ticker, report)
}

pub(super) fn report_url(base: &Url, ticker: &str, report: DigrinReport) -> Result<Url, SdError> {
    net::page_url(base, &[ticker, report.path().trim_start_matches('/')])
}

/// Locates the report's table by its marker and reads it verbatim.
pub(super) fn parse_report(
    body: &str,
    ticker: &str,
    report: DigrinReport,
) -> Result<Table, SdError> {
    let doc = Html::parse_document(body);
    let label = |e| SdError::from_html(e, report.label(), ticker);

    let table = html::locate(&doc, "table", report.marker()).map_err(label)?;
    let parsed = html::extract(table).map_err(label)?;

    tracing::debug!(
        report = report.label(),
        columns = parsed.width(),
        rows = parsed.len(),
        "digrin table extracted"
    );
    Ok(parsed)
}
