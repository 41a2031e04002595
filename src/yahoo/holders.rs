use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::core::{
    SdError, Table,
    html::{css, extract_rows, select_nth},
};

static HOLDER_SUMMARY: LazyLock<Selector> =
    LazyLock::new(|| css(r#"div[data-test="holder-summary"]"#));
static TABLE: LazyLock<Selector> = LazyLock::new(|| css("table"));

/// Table 0 is the major holders breakdown; institutional and mutual fund holders follow.
const INSTITUTIONAL_TABLE: usize = 1;
const MUTUAL_FUND_TABLE: usize = 2;

const MAJOR_COLUMNS: [&str; 2] = ["percentage", "holders"];
const HOLDER_COLUMNS: [&str; 5] = ["holder", "shares", "date_reported", "percentage", "value"];

pub(super) fn parse_major_holders(body: &str, ticker: &str) -> Result<Table, SdError> {
    let doc = Html::parse_document(body);
    let block = select_nth(&doc, &HOLDER_SUMMARY, "holder summary", 0)
        .map_err(|e| SdError::from_html(e, "major holders", ticker))?;
    Ok(extract_rows(block, &MAJOR_COLUMNS))
}

pub(super) fn parse_institutional_holders(body: &str, ticker: &str) -> Result<Table, SdError> {
    holder_table(body, INSTITUTIONAL_TABLE, "institutional holders", ticker)
}

pub(super) fn parse_mutual_fund_holders(body: &str, ticker: &str) -> Result<Table, SdError> {
    holder_table(body, MUTUAL_FUND_TABLE, "mutual fund holders", ticker)
}

fn holder_table(body: &str, ordinal: usize, label: &str, ticker: &str) -> Result<Table, SdError> {
    let doc = Html::parse_document(body);
    let table = select_nth(&doc, &TABLE, "table", ordinal)
        .map_err(|e| SdError::from_html(e, label, ticker))?;
    Ok(extract_rows(table, &HOLDER_COLUMNS))
}
