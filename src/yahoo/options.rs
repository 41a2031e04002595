use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::core::{
    SdError, Table,
    html::{css, extract, select_nth},
};

static TABLE: LazyLock<Selector> = LazyLock::new(|| css("table"));

/// The options page renders the calls table first and the puts table second.
const CALLS_TABLE: usize = 0;
const PUTS_TABLE: usize = 1;

/// Both sides of the option chain shown on the options page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionTables {
    pub calls: Table,
    pub puts: Table,
}

fn side(doc: &Html, ordinal: usize, label: &str, ticker: &str) -> Result<Table, SdError> {
    let table = select_nth(doc, &TABLE, "table", ordinal)
        .map_err(|e| SdError::from_html(e, label, ticker))?;
    extract(table).map_err(|e| SdError::from_html(e, label, ticker))
}

pub(super) fn parse_calls(body: &str, ticker: &str) -> Result<Table, SdError> {
    side(&Html::parse_document(body), CALLS_TABLE, "calls", ticker)
}

pub(super) fn parse_puts(body: &str, ticker: &str) -> Result<Table, SdError> {
    side(&Html::parse_document(body), PUTS_TABLE, "puts", ticker)
}

pub(super) fn parse_option_tables(body: &str, ticker: &str) -> Result<OptionTables, SdError> {
    let doc = Html::parse_document(body);
    Ok(OptionTables {
        calls: side(&doc, CALLS_TABLE, "calls", ticker)?,
        puts: side(&doc, PUTS_TABLE, "puts", ticker)?,
    })
}
