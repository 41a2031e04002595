use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::core::{
    SdError, Table,
    html::{css, element_text, extract, select_nth},
};

static TABLE: LazyLock<Selector> = LazyLock::new(|| css("table"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| css("p"));

/// The executives table is the only table on the profile page.
const EXECUTIVES_TABLE: usize = 0;
/// Paragraphs 0 and 1 hold the address block and sector line.
const DESCRIPTION_PARAGRAPH: usize = 2;
const GOVERNANCE_PARAGRAPH: usize = 3;

pub(super) fn parse_key_executives(body: &str, ticker: &str) -> Result<Table, SdError> {
    let doc = Html::parse_document(body);
    let label = |e| SdError::from_html(e, "key executives", ticker);

    let table = select_nth(&doc, &TABLE, "table", EXECUTIVES_TABLE).map_err(label)?;
    extract(table).map_err(label)
}

pub(super) fn parse_description(body: &str, ticker: &str) -> Result<String, SdError> {
    paragraph(body, DESCRIPTION_PARAGRAPH, ticker)
}

pub(super) fn parse_corporate_governance(body: &str, ticker: &str) -> Result<String, SdError> {
    paragraph(body, GOVERNANCE_PARAGRAPH, ticker)
}

fn paragraph(body: &str, ordinal: usize, ticker: &str) -> Result<String, SdError> {
    let doc = Html::parse_document(body);
    let p = select_nth(&doc, &PARAGRAPH, "paragraph", ordinal)
        .map_err(|e| SdError::from_html(e, "profile", ticker))?;
    Ok(element_text(p))
}
