//! Quote page summary and key statistics, both flattened to `field`/`value` tables.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::core::{
    SdError, Table,
    html::{css, element_text, row_cells},
};

/// Summary table cells; the `data-test` value names the field, suffixed with `-value`.
static TAGGED_CELL: LazyLock<Selector> = LazyLock::new(|| css("td[data-test]"));
/// Live price widgets at the top of the quote page.
static STREAMER: LazyLock<Selector> = LazyLock::new(|| css("fin-streamer[data-field]"));
/// Statistics rows are the only classed rows on the page.
static CLASSED_ROW: LazyLock<Selector> = LazyLock::new(|| css("tr[class]"));

pub(super) fn parse_summary(body: &str) -> Table {
    let doc = Html::parse_document(body);

    let cells = doc.select(&TAGGED_CELL).filter_map(|td| {
        let key = td.value().attr("data-test")?;
        Some((key.replace("-value", ""), element_text(td)))
    });
    let streamers = doc.select(&STREAMER).filter_map(|el| {
        let key = el.value().attr("data-field")?;
        Some((key.to_string(), element_text(el)))
    });

    Table::from_pairs(cells.chain(streamers))
}

/// Rows without any `td` (header rows) are skipped; a row with a label but no value
/// cell means the layout changed.
pub(super) fn parse_statistics(body: &str, ticker: &str) -> Result<Table, SdError> {
    let doc = Html::parse_document(body);
    let mut pairs = Vec::new();

    for tr in doc.select(&CLASSED_ROW) {
        let cells: Vec<String> = row_cells(tr).iter().map(|c| c.trim().to_string()).collect();
        match cells.as_slice() {
            [] => continue,
            [_] => {
                return Err(SdError::Layout {
                    what: "statistics value cell".into(),
                    index: 1,
                    found: 1,
                    ticker: ticker.to_string(),
                });
            }
            [field, value, ..] => pairs.push((field.clone(), value.clone())),
        }
    }

    Ok(Table::from_pairs(pairs))
}
