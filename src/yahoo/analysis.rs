use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::core::{
    Table,
    html::{css, row_cells},
};

static TBODY: LazyLock<Selector> = LazyLock::new(|| css("tbody"));
static TR: LazyLock<Selector> = LazyLock::new(|| css("tr"));

/// Every body row of every table: the first cell names the criterion, the rest are
/// its values (one per period column). A criterion repeated in a later table
/// replaces the earlier values in place.
///
/// Columns are `criteria` followed by `1..=n`, `n` being the widest row.
pub(super) fn parse_analysis(body: &str) -> Table {
    let doc = Html::parse_document(body);
    let mut rows: Vec<Vec<String>> = Vec::new();

    for tbody in doc.select(&TBODY) {
        for tr in tbody.select(&TR) {
            let cells = row_cells(tr);
            let Some(criteria) = cells.first() else {
                continue;
            };
            match rows.iter_mut().find(|r| r[0] == *criteria) {
                Some(existing) => *existing = cells,
                None => rows.push(cells),
            }
        }
    }

    let width = rows.iter().map(|r| r.len().saturating_sub(1)).max().unwrap_or(0);
    let columns = std::iter::once("criteria".to_string())
        .chain((1..=width).map(|i| i.to_string()))
        .collect();

    Table::new(columns, rows)
}
