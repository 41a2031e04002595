//! Locating and extracting tables in a parsed page.
//!
//! Pages are parsed with [`scraper`]. Two ways of finding a structure are supported:
//! - by marker: the enclosing `tag` of the first element whose text equals a marker
//!   ([`locate`]);
//! - by ordinal: the Nth element matching a CSS selector ([`select_nth`]). This relies
//!   on the page keeping its element order and breaks when the layout changes, which
//!   surfaces as [`HtmlError::OutOfRange`].

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::core::table::Table;

static THEAD: LazyLock<Selector> = LazyLock::new(|| css("thead"));
static TBODY: LazyLock<Selector> = LazyLock::new(|| css("tbody"));
static TH: LazyLock<Selector> = LazyLock::new(|| css("th"));
static TR: LazyLock<Selector> = LazyLock::new(|| css("tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| css("td"));

/// Parses a selector literal. Only called with the crate's own constant selectors.
pub(crate) fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("constant selectors are valid CSS")
}

/// Failures of the pure locate/extract step. Accessors label these with the report
/// and ticker before returning them (see [`crate::SdError`]).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HtmlError {
    /// No element's text equals the marker, or none of the matches sits inside `tag`.
    #[error("no <{tag}> encloses an element with text `{marker}`")]
    MarkerNotFound {
        /// The requested enclosing tag.
        tag: String,
        /// The marker text searched for.
        marker: String,
    },

    /// A located table lacks a required section (`thead` or `tbody`).
    #[error("table has no <{section}> section")]
    MissingSection {
        /// The missing section's tag name.
        section: &'static str,
    },

    /// A positional lookup asked for more elements than the page has.
    #[error("requested {what} #{index} but the page has {found}")]
    OutOfRange {
        /// The selector that was counted.
        what: String,
        /// The zero-based ordinal requested.
        index: usize,
        /// How many elements matched.
        found: usize,
    },
}

/// Finds the nearest `tag` element enclosing the first element whose text equals `marker`.
///
/// Element text is compared with surrounding whitespace trimmed and inner runs of
/// whitespace collapsed. Candidates are visited in document order; a candidate is
/// skipped when no `tag` encloses it (or is it), so the first candidate that does
/// have one wins.
///
/// # Errors
///
/// [`HtmlError::MarkerNotFound`] when no candidate sits inside a `tag` element.
pub fn locate<'a>(doc: &'a Html, tag: &str, marker: &str) -> Result<ElementRef<'a>, HtmlError> {
    let tag = tag.to_ascii_lowercase();
    let marker = collapse_ws(marker);

    let found = doc
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| collapse_ws(&element_text(*el)) == marker)
        .find_map(|el| enclosing(el, &tag));

    found.ok_or(HtmlError::MarkerNotFound { tag, marker })
}

fn enclosing<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    if el.value().name() == tag {
        return Some(el);
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == tag)
}

/// Reads a located table into a [`Table`].
///
/// Column names are the `th` cells of the first `thead`; rows are the `tr`s of the
/// first `tbody`, each contributing its `td` cells in order whatever their count.
/// Text is kept verbatim.
///
/// # Errors
///
/// [`HtmlError::MissingSection`] when the table has no `thead` or no `tbody`.
pub fn extract(table: ElementRef<'_>) -> Result<Table, HtmlError> {
    let thead = table
        .select(&THEAD)
        .next()
        .ok_or(HtmlError::MissingSection { section: "thead" })?;
    let tbody = table
        .select(&TBODY)
        .next()
        .ok_or(HtmlError::MissingSection { section: "tbody" })?;

    let columns = thead.select(&TH).map(element_text).collect();
    let rows = tbody.select(&TR).map(row_cells).collect();

    Ok(Table::new(columns, rows))
}

/// Reads every `tr` of `container` as a row of `td` texts, under fixed column names.
///
/// Rows without any `td` (header rows made of `th`) are dropped.
pub fn extract_rows(container: ElementRef<'_>, columns: &[&str]) -> Table {
    let rows = container
        .select(&TR)
        .map(row_cells)
        .filter(|cells| !cells.is_empty())
        .collect();
    Table::new(columns.iter().map(|c| (*c).to_string()).collect(), rows)
}

/// The `td` texts of one row, verbatim.
pub(crate) fn row_cells(tr: ElementRef<'_>) -> Vec<String> {
    tr.select(&TD).map(element_text).collect()
}

/// Returns the `index`-th (zero-based) element matching `selector` in document order.
///
/// # Errors
///
/// [`HtmlError::OutOfRange`] when fewer than `index + 1` elements match.
pub fn select_nth<'a>(
    doc: &'a Html,
    selector: &Selector,
    what: &str,
    index: usize,
) -> Result<ElementRef<'a>, HtmlError> {
    let mut found = 0usize;
    for el in doc.select(selector) {
        if found == index {
            return Ok(el);
        }
        found += 1;
    }
    Err(HtmlError::OutOfRange {
        what: what.to_string(),
        index,
        found,
    })
}

/// Concatenated text of an element and all its descendants.
#[must_use]
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
