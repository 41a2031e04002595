//! The tabular result returned by every report accessor.

use serde::Serialize;

/// A table scraped from a page: ordered column names plus ordered rows of raw cell text.
///
/// Cells are never coerced. Callers normalize only the columns they need, see
/// [`crate::core::normalize`]. Rows are kept exactly as found, so a row may hold
/// fewer or more cells than there are columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from already extracted header and body cells.
    #[must_use]
    pub const fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Column names in page order. Duplicates are kept.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Body rows in page order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of body rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the table has no body rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of header columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Index of the first column called `name`, ignoring whitespace around the header text.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.trim() == name)
    }

    /// All values of the column called `name`, top to bottom.
    ///
    /// Rows too short to reach the column are skipped.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(idx).map(String::as_str))
                .collect(),
        )
    }

    /// The cell at `row` in the column called `name`.
    #[must_use]
    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// Consumes the table, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Builds a two-column `field`/`value` table from ordered pairs.
    ///
    /// A later pair with an already seen field overwrites the earlier value in place.
    pub(crate) fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut rows: Vec<Vec<String>> = Vec::new();
        for (field, value) in pairs {
            match rows.iter_mut().find(|r| r[0] == field) {
                Some(existing) => existing[1] = value,
                None => rows.push(vec![field, value]),
            }
        }
        Self::new(vec!["field".into(), "value".into()], rows)
    }

    /// Converts the table into a polars `DataFrame` of string columns.
    ///
    /// Short rows are padded with nulls in the frame; the table itself is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SdError::Data`] if polars rejects the columns (e.g. duplicate names).
    #[cfg(feature = "dataframe")]
    pub fn to_dataframe(&self) -> Result<polars::prelude::DataFrame, crate::SdError> {
        use polars::prelude::{Column, DataFrame};

        let columns: Vec<Column> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let values: Vec<Option<&str>> = self
                    .rows
                    .iter()
                    .map(|row| row.get(idx).map(String::as_str))
                    .collect();
                Column::new(name.as_str().into(), values)
            })
            .collect();

        DataFrame::new(columns).map_err(|e| crate::SdError::Data(format!("dataframe: {e}")))
    }
}
