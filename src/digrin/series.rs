//! Typed chart series built from raw report tables.

use super::model::{
    AssetsLiabilitiesPoint, DividendPoint, FreeCashFlowPoint, NetIncomePoint, PricePoint,
};
use crate::core::{
    SdError, Table,
    normalize::{
        leading_number, parse_any_date, parse_price, replace_placeholder, to_date, to_number,
    },
};

/// Placeholder the financials page prints for unknown amounts.
const UNKNOWN: &str = "?";

fn col(table: &Table, name: &str) -> Result<usize, SdError> {
    table
        .column_index(name)
        .ok_or_else(|| SdError::Data(format!("missing column `{name}`")))
}

fn cell<'r>(row: &'r [String], idx: usize, name: &str) -> Result<&'r str, SdError> {
    row.get(idx)
        .map(String::as_str)
        .ok_or_else(|| SdError::Data(format!("row has no `{name}` cell")))
}

fn amount(row: &[String], idx: usize, name: &str) -> Result<f64, SdError> {
    Ok(to_number(replace_placeholder(cell(row, idx, name)?, UNKNOWN))?)
}

pub(super) fn price_points(table: &Table) -> Result<Vec<PricePoint>, SdError> {
    let date = col(table, "Date")?;
    let real = col(table, "Real price")?;
    let adjusted = col(table, "Adjusted price")?;

    table
        .rows()
        .iter()
        .map(|row| {
            Ok(PricePoint {
                date: parse_any_date(cell(row, date, "Date")?)?,
                real: parse_price(cell(row, real, "Real price")?)?,
                adjusted: parse_price(cell(row, adjusted, "Adjusted price")?)?,
            })
        })
        .collect()
}

pub(super) fn dividend_points(table: &Table) -> Result<Vec<DividendPoint>, SdError> {
    let date = col(table, "Ex-dividend date")?;
    let amount = col(table, "Dividend amount (change)")?;

    table
        .rows()
        .iter()
        .map(|row| {
            Ok(DividendPoint {
                ex_dividend_date: parse_any_date(cell(row, date, "Ex-dividend date")?)?,
                amount: leading_number(cell(row, amount, "Dividend amount (change)")?)?,
            })
        })
        .collect()
}

pub(super) fn assets_liabilities_points(
    table: &Table,
) -> Result<Vec<AssetsLiabilitiesPoint>, SdError> {
    let date = col(table, "Date")?;
    let assets = col(table, "Assets")?;
    let liabilities = col(table, "Liabilities")?;

    table
        .rows()
        .iter()
        .map(|row| {
            Ok(AssetsLiabilitiesPoint {
                date: to_date(cell(row, date, "Date")?)?,
                assets: to_number(cell(row, assets, "Assets")?)?,
                liabilities: to_number(cell(row, liabilities, "Liabilities")?)?,
            })
        })
        .collect()
}

pub(super) fn free_cash_flow_points(table: &Table) -> Result<Vec<FreeCashFlowPoint>, SdError> {
    let date = col(table, "Date")?;
    let fcf = col(table, "Free Cash Flow")?;
    let sbc = col(table, "Stock based compensation")?;

    table
        .rows()
        .iter()
        .map(|row| {
            Ok(FreeCashFlowPoint {
                date: to_date(cell(row, date, "Date")?)?,
                free_cash_flow: amount(row, fcf, "Free Cash Flow")?,
                stock_based_compensation: amount(row, sbc, "Stock based compensation")?,
            })
        })
        .collect()
}

pub(super) fn net_income_points(table: &Table) -> Result<Vec<NetIncomePoint>, SdError> {
    let date = col(table, "Date")?;
    let income = col(table, "Net Income")?;

    table
        .rows()
        .iter()
        .map(|row| {
            Ok(NetIncomePoint {
                date: to_date(cell(row, date, "Date")?)?,
                net_income: amount(row, income, "Net Income")?,
            })
        })
        .collect()
}
