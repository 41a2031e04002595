use chrono::NaiveDate;
use serde::Serialize;

/// One day of the price report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    /// Trading date.
    pub date: NaiveDate,
    /// Price as quoted on that date.
    pub real: f64,
    /// Price adjusted for later splits and dividends.
    pub adjusted: f64,
}

/// One dividend payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DividendPoint {
    /// Ex-dividend date.
    pub ex_dividend_date: NaiveDate,
    /// Amount per share.
    pub amount: f64,
}

/// Balance sheet totals at one reporting date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetsLiabilitiesPoint {
    pub date: NaiveDate,
    pub assets: f64,
    pub liabilities: f64,
}

/// Free cash flow at one reporting date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FreeCashFlowPoint {
    pub date: NaiveDate,
    pub free_cash_flow: f64,
    pub stock_based_compensation: f64,
}

/// Net income at one reporting date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetIncomePoint {
    pub date: NaiveDate,
    pub net_income: f64,
}
