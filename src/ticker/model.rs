/// The kind of security a [`super::Ticker`] refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SecurityType {
    /// A listed company's shares (default).
    #[default]
    Stock,
    /// An exchange-traded fund, usually identified by ISIN.
    Etf,
}
