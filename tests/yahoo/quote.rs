use stockdex_rs::Yahoo;

use crate::common::{SYMBOL, client_for, mock_yahoo, setup_server};

#[tokio::test]
async fn summary_flattens_tagged_cells_then_streamers() {
    let server = setup_server();
    let mock = mock_yahoo(&server, "", "yahoo_quote");

    let table = Yahoo::new(&client_for(&server), SYMBOL).summary().await.unwrap();

    mock.assert();
    assert_eq!(table.columns(), ["field", "value"]);
    let fields = table.column("field").unwrap();
    assert_eq!(
        fields,
        [
            "PREV_CLOSE",
            "OPEN",
            "MARKET_CAP",
            "regularMarketPrice",
            "regularMarketChange"
        ]
    );
    assert_eq!(table.cell(2, "value"), Some("2.95T"));
    assert_eq!(table.cell(3, "value"), Some("189.95"));
}

#[tokio::test]
async fn statistics_reads_classed_rows_only() {
    let server = setup_server();
    let _mock = mock_yahoo(&server, "key-statistics", "yahoo_key_statistics");

    let table = Yahoo::new(&client_for(&server), SYMBOL)
        .statistics()
        .await
        .unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[0], ["Market Cap", "2.95T"]);
    assert_eq!(
        table.column("field").unwrap(),
        ["Market Cap", "Trailing P/E", "Beta (5Y Monthly)"]
    );
}

#[tokio::test]
async fn analysis_merges_repeated_criteria_in_place() {
    let server = setup_server();
    let _mock = mock_yahoo(&server, "analysis", "yahoo_analysis");

    let table = Yahoo::new(&client_for(&server), SYMBOL)
        .analysis()
        .await
        .unwrap();

    assert_eq!(table.columns(), ["criteria", "1", "2", "3"]);
    assert_eq!(
        table.rows(),
        [
            vec!["No. of Analysts", "24", "22", "40"],
            vec!["Avg. Estimate", "2.1", "1.6"],
            vec!["Sales Growth (year/est)", "0.5%", "3.1%", "2.8%"],
        ]
    );
}
