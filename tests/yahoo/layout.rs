use stockdex_rs::{SdError, Yahoo};

use crate::common::{SYMBOL, client_for, mock_page, setup_server};

const ONE_TABLE: &str = "<html><body><table><thead><tr><th>Contract Name</th></tr></thead>\
    <tbody><tr><td>DEMO1</td></tr></tbody></table></body></html>";

#[tokio::test]
async fn missing_puts_table_is_a_layout_error() {
    let server = setup_server();
    let _mock = mock_page(&server, "/quote/DEMO/options", ONE_TABLE.to_string());
    let yahoo = Yahoo::new(&client_for(&server), SYMBOL);

    assert_eq!(yahoo.calls().await.unwrap().len(), 1);
    match yahoo.puts().await.unwrap_err() {
        SdError::Layout {
            what,
            index,
            found,
            ticker,
        } => {
            assert_eq!(what, "table");
            assert_eq!(index, 1);
            assert_eq!(found, 1);
            assert_eq!(ticker, SYMBOL);
        }
        other => panic!("expected Layout, got {other:?}"),
    }
}

#[tokio::test]
async fn short_profile_page_is_a_layout_error() {
    let server = setup_server();
    let _mock = mock_page(
        &server,
        "/quote/DEMO/profile",
        "<p>address</p><p>sector</p>".to_string(),
    );

    let err = Yahoo::new(&client_for(&server), SYMBOL)
        .corporate_governance()
        .await
        .unwrap_err();

    assert!(
        matches!(err, SdError::Layout { index: 3, found: 2, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn statistics_row_without_value_is_a_layout_error() {
    let server = setup_server();
    let _mock = mock_page(
        &server,
        "/quote/DEMO/key-statistics",
        "<table><tr class=\"row\"><td>Market Cap</td></tr></table>".to_string(),
    );

    let err = Yahoo::new(&client_for(&server), SYMBOL)
        .statistics()
        .await
        .unwrap_err();

    assert!(matches!(err, SdError::Layout { .. }), "got {err:?}");
}

#[tokio::test]
async fn summary_of_untagged_page_is_empty() {
    let server = setup_server();
    let _mock = mock_page(&server, "/quote/DEMO", "<p>nothing</p>".to_string());

    let table = Yahoo::new(&client_for(&server), SYMBOL)
        .summary()
        .await
        .unwrap();

    assert!(table.is_empty());
    assert_eq!(table.columns(), ["field", "value"]);
}
