use httpmock::Method::GET;
use stockdex_rs::{Digrin, SdError};

use crate::common::{SYMBOL, client_for, mock_digrin, mock_page, setup_server};

#[tokio::test]
async fn missing_marker_is_reported_as_not_found() {
    let server = setup_server();
    let _mock = mock_digrin(&server, "/financials", "digrin_financials");

    let err = Digrin::new(&client_for(&server), SYMBOL)
        .cash_and_debt()
        .await
        .unwrap_err();

    assert!(matches!(err, SdError::NotFound { .. }));
    assert_eq!(
        err.to_string(),
        "There is no Capital Lease data for the ticker DEMO"
    );
}

#[tokio::test]
async fn not_found_names_the_report() {
    let server = setup_server();
    let _mock = mock_page(
        &server,
        "/stocks/detail/DEMO/stock_split",
        "<html><body><p>No splits yet.</p></body></html>".to_string(),
    );

    let err = Digrin::new(&client_for(&server), SYMBOL)
        .stock_splits()
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "There is no stock split data for the ticker DEMO"
    );
}

#[tokio::test]
async fn table_without_header_is_a_data_error() {
    let server = setup_server();
    let _mock = mock_page(
        &server,
        "/stocks/detail/DEMO/payout_ratio",
        "<table><tbody><tr><td>Payout ratio</td></tr></tbody></table>".to_string(),
    );

    let err = Digrin::new(&client_for(&server), SYMBOL)
        .payout_ratio()
        .await
        .unwrap_err();

    assert!(matches!(err, SdError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn error_status_is_surfaced() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stocks/detail/DEMO/dgr3");
        then.status(404).body("missing");
    });

    let err = Digrin::new(&client_for(&server), SYMBOL)
        .dgr3()
        .await
        .unwrap_err();

    mock.assert();
    match err {
        SdError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/stocks/detail/DEMO/dgr3"), "url: {url}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn unparsable_cell_fails_the_series() {
    let server = setup_server();
    let _mock = mock_page(
        &server,
        "/stocks/detail/DEMO",
        "<table><thead><tr><th>Ex-dividend date</th><th>Dividend amount (change)</th></tr></thead>\
         <tbody><tr><td>Mar. 3, 2021</td><td>0.40 (0.00)</td></tr></tbody></table>"
            .to_string(),
    );

    let err = Digrin::new(&client_for(&server), SYMBOL)
        .dividend_series()
        .await
        .unwrap_err();

    assert!(matches!(err, SdError::Normalize(_)), "got {err:?}");
}
