use httpmock::Method::GET;
use stockdex_rs::{Digrin, SdError, Yahoo};

use crate::common::{client_for, setup_server};

#[tokio::test]
async fn ticker_with_colon_is_requested_as_a_path_segment() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stocks/detail/TSE:7203");
        then.status(200).body(
            "<table><thead><tr><th>Ex-dividend date</th></tr></thead>\
             <tbody><tr><td>Sept. 27, 2024</td></tr></tbody></table>",
        );
    });

    let table = Digrin::new(&client_for(&server), "TSE:7203")
        .dividend()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(table.cell(0, "Ex-dividend date"), Some("Sept. 27, 2024"));
}

#[tokio::test]
async fn ticker_with_slash_stays_one_segment() {
    let server = setup_server();

    let err = Digrin::new(&client_for(&server), "BRK/B")
        .payout_ratio()
        .await
        .unwrap_err();

    match err {
        SdError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(
                url.ends_with("/stocks/detail/BRK%2FB/payout_ratio"),
                "url: {url}"
            );
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn query_and_fragment_characters_are_escaped() {
    let server = setup_server();

    let err = Yahoo::new(&client_for(&server), "A?B#C")
        .major_holders()
        .await
        .unwrap_err();

    match err {
        SdError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/quote/A%3FB%23C/holders"), "url: {url}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}
