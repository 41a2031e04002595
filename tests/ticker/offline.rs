use stockdex_rs::{SecurityType, Ticker};

use crate::common::{SYMBOL, approx, client_for, mock_digrin, mock_yahoo, setup_server};

#[tokio::test]
async fn ticker_delegates_to_both_sources() {
    let server = setup_server();
    let digrin_mock = mock_digrin(&server, "", "digrin_detail");
    let yahoo_mock = mock_yahoo(&server, "holders", "yahoo_holders");

    let ticker = Ticker::new(&client_for(&server), SYMBOL);
    assert_eq!(ticker.symbol(), SYMBOL);
    assert_eq!(ticker.security_type(), SecurityType::Stock);

    let dividends = ticker.digrin_dividend().await.unwrap();
    let holders = ticker.major_holders().await.unwrap();

    digrin_mock.assert();
    yahoo_mock.assert();
    assert_eq!(dividends.len(), 3);
    assert_eq!(holders.len(), 2);
}

#[tokio::test]
async fn ticker_matches_direct_source_calls() {
    let server = setup_server();
    let _mock = mock_yahoo(&server, "options", "yahoo_options");

    let ticker = Ticker::new(&client_for(&server), SYMBOL);
    let via_ticker = ticker.calls().await.unwrap();
    let direct = ticker.yahoo().unwrap().calls().await.unwrap();

    assert_eq!(via_ticker, direct);
}

#[tokio::test]
async fn ticker_series_use_normalized_values() {
    let server = setup_server();
    let _mock = mock_digrin(&server, "/financials", "digrin_financials");

    let ticker = Ticker::new(&client_for(&server), SYMBOL);
    let income = ticker.digrin_net_income_series().await.unwrap();

    assert_eq!(income.len(), 2);
    assert!(approx(income[0].net_income, 33.92e9));
}

#[tokio::test]
async fn stock_description_comes_from_profile_page() {
    let server = setup_server();
    let _mock = mock_yahoo(&server, "profile", "yahoo_profile");

    let ticker = Ticker::new(&client_for(&server), SYMBOL);
    assert_eq!(
        ticker.description().await.unwrap(),
        "Demo Corp designs and sells demonstration hardware."
    );
}
