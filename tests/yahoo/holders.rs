use stockdex_rs::Yahoo;

use crate::common::{SYMBOL, client_for, mock_yahoo, setup_server};

#[tokio::test]
async fn major_holders_breakdown() {
    let server = setup_server();
    let _mock = mock_yahoo(&server, "holders", "yahoo_holders");

    let table = Yahoo::new(&client_for(&server), SYMBOL)
        .major_holders()
        .await
        .unwrap();

    assert_eq!(table.columns(), ["percentage", "holders"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(1, "percentage"), Some("61.23%"));
}

#[tokio::test]
async fn institutional_and_mutual_fund_holders() {
    let server = setup_server();
    let _mock = mock_yahoo(&server, "holders", "yahoo_holders");
    let yahoo = Yahoo::new(&client_for(&server), SYMBOL);

    let institutions = yahoo.top_institutional_holders().await.unwrap();
    assert_eq!(
        institutions.columns(),
        ["holder", "shares", "date_reported", "percentage", "value"]
    );
    assert_eq!(institutions.len(), 2);
    assert_eq!(institutions.cell(0, "holder"), Some("Vanguard Group Inc"));
    assert_eq!(institutions.cell(1, "percentage"), Some("6.63%"));

    let funds = yahoo.top_mutual_fund_holders().await.unwrap();
    assert_eq!(funds.len(), 1);
    assert_eq!(funds.cell(0, "shares"), Some("454,185,657"));
}
