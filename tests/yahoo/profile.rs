use stockdex_rs::Yahoo;

use crate::common::{SYMBOL, client_for, mock_yahoo, setup_server};

#[tokio::test]
async fn key_executives_table() {
    let server = setup_server();
    let _mock = mock_yahoo(&server, "profile", "yahoo_profile");

    let table = Yahoo::new(&client_for(&server), SYMBOL)
        .key_executives()
        .await
        .unwrap();

    assert_eq!(table.columns(), ["Name", "Title", "Pay"]);
    assert_eq!(table.column("Name").unwrap(), ["Jane Roe", "John Doe"]);
}

#[tokio::test]
async fn description_and_governance_paragraphs() {
    let server = setup_server();
    let _mock = mock_yahoo(&server, "profile", "yahoo_profile");
    let yahoo = Yahoo::new(&client_for(&server), SYMBOL);

    assert_eq!(
        yahoo.description().await.unwrap(),
        "Demo Corp designs and sells demonstration hardware."
    );
    assert_eq!(
        yahoo.corporate_governance().await.unwrap(),
        "Demo Corp's ISS Governance QualityScore is 1."
    );
}
