use stockdex_rs::Yahoo;

use crate::common::{SYMBOL, client_for, mock_yahoo, setup_server};

#[tokio::test]
async fn calls_and_puts_come_from_first_and_second_table() {
    let server = setup_server();
    let mock = mock_yahoo(&server, "options", "yahoo_options");
    let yahoo = Yahoo::new(&client_for(&server), SYMBOL);

    let calls = yahoo.calls().await.unwrap();
    let puts = yahoo.puts().await.unwrap();

    mock.assert_calls(2);
    assert_eq!(calls.columns(), ["Contract Name", "Strike", "Last Price"]);
    assert_eq!(calls.len(), 2);
    assert_eq!(calls.cell(1, "Strike"), Some("155.00"));
    assert_eq!(puts.len(), 1);
    assert_eq!(puts.cell(0, "Contract Name"), Some("DEMO240119P00150000"));
}

#[tokio::test]
async fn options_reads_both_sides_from_one_fetch() {
    let server = setup_server();
    let mock = mock_yahoo(&server, "options", "yahoo_options");
    let yahoo = Yahoo::new(&client_for(&server), SYMBOL);

    let chain = yahoo.options().await.unwrap();

    mock.assert_calls(1);
    assert_eq!(chain.calls.len(), 2);
    assert_eq!(chain.puts.len(), 1);
    assert_eq!(chain.calls.columns(), chain.puts.columns());
}
