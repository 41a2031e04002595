use std::time::Duration;

use stockdex_rs::{SdClient, Ticker, core::normalize};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. A client with a 10 second timeout; the default retry policy stays on.
    let client = SdClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let ko = Ticker::new(&client, "KO");

    // 2. The raw dividend table, exactly as the page prints it.
    let table = ko.digrin_dividend().await?;
    println!("--- Dividend table for {} ---", ko.symbol());
    println!("Columns: {:?}", table.columns());
    for row in table.rows().iter().take(5) {
        println!("{}", row.join(" | "));
    }
    println!();

    // 3. The same report as a typed series.
    let series = ko.digrin_dividend_series().await?;
    let total: f64 = series.iter().take(4).map(|p| p.amount).sum();
    println!("Last 4 dividends add up to {total:.2} per share");
    println!();

    // 4. Normalizing a single column by hand.
    let balance = ko.digrin_assets_vs_liabilities().await?;
    if let Some(assets) = balance.column("Assets") {
        for raw in assets.iter().take(3) {
            println!("{raw:>12} -> {:.0}", normalize::to_number(raw)?);
        }
    }

    Ok(())
}
