use stockdex_rs::{SdClient, SdError, Ticker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockdex_rs=debug".into()),
        )
        .init();

    let client = SdClient::default();
    let aapl = Ticker::new(&client, "AAPL");

    // Independent pages can be fetched concurrently.
    let (summary, stats, holders) = tokio::join!(
        aapl.summary(),
        aapl.statistics(),
        aapl.top_institutional_holders()
    );

    println!("--- Summary ---");
    for row in summary?.rows() {
        println!("{:<28} {}", row[0], row[1]);
    }
    println!();

    println!("--- Key statistics ---");
    for row in stats?.rows().iter().take(10) {
        println!("{:<40} {}", row[0], row[1]);
    }
    println!();

    println!("--- Top institutional holders ---");
    let holders = holders?;
    for (holder, pct) in holders
        .column("holder")
        .unwrap_or_default()
        .into_iter()
        .zip(holders.column("percentage").unwrap_or_default())
    {
        println!("{holder:<40} {pct}");
    }
    println!();

    // Positional reports fail loudly when the page no longer has the expected layout.
    match aapl.options().await {
        Ok(chain) => println!("{} calls, {} puts", chain.calls.len(), chain.puts.len()),
        Err(SdError::Layout { what, index, found, .. }) => {
            println!("options page changed: wanted {what} #{index}, found {found}");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
