//! Debug dump helpers for diagnosing page-layout changes.

use std::io::Write;

/// Writes a fetched page to the temp dir so its markup can be inspected.
pub(crate) fn debug_dump_html(endpoint: &str, symbol: &str, html: &str) -> std::io::Result<()> {
    let path = std::env::temp_dir().join(format!("stockdex_rs-{endpoint}-{symbol}.html"));
    let mut f = std::fs::File::create(&path)?;
    f.write_all(html.as_bytes())?;
    tracing::info!(path = %path.display(), "SD_DEBUG: wrote page dump");
    Ok(())
}
