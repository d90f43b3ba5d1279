use anyhow::{Context, Result};
use std::path::Path;
use std::process;

use crate::edamam::EdamamClient;

/// Fetch a recipe image to a file. Best-effort: a failed fetch prints a
/// warning and exits 2 rather than erroring out.
pub(crate) async fn cmd_image(client: &EdamamClient, url: &str, out: &Path) -> Result<()> {
    let bytes = match client.fetch_image_async(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Warning: image fetch failed: {e:#}");
            process::exit(2);
        }
    };

    std::fs::write(out, &bytes)
        .with_context(|| format!("Failed to write image to {}", out.display()))?;
    println!("Wrote {} bytes to {}", bytes.len(), out.display());

    Ok(())
}
