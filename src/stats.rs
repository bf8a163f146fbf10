//! Document store overview.
//!
//! Quick confidence check that `twin build` produced what was expected:
//! store location, file size, document count, and per-type breakdown.

use anyhow::Result;

use crate::config::Config;
use crate::store::ProfileStore;

/// Run the stats command: load the store and print a summary.
pub fn run_stats(config: &Config) -> Result<()> {
    let store = ProfileStore::load(&config.store.path)?;

    let size = std::fs::metadata(&config.store.path)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("Profile Twin — Store Stats");
    println!("==========================");
    println!();
    println!("  Store:      {}", config.store.path.display());
    println!("  Size:       {}", format_bytes(size));
    println!("  Documents:  {}", store.len());

    let counts = store.type_counts();
    if !counts.is_empty() {
        println!();
        println!("  By type:");
        for (doc_type, count) in counts {
            println!("    {:<12} {}", doc_type, count);
        }
    }

    println!();
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
