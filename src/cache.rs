use anyhow::{anyhow, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use crate::models::ExchangeSnapshot;

/// Load an exchange snapshot (allOrders / filledOrders / cancelledOrders)
/// from a JSON file. Missing collections default to empty.
pub fn load_snapshot(path: &str) -> Result<ExchangeSnapshot> {
    let file =
        File::open(path).map_err(|e| anyhow!("Failed to open snapshot file {}: {}", path, e))?;
    let reader = BufReader::new(file);
    let snapshot = serde_json::from_reader(reader)
        .map_err(|e| anyhow!("Failed to parse snapshot file {}: {}", path, e))?;
    Ok(snapshot)
}

/// Write a composed view (or any serializable value) to a JSON file.
pub fn save_view<T: Serialize>(view: &T, path: &str) -> Result<()> {
    let file =
        File::create(path).map_err(|e| anyhow!("Failed to create output file {}: {}", path, e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, view)
        .map_err(|e| anyhow!("Failed to write view to {}: {}", path, e))?;
    Ok(())
}
