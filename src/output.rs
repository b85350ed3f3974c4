//! CSV output
//!
//! The table is rendered in memory first; the file is only created once the
//! whole run has succeeded.

use crate::pipeline::CountyRecord;
use anyhow::{Context, Result};
use std::path::Path;

pub const CSV_HEADER: [&str; 4] = ["county", "county_seat", "lat", "lng"];

/// Header row plus one row per record, in order
pub fn render_csv(records: &[CountyRecord]) -> Result<Vec<u8>> {
    // Explicit header so an empty table still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e.error()))
}

pub async fn write_csv(path: &Path, records: &[CountyRecord]) -> Result<()> {
    let bytes = render_csv(records)?;
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
