use std::path::Path;
use tracing::info;

use crate::core::record::DatasetRecord;
use crate::error::Result;

/// Write a dataset descriptor as a YAML sidecar file.
/// The record is serialized fully before anything touches the filesystem,
/// so a failed assembly never leaves a partial descriptor behind.
pub fn write_yaml_sidecar(record: &DatasetRecord, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(record)?;
    std::fs::write(path, yaml)?;
    info!("Wrote dataset descriptor: {:?}", path);
    Ok(())
}
