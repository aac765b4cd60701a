//! High-level, ergonomic library API: prepare a scene descriptor in memory
//! or write it straight to its YAML sidecar. Prefer these entrypoints over
//! the low-level modules when embedding DIMPREP.
use std::path::{Path, PathBuf};

use crate::core::record::{DatasetRecord, prepare_dataset};
use crate::error::Result;
use crate::io::writers::yaml::write_yaml_sidecar;

/// Build the dataset descriptor for a `.dim` header without writing anything.
pub fn prepare_scene(header: &Path) -> Result<DatasetRecord> {
    prepare_dataset(header)
}

/// Build the descriptor and write it as a YAML sidecar.
///
/// When `output` is `None` the descriptor lands next to the header with the
/// suffix swapped to `.yaml`. Returns the path actually written. Nothing is
/// written if any stage of the assembly fails.
pub fn prepare_scene_to_path(header: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let record = prepare_dataset(header)?;
    let out = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| header.with_extension("yaml"));
    write_yaml_sidecar(&record, &out)?;
    Ok(out)
}
