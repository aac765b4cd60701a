#![doc = r#"
DIMPREP — prepare Sentinel-1 BEAM-DIMAP scenes for datacube indexing.

This crate reads an orthorectified, terrain-corrected Sentinel-1 scene in
BEAM-DIMAP format (the `.dim` XML header written by Sentinel Toolbox/SNAP plus
a `.data/` directory holding each polarization as an ENVI raster) and produces
a typed dataset descriptor: acquisition metadata, the geographic footprint of
the product, its source projection, and the paths of its band files. The
descriptor serializes to a `.yaml` sidecar ready for catalog ingestion. It
powers the DIMPREP CLI and can be embedded in your own Rust applications.

Requirements
------------
- GDAL development headers and runtime available on your system (the ENVI
  band rasters are opened through GDAL).
- Rust 2024 edition toolchain.

Quick start: describe a scene to a file
---------------------------------------
```rust,no_run
use std::path::Path;
use dimprep::api::prepare_scene_to_path;

fn main() -> dimprep::Result<()> {
    let written = prepare_scene_to_path(Path::new("/data/scene1.dim"), None)?;
    println!("descriptor at {:?}", written);
    Ok(())
}
```

Build the descriptor in memory
------------------------------
```rust,no_run
use std::path::Path;
use dimprep::api::prepare_scene;

fn main() -> dimprep::Result<()> {
    let record = prepare_scene(Path::new("/data/scene1.dim"))?;
    println!("{} covers lon {:.3}..{:.3}",
        record.lineage.ga_label,
        record.extent.coord.ul.lon,
        record.extent.coord.lr.lon);
    Ok(())
}
```

Error handling
--------------
All public functions return `dimprep::Result<T>`; match on `dimprep::Error`
to handle specific cases, e.g. DIMAP header or raster geometry errors.

```rust,no_run
use std::path::Path;
use dimprep::{Error, api::prepare_scene};

fn main() {
    match prepare_scene(Path::new("/bad/scene.dim")) {
        Ok(record) => println!("id {}", record.id),
        Err(Error::Dimap(e)) => eprintln!("DIMAP error: {e}"),
        Err(Error::Geometry(e)) => eprintln!("geometry error: {e}"),
        Err(other) => eprintln!("other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the typed `DatasetRecord` and its assembly.
- [`io`] — DIMAP header reader, raster geometry extractor, YAML writer.
- [`types`] — shared enums (`Polarization`).
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::record::{DatasetRecord, prepare_dataset};
pub use error::{Error, Result};
pub use types::Polarization;

// Readers and writers
pub use io::dimap::{AbstractedMetadata, DimapError};
pub use io::geometry::{Corners, GeoRefPoint, GeometryError, LonLat, Projection, extract_geometry};
pub use io::writers::yaml::write_yaml_sidecar;

// High-level API re-exports
pub use api::{prepare_scene, prepare_scene_to_path};
