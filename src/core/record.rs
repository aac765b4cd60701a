//! Dataset descriptor assembly.
//!
//! Pulls acquisition metadata out of the DIMAP header, resolves the band
//! files in the `.data` sidecar directory, extracts the footprint from one
//! band, and shapes everything into the fixed descriptor layout the
//! datacube indexer expects.
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::io::dimap::AbstractedMetadata;
use crate::io::geometry::{self, Corners, LonLat, Projection};
use crate::types::Polarization;

const PROCESSING_LEVEL: &str = "terrain";
const PRODUCT_TYPE: &str = "gamma0";
const PLATFORM_CODE: &str = "SENTINEL_1";
const INSTRUMENT_NAME: &str = "SAR";
const FORMAT_NAME: &str = "ENVI";
/// Nodata sentinel shared by both gamma0 bands
const BAND_NODATA: i64 = 0;

#[derive(Debug, Clone, Serialize)]
pub struct PlatformBlock {
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstrumentBlock {
    pub name: String,
}

/// Geographic footprint plus the acquisition time span
#[derive(Debug, Clone, Serialize)]
pub struct ExtentBlock {
    pub coord: Corners<LonLat>,
    pub from_dt: String,
    pub to_dt: String,
    pub center_dt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatBlock {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridSpatialBlock {
    pub projection: Projection,
}

/// One raster band: where it lives and what its nodata sentinel is
#[derive(Debug, Clone, Serialize)]
pub struct BandInfo {
    pub path: PathBuf,
    pub nodata: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageBands {
    pub vh: BandInfo,
    pub vv: BandInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageBlock {
    pub bands: ImageBands,
}

/// Provenance block linking the descriptor back to its source scene
#[derive(Debug, Clone, Serialize)]
pub struct LineageBlock {
    pub source_datasets: BTreeMap<String, String>,
    pub ga_label: String,
}

/// The full dataset descriptor, serialized as-is to the YAML sidecar
#[derive(Debug, Clone, Serialize)]
pub struct DatasetRecord {
    pub id: Uuid,
    pub processing_level: String,
    pub product_type: String,
    pub platform: PlatformBlock,
    pub instrument: InstrumentBlock,
    pub extent: ExtentBlock,
    pub format: FormatBlock,
    pub grid_spatial: GridSpatialBlock,
    pub image: ImageBlock,
    pub lineage: LineageBlock,
}

/// Render a timestamp the way the catalog expects
/// (`YYYY-MM-DD HH:MM:SS`, fractional seconds only when non-zero).
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S%.f").to_string()
}

/// Midpoint of the acquisition interval.
pub fn center_time(start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
    start + (end - start) / 2
}

/// Paths of the band rasters belonging to a `.dim` header, in fixed
/// vh-then-vv order, following the `<name>.data/Gamma0_<POL>.img` convention.
pub fn band_paths(header: &Path) -> Vec<PathBuf> {
    let data_dir = header.with_extension("data");
    Polarization::ALL
        .iter()
        .map(|pol| data_dir.join(pol.band_filename()))
        .collect()
}

/// Assemble the full descriptor for one scene, given its `.dim` header path.
///
/// Fails without side effects if the header is unreadable, the metadata
/// block or any required attribute is absent, a timestamp is unparseable,
/// or the reference band cannot be opened or lacks a spatial reference.
pub fn prepare_dataset<P: AsRef<Path>>(header: P) -> Result<DatasetRecord> {
    let header = header.as_ref();
    let meta = AbstractedMetadata::from_dim_header(header)?;
    info!("Scene {} acquired by {}", meta.scene_name, meta.platform);

    let bands = band_paths(header);

    // Bands are co-registered by the terrain correction step, so the first
    // one supplies the spatial bounds for the whole product
    let (projection, coord) = geometry::extract_geometry(&bands[0])?;

    let center = center_time(meta.first_line_time, meta.last_line_time);

    Ok(DatasetRecord {
        id: Uuid::new_v4(),
        processing_level: PROCESSING_LEVEL.to_string(),
        product_type: PRODUCT_TYPE.to_string(),
        // Fixed code regardless of the parsed MISSION; the descriptor schema
        // expects the catalog-level platform identifier, not the header value
        platform: PlatformBlock {
            code: PLATFORM_CODE.to_string(),
        },
        instrument: InstrumentBlock {
            name: INSTRUMENT_NAME.to_string(),
        },
        extent: ExtentBlock {
            coord,
            from_dt: format_datetime(&meta.first_line_time),
            to_dt: format_datetime(&meta.last_line_time),
            center_dt: format_datetime(&center),
        },
        format: FormatBlock {
            name: FORMAT_NAME.to_string(),
        },
        grid_spatial: GridSpatialBlock { projection },
        image: ImageBlock {
            bands: ImageBands {
                vh: BandInfo {
                    path: bands[0].clone(),
                    nodata: BAND_NODATA,
                },
                vv: BandInfo {
                    path: bands[1].clone(),
                    nodata: BAND_NODATA,
                },
            },
        },
        lineage: LineageBlock {
            source_datasets: BTreeMap::new(),
            ga_label: meta.scene_name,
        },
    })
}
