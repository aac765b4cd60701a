//! Raster geometry extraction via GDAL.
//!
//! Opens one band of the product, derives the native-CRS bounding box from
//! the geotransform, and reprojects the four corner points into the
//! geographic form of the source CRS (same datum, lon/lat axes).
use gdal::Dataset;
use gdal::spatial_ref::{AxisMappingStrategy, CoordTransform};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors encountered when extracting raster geometry
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),
    #[error("Raster has no usable spatial reference: {0}")]
    MissingCrs(String),
}

/// A point in the raster's native projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoRefPoint {
    pub x: f64,
    pub y: f64,
}

/// A geographic point (longitude/latitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

/// The four corners of a rectangular raster footprint, keyed upper-left,
/// upper-right, lower-left, lower-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Corners<T> {
    pub ul: T,
    pub ur: T,
    pub ll: T,
    pub lr: T,
}

/// Source spatial reference (WKT) together with the native corner points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub spatial_reference: String,
    pub geo_ref_points: Corners<GeoRefPoint>,
}

/// Read the spatial reference and footprint of a raster band.
///
/// Returns the source projection (WKT plus native corner coordinates) and the
/// same four corners reprojected into the geographic counterpart of the
/// source CRS. Any z component produced by the transform is discarded.
pub fn extract_geometry<P: AsRef<Path>>(
    path: P,
) -> Result<(Projection, Corners<LonLat>), GeometryError> {
    let path = path.as_ref();
    info!("Reading raster geometry: {:?}", path);
    let dataset = Dataset::open(path)?;

    let gt = dataset.geo_transform()?;
    let (width, height) = dataset.raster_size();
    let left = gt[0];
    let top = gt[3];
    let right = left + width as f64 * gt[1];
    let bottom = top + height as f64 * gt[5]; // gt[5] is typically negative

    let corners = Corners {
        ul: GeoRefPoint { x: left, y: top },
        ur: GeoRefPoint { x: right, y: top },
        ll: GeoRefPoint { x: left, y: bottom },
        lr: GeoRefPoint { x: right, y: bottom },
    };

    let spatial_ref = dataset
        .spatial_ref()
        .map_err(|_| GeometryError::MissingCrs(path.display().to_string()))?;

    // Prefer the dataset's own WKT string; fall back to exporting the SRS object
    let wkt = {
        let proj = dataset.projection();
        if proj.is_empty() {
            spatial_ref.to_wkt()?
        } else {
            proj
        }
    };
    if wkt.is_empty() {
        return Err(GeometryError::MissingCrs(path.display().to_string()));
    }

    // Geographic form of the source CRS keeps the datum; axis order forced to
    // (lon, lat) so the transformed output reads as longitude/latitude
    let mut geographic = spatial_ref.geog_cs()?;
    geographic.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);
    let transform = CoordTransform::new(&spatial_ref, &geographic)?;

    let mut xs = [corners.ul.x, corners.ur.x, corners.ll.x, corners.lr.x];
    let mut ys = [corners.ul.y, corners.ur.y, corners.ll.y, corners.lr.y];
    let mut zs = [0.0; 4];
    transform.transform_coords(&mut xs, &mut ys, &mut zs)?;

    let extent = Corners {
        ul: LonLat { lon: xs[0], lat: ys[0] },
        ur: LonLat { lon: xs[1], lat: ys[1] },
        ll: LonLat { lon: xs[2], lat: ys[2] },
        lr: LonLat { lon: xs[3], lat: ys[3] },
    };

    Ok((
        Projection {
            spatial_reference: wkt,
            geo_ref_points: corners,
        },
        extent,
    ))
}
