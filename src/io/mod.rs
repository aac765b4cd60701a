//! I/O layer for reading DIMAP headers and GDAL-backed rasters.
//! Provides the `dimap` header reader, the `geometry` extractor, and
//! `writers` for the YAML descriptor output.
pub mod dimap;
pub use dimap::{AbstractedMetadata, DimapError};

pub mod geometry;
pub use geometry::{Corners, GeoRefPoint, GeometryError, LonLat, Projection};

pub mod writers;
