use dimprep::io::geometry::{GeometryError, extract_geometry};
use gdal::DriverManager;
use gdal::spatial_ref::{AxisMappingStrategy, CoordTransform, SpatialRef};
use std::path::{Path, PathBuf};

/// Create a small GeoTIFF with the given geotransform and optional EPSG code.
fn create_raster(
    dir: &Path,
    name: &str,
    geotransform: [f64; 6],
    epsg: Option<u32>,
) -> PathBuf {
    let path = dir.join(name);
    let driver = DriverManager::get_driver_by_name("GTiff").expect("GTiff driver missing");
    let mut ds = driver
        .create_with_band_type::<f32, _>(&path, 100, 100, 1)
        .expect("Failed to create test raster");
    ds.set_geo_transform(&geotransform)
        .expect("Failed to set geotransform");
    if let Some(code) = epsg {
        let srs = SpatialRef::from_epsg(code).expect("Failed to build SRS");
        ds.set_spatial_ref(&srs).expect("Failed to set SRS");
    }
    drop(ds);
    path
}

#[test]
fn test_corner_points_from_bounds() {
    // UTM zone 33N, 10 m pixels, 100x100 raster
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(
        dir.path(),
        "utm.tif",
        [500_000.0, 10.0, 0.0, 4_649_776.0, 0.0, -10.0],
        Some(32633),
    );

    let (projection, extent) = extract_geometry(&path).expect("Failed to extract geometry");

    let corners = &projection.geo_ref_points;
    assert_eq!(corners.ul.x, 500_000.0);
    assert_eq!(corners.ul.y, 4_649_776.0);
    assert_eq!(corners.ur.x, 501_000.0);
    assert_eq!(corners.ur.y, 4_649_776.0);
    assert_eq!(corners.ll.x, 500_000.0);
    assert_eq!(corners.ll.y, 4_648_776.0);
    assert_eq!(corners.lr.x, 501_000.0);
    assert_eq!(corners.lr.y, 4_648_776.0);

    assert!(projection.spatial_reference.contains("32633"));

    // The footprint sits near 15E 42N; sanity-check the reprojected corners
    for pt in [extent.ul, extent.ur, extent.ll, extent.lr] {
        assert!((14.0..16.0).contains(&pt.lon), "lon out of range: {}", pt.lon);
        assert!((41.0..43.0).contains(&pt.lat), "lat out of range: {}", pt.lat);
    }
    assert!(extent.ul.lat > extent.ll.lat);
    assert!(extent.ur.lon > extent.ul.lon);
}

#[test]
fn test_projected_corners_round_trip() {
    // Inverse-transforming the geographic corners must recover the native
    // UTM corners within tolerance
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(
        dir.path(),
        "utm.tif",
        [500_000.0, 10.0, 0.0, 4_649_776.0, 0.0, -10.0],
        Some(32633),
    );

    let (projection, extent) = extract_geometry(&path).unwrap();
    let corners = &projection.geo_ref_points;

    let srs = SpatialRef::from_epsg(32633).unwrap();
    let mut geographic = srs.geog_cs().unwrap();
    geographic.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);
    let inverse = CoordTransform::new(&geographic, &srs).unwrap();

    let mut xs = [extent.ul.lon, extent.ur.lon, extent.ll.lon, extent.lr.lon];
    let mut ys = [extent.ul.lat, extent.ur.lat, extent.ll.lat, extent.lr.lat];
    let mut zs = [0.0; 4];
    inverse.transform_coords(&mut xs, &mut ys, &mut zs).unwrap();

    let native = [corners.ul, corners.ur, corners.ll, corners.lr];
    for (i, pt) in native.iter().enumerate() {
        assert!((xs[i] - pt.x).abs() < 1e-3, "x[{i}]: {} vs {}", xs[i], pt.x);
        assert!((ys[i] - pt.y).abs() < 1e-3, "y[{i}]: {} vs {}", ys[i], pt.y);
    }
}

#[test]
fn test_geographic_source_is_near_identity() {
    // A raster already in lon/lat: reprojecting into the geographic form of
    // its own CRS must return the corners unchanged (round-trip law)
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(
        dir.path(),
        "geo.tif",
        [10.0, 0.01, 0.0, 21.0, 0.0, -0.01],
        Some(4326),
    );

    let (projection, extent) = extract_geometry(&path).unwrap();
    let corners = &projection.geo_ref_points;

    let pairs = [
        (extent.ul, corners.ul),
        (extent.ur, corners.ur),
        (extent.ll, corners.ll),
        (extent.lr, corners.lr),
    ];
    for (geo, native) in pairs {
        assert!((geo.lon - native.x).abs() < 1e-9, "{} vs {}", geo.lon, native.x);
        assert!((geo.lat - native.y).abs() < 1e-9, "{} vs {}", geo.lat, native.y);
    }
}

#[test]
fn test_missing_raster_fails() {
    let result = extract_geometry("does_not_exist.img");
    assert!(result.is_err());
}

#[test]
fn test_raster_without_crs_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(
        dir.path(),
        "nocrs.tif",
        [0.0, 1.0, 0.0, 0.0, 0.0, -1.0],
        None,
    );

    let err = extract_geometry(&path).unwrap_err();
    assert!(matches!(err, GeometryError::MissingCrs(_)));
}
