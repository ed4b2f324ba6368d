use std::io::Write;
use std::path::Path;

use fronts_core::crs::Crs;
use fronts_core::error::FrontsError;
use fronts_core::input::SstUnit;
use fronts_core::io::scene::{load_scene, parse_scene};
use serde_json::json;

fn scene_json() -> serde_json::Value {
    json!({
        "sst": {
            "lat": [45.0, 45.1],
            "lon": [5.0, 5.1, 5.2],
            "values": [[288.1, null, 288.3], [288.4, 288.5, 288.6]],
            "crs": "EPSG:4326",
            "time": "2022-06-15T00:00:00Z",
            "unit": "Kelvin"
        },
        "aoi": {
            "crs": "EPSG:4326",
            "polygons": [{ "exterior": [[4, 44], [6, 44], [6, 46], [4, 46]] }]
        },
        "coast_buffer": { "crs": "EPSG:4326", "polygons": [] }
    })
}

#[test]
fn test_parse_scene() {
    let scene = parse_scene(&scene_json().to_string()).unwrap();

    assert_eq!(scene.sst.dim(), (2, 3));
    assert_eq!(scene.sst.crs(), Some(Crs::Wgs84));
    assert_eq!(scene.unit, SstUnit::Kelvin);
    assert_eq!(
        scene.sst.time().map(|t| t.to_rfc3339()),
        Some("2022-06-15T00:00:00+00:00".to_string())
    );
    assert_eq!(scene.sst.values()[[1, 2]], 288.6);
    assert_eq!(scene.aoi.len(), 1);
    assert!(scene.coast_buffer.is_empty());
}

#[test]
fn test_null_is_nodata() {
    let scene = parse_scene(&scene_json().to_string()).unwrap();
    assert!(scene.sst.values()[[0, 1]].is_nan());
    assert_eq!(scene.sst.count_valid(), 5);
}

#[test]
fn test_optional_fields_default() {
    let mut value = scene_json();
    let sst = value["sst"].as_object_mut().unwrap();
    sst.remove("crs");
    sst.remove("time");
    sst.remove("unit");

    let scene = parse_scene(&value.to_string()).unwrap();
    assert_eq!(scene.sst.crs(), None);
    assert_eq!(scene.sst.time(), None);
    assert_eq!(scene.unit, SstUnit::Kelvin);
}

#[test]
fn test_celsius_unit() {
    let mut value = scene_json();
    value["sst"]["unit"] = json!("Celsius");
    let scene = parse_scene(&value.to_string()).unwrap();
    assert_eq!(scene.unit, SstUnit::Celsius);
}

#[test]
fn test_ragged_rows_rejected() {
    let mut value = scene_json();
    value["sst"]["values"] = json!([[288.1, 288.2, 288.3], [288.4, 288.5]]);
    let result = parse_scene(&value.to_string());
    assert!(matches!(
        result,
        Err(FrontsError::ShapeMismatch { cols: 2, .. })
    ));
}

#[test]
fn test_row_count_mismatch_rejected() {
    let mut value = scene_json();
    value["sst"]["values"] = json!([[288.1, 288.2, 288.3]]);
    let result = parse_scene(&value.to_string());
    assert!(matches!(
        result,
        Err(FrontsError::ShapeMismatch { rows: 1, lat_len: 2, .. })
    ));
}

#[test]
fn test_unsorted_axis_rejected() {
    let mut value = scene_json();
    value["sst"]["lon"] = json!([5.0, 5.2, 5.1]);
    let result = parse_scene(&value.to_string());
    assert!(matches!(
        result,
        Err(FrontsError::NonMonotonicAxis { axis: "lon", index: 2 })
    ));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        parse_scene("{ not json"),
        Err(FrontsError::InvalidScene(_))
    ));
}

#[test]
fn test_load_scene_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", scene_json()).unwrap();

    let scene = load_scene(file.path()).unwrap();
    assert_eq!(scene.sst.dim(), (2, 3));
}

#[test]
fn test_load_missing_file() {
    let result = load_scene(Path::new("/nonexistent/scene.json"));
    assert!(matches!(result, Err(FrontsError::Io(_))));
}
