//! End-to-end parameter resolution through parameter files.

use std::fs;

use keycase_params::{Error, ParamValue, ParameterFile, ParameterSet, ResolvedConfig};
use tempfile::TempDir;

fn resolve_json(content: &str) -> keycase_params::Result<ResolvedConfig> {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("params.json");
    fs::write(&path, content).unwrap();
    let file = ParameterFile::open(&path)?;
    ResolvedConfig::resolve(file.overrides())
}

#[test]
fn test_deprecated_name_resolves_to_replacement() {
    let config = resolve_json(r#"{"plate_wall_thickness": 1.5}"#).unwrap();

    assert_eq!(
        config.get("case_wall_thickness").unwrap(),
        &ParamValue::Float(1.5)
    );
    assert_eq!(config.params().case_wall_thickness, 1.5);
    assert_eq!(config.warnings().len(), 1);
}

#[test]
fn test_current_name_wins_over_deprecated() {
    let config =
        resolve_json(r#"{"plate_wall_thickness": 1.5, "case_wall_thickness": 2.5}"#).unwrap();

    assert_eq!(
        config.get("case_wall_thickness").unwrap(),
        &ParamValue::Float(2.5)
    );
    assert_eq!(config.params().case_wall_thickness, 2.5);
}

#[test]
fn test_supplied_deprecated_name_is_readable() {
    let config =
        resolve_json(r#"{"plate_wall_thickness": 1.5, "case_wall_thickness": 2.5}"#).unwrap();

    assert_eq!(
        config.get("plate_wall_thickness").unwrap(),
        &ParamValue::Float(1.5)
    );
}

#[test]
fn test_get_deprecated_name_without_overrides() {
    let config = ResolvedConfig::resolve(&ParameterSet::new()).unwrap();

    assert_eq!(config.get("custum_shape_points").unwrap(), &ParamValue::Null);
    assert_eq!(
        config.get("plate_wall_thickness").unwrap(),
        &ParamValue::Float(2.0)
    );
}

#[test]
fn test_get_unknown_name_fails() {
    let config = ResolvedConfig::resolve(&ParameterSet::new()).unwrap();

    let err = config.get("led_strip").unwrap_err();
    assert!(matches!(*err, Error::UnknownParameter { .. }));
}

#[test]
fn test_cable_and_kerf_overrides() {
    let config = resolve_json(r#"{"cable_hole": true, "kerf": 0.1}"#).unwrap();

    assert_eq!(config.get("kerf").unwrap().as_f64(), Some(0.1));
    assert_eq!(config.get("cable_hole").unwrap().as_bool(), Some(true));
    assert!(config.params().cable_hole);
    assert_eq!(config.params().kerf, 0.1);
}

#[test]
fn test_old_shape_points_name_still_loads() {
    let config = resolve_json(r#"{"custum_shape_points": [[0, 0], [10, 0], [10, 10]]}"#).unwrap();

    assert_eq!(
        config.params().custom_shape_points,
        Some(vec![vec![0.0, 0.0], vec![10.0, 0.0], vec![10.0, 10.0]])
    );
}

#[test]
fn test_invalid_file_reports_configuration_error() {
    let err = resolve_json(r#"{"screw_edge_inset": 2, "case_wall_thickness": 3}"#).unwrap_err();

    let message = err.to_string();
    assert!(matches!(*err, Error::Configuration { .. }));
    assert!(message.contains("screw_edge_inset 2"));
}

#[test]
fn test_empty_overrides_match_defaults() {
    let config = ResolvedConfig::resolve(&ParameterSet::new()).unwrap();
    assert_eq!(config.values(), &keycase_params::defaults::defaults());
}
