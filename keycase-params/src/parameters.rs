//! Typed, resolved case parameters.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Error, ParamValue, ParameterSet, Result, SwitchConfig, defaults,
    resolve::{self, Resolution},
};

/// Known parameters with static types.
///
/// Field names match the parameter names used in parameter files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseParameters {
    pub plate_supports: bool,

    pub x_build_size: f64,
    pub y_build_size: f64,

    pub switch_type: String,
    pub stabilizer_type: String,

    pub custom_shape: bool,
    pub custom_shape_points: Option<Vec<Vec<f64>>>,
    pub custom_shape_path: Option<String>,

    pub kerf: f64,

    pub top_margin: f64,
    pub bottom_margin: f64,
    pub left_margin: f64,
    pub right_margin: f64,
    pub case_height: f64,
    pub case_wall_thickness: f64,
    pub plate_thickness: f64,
    pub plate_corner_radius: f64,
    pub bottom_cover_thickness: f64,

    pub support_bar_height: f64,
    pub support_bar_width: f64,
    pub tilt: f64,

    pub simple_test: bool,

    pub screw_count: u32,
    pub screw_diameter: f64,
    pub screw_edge_inset: f64,
    pub screw_hole_body_wall_width: f64,
    pub screw_hole_body_support_x_factor: f64,

    pub cable_hole: bool,
    pub hole_width: f64,
    pub hole_height: f64,
    pub cable_hole_up_offset: f64,
    pub cable_hole_down_offset: f64,
}

/// Values computed from other parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Derived {
    pub screw_hole_body_diameter: f64,
    pub screw_hole_body_radius: f64,
}

/// The final configuration for a run.
///
/// Built once from a parameter set: overrides are alias-resolved and laid
/// over the defaults, derived values are computed, then every constraint is
/// checked. Nothing is handed out until all three steps succeed.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    params: CaseParameters,
    derived: Derived,
    extra: IndexMap<String, ParamValue>,
    supplied: ParameterSet,
    values: ParameterSet,
    overridden: Vec<String>,
    warnings: Vec<String>,
}

impl ResolvedConfig {
    /// Resolve user overrides against the defaults, derive and validate.
    pub fn resolve(overrides: &ParameterSet) -> Result<Self> {
        let mut config = Self::resolve_unchecked(overrides)?;
        config.derive_calculated_attributes();
        config.validate()?;
        Ok(config)
    }

    /// Resolve and derive without running validation.
    pub fn resolve_unchecked(overrides: &ParameterSet) -> Result<Self> {
        let Resolution {
            values,
            overridden,
            warnings,
        } = resolve::merge(overrides);

        let mut known = serde_json::Map::new();
        let mut extra = IndexMap::new();
        for (name, value) in &values {
            if defaults::is_known(name) {
                known.insert(name.clone(), value.to_json());
            } else {
                extra.insert(name.clone(), value.clone());
            }
        }

        let params = typed_parameters(known)?;
        log::debug!("resolved parameters: {:?}", params);

        let mut config = Self {
            params,
            derived: Derived::default(),
            extra,
            supplied: overrides.clone(),
            values,
            overridden,
            warnings,
        };
        config.derive_calculated_attributes();
        Ok(config)
    }

    /// Recompute every derived value from the resolved parameters.
    pub fn derive_calculated_attributes(&mut self) {
        let p = &self.params;
        let diameter = p.screw_diameter + p.screw_hole_body_wall_width * 2.0;
        self.derived = Derived {
            screw_hole_body_diameter: diameter,
            screw_hole_body_radius: diameter / 2.0,
        };
    }

    /// Check constraints between parameters, reporting all violations at once.
    pub fn validate(&self) -> Result<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::configuration(violations))
        }
    }

    /// List every violated constraint.
    pub fn violations(&self) -> Vec<String> {
        let p = &self.params;
        let d = &self.derived;
        let mut violations = Vec::new();

        let min_inset = p.case_wall_thickness + d.screw_hole_body_radius;
        if p.screw_edge_inset < min_inset {
            violations.push(format!(
                "screw_edge_inset {} must be at least case_wall_thickness {} + screw_hole_body_radius {} = {}",
                p.screw_edge_inset, p.case_wall_thickness, d.screw_hole_body_radius, min_inset
            ));
        }
        if p.x_build_size <= 0.0 {
            violations.push(format!("x_build_size {} must be positive", p.x_build_size));
        }
        if p.y_build_size <= 0.0 {
            violations.push(format!("y_build_size {} must be positive", p.y_build_size));
        }
        if p.kerf < 0.0 {
            violations.push(format!("kerf {} must not be negative", p.kerf));
        }
        if p.plate_thickness <= 0.0 {
            violations.push(format!(
                "plate_thickness {} must be positive",
                p.plate_thickness
            ));
        }
        if p.case_height <= p.bottom_cover_thickness {
            violations.push(format!(
                "case_height {} must be greater than bottom_cover_thickness {}",
                p.case_height, p.bottom_cover_thickness
            ));
        }
        if p.cable_hole && (p.hole_width <= 0.0 || p.hole_height <= 0.0) {
            violations.push(format!(
                "cable hole size {} x {} must be positive",
                p.hole_width, p.hole_height
            ));
        }

        violations
    }

    /// Look up a parameter by name.
    ///
    /// Names exactly as the user supplied them are checked first, then the
    /// resolved layer. A deprecated name the user did not supply reads its
    /// replacement's value.
    pub fn get(&self, name: &str) -> Result<&ParamValue> {
        self.supplied
            .get(name)
            .or_else(|| self.values.get(name))
            .or_else(|| {
                defaults::replacement_for(name).and_then(|current| self.values.get(current))
            })
            .ok_or_else(|| Error::unknown_parameter(name))
    }

    /// Overrides exactly as supplied, before alias resolution.
    pub fn supplied(&self) -> &ParameterSet {
        &self.supplied
    }

    /// Typed parameters.
    pub fn params(&self) -> &CaseParameters {
        &self.params
    }

    /// Derived values.
    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    /// Parameters that have no typed field.
    pub fn extra(&self) -> &IndexMap<String, ParamValue> {
        &self.extra
    }

    /// The full resolved layer, defaults included.
    pub fn values(&self) -> &ParameterSet {
        &self.values
    }

    /// Names set by the user, after alias resolution.
    pub fn overridden(&self) -> &[String] {
        &self.overridden
    }

    /// Warnings raised while resolving deprecated names.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Switch cutout configuration derived from the switch parameters.
    pub fn switch_config(&self) -> SwitchConfig {
        SwitchConfig::new(
            &self.params.switch_type,
            &self.params.stabilizer_type,
            self.params.kerf,
        )
    }
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.values {
            let marker = if self.overridden.contains(name) { "*" } else { " " };
            writeln!(f, "{} {} = {}", marker, name, value)?;
        }
        writeln!(
            f,
            "  screw_hole_body_diameter = {}",
            self.derived.screw_hole_body_diameter
        )?;
        write!(
            f,
            "  screw_hole_body_radius = {}",
            self.derived.screw_hole_body_radius
        )
    }
}

fn typed_parameters(known: serde_json::Map<String, serde_json::Value>) -> Result<CaseParameters> {
    // Check field by field first so the error names the offending parameter.
    for (name, value) in &known {
        let single = serde_json::Value::Object(
            std::iter::once((name.clone(), value.clone())).collect(),
        );
        if let Err(e) = serde_json::from_value::<PartialCheck>(single) {
            return Err(Error::invalid_value(name, e.to_string()));
        }
    }

    serde_json::from_value(serde_json::Value::Object(known))
        .map_err(|e| Error::invalid_value("<parameters>", e.to_string()))
}

/// Mirror of [`CaseParameters`] with every field optional, used to pin type
/// errors to a single parameter name.
#[derive(Deserialize)]
#[allow(dead_code)]
struct PartialCheck {
    plate_supports: Option<bool>,
    x_build_size: Option<f64>,
    y_build_size: Option<f64>,
    switch_type: Option<String>,
    stabilizer_type: Option<String>,
    custom_shape: Option<bool>,
    custom_shape_points: Option<Vec<Vec<f64>>>,
    custom_shape_path: Option<String>,
    kerf: Option<f64>,
    top_margin: Option<f64>,
    bottom_margin: Option<f64>,
    left_margin: Option<f64>,
    right_margin: Option<f64>,
    case_height: Option<f64>,
    case_wall_thickness: Option<f64>,
    plate_thickness: Option<f64>,
    plate_corner_radius: Option<f64>,
    bottom_cover_thickness: Option<f64>,
    support_bar_height: Option<f64>,
    support_bar_width: Option<f64>,
    tilt: Option<f64>,
    simple_test: Option<bool>,
    screw_count: Option<u32>,
    screw_diameter: Option<f64>,
    screw_edge_inset: Option<f64>,
    screw_hole_body_wall_width: Option<f64>,
    screw_hole_body_support_x_factor: Option<f64>,
    cable_hole: Option<bool>,
    hole_width: Option<f64>,
    hole_height: Option<f64>,
    cable_hole_up_offset: Option<f64>,
    cable_hole_down_offset: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, ParamValue)]) -> ParameterSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_defaults_resolve_and_validate() {
        let config = ResolvedConfig::resolve(&ParameterSet::new()).unwrap();

        assert_eq!(config.params().switch_type, "mx_openable");
        assert_eq!(config.params().x_build_size, 200.0);
        assert!(config.overridden().is_empty());
        assert!(config.extra().is_empty());
    }

    #[test]
    fn test_derived_values() {
        let config = ResolvedConfig::resolve(&ParameterSet::new()).unwrap();

        assert_eq!(config.derived().screw_hole_body_diameter, 8.0);
        assert_eq!(config.derived().screw_hole_body_radius, 4.0);
    }

    #[test]
    fn test_derive_is_idempotent() {
        let mut config = ResolvedConfig::resolve(&ParameterSet::new()).unwrap();
        let before = *config.derived();

        config.derive_calculated_attributes();
        config.derive_calculated_attributes();

        assert_eq!(*config.derived(), before);
    }

    #[test]
    fn test_derived_follows_overrides() {
        let config = ResolvedConfig::resolve(&overrides(&[
            ("screw_diameter", ParamValue::Integer(3)),
            ("screw_hole_body_wall_width", ParamValue::Float(1.5)),
        ]))
        .unwrap();

        assert_eq!(config.derived().screw_hole_body_diameter, 6.0);
        assert_eq!(config.derived().screw_hole_body_radius, 3.0);
    }

    #[test]
    fn test_invalid_inset_is_rejected() {
        let err = ResolvedConfig::resolve(&overrides(&[(
            "screw_edge_inset",
            ParamValue::Float(5.0),
        )]))
        .unwrap_err();

        match *err {
            Error::Configuration { violations } => {
                assert_eq!(violations.len(), 1);
                assert!(violations[0].starts_with("screw_edge_inset 5"));
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_inset_equal_to_minimum_is_accepted() {
        let config = ResolvedConfig::resolve(&overrides(&[(
            "screw_edge_inset",
            ParamValue::Float(6.0),
        )]));
        assert!(config.is_ok());
    }

    #[test]
    fn test_every_violation_is_reported() {
        let err = ResolvedConfig::resolve(&overrides(&[
            ("screw_edge_inset", ParamValue::Float(1.0)),
            ("kerf", ParamValue::Float(-0.1)),
            ("x_build_size", ParamValue::Integer(0)),
        ]))
        .unwrap_err();

        match *err {
            Error::Configuration { violations } => assert_eq!(violations.len(), 3),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_unknown_name_fails() {
        let config = ResolvedConfig::resolve(&ParameterSet::new()).unwrap();

        let err = config.get("does_not_exist").unwrap_err();
        assert!(matches!(*err, Error::UnknownParameter { .. }));
    }

    #[test]
    fn test_get_returns_user_extra() {
        let config =
            ResolvedConfig::resolve(&overrides(&[("led_count", ParamValue::Integer(12))])).unwrap();

        assert_eq!(config.get("led_count").unwrap(), &ParamValue::Integer(12));
        assert_eq!(config.extra()["led_count"], ParamValue::Integer(12));
    }

    #[test]
    fn test_wrong_type_names_the_parameter() {
        let err = ResolvedConfig::resolve(&overrides(&[("kerf", ParamValue::from("thin"))]))
            .unwrap_err();

        match *err {
            Error::InvalidValue { name, .. } => assert_eq!(name, "kerf"),
            other => panic!("expected invalid value error, got {:?}", other),
        }
    }
}
