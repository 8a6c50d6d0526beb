//! Process-wide default parameters and deprecated names.

use crate::{ParamValue, ParameterSet};

/// A default value that can live in a constant table.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DefaultValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
}

impl DefaultValue {
    fn to_value(self) -> ParamValue {
        match self {
            DefaultValue::Null => ParamValue::Null,
            DefaultValue::Bool(b) => ParamValue::Bool(b),
            DefaultValue::Int(i) => ParamValue::Integer(i),
            DefaultValue::Float(f) => ParamValue::Float(f),
            DefaultValue::Str(s) => ParamValue::String(s.to_string()),
        }
    }
}

/// Every known parameter with its default.
pub(crate) const DEFAULTS: &[(&str, DefaultValue)] = &[
    ("plate_supports", DefaultValue::Bool(true)),
    ("x_build_size", DefaultValue::Int(200)),
    ("y_build_size", DefaultValue::Int(200)),
    ("switch_type", DefaultValue::Str("mx_openable")),
    ("stabilizer_type", DefaultValue::Str("cherry")),
    ("custom_shape", DefaultValue::Bool(false)),
    ("custom_shape_points", DefaultValue::Null),
    ("custom_shape_path", DefaultValue::Null),
    ("kerf", DefaultValue::Float(0.0)),
    ("top_margin", DefaultValue::Int(8)),
    ("bottom_margin", DefaultValue::Int(8)),
    ("left_margin", DefaultValue::Int(8)),
    ("right_margin", DefaultValue::Int(8)),
    ("case_height", DefaultValue::Int(10)),
    ("case_wall_thickness", DefaultValue::Float(2.0)),
    ("plate_thickness", DefaultValue::Float(1.511)),
    ("plate_corner_radius", DefaultValue::Int(4)),
    ("bottom_cover_thickness", DefaultValue::Int(2)),
    ("support_bar_height", DefaultValue::Float(3.0)),
    ("support_bar_width", DefaultValue::Float(1.0)),
    ("tilt", DefaultValue::Float(0.0)),
    ("simple_test", DefaultValue::Bool(false)),
    ("screw_count", DefaultValue::Int(8)),
    ("screw_diameter", DefaultValue::Int(4)),
    ("screw_edge_inset", DefaultValue::Float(6.5)),
    ("screw_hole_body_wall_width", DefaultValue::Int(2)),
    ("screw_hole_body_support_x_factor", DefaultValue::Int(4)),
    ("cable_hole", DefaultValue::Bool(false)),
    ("hole_width", DefaultValue::Int(10)),
    ("hole_height", DefaultValue::Int(10)),
    ("cable_hole_up_offset", DefaultValue::Int(1)),
    ("cable_hole_down_offset", DefaultValue::Int(1)),
];

/// Deprecated parameter names and the names that replaced them.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("plate_wall_thickness", "case_wall_thickness"),
    ("custum_shape_points", "custom_shape_points"),
];

/// Build the default parameter set.
pub fn defaults() -> ParameterSet {
    DEFAULTS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_value()))
        .collect()
}

/// Look up the replacement for a deprecated name.
pub fn replacement_for(name: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(deprecated, _)| *deprecated == name)
        .map(|(_, current)| *current)
}

/// Whether a name has a default.
pub fn is_known(name: &str) -> bool {
    DEFAULTS.iter().any(|(known, _)| *known == name)
}
