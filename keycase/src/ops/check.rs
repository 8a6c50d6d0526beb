//! Check operation - parameter resolution without building.

use std::path::Path;

use keycase_params::ResolvedConfig;

use crate::reports::CheckReport;

/// Execute the check operation on an already validated configuration.
pub fn check(config: &ResolvedConfig, parameter_file: Option<&Path>) -> CheckReport {
    CheckReport {
        parameter_file: parameter_file.map(Path::to_path_buf),
        parameters: config.to_string(),
        overridden: config.overridden().to_vec(),
        extra: config.extra().keys().cloned().collect(),
        warnings: config.warnings().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use keycase_params::{ParamValue, ParameterSet};

    use super::*;
    use crate::reports::{BufferOutput, Report};

    #[test]
    fn test_reports_overrides_and_aliases() {
        let mut overrides = ParameterSet::new();
        overrides.insert("plate_wall_thickness".to_string(), ParamValue::from(3.0));
        overrides.insert("case_wall_thickness".to_string(), ParamValue::from(2.5));
        overrides.insert("logo_text".to_string(), ParamValue::from("hi"));
        let config = ResolvedConfig::resolve(&overrides).unwrap();

        let report = check(&config, Some(Path::new("params.json")));

        assert_eq!(report.extra, vec!["logo_text".to_string()]);
        assert!(report.overridden.contains(&"case_wall_thickness".to_string()));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.parameters.contains("* case_wall_thickness = 2.5"));
    }

    #[test]
    fn test_alias_warning_is_printed_once() {
        let mut overrides = ParameterSet::new();
        overrides.insert("plate_wall_thickness".to_string(), ParamValue::from(3.0));
        let config = ResolvedConfig::resolve(&overrides).unwrap();

        let mut out = BufferOutput::default();
        check(&config, None).render(&mut out);

        let warnings: Vec<_> = out
            .lines
            .iter()
            .filter(|line| line.starts_with("warning:"))
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("plate_wall_thickness"));
    }
}
