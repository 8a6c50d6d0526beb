//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from parameter validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Parameter file, if one was given.
    pub parameter_file: Option<PathBuf>,
    /// Resolved parameter table.
    pub parameters: String,
    /// Names the user overrode.
    pub overridden: Vec<String>,
    /// Keys not in the defaults table.
    pub extra: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.parameter_file {
            Some(path) => out.preformatted(&format!("✓ {} is valid", path.display())),
            None => out.preformatted("✓ default parameters are valid"),
        }
        out.newline();

        out.section(&format!(
            "Parameters ({} overridden)",
            self.overridden.len()
        ));
        out.preformatted(&self.parameters);

        if !self.extra.is_empty() {
            out.newline();
            out.section("Unrecognized parameters (kept as-is)");
            for name in &self.extra {
                out.list_item(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_lists_extra_parameters() {
        let report = CheckReport {
            parameter_file: Some(PathBuf::from("params.json")),
            parameters: "* my_setting = 1".to_string(),
            overridden: vec!["my_setting".to_string()],
            extra: vec!["my_setting".to_string()],
            warnings: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.text(),
            "✓ params.json is valid\n\nParameters (1 overridden):\n* my_setting = 1\n\n\
             Unrecognized parameters (kept as-is):\n  - my_setting"
        );
    }
}
