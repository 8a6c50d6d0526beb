use std::path::{Path, PathBuf};

use crate::{Error, ParameterSet, Result, error::SourceContext};

/// Supported parameter file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }
}

/// A parameter file with both raw content and parsed overrides.
#[derive(Debug)]
pub struct ParameterFile {
    path: PathBuf,
    content: String,
    overrides: ParameterSet,
}

impl ParameterFile {
    /// Open and parse a parameter file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path)
            .ok_or_else(|| Box::new(Error::UnsupportedFormat { path: path.clone() }))?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let overrides = parse_overrides(&content, &filename, format)?;

        Ok(Self {
            path,
            content,
            overrides,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed overrides.
    pub fn overrides(&self) -> &ParameterSet {
        &self.overrides
    }
}

/// Parse overrides from content with the given filename for error reporting.
pub fn parse_overrides(content: &str, filename: &str, format: Format) -> Result<ParameterSet> {
    let source_ctx = SourceContext::new(content, filename);
    match format {
        Format::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?;
            if !value.is_object() {
                return Err(source_ctx.not_a_table_error());
            }
            serde_json::from_value(value).map_err(|e| source_ctx.json_error(e))
        }
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ParamValue;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("p.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("p.TOML")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("p.yaml")), None);
    }

    #[test]
    fn test_open_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("params.json");
        fs::write(&path, r#"{"cable_hole": true, "kerf": 0.1}"#).unwrap();

        let file = ParameterFile::open(&path).unwrap();

        assert_eq!(file.overrides()["cable_hole"], ParamValue::Bool(true));
        assert_eq!(file.overrides()["kerf"], ParamValue::Float(0.1));
    }

    #[test]
    fn test_open_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("params.toml");
        fs::write(&path, "case_height = 12\nswitch_type = \"alps\"\n").unwrap();

        let file = ParameterFile::open(&path).unwrap();

        assert_eq!(file.overrides()["case_height"], ParamValue::Integer(12));
    }

    #[test]
    fn test_json_array_root_is_rejected() {
        let err = parse_overrides("[1, 2]", "params.json", Format::Json).unwrap_err();
        assert!(matches!(*err, Error::NotATable { .. }));
    }

    #[test]
    fn test_json_syntax_error_has_span() {
        let err = parse_overrides("{\"kerf\": }", "params.json", Format::Json).unwrap_err();
        match *err {
            Error::ParseJson { span, .. } => assert!(span.is_some()),
            other => panic!("expected json parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ParameterFile::open("params.yaml").unwrap_err();
        assert!(matches!(*err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = ParameterFile::open("/nonexistent/params.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
