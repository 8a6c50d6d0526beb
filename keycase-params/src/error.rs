use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for parameter operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the parameter file content and its name so parse errors can point
/// at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ParseToml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self
            .offset_of(source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::ParseJson {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for a file whose root is not a table.
    pub fn not_a_table_error(&self) -> Box<Error> {
        Box::new(Error::NotATable {
            src: self.named_source(),
        })
    }

    /// Byte offset of a 1-based line and column.
    fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        let offset = line_start + column.saturating_sub(1);
        (offset <= self.src.len()).then_some(offset)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(keycase::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse parameter file")]
    #[diagnostic(code(keycase::parse_error))]
    ParseJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse parameter file")]
    #[diagnostic(code(keycase::parse_error))]
    ParseToml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("parameter file must contain a table of named parameters")]
    #[diagnostic(
        code(keycase::not_a_table),
        help("write parameters as {{\"name\": value, ...}} or `name = value` lines")
    )]
    NotATable {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("unsupported parameter file '{path}'")]
    #[diagnostic(
        code(keycase::unsupported_format),
        help("parameter files must end in .json or .toml")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid value for parameter '{name}': {message}")]
    #[diagnostic(code(keycase::invalid_value))]
    InvalidValue { name: String, message: String },

    #[error("invalid parameters:\n{}", bullet_list(.violations))]
    #[diagnostic(
        code(keycase::configuration),
        help("adjust the parameter file so that every constraint holds")
    )]
    Configuration { violations: Vec<String> },

    #[error("no parameter exists with name '{name}'")]
    #[diagnostic(code(keycase::unknown_parameter))]
    UnknownParameter { name: String },
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Error {
    /// Create an aggregate configuration error.
    pub fn configuration(violations: Vec<String>) -> Box<Self> {
        Box::new(Error::Configuration { violations })
    }

    /// Create an unknown parameter error.
    pub fn unknown_parameter(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownParameter { name: name.into() })
    }

    /// Create an invalid value error.
    pub fn invalid_value(name: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidValue {
            name: name.into(),
            message: message.into(),
        })
    }
}
