//! Keyboard layout loading for keycase.
//!
//! Reads the row format produced by keyboard-layout-editor, repairs it into
//! strict JSON and walks the rows to compute each key's position in key
//! units.

mod error;
pub mod repair;

use std::path::Path;

pub use error::{Error, Result};
use serde_json::Value;

/// Width of one key unit in millimetres.
pub const KEY_UNIT: f64 = 19.05;

/// A key placed on the layout grid, in key units.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A parsed keyboard layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub name: Option<String>,
    pub keys: Vec<Key>,
}

impl Layout {
    /// Load a layout file, repairing editor output when needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded layout file {}", path.display());
        Self::parse(&raw)
    }

    /// Parse layout text.
    pub fn parse(raw: &str) -> Result<Self> {
        let repaired = repair::quote_bare_keys(raw);
        let value = match serde_json::from_str::<Value>(&repaired) {
            Ok(value) => value,
            Err(first) => {
                log::debug!("layout is not a JSON document ({}), retrying as bare rows", first);
                serde_json::from_str::<Value>(&repair::wrap_rows(&repaired))
                    .map_err(|_| Error::Parse(first))?
            }
        };
        Self::from_value(&value)
    }

    /// Walk the rows of an already-parsed layout.
    pub fn from_value(value: &Value) -> Result<Self> {
        let rows = value
            .as_array()
            .ok_or_else(|| Error::Shape("layout must be a list of rows".to_string()))?;

        let mut layout = Layout::default();
        let mut y = 0.0;

        for (index, row) in rows.iter().enumerate() {
            match row {
                Value::Object(meta) if index == 0 => {
                    layout.name = meta.get("name").and_then(Value::as_str).map(String::from);
                }
                Value::Array(items) => {
                    y = layout.walk_row(items, y)?;
                }
                _ => {
                    return Err(Error::Shape(format!("row {} is not a list", index)));
                }
            }
        }

        Ok(layout)
    }

    /// Add the keys of one row and return the `y` of the next row.
    fn walk_row(&mut self, items: &[Value], mut y: f64) -> Result<f64> {
        let mut x = 0.0;
        let mut width = 1.0;
        let mut height = 1.0;

        for item in items {
            match item {
                Value::Object(props) => {
                    let number = |name: &str| props.get(name).and_then(Value::as_f64);
                    if let Some(dx) = number("x") {
                        x += dx;
                    }
                    if let Some(dy) = number("y") {
                        y += dy;
                    }
                    if let Some(w) = number("w") {
                        width = w;
                    }
                    if let Some(h) = number("h") {
                        height = h;
                    }
                }
                Value::String(label) => {
                    self.keys.push(Key {
                        label: label.clone(),
                        x,
                        y,
                        width,
                        height,
                    });
                    x += width;
                    width = 1.0;
                    height = 1.0;
                }
                other => {
                    return Err(Error::Shape(format!("unexpected layout item {}", other)));
                }
            }
        }

        Ok(y + 1.0)
    }

    /// Width of the layout in key units.
    pub fn width_units(&self) -> f64 {
        self.keys
            .iter()
            .map(|k| k.x + k.width)
            .fold(0.0, f64::max)
    }

    /// Height of the layout in key units.
    pub fn height_units(&self) -> f64 {
        self.keys
            .iter()
            .map(|k| k.y + k.height)
            .fold(0.0, f64::max)
    }
}
