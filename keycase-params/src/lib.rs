//! Layered case parameters for keycase.
//!
//! Parameters come from three layers: a process-wide defaults table, the
//! user's overrides, and a map of deprecated names to their replacements.
//! [`ResolvedConfig::resolve`] merges them, computes derived values and
//! validates the result as a whole.
//!
//! ```ignore
//! let file = ParameterFile::open("params.json")?;
//! let config = ResolvedConfig::resolve(file.overrides())?;
//! assert_eq!(config.get("kerf")?.as_f64(), Some(0.1));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod defaults;
mod error;
mod file;
mod parameters;
pub mod resolve;
mod switch;
mod value;

pub use error::{Error, Result, SourceContext};
pub use file::{Format, ParameterFile, parse_overrides};
pub use parameters::{CaseParameters, Derived, ResolvedConfig};
pub use switch::SwitchConfig;
pub use value::{ParamValue, ParameterSet};
