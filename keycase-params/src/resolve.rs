//! Deprecated-name resolution and layering of overrides onto defaults.

use crate::{ParameterSet, defaults};

/// The merged parameter layer plus anything worth telling the user about.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Defaults overwritten by alias-resolved overrides.
    pub values: ParameterSet,
    /// Names supplied by the user after alias resolution.
    pub overridden: Vec<String>,
    /// Deprecated names that were used or discarded.
    pub warnings: Vec<String>,
}

/// Rewrite deprecated names in `overrides` to their replacements.
///
/// A deprecated name is renamed when its replacement is absent. When both
/// are present the deprecated value is dropped and the current name wins.
pub fn resolve_aliases(overrides: &ParameterSet) -> (ParameterSet, Vec<String>) {
    let mut resolved = ParameterSet::new();
    let mut warnings = Vec::new();

    for (name, value) in overrides {
        match defaults::replacement_for(name) {
            Some(current) if overrides.contains_key(current) => {
                let message = format!(
                    "deprecated parameter '{}' ignored because '{}' is also set",
                    name, current
                );
                log::debug!("{}", message);
                warnings.push(message);
            }
            Some(current) => {
                let message = format!(
                    "parameter '{}' is deprecated, use '{}' instead",
                    name, current
                );
                log::debug!("{}", message);
                warnings.push(message);
                resolved.insert(current.to_string(), value.clone());
            }
            None => {
                resolved.insert(name.clone(), value.clone());
            }
        }
    }

    (resolved, warnings)
}

/// Merge alias-resolved overrides onto the default table.
///
/// Unknown names are kept: the parameter set is open so new parameters can
/// be added without touching the loader.
pub fn merge(overrides: &ParameterSet) -> Resolution {
    let (resolved, warnings) = resolve_aliases(overrides);
    let mut values = defaults::defaults();
    let mut overridden = Vec::with_capacity(resolved.len());

    for (name, value) in resolved {
        if !defaults::is_known(&name) {
            log::debug!("keeping unknown parameter '{}'", name);
        }
        overridden.push(name.clone());
        values.insert(name, value);
    }

    Resolution {
        values,
        overridden,
        warnings,
    }
}
