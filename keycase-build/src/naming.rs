//! Deterministic artifact file names.
//!
//! A name is built as
//! `basename + section suffix + "_" + part + switch suffix + stabilizer suffix + extension`
//! and the same stem is used for the design file and the compiled artifact.

use std::path::PathBuf;

use keycase_core::{
    BuildTarget, OutputDirs, Part, SectionSelector,
    paths::{COMPILED_EXTENSION, DESIGN_EXTENSION},
};
use keycase_params::ResolvedConfig;

/// Output paths for one part of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub design: PathBuf,
    pub compiled: PathBuf,
}

/// Derives file names under the run's output directories.
#[derive(Debug, Clone)]
pub struct ArtifactNamer {
    basename: String,
    dirs: OutputDirs,
}

impl ArtifactNamer {
    pub fn new(basename: impl Into<String>, dirs: OutputDirs) -> Self {
        Self {
            basename: basename.into(),
            dirs,
        }
    }

    /// File name without directory or extension.
    pub fn file_stem(
        &self,
        target: &BuildTarget,
        part: Part,
        config: &ResolvedConfig,
        include_switch_type: bool,
    ) -> String {
        let mut stem = self.basename.clone();
        stem.push_str(&section_suffix(target.selector));
        stem.push('_');
        stem.push_str(part.as_str());

        if include_switch_type && target.selector.allows_switch_suffix() && !part.is_global() {
            let params = config.params();
            stem.push('_');
            stem.push_str(&params.switch_type);
            stem.push('_');
            stem.push_str(&params.stabilizer_type);
        }

        stem
    }

    /// Design file and compiled artifact paths for a part.
    pub fn name_for(
        &self,
        target: &BuildTarget,
        part: Part,
        config: &ResolvedConfig,
        include_switch_type: bool,
    ) -> ArtifactPaths {
        let stem = self.file_stem(target, part, config, include_switch_type);
        ArtifactPaths {
            design: self.dirs.design.join(format!("{}{}", stem, DESIGN_EXTENSION)),
            compiled: self
                .dirs
                .compiled
                .join(format!("{}{}", stem, COMPILED_EXTENSION)),
        }
    }
}

fn section_suffix(selector: SectionSelector) -> String {
    match selector {
        SectionSelector::Whole | SectionSelector::Global => String::new(),
        SectionSelector::Index(index) => format!("_section_{}", index),
        SectionSelector::Exploded => "_exploded".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use keycase_params::{ParamValue, ParameterSet};

    use super::*;

    fn namer() -> ArtifactNamer {
        ArtifactNamer::new("planck", OutputDirs::new("out", "planck"))
    }

    fn config() -> ResolvedConfig {
        let mut overrides = ParameterSet::new();
        overrides.insert("switch_type".to_string(), ParamValue::from("alps"));
        ResolvedConfig::resolve(&overrides).unwrap()
    }

    #[test]
    fn test_whole_object_name() {
        let target = BuildTarget::new(SectionSelector::Whole, Part::WHOLE);
        let paths = namer().name_for(&target, Part::Top, &config(), false);

        assert_eq!(paths.design, PathBuf::from("out/planck/scad/planck_top.scad"));
        assert_eq!(paths.compiled, PathBuf::from("out/planck/stl/planck_top.stl"));
    }

    #[test]
    fn test_section_name_with_switch_type() {
        let target = BuildTarget::new(SectionSelector::Index(2), Part::SECTION);
        let stem = namer().file_stem(&target, Part::Plate, &config(), true);

        assert_eq!(stem, "planck_section_2_plate_alps_cherry");
    }

    #[test]
    fn test_exploded_name() {
        let target = BuildTarget::new(SectionSelector::Exploded, [Part::Top]);
        let stem = namer().file_stem(&target, Part::Top, &config(), false);

        assert_eq!(stem, "planck_exploded_top");
    }

    #[test]
    fn test_global_never_gets_switch_suffix() {
        let target = BuildTarget::new(SectionSelector::Global, Part::CABLE_HOLDER);
        let stem = namer().file_stem(&target, Part::CableHolderClamp, &config(), true);

        assert_eq!(stem, "planck_cable_holder_clamp");
    }

    #[test]
    fn test_names_are_deterministic() {
        let target = BuildTarget::new(SectionSelector::Index(0), Part::SECTION);
        let config = config();
        let namer = namer();

        let first = namer.name_for(&target, Part::Bottom, &config, true);
        let second = namer.name_for(&target, Part::Bottom, &config, true);

        assert_eq!(first, second);
    }
}
