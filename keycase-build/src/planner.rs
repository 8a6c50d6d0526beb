//! Build mode selection and target planning.

use std::fmt;

use keycase_core::{BuildTarget, Part, SectionSelector};

use crate::{BuildError, SectionCounts};

/// How the case is split into artifacts.
///
/// When several selectors are requested at once the first matching row of
/// this table wins:
///
/// | precedence | flag              | mode            |
/// |------------|-------------------|-----------------|
/// | 1          | `--all-sections`  | `AllSections`   |
/// | 2          | `--exploded`      | `Exploded`      |
/// | 3          | `--section N`     | `SingleSection` |
/// | 4          | (none)            | `WholeObject`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    AllSections,
    Exploded,
    SingleSection(usize),
    WholeObject,
}

impl BuildMode {
    /// Pick the mode from the CLI selectors.
    pub fn select(all_sections: bool, exploded: bool, section: Option<usize>) -> Self {
        match (all_sections, exploded, section) {
            (true, _, _) => BuildMode::AllSections,
            (false, true, _) => BuildMode::Exploded,
            (false, false, Some(index)) => BuildMode::SingleSection(index),
            (false, false, None) => BuildMode::WholeObject,
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::AllSections => write!(f, "all sections"),
            BuildMode::Exploded => write!(f, "exploded"),
            BuildMode::SingleSection(index) => write!(f, "section {}", index),
            BuildMode::WholeObject => write!(f, "whole object"),
        }
    }
}

/// Parts for one section, with the bottom only where a bottom section exists.
fn section_parts(index: usize, counts: SectionCounts) -> Vec<Part> {
    Part::SECTION
        .into_iter()
        .filter(|part| *part != Part::Bottom || index < counts.bottom)
        .collect()
}

/// Enumerate the targets for a mode.
///
/// An empty case (no top sections) yields no section targets; that is not an
/// error. The exploded composite is always a single target, and parts with no
/// section to draw from are skipped when it is assembled. The cable accessory
/// target is appended regardless of mode.
pub fn plan(
    mode: BuildMode,
    counts: SectionCounts,
    cable_holder: bool,
) -> Result<Vec<BuildTarget>, BuildError> {
    let mut targets = Vec::new();

    match mode {
        BuildMode::AllSections => {
            for index in 0..counts.top {
                targets.push(BuildTarget::new(
                    SectionSelector::Index(index),
                    section_parts(index, counts),
                ));
            }
        }
        BuildMode::Exploded => {
            targets.push(BuildTarget::new(
                SectionSelector::Exploded,
                [Part::Top, Part::Plate, Part::Bottom],
            ));
        }
        BuildMode::SingleSection(index) => {
            if index >= counts.top {
                return Err(BuildError::InvalidSection {
                    index,
                    count: counts.top,
                });
            }
            targets.push(BuildTarget::new(
                SectionSelector::Index(index),
                section_parts(index, counts),
            ));
        }
        BuildMode::WholeObject => {
            if counts.top > 0 {
                targets.push(BuildTarget::new(SectionSelector::Whole, Part::WHOLE));
            }
        }
    }

    if cable_holder {
        targets.push(BuildTarget::new(SectionSelector::Global, Part::CABLE_HOLDER));
    }

    log::debug!("planned {} target(s) for {}", targets.len(), mode);
    Ok(targets)
}
