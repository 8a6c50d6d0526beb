//! Build target values.

use std::fmt;

use crate::Part;

/// Which slice of the case a build target covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionSelector {
    /// The whole case, not split into sections.
    Whole,
    /// One section by index.
    Index(usize),
    /// Every section staggered and unioned into a single artifact.
    Exploded,
    /// Accessories unrelated to any section.
    Global,
}

impl SectionSelector {
    /// Whether names for this selector may carry switch decoration.
    pub fn allows_switch_suffix(&self) -> bool {
        !matches!(self, SectionSelector::Global)
    }
}

impl fmt::Display for SectionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionSelector::Whole => write!(f, "whole"),
            SectionSelector::Index(i) => write!(f, "section {}", i),
            SectionSelector::Exploded => write!(f, "exploded"),
            SectionSelector::Global => write!(f, "global"),
        }
    }
}

/// One planned artifact group: a section selector and the parts to emit for it.
///
/// Targets are plain values. They are produced by the planner and consumed
/// by naming and rendering, never mutated in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    pub selector: SectionSelector,
    pub parts: Vec<Part>,
}

impl BuildTarget {
    pub fn new(selector: SectionSelector, parts: impl Into<Vec<Part>>) -> Self {
        Self {
            selector,
            parts: parts.into(),
        }
    }

    /// Whether this target contains the given part.
    pub fn contains(&self, part: Part) -> bool {
        self.parts.contains(&part)
    }

    /// Whether this is the global accessory target.
    pub fn is_global(&self) -> bool {
        self.selector == SectionSelector::Global
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_selector_disallows_switch_suffix() {
        assert!(!SectionSelector::Global.allows_switch_suffix());
        assert!(SectionSelector::Index(0).allows_switch_suffix());
        assert!(SectionSelector::Exploded.allows_switch_suffix());
    }

    #[test]
    fn test_target_contains() {
        let target = BuildTarget::new(SectionSelector::Index(2), Part::SECTION);
        assert!(target.contains(Part::Bottom));
        assert!(!target.contains(Part::CableHolderAll));
        assert!(!target.is_global());
    }
}
