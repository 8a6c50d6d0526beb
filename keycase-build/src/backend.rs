//! Collaborator traits for geometry and design-file output.

use std::{fmt, path::Path};

use eyre::Result;
use keycase_core::Part;

/// Number of sections the geometry was split into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    pub top: usize,
    pub bottom: usize,
}

/// Outer case size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseDimensions {
    pub width: f64,
    pub height: f64,
}

/// An assembly view a backend can produce for the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Top,
    Bottom,
    All,
    Plate,
}

impl View {
    /// The view that produces a section part, if any.
    pub fn for_part(part: Part) -> Option<Self> {
        match part {
            Part::Top => Some(View::Top),
            Part::Bottom => Some(View::Bottom),
            Part::All => Some(View::All),
            Part::Plate => Some(View::Plate),
            _ => None,
        }
    }
}

/// Translation applied to one section inside an exploded composite.
pub type Offset = [f64; 3];

/// Something that can build case geometry.
///
/// The model type is opaque to the build crate; it is only handed back to a
/// [`DesignWriter`].
pub trait GeometryBackend {
    type Model;

    /// Section counts for the top and bottom halves.
    fn section_counts(&self) -> SectionCounts;

    /// Select the section later assemblies are clipped to. `None` selects
    /// the whole case.
    fn set_active_section(&mut self, section: Option<usize>);

    /// Build a view of the active section. `None` when the view is empty.
    fn assembly(&mut self, view: View) -> Option<Self::Model>;

    /// Translate each model by its offset and union the results.
    fn union_staggered(&self, parts: Vec<(Offset, Self::Model)>) -> Option<Self::Model>;

    /// Build a global accessory part.
    fn accessory(&mut self, part: Part) -> Option<Self::Model>;

    /// Outer case size, when the backend knows it.
    fn case_dimensions(&self) -> Option<CaseDimensions> {
        None
    }
}

/// Renderer tuning written at the top of every design file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDirective {
    /// Number of fragments used to approximate curves.
    pub fragments: u32,
}

impl fmt::Display for HeaderDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$fn = {};", self.fragments)
    }
}

/// Writes a model to a design file.
pub trait DesignWriter<M> {
    fn write(&self, model: &M, path: &Path, header: &HeaderDirective) -> Result<()>;
}
