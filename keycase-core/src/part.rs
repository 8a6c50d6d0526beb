//! Part names produced for each build target.

use std::fmt;

/// A named sub-assembly of the case.
///
/// The first four variants belong to a section (or to the whole object);
/// the cable holder variants are global accessories that do not depend on
/// sections or switch type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    /// Case frame with the plate attached.
    Top,
    /// Bottom cover.
    Bottom,
    /// Top and bottom assembled together.
    All,
    /// Switch plate only.
    Plate,
    /// Cable strain relief body.
    CableHolderMain,
    /// Cable strain relief clamp.
    CableHolderClamp,
    /// Cable strain relief body and clamp together.
    CableHolderAll,
}

impl Part {
    /// Parts emitted for a single section, in emission order.
    pub const SECTION: [Part; 4] = [Part::Top, Part::All, Part::Plate, Part::Bottom];

    /// Parts emitted when the case is not split into sections.
    pub const WHOLE: [Part; 4] = [Part::Top, Part::Bottom, Part::All, Part::Plate];

    /// Parts of the cable accessory.
    pub const CABLE_HOLDER: [Part; 3] = [
        Part::CableHolderMain,
        Part::CableHolderClamp,
        Part::CableHolderAll,
    ];

    /// Returns the part name used in file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Part::Top => "top",
            Part::Bottom => "bottom",
            Part::All => "all",
            Part::Plate => "plate",
            Part::CableHolderMain => "cable_holder_main",
            Part::CableHolderClamp => "cable_holder_clamp",
            Part::CableHolderAll => "cable_holder_all",
        }
    }

    /// Whether this part is a global accessory.
    pub fn is_global(&self) -> bool {
        matches!(
            self,
            Part::CableHolderMain | Part::CableHolderClamp | Part::CableHolderAll
        )
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
