//! Producing the model for one part of one target.

use keycase_core::{BuildTarget, Part, SectionSelector};

use crate::{GeometryBackend, Offset, SectionCounts, View};

/// Per-section translation used by exploded composites.
pub const EXPLODE_STAGGER: Offset = [10.0, 0.0, 5.0];

/// Offset of section `index` inside an exploded composite.
pub fn exploded_offset(index: usize) -> Offset {
    let i = index as f64;
    [
        EXPLODE_STAGGER[0] * i,
        EXPLODE_STAGGER[1] * i,
        EXPLODE_STAGGER[2] * i,
    ]
}

/// Ask the backend for the model of `part` in `target`.
///
/// Returns `None` when the backend has nothing for that part, for example a
/// bottom for a section without a bottom half.
pub fn assemble<B: GeometryBackend>(
    backend: &mut B,
    target: &BuildTarget,
    part: Part,
    counts: SectionCounts,
) -> Option<B::Model> {
    match target.selector {
        SectionSelector::Global => backend.accessory(part),
        SectionSelector::Whole => {
            backend.set_active_section(None);
            backend.assembly(View::for_part(part)?)
        }
        SectionSelector::Index(index) => {
            backend.set_active_section(Some(index));
            backend.assembly(View::for_part(part)?)
        }
        SectionSelector::Exploded => {
            let view = View::for_part(part)?;
            let mut staged = Vec::new();
            for index in 0..counts.top {
                if part == Part::Bottom && index >= counts.bottom {
                    continue;
                }
                backend.set_active_section(Some(index));
                if let Some(model) = backend.assembly(view) {
                    staged.push((exploded_offset(index), model));
                }
            }
            backend.set_active_section(None);
            if staged.is_empty() {
                None
            } else {
                backend.union_staggered(staged)
            }
        }
    }
}
