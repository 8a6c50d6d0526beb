use keycase_build::{CaseDimensions, GeometryBackend, Offset, SectionCounts, View};
use keycase_core::Part;
use keycase_layout::Layout;
use keycase_params::ResolvedConfig;

use crate::{CableHolder, CaseGeometry, ScadNode};

/// Geometry backend producing OpenSCAD node trees for a layout.
#[derive(Debug, Clone)]
pub struct LayoutBackend {
    case: CaseGeometry,
    cable: CableHolder,
    counts: SectionCounts,
    active: Option<usize>,
}

impl LayoutBackend {
    pub fn new(layout: &Layout, config: &ResolvedConfig) -> Self {
        let case = CaseGeometry::new(layout, config);
        let counts = case.section_counts();
        log::debug!(
            "case is {:.3} x {:.3} mm, {} top and {} bottom section(s)",
            case.dimensions().width,
            case.dimensions().height,
            counts.top,
            counts.bottom
        );
        Self {
            case,
            cable: CableHolder::new(config),
            counts,
            active: None,
        }
    }
}

impl GeometryBackend for LayoutBackend {
    type Model = ScadNode;

    fn section_counts(&self) -> SectionCounts {
        self.counts
    }

    fn set_active_section(&mut self, section: Option<usize>) {
        self.active = section;
    }

    fn assembly(&mut self, view: View) -> Option<ScadNode> {
        match self.active {
            None => Some(self.case.view(view)),
            Some(index) if view == View::Bottom && index >= self.counts.bottom => None,
            Some(index) => Some(self.case.clip(self.case.view(view), view, index)),
        }
    }

    fn union_staggered(&self, parts: Vec<(Offset, ScadNode)>) -> Option<ScadNode> {
        let children = parts
            .into_iter()
            .map(|(offset, model)| model.translate(offset))
            .collect();
        Some(ScadNode::union(children))
    }

    fn accessory(&mut self, part: Part) -> Option<ScadNode> {
        match part {
            Part::CableHolderMain => Some(self.cable.main()),
            Part::CableHolderClamp => Some(self.cable.clamp()),
            Part::CableHolderAll => Some(self.cable.all()),
            _ => None,
        }
    }

    fn case_dimensions(&self) -> Option<CaseDimensions> {
        Some(self.case.dimensions())
    }
}
