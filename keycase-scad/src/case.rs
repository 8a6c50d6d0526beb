//! Case geometry derived from a layout and a resolved configuration.
//!
//! Coordinates are millimetres. The top case sits on `z = 0` and reaches
//! `case_height`; the bottom cover hangs below it. Layout rows grow towards
//! negative `y`, so the first row is placed at the far edge.

use keycase_build::{CaseDimensions, SectionCounts, View};
use keycase_layout::{KEY_UNIT, Key, Layout};
use keycase_params::{CaseParameters, Derived, ResolvedConfig, SwitchConfig};

use crate::ScadNode;

/// Extra length on cutting tools so faces never coincide.
const OVERCUT: f64 = 1.0;

/// Stabilizer housing cutout, width by height.
const STAB_CUTOUT: [f64; 2] = [6.75, 12.3];

/// Builds every view of the keyboard case.
#[derive(Debug, Clone)]
pub struct CaseGeometry {
    params: CaseParameters,
    derived: Derived,
    switch: SwitchConfig,
    keys: Vec<Key>,
    rows: usize,
    width: f64,
    height: f64,
}

impl CaseGeometry {
    pub fn new(layout: &Layout, config: &ResolvedConfig) -> Self {
        let params = config.params().clone();
        let width = layout.width_units() * KEY_UNIT + params.left_margin + params.right_margin;
        let height = layout.height_units() * KEY_UNIT + params.top_margin + params.bottom_margin;

        Self {
            derived: *config.derived(),
            switch: config.switch_config(),
            keys: layout.keys.clone(),
            rows: layout.height_units().ceil() as usize,
            width,
            height,
            params,
        }
    }

    pub fn dimensions(&self) -> CaseDimensions {
        CaseDimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Sections needed to fit the case in the build volume.
    ///
    /// The bottom cover sits inside the walls, so it may need one fewer.
    /// A layout without keys has no sections.
    pub fn section_counts(&self) -> SectionCounts {
        if self.keys.is_empty() {
            return SectionCounts::default();
        }
        let build = self.params.x_build_size;
        let inner = (self.width - 2.0 * self.params.case_wall_thickness).max(0.0);
        SectionCounts {
            top: (self.width / build).ceil() as usize,
            bottom: (inner / build).ceil() as usize,
        }
    }

    /// The unclipped model for a view.
    pub fn view(&self, view: View) -> ScadNode {
        match view {
            View::Top => self.top(),
            View::Bottom => self.bottom(),
            View::Plate => self.plate(),
            View::All => self.all(),
        }
    }

    /// Clip a model to one section along `x`.
    pub fn clip(&self, model: ScadNode, view: View, index: usize) -> ScadNode {
        let build = self.params.x_build_size;
        let start = match view {
            View::Bottom => self.params.case_wall_thickness,
            _ => 0.0,
        };
        let depth = self.params.case_height + self.params.bottom_cover_thickness;
        let region = ScadNode::cube([build, self.height + 2.0 * OVERCUT, depth + 2.0 * OVERCUT])
            .translate([
                start + build * index as f64,
                -OVERCUT,
                -self.params.bottom_cover_thickness - OVERCUT,
            ]);
        ScadNode::intersection(vec![model, region])
    }

    /// 2D case outline shrunk by `inset` on every side.
    fn outline(&self, inset: f64) -> ScadNode {
        let p = &self.params;
        if p.custom_shape {
            if let Some(points) = &p.custom_shape_points {
                let points = points
                    .iter()
                    .filter(|point| point.len() >= 2)
                    .map(|point| [point[0], point[1]])
                    .collect();
                return ScadNode::polygon(points).offset(-inset);
            }
            if let Some(path) = &p.custom_shape_path {
                return ScadNode::import(path.clone()).offset(-inset);
            }
            log::warn!("custom_shape is set without points or a path, using the rectangle");
        }

        let radius = (p.plate_corner_radius - inset).max(0.0);
        let size = [
            (self.width - 2.0 * inset - 2.0 * radius).max(0.0),
            (self.height - 2.0 * inset - 2.0 * radius).max(0.0),
        ];
        let rect = ScadNode::square(size).translate([inset + radius, inset + radius, 0.0]);
        if radius > 0.0 { rect.offset(radius) } else { rect }
    }

    /// Key center in case coordinates.
    fn key_center(&self, key: &Key) -> [f64; 2] {
        [
            self.params.left_margin + (key.x + key.width / 2.0) * KEY_UNIT,
            self.height - self.params.top_margin - (key.y + key.height / 2.0) * KEY_UNIT,
        ]
    }

    fn stabilizer_spacing(width: f64) -> Option<f64> {
        match width {
            w if w >= 7.0 => Some(57.15),
            w if w >= 6.25 => Some(50.0),
            w if w >= 6.0 => Some(47.625),
            w if w >= 3.0 => Some(19.05),
            w if w >= 2.0 => Some(11.938),
            _ => None,
        }
    }

    fn cutouts(&self) -> Vec<ScadNode> {
        let mut cutouts = Vec::new();
        let switch = [self.switch.cutout_width, self.switch.cutout_height];

        for key in &self.keys {
            let [x, y] = self.key_center(key);
            cutouts.push(ScadNode::centered_square(switch).translate([x, y, 0.0]));

            if self.params.simple_test || self.switch.stabilizer_type == "none" {
                continue;
            }
            let long_side = key.width.max(key.height);
            if let Some(spacing) = Self::stabilizer_spacing(long_side) {
                let (dx, dy) = if key.height > key.width {
                    (0.0, spacing)
                } else {
                    (spacing, 0.0)
                };
                let stab = if key.height > key.width {
                    [STAB_CUTOUT[1], STAB_CUTOUT[0]]
                } else {
                    STAB_CUTOUT
                };
                for sign in [-1.0, 1.0] {
                    cutouts.push(
                        ScadNode::centered_square(stab).translate([x + sign * dx, y + sign * dy, 0.0]),
                    );
                }
            }
        }
        cutouts
    }

    fn support_bars(&self) -> Vec<ScadNode> {
        let p = &self.params;
        if !p.plate_supports || p.simple_test {
            return Vec::new();
        }
        let length = self.width - 2.0 * p.case_wall_thickness;
        (1..self.rows)
            .map(|row| {
                let y = self.height - p.top_margin - row as f64 * KEY_UNIT;
                ScadNode::cube([length, p.support_bar_width, p.support_bar_height]).translate([
                    p.case_wall_thickness,
                    y - p.support_bar_width / 2.0,
                    -p.support_bar_height,
                ])
            })
            .collect()
    }

    /// Switch plate, positioned at the top of the case.
    fn plate(&self) -> ScadNode {
        let p = &self.params;
        let cutouts = self.cutouts();
        let mut plate = vec![
            self.outline(p.case_wall_thickness).extrude(p.plate_thickness),
        ];
        if !cutouts.is_empty() {
            plate.push(
                ScadNode::union(cutouts)
                    .extrude(p.plate_thickness + 2.0 * OVERCUT)
                    .translate([0.0, 0.0, -OVERCUT]),
            );
        }
        let mut parts = vec![ScadNode::difference(plate)];
        parts.extend(self.support_bars());
        ScadNode::union(parts).translate([0.0, 0.0, p.case_height - p.plate_thickness])
    }

    /// Screw positions split between the near and far edges.
    pub fn screw_positions(&self) -> Vec<[f64; 2]> {
        let p = &self.params;
        let count = p.screw_count as usize;
        let near = count.div_ceil(2);
        let far = count / 2;
        let mut positions = Vec::with_capacity(count);
        for (n, y) in [(near, p.screw_edge_inset), (far, self.height - p.screw_edge_inset)] {
            let span = self.width - 2.0 * p.screw_edge_inset;
            for i in 0..n {
                let x = if n == 1 {
                    self.width / 2.0
                } else {
                    p.screw_edge_inset + span * i as f64 / (n - 1) as f64
                };
                positions.push([x, y]);
            }
        }
        positions
    }

    fn screw_holes(&self, height: f64, z: f64) -> Vec<ScadNode> {
        let radius = self.params.screw_diameter / 2.0;
        self.screw_positions()
            .into_iter()
            .map(|[x, y]| {
                ScadNode::cylinder(height + 2.0 * OVERCUT, radius).translate([x, y, z - OVERCUT])
            })
            .collect()
    }

    fn screw_bodies(&self) -> Vec<ScadNode> {
        let p = &self.params;
        let height = p.case_height - p.plate_thickness - p.support_bar_height;
        if height <= 0.0 {
            return Vec::new();
        }
        self.screw_positions()
            .into_iter()
            .map(|[x, y]| {
                ScadNode::cylinder(height, self.derived.screw_hole_body_radius)
                    .translate([x, y, 0.0])
            })
            .collect()
    }

    fn cable_cutout(&self) -> Option<ScadNode> {
        let p = &self.params;
        if !p.cable_hole {
            return None;
        }
        let z = p.cable_hole_down_offset;
        let height = p.hole_height + p.cable_hole_up_offset;
        Some(
            ScadNode::cube([p.hole_width, p.case_wall_thickness + 2.0 * OVERCUT, height]).translate(
                [
                    (self.width - p.hole_width) / 2.0,
                    self.height - p.case_wall_thickness - OVERCUT,
                    z,
                ],
            ),
        )
    }

    /// Case walls with plate, screw bodies and the cable opening.
    fn top(&self) -> ScadNode {
        let p = &self.params;
        let walls = ScadNode::difference(vec![
            self.outline(0.0).extrude(p.case_height),
            self.outline(p.case_wall_thickness)
                .extrude(p.case_height + 2.0 * OVERCUT)
                .translate([0.0, 0.0, -OVERCUT]),
        ]);

        let mut body = vec![walls, self.plate()];
        body.extend(self.screw_bodies());

        let mut cuts = vec![ScadNode::union(body)];
        cuts.extend(self.screw_holes(p.case_height, 0.0));
        cuts.extend(self.cable_cutout());
        ScadNode::difference(cuts)
    }

    /// Bottom cover that fits inside the walls.
    fn bottom(&self) -> ScadNode {
        let p = &self.params;
        let mut cuts = vec![
            self.outline(p.case_wall_thickness)
                .extrude(p.bottom_cover_thickness)
                .translate([0.0, 0.0, -p.bottom_cover_thickness]),
        ];
        cuts.extend(self.screw_holes(p.bottom_cover_thickness, -p.bottom_cover_thickness));
        ScadNode::difference(cuts)
    }

    fn all(&self) -> ScadNode {
        let assembled = ScadNode::union(vec![self.top(), self.bottom()]);
        if self.params.tilt != 0.0 {
            assembled.rotate([self.params.tilt, 0.0, 0.0])
        } else {
            assembled
        }
    }
}

#[cfg(test)]
mod tests {
    use keycase_params::{ParamValue, ParameterSet};

    use super::*;

    fn config(pairs: &[(&str, ParamValue)]) -> ResolvedConfig {
        let overrides: ParameterSet = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        ResolvedConfig::resolve(&overrides).unwrap()
    }

    fn row(keys: usize) -> Layout {
        let labels: Vec<String> = (0..keys).map(|i| format!("\"K{}\"", i)).collect();
        Layout::parse(&format!("[[{}]]", labels.join(","))).unwrap()
    }

    #[test]
    fn test_dimensions_include_margins() {
        let case = CaseGeometry::new(&row(2), &config(&[]));
        let dims = case.dimensions();

        assert!((dims.width - (2.0 * KEY_UNIT + 16.0)).abs() < 1e-9);
        assert!((dims.height - (KEY_UNIT + 16.0)).abs() < 1e-9);
    }

    #[test]
    fn test_section_counts_follow_build_size() {
        // 12 keys: 228.6 + 16 = 244.6 wide, inner 240.6.
        let case = CaseGeometry::new(&row(12), &config(&[]));
        assert_eq!(case.section_counts(), SectionCounts { top: 2, bottom: 2 });

        let case = CaseGeometry::new(
            &row(12),
            &config(&[("x_build_size", ParamValue::from(242.0))]),
        );
        assert_eq!(case.section_counts(), SectionCounts { top: 2, bottom: 1 });
    }

    #[test]
    fn test_empty_layout_has_no_sections() {
        let case = CaseGeometry::new(&Layout::default(), &config(&[]));
        assert_eq!(case.section_counts(), SectionCounts::default());
    }

    #[test]
    fn test_screw_positions_split_between_edges() {
        let case = CaseGeometry::new(&row(4), &config(&[("screw_count", ParamValue::from(3_i64))]));
        let positions = case.screw_positions();

        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0][1], 6.5);
        assert_eq!(positions[2][0], case.dimensions().width / 2.0);
    }

    #[test]
    fn test_custom_shape_uses_polygon() {
        let points = ParamValue::List(vec![
            ParamValue::List(vec![0.0.into(), 0.0.into()]),
            ParamValue::List(vec![50.0.into(), 0.0.into()]),
            ParamValue::List(vec![50.0.into(), 30.0.into()]),
        ]);
        let case = CaseGeometry::new(
            &row(1),
            &config(&[
                ("custom_shape", ParamValue::from(true)),
                ("custom_shape_points", points),
            ]),
        );

        let text = case.view(View::Bottom).render();
        assert!(text.contains("polygon(points = [[0, 0], [50, 0], [50, 30]]);"));
    }

    #[test]
    fn test_cable_hole_cut_only_when_enabled() {
        let plain = CaseGeometry::new(&row(2), &config(&[]));
        let cable = CaseGeometry::new(&row(2), &config(&[("cable_hole", ParamValue::from(true))]));

        assert_eq!(
            plain.view(View::Top).render().matches("cube(").count() + 1,
            cable.view(View::Top).render().matches("cube(").count()
        );
    }

    #[test]
    fn test_wide_keys_get_stabilizers() {
        let layout = Layout::parse(r#"[[{w:2},"Shift"]]"#).unwrap();
        let case = CaseGeometry::new(&layout, &config(&[]));

        let text = case.view(View::Plate).render();
        assert_eq!(text.matches("square([6.75, 12.3], center = true);").count(), 2);
    }
}
