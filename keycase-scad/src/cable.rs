//! Cable strain relief accessory.

use keycase_params::ResolvedConfig;

use crate::ScadNode;

/// Depth of the holder along the cable.
const HOLDER_DEPTH: f64 = 10.0;

/// A two-piece clamp that holds the cable at the case opening.
#[derive(Debug, Clone)]
pub struct CableHolder {
    hole_width: f64,
    hole_height: f64,
    wall: f64,
    side: f64,
    screw_radius: f64,
}

impl CableHolder {
    pub fn new(config: &ResolvedConfig) -> Self {
        let p = config.params();
        Self {
            hole_width: p.hole_width,
            hole_height: p.hole_height,
            wall: p.case_wall_thickness,
            side: config.derived().screw_hole_body_diameter,
            screw_radius: p.screw_diameter / 2.0,
        }
    }

    fn total_width(&self) -> f64 {
        self.hole_width + 2.0 * self.side
    }

    fn screw_holes(&self, height: f64) -> Vec<ScadNode> {
        [self.side / 2.0, self.total_width() - self.side / 2.0]
            .into_iter()
            .map(|x| {
                ScadNode::cylinder(height + 2.0, self.screw_radius).translate([
                    x,
                    HOLDER_DEPTH / 2.0,
                    -1.0,
                ])
            })
            .collect()
    }

    /// Bridge with a channel open at the bottom.
    pub fn main(&self) -> ScadNode {
        let height = self.hole_height + self.wall;
        let mut cuts = vec![
            ScadNode::cube([self.total_width(), HOLDER_DEPTH, height]),
            ScadNode::cube([self.hole_width, HOLDER_DEPTH + 2.0, self.hole_height + 1.0])
                .translate([self.side, -1.0, -1.0]),
        ];
        cuts.extend(self.screw_holes(height));
        ScadNode::difference(cuts)
    }

    /// Flat clamp that closes the channel.
    pub fn clamp(&self) -> ScadNode {
        let mut cuts = vec![ScadNode::cube([self.total_width(), HOLDER_DEPTH, self.wall])];
        cuts.extend(self.screw_holes(self.wall));
        ScadNode::difference(cuts)
    }

    /// Both pieces assembled.
    pub fn all(&self) -> ScadNode {
        ScadNode::union(vec![self.main(), self.clamp().translate([0.0, 0.0, -self.wall])])
    }
}
