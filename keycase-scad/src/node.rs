//! A small OpenSCAD node tree.

use std::fmt;

use crate::builder::{Fragment, Renderable, ScadBuilder};

/// One OpenSCAD primitive or operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScadNode {
    Cube { size: [f64; 3], center: bool },
    Cylinder { height: f64, radius: f64, center: bool },
    Square { size: [f64; 2], center: bool },
    Circle { radius: f64 },
    Polygon { points: Vec<[f64; 2]> },
    Import { path: String },
    Translate([f64; 3], Vec<ScadNode>),
    Rotate([f64; 3], Vec<ScadNode>),
    LinearExtrude(f64, Vec<ScadNode>),
    Offset(f64, Vec<ScadNode>),
    Union(Vec<ScadNode>),
    Difference(Vec<ScadNode>),
    Intersection(Vec<ScadNode>),
    Hull(Vec<ScadNode>),
}

impl ScadNode {
    pub fn cube(size: [f64; 3]) -> Self {
        Self::Cube {
            size,
            center: false,
        }
    }

    pub fn cylinder(height: f64, radius: f64) -> Self {
        Self::Cylinder {
            height,
            radius,
            center: false,
        }
    }

    pub fn square(size: [f64; 2]) -> Self {
        Self::Square {
            size,
            center: false,
        }
    }

    pub fn centered_square(size: [f64; 2]) -> Self {
        Self::Square { size, center: true }
    }

    pub fn circle(radius: f64) -> Self {
        Self::Circle { radius }
    }

    pub fn polygon(points: Vec<[f64; 2]>) -> Self {
        Self::Polygon { points }
    }

    pub fn import(path: impl Into<String>) -> Self {
        Self::Import { path: path.into() }
    }

    pub fn union(children: Vec<ScadNode>) -> Self {
        Self::Union(children)
    }

    pub fn difference(children: Vec<ScadNode>) -> Self {
        Self::Difference(children)
    }

    pub fn intersection(children: Vec<ScadNode>) -> Self {
        Self::Intersection(children)
    }

    pub fn hull(children: Vec<ScadNode>) -> Self {
        Self::Hull(children)
    }

    /// Wrap this node in a translation.
    pub fn translate(self, offset: [f64; 3]) -> Self {
        Self::Translate(offset, vec![self])
    }

    pub fn rotate(self, angles: [f64; 3]) -> Self {
        Self::Rotate(angles, vec![self])
    }

    pub fn extrude(self, height: f64) -> Self {
        Self::LinearExtrude(height, vec![self])
    }

    /// Round a 2D shape outward by `radius`.
    pub fn offset(self, radius: f64) -> Self {
        Self::Offset(radius, vec![self])
    }

    /// Render to SCAD source text.
    pub fn render(&self) -> String {
        let mut builder = ScadBuilder::default();
        builder.emit(self);
        builder.build()
    }

    fn operation(&self) -> Option<(String, &[ScadNode])> {
        let op = match self {
            Self::Translate(v, children) => (format!("translate({})", vec3(v)), children),
            Self::Rotate(v, children) => (format!("rotate({})", vec3(v)), children),
            Self::LinearExtrude(h, children) => {
                (format!("linear_extrude(height = {})", num(*h)), children)
            }
            Self::Offset(r, children) => (format!("offset(r = {})", num(*r)), children),
            Self::Union(children) => ("union()".to_string(), children),
            Self::Difference(children) => ("difference()".to_string(), children),
            Self::Intersection(children) => ("intersection()".to_string(), children),
            Self::Hull(children) => ("hull()".to_string(), children),
            _ => return None,
        };
        Some((op.0, op.1.as_slice()))
    }

    fn primitive(&self) -> String {
        match self {
            Self::Cube { size, center } => format!("cube({}{});", vec3(size), centered(*center)),
            Self::Cylinder {
                height,
                radius,
                center,
            } => format!(
                "cylinder(h = {}, r = {}{});",
                num(*height),
                num(*radius),
                centered(*center)
            ),
            Self::Square { size, center } => format!(
                "square([{}, {}]{});",
                num(size[0]),
                num(size[1]),
                centered(*center)
            ),
            Self::Circle { radius } => format!("circle(r = {});", num(*radius)),
            Self::Polygon { points } => {
                let points: Vec<String> = points
                    .iter()
                    .map(|p| format!("[{}, {}]", num(p[0]), num(p[1])))
                    .collect();
                format!("polygon(points = [{}]);", points.join(", "))
            }
            Self::Import { path } => format!("import({:?});", path),
            _ => String::new(),
        }
    }
}

impl Renderable for ScadNode {
    fn to_fragments(&self) -> Vec<Fragment> {
        match self.operation() {
            Some((header, children)) if children.is_empty() => {
                vec![Fragment::line(format!("{};", header))]
            }
            Some((header, children)) => {
                let body = children.iter().flat_map(|c| c.to_fragments()).collect();
                vec![Fragment::block(header, body)]
            }
            None => vec![Fragment::line(self.primitive())],
        }
    }
}

impl fmt::Display for ScadNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Format a number with at most six decimals and no trailing zeros.
pub fn num(value: f64) -> String {
    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn vec3(v: &[f64; 3]) -> String {
    format!("[{}, {}, {}]", num(v[0]), num(v[1]), num(v[2]))
}

fn centered(center: bool) -> &'static str {
    if center { ", center = true" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(1.511), "1.511");
        assert_eq!(num(0.1 + 0.2), "0.3");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(-2.5), "-2.5");
    }

    #[test]
    fn test_primitives() {
        assert_eq!(ScadNode::cube([1.0, 2.0, 3.0]).render(), "cube([1, 2, 3]);\n");
        assert_eq!(
            ScadNode::centered_square([14.0, 14.0]).render(),
            "square([14, 14], center = true);\n"
        );
        assert_eq!(
            ScadNode::cylinder(4.0, 1.5).render(),
            "cylinder(h = 4, r = 1.5);\n"
        );
        assert_eq!(
            ScadNode::import("shape.dxf").render(),
            "import(\"shape.dxf\");\n"
        );
    }

    #[test]
    fn test_empty_operation_is_a_statement() {
        assert_eq!(ScadNode::union(vec![]).render(), "union();\n");
    }

    #[test]
    fn test_nested_operations() {
        let node = ScadNode::difference(vec![
            ScadNode::square([10.0, 5.0]).extrude(2.0),
            ScadNode::cube([1.0, 1.0, 4.0]).translate([2.0, 2.0, -1.0]),
        ]);

        insta::assert_snapshot!(node.render(), @r"
        difference() {
            linear_extrude(height = 2) {
                square([10, 5]);
            }
            translate([2, 2, -1]) {
                cube([1, 1, 4]);
            }
        }
        ");
    }
}
