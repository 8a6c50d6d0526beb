//! Indented SCAD text emission.

/// One level of indentation in emitted SCAD.
const INDENT: &str = "    ";

/// Intermediate form between a node tree and text.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A single statement line.
    Line(String),
    /// `header {`, indented body, `}`.
    Block { header: String, body: Vec<Fragment> },
}

impl Fragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<Fragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }
}

/// Types that render to SCAD fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<Fragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<Fragment> {
        (*self).to_fragments()
    }
}

/// Builds indented SCAD source.
///
/// ```
/// use keycase_scad::ScadBuilder;
///
/// let mut builder = ScadBuilder::default();
/// builder
///     .push_line("union() {")
///     .push_indent()
///     .push_line("cube([1, 1, 1]);")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "union() {\n    cube([1, 1, 1]);\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScadBuilder {
    indent_level: usize,
    buffer: String,
}

impl ScadBuilder {
    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Line(s) => {
                self.push_line(&s);
            }
            Fragment::Block { header, body } => {
                self.push_line(&format!("{} {{", header));
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                self.push_line("}");
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
