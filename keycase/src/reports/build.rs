//! Build command report data structures.

use std::path::PathBuf;

use keycase_build::{BuildMode, CaseDimensions, RenderStatus, SectionCounts};

use super::output::{Output, Report};

/// Report data from a build run.
#[derive(Debug)]
pub struct BuildReport {
    /// Layout name used as the file name prefix.
    pub layout_name: String,

    /// Resolved parameter table.
    pub parameters: String,

    /// Warnings raised while resolving parameters.
    pub warnings: Vec<String>,

    pub mode: BuildMode,

    /// Outer case size, when known.
    pub dimensions: Option<CaseDimensions>,

    pub counts: SectionCounts,

    /// Directory holding the design files.
    pub design_dir: PathBuf,

    /// Design files written.
    pub written: Vec<PathBuf>,

    /// Parts that produced no geometry.
    pub skipped: usize,

    /// Final status of each render, in launch order.
    pub renders: Vec<RenderSummary>,
}

/// Outcome of one render.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub compiled: PathBuf,
    pub status: RenderStatus,
}

impl BuildReport {
    pub fn failed_renders(&self) -> impl Iterator<Item = &RenderSummary> {
        self.renders
            .iter()
            .filter(|r| matches!(r.status, RenderStatus::Failed(_)))
    }
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.key_value("Layout", &self.layout_name);
        out.newline();
        out.section("Parameters");
        out.preformatted(&self.parameters);
        out.newline();

        if let Some(dims) = &self.dimensions {
            out.key_value("Case width", &format!("{:.3} mm", dims.width));
            out.key_value("Case height", &format!("{:.3} mm", dims.height));
        }
        out.key_value("Sections in top", &self.counts.top.to_string());
        out.key_value("Sections in bottom", &self.counts.bottom.to_string());
        out.key_value("Mode", &self.mode.to_string());
        out.newline();

        out.key_value(
            "Generated",
            &format!(
                "{} design file{} in {}",
                self.written.len(),
                if self.written.len() == 1 { "" } else { "s" },
                self.design_dir.display()
            ),
        );
        if self.skipped > 0 {
            out.key_value_indented("empty parts skipped", &self.skipped.to_string());
        }

        if !self.renders.is_empty() {
            let failed: Vec<_> = self.failed_renders().collect();
            out.key_value(
                "Rendered",
                &format!("{} of {}", self.renders.len() - failed.len(), self.renders.len()),
            );
            for render in failed {
                out.error(&format!("{}: {}", render.compiled.display(), render.status));
            }
        }
    }
}
