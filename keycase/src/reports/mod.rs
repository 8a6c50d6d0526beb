//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod build;
mod check;
mod output;
mod progress;

pub use build::{BuildReport, RenderSummary};
pub use check::CheckReport;
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Output, Report, TerminalOutput};
pub use progress::BuildProgress;
