//! Test doubles for the geometry and writer collaborators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::RefCell,
    path::{Path, PathBuf},
};

use eyre::Result;
use keycase_core::Part;

use crate::{DesignWriter, GeometryBackend, HeaderDirective, Offset, SectionCounts, View};

/// Backend whose models are strings describing how they were built.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    counts: SectionCounts,
    active: Option<usize>,
}

impl RecordingBackend {
    pub fn new(top: usize, bottom: usize) -> Self {
        Self {
            counts: SectionCounts { top, bottom },
            active: None,
        }
    }

    pub fn counts(&self) -> SectionCounts {
        self.counts
    }
}

impl GeometryBackend for RecordingBackend {
    type Model = String;

    fn section_counts(&self) -> SectionCounts {
        self.counts
    }

    fn set_active_section(&mut self, section: Option<usize>) {
        self.active = section;
    }

    fn assembly(&mut self, view: View) -> Option<String> {
        let name = match view {
            View::Top => "top",
            View::Bottom => "bottom",
            View::All => "all",
            View::Plate => "plate",
        };
        match self.active {
            Some(index) if view == View::Bottom && index >= self.counts.bottom => None,
            Some(index) => Some(format!("{}@{}", name, index)),
            None => Some(format!("{}@whole", name)),
        }
    }

    fn union_staggered(&self, parts: Vec<(Offset, String)>) -> Option<String> {
        let items: Vec<String> = parts
            .iter()
            .map(|(o, m)| format!("{}+[{},{},{}]", m, o[0], o[1], o[2]))
            .collect();
        Some(format!("union({})", items.join(", ")))
    }

    fn accessory(&mut self, part: Part) -> Option<String> {
        Some(part.as_str().to_string())
    }
}

/// Writer that records what would have been written and writes the model
/// text to disk.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub written: RefCell<Vec<(PathBuf, String)>>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths written so far, in order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.written.borrow().iter().map(|(p, _)| p.clone()).collect()
    }
}

impl DesignWriter<String> for RecordingWriter {
    fn write(&self, model: &String, path: &Path, header: &HeaderDirective) -> Result<()> {
        let content = format!("{}\n\n{}\n", header, model);
        std::fs::write(path, &content)?;
        self.written.borrow_mut().push((path.to_path_buf(), content));
        Ok(())
    }
}
