use std::path::Path;

use eyre::Result;
use keycase_build::{DesignWriter, HeaderDirective};
use keycase_core::{File, FileRules};

use crate::ScadNode;

/// Writes node trees as `.scad` files with the renderer header on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScadWriter;

impl DesignWriter<ScadNode> for ScadWriter {
    fn write(&self, model: &ScadNode, path: &Path, header: &HeaderDirective) -> Result<()> {
        File::new(path, model.render())
            .with_rules(FileRules {
                header: Some(header.to_string()),
            })
            .write()
    }
}
