//! Output directory layout.
//!
//! Every run writes into `<output>/<layout name>/`, with design files under
//! `scad/` and compiled artifacts under `stl/`.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Design file directory name.
pub const DESIGN_DIR: &str = "scad";

/// Compiled artifact directory name.
pub const COMPILED_DIR: &str = "stl";

/// Design file extension, with dot.
pub const DESIGN_EXTENSION: &str = ".scad";

/// Compiled artifact extension, with dot.
pub const COMPILED_EXTENSION: &str = ".stl";

/// The pair of directories a run writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirs {
    pub base: PathBuf,
    pub design: PathBuf,
    pub compiled: PathBuf,
}

impl OutputDirs {
    /// Compute the directories for a layout without touching the filesystem.
    pub fn new(output_folder: impl AsRef<Path>, layout_name: &str) -> Self {
        let base = output_folder.as_ref().join(layout_name);
        Self {
            design: base.join(DESIGN_DIR),
            compiled: base.join(COMPILED_DIR),
            base,
        }
    }

    /// Create all directories. Existing directories are not an error.
    pub fn create(&self) -> Result<()> {
        for dir in [&self.base, &self.design, &self.compiled] {
            std::fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
        }
        Ok(())
    }
}
