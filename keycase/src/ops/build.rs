//! Build operation - design files and renders for one layout.

use std::{ffi::OsStr, path::Path};

use eyre::{Context, Result};
use keycase_build::{BuildObserver, BuildOptions, Generator, ProcessLauncher};
use keycase_core::OutputDirs;
use keycase_layout::Layout;
use keycase_params::ResolvedConfig;
use keycase_scad::{LayoutBackend, ScadWriter};

use crate::reports::{BuildReport, RenderSummary};

/// Options for the build operation.
pub struct BuildRequest<'a> {
    /// Layout name, used for the output folder and file names.
    pub layout_name: &'a str,
    /// Folder that receives `<layout name>/scad` and `<layout name>/stl`.
    pub output_folder: &'a Path,
    /// Renderer executable.
    pub renderer: &'a OsStr,
    pub options: BuildOptions,
}

/// Execute the build operation.
///
/// Configuration must already be resolved and validated; nothing is written
/// before this is called.
pub fn build(
    layout: &Layout,
    config: &ResolvedConfig,
    request: BuildRequest,
    observer: &mut dyn BuildObserver,
) -> Result<BuildReport> {
    let dirs = OutputDirs::new(request.output_folder, request.layout_name);
    log::debug!("design folder: {}", dirs.design.display());
    log::debug!("compiled folder: {}", dirs.compiled.display());

    let mode = request.options.mode;
    let generator = Generator::new(config, request.layout_name, dirs.clone(), request.options);
    let mut backend = LayoutBackend::new(layout, config);
    let launcher = ProcessLauncher::new(request.renderer);

    let outcome = generator
        .run(&mut backend, &ScadWriter, &launcher, observer)
        .wrap_err_with(|| format!("failed to build '{}'", request.layout_name))?;

    if let Some(dims) = outcome.dimensions {
        log::info!("case height: {:.3}, case width: {:.3}", dims.height, dims.width);
    }
    log::info!("sections in top: {}", outcome.counts.top);
    log::info!("sections in bottom: {}", outcome.counts.bottom);
    log::info!("generation complete");

    let written = outcome.written().map(|a| a.paths.design.clone()).collect();
    let skipped = outcome.artifacts.len() - outcome.written().count();
    let renders = outcome
        .renders
        .iter()
        .map(|job| RenderSummary {
            compiled: job.compiled().to_path_buf(),
            status: job.status().clone(),
        })
        .collect();

    Ok(BuildReport {
        layout_name: request.layout_name.to_string(),
        parameters: config.to_string(),
        warnings: config.warnings().to_vec(),
        mode,
        dimensions: outcome.dimensions,
        counts: outcome.counts,
        design_dir: dirs.design,
        written,
        skipped,
        renders,
    })
}
