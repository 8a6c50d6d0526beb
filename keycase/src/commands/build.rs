use std::{ffi::OsString, path::PathBuf, time::Duration};

use clap::Args;
use eyre::{Context, Result};
use keycase_build::{BuildMode, BuildOptions};
use keycase_layout::Layout;
use keycase_params::ResolvedConfig;

use super::{UnwrapOrExit, json_file, load_overrides, overrides_of};
use crate::{
    ops::{self, build::BuildRequest},
    reports::{BuildProgress, Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    /// A keyboard-layout-editor JSON file
    #[arg(short, long, value_name = "layout.json", value_parser = json_file)]
    pub input_file: PathBuf,

    /// Folder to store the generated files
    #[arg(short, long, default_value = "output")]
    pub output_folder: PathBuf,

    /// Parameter file (.json or .toml) for the case being made
    #[arg(short, long, value_name = "parameters.json")]
    pub parameter_file: Option<PathBuf>,

    /// Build only this section
    #[arg(short, long, value_name = "section_num")]
    pub section: Option<usize>,

    /// Output every part of every section in separate files
    #[arg(short, long)]
    pub all_sections: bool,

    /// Output one file per part with the sections shown exploded
    #[arg(short, long)]
    pub exploded: bool,

    /// Number of fragments used when creating curves
    #[arg(short, long, default_value_t = 8, value_name = "num_fragments")]
    pub fragments: u32,

    /// Render an STL from each generated design file
    #[arg(short, long)]
    pub render: bool,

    /// Add the switch and stabilizer type names to the file names
    #[arg(long)]
    pub switch_type_in_filename: bool,

    /// Renderer executable
    #[arg(long, default_value = "openscad", value_name = "path")]
    pub openscad: OsString,

    /// How long to wait on each render per poll
    #[arg(long, default_value_t = 100, value_name = "ms")]
    pub poll_interval_ms: u64,
}

impl BuildCommand {
    /// Run the build command
    pub fn run(&self) -> Result<()> {
        let file = load_overrides(self.parameter_file.as_deref());
        let config = ResolvedConfig::resolve(&overrides_of(&file)).unwrap_or_exit();

        let layout = Layout::open(&self.input_file)
            .wrap_err_with(|| format!("failed to load layout '{}'", self.input_file.display()))?;
        let layout_name = self
            .input_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "layout".to_string());

        let mode = BuildMode::select(self.all_sections, self.exploded, self.section);
        log::debug!("build mode: {}", mode);

        let request = BuildRequest {
            layout_name: &layout_name,
            output_folder: &self.output_folder,
            renderer: &self.openscad,
            options: BuildOptions {
                mode,
                include_switch_type: self.switch_type_in_filename,
                fragments: self.fragments,
                render: self.render,
                poll_interval: Duration::from_millis(self.poll_interval_ms),
            },
        };

        let mut out = TerminalOutput::new();
        let report = ops::build(&layout, &config, request, &mut BuildProgress::new(&mut out))?;
        report.render(&mut out);
        Ok(())
    }
}
