use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use keycase_params::ResolvedConfig;

use super::{UnwrapOrExit, load_overrides, overrides_of};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Parameter file (.json or .toml); defaults are checked when omitted
    #[arg(short, long, value_name = "parameters.json")]
    pub parameter_file: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = load_overrides(self.parameter_file.as_deref());
        let config = ResolvedConfig::resolve(&overrides_of(&file)).unwrap_or_exit();

        let report = ops::check(&config, self.parameter_file.as_deref());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
