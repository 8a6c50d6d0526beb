mod build;
mod check;
mod completions;

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use build::BuildCommand;
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Result, WrapErr};
use keycase_params::{ParameterFile, ParameterSet};

/// Extension trait for exiting on parameter errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for keycase_params::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "keycase")]
#[command(version)]
#[command(about = "Generate keyboard case design files from keyboard-layout-editor layouts")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write the log to this file instead of the terminal, at debug level or above
    #[arg(long, value_name = "path", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_logging(self.verbose, self.log_file.as_deref())?;

        match &self.command {
            Commands::Build(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate design files (and optionally render them) for a layout
    Build(BuildCommand),

    /// Resolve and validate parameters without building
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let file = log_file
        .map(|path| {
            File::create(path).wrap_err_with(|| format!("failed to create '{}'", path.display()))
        })
        .transpose()?;
    log_builder(verbose, file).init();
    Ok(())
}

/// `RUST_LOG` wins over the verbosity flag.
fn log_builder(verbose: u8, file: Option<File>) -> env_logger::Builder {
    let level = match (verbose, file.is_some()) {
        (0, false) => "warn",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    match file {
        Some(file) => {
            builder
                .format_timestamp_secs()
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.format_timestamp(None);
        }
    }
    builder
}

/// Overrides from an optional parameter file, empty when none was given.
fn load_overrides(path: Option<&Path>) -> Option<ParameterFile> {
    path.map(|path| ParameterFile::open(path).unwrap_or_exit())
}

fn overrides_of(file: &Option<ParameterFile>) -> ParameterSet {
    file.as_ref()
        .map(|file| file.overrides().clone())
        .unwrap_or_default()
}

/// Accept only `.json` layout files.
fn json_file(value: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(value);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(path),
        _ => Err(format!("file doesn't end with .json: {}", value)),
    }
}
