//! A complete build run: plan, assemble, write and optionally render.

use std::time::Duration;

use eyre::{Result, WrapErr};
use keycase_core::{BuildTarget, OutputDirs, Part, WriteResult};
use keycase_params::ResolvedConfig;

use crate::{
    ArtifactNamer, ArtifactPaths, BuildMode, CaseDimensions, DesignWriter, GeometryBackend,
    HeaderDirective, SectionCounts, assemble, emit, plan,
    render::{RenderJob, RenderLauncher, RenderQueue},
};

/// Options for a build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub mode: BuildMode,
    pub include_switch_type: bool,
    pub fragments: u32,
    pub render: bool,
    pub poll_interval: Duration,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            mode: BuildMode::WholeObject,
            include_switch_type: false,
            fragments: 8,
            render: false,
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Hooks called while a build runs.
///
/// Every method has a no-op default so observers implement only what they
/// need.
pub trait BuildObserver {
    fn on_plan(&mut self, _counts: SectionCounts, _targets: &[BuildTarget]) {}

    fn on_design_written(&mut self, _artifact: &Artifact) {}

    fn on_render_finished(&mut self, _job: &RenderJob) {}
}

impl BuildObserver for () {}

/// One part of one target and what happened to its design file.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub target: BuildTarget,
    pub part: Part,
    pub paths: ArtifactPaths,
    pub result: WriteResult,
}

/// Everything a build run produced.
#[derive(Debug)]
pub struct BuildOutcome {
    pub counts: SectionCounts,
    pub dimensions: Option<CaseDimensions>,
    pub targets: Vec<BuildTarget>,
    pub artifacts: Vec<Artifact>,
    pub renders: Vec<RenderJob>,
}

impl BuildOutcome {
    pub fn written(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts
            .iter()
            .filter(|artifact| artifact.result == WriteResult::Written)
    }

    pub fn failed_renders(&self) -> impl Iterator<Item = &RenderJob> {
        self.renders
            .iter()
            .filter(|job| matches!(job.status(), crate::RenderStatus::Failed(_)))
    }
}

/// Runs builds for one layout and one resolved configuration.
pub struct Generator<'a> {
    config: &'a ResolvedConfig,
    dirs: OutputDirs,
    namer: ArtifactNamer,
    options: BuildOptions,
}

impl<'a> Generator<'a> {
    pub fn new(
        config: &'a ResolvedConfig,
        basename: impl Into<String>,
        dirs: OutputDirs,
        options: BuildOptions,
    ) -> Self {
        let namer = ArtifactNamer::new(basename, dirs.clone());
        Self {
            config,
            dirs,
            namer,
            options,
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Run the build.
    ///
    /// Output directories are created before any design file is written.
    /// When rendering, every written design file is launched before the
    /// poll loop starts.
    pub fn run<B, W>(
        &self,
        backend: &mut B,
        writer: &W,
        launcher: &dyn RenderLauncher,
        observer: &mut dyn BuildObserver,
    ) -> Result<BuildOutcome>
    where
        B: GeometryBackend,
        W: DesignWriter<B::Model> + ?Sized,
    {
        self.dirs
            .create()
            .wrap_err("failed to create output directories")?;

        let counts = backend.section_counts();
        let dimensions = backend.case_dimensions();
        let targets = plan(self.options.mode, counts, self.config.params().cable_hole)?;
        observer.on_plan(counts, &targets);

        let header = HeaderDirective {
            fragments: self.options.fragments,
        };

        let mut artifacts = Vec::new();
        for target in &targets {
            for &part in &target.parts {
                let paths = self.namer.name_for(
                    target,
                    part,
                    self.config,
                    self.options.include_switch_type,
                );
                let model = assemble(backend, target, part, counts);
                let result = emit(writer, part, model.as_ref(), &paths.design, &header)?;

                let artifact = Artifact {
                    target: target.clone(),
                    part,
                    paths,
                    result,
                };
                if result == WriteResult::Written {
                    observer.on_design_written(&artifact);
                }
                artifacts.push(artifact);
            }
        }

        let renders = if self.options.render {
            let mut queue = RenderQueue::new(self.options.poll_interval);
            for artifact in artifacts.iter().filter(|a| a.result == WriteResult::Written) {
                let job = queue.launch(
                    launcher,
                    artifact.paths.design.clone(),
                    artifact.paths.compiled.clone(),
                );
                if job.status().is_terminal() {
                    observer.on_render_finished(job);
                }
            }
            queue.run(|job| observer.on_render_finished(job))
        } else {
            Vec::new()
        };

        Ok(BuildOutcome {
            counts,
            dimensions,
            targets,
            artifacts,
            renders,
        })
    }
}
