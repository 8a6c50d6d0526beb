use std::{path::PathBuf, time::Duration};

use super::{RenderJob, RenderLauncher};
use crate::BuildError;

/// Launched render jobs and the bounded poll loop that waits on them.
#[derive(Debug)]
pub struct RenderQueue {
    poll_interval: Duration,
    jobs: Vec<RenderJob>,
}

impl RenderQueue {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            jobs: Vec::new(),
        }
    }

    /// Start a render for one design file.
    ///
    /// A launch failure marks only this job as failed.
    pub fn launch(
        &mut self,
        launcher: &dyn RenderLauncher,
        design: PathBuf,
        compiled: PathBuf,
    ) -> &RenderJob {
        let mut job = RenderJob::new(design, compiled);
        match launcher.launch(&job.design, &job.compiled) {
            Ok(handle) => job.start(handle),
            Err(source) => {
                let err = BuildError::RenderLaunch {
                    path: job.design.clone(),
                    source,
                };
                log::error!("{}: {}", err, err_source(&err));
                job.fail(format!("{}: {}", err, err_source(&err)));
            }
        }
        self.jobs.push(job);
        &self.jobs[self.jobs.len() - 1]
    }

    pub fn jobs(&self) -> &[RenderJob] {
        &self.jobs
    }

    pub fn active_count(&self) -> usize {
        self.jobs.iter().filter(|job| job.is_active()).count()
    }

    /// Wait once on every active job, reporting the ones that finished.
    ///
    /// Returns the number of jobs still active afterwards.
    pub fn poll_once(&mut self, on_finish: &mut dyn FnMut(&RenderJob)) -> usize {
        for job in self.jobs.iter_mut().filter(|job| job.is_active()) {
            if job.poll(self.poll_interval) {
                match job.error() {
                    Some(err) => log::error!("{}", err),
                    None => log::info!("rendered {}", job.compiled().display()),
                }
                on_finish(job);
            }
        }
        self.active_count()
    }

    /// Poll until every job is terminal.
    pub fn run(mut self, mut on_finish: impl FnMut(&RenderJob)) -> Vec<RenderJob> {
        while self.poll_once(&mut on_finish) > 0 {}
        self.jobs
    }
}

fn err_source(err: &BuildError) -> String {
    std::error::Error::source(err)
        .map(|source| source.to_string())
        .unwrap_or_default()
}
