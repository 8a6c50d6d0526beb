//! External render orchestration.
//!
//! Every design file gets its own external render process. All processes
//! are launched up front and then polled in turn with a short timeout until
//! none remain active. There is no cancellation and no overall ceiling: a
//! process that never exits keeps the queue running.

mod process;
mod queue;

use std::{fmt, io, path::Path, path::PathBuf, time::Duration};

use crate::BuildError;

pub use process::{ProcessHandle, ProcessLauncher};
pub use queue::RenderQueue;

/// Lifecycle of a render job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    Pending,
    Running,
    Succeeded,
    Failed(String),
}

impl RenderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RenderStatus::Succeeded | RenderStatus::Failed(_))
    }
}

impl fmt::Display for RenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStatus::Pending => write!(f, "pending"),
            RenderStatus::Running => write!(f, "running"),
            RenderStatus::Succeeded => write!(f, "succeeded"),
            RenderStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Observed exit of a render process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderExit {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl RenderExit {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    fn failure_reason(&self) -> String {
        match self.code {
            Some(code) => format!("renderer exited with code {}", code),
            None => "renderer was terminated by a signal".to_string(),
        }
    }
}

/// A launched render process.
pub trait RenderHandle {
    /// Wait up to `timeout` for the process to exit.
    ///
    /// `Ok(None)` means the process is still running.
    fn wait_timeout(&mut self, timeout: Duration) -> io::Result<Option<RenderExit>>;
}

/// Starts render processes.
pub trait RenderLauncher {
    fn launch(&self, design: &Path, compiled: &Path) -> io::Result<Box<dyn RenderHandle>>;
}

impl<F> RenderLauncher for F
where
    F: Fn(&Path, &Path) -> io::Result<Box<dyn RenderHandle>>,
{
    fn launch(&self, design: &Path, compiled: &Path) -> io::Result<Box<dyn RenderHandle>> {
        self(design, compiled)
    }
}

/// One design file being compiled into an artifact.
pub struct RenderJob {
    design: PathBuf,
    compiled: PathBuf,
    status: RenderStatus,
    handle: Option<Box<dyn RenderHandle>>,
}

impl RenderJob {
    pub(crate) fn new(design: PathBuf, compiled: PathBuf) -> Self {
        Self {
            design,
            compiled,
            status: RenderStatus::Pending,
            handle: None,
        }
    }

    pub fn design(&self) -> &Path {
        &self.design
    }

    pub fn compiled(&self) -> &Path {
        &self.compiled
    }

    pub fn status(&self) -> &RenderStatus {
        &self.status
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// The failure as an error, once the job has failed.
    pub fn error(&self) -> Option<BuildError> {
        match &self.status {
            RenderStatus::Failed(reason) => Some(BuildError::Render {
                path: self.design.clone(),
                reason: reason.clone(),
            }),
            _ => None,
        }
    }

    pub(crate) fn start(&mut self, handle: Box<dyn RenderHandle>) {
        self.handle = Some(handle);
        self.status = RenderStatus::Running;
    }

    pub(crate) fn fail(&mut self, reason: String) {
        self.handle = None;
        self.status = RenderStatus::Failed(reason);
    }

    /// Wait on the handle once. Returns true when the job became terminal.
    pub(crate) fn poll(&mut self, timeout: Duration) -> bool {
        let Some(handle) = self.handle.as_mut() else {
            return false;
        };

        match handle.wait_timeout(timeout) {
            Ok(None) => false,
            Ok(Some(exit)) => {
                self.handle = None;
                if exit.is_success() {
                    self.status = RenderStatus::Succeeded;
                } else {
                    self.status = RenderStatus::Failed(exit.failure_reason());
                }
                true
            }
            Err(e) => {
                self.fail(format!("failed to wait for renderer: {}", e));
                true
            }
        }
    }
}

impl fmt::Debug for RenderJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderJob")
            .field("design", &self.design)
            .field("compiled", &self.compiled)
            .field("status", &self.status)
            .field("active", &self.handle.is_some())
            .finish()
    }
}
