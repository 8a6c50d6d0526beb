use std::{
    ffi::OsString,
    io,
    path::Path,
    process::{Child, Command},
    thread,
    time::{Duration, Instant},
};

use super::{RenderExit, RenderHandle, RenderLauncher};

/// Longest single sleep while waiting on a child process.
const WAIT_SLICE: Duration = Duration::from_millis(10);

/// Runs `<program> -o <compiled> <design>` for each job.
///
/// The child inherits stdout and stderr.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    program: OsString,
}

impl ProcessLauncher {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new("openscad")
    }
}

impl RenderLauncher for ProcessLauncher {
    fn launch(&self, design: &Path, compiled: &Path) -> io::Result<Box<dyn RenderHandle>> {
        log::debug!(
            "launching {} -o {} {}",
            self.program.to_string_lossy(),
            compiled.display(),
            design.display()
        );
        let child = Command::new(&self.program)
            .arg("-o")
            .arg(compiled)
            .arg(design)
            .spawn()?;
        Ok(Box::new(ProcessHandle { child }))
    }
}

/// Handle to a spawned renderer.
#[derive(Debug)]
pub struct ProcessHandle {
    child: Child,
}

impl RenderHandle for ProcessHandle {
    fn wait_timeout(&mut self, timeout: Duration) -> io::Result<Option<RenderExit>> {
        let start = Instant::now();
        loop {
            if let Some(status) = self.child.try_wait()? {
                return Ok(Some(RenderExit {
                    code: status.code(),
                }));
            }
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                return Ok(None);
            }
            thread::sleep(WAIT_SLICE.min(timeout - elapsed));
        }
    }
}
