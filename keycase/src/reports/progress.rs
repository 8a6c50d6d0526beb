//! Progress lines printed while a build runs.

use keycase_build::{Artifact, BuildObserver, RenderJob, RenderStatus};

use super::output::Output;

/// Prints each generated file and each finished render as it happens.
pub struct BuildProgress<'a> {
    out: &'a mut dyn Output,
}

impl<'a> BuildProgress<'a> {
    pub fn new(out: &'a mut dyn Output) -> Self {
        Self { out }
    }
}

impl BuildObserver for BuildProgress<'_> {
    fn on_design_written(&mut self, artifact: &Artifact) {
        self.out
            .added_item(&format!("generated {}", artifact.paths.design.display()));
    }

    fn on_render_finished(&mut self, job: &RenderJob) {
        match job.status() {
            RenderStatus::Failed(reason) => self
                .out
                .error(&format!("render of {} failed: {}", job.design().display(), reason)),
            _ => self
                .out
                .added_item(&format!("render complete {}", job.compiled().display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::Path, path::PathBuf, time::Duration};

    use keycase_build::{RenderExit, RenderHandle, RenderQueue};

    use super::*;
    use crate::reports::output::BufferOutput;

    struct Exits(i32);

    impl RenderHandle for Exits {
        fn wait_timeout(&mut self, _timeout: Duration) -> io::Result<Option<RenderExit>> {
            Ok(Some(RenderExit { code: Some(self.0) }))
        }
    }

    #[test]
    fn test_prints_render_completions() {
        let mut queue = RenderQueue::new(Duration::ZERO);
        let ok = |_: &Path, _: &Path| -> io::Result<Box<dyn RenderHandle>> { Ok(Box::new(Exits(0))) };
        let bad = |_: &Path, _: &Path| -> io::Result<Box<dyn RenderHandle>> { Ok(Box::new(Exits(2))) };
        queue.launch(&ok, PathBuf::from("a.scad"), PathBuf::from("a.stl"));
        queue.launch(&bad, PathBuf::from("b.scad"), PathBuf::from("b.stl"));

        let mut out = BufferOutput::default();
        let mut progress = BuildProgress::new(&mut out);
        queue.run(|job| progress.on_render_finished(job));

        assert_eq!(
            out.lines,
            vec![
                "  + render complete a.stl".to_string(),
                "error: render of b.scad failed: renderer exited with code 2".to_string(),
            ]
        );
    }
}
