//! Build planning and render orchestration for keycase.
//!
//! This crate turns a geometry backend and a resolved configuration into
//! named design files, then optionally compiles them with an external
//! renderer.
//!
//! # Module Organization
//!
//! - [`backend`] - Geometry and design-file collaborator traits
//! - [`planner`] - Build modes and target planning
//! - [`naming`] - Deterministic artifact file names
//! - [`render`] - External render launch and the bounded poll loop
//! - [`generator`] - A complete build run
//! - [`testing`] - Test doubles (feature-gated)

mod assemble;
pub mod backend;
mod emit;
mod error;
pub mod generator;
pub mod naming;
pub mod planner;
pub mod render;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use assemble::{EXPLODE_STAGGER, assemble, exploded_offset};
pub use backend::{
    CaseDimensions, DesignWriter, GeometryBackend, HeaderDirective, Offset, SectionCounts, View,
};
pub use emit::emit;
pub use error::BuildError;
pub use generator::{Artifact, BuildObserver, BuildOptions, BuildOutcome, Generator};
pub use naming::{ArtifactNamer, ArtifactPaths};
pub use planner::{BuildMode, plan};
pub use render::{
    ProcessLauncher, RenderExit, RenderHandle, RenderJob, RenderLauncher, RenderQueue,
    RenderStatus,
};
