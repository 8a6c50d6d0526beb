//! Core types shared across the keycase crates.
//!
//! This crate provides the part and target values passed between planning,
//! naming and rendering, plus output directory and file utilities.

mod file;
pub mod paths;
mod part;
mod target;

// File operations
pub use file::{File, FileRules, WriteResult};
pub use paths::OutputDirs;
// Build values
pub use part::Part;
pub use target::{BuildTarget, SectionSelector};
