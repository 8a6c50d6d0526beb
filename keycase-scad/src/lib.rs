//! OpenSCAD output for keycase.
//!
//! [`LayoutBackend`] builds case geometry as [`ScadNode`] trees and
//! [`ScadWriter`] writes them as `.scad` design files.

mod backend;
pub mod builder;
mod cable;
mod case;
mod node;
mod writer;

pub use backend::LayoutBackend;
pub use builder::{Fragment, Renderable, ScadBuilder};
pub use cable::CableHolder;
pub use case::CaseGeometry;
pub use node::{ScadNode, num};
pub use writer::ScadWriter;
