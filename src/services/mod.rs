//! Services
//!
//! The model round trip, the diagram renderer and the run pipeline that
//! ties them to the output files.

pub mod extraction;
pub mod pipeline;
pub mod render;

pub use extraction::TaskExtractor;
pub use pipeline::Pipeline;
pub use render::DiagramRenderer;
