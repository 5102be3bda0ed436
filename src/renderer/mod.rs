//! WebGPU rendering module
//!
//! Vertices are generated on the CPU in world coordinates each frame and
//! mapped to NDC at upload time.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_frame;
pub use vertex::Vertex;
