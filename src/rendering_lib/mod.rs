// src/rendering_lib/mod.rs

pub mod batch;
pub mod renderer;
pub mod shader;
pub mod vertex;

pub use batch::FrameBatch;
pub use renderer::Renderer;
pub use shader::WGSL_SHADER_SOURCE;
pub use vertex::Vertex;
