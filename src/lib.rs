// src/lib.rs

pub mod config;
pub mod geometry;
pub mod intersection;
pub mod shape;
pub mod scene;
pub mod demo_scene;
pub mod occlusion;
pub mod draw;
pub mod generator;

pub use config::RaycastConfig;
pub use geometry::{ray_segment_intersection, Segment};
pub use occlusion::{OcclusionEngine, RaySegment};
pub use scene::Scene;
pub use shape::{Circle, Line, Rectangle, Rgba, Shape};
