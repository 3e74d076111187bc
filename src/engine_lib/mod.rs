// src/engine_lib/mod.rs
pub mod controller;

pub use controller::LightController;
