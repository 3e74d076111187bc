// src/config.rs

use glam::Vec2;
use crate::shape::Rgba;

/// Window, light and ray parameters for the demo.
#[derive(Clone, Debug, PartialEq)]
pub struct RaycastConfig {
    pub window_title: String,
    pub initial_width: u32,
    pub initial_height: u32,
    pub num_rays: usize,
    pub ray_color: Rgba,
    pub background_color: Rgba,
    pub light_position: Vec2,
    pub light_radius: f32,
    pub light_color: Rgba,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            window_title: "2D Raycasting - Room Map".to_string(),
            initial_width: 1200,
            initial_height: 800,
            num_rays: 360,
            ray_color: Rgba::new(255, 255, 0, 30),
            background_color: Rgba::new(20, 20, 30, 255),
            light_position: Vec2::new(150.0, 150.0),
            light_radius: 15.0,
            light_color: Rgba::new(255, 255, 0, 255),
        }
    }
}
