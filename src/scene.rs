// src/scene.rs

use glam::Vec2;
use crate::geometry::max_ray_distance;
use crate::shape::{Circle, Shape};

/// Everything the occlusion pass reads in a frame: the static obstacle
/// registry, the light, and the drawable size with its derived ray length.
#[derive(Clone, Debug)]
pub struct Scene {
    obstacles: Vec<Shape>,
    light: Circle,
    width: u32,
    height: u32,
    max_distance: f32,
}

impl Scene {
    pub fn new(obstacles: Vec<Shape>, light: Circle, width: u32, height: u32) -> Self {
        Self {
            obstacles,
            light,
            width,
            height,
            max_distance: max_ray_distance(width, height),
        }
    }

    pub fn obstacles(&self) -> &[Shape] {
        &self.obstacles
    }

    pub fn light(&self) -> &Circle {
        &self.light
    }

    pub fn set_light_position(&mut self, position: Vec2) {
        self.light.center = position;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Recomputes the unobstructed ray length for a new drawable size.
    /// A zero dimension (minimised window) keeps the previous size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring degenerate resize to {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
        self.max_distance = max_ray_distance(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Rgba;

    fn light() -> Circle {
        Circle::new(150.0, 150.0, 15.0, Rgba::new(255, 255, 0, 255))
    }

    #[test]
    fn test_new_derives_max_distance() {
        let scene = Scene::new(Vec::new(), light(), 300, 400);
        assert_eq!(scene.max_distance(), 500.0);
        assert_eq!(scene.size(), (300, 400));
    }

    #[test]
    fn test_resize_recomputes_max_distance() {
        let mut scene = Scene::new(Vec::new(), light(), 300, 400);
        scene.resize(600, 800);
        assert_eq!(scene.max_distance(), 1000.0);
        assert_eq!(scene.size(), (600, 800));
    }

    #[test]
    fn test_zero_sized_resize_is_ignored() {
        let mut scene = Scene::new(Vec::new(), light(), 300, 400);
        scene.resize(0, 800);
        assert_eq!(scene.max_distance(), 500.0);
        assert_eq!(scene.size(), (300, 400));
    }

    #[test]
    fn test_set_light_position_keeps_radius() {
        let mut scene = Scene::new(Vec::new(), light(), 300, 400);
        scene.set_light_position(Vec2::new(10.0, 20.0));
        assert_eq!(scene.light().center, Vec2::new(10.0, 20.0));
        assert_eq!(scene.light().radius, 15.0);
    }
}
