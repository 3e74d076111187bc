// src/occlusion.rs

use glam::Vec2;
use crate::geometry::angle_step_degrees;
use crate::scene::Scene;
use crate::shape::Shape;

/// A ray clipped against the scene. `hit` is false when it runs its full length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaySegment {
    pub start: Vec2,
    pub end: Vec2,
    pub hit: bool,
}

impl RaySegment {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Casts `origin + t * dir` against every obstacle and stops at the nearest hit.
///
/// Only hits strictly closer than `max_distance` count, so the visible ray
/// never grows past its unobstructed length `origin + dir`.
pub fn cast_ray(origin: Vec2, dir: Vec2, max_distance: f32, obstacles: &[Shape]) -> RaySegment {
    let mut closest_distance = max_distance;
    let mut closest_point = None;

    for obstacle in obstacles {
        if let Some(point) = obstacle.ray_intersection(origin, dir) {
            let distance = point.distance(origin);
            if distance < closest_distance {
                closest_distance = distance;
                closest_point = Some(point);
            }
        }
    }

    match closest_point {
        Some(end) => RaySegment { start: origin, end, hit: true },
        None => RaySegment { start: origin, end: origin + dir, hit: false },
    }
}

/// Per-frame light occlusion: a fan of rays from the light's rim, one every
/// `360 / num_rays` degrees, each clipped by [`cast_ray`].
///
/// The scan is exhaustive, rays x obstacles, with no broad phase.
pub struct OcclusionEngine {
    num_rays: usize,
    angle_step: f32,
    rays: Vec<RaySegment>,
}

impl OcclusionEngine {
    pub fn new(num_rays: usize) -> Self {
        Self {
            num_rays,
            angle_step: angle_step_degrees(num_rays),
            rays: Vec::with_capacity(num_rays),
        }
    }

    /// Unit direction of ray `index`.
    pub fn ray_direction(&self, index: usize) -> Vec2 {
        let angle = (self.angle_step * index as f32).to_radians();
        Vec2::new(angle.cos(), angle.sin())
    }

    /// Recomputes all rays for the current light position and returns them.
    /// The buffer is reused between frames.
    pub fn compute(&mut self, scene: &Scene) -> &[RaySegment] {
        self.rays.clear();

        let light = scene.light();
        let max_distance = scene.max_distance();

        for i in 0..self.num_rays {
            let unit = self.ray_direction(i);
            let origin = light.center + unit * light.radius;
            let dir = unit * max_distance;
            self.rays.push(cast_ray(origin, dir, max_distance, scene.obstacles()));
        }

        &self.rays
    }

    pub fn rays(&self) -> &[RaySegment] {
        &self.rays
    }
}
