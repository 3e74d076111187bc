// src/draw.rs

use glam::Vec2;
use crate::occlusion::RaySegment;
use crate::scene::Scene;
use crate::shape::{Rgba, Shape};

pub const RAY_THICKNESS: f32 = 1.0;

/// Backend-independent draw request, in pixel coordinates with y down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Circle { center: Vec2, radius: f32, color: Rgba },
    Rectangle { origin: Vec2, size: Vec2, color: Rgba },
    Line { start: Vec2, end: Vec2, thickness: f32, color: Rgba },
}

/// Obstacles in registry order, then the light, then the rays on top.
pub fn build_draw_list(scene: &Scene, rays: &[RaySegment], ray_color: Rgba) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(scene.obstacles().len() + 1 + rays.len());

    commands.extend(scene.obstacles().iter().map(Shape::draw_command));
    commands.push(Shape::Circle(*scene.light()).draw_command());
    commands.extend(rays.iter().map(|ray| DrawCommand::Line {
        start: ray.start,
        end: ray.end,
        thickness: RAY_THICKNESS,
        color: ray_color,
    }));

    commands
}
