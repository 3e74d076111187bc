// src/generator.rs

use glam::Vec2;
use rand::Rng;
use crate::shape::{Circle, Line, Rectangle, Rgba, Shape};

const GENERATED_COLOR: Rgba = Rgba::new(90, 90, 110, 255);

/// Random obstacle fields for benchmarking and stress tests.
pub struct ObstacleGenerator;

impl ObstacleGenerator {
    /// `count` obstacles cycling circle, rectangle, wall, all inside
    /// `width` x `height` with a 20px margin.
    pub fn random_obstacles(
        rng: &mut impl Rng,
        width: f32,
        height: f32,
        count: usize,
    ) -> Vec<Shape> {
        let margin = 20.0;
        let max_x = (width - margin).max(margin + 1.0);
        let max_y = (height - margin).max(margin + 1.0);

        let mut obstacles = Vec::with_capacity(count);
        for i in 0..count {
            let x = rng.gen_range(margin..max_x);
            let y = rng.gen_range(margin..max_y);

            let shape = match i % 3 {
                0 => Circle::new(x, y, rng.gen_range(5.0..40.0), GENERATED_COLOR).into(),
                1 => {
                    let w = rng.gen_range(10.0..80.0f32).min(max_x + margin - x);
                    let h = rng.gen_range(10.0..80.0f32).min(max_y + margin - y);
                    Rectangle::new(x, y, w.max(1.0), h.max(1.0), GENERATED_COLOR).into()
                }
                _ => {
                    let end = Vec2::new(rng.gen_range(margin..max_x), rng.gen_range(margin..max_y));
                    Line::new(Vec2::new(x, y), end, 4.0, GENERATED_COLOR).into()
                }
            };
            obstacles.push(shape);
        }
        obstacles
    }
}
