// src/rendering_lib/batch.rs

use glam::Vec2;
use room_raycaster::draw::DrawCommand;
use room_raycaster::Rgba;
use super::vertex::Vertex;

pub const CIRCLE_SEGMENTS: usize = 48;

/// Per-frame CPU-side geometry: every draw command becomes a convex polygon,
/// fan-triangulated into one shared vertex/index list.
pub struct FrameBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    max_vertices: usize,
    max_indices: usize,
    linear_colors: bool,
    dropped_polygons: usize,
}

impl FrameBatch {
    /// `linear_colors` converts sRGB-encoded colors to linear, for sRGB surfaces.
    pub fn new(max_vertices: usize, max_indices: usize, linear_colors: bool) -> Self {
        Self {
            vertices: Vec::with_capacity(max_vertices),
            indices: Vec::with_capacity(max_indices),
            max_vertices: max_vertices.min(u16::MAX as usize + 1),
            max_indices,
            linear_colors,
            dropped_polygons: 0,
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.dropped_polygons = 0;
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Polygons skipped this frame because the buffers were full.
    pub fn dropped_polygons(&self) -> usize {
        self.dropped_polygons
    }

    pub fn push_command(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Circle { center, radius, color } => {
                self.push_polygon(&circle_outline(center, radius), color);
            }
            DrawCommand::Rectangle { origin, size, color } => {
                self.push_polygon(&rectangle_outline(origin, size), color);
            }
            DrawCommand::Line { start, end, thickness, color } => {
                if let Some(quad) = thick_line_outline(start, end, thickness) {
                    self.push_polygon(&quad, color);
                }
            }
        }
    }

    fn push_polygon(&mut self, points: &[Vec2], color: Rgba) {
        if points.len() < 3 {
            return;
        }
        let index_count = (points.len() - 2) * 3;
        if self.vertices.len() + points.len() > self.max_vertices
            || self.indices.len() + index_count > self.max_indices
        {
            self.dropped_polygons += 1;
            return;
        }

        let color = self.vertex_color(color);
        let start_vertex_index = self.vertices.len() as u16;
        self.vertices.extend(points.iter().map(|&p| Vertex::new(p, color)));
        for i in 1..(points.len() as u16 - 1) {
            self.indices.push(start_vertex_index);
            self.indices.push(start_vertex_index + i);
            self.indices.push(start_vertex_index + i + 1);
        }
    }

    fn vertex_color(&self, color: Rgba) -> [f32; 4] {
        let [r, g, b, a] = color.to_f32_array();
        if self.linear_colors {
            [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
        } else {
            [r, g, b, a]
        }
    }
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn circle_outline(center: Vec2, radius: f32) -> Vec<Vec2> {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

pub fn rectangle_outline(origin: Vec2, size: Vec2) -> [Vec2; 4] {
    [
        origin,
        origin + Vec2::new(size.x, 0.0),
        origin + size,
        origin + Vec2::new(0.0, size.y),
    ]
}

/// Quad of width `thickness` centred on the segment. `None` for zero-length lines.
pub fn thick_line_outline(start: Vec2, end: Vec2, thickness: f32) -> Option<[Vec2; 4]> {
    let along = (end - start).try_normalize()?;
    let offset = along.perp() * (thickness * 0.5);
    Some([start + offset, end + offset, end - offset, start - offset])
}
