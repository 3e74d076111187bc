// src/shape.rs

use glam::Vec2;
use crate::draw::DrawCommand;
use crate::geometry::Segment;
use crate::intersection::RayIntersection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Pillars and the light source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32, color: Rgba) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self { center: Vec2::new(x, y), radius, color }
    }

    pub fn ray_intersection(&self, origin: Vec2, dir: Vec2) -> Option<Vec2> {
        RayIntersection::circle(origin, dir, self.center, self.radius)
            .map(|t| RayIntersection::point_at(origin, dir, t))
    }
}

/// Axis-aligned furniture. Hit-tested as its four outline edges, not as a solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Rgba) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rectangle extent must be positive");
        Self { origin: Vec2::new(x, y), width, height, color }
    }

    /// Top, right, bottom, left.
    pub fn edges(&self) -> [Segment; 4] {
        let top_left = self.origin;
        let top_right = self.origin + Vec2::new(self.width, 0.0);
        let bottom_right = self.origin + Vec2::new(self.width, self.height);
        let bottom_left = self.origin + Vec2::new(0.0, self.height);
        [
            Segment::new(top_left, top_right),
            Segment::new(top_right, bottom_right),
            Segment::new(bottom_right, bottom_left),
            Segment::new(bottom_left, top_left),
        ]
    }

    pub fn ray_intersection(&self, origin: Vec2, dir: Vec2) -> Option<Vec2> {
        RayIntersection::closest_edge(origin, dir, &self.edges())
            .map(|t| RayIntersection::point_at(origin, dir, t))
    }
}

/// A wall. Thickness only affects drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
    pub color: Rgba,
}

impl Line {
    pub fn new(start: Vec2, end: Vec2, thickness: f32, color: Rgba) -> Self {
        Self { start, end, thickness, color }
    }

    pub fn ray_intersection(&self, origin: Vec2, dir: Vec2) -> Option<Vec2> {
        RayIntersection::closest_edge(origin, dir, &[Segment::new(self.start, self.end)])
            .map(|t| RayIntersection::point_at(origin, dir, t))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
}

impl Shape {
    /// Point where the ray `origin + t * dir` (t >= 0) first meets this shape.
    pub fn ray_intersection(&self, origin: Vec2, dir: Vec2) -> Option<Vec2> {
        match self {
            Shape::Circle(circle) => circle.ray_intersection(origin, dir),
            Shape::Rectangle(rect) => rect.ray_intersection(origin, dir),
            Shape::Line(line) => line.ray_intersection(origin, dir),
        }
    }

    pub fn draw_command(&self) -> DrawCommand {
        match *self {
            Shape::Circle(c) => DrawCommand::Circle {
                center: c.center,
                radius: c.radius,
                color: c.color,
            },
            Shape::Rectangle(r) => DrawCommand::Rectangle {
                origin: r.origin,
                size: Vec2::new(r.width, r.height),
                color: r.color,
            },
            Shape::Line(l) => DrawCommand::Line {
                start: l.start,
                end: l.end,
                thickness: l.thickness,
                color: l.color,
            },
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Rgba = Rgba::new(100, 100, 120, 255);

    #[test]
    fn test_rgba_to_f32() {
        assert_eq!(Rgba::new(255, 0, 51, 255).to_f32_array(), [1.0, 0.0, 0.2, 1.0]);
    }

    #[test]
    fn test_rectangle_single_edge_hit() {
        let rect = Rectangle::new(100.0, 100.0, 50.0, 40.0, GREY);
        let origin = Vec2::new(0.0, 120.0);
        let hit = rect.ray_intersection(origin, Vec2::new(1000.0, 0.0)).unwrap();
        // Enters through the left edge.
        assert!((hit - Vec2::new(100.0, 120.0)).length() < 1e-3);
    }

    #[test]
    fn test_rectangle_corner_reports_nearest_edge() {
        let rect = Rectangle::new(100.0, 100.0, 50.0, 50.0, GREY);
        let origin = Vec2::new(0.0, 0.0);
        // Diagonal through the top-left corner (100, 100) and out at (150, 150).
        let hit = rect.ray_intersection(origin, Vec2::new(500.0, 500.0)).unwrap();
        assert!((hit - Vec2::new(100.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn test_rectangle_miss() {
        let rect = Rectangle::new(100.0, 100.0, 50.0, 50.0, GREY);
        assert!(rect.ray_intersection(Vec2::ZERO, Vec2::new(0.0, 500.0)).is_none());
    }

    #[test]
    fn test_rectangle_edges_are_closed_outline() {
        let edges = Rectangle::new(0.0, 0.0, 4.0, 2.0, GREY).edges();
        for i in 0..4 {
            assert_eq!(edges[i].end, edges[(i + 1) % 4].start);
        }
        assert_eq!(edges[0].end, Vec2::new(4.0, 0.0));
        assert_eq!(edges[2].start, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_line_ignores_thickness() {
        let wall = Line::new(Vec2::new(50.0, 0.0), Vec2::new(50.0, 100.0), 40.0, GREY);
        // Passes 10px beyond the segment end: inside the drawn thickness but still a miss.
        assert!(wall.ray_intersection(Vec2::new(0.0, 110.0), Vec2::new(500.0, 0.0)).is_none());

        let hit = wall.ray_intersection(Vec2::new(0.0, 50.0), Vec2::new(500.0, 0.0)).unwrap();
        assert!((hit.x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_shape_dispatch_matches_variant() {
        let circle = Circle::new(100.0, 0.0, 10.0, GREY);
        let shape: Shape = circle.into();
        let origin = Vec2::ZERO;
        let dir = Vec2::new(500.0, 0.0);
        assert_eq!(shape.ray_intersection(origin, dir), circle.ray_intersection(origin, dir));
        assert_eq!(
            shape.draw_command(),
            DrawCommand::Circle { center: Vec2::new(100.0, 0.0), radius: 10.0, color: GREY }
        );
    }

    #[test]
    fn test_draw_command_carries_geometry() {
        let shape: Shape = Rectangle::new(1.0, 2.0, 3.0, 4.0, GREY).into();
        assert_eq!(
            shape.draw_command(),
            DrawCommand::Rectangle { origin: Vec2::new(1.0, 2.0), size: Vec2::new(3.0, 4.0), color: GREY }
        );
    }
}
