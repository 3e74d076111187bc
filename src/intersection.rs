// src/intersection.rs

use glam::Vec2;
use crate::geometry::{ray_segment_intersection, Segment};

/// Ray hit tests for the obstacle primitives. `dir` is not normalised: callers
/// pass the full-length ray, so `t` in `[0, 1]` spans the visible ray.
pub struct RayIntersection;

impl RayIntersection {
    /// Near root of |origin + t*dir - center|^2 = r^2.
    ///
    /// A negative near root is a miss. The far root is never tried, so a ray
    /// starting inside the circle does not hit it.
    pub fn circle(origin: Vec2, dir: Vec2, center: Vec2, radius: f32) -> Option<f32> {
        let oc = origin - center;

        let a = dir.length_squared();
        let b = 2.0 * oc.dot(dir);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// Smallest `t` over the given edges, if any edge is hit.
    pub fn closest_edge(origin: Vec2, dir: Vec2, edges: &[Segment]) -> Option<f32> {
        let mut closest: Option<f32> = None;
        for edge in edges {
            if let Some(t) = ray_segment_intersection(origin, dir, edge.start, edge.end) {
                if closest.map_or(true, |best| t < best) {
                    closest = Some(t);
                }
            }
        }
        closest
    }

    #[inline(always)]
    pub fn point_at(origin: Vec2, dir: Vec2, t: f32) -> Vec2 {
        origin + dir * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_head_on_hit_distance() {
        let origin = Vec2::new(0.0, 0.0);
        let dir = Vec2::new(100.0, 0.0);
        let t = RayIntersection::circle(origin, dir, Vec2::new(50.0, 0.0), 10.0).unwrap();
        let hit = RayIntersection::point_at(origin, dir, t);
        assert!((hit.distance(origin) - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_circle_miss_when_discriminant_negative() {
        let t = RayIntersection::circle(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 20.0),
            10.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_circle_behind_origin_misses() {
        let t = RayIntersection::circle(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(-50.0, 0.0),
            10.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_circle_origin_inside_is_a_miss() {
        let t = RayIntersection::circle(
            Vec2::new(50.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 0.0),
            10.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_closest_edge_picks_smallest_t() {
        let edges = [
            Segment::new(Vec2::new(30.0, -5.0), Vec2::new(30.0, 5.0)),
            Segment::new(Vec2::new(10.0, -5.0), Vec2::new(10.0, 5.0)),
            Segment::new(Vec2::new(20.0, -5.0), Vec2::new(20.0, 5.0)),
        ];
        let t = RayIntersection::closest_edge(Vec2::ZERO, Vec2::new(100.0, 0.0), &edges).unwrap();
        assert!((t - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_closest_edge_none_when_all_miss() {
        let edges = [Segment::new(Vec2::new(10.0, 5.0), Vec2::new(10.0, 15.0))];
        assert!(RayIntersection::closest_edge(Vec2::ZERO, Vec2::new(100.0, 0.0), &edges).is_none());
    }
}
