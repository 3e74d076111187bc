// src/geometry.rs

pub use glam::Vec2;

/// Below this |cross(segment, ray)| the ray is treated as parallel and misses.
pub const RAY_PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Intersects the ray `origin + t * dir` (t >= 0) with the segment
/// `seg_start + u * (seg_end - seg_start)` (u in [0, 1]).
///
/// Returns the ray parameter `t` of the hit. Rays closer to parallel than
/// [`RAY_PARALLEL_EPSILON`] never hit, even when collinear with the segment.
#[inline]
pub fn ray_segment_intersection(
    origin: Vec2,
    dir: Vec2,
    seg_start: Vec2,
    seg_end: Vec2,
) -> Option<f32> {
    let to_origin = origin - seg_start;
    let seg = seg_end - seg_start;
    let dir_perp = dir.perp();

    let denominator = seg.dot(dir_perp);
    if denominator.abs() < RAY_PARALLEL_EPSILON {
        return None;
    }

    let t = seg.perp_dot(to_origin) / denominator;
    let u = to_origin.dot(dir_perp) / denominator;

    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}

/// Angular spacing between neighbouring rays of an evenly spread fan.
pub fn angle_step_degrees(num_rays: usize) -> f32 {
    360.0 / num_rays as f32
}

/// Diagonal of the drawable area, rounded up. Used as the unobstructed ray length.
pub fn max_ray_distance(width: u32, height: u32) -> f32 {
    let (w, h) = (width as f64, height as f64);
    (w * w + h * h).sqrt().ceil() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_vertical_segment() {
        let t = ray_segment_intersection(
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 10.0),
        );
        assert!((t.unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ray_behind_origin_misses() {
        let t = ray_segment_intersection(
            Vec2::new(10.0, 5.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 10.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_past_segment_end_misses() {
        let t = ray_segment_intersection(
            Vec2::new(0.0, 11.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 10.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_segment_endpoints_are_inclusive() {
        let origin = Vec2::new(0.0, 10.0);
        let dir = Vec2::new(1.0, 0.0);
        let t = ray_segment_intersection(origin, dir, Vec2::new(5.0, 0.0), Vec2::new(5.0, 10.0));
        assert!((t.unwrap() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_parallel_ray_never_hits() {
        // Collinear: every u/t would be valid if the parallel check were skipped.
        let collinear = ray_segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(8.0, 0.0),
        );
        assert!(collinear.is_none());

        let offset = ray_segment_intersection(
            Vec2::new(0.0, 1.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(8.0, 0.0),
        );
        assert!(offset.is_none());
    }

    #[test]
    fn test_max_ray_distance_rounds_up_diagonal() {
        assert_eq!(max_ray_distance(3, 4), 5.0);
        // sqrt(1200^2 + 800^2) = 1442.22...
        assert_eq!(max_ray_distance(1200, 800), 1443.0);
    }
}
