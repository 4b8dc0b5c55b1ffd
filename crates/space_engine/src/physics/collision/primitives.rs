//! Primitive collision shapes and intersection algorithms
//!
//! All ground-plane shapes use [`Point2`] with world z in the `y` component.
//! Every predicate treats touching as intersecting.

use crate::foundation::math::{Point2, Vec2, Vec3};

/// Axis-aligned rectangle on the ground plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum x
    pub min_x: f32,
    /// Minimum z
    pub min_z: f32,
    /// Maximum x
    pub max_x: f32,
    /// Maximum z
    pub max_z: f32,
}

impl Rect {
    /// Create a rectangle from any two opposite corners
    pub fn from_corners(x1: f32, z1: f32, x2: f32, z2: f32) -> Self {
        Self {
            min_x: x1.min(x2),
            min_z: z1.min(z2),
            max_x: x1.max(x2),
            max_z: z1.max(z2),
        }
    }

    /// Width along x
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Depth along z
    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }

    /// Check if this rectangle contains a point (boundary included)
    pub fn contains_point(&self, point: Point2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_z
            && point.y <= self.max_z
    }

    /// The point of this rectangle closest to `point`
    pub fn closest_point(&self, point: Point2) -> Point2 {
        Point2::new(
            point.x.clamp(self.min_x, self.max_x),
            point.y.clamp(self.min_z, self.max_z),
        )
    }

    /// Check if a disc touches or overlaps this rectangle
    ///
    /// A negative radius describes no disc and never intersects.
    pub fn intersects_disc(&self, center: Point2, radius: f32) -> bool {
        if radius < 0.0 {
            return false;
        }
        let distance_sq = (self.closest_point(center) - center).magnitude_squared();
        distance_sq <= radius * radius
    }

    /// Corners in (min, min), (min, max), (max, max), (max, min) order
    pub fn to_quad(&self) -> Quad {
        Quad::new([
            Point2::new(self.min_x, self.min_z),
            Point2::new(self.min_x, self.max_z),
            Point2::new(self.max_x, self.max_z),
            Point2::new(self.max_x, self.min_z),
        ])
    }
}

/// True iff the disc at `center` with `radius` touches or overlaps `rect`
pub fn disc_intersects_rect(rect: &Rect, center: Point2, radius: f32) -> bool {
    rect.intersects_disc(center, radius)
}

/// Convex quadrilateral on the ground plane
///
/// Vertices are ordered around the boundary; either winding is accepted.
/// A projected view frustum is the usual source of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Boundary vertices in order
    pub vertices: [Point2; 4],
}

impl Quad {
    /// Create a quad from four ordered vertices
    pub fn new(vertices: [Point2; 4]) -> Self {
        Self { vertices }
    }

    /// Create a quad from four flat (x, z) pairs
    pub fn from_corners(
        x1: f32,
        z1: f32,
        x2: f32,
        z2: f32,
        x3: f32,
        z3: f32,
        x4: f32,
        z4: f32,
    ) -> Self {
        Self::new([
            Point2::new(x1, z1),
            Point2::new(x2, z2),
            Point2::new(x3, z3),
            Point2::new(x4, z4),
        ])
    }

    /// Edge vectors, edge `i` running from vertex `i` to vertex `i + 1`
    fn edges(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..4).map(move |i| self.vertices[(i + 1) % 4] - self.vertices[i])
    }

    /// Project every vertex onto `axis`, returning (min, max)
    fn project(&self, axis: &Vec2) -> (f32, f32) {
        self.vertices.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
            let d = v.coords.dot(axis);
            (lo.min(d), hi.max(d))
        })
    }

    /// Axis-aligned bounds of the quad
    pub fn bounds(&self) -> Rect {
        let first = self.vertices[0];
        let mut rect = Rect::from_corners(first.x, first.y, first.x, first.y);
        for v in &self.vertices[1..] {
            rect.min_x = rect.min_x.min(v.x);
            rect.min_z = rect.min_z.min(v.y);
            rect.max_x = rect.max_x.max(v.x);
            rect.max_z = rect.max_z.max(v.y);
        }
        rect
    }

    /// Check if a point lies inside or on the quad
    pub fn contains_point(&self, point: Point2) -> bool {
        let mut positive = false;
        let mut negative = false;
        for i in 0..4 {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % 4];
            let edge = b - a;
            let to_point = point - a;
            let cross = edge.x * to_point.y - edge.y * to_point.x;
            if cross > 0.0 {
                positive = true;
            } else if cross < 0.0 {
                negative = true;
            }
        }
        !(positive && negative)
    }

    /// Check if this quad touches or overlaps another convex quad
    pub fn intersects(&self, other: &Quad) -> bool {
        // Separating axis theorem: two convex polygons are disjoint iff the
        // projections onto some edge normal do not overlap.
        for edge in self.edges().chain(other.edges()) {
            if edge.magnitude_squared() == 0.0 {
                continue;
            }
            let axis = Vec2::new(-edge.y, edge.x);
            let (a_min, a_max) = self.project(&axis);
            let (b_min, b_max) = other.project(&axis);
            if a_max < b_min || b_max < a_min {
                return false;
            }
        }
        true
    }
}

/// True iff the two convex quadrilaterals touch or overlap
pub fn quad_intersects_quad(a: &Quad, b: &Quad) -> bool {
    a.intersects(b)
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, z: f32, size: f32) -> Quad {
        Rect::from_corners(x, z, x + size, z + size).to_quad()
    }

    #[test]
    fn test_rect_normalizes_corners() {
        let rect = Rect::from_corners(10.0, 5.0, -2.0, -8.0);
        assert_eq!(rect, Rect { min_x: -2.0, min_z: -8.0, max_x: 10.0, max_z: 5.0 });
        assert_eq!(rect.width(), 12.0);
        assert_eq!(rect.depth(), 13.0);
    }

    #[test]
    fn test_disc_inside_rect() {
        let rect = Rect::from_corners(0.0, 0.0, 10.0, 10.0);
        assert!(disc_intersects_rect(&rect, Point2::new(5.0, 5.0), 0.5));
    }

    #[test]
    fn test_disc_touching_edge_counts() {
        let rect = Rect::from_corners(0.0, 0.0, 10.0, 10.0);
        assert!(disc_intersects_rect(&rect, Point2::new(13.0, 5.0), 3.0));
        assert!(!disc_intersects_rect(&rect, Point2::new(13.01, 5.0), 3.0));
    }

    #[test]
    fn test_disc_near_corner() {
        let rect = Rect::from_corners(0.0, 0.0, 10.0, 10.0);
        // Distance to the (10, 10) corner is sqrt(8) ~ 2.83
        assert!(disc_intersects_rect(&rect, Point2::new(12.0, 12.0), 3.0));
        assert!(!disc_intersects_rect(&rect, Point2::new(12.0, 12.0), 2.5));
    }

    #[test]
    fn test_zero_radius_disc_is_point_test() {
        let rect = Rect::from_corners(0.0, 0.0, 10.0, 10.0);
        assert!(disc_intersects_rect(&rect, Point2::new(10.0, 0.0), 0.0));
        assert!(!disc_intersects_rect(&rect, Point2::new(10.5, 0.0), 0.0));
    }

    #[test]
    fn test_negative_radius_disc_never_intersects() {
        let rect = Rect::from_corners(0.0, 0.0, 10.0, 10.0);
        assert!(!disc_intersects_rect(&rect, Point2::new(5.0, 5.0), -1.0));
        assert!(!disc_intersects_rect(&rect, Point2::new(13.0, 5.0), -6.0));
        assert!(disc_intersects_rect(&rect, Point2::new(13.0, 5.0), 6.0));
    }

    #[test]
    fn test_overlapping_quads() {
        assert!(quad_intersects_quad(&square(0.0, 0.0, 10.0), &square(5.0, 5.0, 10.0)));
    }

    #[test]
    fn test_disjoint_quads() {
        assert!(!quad_intersects_quad(&square(0.0, 0.0, 10.0), &square(20.0, 0.0, 5.0)));
    }

    #[test]
    fn test_touching_quads_intersect() {
        assert!(quad_intersects_quad(&square(0.0, 0.0, 10.0), &square(10.0, 0.0, 10.0)));
    }

    #[test]
    fn test_contained_quad_intersects() {
        assert!(quad_intersects_quad(&square(0.0, 0.0, 100.0), &square(40.0, 40.0, 1.0)));
        assert!(quad_intersects_quad(&square(40.0, 40.0, 1.0), &square(0.0, 0.0, 100.0)));
    }

    #[test]
    fn test_winding_does_not_matter() {
        let ccw = Quad::from_corners(0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0);
        let cw = Quad::from_corners(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0);
        let probe = square(9.0, 9.0, 3.0);
        assert!(ccw.intersects(&probe));
        assert!(cw.intersects(&probe));
    }

    #[test]
    fn test_trapezoid_frustum_separated_diagonally() {
        // Frustum opening toward -z with apex near the origin
        let frustum = Quad::from_corners(-5.0, -5.0, -250.0, -250.0, 250.0, -250.0, 5.0, -5.0);
        // Square beside the frustum's slanted left edge: AABBs overlap, shapes do not
        assert!(!frustum.intersects(&square(-60.0, -40.0, 10.0)));
        // Square straight ahead
        assert!(frustum.intersects(&square(-5.0, -100.0, 10.0)));
        // Square behind the camera
        assert!(!frustum.intersects(&square(-5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_quad_contains_point_and_bounds() {
        let quad = Quad::from_corners(-5.0, -5.0, -250.0, -250.0, 250.0, -250.0, 5.0, -5.0);
        assert!(quad.contains_point(Point2::new(0.0, -100.0)));
        assert!(!quad.contains_point(Point2::new(0.0, 0.0)));
        assert_eq!(quad.bounds(), Rect::from_corners(-250.0, -250.0, 250.0, -5.0));
    }

    #[test]
    fn test_sphere_intersection() {
        let a = BoundingSphere::new(Vec3::new(0.0, 0.0, 0.0), 2.0);
        let b = BoundingSphere::new(Vec3::new(5.0, 0.0, 0.0), 3.0);
        let c = BoundingSphere::new(Vec3::new(0.0, 5.1, 0.0), 3.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
