//! Axis-aligned square regions of the ground plane

use crate::foundation::math::Point2;
use crate::physics::{Quad, Rect};

/// Square region addressed by its southwest corner
///
/// North is toward -z, so the square spans `x..x + size` and
/// `z - size..z` where `(x, z)` is `corner`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    /// Southwest corner (`y` holds world z)
    pub corner: Point2,
    /// Side length
    pub size: f32,
}

impl Square {
    /// Create a square from its southwest corner and side length
    pub fn new(x: f32, z: f32, size: f32) -> Self {
        Self { corner: Point2::new(x, z), size }
    }

    /// Whether the square has a usable, finite, positive extent
    pub fn is_valid(&self) -> bool {
        self.size > 0.0
            && self.size.is_finite()
            && self.corner.x.is_finite()
            && self.corner.y.is_finite()
    }

    /// Axis-aligned bounds
    pub fn rect(&self) -> Rect {
        Rect::from_corners(
            self.corner.x,
            self.corner.y,
            self.corner.x + self.size,
            self.corner.y - self.size,
        )
    }

    /// Corners in SW, NW, NE, SE order
    pub fn to_quad(&self) -> Quad {
        let (x, z, s) = (self.corner.x, self.corner.y, self.size);
        Quad::from_corners(x, z, x, z - s, x + s, z - s, x + s, z)
    }

    /// The four child squares in SW, NW, NE, SE order
    pub fn quadrants(&self) -> [Square; 4] {
        let (x, z) = (self.corner.x, self.corner.y);
        let half = self.size / 2.0;
        [
            Square::new(x, z, half),
            Square::new(x, z - half, half),
            Square::new(x + half, z - half, half),
            Square::new(x + half, z, half),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_extends_north_toward_negative_z() {
        let rect = Square::new(-10.0, 110.0, 120.0).rect();
        assert_eq!(rect, Rect { min_x: -10.0, min_z: -10.0, max_x: 110.0, max_z: 110.0 });
    }

    #[test]
    fn test_quadrants_tile_parent() {
        let parent = Square::new(-10.0, 110.0, 120.0);
        let [sw, nw, ne, se] = parent.quadrants();
        assert_eq!(sw, Square::new(-10.0, 110.0, 60.0));
        assert_eq!(nw, Square::new(-10.0, 50.0, 60.0));
        assert_eq!(ne, Square::new(50.0, 50.0, 60.0));
        assert_eq!(se, Square::new(50.0, 110.0, 60.0));

        let area: f32 = parent.quadrants().iter().map(|q| q.size * q.size).sum();
        assert_relative_eq!(area, parent.size * parent.size);
    }

    #[test]
    fn test_quad_corner_order() {
        let quad = Square::new(0.0, 10.0, 10.0).to_quad();
        assert_eq!(quad.vertices[0], Point2::new(0.0, 10.0));
        assert_eq!(quad.vertices[1], Point2::new(0.0, 0.0));
        assert_eq!(quad.vertices[2], Point2::new(10.0, 0.0));
        assert_eq!(quad.vertices[3], Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_validity() {
        assert!(Square::new(0.0, 0.0, 1.0).is_valid());
        assert!(!Square::new(0.0, 0.0, 0.0).is_valid());
        assert!(!Square::new(0.0, 0.0, -4.0).is_valid());
        assert!(!Square::new(f32::NAN, 0.0, 4.0).is_valid());
    }
}
