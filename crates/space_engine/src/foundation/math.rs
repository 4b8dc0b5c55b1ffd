//! Math utilities and types
//!
//! The asteroid field lives in 3D, but every spatial query runs on the
//! (x, z) ground plane. Ground-plane points reuse nalgebra's 2D types with
//! the world z coordinate stored in the `y` component.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 2D point type (ground plane: `x` is world x, `y` is world z)
pub type Point2 = nalgebra::Point2<f32>;

/// Project a world-space position onto the ground plane
#[inline]
pub fn to_ground(position: &Vec3) -> Point2 {
    Point2::from(position.xz())
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}
