//! Collision detection primitives
//!
//! # Key Types
//!
//! - [`Rect`] - Axis-aligned rectangle on the ground plane
//! - [`Quad`] - Convex quadrilateral on the ground plane (projected frustum)
//! - [`BoundingSphere`] - World-space sphere for the exact collision test
//!
//! The two ground-plane predicates, [`disc_intersects_rect`] and
//! [`quad_intersects_quad`], are pure functions; the quadtree build and both
//! traversals are driven entirely by them.

pub mod primitives;

pub use primitives::{BoundingSphere, Quad, Rect, disc_intersects_rect, quad_intersects_quad};
