//! Physics module
//!
//! Geometry predicates for culling and broad-phase queries, and the exact
//! sphere test used for craft collision.

pub mod collision;

pub use collision::{BoundingSphere, Quad, Rect, disc_intersects_rect, quad_intersects_quad};
