//! Spatial partitioning data structures
//!
//! Provides a region quadtree over the (x, z) ground plane for frustum
//! culling and broad-phase proximity queries against a static asteroid field.

mod quadtree;
mod spatial_query;
mod square;

pub use quadtree::{NodeId, QuadNode, Quadtree, QuadtreeConfig, QuadtreeStats, ROOT};
pub use spatial_query::{LinearScan, SpatialQuery};
pub use square::Square;
